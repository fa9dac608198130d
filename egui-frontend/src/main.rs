use eframe::egui;
use log::{error, info};

use budget_simulator_egui::backend::{Backend, SimulatorConfig};
use budget_simulator_egui::ui::BudgetSimulatorApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Federal Budget Simulator egui application");

    let config = SimulatorConfig::default();
    let app_name = config.window_title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            match Backend::new(&config) {
                Ok(backend) => {
                    info!("Successfully initialized budget backend");
                    Ok(Box::new(BudgetSimulatorApp::new(cc, backend, &config.window_title)))
                }
                Err(e) => {
                    error!("Failed to initialize app: {:#}", e);
                    Err(format!("Failed to initialize app: {:#}", e).into())
                }
            }
        }),
    )
}

//! # Pie Chart Renderer
//!
//! Draws a `PieChartData` with egui painting primitives: wedges as convex
//! polygons, category names outside the pie and percentages inside each wedge.

use std::f32::consts::FRAC_PI_2;

use eframe::egui;

use super::calculations::{PieChartData, PieSlice};
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Configuration for pie chart appearance
#[derive(Debug, Clone)]
pub struct PieChartConfig {
    /// Pie radius as a fraction of the smaller side of the drawing area
    pub radius_fraction: f32,
    /// Distance of category labels from the center, in radii
    pub label_distance: f32,
    /// Distance of percentage labels from the center, in radii
    pub percentage_distance: f32,
    /// Approximate arc length of one polygon edge, in pixels
    pub segment_length: f32,
    pub title_font_size: f32,
    pub label_font_size: f32,
    pub percentage_font_size: f32,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            radius_fraction: 0.32,
            label_distance: 1.1,
            percentage_distance: 0.6,
            segment_length: 3.0,
            title_font_size: 16.0,
            label_font_size: 12.0,
            percentage_font_size: 11.0,
        }
    }
}

/// Pie chart component
#[derive(Debug, Default)]
pub struct PieChart {
    config: PieChartConfig,
}

impl PieChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the chart title and the pie into the remaining space of `ui`
    pub fn render(&self, ui: &mut egui::Ui, data: &PieChartData) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&data.title)
                .font(egui::FontId::new(self.config.title_font_size, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_HEADING));

            let (rect, _response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
            let painter = ui.painter_at(rect);

            if data.is_empty() {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "No data to chart",
                    egui::FontId::new(self.config.label_font_size, egui::FontFamily::Proportional),
                    colors::TEXT_SECONDARY,
                );
                return;
            }

            let center = rect.center();
            let radius = rect.width().min(rect.height()) * self.config.radius_fraction;

            for (index, slice) in data.slices.iter().enumerate() {
                self.draw_wedge(&painter, center, radius, slice, CURRENT_THEME.chart_color(index));
            }

            for slice in &data.slices {
                self.draw_labels(&painter, center, radius, slice);
            }
        });
    }

    /// Draw one wedge, split into chunks of at most a quarter turn so every
    /// polygon handed to the tessellator stays convex
    fn draw_wedge(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        radius: f32,
        slice: &PieSlice,
        color: egui::Color32,
    ) {
        let start = slice.start_angle as f32;
        let sweep = slice.sweep() as f32;
        if sweep <= 0.0 {
            return;
        }

        let chunks = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
        let chunk_sweep = sweep / chunks as f32;
        let segments = ((chunk_sweep * radius / self.config.segment_length).ceil() as usize).clamp(2, 64);
        let step = chunk_sweep / segments as f32;

        for chunk in 0..chunks {
            let chunk_start = start + chunk_sweep * chunk as f32;

            let mut points = Vec::with_capacity(segments + 2);
            points.push(center);
            for i in 0..=segments {
                points.push(point_on_circle(center, radius, chunk_start + step * i as f32));
            }

            painter.add(egui::Shape::convex_polygon(points, color, egui::Stroke::NONE));
        }
    }

    fn draw_labels(&self, painter: &egui::Painter, center: egui::Pos2, radius: f32, slice: &PieSlice) {
        let mid = slice.mid_angle() as f32;

        // Names sit outside the pie, anchored away from it
        let anchor = if mid.cos() >= 0.0 {
            egui::Align2::LEFT_CENTER
        } else {
            egui::Align2::RIGHT_CENTER
        };
        painter.text(
            point_on_circle(center, radius * self.config.label_distance, mid),
            anchor,
            &slice.label,
            egui::FontId::new(self.config.label_font_size, egui::FontFamily::Proportional),
            colors::TEXT_PRIMARY,
        );

        painter.text(
            point_on_circle(center, radius * self.config.percentage_distance, mid),
            egui::Align2::CENTER_CENTER,
            slice.percentage_label(),
            egui::FontId::new(self.config.percentage_font_size, egui::FontFamily::Proportional),
            egui::Color32::WHITE,
        );
    }
}

/// Angles are counter-clockwise from 3 o'clock; screen y grows downwards
fn point_on_circle(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    egui::pos2(center.x + radius * angle.cos(), center.y - radius * angle.sin())
}

//! # Theme Configuration
//!
//! Centralized color configuration for the budget simulator. All visual styling
//! should use these constants so the window, charts and dialogs stay consistent.

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Dialog accent colors, one per dialog variant
    pub dialog: DialogColors,
    /// Pie chart slice colors, cycled in display order
    pub chart_palette: [Color32; 10],
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (main content)
    pub primary: Color32,
    /// Secondary text color (placeholders, hints)
    pub secondary: Color32,
    /// Heading text color
    pub heading: Color32,
}

/// Dialog colors
#[derive(Debug, Clone)]
pub struct DialogColors {
    pub error: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub background: Color32,
    /// Dimmed overlay drawn behind an open dialog
    pub overlay: Color32,
}

/// The current active theme. The chart palette follows matplotlib's default
/// color cycle so the breakdowns look like the familiar desktop charts.
pub const CURRENT_THEME: Theme = Theme {
    typography: TypographyColors {
        primary: Color32::from_rgb(60, 60, 60),
        secondary: Color32::from_rgb(120, 120, 120),
        heading: Color32::from_rgb(40, 40, 70),
    },
    dialog: DialogColors {
        error: Color32::from_rgb(220, 50, 50),
        success: Color32::from_rgb(34, 139, 34),
        warning: Color32::from_rgb(230, 140, 0),
        background: Color32::WHITE,
        overlay: Color32::from_rgba_premultiplied(0, 0, 0, 128),
    },
    chart_palette: [
        Color32::from_rgb(31, 119, 180),  // Blue
        Color32::from_rgb(255, 127, 14),  // Orange
        Color32::from_rgb(44, 160, 44),   // Green
        Color32::from_rgb(214, 39, 40),   // Red
        Color32::from_rgb(148, 103, 189), // Purple
        Color32::from_rgb(140, 86, 75),   // Brown
        Color32::from_rgb(227, 119, 194), // Pink
        Color32::from_rgb(127, 127, 127), // Gray
        Color32::from_rgb(188, 189, 34),  // Olive
        Color32::from_rgb(23, 190, 207),  // Cyan
    ],
};

impl Theme {
    /// Slice color for the slice at `index`, wrapping around the palette
    pub fn chart_color(&self, index: usize) -> Color32 {
        self.chart_palette[index % self.chart_palette.len()]
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;

    pub const DIALOG_ERROR: Color32 = CURRENT_THEME.dialog.error;
    pub const DIALOG_SUCCESS: Color32 = CURRENT_THEME.dialog.success;
    pub const DIALOG_WARNING: Color32 = CURRENT_THEME.dialog.warning;
    pub const DIALOG_BACKGROUND: Color32 = CURRENT_THEME.dialog.background;
    pub const DIALOG_OVERLAY: Color32 = CURRENT_THEME.dialog.overlay;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_color_wraps_around_palette() {
        assert_eq!(CURRENT_THEME.chart_color(0), Color32::from_rgb(31, 119, 180));
        assert_eq!(CURRENT_THEME.chart_color(10), CURRENT_THEME.chart_color(0));
        assert_eq!(CURRENT_THEME.chart_color(13), CURRENT_THEME.chart_color(3));
    }
}

use eframe::egui::Color32;
use purescope::color::Rgb;

pub mod panels;
pub mod plot;
pub mod table;

/// Which view fills the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Table,
    ParallelCoordinates,
}

pub fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

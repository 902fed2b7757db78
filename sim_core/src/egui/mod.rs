mod egui_painter;
mod egui_surface;

pub use egui_painter::*;
pub use egui_surface::*;

use egui::Color32;
use sim_config::Rgba;

pub(crate) fn to_color32(rgba: Rgba) -> Color32 {
    let [r, g, b, a] = rgba.to_srgba_unmultiplied();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub(crate) fn to_egui_rect(rect: crate::painter::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y),
        egui::vec2(rect.width, rect.height),
    )
}

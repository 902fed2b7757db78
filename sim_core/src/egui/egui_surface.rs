use egui::{Frame, Id, RichText};
use sim_config::Palette;

use crate::painter::{MenuSurface, Painter, Rect};

use super::{to_color32, EguiPainter};

const TITLE_SIZE: f32 = 16.;

/// [MenuSurface] drawing egui windows into a [egui::Context].
///
/// egui windows are dragged by their title bar, which stands in for the drag
/// strip.
pub struct EguiSurface {
    ctx: egui::Context,
    id: Id,
    palette: Palette,
}

impl EguiSurface {
    pub fn new(ctx: egui::Context, palette: Palette) -> Self {
        Self {
            ctx,
            id: Id::new("sim_menu"),
            palette,
        }
    }
}

impl MenuSurface for EguiSurface {
    fn window(
        &mut self,
        title: &str,
        rect: Rect,
        _drag_strip_height: f32,
        contents: &mut dyn FnMut(&mut dyn Painter),
    ) -> Rect {
        let palette = self.palette;
        let frame = Frame::window(&self.ctx.style()).fill(to_color32(palette.background));

        let response = egui::Window::new(RichText::new(title).size(TITLE_SIZE).strong())
            .id(self.id)
            .default_pos(egui::pos2(rect.x, rect.y))
            .fixed_size(egui::vec2(rect.width, rect.height))
            .collapsible(false)
            .resizable(false)
            .frame(frame)
            .show(&self.ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(to_color32(palette.text));
                ui.visuals_mut().selection.bg_fill = to_color32(palette.accent);
                contents(&mut EguiPainter::new(ui, &palette));
            });

        match response {
            Some(inner) => {
                let min = inner.response.rect.min;
                Rect::new(min.x, min.y, rect.width, rect.height)
            }
            None => rect,
        }
    }
}

use egui::{Button, Label, RichText, Sense, Slider, TextEdit, Ui};
use sim_config::Palette;

use crate::painter::{Fill, Painter, PointerEvent, Rect, TrackResponse};

use super::{to_color32, to_egui_rect};

const LABEL_SIZE: f32 = 12.;
const HEADER_SIZE: f32 = 14.;
const ROUNDING: f32 = 2.;

/// [Painter] drawing into an egui [Ui].
pub struct EguiPainter<'a> {
    ui: &'a mut Ui,
    palette: &'a Palette,
}

impl<'a> EguiPainter<'a> {
    pub fn new(ui: &'a mut Ui, palette: &'a Palette) -> Self {
        Self { ui, palette }
    }

    fn row_height(&self) -> f32 {
        self.ui.spacing().interact_size.y
    }
}

impl Painter for EguiPainter<'_> {
    fn row(&mut self, contents: &mut dyn FnMut(&mut dyn Painter)) {
        let palette = self.palette;
        self.ui
            .horizontal(|ui| contents(&mut EguiPainter::new(ui, palette)));
    }

    fn column(&mut self, contents: &mut dyn FnMut(&mut dyn Painter)) {
        let palette = self.palette;
        self.ui
            .vertical(|ui| contents(&mut EguiPainter::new(ui, palette)));
    }

    fn space(&mut self, amount: f32) {
        self.ui.add_space(amount);
    }

    fn label(&mut self, text: &str) {
        self.ui.label(RichText::new(text).size(LABEL_SIZE));
    }

    fn fixed_label(&mut self, text: &str, width: f32) {
        let height = self.row_height();
        self.ui.add_sized(
            [width, height],
            Label::new(RichText::new(text).size(LABEL_SIZE)),
        );
    }

    fn header(&mut self, text: &str) {
        self.ui
            .label(RichText::new(text).size(HEADER_SIZE).strong());
    }

    fn toggle(&mut self, value: bool, text: &str) -> bool {
        let mut value = value;
        self.ui.checkbox(&mut value, text);
        value
    }

    fn selectable(&mut self, selected: bool, text: &str) -> bool {
        let fill = if selected {
            self.palette.active_tab
        } else {
            self.palette.tab
        };

        let response = self
            .ui
            .add(Button::new(text).selected(selected).fill(to_color32(fill)));

        selected ^ response.clicked()
    }

    fn horizontal_slider(&mut self, value: f32, min: f32, max: f32, width: f32) -> f32 {
        let mut value = value;
        self.ui.spacing_mut().slider_width = width;
        self.ui
            .add(Slider::new(&mut value, min..=max).show_value(false));
        value
    }

    fn button(&mut self, text: &str, width: Option<f32>) -> bool {
        match width {
            Some(width) => {
                let height = self.row_height();
                self.ui.add_sized([width, height], Button::new(text)).clicked()
            }
            None => self.ui.button(text).clicked(),
        }
    }

    fn text_field(&mut self, text: &str, width: f32) -> String {
        let mut text = text.to_string();
        self.ui
            .add(TextEdit::singleline(&mut text).desired_width(width));
        text
    }

    fn track(&mut self, width: f32, height: f32) -> TrackResponse {
        let (rect, response) = self
            .ui
            .allocate_exact_size(egui::vec2(width, height), Sense::click_and_drag());

        let pressed = self.ui.input(|input| input.pointer.primary_pressed());
        let pointer = response.interact_pointer_pos();

        let event = if pressed && response.is_pointer_button_down_on() {
            pointer.map(|pos| PointerEvent::Down { x: pos.x, y: pos.y })
        } else if response.drag_stopped() || response.clicked() {
            Some(PointerEvent::Up)
        } else if response.dragged() {
            pointer.map(|pos| PointerEvent::Drag { x: pos.x, y: pos.y })
        } else {
            None
        };

        TrackResponse {
            rect: Rect::new(rect.min.x, rect.min.y, rect.width(), rect.height()),
            event,
        }
    }

    fn fill_rect(&mut self, rect: Rect, fill: Fill) {
        let color = match fill {
            Fill::Track => self.ui.visuals().widgets.inactive.bg_fill,
            Fill::Selection => to_color32(self.palette.accent).gamma_multiply(0.4),
            Fill::Thumb => to_color32(self.palette.accent),
        };

        self.ui
            .painter()
            .rect_filled(to_egui_rect(rect), ROUNDING, color);
    }
}

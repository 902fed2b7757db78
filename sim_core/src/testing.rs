//! A [Painter] and [MenuSurface] driven by a script instead of a real GUI.

use std::collections::HashMap;

use crate::painter::{Fill, MenuSurface, Painter, PointerEvent, Rect, TrackResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum Drawn {
    Window(String),
    Space(f32),
    Label(String),
    Header(String),
    Toggle(String, bool),
    Selectable(String, bool),
    Slider(f32),
    Button(String),
    TextField(String),
    Track,
    Fill(Fill),
}

/// Records what was drawn and plays back user input for the current frame.
///
/// Input queued with [ScriptedPainter::click] and friends applies to the next
/// frame only; [ScriptedPainter::next_frame] clears whatever went unused.
#[derive(Default)]
pub struct ScriptedPainter {
    clicks: Vec<String>,
    slide: Option<f32>,
    text_edits: HashMap<usize, String>,
    pointer: Option<PointerEvent>,
    track_events: HashMap<usize, PointerEvent>,
    moved_window: Option<Rect>,

    text_fields_seen: usize,
    tracks_seen: usize,
    drawn: Vec<Drawn>,
    last_frame: Vec<Drawn>,
}

impl ScriptedPainter {
    /// Click the next button, toggle or tab showing `text`.
    pub fn click(&mut self, text: &str) {
        self.clicks.push(text.to_string());
    }

    /// Move the next slider to `value`.
    pub fn slide(&mut self, value: f32) {
        self.slide = Some(value);
    }

    /// Replace the content of the `index`th text field of the frame.
    pub fn type_text(&mut self, index: usize, text: &str) {
        self.text_edits.insert(index, text.to_string());
    }

    /// Report `event` on the next track.
    pub fn pointer(&mut self, event: PointerEvent) {
        self.pointer = Some(event);
    }

    /// Report `event` on the `index`th track of the frame.
    pub fn pointer_on(&mut self, index: usize, event: PointerEvent) {
        self.track_events.insert(index, event);
    }

    /// Drag the window to `rect`.
    pub fn move_window(&mut self, rect: Rect) {
        self.moved_window = Some(rect);
    }

    pub fn next_frame(&mut self) {
        self.clicks.clear();
        self.slide = None;
        self.text_edits.clear();
        self.pointer = None;
        self.track_events.clear();
        self.moved_window = None;
        self.text_fields_seen = 0;
        self.tracks_seen = 0;
        self.last_frame = std::mem::take(&mut self.drawn);
    }

    /// Everything drawn in the frame before the last [ScriptedPainter::next_frame].
    pub fn last_frame(&self) -> &[Drawn] {
        &self.last_frame
    }

    fn take_click(&mut self, text: &str) -> bool {
        match self.clicks.iter().position(|click| click == text) {
            Some(index) => {
                self.clicks.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Painter for ScriptedPainter {
    fn row(&mut self, contents: &mut dyn FnMut(&mut dyn Painter)) {
        contents(self);
    }

    fn column(&mut self, contents: &mut dyn FnMut(&mut dyn Painter)) {
        contents(self);
    }

    fn space(&mut self, amount: f32) {
        self.drawn.push(Drawn::Space(amount));
    }

    fn label(&mut self, text: &str) {
        self.drawn.push(Drawn::Label(text.to_string()));
    }

    fn fixed_label(&mut self, text: &str, _width: f32) {
        self.drawn.push(Drawn::Label(text.to_string()));
    }

    fn header(&mut self, text: &str) {
        self.drawn.push(Drawn::Header(text.to_string()));
    }

    fn toggle(&mut self, value: bool, text: &str) -> bool {
        self.drawn.push(Drawn::Toggle(text.to_string(), value));
        value ^ self.take_click(text)
    }

    fn selectable(&mut self, selected: bool, text: &str) -> bool {
        self.drawn.push(Drawn::Selectable(text.to_string(), selected));
        selected ^ self.take_click(text)
    }

    fn horizontal_slider(&mut self, value: f32, _min: f32, _max: f32, _width: f32) -> f32 {
        self.drawn.push(Drawn::Slider(value));
        self.slide.take().unwrap_or(value)
    }

    fn button(&mut self, text: &str, _width: Option<f32>) -> bool {
        self.drawn.push(Drawn::Button(text.to_string()));
        self.take_click(text)
    }

    fn text_field(&mut self, text: &str, _width: f32) -> String {
        self.drawn.push(Drawn::TextField(text.to_string()));

        let index = self.text_fields_seen;
        self.text_fields_seen += 1;

        self.text_edits
            .remove(&index)
            .unwrap_or_else(|| text.to_string())
    }

    fn track(&mut self, width: f32, height: f32) -> TrackResponse {
        self.drawn.push(Drawn::Track);

        let index = self.tracks_seen;
        self.tracks_seen += 1;

        let event = self
            .track_events
            .remove(&index)
            .or_else(|| self.pointer.take());

        TrackResponse {
            rect: Rect::new(0., 0., width, height),
            event,
        }
    }

    fn fill_rect(&mut self, _rect: Rect, fill: Fill) {
        self.drawn.push(Drawn::Fill(fill));
    }
}

impl MenuSurface for ScriptedPainter {
    fn window(
        &mut self,
        title: &str,
        rect: Rect,
        _drag_strip_height: f32,
        contents: &mut dyn FnMut(&mut dyn Painter),
    ) -> Rect {
        self.drawn.push(Drawn::Window(title.to_string()));
        contents(self);
        self.moved_window.take().unwrap_or(rect)
    }
}

//! The host's immediate-mode drawing primitives, as seen by the menu.
//!
//! Everything the menu draws goes through these two traits, so the same
//! controller runs against egui in the viewer and against a scripted painter in
//! tests.

/// An axis-aligned rectangle in host screen units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Primary pointer button activity over a track allocated with [Painter::track].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The button went down inside the track.
    Down { x: f32, y: f32 },
    /// The pointer moved while the button is held, after a `Down` on this track.
    Drag { x: f32, y: f32 },
    /// The button was released.
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackResponse {
    pub rect: Rect,
    pub event: Option<PointerEvent>,
}

/// What a filled box represents; the host picks the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Track,
    Selection,
    Thumb,
}

/// Layout and widget primitives available inside the menu window.
///
/// Every call draws for the current frame only. Calls that take user input
/// return the value after this frame's interaction.
pub trait Painter {
    /// Lay out everything drawn by `contents` left to right.
    fn row(&mut self, contents: &mut dyn FnMut(&mut dyn Painter));

    /// Lay out everything drawn by `contents` top to bottom.
    fn column(&mut self, contents: &mut dyn FnMut(&mut dyn Painter));

    fn space(&mut self, amount: f32);

    fn label(&mut self, text: &str);

    /// A label padded or clipped to `width`.
    fn fixed_label(&mut self, text: &str, width: f32);

    /// Emphasized text.
    fn header(&mut self, text: &str);

    /// A checkbox-style toggle. Returns the new state.
    fn toggle(&mut self, value: bool, text: &str) -> bool;

    /// A button-style toggle, as used for tabs. Returns the new state.
    fn selectable(&mut self, selected: bool, text: &str) -> bool;

    /// A horizontal slider showing `value` in `min..=max`. Returns the slider's value.
    fn horizontal_slider(&mut self, value: f32, min: f32, max: f32, width: f32) -> f32;

    /// Returns true if the button was clicked this frame.
    fn button(&mut self, text: &str, width: Option<f32>) -> bool;

    /// A single line text field showing `text`. Returns the field's content,
    /// which equals `text` unless the user edited it this frame.
    fn text_field(&mut self, text: &str, width: f32) -> String;

    /// Allocate a `width` x `height` area and report pointer activity on it.
    fn track(&mut self, width: f32, height: f32) -> TrackResponse;

    fn fill_rect(&mut self, rect: Rect, fill: Fill);
}

/// The host's top-level drawing entry point.
pub trait MenuSurface {
    /// Draw a movable window at `rect`, calling `contents` for its body.
    ///
    /// The window can be dragged by a strip `drag_strip_height` tall across its
    /// top. Returns the window's rectangle after this frame's dragging.
    fn window(
        &mut self,
        title: &str,
        rect: Rect,
        drag_strip_height: f32,
        contents: &mut dyn FnMut(&mut dyn Painter),
    ) -> Rect;
}

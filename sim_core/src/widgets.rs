use sim_config::MenuConfig;
use sim_input::MenuKey;
use tracing::debug;

use crate::{
    painter::{Fill, Painter, PointerEvent, Rect},
    range::{clamp, RangeHandle, RangeTrack, RangeValue},
    state::WidgetStates,
};

pub const LISTENING_TEXT: &str = "Press any key...";

const RANGE_TRACK_WIDTH: f32 = 200.;
const RANGE_TRACK_HEIGHT: f32 = 20.;
const RANGE_THUMB_WIDTH: f32 = 10.;

/// Fixed widths of the widget rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub label_width: f32,
    pub field_width: f32,
    pub number_field_width: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::from(&MenuConfig::default())
    }
}

impl From<&MenuConfig> for Layout {
    fn from(config: &MenuConfig) -> Self {
        Self {
            label_width: config.label_width,
            field_width: config.field_width,
            number_field_width: config.number_field_width,
        }
    }
}

/// Everything widgets remember between frames.
#[derive(Debug, Default)]
pub struct MenuSession {
    pub states: WidgetStates,
    pub layout: Layout,

    /// The keybind identifier waiting for a key press, if any.
    pub listening_for: Option<String>,
    /// The dropdown identifier whose options are showing, if any.
    pub open_dropdown: Option<String>,
    /// The range slider handle being dragged, if any.
    pub dragging: Option<(String, RangeHandle)>,
}

impl MenuSession {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    pub(crate) fn start_listening(&mut self, id: &str) {
        if let Some(previous) = self.listening_for.replace(id.to_string()) {
            debug!(id = %previous, "Keybind capture cancelled");
        }
        debug!(id, "Keybind capture started");
    }

    pub(crate) fn stop_listening(&mut self) {
        if let Some(id) = self.listening_for.take() {
            debug!(id = %id, "Keybind capture cancelled");
        }
    }
}

/// Parse a number typed into a text field. Anything that isn't a finite number
/// is rejected.
pub(crate) fn parse_number(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|value| value.is_finite())
}

/// Widget calls available to tab contents.
///
/// Each call draws its widget for this frame and returns the widget's current
/// value. Stateful widgets are keyed by an identifier: the first call with a new
/// identifier starts from the given initial value, and later calls ignore it.
pub struct Widgets<'a> {
    session: &'a mut MenuSession,
    painter: &'a mut dyn Painter,
}

impl<'a> Widgets<'a> {
    pub fn new(session: &'a mut MenuSession, painter: &'a mut dyn Painter) -> Self {
        Self { session, painter }
    }

    /// An ON/OFF toggle.
    pub fn add_switch(&mut self, label: &str, id: &str, initial: bool) -> bool {
        let label_width = self.session.layout.label_width;
        let mut value = self.session.states.switches.get_or_insert(id, initial);

        self.painter.row(&mut |p| {
            p.fixed_label(label, label_width);
            value = p.toggle(value, if value { "ON" } else { "OFF" });
        });

        self.session.states.switches.set(id, value);
        value
    }

    /// A slider with a text field beside it.
    ///
    /// Dragging the slider stays within `min..=max`, but a number typed into the
    /// field is taken as is, even outside the bounds.
    pub fn add_slider(&mut self, label: &str, id: &str, initial: f32, min: f32, max: f32) -> f32 {
        let layout = self.session.layout;
        let mut value = self.session.states.sliders.get_or_insert(id, initial);

        self.painter.row(&mut |p| {
            p.fixed_label(label, layout.label_width);

            let shown = clamp(value, min, max);
            let slid = clamp(
                p.horizontal_slider(shown, min, max, layout.field_width),
                min,
                max,
            );
            if slid != shown {
                value = slid;
            }

            let text = format!("{:.2}", value);
            let typed = p.text_field(&text, layout.number_field_width);
            if typed != text {
                if let Some(parsed) = parse_number(&typed) {
                    value = parsed;
                }
            }
        });

        self.session.states.sliders.set(id, value);
        value
    }

    /// A button showing the selected option that opens a list of all options.
    ///
    /// Only one dropdown is open at a time; opening this one closes any other.
    pub fn add_dropdown(&mut self, label: &str, id: &str, options: &[&str], initial: usize) -> usize {
        let layout = self.session.layout;
        let mut selected = self.session.states.dropdowns.get_or_insert(id, initial);
        let shown = options
            .get(selected)
            .or_else(|| options.last())
            .copied()
            .unwrap_or_default();

        let mut clicked = false;
        self.painter.row(&mut |p| {
            p.fixed_label(label, layout.label_width);
            clicked = p.button(shown, Some(layout.field_width));
        });

        if clicked {
            if self.session.open_dropdown.as_deref() == Some(id) {
                debug!(id, "Dropdown closed");
                self.session.open_dropdown = None;
            } else {
                debug!(id, "Dropdown opened");
                self.session.open_dropdown = Some(id.to_string());
            }
        }

        if self.session.open_dropdown.as_deref() == Some(id) {
            for (index, option) in options.iter().enumerate() {
                if self.painter.button(option, Some(layout.field_width)) {
                    debug!(id, option = *option, "Dropdown option selected");
                    selected = index;
                    self.session.open_dropdown = None;
                }
            }
        }

        self.session.states.dropdowns.set(id, selected);
        selected
    }

    /// A slider with a min handle and a max handle, plus a text field for each.
    ///
    /// The handles never cross: dragging stops at the other handle, and typing a
    /// min above max (or a max below min) moves the other value along with it.
    pub fn add_min_max_slider(
        &mut self,
        label: &str,
        id: &str,
        initial_min: f32,
        initial_max: f32,
        abs_min: f32,
        abs_max: f32,
    ) -> (f32, f32) {
        let MenuSession {
            states,
            layout,
            dragging,
            ..
        } = &mut *self.session;
        let layout = *layout;

        let mut range = *states
            .ranges
            .get_or_insert_with(id, || RangeValue::new(initial_min, initial_max));

        self.painter.row(&mut |p| {
            p.fixed_label(label, layout.label_width);
            p.column(&mut |p| {
                let track = p.track(RANGE_TRACK_WIDTH, RANGE_TRACK_HEIGHT);
                let rect = track.rect;
                p.fill_rect(rect, Fill::Track);

                let mapping = RangeTrack::new(rect.width, abs_min, abs_max);
                let min_pos = mapping.position(range.min);
                let max_pos = mapping.position(range.max);

                p.fill_rect(
                    Rect::new(rect.x + min_pos, rect.y, max_pos - min_pos, rect.height),
                    Fill::Selection,
                );

                match track.event {
                    Some(PointerEvent::Down { x, y }) if rect.contains(x, y) => {
                        let handle = mapping.nearer_handle(x - rect.x, min_pos, max_pos);
                        *dragging = Some((id.to_string(), handle));
                    }
                    Some(PointerEvent::Up) => {
                        *dragging = None;
                    }
                    Some(PointerEvent::Drag { x, .. }) => {
                        if let Some((dragged, handle)) = dragging.as_ref() {
                            if dragged.as_str() == id {
                                let value = mapping.value_at(x - rect.x);
                                range.drag(*handle, value, abs_min, abs_max);
                            }
                        }
                    }
                    _ => {}
                }

                for pos in [min_pos, max_pos] {
                    p.fill_rect(
                        Rect::new(
                            rect.x + pos - RANGE_THUMB_WIDTH / 2.,
                            rect.y,
                            RANGE_THUMB_WIDTH,
                            rect.height,
                        ),
                        Fill::Thumb,
                    );
                }

                let mut typed_min = None;
                let mut typed_max = None;
                p.row(&mut |p| {
                    let min_text = format!("{:.2}", range.min);
                    let max_text = format!("{:.2}", range.max);

                    let min_input = p.text_field(&min_text, layout.number_field_width);
                    p.space(RANGE_TRACK_WIDTH - 2. * layout.number_field_width);
                    let max_input = p.text_field(&max_text, layout.number_field_width);

                    if min_input != min_text {
                        typed_min = parse_number(&min_input);
                    }
                    if max_input != max_text {
                        typed_max = parse_number(&max_input);
                    }
                });

                if let Some(min) = typed_min {
                    range.enter_min(min);
                }
                if let Some(max) = typed_max {
                    range.enter_max(max);
                }
            });
        });

        states.ranges.set(id, range);
        range.into()
    }

    pub fn add_label(&mut self, text: &str) {
        self.painter.label(text);
    }

    pub fn add_header(&mut self, text: &str) {
        self.painter.space(10.);
        self.painter.header(text);
        self.painter.space(5.);
    }

    /// Returns true only on the frame the button is clicked.
    pub fn add_button(&mut self, label: &str) -> bool {
        self.painter.button(label, None)
    }

    pub fn add_text_input(&mut self, label: &str, id: &str, initial: &str) -> String {
        let layout = self.session.layout;
        let value = self
            .session
            .states
            .texts
            .get_or_insert_with(id, || initial.to_string());

        self.painter.row(&mut |p| {
            p.fixed_label(label, layout.label_width);
            let typed = p.text_field(value.as_str(), layout.field_width);
            *value = typed;
        });

        value.clone()
    }

    /// A text field holding a number.
    ///
    /// Text that doesn't parse is shown for the frame it was typed in but leaves
    /// the stored number alone.
    pub fn add_number_input(&mut self, label: &str, id: &str, initial: f32) -> f32 {
        let layout = self.session.layout;
        let mut value = self.session.states.numbers.get_or_insert(id, initial);

        self.painter.row(&mut |p| {
            p.fixed_label(label, layout.label_width);

            let text = value.to_string();
            let typed = p.text_field(&text, layout.field_width);
            if typed != text {
                if let Some(parsed) = parse_number(&typed) {
                    value = parsed;
                }
            }
        });

        self.session.states.numbers.set(id, value);
        value
    }

    /// A button showing the bound key. Clicking it waits for the next key press
    /// and binds that key; clicking again while waiting cancels.
    pub fn add_keybind_button(&mut self, label: &str, id: &str, default: MenuKey) -> MenuKey {
        let layout = self.session.layout;
        let key = self.session.states.keybinds.get_or_insert(id, default);
        let listening = self.session.listening_for.as_deref() == Some(id);

        let text = if listening {
            LISTENING_TEXT
        } else {
            key.as_str()
        };

        let mut clicked = false;
        self.painter.row(&mut |p| {
            p.fixed_label(label, layout.label_width);
            clicked = p.button(text, Some(layout.field_width));
        });

        if clicked {
            if listening {
                self.session.stop_listening();
            } else {
                self.session.start_listening(id);
            }
        }

        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Drawn, ScriptedPainter};

    fn frame<R>(
        session: &mut MenuSession,
        painter: &mut ScriptedPainter,
        f: impl FnOnce(&mut Widgets<'_>) -> R,
    ) -> R {
        let result = f(&mut Widgets::new(session, painter));
        painter.next_frame();
        result
    }

    #[test]
    fn first_call_returns_initial_value() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();

        frame(&mut session, &mut painter, |ui| {
            assert!(ui.add_switch("God mode", "god", true));
            assert_eq!(ui.add_slider("Speed", "spd", 1.2345, 0., 5.), 1.2345);
            assert_eq!(ui.add_dropdown("Mode", "mode", &["a", "b", "c"], 2), 2);
            assert_eq!(ui.add_min_max_slider("Range", "r", 2., 4., 0., 10.), (2., 4.));
            assert_eq!(ui.add_text_input("Name", "name", "Sim"), "Sim");
            assert_eq!(ui.add_number_input("Gold", "gold", 0.1), 0.1);
            assert_eq!(ui.add_keybind_button("Fly", "fly", MenuKey::F), MenuKey::F);
        });
    }

    #[test]
    fn values_are_stable_without_interaction() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();

        for _ in 0..3 {
            frame(&mut session, &mut painter, |ui| {
                // Later initial values are ignored.
                assert!(!ui.add_switch("God mode", "god", false));
                assert_eq!(ui.add_slider("Speed", "spd", 1.2345, 0., 5.), 1.2345);
                assert_eq!(ui.add_number_input("Gold", "gold", 0.1), 0.1);
                assert_eq!(ui.add_min_max_slider("Range", "r", 2., 4., 0., 10.), (2., 4.));
            });
        }
    }

    #[test]
    fn switch_flips_on_click() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();

        frame(&mut session, &mut painter, |ui| ui.add_switch("God mode", "god", false));
        assert!(painter.last_frame().contains(&Drawn::Toggle("OFF".into(), false)));

        painter.click("OFF");
        assert!(frame(&mut session, &mut painter, |ui| ui.add_switch("God mode", "god", false)));
        assert!(frame(&mut session, &mut painter, |ui| ui.add_switch("God mode", "god", false)));
        assert!(painter.last_frame().contains(&Drawn::Toggle("ON".into(), true)));
    }

    #[test]
    fn slider_drag_is_clamped_but_typing_is_not() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let slider = |ui: &mut Widgets<'_>| ui.add_slider("Speed", "spd", 1.0, 0., 5.);

        assert_eq!(frame(&mut session, &mut painter, slider), 1.0);

        painter.slide(7.);
        assert_eq!(frame(&mut session, &mut painter, slider), 5.0);

        painter.type_text(0, "7");
        assert_eq!(frame(&mut session, &mut painter, slider), 7.0);

        // The slider shows the out-of-range value at its end, and leaves it alone.
        assert_eq!(frame(&mut session, &mut painter, slider), 7.0);
        assert!(painter.last_frame().contains(&Drawn::Slider(5.)));
        assert!(painter.last_frame().contains(&Drawn::TextField("7.00".into())));
    }

    #[test]
    fn unparsable_number_keeps_last_value() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let number = |ui: &mut Widgets<'_>| ui.add_number_input("Gold", "gold", 10.);

        painter.type_text(0, "25.5");
        assert_eq!(frame(&mut session, &mut painter, number), 25.5);

        painter.type_text(0, "25.5x");
        assert_eq!(frame(&mut session, &mut painter, number), 25.5);

        painter.type_text(0, "NaN");
        assert_eq!(frame(&mut session, &mut painter, number), 25.5);

        assert_eq!(frame(&mut session, &mut painter, number), 25.5);
        assert!(painter.last_frame().contains(&Drawn::TextField("25.5".into())));
    }

    #[test]
    fn text_input_keeps_edits() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let text = |ui: &mut Widgets<'_>| ui.add_text_input("Name", "name", "Sim");

        painter.type_text(0, "Simone");
        assert_eq!(frame(&mut session, &mut painter, text), "Simone");
        assert_eq!(frame(&mut session, &mut painter, text), "Simone");
    }

    #[test]
    fn button_is_a_one_frame_edge() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let button = |ui: &mut Widgets<'_>| ui.add_button("Spawn");

        assert!(!frame(&mut session, &mut painter, button));

        painter.click("Spawn");
        assert!(frame(&mut session, &mut painter, button));
        assert!(!frame(&mut session, &mut painter, button));
    }

    #[test]
    fn label_and_header() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();

        frame(&mut session, &mut painter, |ui| {
            ui.add_header("Player");
            ui.add_label("Hello");
        });

        assert_eq!(
            painter.last_frame(),
            &[
                Drawn::Space(10.),
                Drawn::Header("Player".into()),
                Drawn::Space(5.),
                Drawn::Label("Hello".into()),
            ]
        );
    }

    #[test]
    fn dropdown_opens_selects_and_closes() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let dropdown = |ui: &mut Widgets<'_>| ui.add_dropdown("Mode", "mode", &["Easy", "Hard"], 0);

        painter.click("Easy");
        assert_eq!(frame(&mut session, &mut painter, dropdown), 0);
        assert_eq!(session.open_dropdown.as_deref(), Some("mode"));

        // The option list is drawn below the selected-option button.
        frame(&mut session, &mut painter, dropdown);
        let buttons = painter
            .last_frame()
            .iter()
            .filter(|d| matches!(d, Drawn::Button(_)))
            .count();
        assert_eq!(buttons, 3);

        painter.click("Hard");
        assert_eq!(frame(&mut session, &mut painter, dropdown), 1);
        assert_eq!(session.open_dropdown, None);

        assert_eq!(frame(&mut session, &mut painter, dropdown), 1);
        assert!(painter.last_frame().contains(&Drawn::Button("Hard".into())));
    }

    #[test]
    fn clicking_an_open_dropdown_closes_it() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let dropdown = |ui: &mut Widgets<'_>| ui.add_dropdown("Mode", "mode", &["Easy", "Hard"], 1);

        painter.click("Hard");
        frame(&mut session, &mut painter, dropdown);
        assert_eq!(session.open_dropdown.as_deref(), Some("mode"));

        painter.click("Hard");
        frame(&mut session, &mut painter, dropdown);
        assert_eq!(session.open_dropdown, None);
    }

    #[test]
    fn only_one_dropdown_is_open() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let dropdowns = |ui: &mut Widgets<'_>| {
            ui.add_dropdown("First", "first", &["a1", "a2"], 0);
            ui.add_dropdown("Second", "second", &["b1", "b2"], 0);
        };

        painter.click("a1");
        frame(&mut session, &mut painter, dropdowns);
        assert_eq!(session.open_dropdown.as_deref(), Some("first"));

        painter.click("b1");
        frame(&mut session, &mut painter, dropdowns);
        assert_eq!(session.open_dropdown.as_deref(), Some("second"));

        frame(&mut session, &mut painter, dropdowns);
        assert!(!painter.last_frame().contains(&Drawn::Button("a2".into())));
        assert!(painter.last_frame().contains(&Drawn::Button("b2".into())));
    }

    #[test]
    fn dropdown_tolerates_bad_indices() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();

        let selected = frame(&mut session, &mut painter, |ui| {
            ui.add_dropdown("Mode", "mode", &["Easy", "Hard"], 9)
        });
        assert_eq!(selected, 9);
        assert!(painter.last_frame().contains(&Drawn::Button("Hard".into())));

        let selected = frame(&mut session, &mut painter, |ui| ui.add_dropdown("Empty", "empty", &[], 0));
        assert_eq!(selected, 0);
        assert!(painter.last_frame().contains(&Drawn::Button(String::new())));
    }

    #[test]
    fn range_drag_picks_nearer_handle_and_never_crosses() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        // The scripted track is 200 wide at x = 0, so one unit is 20 px.
        let range = |ui: &mut Widgets<'_>| ui.add_min_max_slider("Range", "r", 2., 8., 0., 10.);

        painter.pointer(PointerEvent::Down { x: 50., y: 5. });
        assert_eq!(frame(&mut session, &mut painter, range), (2., 8.));
        assert_eq!(session.dragging, Some(("r".to_string(), RangeHandle::Min)));

        painter.pointer(PointerEvent::Drag { x: 100., y: 5. });
        assert_eq!(frame(&mut session, &mut painter, range), (5., 8.));

        painter.pointer(PointerEvent::Drag { x: 190., y: 5. });
        assert_eq!(frame(&mut session, &mut painter, range), (8., 8.));

        painter.pointer(PointerEvent::Up);
        frame(&mut session, &mut painter, range);
        assert_eq!(session.dragging, None);

        // Coincident handles: the max handle is picked and can move right.
        painter.pointer(PointerEvent::Down { x: 160., y: 5. });
        frame(&mut session, &mut painter, range);
        painter.pointer(PointerEvent::Drag { x: 400., y: 5. });
        assert_eq!(frame(&mut session, &mut painter, range), (8., 10.));

        painter.pointer(PointerEvent::Drag { x: -100., y: 5. });
        assert_eq!(frame(&mut session, &mut painter, range), (8., 8.));
    }

    #[test]
    fn range_drag_only_moves_the_pressed_slider() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let ranges = |ui: &mut Widgets<'_>| {
            (
                ui.add_min_max_slider("A", "a", 2., 8., 0., 10.),
                ui.add_min_max_slider("B", "b", 2., 8., 0., 10.),
            )
        };

        painter.pointer_on(0, PointerEvent::Down { x: 50., y: 5. });
        frame(&mut session, &mut painter, ranges);
        assert_eq!(session.dragging, Some(("a".to_string(), RangeHandle::Min)));

        // The pointer crosses the second track while still dragging the first.
        painter.pointer_on(1, PointerEvent::Drag { x: 100., y: 5. });
        assert_eq!(
            frame(&mut session, &mut painter, ranges),
            ((2., 8.), (2., 8.))
        );

        painter.pointer_on(0, PointerEvent::Drag { x: 100., y: 5. });
        assert_eq!(
            frame(&mut session, &mut painter, ranges),
            ((5., 8.), (2., 8.))
        );
    }

    #[test]
    fn range_ignores_drags_without_a_press() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let range = |ui: &mut Widgets<'_>| ui.add_min_max_slider("Range", "r", 2., 8., 0., 10.);

        painter.pointer(PointerEvent::Drag { x: 100., y: 5. });
        assert_eq!(frame(&mut session, &mut painter, range), (2., 8.));

        // A press outside the track doesn't start a drag either.
        painter.pointer(PointerEvent::Down { x: 50., y: 500. });
        frame(&mut session, &mut painter, range);
        assert_eq!(session.dragging, None);
    }

    #[test]
    fn range_text_fields_cross_clamp() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let range = |ui: &mut Widgets<'_>| ui.add_min_max_slider("Range", "r", 0., 5., 0., 10.);

        painter.type_text(0, "10");
        assert_eq!(frame(&mut session, &mut painter, range), (10., 10.));

        painter.type_text(1, "3");
        assert_eq!(frame(&mut session, &mut painter, range), (3., 3.));

        painter.type_text(1, "oops");
        assert_eq!(frame(&mut session, &mut painter, range), (3., 3.));

        painter.type_text(1, "12.5");
        assert_eq!(frame(&mut session, &mut painter, range), (3., 12.5));
    }

    #[test]
    fn keybind_capture_toggles_on_click() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let keybind = |ui: &mut Widgets<'_>| ui.add_keybind_button("Fly", "fly", MenuKey::F);

        painter.click("F");
        assert_eq!(frame(&mut session, &mut painter, keybind), MenuKey::F);
        assert_eq!(session.listening_for.as_deref(), Some("fly"));

        frame(&mut session, &mut painter, keybind);
        assert!(painter.last_frame().contains(&Drawn::Button(LISTENING_TEXT.into())));

        painter.click(LISTENING_TEXT);
        frame(&mut session, &mut painter, keybind);
        assert_eq!(session.listening_for, None);
    }

    #[test]
    fn new_capture_replaces_old_one() {
        let mut session = MenuSession::default();
        let mut painter = ScriptedPainter::default();
        let keybinds = |ui: &mut Widgets<'_>| {
            (
                ui.add_keybind_button("Fly", "fly", MenuKey::F),
                ui.add_keybind_button("Jump", "jump", MenuKey::J),
            )
        };

        painter.click("F");
        frame(&mut session, &mut painter, keybinds);
        assert_eq!(session.listening_for.as_deref(), Some("fly"));

        painter.click("J");
        let keys = frame(&mut session, &mut painter, keybinds);
        assert_eq!(session.listening_for.as_deref(), Some("jump"));
        assert_eq!(keys, (MenuKey::F, MenuKey::J));
    }

    #[test]
    fn parse_number_rules() {
        assert_eq!(parse_number(" 7 "), Some(7.));
        assert_eq!(parse_number("-0.5"), Some(-0.5));
        assert_eq!(parse_number("1e3"), Some(1000.));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("1,5"), None);
    }
}

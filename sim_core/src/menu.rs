use sim_config::MenuConfig;
use sim_input::{HostInput, MenuKey};
use tracing::debug;

use crate::{
    painter::{MenuSurface, Rect},
    state::WidgetStates,
    tab::{FnTab, Tab, TabContent},
    widgets::{Layout, MenuSession, Widgets},
};

/// Height of the strip across the top of the window that drags it.
pub const DRAG_STRIP_HEIGHT: f32 = 20.;

/// A movable overlay window with tabs of widgets.
///
/// Call [SimMenu::poll_input] from the host's update hook and [SimMenu::draw]
/// from its render hook, once each per frame and in that order.
pub struct SimMenu {
    title: String,
    toggle_key: MenuKey,
    window_rect: Rect,
    visible: bool,

    tabs: Vec<Tab>,
    active_tab: usize,

    session: MenuSession,
}

impl Default for SimMenu {
    fn default() -> Self {
        Self::new(&MenuConfig::default())
    }
}

impl SimMenu {
    pub fn new(config: &MenuConfig) -> Self {
        let window = config.window;

        Self {
            title: config.title.clone(),
            toggle_key: config.toggle_key,
            window_rect: Rect::new(window.x, window.y, window.width, window.height),
            visible: false,
            tabs: Vec::new(),
            active_tab: 0,
            session: MenuSession::new(Layout::from(config)),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_toggle_key(&mut self, key: MenuKey) {
        self.toggle_key = key;
    }

    pub fn toggle_key(&self) -> MenuKey {
        self.toggle_key
    }

    pub fn set_window_size(&mut self, width: f32, height: f32) {
        self.window_rect.width = width;
        self.window_rect.height = height;
    }

    pub fn window_rect(&self) -> Rect {
        self.window_rect
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Append a tab. Tabs show in the order they were added.
    pub fn add_tab(&mut self, name: impl Into<String>, content: impl TabContent + 'static) {
        let tab = Tab::new(name, content);
        debug!(name = %tab.name, index = self.tabs.len(), "Tab added");
        self.tabs.push(tab);
    }

    /// Append a tab drawn by `draw`.
    pub fn add_fn_tab(
        &mut self,
        name: impl Into<String>,
        draw: impl FnMut(&mut Widgets<'_>) + 'static,
    ) {
        self.add_tab(name, FnTab::new(draw));
    }

    pub fn tab_names(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|tab| tab.name.as_str())
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    /// Make the tab at `index` active. Indices past the last tab are kept, but
    /// nothing is drawn for them.
    pub fn select_tab(&mut self, index: usize) {
        self.active_tab = index;
    }

    pub fn states(&self) -> &WidgetStates {
        &self.session.states
    }

    pub fn listening_for(&self) -> Option<&str> {
        self.session.listening_for.as_deref()
    }

    pub fn open_dropdown(&self) -> Option<&str> {
        self.session.open_dropdown.as_deref()
    }

    pub fn switch_value(&self, id: &str) -> Option<bool> {
        self.session.states.switches.get(id).copied()
    }

    pub fn slider_value(&self, id: &str) -> Option<f32> {
        self.session.states.sliders.get(id).copied()
    }

    pub fn dropdown_value(&self, id: &str) -> Option<usize> {
        self.session.states.dropdowns.get(id).copied()
    }

    pub fn range_value(&self, id: &str) -> Option<(f32, f32)> {
        self.session.states.ranges.get(id).map(|range| (range.min, range.max))
    }

    pub fn text_value(&self, id: &str) -> Option<&str> {
        self.session.states.texts.get(id).map(String::as_str)
    }

    pub fn number_value(&self, id: &str) -> Option<f32> {
        self.session.states.numbers.get(id).copied()
    }

    pub fn keybind_value(&self, id: &str) -> Option<MenuKey> {
        self.session.states.keybinds.get(id).copied()
    }

    /// Handle this frame's key presses, then tell every tab whether it's shown.
    pub fn poll_input(&mut self, input: &(impl HostInput + ?Sized)) {
        if self.session.listening_for.is_none() && input.key_pressed(self.toggle_key) {
            self.visible = !self.visible;
            debug!(visible = self.visible, "Menu toggled");
        }

        if let Some(id) = self.session.listening_for.as_deref() {
            if let Some(key) = MenuKey::ALL.iter().copied().find(|key| input.key_pressed(*key)) {
                debug!(id, %key, "Keybind captured");
                self.session.states.keybinds.set(id, key);
                self.session.listening_for = None;
            }
        }

        for (index, tab) in self.tabs.iter_mut().enumerate() {
            tab.content
                .on_visibility(self.visible && index == self.active_tab);
        }
    }

    /// Draw the window and the active tab, if the menu is visible.
    pub fn draw(&mut self, surface: &mut impl MenuSurface) {
        if !self.visible {
            return;
        }

        let Self {
            title,
            window_rect,
            tabs,
            active_tab,
            session,
            ..
        } = self;

        *window_rect = surface.window(title, *window_rect, DRAG_STRIP_HEIGHT, &mut |p| {
            p.space(5.);

            p.row(&mut |p| {
                for (index, tab) in tabs.iter().enumerate() {
                    if p.selectable(*active_tab == index, &tab.name) && *active_tab != index {
                        debug!(name = %tab.name, index, "Tab selected");
                        *active_tab = index;
                    }
                }
            });

            p.space(10.);

            if let Some(tab) = tabs.get_mut(*active_tab) {
                tab.content.draw(&mut Widgets::new(&mut *session, p));
            }
        });
    }
}

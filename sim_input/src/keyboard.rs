use std::collections::HashSet;

use crate::{HostInput, MenuKey};

/// Tracks held keys and the keys that went down since [KeyboardState::begin_frame].
///
/// Key-repeat events from the platform are ignored: a key only counts as pressed
/// on the transition from up to down.
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<MenuKey>,
    pressed: HashSet<MenuKey>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame's presses. Held keys stay held.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn key_down(&mut self, key: MenuKey) {
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: MenuKey) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: MenuKey) -> bool {
        self.held.contains(&key)
    }
}

impl HostInput for KeyboardState {
    fn key_pressed(&self, key: MenuKey) -> bool {
        self.pressed.contains(&key)
    }
}

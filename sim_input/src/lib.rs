#[macro_use]
mod helpers;
mod key;
mod keyboard;

pub use helpers::KeyParseError;
pub use key::MenuKey;
pub use keyboard::KeyboardState;

/// The host's view of the keyboard for the current frame.
///
/// Implemented by whatever feeds input into the overlay; the menu only ever asks
/// whether a key went down since the last frame.
pub trait HostInput {
    /// Returns true if `key` was newly pressed this frame.
    fn key_pressed(&self, key: MenuKey) -> bool;
}

impl<T: HostInput + ?Sized> HostInput for &T {
    fn key_pressed(&self, key: MenuKey) -> bool {
        (**self).key_pressed(key)
    }
}

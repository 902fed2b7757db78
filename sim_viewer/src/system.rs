// Since the menu shouldn't care which windowing library the host uses, we define
// a subset of system abstractions here. sdl2_system.rs fills them in from SDL2.

use sim_input::MenuKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemMouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemMod {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SystemEvent {
    KeyDown {
        key: MenuKey,
        mods: SystemMod,
    },
    KeyUp {
        key: MenuKey,
        mods: SystemMod,
    },
    Text {
        text: String,
    },
    MouseMotion {
        x: i32,
        y: i32,
    },
    MouseWheel {
        x: i32,
        y: i32,
    },
    MouseButtonDown {
        mouse_btn: SystemMouseButton,
    },
    MouseButtonUp {
        mouse_btn: SystemMouseButton,
    },
    SizeChanged {
        width: u32,
        height: u32,
    },
}

// This is the SDL2 implementation of system.rs.

use sdl2::{
    event::{Event, WindowEvent},
    keyboard::{Mod, Scancode},
    mouse::MouseButton,
    video::Window,
};
use sim_input::MenuKey;

use crate::system::{SystemEvent, SystemMod, SystemMouseButton};

pub trait ToSystemMouseButtonExt {
    fn to_system_mouse_button(&self) -> Option<SystemMouseButton>;
}

impl ToSystemMouseButtonExt for MouseButton {
    fn to_system_mouse_button(&self) -> Option<SystemMouseButton> {
        match self {
            MouseButton::Left => Some(SystemMouseButton::Left),
            MouseButton::Middle => Some(SystemMouseButton::Middle),
            MouseButton::Right => Some(SystemMouseButton::Right),
            _ => None,
        }
    }
}

pub trait ToMenuKeyExt {
    fn to_menu_key(&self) -> Option<MenuKey>;
}

impl ToMenuKeyExt for Scancode {
    // Scancodes are layout independent, so a binding stays on the same physical key.
    fn to_menu_key(&self) -> Option<MenuKey> {
        use MenuKey as K;

        Some(match *self {
            Scancode::Backspace => K::Backspace,
            Scancode::Tab => K::Tab,
            Scancode::Return => K::Return,
            Scancode::Pause => K::Pause,
            Scancode::Escape => K::Escape,
            Scancode::Space => K::Space,
            Scancode::Apostrophe => K::Quote,
            Scancode::Comma => K::Comma,
            Scancode::Minus => K::Minus,
            Scancode::Period => K::Period,
            Scancode::Slash => K::Slash,
            Scancode::Num0 => K::Alpha0,
            Scancode::Num1 => K::Alpha1,
            Scancode::Num2 => K::Alpha2,
            Scancode::Num3 => K::Alpha3,
            Scancode::Num4 => K::Alpha4,
            Scancode::Num5 => K::Alpha5,
            Scancode::Num6 => K::Alpha6,
            Scancode::Num7 => K::Alpha7,
            Scancode::Num8 => K::Alpha8,
            Scancode::Num9 => K::Alpha9,
            Scancode::Semicolon => K::Semicolon,
            Scancode::Equals => K::Equals,
            Scancode::LeftBracket => K::LeftBracket,
            Scancode::Backslash => K::Backslash,
            Scancode::RightBracket => K::RightBracket,
            Scancode::Grave => K::BackQuote,
            Scancode::A => K::A,
            Scancode::B => K::B,
            Scancode::C => K::C,
            Scancode::D => K::D,
            Scancode::E => K::E,
            Scancode::F => K::F,
            Scancode::G => K::G,
            Scancode::H => K::H,
            Scancode::I => K::I,
            Scancode::J => K::J,
            Scancode::K => K::K,
            Scancode::L => K::L,
            Scancode::M => K::M,
            Scancode::N => K::N,
            Scancode::O => K::O,
            Scancode::P => K::P,
            Scancode::Q => K::Q,
            Scancode::R => K::R,
            Scancode::S => K::S,
            Scancode::T => K::T,
            Scancode::U => K::U,
            Scancode::V => K::V,
            Scancode::W => K::W,
            Scancode::X => K::X,
            Scancode::Y => K::Y,
            Scancode::Z => K::Z,
            Scancode::Delete => K::Delete,
            Scancode::Kp0 => K::Keypad0,
            Scancode::Kp1 => K::Keypad1,
            Scancode::Kp2 => K::Keypad2,
            Scancode::Kp3 => K::Keypad3,
            Scancode::Kp4 => K::Keypad4,
            Scancode::Kp5 => K::Keypad5,
            Scancode::Kp6 => K::Keypad6,
            Scancode::Kp7 => K::Keypad7,
            Scancode::Kp8 => K::Keypad8,
            Scancode::Kp9 => K::Keypad9,
            Scancode::KpPeriod => K::KeypadPeriod,
            Scancode::KpDivide => K::KeypadDivide,
            Scancode::KpMultiply => K::KeypadMultiply,
            Scancode::KpMinus => K::KeypadMinus,
            Scancode::KpPlus => K::KeypadPlus,
            Scancode::KpEnter => K::KeypadEnter,
            Scancode::Up => K::UpArrow,
            Scancode::Down => K::DownArrow,
            Scancode::Right => K::RightArrow,
            Scancode::Left => K::LeftArrow,
            Scancode::Insert => K::Insert,
            Scancode::Home => K::Home,
            Scancode::End => K::End,
            Scancode::PageUp => K::PageUp,
            Scancode::PageDown => K::PageDown,
            Scancode::F1 => K::F1,
            Scancode::F2 => K::F2,
            Scancode::F3 => K::F3,
            Scancode::F4 => K::F4,
            Scancode::F5 => K::F5,
            Scancode::F6 => K::F6,
            Scancode::F7 => K::F7,
            Scancode::F8 => K::F8,
            Scancode::F9 => K::F9,
            Scancode::F10 => K::F10,
            Scancode::F11 => K::F11,
            Scancode::F12 => K::F12,
            Scancode::CapsLock => K::CapsLock,
            Scancode::RShift => K::RightShift,
            Scancode::LShift => K::LeftShift,
            Scancode::RCtrl => K::RightControl,
            Scancode::LCtrl => K::LeftControl,
            Scancode::RAlt => K::RightAlt,
            Scancode::LAlt => K::LeftAlt,
            _ => return None,
        })
    }
}

fn to_system_mod(keymod: Mod) -> SystemMod {
    SystemMod {
        ctrl: keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD),
        shift: keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD),
        alt: keymod.intersects(Mod::LALTMOD | Mod::RALTMOD),
    }
}

pub trait ToSystemEventExt {
    fn to_system_event(&self, sdl_window: &Window) -> Option<SystemEvent>;
}

impl ToSystemEventExt for Event {
    fn to_system_event(&self, sdl_window: &Window) -> Option<SystemEvent> {
        match self {
            Event::TextInput { text, .. } => {
                return Some(SystemEvent::Text { text: text.clone() });
            }
            Event::KeyDown {
                scancode: Some(scancode),
                keymod,
                ..
            } => {
                if let Some(key) = scancode.to_menu_key() {
                    return Some(SystemEvent::KeyDown {
                        key,
                        mods: to_system_mod(*keymod),
                    });
                }
            }
            Event::KeyUp {
                scancode: Some(scancode),
                keymod,
                ..
            } => {
                if let Some(key) = scancode.to_menu_key() {
                    return Some(SystemEvent::KeyUp {
                        key,
                        mods: to_system_mod(*keymod),
                    });
                }
            }
            Event::MouseMotion { x, y, .. } => {
                return Some(SystemEvent::MouseMotion { x: *x, y: *y });
            }
            Event::MouseWheel { x, y, .. } => {
                return Some(SystemEvent::MouseWheel { x: *x, y: *y });
            }
            Event::MouseButtonDown { mouse_btn, .. } => {
                if let Some(mouse_btn) = mouse_btn.to_system_mouse_button() {
                    return Some(SystemEvent::MouseButtonDown { mouse_btn });
                }
            }
            Event::MouseButtonUp { mouse_btn, .. } => {
                if let Some(mouse_btn) = mouse_btn.to_system_mouse_button() {
                    return Some(SystemEvent::MouseButtonUp { mouse_btn });
                }
            }
            Event::Window {
                window_id,
                win_event: WindowEvent::SizeChanged(width, height),
                ..
            } if *window_id == sdl_window.id() => {
                if *width <= 0 || *height <= 0 {
                    return None;
                }

                return Some(SystemEvent::SizeChanged {
                    width: *width as u32,
                    height: *height as u32,
                });
            }
            _ => {}
        }
        None
    }
}

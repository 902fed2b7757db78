use egui::{Key, Modifiers, Pos2};
use sim_input::MenuKey;

use crate::system::{SystemEvent, SystemMod, SystemMouseButton};

/// A trait that adds a method to convert to an egui key
pub trait ToEguiKey {
    /// Convert the struct to an egui key
    fn to_egui_key(&self) -> Option<egui::Key>;
}

impl ToEguiKey for MenuKey {
    fn to_egui_key(&self) -> Option<egui::Key> {
        use MenuKey::*;

        Some(match *self {
            LeftArrow => Key::ArrowLeft,
            UpArrow => Key::ArrowUp,
            RightArrow => Key::ArrowRight,
            DownArrow => Key::ArrowDown,
            Escape => Key::Escape,
            Tab => Key::Tab,
            Backspace => Key::Backspace,
            Space => Key::Space,
            Return | KeypadEnter => Key::Enter,
            Insert => Key::Insert,
            Home => Key::Home,
            Delete => Key::Delete,
            End => Key::End,
            PageDown => Key::PageDown,
            PageUp => Key::PageUp,
            Minus | KeypadMinus => Key::Minus,
            Period | KeypadPeriod => Key::Period,
            Comma => Key::Comma,
            Keypad0 | Alpha0 => Key::Num0,
            Keypad1 | Alpha1 => Key::Num1,
            Keypad2 | Alpha2 => Key::Num2,
            Keypad3 | Alpha3 => Key::Num3,
            Keypad4 | Alpha4 => Key::Num4,
            Keypad5 | Alpha5 => Key::Num5,
            Keypad6 | Alpha6 => Key::Num6,
            Keypad7 | Alpha7 => Key::Num7,
            Keypad8 | Alpha8 => Key::Num8,
            Keypad9 | Alpha9 => Key::Num9,
            A => Key::A,
            B => Key::B,
            C => Key::C,
            D => Key::D,
            E => Key::E,
            F => Key::F,
            G => Key::G,
            H => Key::H,
            I => Key::I,
            J => Key::J,
            K => Key::K,
            L => Key::L,
            M => Key::M,
            N => Key::N,
            O => Key::O,
            P => Key::P,
            Q => Key::Q,
            R => Key::R,
            S => Key::S,
            T => Key::T,
            U => Key::U,
            V => Key::V,
            W => Key::W,
            X => Key::X,
            Y => Key::Y,
            Z => Key::Z,
            F1 => Key::F1,
            F2 => Key::F2,
            F3 => Key::F3,
            F4 => Key::F4,
            F5 => Key::F5,
            F6 => Key::F6,
            F7 => Key::F7,
            F8 => Key::F8,
            F9 => Key::F9,
            F10 => Key::F10,
            F11 => Key::F11,
            F12 => Key::F12,
            _ => {
                return None;
            }
        })
    }
}

fn to_egui_modifiers(mods: &SystemMod) -> Modifiers {
    Modifiers {
        alt: mods.alt,
        ctrl: mods.ctrl,
        shift: mods.shift,
        mac_cmd: false,
        command: mods.ctrl,
    }
}

fn to_egui_button(mouse_btn: &SystemMouseButton) -> egui::PointerButton {
    match mouse_btn {
        SystemMouseButton::Left => egui::PointerButton::Primary,
        SystemMouseButton::Middle => egui::PointerButton::Middle,
        SystemMouseButton::Right => egui::PointerButton::Secondary,
    }
}

/// Feeds [SystemEvent]s into an egui context and runs its passes.
pub struct EguiPlatform {
    // The position of the mouse pointer
    pointer_pos: Pos2,
    // The egui modifiers
    modifiers: Modifiers,
    // The raw input
    egui_input: egui::RawInput,

    // The egui context
    egui_ctx: egui::Context,
}

impl EguiPlatform {
    pub fn new(screen_size: (u32, u32)) -> Self {
        Self {
            pointer_pos: Pos2::ZERO,
            egui_input: egui::RawInput {
                screen_rect: Some(screen_rect(screen_size.0, screen_size.1)),
                ..Default::default()
            },
            modifiers: Modifiers::default(),
            egui_ctx: egui::Context::default(),
        }
    }

    /// Handle a system event. Returns true if egui wants the event for itself.
    pub fn handle_event(&mut self, event: &SystemEvent) -> bool {
        match event {
            SystemEvent::SizeChanged { width, height } => {
                self.egui_input.screen_rect = Some(screen_rect(*width, *height));
            }

            SystemEvent::MouseButtonDown { mouse_btn } | SystemEvent::MouseButtonUp { mouse_btn } => {
                let pressed = matches!(event, SystemEvent::MouseButtonDown { .. });
                self.egui_input.events.push(egui::Event::PointerButton {
                    pos: self.pointer_pos,
                    button: to_egui_button(mouse_btn),
                    pressed,
                    modifiers: self.modifiers,
                });

                return self.egui_ctx.wants_pointer_input();
            }

            SystemEvent::MouseMotion { x, y } => {
                self.pointer_pos = egui::Pos2::new(*x as f32, *y as f32);
                self.egui_input
                    .events
                    .push(egui::Event::PointerMoved(self.pointer_pos));

                return self.egui_ctx.wants_pointer_input();
            }

            SystemEvent::MouseWheel { x, y } => {
                self.egui_input.events.push(egui::Event::MouseWheel {
                    unit: egui::MouseWheelUnit::Line,
                    delta: egui::vec2(*x as f32, *y as f32),
                    modifiers: self.modifiers,
                });

                return self.egui_ctx.wants_pointer_input();
            }

            SystemEvent::Text { text } => {
                if self.egui_ctx.wants_keyboard_input() {
                    self.egui_input.events.push(egui::Event::Text(text.clone()));
                    return true;
                }
            }

            SystemEvent::KeyDown { key, mods } | SystemEvent::KeyUp { key, mods } => {
                let pressed = matches!(event, SystemEvent::KeyDown { .. });

                self.modifiers = to_egui_modifiers(mods);
                self.egui_input.modifiers = self.modifiers;

                if let Some(key) = key.to_egui_key() {
                    self.egui_input.events.push(egui::Event::Key {
                        key,
                        physical_key: None,
                        pressed,
                        repeat: false,
                        modifiers: self.modifiers,
                    });

                    return self.egui_ctx.wants_keyboard_input();
                }
            }
        };

        false
    }

    pub fn context(&self) -> egui::Context {
        self.egui_ctx.clone()
    }

    /// Begin drawing the egui frame
    pub fn begin_frame(&mut self) {
        self.egui_ctx.begin_pass(self.egui_input.take());
    }

    /// Stop drawing the egui frame and return the full output
    pub fn end_frame(&mut self) -> egui::FullOutput {
        self.egui_ctx.end_pass()
    }

    pub fn tessellate(
        &self,
        full_output: &egui::FullOutput,
        pixels_per_point: f32,
    ) -> Vec<egui::ClippedPrimitive> {
        self.egui_ctx
            .tessellate(full_output.shapes.clone(), pixels_per_point)
    }
}

fn screen_rect(width: u32, height: u32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::Vec2 {
            x: width as f32,
            y: height as f32,
        },
    )
}

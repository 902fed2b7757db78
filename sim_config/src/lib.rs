use std::{fs, path::Path};

use serde::Deserialize;
use sim_input::MenuKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Window size must be positive, got {0}x{1}")]
    InvalidWindowSize(f32, f32),
}

/// Everything about the menu that can be set before the game starts.
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub title: String,
    pub toggle_key: MenuKey,
    pub window: WindowConfig,

    /// Width of the label column in each widget row.
    pub label_width: f32,
    /// Width of free text fields, dropdown buttons and keybind buttons.
    pub field_width: f32,
    /// Width of the numeric text fields next to sliders.
    pub number_field_width: f32,

    pub palette: Palette,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "Mod Menu".to_string(),
            toggle_key: MenuKey::Period,
            window: WindowConfig::default(),
            label_width: 150.,
            field_width: 150.,
            number_field_width: 50.,
            palette: Palette::default(),
        }
    }
}

impl MenuConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MenuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let WindowConfig { width, height, .. } = self.window;
        if !(width > 0. && height > 0.) {
            return Err(ConfigError::InvalidWindowSize(width, height));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            x: 20.,
            y: 20.,
            width: 300.,
            height: 400.,
        }
    }
}

/// RGBA with each channel in 0..=1, as the game engine hands out colors.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f32; 4]")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1., 1., 1., 1.);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_srgba_unmultiplied(self) -> [u8; 4] {
        let channel = |c: f32| (c.clamp(0., 1.) * 255.).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub accent: Rgba,
    pub text: Rgba,
    pub tab: Rgba,
    pub active_tab: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::new(0.1, 0.1, 0.1, 0.95),
            accent: Rgba::new(0., 0.5, 1., 1.),
            text: Rgba::WHITE,
            tab: Rgba::new(0.15, 0.15, 1., 1.),
            active_tab: Rgba::new(0.2, 0.2, 0.2, 1.),
        }
    }
}

pub mod egui;
pub mod menu;
pub mod painter;
pub mod plugin;
pub mod range;
pub mod state;
pub mod tab;
pub mod widgets;

#[cfg(test)]
pub(crate) mod testing;

pub use menu::SimMenu;
pub use plugin::{OverlayPlugin, PluginInfo, PLUGIN_INFO};
pub use tab::{FnTab, Tab, TabContent};
pub use widgets::Widgets;

pub use sim_config::MenuConfig;
pub use sim_input::{HostInput, KeyboardState, MenuKey};

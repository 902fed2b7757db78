use std::path::Path;

use anyhow::{Context, Result};
use sim_config::{MenuConfig, Palette};
use sim_input::HostInput;
use tracing::{info, info_span, Span};
use tracing_subscriber::EnvFilter;

use crate::{egui::EguiSurface, menu::SimMenu, painter::MenuSurface};

/// How the overlay introduces itself to the plugin loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub guid: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    guid: "com.SimPleased.SimLibGUI",
    name: "SimLibGUI",
    version: "1.0.0.0",
};

/// Install the global log subscriber. `RUST_LOG` overrides the default `info`
/// filter. Returns false if the host already installed one.
pub fn init_logging() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .is_ok()
}

/// The overlay as loaded by the host: one menu plus the plugin's log source.
///
/// The host calls [OverlayPlugin::update] from its update hook and
/// [OverlayPlugin::render] from its render hook.
pub struct OverlayPlugin {
    info: PluginInfo,
    log_source: Span,
    palette: Palette,

    menu: SimMenu,
}

impl OverlayPlugin {
    pub fn awake(config: MenuConfig) -> Self {
        init_logging();

        let info = PLUGIN_INFO;
        let log_source = info_span!("plugin", guid = info.guid);
        log_source.in_scope(|| info!(version = info.version, "{} has started!", info.name));

        Self {
            info,
            log_source,
            palette: config.palette,
            menu: SimMenu::new(&config),
        }
    }

    /// Load the config at `path`, then [OverlayPlugin::awake].
    pub fn awake_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = MenuConfig::from_path(path)
            .with_context(|| format!("Failed to load menu config {}", path.display()))?;

        Ok(Self::awake(config))
    }

    pub fn info(&self) -> PluginInfo {
        self.info
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn menu(&self) -> &SimMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut SimMenu {
        &mut self.menu
    }

    pub fn update(&mut self, input: &(impl HostInput + ?Sized)) {
        let _source = self.log_source.enter();
        self.menu.poll_input(input);
    }

    pub fn render(&mut self, surface: &mut impl MenuSurface) {
        let _source = self.log_source.enter();
        self.menu.draw(surface);
    }

    /// [OverlayPlugin::render] into an egui context.
    pub fn render_egui(&mut self, ctx: &egui::Context) {
        let mut surface = EguiSurface::new(ctx.clone(), self.palette);
        self.render(&mut surface);
    }
}

use sim_core::{FnTab, MenuKey, SimMenu, TabContent, Widgets};
use tracing::{debug, info};

const WEATHER: [&str; 4] = ["Clear", "Rain", "Fog", "Storm"];

/// A tab that counts how often it was opened.
struct WorldTab {
    shown: bool,
    times_opened: u32,
}

impl TabContent for WorldTab {
    fn draw(&mut self, ui: &mut Widgets<'_>) {
        ui.add_header("Time");
        let hour = ui.add_slider("Hour", "world_hour", 12., 0., 24.);
        ui.add_label(&format!("It is {:02}:00", hour as u32));

        ui.add_header("Weather");
        let weather = ui.add_dropdown("Weather", "world_weather", &WEATHER, 0);
        let (low, high) =
            ui.add_min_max_slider("Temperature", "world_temp", 10., 25., -20., 45.);
        if weather == 3 {
            ui.add_label(&format!("Storm between {low:.0} and {high:.0} degrees"));
        }

        ui.add_label(&format!("Opened {} times", self.times_opened));
    }

    fn on_visibility(&mut self, shown: bool) {
        if shown && !self.shown {
            self.times_opened += 1;
        }
        self.shown = shown;
    }
}

/// Register the viewer's sample tabs.
pub fn add_demo_tabs(menu: &mut SimMenu) {
    menu.add_tab(
        "Player",
        FnTab::new(|ui| {
            ui.add_header("Cheats");
            ui.add_switch("God mode", "player_god", false);
            ui.add_slider("Speed", "player_speed", 1., 0.5, 5.);
            ui.add_number_input("Gold", "player_gold", 100.);
            let name = ui.add_text_input("Name", "player_name", "Sim");

            ui.add_header("Controls");
            ui.add_keybind_button("Jump", "player_jump", MenuKey::Space);
            ui.add_keybind_button("Sprint", "player_sprint", MenuKey::LeftShift);

            if ui.add_button("Say hello") {
                info!("Hello from {name}!");
            }
        })
        .with_visibility(|shown| debug!(shown, "Player tab visibility")),
    );

    menu.add_tab(
        "World",
        WorldTab {
            shown: false,
            times_opened: 0,
        },
    );
}

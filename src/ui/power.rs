use egui::{DragValue, RichText, Slider, SliderClamping, Ui};

use crate::app::SharkApp;
use crate::common::{DEEP_SLEEP_MAX, DEEP_SLEEP_MIN, SLEEP_TIME_MAX, SLEEP_TIME_MIN};
use crate::style::TEXT_DIM;

impl SharkApp {
    pub(crate) fn render_power_section(&mut self, ui: &mut Ui) {
        ui.heading(RichText::new("Power").size(28.0));

        ui.add_space(10.0);

        ui.label(RichText::new("Power-saving timers")
            .size(14.0)
            .color(TEXT_DIM));

        ui.add_space(30.0);

        ui.label(RichText::new("Sleep Time").size(16.0).strong());

        let mut sleep = self.settings.sleep_time;
        if ui.add(Slider::new(&mut sleep, SLEEP_TIME_MIN..=SLEEP_TIME_MAX)
            .step_by(0.1)
            .fixed_decimals(1)
            .clamping(SliderClamping::Edits)).changed()
        {
            self.settings.set_sleep_time(sleep);
        }

        ui.add_space(20.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Deep Sleep Time").size(16.0).strong());
            ui.add_space(20.0);
            ui.add(DragValue::new(&mut self.settings.deep_sleep_time)
                .range(DEEP_SLEEP_MIN..=DEEP_SLEEP_MAX)
                .clamp_existing_to_range(false));
        });
    }
}

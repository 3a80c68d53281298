use egui::{RichText, Slider, SliderClamping, Ui};

use crate::app::SharkApp;
use crate::common::{KEY_RESPONSE_MAX, KEY_RESPONSE_MIN};
use crate::style::TEXT_DIM;

impl SharkApp {
    pub(crate) fn render_performance_section(&mut self, ui: &mut Ui) {
        ui.heading(RichText::new("Performance").size(28.0));

        ui.add_space(10.0);

        ui.label(RichText::new("Button debounce and sensor tracking")
            .size(14.0)
            .color(TEXT_DIM));

        ui.add_space(30.0);

        ui.label(RichText::new("Key Response Time").size(16.0).strong());
        ui.add(Slider::new(&mut self.settings.key_response_time, KEY_RESPONSE_MIN..=KEY_RESPONSE_MAX)
            .step_by(2.0)
            .suffix(" ms")
            .clamping(SliderClamping::Edits));

        ui.add_space(20.0);

        ui.checkbox(&mut self.settings.angle_snap, "Angle Snap");
        ui.checkbox(&mut self.settings.ripple_control, "Ripple Control");
    }
}

use egui::{Frame, RichText, TextEdit, Ui};

use crate::app::SharkApp;
use crate::command;
use crate::style::{NAV_IDLE, TEXT_DIM};

const FORMAT_HELP: &str = "\
• Regular flags: -flag=value  (e.g. -polling-rate=500)
• DPI map: -dpi:slot=value  (e.g. -dpi:1=800)
• Standalone flags: -flag  (e.g. -query-charge, -reapply-config)";

impl SharkApp {
    pub(crate) fn render_configuration_section(&mut self, ui: &mut Ui) {
        ui.heading(RichText::new("Configuration").size(28.0));
        ui.add_space(10.0);

        ui.label(RichText::new("Config file and driver invocation")
            .size(14.0).color(TEXT_DIM));

        ui.add_space(30.0);

        ui.label(RichText::new("Config Path").size(16.0).strong());
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.add(TextEdit::singleline(&mut self.config_path)
                .desired_width(ui.available_width() - 90.0));

            if ui.button("Browse").clicked() {
                self.browse_config();
            }
        });

        ui.add_space(12.0);

        ui.checkbox(&mut self.settings.reapply_config, "Reapply entire config on save");

        ui.add_space(12.0);

        if ui.button("Query Battery Charge").clicked() {
            self.query_charge();
        }

        ui.add_space(30.0);
        ui.separator();
        ui.add_space(30.0);

        ui.label(RichText::new("Command Preview").size(16.0).strong());
        ui.add_space(6.0);

        Frame::NONE
            .fill(NAV_IDLE)
            .corner_radius(6)
            .inner_margin(10)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(command::display(&self.apply_command())).monospace());
            });

        ui.add_space(20.0);

        ui.label(RichText::new("Argument Format").size(16.0).strong());
        ui.add_space(6.0);
        ui.label(RichText::new(FORMAT_HELP).size(13.0).color(TEXT_DIM));
    }
}

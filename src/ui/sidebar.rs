use egui::{Button, Color32, Layout, RichText, Ui, vec2};

use crate::app::SharkApp;
use crate::state::Section;
use crate::style::{ACCENT, ERROR, SUCCESS, TEXT_DIM};

impl SharkApp {
    fn render_nav_btn(&mut self, ui: &mut Ui, label: &str, section: Section) {
        let is_active = self.active_section == section;

        let btn = Button::new(RichText::new(label).size(14.0))
            .fill(if is_active { ACCENT } else { Color32::TRANSPARENT })
            .stroke(egui::Stroke::NONE)
            .min_size(vec2(ui.available_width(), 38.0));

        if ui.add(btn).clicked() {
            self.active_section = section;
        }
    }

    fn render_actions(&mut self, ui: &mut Ui) {
        let size = vec2(ui.available_width(), 32.0);

        if ui.add_sized(size, Button::new("Load Config")).clicked() {
            self.load_config();
        }

        if ui.add_sized(size, Button::new("Save Config")).clicked() {
            self.save_config();
        }

        let apply = Button::new(RichText::new("Apply Settings").strong()).fill(ACCENT);
        if ui.add_sized(size, apply).clicked() {
            self.apply_settings();
        }

        if ui.add_sized(size, Button::new("Reset to Defaults")).clicked() {
            self.request_reset();
        }
    }

    pub(crate) fn render_sidebar(&mut self, ui: &mut Ui) {
        ui.add_space(20.0);

        ui.label(RichText::new("Attack Shark R1").size(22.0)
            .color(Color32::WHITE).strong());
        ui.label(RichText::new("Driver settings").size(12.0).color(TEXT_DIM));

        ui.add_space(5.0);
        ui.separator();
        ui.add_space(15.0);

        self.render_nav_btn(ui, "Polling & DPI", Section::Dpi);
        self.render_nav_btn(ui, "Performance", Section::Performance);
        self.render_nav_btn(ui, "Power", Section::Power);
        self.render_nav_btn(ui, "Configuration", Section::Configuration);

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(15.0);

        self.render_actions(ui);

        ui.with_layout(Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.add_space(10.0);

            ui.horizontal_wrapped(|ui| {
                if self.tasks_in_flight() > 0 {
                    ui.add(egui::Spinner::new().size(12.0).color(ACCENT));
                }

                let color = if self.status_is_error { ERROR } else { SUCCESS };
                ui.label(RichText::new(&self.status_message).size(11.0).color(color));
            });
        });
    }
}

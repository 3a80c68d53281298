use std::time::Duration;
use eframe::App;
use egui::{CentralPanel, SidePanel, Ui};

use crate::app::SharkApp;
use crate::state::Section;
use crate::style::apply_style;

pub mod configuration;
pub mod dialogs;
pub mod dpi;
pub mod performance;
pub mod power;
pub mod sidebar;

impl SharkApp {
    fn render_main(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(24.0);

            match self.active_section {
                Section::Dpi           => self.render_dpi_section(ui),
                Section::Performance   => self.render_performance_section(ui),
                Section::Power         => self.render_power_section(ui),
                Section::Configuration => self.render_configuration_section(ui),
            }

            ui.add_space(24.0);
        });
    }
}

impl App for SharkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_tasks();

        if self.tasks_in_flight() > 0 {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        apply_style(ctx);

        SidePanel::left("sidebar")
            .exact_width(240.0)
            .resizable(false)
            .show(ctx, |ui| {
                self.render_sidebar(ui);
            });

        CentralPanel::default().show(ctx, |ui| {
            self.render_main(ui);
        });

        self.render_dialogs(ctx);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::driver::Driver;
    use crate::settings;

    fn render(app: &mut SharkApp, section: Section) {
        app.active_section = section;

        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                CentralPanel::default().show(ctx, |ui| {
                    app.render_main(ui);
                });
            });
        }
    }

    #[test]
    fn test_rendering_keeps_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"sleep_time": 45.0, "deep_sleep_time": 90, "key_response_time": 60}"#).unwrap();

        let mut app = SharkApp::new(Driver::new("true"), path.clone());
        let loaded = app.settings.clone();
        assert_eq!(loaded.sleep_time, 45.0);

        for section in [Section::Dpi, Section::Performance, Section::Power, Section::Configuration] {
            render(&mut app, section);
        }
        assert_eq!(app.settings, loaded);

        app.save_config();
        let saved = settings::load(&path).unwrap();
        assert_eq!(saved.sleep_time, 45.0);
        assert_eq!(saved.deep_sleep_time, 90);
        assert_eq!(saved.key_response_time, 60);
    }
}

use egui::{ComboBox, Grid, RichText, TextEdit, Ui, vec2};

use crate::app::SharkApp;
use crate::common::{DPI_SLOT_COUNT, POLLING_RATES};
use crate::style::{ERROR, TEXT_DIM};

impl SharkApp {
    pub(crate) fn render_dpi_section(&mut self, ui: &mut Ui) {
        ui.heading(RichText::new("Polling & DPI").size(28.0));

        ui.add_space(10.0);

        ui.label(RichText::new("Report rate and the six sensitivity presets")
            .size(14.0)
            .color(TEXT_DIM));

        ui.add_space(20.0);

        ui.label(RichText::new("Polling Rate (Hz)").size(16.0).strong());

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            for rate in POLLING_RATES {
                ui.radio_value(&mut self.settings.polling_rate, rate, format!("{rate} Hz"));
            }
        });

        ui.add_space(30.0);
        ui.separator();
        ui.add_space(30.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Active DPI Slot").size(16.0).strong());

            ui.add_space(20.0);

            ComboBox::from_id_salt("active_dpi")
                .selected_text(self.settings.active_dpi.to_string())
                .show_ui(ui, |ui| {
                    for slot in 1..=DPI_SLOT_COUNT as u8 {
                        ui.selectable_value(&mut self.settings.active_dpi, slot, slot.to_string());
                    }
                });
        });

        ui.add_space(20.0);

        Grid::new("dpi_slots")
            .num_columns(3)
            .spacing(vec2(16.0, 10.0))
            .show(ui, |ui| {
                for slot in 1..=DPI_SLOT_COUNT {
                    self.render_dpi_slot(ui, slot);
                    ui.end_row();
                }
            });
    }

    fn render_dpi_slot(&mut self, ui: &mut Ui, slot: usize) {
        let i = slot - 1;
        let invalid = self.dpi_drafts.invalid[i];

        ui.label(format!("Slot {slot} DPI"));

        let mut entry = TextEdit::singleline(&mut self.dpi_drafts.text[i]).desired_width(90.0);
        if invalid {
            entry = entry.text_color(ERROR);
        }

        let mut response = ui.add(entry);
        if invalid {
            response = response.on_hover_text("Not a whole number; the slot keeps its last valid value");
        }

        if response.changed() {
            self.edit_dpi_text(slot);
        }

        let mut enabled = self.settings.is_slot_enabled(slot);
        if ui.checkbox(&mut enabled, "Enabled").changed() {
            self.set_slot_enabled(slot, enabled);
        }
    }
}

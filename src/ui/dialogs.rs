use egui::{Context, Id, Modal, RichText};

use crate::app::SharkApp;
use crate::state::NoticeKind;
use crate::style::{ERROR, TEXT_DIM};

impl SharkApp {
    /// At most one modal is shown per frame; queued notices wait their turn.
    pub(crate) fn render_dialogs(&mut self, ctx: &Context) {
        if self.confirm_reset {
            let mut answer = None;

            Modal::new(Id::new("confirm_reset")).show(ctx, |ui| {
                ui.set_width(320.0);
                ui.heading("Reset Settings");
                ui.label("Are you sure you want to reset all settings to defaults?");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("No").clicked() {
                        answer = Some(false);
                    }
                });
            });

            if let Some(confirmed) = answer {
                self.answer_reset(confirmed);
            }
            return;
        }

        let Some(notice) = self.notices.front() else { return };
        let mut dismissed = false;

        let response = Modal::new(Id::new("notice")).show(ctx, |ui| {
            ui.set_width(360.0);

            let title = RichText::new(&notice.title).size(18.0).strong();
            ui.label(match notice.kind {
                NoticeKind::Error => title.color(ERROR),
                NoticeKind::Info => title,
            });

            ui.add_space(6.0);
            ui.label(RichText::new(&notice.message).color(TEXT_DIM));
            ui.add_space(10.0);

            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

        if dismissed || response.should_close() {
            self.notices.pop_front();
        }
    }
}

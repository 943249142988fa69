use super::{EguiApp, style, tooltip};
use crate::egui_app::controller::SubmitOutcome;
use crate::form::FieldId;
use eframe::egui::{self, RichText, Ui};

const INPUT_WIDTH: f32 = 110.0;

impl EguiApp {
    pub(super) fn render_form_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Enter Student & Course Details");
        ui.add_space(8.0);
        egui::ScrollArea::vertical()
            .id_salt("student_form_scroll")
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("student_form_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for field in FieldId::ALL {
                            tooltip::label_with_help(ui, field.label(), Some(field.tooltip()));
                            let mut text = self.controller.ui.form.get(field).to_string();
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut text).desired_width(INPUT_WIDTH),
                            );
                            if response.changed() {
                                self.controller.set_form_field(field, text);
                            }
                            ui.end_row();
                        }
                    });
            });

        let invalid = self.controller.ui.form.non_numeric_fields();
        if !invalid.is_empty() {
            ui.add_space(4.0);
            let names: Vec<&str> = invalid.iter().map(|field| field.label()).collect();
            ui.label(
                RichText::new(format!("Not a number, sent as empty: {}", names.join(", ")))
                    .color(palette.warning)
                    .small(),
            );
        }

        ui.add_space(10.0);
        let running = self.controller.is_prediction_running();
        ui.horizontal(|ui| {
            let label = if running {
                "Analyzing..."
            } else if self.controller.is_prediction_cancelling() {
                "Cancelling..."
            } else {
                "Predict & Explain Outcome"
            };
            let predict = egui::Button::new(RichText::new(label).strong());
            let enabled = self.controller.can_submit_prediction();
            if ui.add_enabled(enabled, predict).clicked() {
                if let SubmitOutcome::Started(request_id) = self.controller.submit_prediction() {
                    tracing::debug!(request_id, "Predict pressed");
                }
            }
            if running {
                if ui.button("Cancel").clicked() {
                    self.controller.cancel_prediction();
                }
            } else if ui.button("Reset").clicked() {
                self.controller.reset_form();
            }
        });
    }
}

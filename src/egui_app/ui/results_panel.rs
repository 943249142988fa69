use super::{EguiApp, explanation_panel, impact_chart, style, tooltip};
use crate::egui_app::view_model::{
    self, AdviceView, ExplanationView, ImportanceRow, OutcomeView, PerformanceView, ReportView,
    Section,
};
use eframe::egui::{self, Align, RichText, Ui};
use std::time::Instant;

impl EguiApp {
    pub(super) fn render_results_panel(&mut self, ui: &mut Ui) {
        let view = view_model::compose(&self.controller.ui);
        let scroll_now = self.controller.take_due_scroll(Instant::now());
        egui::ScrollArea::vertical()
            .id_salt("results_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                card(ui, "About This Model (Global Explanation)", |ui| {
                    section(ui, &view.report, render_report);
                });
                card(ui, "PERFORMANCE: Model Performance & Fairness", |ui| {
                    section(ui, &view.performance, render_performance);
                });
                card(ui, "HOW: Global Feature Importance", |ui| {
                    ui.label("These features have the biggest impact on predictions overall.");
                    section(ui, &view.importance, |ui, rows| render_importance(ui, rows));
                });

                let divider = ui.separator();
                if scroll_now {
                    divider.scroll_to_me(Some(Align::TOP));
                }

                if view.running {
                    card(ui, "Working", |ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Running model and generating explanations...");
                        });
                    });
                }
                if let Some(outcome) = &view.outcome {
                    card(ui, "Prediction Result", |ui| render_outcome(ui, outcome));
                }
                if let Some(advice) = &view.advice {
                    card(ui, &advice.heading, |ui| render_advice(ui, advice));
                }
                if let Some(explanation) = &view.explanation {
                    card(ui, "Local Explanation (WHY / WHY NOT)", |ui| {
                        if let Some(tab) = render_explanation(ui, explanation) {
                            self.controller.select_result_tab(&tab);
                        }
                    });
                }
                if view.show_what_if {
                    card(ui, "\"WHAT IF...?\" Analysis", |ui| {
                        ui.label(
                            "To see how the prediction would change, modify the values in the \
                             form and press \"Predict & Explain Outcome\" again.",
                        );
                    });
                }

                card(ui, "Advanced: How the Model Works", |ui| {
                    ui.label("The core math behind the model.");
                    let label = if self.controller.ui.show_model_details {
                        "Hide Advanced Details"
                    } else {
                        "Show Advanced Details"
                    };
                    if ui.button(label).clicked() {
                        self.controller.toggle_model_details();
                    }
                    if self.controller.ui.show_model_details {
                        ui.add_space(8.0);
                        explanation_panel::render_model_notes(ui);
                    }
                });
            });
    }
}

fn card(ui: &mut Ui, title: &str, body: impl FnOnce(&mut Ui)) {
    style::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).strong().size(17.0));
        ui.add_space(6.0);
        body(ui);
    });
    ui.add_space(10.0);
}

fn section<T>(ui: &mut Ui, section: &Section<T>, render: impl FnOnce(&mut Ui, &T)) {
    match section {
        Section::Placeholder(text) => {
            ui.label(RichText::new(*text).color(style::palette().text_muted));
        }
        Section::Ready(value) => render(ui, value),
    }
}

fn render_report(ui: &mut Ui, report: &ReportView) {
    for (name, text) in [
        ("INPUT:", &report.input),
        ("OUTPUT:", &report.output),
        ("HOW:", &report.how),
    ] {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(name).strong());
            ui.label(text.as_str());
        });
    }
}

fn render_performance(ui: &mut Ui, performance: &PerformanceView) {
    ui.columns(2, |columns| {
        tooltip::label_with_help(&mut columns[0], "Accuracy", performance.accuracy_help.as_deref());
        columns[0].label(RichText::new(&performance.accuracy).size(20.0).strong());
        tooltip::label_with_help(&mut columns[1], "F1-Score (Weighted)", Some(performance.f1_help));
        columns[1].label(RichText::new(&performance.f1_weighted).size(20.0).strong());
    });
}

fn render_importance(ui: &mut Ui, rows: &[ImportanceRow]) {
    for row in rows {
        ui.horizontal_wrapped(|ui| {
            ui.label(format!("{}.", row.rank));
            ui.label(RichText::new(&row.feature).strong());
            ui.label(format!("(Impact: {})", row.importance_text));
        });
    }
}

fn render_outcome(ui: &mut Ui, outcome: &OutcomeView) {
    let color = style::outcome_color(outcome.icon);
    ui.horizontal(|ui| {
        ui.label(RichText::new(outcome.icon.glyph()).size(22.0));
        ui.label(RichText::new(&outcome.headline).size(18.0).color(color));
    });
    ui.add_space(8.0);
    egui::Grid::new("probability_bars")
        .num_columns(3)
        .spacing([10.0, 6.0])
        .show(ui, |ui| {
            for bar in &outcome.bars {
                ui.label(&bar.label);
                ui.add(
                    egui::ProgressBar::new(bar.fill())
                        .desired_width(220.0)
                        .fill(color),
                );
                ui.label(RichText::new(&bar.percent_text).monospace());
                ui.end_row();
            }
        });
}

fn render_advice(ui: &mut Ui, advice: &AdviceView) {
    ui.label(RichText::new(&advice.message).strong());
    for suggestion in &advice.suggestions {
        ui.label(format!("• {suggestion}"));
    }
}

/// Returns the class whose tab was clicked, if any.
fn render_explanation(ui: &mut Ui, explanation: &ExplanationView) -> Option<String> {
    ui.label("What specific features led to this prediction?");
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for tab in &explanation.tabs {
            if ui.selectable_label(tab.active, &tab.label).clicked() {
                clicked = Some(tab.class_name.clone());
            }
        }
    });
    ui.add_space(6.0);
    if let Some(chart) = &explanation.chart {
        impact_chart::render_impact_chart(ui, chart);
    }
    clicked
}

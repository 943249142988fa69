//! egui renderer for the prediction window.

mod explanation_panel;
mod form_panel;
mod impact_chart;
mod notice;
mod results_panel;
pub mod style;
mod tooltip;

use crate::egui_app::controller::EguiController;
use eframe::egui::{self, Frame, Margin, RichText, Vec2};
use std::time::Duration;

/// Smallest window the layout still fits in.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(960.0, 600.0);

/// How often to redraw while background work is outstanding.
const BUSY_REPAINT: Duration = Duration::from_millis(50);

pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Wrap a controller whose startup loads have already been kicked off.
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.heading("Fair Student Outcome Predictor");
                ui.label(
                    RichText::new("Predict student success with fully explainable AI.")
                        .color(palette.text_muted),
                );
            });
    }

    fn render_status(&self, ctx: &egui::Context) {
        let palette = style::palette();
        let status = &self.controller.ui.status;
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (badge, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(badge.center(), 5.0, style::status_color(status.tone));
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();

        self.render_header(ctx);
        self.render_status(ctx);
        egui::SidePanel::left("form_panel")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| self.render_form_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.render_results_panel(ui));
        self.render_notice(ctx);

        if self.controller.has_pending_work() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}

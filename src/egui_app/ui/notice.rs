use super::{EguiApp, style};
use eframe::egui::{self, Align2, Area, Color32, Id, Order, RichText, Sense, Stroke};

impl EguiApp {
    /// Show the oldest pending notice above everything else until dismissed.
    pub(super) fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.controller.ui.notices.current().cloned() else {
            return;
        };
        let palette = style::palette();
        let screen = ctx.viewport_rect();

        ctx.layer_painter(egui::LayerId::new(Order::Foreground, Id::new("notice_dim")))
            .rect_filled(screen, 0.0, Color32::from_black_alpha(150));
        Area::new(Id::new("notice_blocker"))
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.allocate_rect(screen, Sense::click_and_drag());
            });

        let mut dismissed = ctx.input(|input| {
            input.key_pressed(egui::Key::Enter) || input.key_pressed(egui::Key::Escape)
        });
        Area::new(Id::new("notice_window"))
            .order(Order::Tooltip)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .constrain(true)
            .show(ctx, |ui| {
                egui::Frame::window(&ctx.style())
                    .fill(palette.bg_card)
                    .stroke(Stroke::new(1.0, palette.panel_outline))
                    .show(ui, |ui| {
                        ui.set_max_width(420.0);
                        ui.heading(RichText::new(&notice.title).color(palette.warning));
                        ui.add_space(6.0);
                        ui.label(&notice.message);
                        ui.add_space(10.0);
                        let pending = self.controller.ui.notices.len();
                        ui.horizontal(|ui| {
                            if ui.button("OK").clicked() {
                                dismissed = true;
                            }
                            if pending > 1 {
                                ui.label(
                                    RichText::new(format!("{} more", pending - 1))
                                        .color(palette.text_muted),
                                );
                            }
                        });
                    });
            });
        if dismissed {
            self.controller.dismiss_notice();
        }
    }
}

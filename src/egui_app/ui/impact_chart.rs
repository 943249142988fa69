use super::style;
use crate::egui_app::view_model::{ImpactChartView, ImpactSign};
use eframe::egui::{self, RichText, Sense, Stroke, StrokeKind, Ui, vec2};

const BAR_HEIGHT: f32 = 18.0;
const LABEL_WIDTH: f32 = 220.0;
const VALUE_WIDTH: f32 = 64.0;

/// Draw a horizontal bar per feature, widths already scaled by the view model.
pub(super) fn render_impact_chart(ui: &mut Ui, chart: &ImpactChartView) {
    let palette = style::palette();
    ui.label(RichText::new(&chart.title).strong().size(15.0));
    ui.label(RichText::new(&chart.note).color(palette.text_muted));
    ui.add_space(6.0);

    for bar in &chart.bars {
        ui.horizontal(|ui| {
            ui.add_sized(
                [LABEL_WIDTH, BAR_HEIGHT],
                egui::Label::new(RichText::new(&bar.feature)).truncate(),
            );
            let track_width = (ui.available_width() - VALUE_WIDTH).max(40.0);
            let (track, response) =
                ui.allocate_exact_size(vec2(track_width, BAR_HEIGHT), Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(track, 3.0, palette.bg_primary);
            let width = track.width() * (bar.width_percent / 100.0).clamp(0.0, 1.0) as f32;
            if width > 0.0 {
                let mut fill = track;
                fill.set_width(width);
                painter.rect_filled(fill, 3.0, style::impact_color(bar.sign));
            }
            painter.rect_stroke(
                track,
                3.0,
                Stroke::new(1.0, palette.panel_outline),
                StrokeKind::Inside,
            );
            response.on_hover_text(&bar.hover_text);
            ui.label(RichText::new(&bar.value_text).monospace());
        });
        ui.add_space(2.0);
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        for sign in [ImpactSign::Positive, ImpactSign::Negative] {
            let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter()
                .rect_filled(swatch, 2.0, style::impact_color(sign));
            ui.label(RichText::new(sign.legend()).color(palette.text_muted));
            ui.add_space(12.0);
        }
    });
}

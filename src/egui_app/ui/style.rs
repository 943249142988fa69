use crate::egui_app::state::StatusTone;
use crate::egui_app::view_model::{ImpactSign, OutcomeIcon};
use eframe::egui::{
    Color32, Frame, Margin, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_card: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 16, 20),
        bg_secondary: Color32::from_rgb(24, 27, 32),
        bg_card: Color32::from_rgb(32, 36, 42),
        panel_outline: Color32::from_rgb(52, 58, 66),
        text_primary: Color32::from_rgb(214, 220, 228),
        text_muted: Color32::from_rgb(146, 154, 165),
        accent: Color32::from_rgb(110, 168, 254),
        positive: Color32::from_rgb(88, 184, 128),
        negative: Color32::from_rgb(222, 98, 98),
        warning: Color32::from_rgb(224, 168, 82),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_card;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_card;
    visuals.error_fg_color = palette.negative;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        soften(widget, palette);
    }
    visuals.window_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
}

fn soften(widget: &mut WidgetVisuals, palette: Palette) {
    widget.corner_radius = CornerRadius::same(4);
    widget.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    widget.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Frame used for every card in the results column.
pub fn card_frame() -> Frame {
    let palette = palette();
    Frame::new()
        .fill(palette.bg_card)
        .stroke(Stroke::new(1.0, palette.panel_outline))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
}

pub fn status_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Busy => palette.accent,
        StatusTone::Info => palette.positive,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.negative,
    }
}

pub fn impact_color(sign: ImpactSign) -> Color32 {
    let palette = palette();
    match sign {
        ImpactSign::Positive => palette.positive,
        ImpactSign::Negative => palette.negative,
    }
}

pub fn outcome_color(icon: OutcomeIcon) -> Color32 {
    let palette = palette();
    match icon {
        OutcomeIcon::Success => palette.positive,
        OutcomeIcon::Failure => palette.negative,
        OutcomeIcon::Neutral => palette.accent,
    }
}

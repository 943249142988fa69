use super::style;
use eframe::egui::{self, RichText, Ui};

/// A label followed by a small marker that reveals `help` on hover.
///
/// Empty help text renders the label alone.
pub(super) fn label_with_help(ui: &mut Ui, label: impl Into<String>, help: Option<&str>) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        ui.label(RichText::new(label.into()).color(palette.text_primary));
        if let Some(help) = help.filter(|text| !text.trim().is_empty()) {
            ui.add(egui::Label::new(RichText::new("ⓘ").color(palette.accent)).sense(egui::Sense::hover()))
                .on_hover_text(help);
        }
    });
}

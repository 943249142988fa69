use super::style;
use eframe::egui::{RichText, Ui};

enum Block {
    Heading(&'static str),
    Step(&'static str),
    Text(&'static str),
    Quote(&'static str),
    Formula(&'static str),
    Bullet(&'static str),
    Rule,
}

const MODEL_NOTES: &[Block] = &[
    Block::Heading("Overview: what gradient-boosted trees do"),
    Block::Text(
        "The model builds an ensemble of small decision trees, where each new tree learns \
         to correct the errors made by the previous ones.",
    ),
    Block::Quote(
        "\"If admission grade is high and most courses are approved, higher chance of graduation.\"",
    ),
    Block::Text(
        "All trees then combine their votes to produce the final probability that a student \
         will graduate.",
    ),
    Block::Rule,
    Block::Heading("How the model learns"),
    Block::Step("1. Building trees"),
    Block::Formula("ŷ_i = Σ_{t=1}^{T} f_t(x_i)"),
    Block::Step("2. Objective function"),
    Block::Formula("Obj = Σ_{i=1}^{n} l(y_i, ŷ_i) + Σ_{t=1}^{T} Ω(f_t)"),
    Block::Bullet("l(y_i, ŷ_i): how wrong the prediction is (loss)"),
    Block::Bullet("Ω(f_t): penalty for overly complex trees (regularization)"),
    Block::Step("3. Using gradients and Hessians"),
    Block::Formula(
        "Obj^(t) ≈ Σ_i [ l(y_i, ŷ_i^(t-1)) + g_i f_t(x_i) + 0.5 h_i f_t^2(x_i) ] + Ω(f_t)",
    ),
    Block::Step("4. Leaf weights and tree splits"),
    Block::Formula("w_j* = - Σ_{i∈j} g_i / (Σ_{i∈j} h_i + λ)"),
    Block::Formula(
        "Gain = 0.5 [ (Σ_{i∈L} g_i)^2/(...) + (Σ_{i∈R} g_i)^2/(...) - (Σ_{i∈L∪R} g_i)^2/(...) ] - γ",
    ),
    Block::Rule,
    Block::Heading("Making a prediction"),
    Block::Bullet("Student data x is passed through all trees."),
    Block::Bullet("Each tree outputs a small vote or weight."),
    Block::Bullet("All votes are added:"),
    Block::Formula("ŷ_raw = Σ_{t=1}^{T} f_t(x)"),
    Block::Bullet("The sum is converted into a probability with a sigmoid:"),
    Block::Formula("p = 1 / (1 + e^{-ŷ_raw})"),
];

/// Fixed background on the model family behind the predictions.
pub(super) fn render_model_notes(ui: &mut Ui) {
    let palette = style::palette();
    for block in MODEL_NOTES {
        match block {
            Block::Heading(text) => {
                ui.add_space(4.0);
                ui.label(RichText::new(*text).strong().size(16.0));
            }
            Block::Step(text) => {
                ui.add_space(2.0);
                ui.label(RichText::new(*text).strong());
            }
            Block::Text(text) => {
                ui.label(*text);
            }
            Block::Quote(text) => {
                ui.label(RichText::new(*text).italics().color(palette.text_muted));
            }
            Block::Formula(text) => {
                ui.label(RichText::new(*text).monospace().color(palette.accent));
            }
            Block::Bullet(text) => {
                ui.label(format!("• {text}"));
            }
            Block::Rule => {
                ui.separator();
            }
        }
    }
}

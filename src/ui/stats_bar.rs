use crate::compare::DiffStats;
use crate::style::DiffPalette;
use egui::{RichText, Ui};

pub fn show_stats(ui: &mut Ui, stats: &DiffStats) {
    let palette = DiffPalette::for_visuals(ui.visuals());

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("+{} added", stats.added))
                .strong()
                .color(palette.added_text),
        );
        ui.label(
            RichText::new(format!("-{} removed", stats.removed))
                .strong()
                .color(palette.removed_text),
        );
        ui.label(RichText::new(format!("{} unchanged", stats.unchanged)).weak());
    });
}

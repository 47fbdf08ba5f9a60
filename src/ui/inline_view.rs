use crate::compare::{InlineLine, Marker};
use crate::style::DiffPalette;
use egui::{Color32, RichText, Ui};

/// Render inline lines with their marker column. Removed lines are struck through.
pub fn render_inline_view(ui: &mut Ui, lines: &[InlineLine]) {
    let palette = DiffPalette::for_visuals(ui.visuals());
    ui.style_mut().spacing.item_spacing.y = 0.0;

    for line in lines {
        let (bg, fg) = match line.marker {
            Marker::Added => (palette.added_bg, Some(palette.added_text)),
            Marker::Removed => (palette.removed_bg, Some(palette.removed_text)),
            Marker::Context => (Color32::TRANSPARENT, None),
        };

        egui::Frame::default()
            .fill(bg)
            .inner_margin(egui::Margin::symmetric(6, 1))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(line.marker.to_string())
                            .monospace()
                            .color(palette.gutter_text),
                    );

                    let mut rich = RichText::new(&line.text).monospace();
                    if let Some(fg) = fg {
                        rich = rich.color(fg);
                    }
                    if line.marker == Marker::Removed {
                        rich = rich.strikethrough();
                    }
                    ui.add(egui::Label::new(rich).wrap());
                });
            });
    }
}

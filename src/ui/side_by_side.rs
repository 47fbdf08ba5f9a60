use crate::compare::{AlignedRow, RowKind};
use crate::style::DiffPalette;
use egui::{Color32, RichText, Ui};

/// Which side of a row a cell belongs to
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Render aligned rows as a four column table: number, text, number, text
pub fn render_side_by_side(ui: &mut Ui, rows: &[AlignedRow]) {
    let palette = DiffPalette::for_visuals(ui.visuals());
    ui.style_mut().spacing.item_spacing.y = 0.0;

    // Leave room for two gutters and the grid spacing
    let col_w = ((ui.available_width() - 96.0) / 2.0).max(120.0);

    egui::Grid::new("side_by_side_grid")
        .num_columns(4)
        .min_col_width(0.0)
        .spacing(egui::vec2(4.0, 0.0))
        .show(ui, |ui| {
            for row in rows {
                gutter(ui, row.left_line_number, &palette);
                cell(ui, row, Side::Left, &palette, col_w);
                gutter(ui, row.right_line_number, &palette);
                cell(ui, row, Side::Right, &palette, col_w);
                ui.end_row();
            }
        });
}

fn gutter(ui: &mut Ui, number: Option<usize>, palette: &DiffPalette) {
    let text = number.map(|n| n.to_string()).unwrap_or_default();
    ui.label(RichText::new(text).monospace().color(palette.gutter_text));
}

/// Background and text color for one side of a row
fn cell_colors(kind: RowKind, side: Side, palette: &DiffPalette) -> Option<(Color32, Color32)> {
    match (kind, side) {
        (RowKind::Removed, Side::Left) => Some((palette.removed_bg, palette.removed_text)),
        (RowKind::Added, Side::Right) => Some((palette.added_bg, palette.added_text)),
        (RowKind::Modified, _) => Some((palette.modified_bg, palette.modified_text)),
        _ => None,
    }
}

fn cell(ui: &mut Ui, row: &AlignedRow, side: Side, palette: &DiffPalette, width: f32) {
    let text = match side {
        Side::Left => row.left_text.as_deref(),
        Side::Right => row.right_text.as_deref(),
    };
    let colors = cell_colors(row.kind, side, palette).filter(|_| text.is_some());

    egui::Frame::default()
        .fill(colors.map(|(bg, _)| bg).unwrap_or(Color32::TRANSPARENT))
        .inner_margin(egui::Margin::symmetric(4, 1))
        .show(ui, |ui| {
            ui.set_min_width(width);
            ui.set_max_width(width);

            let mut rich = RichText::new(text.unwrap_or("")).monospace();
            if let Some((_, fg)) = colors {
                rich = rich.color(fg);
            }
            ui.add(egui::Label::new(rich).wrap());
        });
}

use crate::messages::Pane;
use crate::workbench::Workbench;
use egui::Ui;

const INPUT_ROWS: usize = 10;

/// What happened in the input panes this frame
#[derive(Default)]
pub struct InputEvents {
    pub edited: bool,
    pub open: Option<Pane>,
}

pub fn show_inputs(ui: &mut Ui, workbench: &mut Workbench) -> InputEvents {
    let mut events = InputEvents::default();

    ui.columns(2, |columns| {
        for (column, pane) in columns.iter_mut().zip([Pane::Left, Pane::Right]) {
            column.horizontal(|ui| {
                ui.strong(pane.label());
                if ui.small_button("Open…").clicked() {
                    events.open = Some(pane);
                }
            });

            let hint = match pane {
                Pane::Left => "Paste original text...",
                Pane::Right => "Paste modified text...",
            };
            let response = column.add(
                egui::TextEdit::multiline(workbench.text_mut(pane))
                    .code_editor()
                    .hint_text(hint)
                    .desired_rows(INPUT_ROWS)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                events.edited = true;
            }
        }
    });

    events
}

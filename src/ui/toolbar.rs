use crate::compare::ComparisonOptions;
use crate::config::ViewMode;
use egui::Ui;

pub enum ToolbarAction {
    Compare,
    CopyInline,
    CopyJson,
}

pub struct ToolbarState<'a> {
    pub can_compare: bool,
    pub has_result: bool,
    pub pending: bool,
    pub view_mode: &'a mut ViewMode,
    pub options: &'a mut ComparisonOptions,
}

pub struct Toolbar;

impl Toolbar {
    /// Draw the controls row. View mode and options are edited in place.
    pub fn show(ui: &mut Ui, state: ToolbarState<'_>) -> Option<ToolbarAction> {
        let ToolbarState {
            can_compare,
            has_result,
            pending,
            view_mode,
            options,
        } = state;

        let mut action = None;

        ui.horizontal_wrapped(|ui| {
            if ui
                .add_enabled(can_compare, egui::Button::new("Compare"))
                .on_hover_text("Ctrl+Enter")
                .clicked()
            {
                action = Some(ToolbarAction::Compare);
            }
            if pending {
                ui.spinner();
            }

            ui.separator();
            ui.selectable_value(view_mode, ViewMode::Side, "Side by Side");
            ui.selectable_value(view_mode, ViewMode::Inline, "Inline");

            ui.separator();
            ui.checkbox(&mut options.ignore_case, "Ignore case");
            ui.checkbox(&mut options.ignore_whitespace, "Ignore whitespace");

            ui.separator();
            if ui
                .add_enabled(has_result, egui::Button::new("Copy"))
                .on_hover_text("Copy inline diff (Ctrl+Shift+C)")
                .clicked()
            {
                action = Some(ToolbarAction::CopyInline);
            }
            if ui
                .add_enabled(has_result, egui::Button::new("Copy JSON"))
                .on_hover_text("Ctrl+Shift+J")
                .clicked()
            {
                action = Some(ToolbarAction::CopyJson);
            }
        });

        action
    }
}

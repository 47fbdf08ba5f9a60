use crate::backend::{spawn_compare_backend, spawn_open_dialog};
use crate::config::{Config, ViewMode};
use crate::export::{ExportFormat, export};
use crate::messages::{Pane, ResponseMessage};
use crate::style::configure_style;
use crate::ui::inline_view::render_inline_view;
use crate::ui::inputs::show_inputs;
use crate::ui::shortcuts::{ShortcutAction, take_action};
use crate::ui::side_by_side::render_side_by_side;
use crate::ui::stats_bar::show_stats;
use crate::ui::toast::Toasts;
use crate::ui::toolbar::{Toolbar, ToolbarAction, ToolbarState};
use crate::workbench::{CompareOutcome, InputLimits, Workbench};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;
use tracing::{info, warn};

const PENDING_POLL: Duration = Duration::from_millis(30);

pub struct TextCompareApp {
    config: Config,
    workbench: Workbench,
    view_mode: ViewMode,
    toasts: Toasts,
    response_sender: Sender<ResponseMessage>,
    response_receiver: Receiver<ResponseMessage>,
}

impl TextCompareApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        configure_style(&cc.egui_ctx, config.settings.theme, config.settings.font_size);

        let (response_sender, response_receiver) = mpsc::channel();
        let handle = spawn_compare_backend(response_sender.clone());
        let workbench = Workbench::new(
            handle,
            config.default_options(),
            InputLimits {
                max_bytes: config.settings.max_input_bytes,
                max_lines: config.settings.max_input_lines,
            },
        );
        let toasts = Toasts::new(Duration::from_secs_f32(
            config.settings.toast_seconds.max(0.5),
        ));

        Self {
            view_mode: config.settings.default_view_mode,
            config,
            workbench,
            toasts,
            response_sender,
            response_receiver,
        }
    }

    fn handle_responses(&mut self) {
        while let Ok(response) = self.response_receiver.try_recv() {
            match response {
                ResponseMessage::Compared { generation, result } => {
                    self.workbench.accept(generation, result);
                }
                ResponseMessage::FileLoaded { pane, result } => match result {
                    Ok(file) => {
                        info!("Showing {:?} in {:?} pane", file.path, pane);
                        let name = file
                            .path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| file.path.display().to_string());
                        self.workbench.set_text(pane, file.content);
                        self.toasts.info(format!("Opened {} as {}", name, pane.label()));
                    }
                    Err(e) => self.toasts.error(format!("Could not open file: {}", e)),
                },
            }
        }
    }

    fn run_compare(&mut self) {
        match self.workbench.compare() {
            CompareOutcome::Submitted(_) => {}
            CompareOutcome::NothingToCompare => {}
            CompareOutcome::TooLarge { size, limit } => {
                self.toasts.error(format!(
                    "Input too large to compare ({} bytes, limit {})",
                    size, limit
                ));
            }
            CompareOutcome::TooManyLines { lines, limit } => {
                self.toasts.error(format!(
                    "Input too long to compare ({} lines, limit {})",
                    lines, limit
                ));
            }
        }
    }

    fn copy(&mut self, ctx: &egui::Context, format: ExportFormat) {
        let Some(result) = self.workbench.result() else {
            return;
        };

        match export(result, format) {
            Ok(text) => {
                ctx.copy_text(text);
                info!("Copied comparison as {:?}", format);
                self.toasts.success("Copied to clipboard");
            }
            Err(e) => {
                warn!("Failed to export comparison: {}", e);
                self.toasts.error(e.to_string());
            }
        }
    }

    fn open_file(&self, pane: Pane) {
        spawn_open_dialog(
            pane,
            self.config.open_dir(),
            self.config.settings.max_input_bytes,
            self.response_sender.clone(),
        );
    }

    fn show_result(&self, ui: &mut egui::Ui) {
        let Some(result) = self.workbench.result() else {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.weak("Enter two texts and click \"Compare\" to see differences");
            });
            return;
        };

        show_stats(ui, &result.stats);
        ui.separator();

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.view_mode {
                ViewMode::Side => render_side_by_side(ui, &result.rows),
                ViewMode::Inline => render_inline_view(ui, &result.inline),
            });
    }
}

impl eframe::App for TextCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_responses();

        // Shortcuts are taken before any text field can see the keys
        match take_action(ctx) {
            Some(ShortcutAction::Compare) => self.run_compare(),
            Some(ShortcutAction::CopyInline) => self.copy(ctx, ExportFormat::InlineText),
            Some(ShortcutAction::CopyJson) => self.copy(ctx, ExportFormat::Json),
            None => {}
        }

        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            let mut options = self.workbench.options();
            let action = Toolbar::show(
                ui,
                ToolbarState {
                    can_compare: self.workbench.can_compare(),
                    has_result: self.workbench.result().is_some(),
                    pending: self.workbench.is_pending(),
                    view_mode: &mut self.view_mode,
                    options: &mut options,
                },
            );
            self.workbench.set_options(options);

            match action {
                Some(ToolbarAction::Compare) => self.run_compare(),
                Some(ToolbarAction::CopyInline) => self.copy(ctx, ExportFormat::InlineText),
                Some(ToolbarAction::CopyJson) => self.copy(ctx, ExportFormat::Json),
                None => {}
            }
            ui.add_space(2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.weak("Paste two texts and compare them line by line. Differences are highlighted by color.");
            let events = show_inputs(ui, &mut self.workbench);
            if events.edited {
                self.workbench.invalidate();
            }
            if let Some(pane) = events.open {
                self.open_file(pane);
            }
            ui.separator();
            self.show_result(ui);
        });

        self.toasts.show(ctx);

        if self.workbench.is_pending() {
            ctx.request_repaint_after(PENDING_POLL);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.settings.default_view_mode = self.view_mode;
        let options = self.workbench.options();
        self.config.settings.default_ignore_case = options.ignore_case;
        self.config.settings.default_ignore_whitespace = options.ignore_whitespace;
        if let Err(e) = self.config.save() {
            warn!("Failed to save settings on exit: {}", e);
        }
    }
}

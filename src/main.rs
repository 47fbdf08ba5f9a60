use text_compare::app::TextCompareApp;
use text_compare::config::Config;
use text_compare::constant::{self, LOG_ENV_VAR};
use text_compare::ui;
use tracing::Level;

fn init_logging() {
    let level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn main() -> eframe::Result {
    init_logging();

    let config = Config::default();
    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let fonts = ui::font::setup_fonts(config.settings.monospace_font.as_deref());
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(TextCompareApp::new(cc, config)))
        }),
    )
}

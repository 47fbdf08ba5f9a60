// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;
pub const DEFAULT_WINDOW_TITLE: &str = "Text Compare";

/// Application name and metadata constants
pub const APP_NAME: &str = "Text Compare";

/// Environment variable holding the log level for the binary
pub const LOG_ENV_VAR: &str = "TEXT_COMPARE_LOG";

/// App related Magic Numbers
pub const DEFAULT_MAX_INPUT_BYTES: usize = 2 * 1024 * 1024;
pub const DEFAULT_MAX_INPUT_LINES: usize = 20_000;
pub const DEFAULT_TOAST_SECONDS: f32 = 2.0;
pub const DEFAULT_FONT_SIZE: f32 = 13.0;
pub const MAX_VISIBLE_TOASTS: usize = 3;
pub const TEXT_FILE_EXTENSIONS: &[&str] = &["txt", "md", "json", "csv", "log", "rs", "toml"];

//! Example demonstrating the configuration system
//!
//! Run with: cargo run --example config_demo

use text_compare::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Text Compare Configuration Demo ===\n");

    let config = Config::load()?;
    let settings = &config.settings;

    println!("Current settings:");
    println!("  Theme: {:?}", settings.theme);
    println!("  Font size: {}", settings.font_size);
    println!(
        "  Monospace font: {}",
        settings.monospace_font.as_deref().unwrap_or("(default)")
    );
    println!("  Default view: {:?}", settings.default_view_mode);
    println!("  Default options: {:?}", config.default_options());
    println!("  Input limit: {} bytes", settings.max_input_bytes);
    println!("  Line limit: {} lines", settings.max_input_lines);

    println!("\nOpen dialog starts in: {}", config.open_dir().display());
    println!("Config file: {}", Config::config_path()?.display());

    Ok(())
}

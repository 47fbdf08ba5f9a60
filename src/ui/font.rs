/// Font setup for the comparison panes
///
/// The diff panes are monospace. A configured system font is put in front of
/// the monospace family, and a CJK-capable system font is appended to both
/// families so non-Latin text still renders.
use eframe::egui::{FontData, FontDefinitions, FontFamily};
use font_kit::family_name::FamilyName;
use font_kit::handle::Handle;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use std::sync::Arc;

const MONOSPACE_FONT_KEY: &str = "ConfiguredMonospace";
const CJK_FONT_KEY: &str = "SystemCJKFont";

/// Build font definitions, starting from egui's defaults
pub fn setup_fonts(monospace_font: Option<&str>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    let source = SystemSource::new();

    match monospace_font {
        Some(name) => match load_family(&source, name) {
            Some(bytes) => {
                register(&mut fonts, MONOSPACE_FONT_KEY, bytes);
                fonts
                    .families
                    .entry(FontFamily::Monospace)
                    .or_default()
                    .insert(0, MONOSPACE_FONT_KEY.to_owned());
                tracing::info!("Using system font '{}' for the diff panes", name);
            }
            None => tracing::warn!("Configured font '{}' not found, using defaults", name),
        },
        None => load_generic_monospace(&mut fonts, &source),
    }

    let cjk = cjk_font_names()
        .iter()
        .find_map(|name| load_family(&source, name).map(|bytes| (*name, bytes)));
    if let Some((name, bytes)) = cjk {
        register(&mut fonts, CJK_FONT_KEY, bytes);
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push(CJK_FONT_KEY.to_owned());
        }
        tracing::info!("Using system font '{}' as CJK fallback", name);
    }

    fonts
}

fn cjk_font_names() -> &'static [&'static str] {
    match std::env::consts::OS {
        "macos" => &["PingFang SC", "Hiragino Sans GB", "Heiti SC"],
        "windows" => &["Microsoft YaHei", "SimSun", "MS Gothic"],
        "linux" => &["Noto Sans CJK SC", "Noto Sans CJK TC", "WenQuanYi Micro Hei"],
        _ => &[],
    }
}

fn register(fonts: &mut FontDefinitions, key: &str, bytes: Vec<u8>) {
    fonts
        .font_data
        .insert(key.to_owned(), Arc::new(FontData::from_owned(bytes)));
}

fn load_family(source: &SystemSource, name: &str) -> Option<Vec<u8>> {
    let family = source.select_family_by_name(name).ok()?;
    let handle = family.fonts().first()?;
    read_handle(handle)
}

fn read_handle(handle: &Handle) -> Option<Vec<u8>> {
    match handle {
        Handle::Memory { bytes, .. } => Some(bytes.to_vec()),
        Handle::Path { path, .. } => std::fs::read(path).ok(),
    }
}

/// Without a configured font, egui's bundled monospace font stays first and a
/// system monospace font is only added as a fallback
fn load_generic_monospace(fonts: &mut FontDefinitions, source: &SystemSource) {
    let Ok(handle) = source.select_best_match(&[FamilyName::Monospace], &Properties::new())
    else {
        tracing::debug!("No system monospace font found");
        return;
    };

    if let Some(bytes) = read_handle(&handle) {
        register(fonts, MONOSPACE_FONT_KEY, bytes);
        fonts
            .families
            .entry(FontFamily::Monospace)
            .or_default()
            .push(MONOSPACE_FONT_KEY.to_owned());
    }
}

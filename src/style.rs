use crate::config::Theme;
use egui::{Color32, Context, FontFamily, FontId, Stroke, Style, TextStyle, Visuals};

pub fn configure_style(ctx: &Context, theme: Theme, font_size: f32) {
    let mut style = Style::default();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.text_styles.insert(
        TextStyle::Monospace,
        FontId::new(font_size, FontFamily::Monospace),
    );

    ctx.set_style(style);

    let mut visuals = match theme {
        Theme::Light => Visuals::light(),
        Theme::Dark => Visuals::dark(),
    };
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, visuals.faint_bg_color);
    visuals.selection.bg_fill = Color32::from_rgb(200, 220, 255);

    ctx.set_visuals(visuals);
}

/// Cell colors for the diff views
#[derive(Debug, Clone, Copy)]
pub struct DiffPalette {
    pub removed_bg: Color32,
    pub removed_text: Color32,
    pub added_bg: Color32,
    pub added_text: Color32,
    pub modified_bg: Color32,
    pub modified_text: Color32,
    pub gutter_text: Color32,
}

impl DiffPalette {
    pub fn for_visuals(visuals: &Visuals) -> Self {
        if visuals.dark_mode {
            Self {
                removed_bg: Color32::from_rgb(72, 30, 30),
                removed_text: Color32::from_rgb(252, 165, 165),
                added_bg: Color32::from_rgb(24, 64, 36),
                added_text: Color32::from_rgb(134, 239, 172),
                modified_bg: Color32::from_rgb(70, 60, 20),
                modified_text: Color32::from_rgb(253, 224, 71),
                gutter_text: Color32::from_gray(110),
            }
        } else {
            Self {
                removed_bg: Color32::from_rgb(255, 230, 230),
                removed_text: Color32::from_rgb(150, 0, 0),
                added_bg: Color32::from_rgb(230, 255, 230),
                added_text: Color32::from_rgb(0, 100, 0),
                modified_bg: Color32::from_rgb(254, 249, 215),
                modified_text: Color32::from_rgb(133, 100, 4),
                gutter_text: Color32::from_gray(150),
            }
        }
    }
}

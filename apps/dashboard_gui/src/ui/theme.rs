//! Console theming: palette lookup and egui visuals derived from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsolePalette {
    // Backgrounds:
    pub app_background: egui::Color32,
    pub rail_background: egui::Color32,
    pub card_background: egui::Color32,
    pub card_hover: egui::Color32,

    // Text:
    pub title_text: egui::Color32,
    pub body_text: egui::Color32,
    pub hint_text: egui::Color32,

    // Accents and strokes:
    pub accent: egui::Color32,
    pub accent_hover: egui::Color32,
    pub panel_stroke: egui::Color32,
    pub panel_stroke_active: egui::Color32,

    // Status colors:
    pub low_stock: egui::Color32,
    pub status_open: egui::Color32,
    pub status_closed: egui::Color32,
    pub danger_background: egui::Color32,
    pub danger_stroke: egui::Color32,

    // Assistant chat:
    pub bubble_user: egui::Color32,
    pub bubble_assistant: egui::Color32,
}

pub fn console_palette(mode: ThemeMode) -> ConsolePalette {
    match mode {
        ThemeMode::Dark => ConsolePalette {
            app_background: egui::Color32::from_rgb(24, 26, 31),
            rail_background: egui::Color32::from_rgb(17, 18, 22),
            card_background: egui::Color32::from_rgb(32, 35, 42),
            card_hover: egui::Color32::from_rgb(41, 45, 54),
            title_text: egui::Color32::from_rgb(240, 242, 246),
            body_text: egui::Color32::from_rgb(212, 216, 224),
            hint_text: egui::Color32::from_rgb(122, 128, 142),
            accent: egui::Color32::from_rgb(66, 133, 244),
            accent_hover: egui::Color32::from_rgb(92, 152, 248),
            panel_stroke: egui::Color32::from_rgb(52, 56, 66),
            panel_stroke_active: egui::Color32::from_rgb(96, 104, 122),
            low_stock: egui::Color32::from_rgb(235, 166, 68),
            status_open: egui::Color32::from_rgb(97, 197, 132),
            status_closed: egui::Color32::from_rgb(128, 134, 148),
            danger_background: egui::Color32::from_rgb(111, 53, 53),
            danger_stroke: egui::Color32::from_rgb(175, 96, 96),
            bubble_user: egui::Color32::from_rgb(47, 74, 120),
            bubble_assistant: egui::Color32::from_rgb(42, 46, 55),
        },
        ThemeMode::Light => ConsolePalette {
            app_background: egui::Color32::from_rgb(245, 246, 249),
            rail_background: egui::Color32::from_rgb(232, 234, 239),
            card_background: egui::Color32::WHITE,
            card_hover: egui::Color32::from_rgb(239, 242, 247),
            title_text: egui::Color32::from_rgb(28, 32, 40),
            body_text: egui::Color32::from_rgb(52, 58, 70),
            hint_text: egui::Color32::from_rgb(128, 136, 150),
            accent: egui::Color32::from_rgb(40, 102, 210),
            accent_hover: egui::Color32::from_rgb(62, 122, 226),
            panel_stroke: egui::Color32::from_rgb(208, 212, 220),
            panel_stroke_active: egui::Color32::from_rgb(148, 156, 170),
            low_stock: egui::Color32::from_rgb(178, 112, 20),
            status_open: egui::Color32::from_rgb(32, 136, 76),
            status_closed: egui::Color32::from_rgb(118, 124, 136),
            danger_background: egui::Color32::from_rgb(247, 214, 214),
            danger_stroke: egui::Color32::from_rgb(196, 112, 112),
            bubble_user: egui::Color32::from_rgb(212, 228, 252),
            bubble_assistant: egui::Color32::from_rgb(236, 238, 243),
        },
    }
}

pub fn visuals_for_theme(mode: ThemeMode) -> egui::Visuals {
    let palette = console_palette(mode);
    let mut visuals = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };

    visuals.override_text_color = None;
    visuals.window_fill = palette.card_background;
    visuals.panel_fill = palette.app_background;
    visuals.extreme_bg_color = palette.rail_background;
    visuals.faint_bg_color = palette.card_hover;
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent;
    visuals.window_corner_radius = egui::CornerRadius::same(10);
    visuals.menu_corner_radius = egui::CornerRadius::same(8);
    visuals.window_stroke = egui::Stroke::new(1.0, palette.panel_stroke);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.panel_stroke);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.panel_stroke);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.panel_stroke_active);
    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.hovered.bg_fill = palette.card_hover;

    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

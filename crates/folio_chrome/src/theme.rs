use egui::{style::Selection, Color32, Stroke, Visuals};

pub const ACCENT: Color32 = Color32::from_rgb(0x3B, 0x6E, 0xA8);
const ACCENT_ALT: Color32 = Color32::from_rgb(0x5A, 0x8F, 0xCC);
pub const GRAY_SECONDARY: Color32 = Color32::from_rgb(0x8A, 0x8A, 0x8A);
const BLACK: Color32 = Color32::from_rgb(0x1A, 0x1A, 0x1A);
const RED_700: Color32 = Color32::from_rgb(0xC7, 0x37, 0x5A);
const ORANGE_700: Color32 = Color32::from_rgb(0xF6, 0xB1, 0x4A);

/// Marks the owner's name in author lists and the "new" badge on news.
pub const HIGHLIGHT: Color32 = Color32::from_rgb(0xE0, 0x8A, 0x1E);

// BACKGROUNDS
const SEMI_DARKER_BG: Color32 = Color32::from_rgb(0x39, 0x39, 0x39);
const DARKER_BG: Color32 = Color32::from_rgb(0x1F, 0x1F, 0x1F);
const DARK_BG: Color32 = Color32::from_rgb(0x2C, 0x2C, 0x2C);
const DARK_ISH_BG: Color32 = Color32::from_rgb(0x25, 0x25, 0x25);
const SEMI_DARK_BG: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);

const LIGHTER_GRAY: Color32 = Color32::from_rgb(0xf8, 0xf8, 0xf8);
const LIGHT_GRAY: Color32 = Color32::from_rgb(0xc8, 0xc8, 0xc8); // 78%
const DARKER_GRAY: Color32 = Color32::from_rgb(0xa5, 0xa5, 0xa5); // 65%

/// The handful of colours that differ between the two schemes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTheme {
    pub panel_fill: Color32,
    pub extreme_bg_color: Color32,
    pub text_color: Color32,
    pub hyperlink_color: Color32,
    pub selection_color: Color32,
    pub window_fill: Color32,
    pub window_stroke_color: Color32,
    pub noninteractive_weak_bg_fill: Color32,
    pub noninteractive_bg_stroke_color: Color32,
    pub inactive_weak_bg_fill: Color32,
    /// Background of calendar days that have an activity
    pub activity_fill: Color32,
}

pub fn dark_color_theme() -> ColorTheme {
    ColorTheme {
        panel_fill: DARKER_BG,
        extreme_bg_color: DARK_ISH_BG,
        text_color: Color32::WHITE,
        hyperlink_color: ACCENT_ALT,
        selection_color: ACCENT,
        window_fill: DARK_ISH_BG,
        window_stroke_color: DARK_BG,
        noninteractive_weak_bg_fill: DARK_BG,
        noninteractive_bg_stroke_color: SEMI_DARKER_BG,
        inactive_weak_bg_fill: SEMI_DARK_BG,
        activity_fill: Color32::from_rgb(0x23, 0x3A, 0x55),
    }
}

pub fn light_color_theme() -> ColorTheme {
    ColorTheme {
        panel_fill: Color32::WHITE,
        extreme_bg_color: LIGHTER_GRAY,
        text_color: BLACK,
        hyperlink_color: ACCENT,
        selection_color: ACCENT_ALT,
        window_fill: Color32::WHITE,
        window_stroke_color: DARKER_GRAY,
        noninteractive_weak_bg_fill: LIGHTER_GRAY,
        noninteractive_bg_stroke_color: LIGHT_GRAY,
        inactive_weak_bg_fill: LIGHTER_GRAY,
        activity_fill: Color32::from_rgb(0xDD, 0xEA, 0xF7),
    }
}

pub fn color_theme(theme: folio::Theme) -> ColorTheme {
    match theme {
        folio::Theme::Light => light_color_theme(),
        folio::Theme::Dark => dark_color_theme(),
    }
}

pub fn create_themed_visuals(theme: ColorTheme, default: Visuals) -> Visuals {
    let mut widgets = default.widgets.clone();
    widgets.noninteractive.weak_bg_fill = theme.noninteractive_weak_bg_fill;
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme.noninteractive_bg_stroke_color);
    widgets.inactive.weak_bg_fill = theme.inactive_weak_bg_fill;

    Visuals {
        hyperlink_color: theme.hyperlink_color,
        override_text_color: Some(theme.text_color),
        panel_fill: theme.panel_fill,
        selection: Selection {
            bg_fill: theme.selection_color,
            stroke: Stroke::new(1.0, theme.selection_color),
        },
        warn_fg_color: ORANGE_700,
        error_fg_color: RED_700,
        extreme_bg_color: theme.extreme_bg_color,
        window_fill: theme.window_fill,
        window_stroke: Stroke::new(1.0, theme.window_stroke_color),
        widgets,
        ..default
    }
}

pub fn light_mode() -> Visuals {
    create_themed_visuals(light_color_theme(), Visuals::light())
}

pub fn dark_mode() -> Visuals {
    create_themed_visuals(dark_color_theme(), Visuals::dark())
}

pub fn egui_theme(theme: folio::Theme) -> egui::Theme {
    match theme {
        folio::Theme::Light => egui::Theme::Light,
        folio::Theme::Dark => egui::Theme::Dark,
    }
}

pub fn from_egui_theme(theme: egui::Theme) -> folio::Theme {
    match theme {
        egui::Theme::Light => folio::Theme::Light,
        egui::Theme::Dark => folio::Theme::Dark,
    }
}

/// Pin the context to one scheme. Both visual sets are installed once in
/// setup, this only flips which one is used.
pub fn apply(ctx: &egui::Context, theme: folio::Theme) {
    ctx.options_mut(|o| {
        o.theme_preference = egui_theme(theme).into();
    });
}

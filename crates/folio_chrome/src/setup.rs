use eframe::NativeOptions;
use folio::Theme;

use crate::theme;

pub const WINDOW_TITLE: &str = "Folio";

pub fn generate_native_options() -> NativeOptions {
    let window_builder = Box::new(move |builder: egui::ViewportBuilder| {
        builder
            .with_title(WINDOW_TITLE)
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([420.0, 480.0])
    });

    eframe::NativeOptions {
        window_builder: Some(window_builder),
        ..Default::default()
    }
}

/// Install both visual sets, pin the starting scheme and tune spacing.
pub fn setup_cc(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals_of(egui::Theme::Dark, theme::dark_mode());
    ctx.set_visuals_of(egui::Theme::Light, theme::light_mode());
    theme::apply(ctx, theme);

    ctx.all_styles_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);
    });
}

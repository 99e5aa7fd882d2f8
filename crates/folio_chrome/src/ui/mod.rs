//! Rendering of the two pages. Views read the state freely but never
//! change it: they hand back [`folio::Action`]s which the app applies once
//! the frame's layout is done.

mod calendar;
mod header;
mod lists;
mod personal;
mod portfolio;
mod publications;

pub use calendar::{legend_ui, to_size, CalendarResponse, CalendarUi, DayTooltip};
pub use header::{HeaderBar, HeaderResponse};
pub use personal::PersonalPage;
pub use portfolio::{PortfolioPage, PortfolioResponse};

use egui::{Rect, RichText};
use folio::tooltip::Bounds;
use folio::visibility::{RevealWatcher, VisibilityWatcher};
use folio::{AppState, PreferenceStore};

pub type FolioState = AppState<Box<dyn PreferenceStore>>;

pub fn to_bounds(rect: Rect) -> Bounds {
    Bounds::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

pub fn section_heading(ui: &mut egui::Ui, text: String) -> egui::Response {
    ui.add_space(18.0);
    let response = ui.label(RichText::new(text).size(22.0).strong());
    ui.separator();
    response
}

/// Draw `add_contents` faded in once it has been seen on screen.
///
/// Elements the reveal watcher is not tracking are drawn normally.
pub fn reveal<R>(
    ui: &mut egui::Ui,
    watcher: &mut RevealWatcher<String>,
    viewport: Rect,
    key: String,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let shown = !watcher.is_tracked(&key) || watcher.is_revealed(&key);
    let id = ui.id().with(("reveal", &key));
    let opacity = ui.ctx().animate_bool_with_time(id, shown, 0.35);

    let inner = ui.scope(|ui| {
        ui.multiply_opacity(opacity);
        add_contents(ui)
    });

    watcher.observe(key, to_bounds(inner.response.rect), to_bounds(viewport));
    inner.inner
}

/// The "show more" / "show less" toggle under a paginated list. Draws
/// nothing when the list fits.
pub fn show_more_button(
    ui: &mut egui::Ui,
    i18n: &mut folio::Localization,
    has_more: bool,
    expanded: bool,
) -> bool {
    if !has_more {
        return false;
    }

    let label = if expanded {
        i18n.tr("show-less")
    } else {
        i18n.tr("show-more")
    };

    ui.add_space(4.0);
    ui.button(label).clicked()
}

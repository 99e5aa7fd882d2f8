use egui::{Align, Layout, RichText};
use folio::{Action, Route, Section};
use strum::IntoEnumIterator;

use super::FolioState;
use crate::theme;

/// Top navigation: section links on the portfolio, a way back from the
/// personal page, and the two preference toggles.
pub struct HeaderBar<'a> {
    state: &'a mut FolioState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HeaderResponse {
    pub action: Option<Action>,
    /// A section link was clicked
    pub jump_to: Option<Section>,
}

impl<'a> HeaderBar<'a> {
    pub fn new(state: &'a mut FolioState) -> Self {
        Self { state }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> HeaderResponse {
        let mut resp = HeaderResponse::default();

        ui.horizontal_wrapped(|ui| {
            match self.state.route {
                Route::Portfolio => self.section_links(ui, &mut resp),
                Route::Personal => {
                    let label = format!("← {}", self.state.i18n.tr("page-portfolio"));
                    if ui.link(label).clicked() {
                        resp.action = Some(Action::Navigate(Route::Portfolio));
                    }
                }
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                self.toggles(ui, &mut resp);
            });
        });

        resp
    }

    fn section_links(&mut self, ui: &mut egui::Ui, resp: &mut HeaderResponse) {
        let active = self.state.active_section.active().copied();
        for section in Section::iter() {
            let label = self.state.i18n.tr(section.nav_key());
            if ui
                .selectable_label(active == Some(section), label)
                .clicked()
            {
                resp.jump_to = Some(section);
            }
        }

        let personal = self.state.i18n.tr("nav-personal");
        if ui.selectable_label(false, personal).clicked() {
            resp.action = Some(Action::Navigate(Route::Personal));
        }
    }

    fn toggles(&mut self, ui: &mut egui::Ui, resp: &mut HeaderResponse) {
        let theme_icon = self.state.theme().toggle_icon();
        let hint = self.state.i18n.tr("theme-toggle-hint");
        if ui
            .button(RichText::new(theme_icon).color(theme::ACCENT))
            .on_hover_text(hint)
            .clicked()
        {
            resp.action = Some(Action::ToggleTheme);
        }

        let lang_label = self.state.language().toggle_label();
        let hint = self.state.i18n.tr("lang-toggle-hint");
        if ui.button(lang_label).on_hover_text(hint).clicked() {
            resp.action = Some(Action::ToggleLanguage);
        }
    }
}

use egui::{Align, Rect, RichText};
use folio::views::ListSection;
use folio::visibility::VisibilityWatcher;
use folio::{Action, Section};
use strum::IntoEnumIterator;

use super::lists::ListUi;
use super::publications::PublicationsUi;
use super::{section_heading, to_bounds, FolioState};
use crate::theme;

/// The academic page: profile, then one block per [`Section`].
pub struct PortfolioPage<'a> {
    state: &'a mut FolioState,
    viewport: Rect,
    hour: u32,
    jump_to: Option<Section>,
}

#[derive(Debug, Default)]
pub struct PortfolioResponse {
    pub action: Option<Action>,
    pub back_to_top: bool,
}

impl<'a> PortfolioPage<'a> {
    pub fn new(state: &'a mut FolioState, viewport: Rect, hour: u32) -> Self {
        Self {
            state,
            viewport,
            hour,
            jump_to: None,
        }
    }

    /// Scroll the page so that `section` starts at the top.
    pub fn jump_to(mut self, section: Option<Section>) -> Self {
        self.jump_to = section;
        self
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> PortfolioResponse {
        let mut resp = PortfolioResponse::default();

        for section in Section::iter() {
            let inner = ui.scope(|ui| self.section(ui, section));
            let rect = inner.response.rect;

            self.state
                .active_section
                .observe(section, to_bounds(rect), to_bounds(self.viewport));

            if self.jump_to == Some(section) {
                ui.scroll_to_rect(rect, Some(Align::TOP));
            }

            if let Some(action) = inner.inner {
                resp.action = Some(action);
            }
        }

        ui.add_space(24.0);
        let back = self.state.i18n.tr("nav-back-to-top");
        if ui.link(format!("↑ {back}")).clicked() {
            resp.back_to_top = true;
        }
        ui.add_space(24.0);

        resp
    }

    fn section(&mut self, ui: &mut egui::Ui, section: Section) -> Option<Action> {
        let list = match section {
            Section::About => {
                self.about(ui);
                return None;
            }
            Section::Publications => {
                let title = self.state.i18n.tr("pub-title");
                section_heading(ui, title);
                return PublicationsUi::new(self.state, self.viewport).ui(ui);
            }
            Section::News => ListSection::News,
            Section::Talks => ListSection::Talks,
            Section::Awards => ListSection::Awards,
            Section::Media => ListSection::Media,
        };

        let title = self.state.i18n.tr(list.title_key());
        section_heading(ui, title);
        ListUi::new(self.state, list, self.viewport).ui(ui)
    }

    fn about(&mut self, ui: &mut egui::Ui) {
        let language = self.state.language();
        let greeting = self.state.greeting(self.hour);
        let profile = &self.state.catalog.profile;

        ui.add_space(24.0);
        ui.label(RichText::new(greeting).color(theme::GRAY_SECONDARY));
        ui.label(
            RichText::new(profile.name.resolve(language))
                .size(32.0)
                .strong(),
        );
        ui.label(RichText::new(profile.role.resolve(language)).size(16.0));
    }
}

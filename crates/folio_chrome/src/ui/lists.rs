use egui::{Rect, RichText};
use folio::views::{
    media_title, talk_desc, talk_title, talk_type, talk_year, ListSection, ListSections,
};
use folio::Action;

use super::{reveal, show_more_button, FolioState};
use crate::theme;

/// One of the simple "show more" lists of the portfolio page.
pub struct ListUi<'a> {
    state: &'a mut FolioState,
    section: ListSection,
    viewport: Rect,
}

impl<'a> ListUi<'a> {
    pub fn new(state: &'a mut FolioState, section: ListSection, viewport: Rect) -> Self {
        Self {
            state,
            section,
            viewport,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<Action> {
        match self.section {
            ListSection::News => self.news(ui),
            ListSection::Talks => self.talks(ui),
            ListSection::Awards => self.awards(ui),
            ListSection::Media => self.media(ui),
        }

        let language = self.state.language();
        let page = self.state.sections.get(self.section);
        let total = ListSections::total(&self.state.catalog, self.section, language);
        if show_more_button(
            ui,
            &mut self.state.i18n,
            page.has_more(total),
            page.is_expanded(),
        ) {
            Some(Action::ToggleSection(self.section))
        } else {
            None
        }
    }

    fn news(&mut self, ui: &mut egui::Ui) {
        let language = self.state.language();
        let badge = self.state.i18n.tr("news-new");
        let items = self.state.sections.news(&self.state.catalog, language);
        for (i, item) in items.iter().enumerate() {
            let key = format!("news:{}", i);
            reveal(ui, &mut self.state.reveal, self.viewport, key, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new(&item.date)
                            .monospace()
                            .color(theme::GRAY_SECONDARY),
                    );
                    if item.is_new {
                        ui.label(
                            RichText::new(&badge)
                                .small()
                                .strong()
                                .color(theme::HIGHLIGHT),
                        );
                    }
                    ui.label(&item.text);
                });
            });
        }
    }

    fn talks(&mut self, ui: &mut egui::Ui) {
        let language = self.state.language();
        let i18n = &mut self.state.i18n;
        for talk in self.state.sections.talks(&self.state.catalog) {
            let key = format!("talk:{}", talk_title(talk, folio::Language::FALLBACK));
            reveal(ui, &mut self.state.reveal, self.viewport, key, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(talk_year(talk, language)).small());
                    ui.label(
                        RichText::new(talk_type(talk, i18n))
                            .small()
                            .color(theme::ACCENT),
                    );
                });
                ui.label(RichText::new(talk_title(talk, language)).strong());
                let desc = talk_desc(talk, language);
                if !desc.is_empty() {
                    ui.label(RichText::new(desc).color(theme::GRAY_SECONDARY));
                }
                ui.add_space(6.0);
            });
        }
    }

    fn awards(&mut self, ui: &mut egui::Ui) {
        let language = self.state.language();
        let items = self.state.sections.awards(&self.state.catalog, language);
        for (i, award) in items.iter().enumerate() {
            let key = format!("award:{}", i);
            reveal(ui, &mut self.state.reveal, self.viewport, key, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new(&award.year)
                            .monospace()
                            .color(theme::GRAY_SECONDARY),
                    );
                    ui.label(RichText::new(&award.title).strong());
                });
                if !award.desc.is_empty() {
                    ui.label(&award.desc);
                }
                ui.add_space(6.0);
            });
        }
    }

    fn media(&mut self, ui: &mut egui::Ui) {
        let language = self.state.language();
        for item in self.state.sections.media(&self.state.catalog) {
            let key = format!("media:{}", media_title(item, folio::Language::FALLBACK));
            reveal(ui, &mut self.state.reveal, self.viewport, key, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new(&item.date)
                            .monospace()
                            .color(theme::GRAY_SECONDARY),
                    );
                    let title = media_title(item, language);
                    match &item.link {
                        Some(link) => {
                            ui.hyperlink_to(title, link);
                        }
                        None => {
                            ui.label(title);
                        }
                    }
                    if !item.outlet.is_empty() {
                        ui.label(RichText::new(&item.outlet).italics());
                    }
                });
            });
        }
    }
}

use egui::RichText;

use super::calendar::legend_ui;
use super::{section_heading, CalendarResponse, CalendarUi, FolioState};
use crate::theme;

/// The practice log: a short header and the activity calendar.
pub struct PersonalPage<'a> {
    state: &'a mut FolioState,
}

impl<'a> PersonalPage<'a> {
    pub fn new(state: &'a mut FolioState) -> Self {
        Self { state }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> CalendarResponse {
        ui.add_space(24.0);
        ui.label(
            RichText::new(self.state.i18n.tr("page-title"))
                .size(28.0)
                .strong(),
        );
        ui.label(RichText::new(self.state.i18n.tr("page-greeting")).size(16.0));
        ui.label(RichText::new(self.state.i18n.tr("page-subtitle")).color(theme::GRAY_SECONDARY));

        let title = self.state.i18n.tr("calendar-title");
        section_heading(ui, title);

        let resp = CalendarUi::new(self.state).ui(ui);

        ui.add_space(8.0);
        legend_ui(ui, &mut self.state.i18n);
        ui.add_space(24.0);

        resp
    }
}

use egui::{Rect, RichText};
use folio::content::Publication;
use folio::views::{PubFilter, SortOrder};
use folio::{Action, FluentArgs, Localization};

use super::{reveal, show_more_button, FolioState};
use crate::theme;

/// Filter chips, sort switch and the paginated publication list.
pub struct PublicationsUi<'a> {
    state: &'a mut FolioState,
    viewport: Rect,
}

impl<'a> PublicationsUi<'a> {
    pub fn new(state: &'a mut FolioState, viewport: Rect) -> Self {
        Self { state, viewport }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<Action> {
        let mut action = None;

        ui.horizontal_wrapped(|ui| {
            let current = self.state.publications.filter();
            for filter in PubFilter::options() {
                let label = self.state.i18n.tr(filter.label_key());
                if ui.selectable_label(current == filter, label).clicked() {
                    action = Some(Action::SetFilter(filter));
                }
            }
        });

        ui.horizontal(|ui| {
            let current = self.state.publications.order();
            for order in [SortOrder::Newest, SortOrder::Oldest] {
                let label = self.state.i18n.tr(order.label_key());
                if ui.selectable_label(current == order, label).clicked() && current != order {
                    action = Some(Action::SetSort(order));
                }
            }

            let mut args = FluentArgs::new();
            args.set("count", self.state.publications.len());
            let showing = self.state.i18n.tr_args("pub-showing", &args);
            ui.label(RichText::new(showing).color(theme::GRAY_SECONDARY));
        });

        let mut args = FluentArgs::new();
        args.set("count", self.state.publications.total_citations());
        let total = self.state.i18n.tr_args("pub-total-citations", &args);
        ui.label(RichText::new(total).small().color(theme::GRAY_SECONDARY));
        ui.add_space(6.0);

        let owners = &self.state.catalog.profile.owner_names;
        let i18n = &mut self.state.i18n;
        for (index, publication) in self.state.publications.displayed_indexed() {
            let key = format!("pub:{index}");
            reveal(ui, &mut self.state.reveal, self.viewport, key, |ui| {
                publication_row(ui, i18n, publication, owners);
            });
        }

        let expanded = self.state.publications.is_expanded();
        let has_more = self.state.publications.has_more();
        if show_more_button(ui, &mut self.state.i18n, has_more, expanded) {
            action = Some(Action::TogglePublications);
        }

        action
    }
}

fn publication_row(
    ui: &mut egui::Ui,
    i18n: &mut Localization,
    publication: &Publication,
    owners: &[String],
) {
    egui::Frame::new()
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                let badge = i18n.tr(publication.kind.label_key());
                ui.label(RichText::new(badge).small().color(theme::ACCENT));
                ui.label(RichText::new(publication.display_date()).small());
            });

            ui.label(RichText::new(&publication.title).strong());

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                let spans = publication.author_spans(owners);
                let last = spans.len().saturating_sub(1);
                for (i, span) in spans.iter().enumerate() {
                    let text = if i == last {
                        span.name.to_owned()
                    } else {
                        format!("{}, ", span.name)
                    };
                    if span.is_owner {
                        ui.label(RichText::new(text).strong().color(theme::HIGHLIGHT));
                    } else {
                        ui.label(text);
                    }
                }
            });

            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(&publication.venue).italics());
                if publication.citations > 0 {
                    let mut args = FluentArgs::new();
                    args.set("count", publication.citations);
                    let cited = i18n.tr_args("pub-citations", &args);
                    ui.label(RichText::new(cited).small().color(theme::GRAY_SECONDARY));
                }
                if let Some(link) = &publication.link {
                    ui.hyperlink_to(i18n.tr("pub-paper"), link);
                }
            });
        });
}

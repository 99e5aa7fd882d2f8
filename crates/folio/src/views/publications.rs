use std::cmp::Reverse;

use strum::IntoEnumIterator;

use super::Paginated;
use crate::content::{PubType, Publication};

pub const PUBLICATION_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PubFilter {
    #[default]
    All,
    Only(PubType),
}

impl PubFilter {
    /// `All` followed by every publication type, in chip order.
    pub fn options() -> impl Iterator<Item = PubFilter> {
        std::iter::once(PubFilter::All).chain(PubType::iter().map(PubFilter::Only))
    }

    pub fn matches(self, publication: &Publication) -> bool {
        match self {
            PubFilter::All => true,
            PubFilter::Only(kind) => publication.kind == kind,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            PubFilter::All => "pub-filter-all",
            PubFilter::Only(kind) => kind.label_key(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn label_key(self) -> &'static str {
        match self {
            SortOrder::Newest => "pub-sort-newest",
            SortOrder::Oldest => "pub-sort-oldest",
        }
    }
}

/// Filter, sort and "show more" over a private copy of the publication
/// catalog. The filtered and sorted order is recomputed on every mutation,
/// so reads always see settled state.
#[derive(Debug, Clone)]
pub struct PublicationView {
    publications: Vec<Publication>,
    filter: PubFilter,
    order: SortOrder,
    page: Paginated,
    /// indices into `publications`, filtered and sorted
    sorted: Vec<usize>,
}

impl PublicationView {
    pub fn new(publications: Vec<Publication>) -> Self {
        let mut view = Self {
            publications,
            filter: PubFilter::All,
            order: SortOrder::Newest,
            page: Paginated::new(PUBLICATION_LIMIT),
            sorted: Vec::new(),
        };
        view.recompute();
        view
    }

    pub fn filter(&self) -> PubFilter {
        self.filter
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn is_expanded(&self) -> bool {
        self.page.is_expanded()
    }

    /// Changing the filter always collapses the list.
    pub fn set_filter(&mut self, filter: PubFilter) {
        self.filter = filter;
        self.page.collapse();
        self.recompute();
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.order = order;
        self.recompute();
    }

    pub fn toggle_expand(&mut self) {
        self.page.toggle();
    }

    fn recompute(&mut self) {
        let filter = self.filter;
        let publications = &self.publications;
        self.sorted = (0..publications.len())
            .filter(|&i| filter.matches(&publications[i]))
            .collect();

        // sort_by_key is stable: equal keys keep catalog order
        match self.order {
            SortOrder::Newest => self
                .sorted
                .sort_by_key(|&i| Reverse(publications[i].sort_key())),
            SortOrder::Oldest => self.sorted.sort_by_key(|&i| publications[i].sort_key()),
        }
    }

    /// Every publication passing the filter, in sort order.
    pub fn filtered_sorted(&self) -> impl Iterator<Item = &Publication> + '_ {
        self.sorted.iter().map(|&i| &self.publications[i])
    }

    /// What the list shows right now.
    pub fn displayed(&self) -> impl Iterator<Item = &Publication> + '_ {
        self.displayed_indexed().map(|(_, publication)| publication)
    }

    /// Like [`Self::displayed`], paired with each publication's position in
    /// the catalog. The position stays fixed across filter and sort changes.
    pub fn displayed_indexed(&self) -> impl Iterator<Item = (usize, &Publication)> + '_ {
        self.page
            .slice(&self.sorted)
            .iter()
            .map(|&i| (i, &self.publications[i]))
    }

    /// Number of publications passing the filter.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.page.has_more(self.sorted.len())
    }

    pub fn total_citations(&self) -> u32 {
        self.publications.iter().map(|p| p.citations).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Vec<Publication> {
        vec![
            Publication::new("x1", "X", PubType::Conference, 2024).with_date("Mar 2024"),
            Publication::new("y", "Y", PubType::Journal, 2025).with_date("Jan 2025"),
            Publication::new("x2", "X", PubType::Conference, 2024).with_date("Mar 2024"),
            Publication::new("old", "Z", PubType::Workshop, 2021),
            Publication::new("pre", "arXiv", PubType::Preprint, 2023).with_date("Jul 2023"),
            Publication::new("dom", "MIRU", PubType::Domestic, 2022).with_date("Aug 2022"),
        ]
    }

    fn titles<'a>(pubs: impl Iterator<Item = &'a Publication>) -> Vec<&'a str> {
        pubs.map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn newest_first_keeps_ties_in_catalog_order() {
        let view = PublicationView::new(catalog());
        assert_eq!(
            titles(view.filtered_sorted()),
            vec!["y", "x1", "x2", "pre", "dom", "old"]
        );
    }

    #[test]
    fn oldest_first() {
        let mut view = PublicationView::new(catalog());
        view.set_sort(SortOrder::Oldest);
        assert_eq!(
            titles(view.filtered_sorted()),
            vec!["old", "dom", "pre", "x1", "x2", "y"]
        );
    }

    #[test]
    fn filter_is_exact_match() {
        let mut view = PublicationView::new(catalog());
        view.set_filter(PubFilter::Only(PubType::Conference));
        assert_eq!(titles(view.filtered_sorted()), vec!["x1", "x2"]);
        view.set_filter(PubFilter::Only(PubType::Journal));
        assert_eq!(view.len(), 1);
        view.set_filter(PubFilter::All);
        assert_eq!(view.len(), 6);
    }

    #[test]
    fn collapsed_shows_five() {
        let mut view = PublicationView::new(catalog());
        assert_eq!(view.displayed().count(), 5);
        assert!(view.has_more());
        view.toggle_expand();
        assert_eq!(view.displayed().count(), 6);
    }

    #[test]
    fn filter_collapses_but_sort_does_not() {
        let mut view = PublicationView::new(catalog());
        view.toggle_expand();
        view.set_sort(SortOrder::Oldest);
        assert!(view.is_expanded());

        view.set_filter(PubFilter::All);
        assert!(!view.is_expanded());
    }

    #[test]
    fn catalog_positions_survive_sorting() {
        let mut pubs = catalog();
        pubs[2].title = "x1".to_string();
        let mut view = PublicationView::new(pubs);
        view.set_filter(PubFilter::Only(PubType::Conference));
        view.set_sort(SortOrder::Oldest);

        let shown: Vec<(usize, &str)> = view
            .displayed_indexed()
            .map(|(i, p)| (i, p.title.as_str()))
            .collect();
        assert_eq!(shown, vec![(0, "x1"), (2, "x1")]);
    }

    #[test]
    fn filter_options_cover_every_type() {
        let options: Vec<PubFilter> = PubFilter::options().collect();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], PubFilter::All);
        assert_eq!(PubFilter::All.label_key(), "pub-filter-all");
    }

    #[test]
    fn citations_cover_whole_catalog() {
        let mut pubs = catalog();
        pubs[0].citations = 4;
        pubs[3].citations = 7;
        let mut view = PublicationView::new(pubs);
        view.set_filter(PubFilter::Only(PubType::Journal));
        assert_eq!(view.total_citations(), 11);
    }
}

use chrono::{Datelike, NaiveDate};
use folio::calendar::{month_grid, YearMonth, FLOOR};
use folio::content::{ActivityLog, PubType, Publication};
use folio::tooltip::{position, Bounds, Size, MARGIN};
use folio::views::{displayed, ListSection, PubFilter, PublicationView, SortOrder};
use folio::{date, CalendarView, Catalog, Language};
use pretty_assertions::assert_eq;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn all_filters() -> Vec<PubFilter> {
    PubFilter::options().collect()
}

fn mixed_catalog() -> Vec<Publication> {
    let mut pubs = Catalog::embedded().unwrap().publications;
    pubs.push(Publication::new("g1", "Group", PubType::Workshop, 2024).with_date("May 2024"));
    pubs.push(Publication::new("other", "Other", PubType::Journal, 2023).with_date("Feb 2023"));
    pubs.push(Publication::new("g2", "Group", PubType::Conference, 2024).with_date("May 2024"));
    pubs
}

#[test]
fn same_venue_and_date_stay_adjacent() {
    let mut view = PublicationView::new(mixed_catalog());
    for filter in all_filters() {
        for order in [SortOrder::Newest, SortOrder::Oldest] {
            view.set_filter(filter);
            view.set_sort(order);
            let groups: Vec<(String, Option<String>)> = view
                .filtered_sorted()
                .map(|p| (p.venue.clone(), p.date.clone()))
                .collect();
            for (i, group) in groups.iter().enumerate() {
                let last = groups.iter().rposition(|g| g == group).unwrap();
                assert!(
                    groups[i..=last].iter().all(|g| g == group),
                    "{group:?} split under {filter:?}/{order:?}"
                );
            }
        }
    }
}

#[test]
fn sort_keys_are_monotonic() {
    let mut view = PublicationView::new(mixed_catalog());
    for filter in all_filters() {
        view.set_filter(filter);

        view.set_sort(SortOrder::Newest);
        let keys: Vec<i32> = view.filtered_sorted().map(Publication::sort_key).collect();
        assert!(keys.windows(2).all(|w| w[0] >= w[1]));

        view.set_sort(SortOrder::Oldest);
        let keys: Vec<i32> = view.filtered_sorted().map(Publication::sort_key).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn pagination_bound() {
    let mut view = PublicationView::new(mixed_catalog());
    for filter in all_filters() {
        view.set_filter(filter);
        let total = view.filtered_sorted().count();
        assert_eq!(view.displayed().count(), total.min(5));
        view.toggle_expand();
        assert_eq!(view.displayed().count(), total);
    }

    let list: Vec<u32> = (0..10).collect();
    for section in [
        ListSection::Talks,
        ListSection::News,
        ListSection::Awards,
        ListSection::Media,
    ] {
        let limit = section.limit();
        assert_eq!(displayed(&list, false, limit).len(), limit);
        assert_eq!(displayed(&list, true, limit).len(), list.len());
    }
}

#[test]
fn set_filter_always_collapses() {
    let mut view = PublicationView::new(mixed_catalog());
    for filter in all_filters() {
        view.toggle_expand();
        view.set_filter(filter);
        assert!(!view.is_expanded());
        view.set_filter(filter);
        assert!(!view.is_expanded());
    }
}

#[test]
fn grid_has_one_cell_per_day() {
    let log = ActivityLog::default();
    let today = day(2026, 10, 17);
    for year in [2024, 2026, 2027] {
        let mut month = YearMonth::new(year, 0);
        for _ in 0..12 {
            let cells = month_grid(month, &log, today);
            let first = month.first_day().unwrap();
            let leading = cells.iter().take_while(|c| c.is_placeholder()).count();
            assert_eq!(leading, first.weekday().num_days_from_sunday() as usize);
            assert_eq!(cells.len() - leading, month.days() as usize);
            assert!(cells[leading..].iter().all(|c| !c.is_placeholder()));
            month = month.next();
        }
    }

    let feb = month_grid(YearMonth::new(2026, 1), &log, today);
    assert_eq!(feb.len(), 28);
    assert_eq!(feb[0].iso().as_deref(), Some("2026-02-01"));
}

#[test]
fn calendar_bounds() {
    let catalog = Catalog::embedded().unwrap();
    let today = day(2026, 2, 20);
    let mut view = CalendarView::new(today, &catalog.activities);

    // latest activity is April 2026, later than today
    assert_eq!(view.ceiling(), YearMonth::new(2026, 3));

    view.jump_to(FLOOR);
    view.prev_month();
    assert_eq!(view.cursor(), FLOOR);

    view.jump_to(view.ceiling());
    view.next_month();
    assert_eq!(view.cursor(), YearMonth::new(2026, 3));

    view.prev_month();
    assert_eq!(view.cursor(), YearMonth::new(2026, 2));

    let mut late = CalendarView::new(day(2027, 3, 1), &catalog.activities);
    late.jump_to(YearMonth::new(2027, 0));
    late.prev_month();
    assert_eq!(late.cursor(), YearMonth::new(2026, 11));
    late.next_month();
    assert_eq!(late.cursor(), YearMonth::new(2027, 0));
}

#[test]
fn tooltip_clamps_and_flips() {
    let viewport = Size::new(1024.0, 768.0);
    let panel = Size::new(260.0, 140.0);

    let right = Bounds::new(1000.0, 400.0, 20.0, 20.0);
    let pos = position(right, panel, viewport);
    assert!(pos.x + panel.width <= viewport.width - MARGIN);

    let top = Bounds::new(400.0, 20.0, 20.0, 20.0);
    let pos = position(top, panel, viewport);
    assert!(pos.y >= top.bottom());
}

#[test]
fn every_item_has_a_title_in_both_languages() {
    let catalog = Catalog::embedded().unwrap();
    for language in [Language::En, Language::Ja] {
        for talk in &catalog.talks {
            assert!(!folio::views::talk_title(talk, language).is_empty());
            assert!(!folio::views::talk_year(talk, language).is_empty());
        }
        for item in &catalog.media {
            assert!(!folio::views::media_title(item, language).is_empty());
        }
    }
}

#[test]
fn grouped_example() {
    let pubs = vec![
        Publication::new("x-a", "X", PubType::Conference, 2024).with_date("Mar 2024"),
        Publication::new("y", "Y", PubType::Conference, 2025).with_date("Jan 2025"),
        Publication::new("x-b", "X", PubType::Conference, 2024).with_date("Mar 2024"),
    ];
    let view = PublicationView::new(pubs);
    let venues: Vec<&str> = view.filtered_sorted().map(|p| p.venue.as_str()).collect();
    assert_eq!(venues, vec!["Y", "X", "X"]);
}

#[test]
fn missing_month_sorts_as_january() {
    let bare = Publication::new("bare", "V", PubType::Journal, 2023);
    let jan = Publication::new("jan", "V", PubType::Journal, 2023).with_date("Jan 2023");
    assert_eq!(bare.sort_key(), 2023 * 12);
    assert_eq!(bare.sort_key(), jan.sort_key());
    assert_eq!(
        date::sort_key(2023, None),
        date::sort_key(2023, Some("Jan 2023"))
    );
}

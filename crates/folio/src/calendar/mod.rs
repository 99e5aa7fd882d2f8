//! The personal activity calendar: a month cursor held between a fixed
//! first month and the latest month worth showing, and the Sunday-first
//! grid for whatever month it points at.

mod month;

pub use month::{YearMonth, WEEKDAY_KEYS};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::content::{Activity, ActivityLog};

/// The log starts in January 2026; nothing earlier is navigable.
pub const FLOOR: YearMonth = YearMonth::new(2026, 0);

/// One square of the month grid. Leading squares before the first weekday
/// carry no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell<'a> {
    pub date: Option<NaiveDate>,
    pub day: Option<u32>,
    pub activities: &'a [Activity],
    pub is_today: bool,
}

impl<'a> CalendarCell<'a> {
    fn placeholder() -> Self {
        CalendarCell {
            date: None,
            day: None,
            activities: &[],
            is_today: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }

    /// Zero padded `YYYY-MM-DD`, the key the activity data uses.
    pub fn iso(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    cursor: YearMonth,
    floor: YearMonth,
    ceiling: YearMonth,
}

impl CalendarView {
    /// Starts on the month of `today`, kept inside the navigable range.
    pub fn new(today: NaiveDate, log: &ActivityLog) -> Self {
        let mut view = Self {
            cursor: YearMonth::of(today),
            floor: FLOOR,
            ceiling: FLOOR,
        };
        view.refresh_ceiling(today, log);
        view.cursor = view.clamp(view.cursor);
        view
    }

    /// The ceiling is the later of the current month and the latest month
    /// with any activity. Call again when the date rolls over.
    pub fn refresh_ceiling(&mut self, today: NaiveDate, log: &ActivityLog) {
        let latest = log.latest().map(YearMonth::of);
        self.ceiling = YearMonth::of(today)
            .max(latest.unwrap_or(self.floor))
            .max(self.floor);
        debug!(
            "calendar range {:?} ..= {:?}",
            (self.floor.year, self.floor.month),
            (self.ceiling.year, self.ceiling.month)
        );
    }

    pub fn cursor(&self) -> YearMonth {
        self.cursor
    }

    pub fn floor(&self) -> YearMonth {
        self.floor
    }

    pub fn ceiling(&self) -> YearMonth {
        self.ceiling
    }

    pub fn can_go_prev(&self) -> bool {
        self.cursor > self.floor
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor < self.ceiling
    }

    /// Steps one month back. Returns false and does nothing at the floor.
    pub fn prev_month(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.cursor = self.cursor.prev();
        true
    }

    /// Steps one month forward. Returns false and does nothing at the
    /// ceiling.
    pub fn next_month(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.cursor = self.cursor.next();
        true
    }

    pub fn jump_to(&mut self, month: YearMonth) {
        self.cursor = self.clamp(month);
    }

    fn clamp(&self, month: YearMonth) -> YearMonth {
        month.max(self.floor).min(self.ceiling)
    }

    /// Leading placeholders for the weekday of the 1st (Sunday = 0), then
    /// one cell per day of the month. The last week is not padded.
    pub fn grid<'a>(&self, log: &'a ActivityLog, today: NaiveDate) -> Vec<CalendarCell<'a>> {
        month_grid(self.cursor, log, today)
    }
}

pub fn month_grid(month: YearMonth, log: &ActivityLog, today: NaiveDate) -> Vec<CalendarCell<'_>> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = month.days();
    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend((0..leading).map(|_| CalendarCell::placeholder()));

    for date in first.iter_days().take(days as usize) {
        cells.push(CalendarCell {
            date: Some(date),
            day: Some(date.day()),
            activities: log.on(date),
            is_today: date == today,
        });
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Sport;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn log() -> ActivityLog {
        let mut log = ActivityLog::default();
        log.insert(day(2026, 2, 5), Activity::new(Sport::Tennis));
        log.insert(day(2026, 4, 12), Activity::new(Sport::Tournament));
        log
    }

    #[test]
    fn february_2026_starts_on_sunday() {
        let log = log();
        let cells = month_grid(YearMonth::new(2026, 1), &log, day(2026, 2, 10));
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(|c| !c.is_placeholder()));
        assert_eq!(cells[4].iso().as_deref(), Some("2026-02-05"));
        assert_eq!(cells[4].activities.len(), 1);
        assert!(cells[9].is_today);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn leading_placeholders_match_weekday() {
        let log = ActivityLog::default();
        // 2026-01-01 is a Thursday
        let cells = month_grid(YearMonth::new(2026, 0), &log, day(2026, 3, 1));
        assert_eq!(cells.iter().take_while(|c| c.is_placeholder()).count(), 4);
        assert_eq!(cells.len(), 4 + 31);
        assert_eq!(cells[4].day, Some(1));
        assert!(cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn ceiling_is_latest_activity_month() {
        let view = CalendarView::new(day(2026, 2, 20), &log());
        assert_eq!(view.cursor(), YearMonth::new(2026, 1));
        assert_eq!(view.ceiling(), YearMonth::new(2026, 3));
    }

    #[test]
    fn ceiling_is_current_month_when_later() {
        let view = CalendarView::new(day(2026, 10, 17), &log());
        assert_eq!(view.ceiling(), YearMonth::new(2026, 9));
        assert_eq!(view.cursor(), YearMonth::new(2026, 9));
    }

    #[test]
    fn navigation_is_bounded() {
        let mut view = CalendarView::new(day(2026, 1, 15), &log());
        assert!(!view.can_go_prev());
        assert!(!view.prev_month());
        assert_eq!(view.cursor(), FLOOR);

        assert!(view.next_month());
        assert!(view.next_month());
        assert!(view.next_month());
        assert_eq!(view.cursor(), YearMonth::new(2026, 3));
        assert!(!view.next_month());
        assert_eq!(view.cursor(), YearMonth::new(2026, 3));

        assert!(view.prev_month());
        assert_eq!(view.cursor(), YearMonth::new(2026, 2));
    }

    #[test]
    fn year_rollover_between_bounds() {
        let mut view = CalendarView::new(day(2027, 2, 1), &ActivityLog::default());
        view.jump_to(YearMonth::new(2026, 11));
        assert!(view.next_month());
        assert_eq!(view.cursor(), YearMonth::new(2027, 0));
        assert!(view.prev_month());
        assert_eq!(view.cursor(), YearMonth::new(2026, 11));
    }

    #[test]
    fn jump_is_clamped() {
        let mut view = CalendarView::new(day(2026, 3, 1), &log());
        view.jump_to(YearMonth::new(2020, 5));
        assert_eq!(view.cursor(), FLOOR);
        view.jump_to(YearMonth::new(2030, 0));
        assert_eq!(view.cursor(), view.ceiling());
    }
}

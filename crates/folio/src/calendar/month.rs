use chrono::{Datelike, Duration, NaiveDate};

/// A calendar month. `month` is 0 based (`0` = January) and ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    pub fn prev(self) -> Self {
        if self.month == 0 {
            Self::new(self.year - 1, 11)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 11 {
            Self::new(self.year + 1, 0)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Day 0 of the following month, i.e. the last day of this one.
    pub fn days(self) -> u32 {
        self.next()
            .first_day()
            .map(|first_next| (first_next - Duration::days(1)).day())
            .unwrap_or(0)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of(date) == self
    }

    pub fn name_key(self) -> String {
        format!("calendar-month-{}", self.month + 1)
    }
}

/// Column headers, Sunday first.
pub const WEEKDAY_KEYS: [&str; 7] = [
    "calendar-sun",
    "calendar-mon",
    "calendar-tue",
    "calendar-wed",
    "calendar-thu",
    "calendar-fri",
    "calendar-sat",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rollover() {
        assert_eq!(YearMonth::new(2026, 0).prev(), YearMonth::new(2025, 11));
        assert_eq!(YearMonth::new(2025, 11).next(), YearMonth::new(2026, 0));
        assert_eq!(YearMonth::new(2026, 5).next(), YearMonth::new(2026, 6));
    }

    #[test]
    fn day_counts() {
        assert_eq!(YearMonth::new(2026, 1).days(), 28);
        assert_eq!(YearMonth::new(2024, 1).days(), 29);
        assert_eq!(YearMonth::new(2026, 0).days(), 31);
        assert_eq!(YearMonth::new(2026, 3).days(), 30);
        assert_eq!(YearMonth::new(2026, 11).days(), 31);
    }

    #[test]
    fn chronological_order() {
        assert!(YearMonth::new(2025, 11) < YearMonth::new(2026, 0));
        assert!(YearMonth::new(2026, 2) > YearMonth::new(2026, 1));
        assert_eq!(YearMonth::new(2026, 8).name_key(), "calendar-month-9");
    }
}

//! Publication dates come in two shapes: a bare year, or a `"Mon YYYY"`
//! string next to it. Everything here turns those into one integer order.

use std::fmt;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Index of a three letter month abbreviation, `Jan` = 0.
pub fn month_index(abbrev: &str) -> Option<i32> {
    MONTHS.iter().position(|m| *m == abbrev).map(|i| i as i32)
}

/// Total order key for a `(year, date)` pair.
///
/// `year * 12 + month` when `date` is exactly two whitespace separated tokens
/// whose first token is a known month abbreviation, otherwise `year * 12`.
/// The year token of `date` is not consulted; `year` is authoritative.
pub fn sort_key(year: i32, date: Option<&str>) -> i32 {
    let month = date.and_then(|date| {
        let mut parts = date.split(' ');
        let (Some(month), Some(_), None) = (parts.next(), parts.next(), parts.next()) else {
            return None;
        };
        month_index(month)
    });

    year * 12 + month.unwrap_or(0)
}

/// A strictly parsed `"Mon YYYY"` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthYear {
    pub year: i32,
    /// 0 based
    pub month: i32,
}

impl MonthYear {
    /// Strict form of what [`sort_key`] accepts: a month abbreviation, one
    /// space, and a four digit year.
    pub fn parse(date: &str) -> Option<Self> {
        let (month, year) = date.split_once(' ')?;
        let month = month_index(month)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year = year.parse().ok()?;
        Some(MonthYear { year, month })
    }

    pub fn key(&self) -> i32 {
        self.year * 12 + self.month
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", MONTHS[self.month as usize], self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_and_year() {
        assert_eq!(sort_key(2024, Some("Mar 2024")), 2024 * 12 + 2);
        assert_eq!(sort_key(2025, Some("Dec 2025")), 2025 * 12 + 11);
    }

    #[test]
    fn bare_year_sorts_like_january() {
        assert_eq!(sort_key(2023, None), 2023 * 12);
        assert_eq!(sort_key(2023, None), sort_key(2023, Some("Jan 2023")));
    }

    #[test]
    fn malformed_dates_fall_back_to_year() {
        assert_eq!(sort_key(2022, Some("March 2022")), 2022 * 12);
        assert_eq!(sort_key(2022, Some("Mar")), 2022 * 12);
        assert_eq!(sort_key(2022, Some("12 Mar 2022")), 2022 * 12);
        assert_eq!(sort_key(2022, Some("")), 2022 * 12);
        assert_eq!(sort_key(2022, Some("mar 2022")), 2022 * 12);
    }

    #[test]
    fn strict_parse() {
        assert_eq!(
            MonthYear::parse("Oct 2025"),
            Some(MonthYear {
                year: 2025,
                month: 9
            })
        );
        assert_eq!(MonthYear::parse("Oct 25"), None);
        assert_eq!(MonthYear::parse("Oct  2025"), None);
        assert_eq!(MonthYear::parse("Sept 2025"), None);
        assert_eq!(
            MonthYear::parse("Oct 2025").unwrap().to_string(),
            "Oct 2025"
        );
    }
}

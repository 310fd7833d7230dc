//! Week and quarter tables for the planning year.
//!
//! The planning grid covers 53 weeks split into four quarters (weeks 1–13,
//! 14–26, 27–39, 40–53). The calendar is built once at process start and
//! passed by reference into handlers; nothing mutates it afterwards.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// Number of week slots in the planning grid.
pub const WEEK_COUNT: u32 = 53;

/// One week of the planning year.
#[derive(Debug, Clone, Serialize)]
pub struct Week {
    /// 1-based week number.
    pub num: u32,
    /// Monday of the week.
    pub start: NaiveDate,
    /// Sunday of the week.
    pub end: NaiveDate,
    /// Short grid label, `S<num>`.
    pub label: String,
    /// `dd/mm` of the week's Monday, as shown under the grid label.
    pub dates: String,
}

/// Immutable week/quarter table for one planning year.
#[derive(Debug, Clone)]
pub struct WeekCalendar {
    year: i32,
    weeks: Vec<Week>,
}

impl WeekCalendar {
    /// Build the calendar for a planning year, starting on the Monday of
    /// that year's first ISO week.
    pub fn new(year: i32) -> Self {
        let first_monday = NaiveDate::from_isoywd_opt(year, 1, Weekday::Mon)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date"));

        let weeks = (1..=WEEK_COUNT)
            .map(|num| {
                let start = first_monday + Duration::weeks(i64::from(num) - 1);
                let end = start + Duration::days(6);
                Week {
                    num,
                    start,
                    end,
                    label: format!("S{num}"),
                    dates: format!("{:02}/{:02}", start.day(), start.month()),
                }
            })
            .collect();

        Self { year, weeks }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Weeks of one quarter (1–4). An out-of-range quarter yields an empty
    /// slice.
    pub fn quarter(&self, quarter: u32) -> &[Week] {
        let range = match quarter {
            1 => 0..13,
            2 => 13..26,
            3 => 26..39,
            4 => 39..53,
            _ => return &[],
        };
        &self.weeks[range]
    }

    /// Whether a week number is a valid grid slot.
    pub fn contains_week(&self, num: i64) -> bool {
        num >= 1 && num <= i64::from(WEEK_COUNT)
    }
}

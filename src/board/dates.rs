use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::config::BoardConfig;

/// ISO calendar date, as carried by [`Match::date`](crate::model::Match::date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One button of the date selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateChip {
    pub date: NaiveDate,
    pub iso: String,
    pub day_abbrev: &'static str,
    pub day_of_month: u32,
    pub is_today: bool,
    pub is_selected: bool,
}

pub fn day_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "DOM",
        Weekday::Mon => "LUN",
        Weekday::Tue => "MAR",
        Weekday::Wed => "MIE",
        Weekday::Thu => "JUE",
        Weekday::Fri => "VIE",
        Weekday::Sat => "SAB",
    }
}

/// Chips from `today - days_before` to `today + days_after`, oldest first.
/// The window is clamped to chrono's calendar range.
pub fn date_chips(today: NaiveDate, selected: NaiveDate, config: &BoardConfig) -> Vec<DateChip> {
    let first = today
        .checked_sub_days(Days::new(config.days_before.into()))
        .unwrap_or(today);
    let last = today.checked_add_days(Days::new(config.days_after.into()));
    first
        .iter_days()
        .take_while(|date| last.is_none_or(|last| *date <= last))
        .map(|date| DateChip {
            date,
            iso: date.format(DATE_FORMAT).to_string(),
            day_abbrev: day_abbrev(date.weekday()),
            day_of_month: date.day(),
            is_today: date == today,
            is_selected: date == selected,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_centered_on_today() {
        // 2026-10-18 is a Sunday.
        let today = date(2026, 10, 18);
        let chips = date_chips(today, today, &BoardConfig::default());

        assert_eq!(chips.len(), 7);
        let isos: Vec<&str> = chips.iter().map(|c| c.iso.as_str()).collect();
        assert_eq!(
            isos,
            [
                "2026-10-15",
                "2026-10-16",
                "2026-10-17",
                "2026-10-18",
                "2026-10-19",
                "2026-10-20",
                "2026-10-21"
            ]
        );
        let days: Vec<&str> = chips.iter().map(|c| c.day_abbrev).collect();
        assert_eq!(days, ["JUE", "VIE", "SAB", "DOM", "LUN", "MAR", "MIE"]);

        assert!(chips[3].is_today && chips[3].is_selected);
        assert_eq!(chips.iter().filter(|c| c.is_today).count(), 1);
        assert_eq!(chips[3].day_of_month, 18);
    }

    #[test]
    fn test_selection_independent_of_today() {
        let today = date(2026, 10, 18);
        let chips = date_chips(today, date(2026, 10, 16), &BoardConfig::default());
        assert!(chips[1].is_selected);
        assert!(!chips[1].is_today);
        assert!(!chips[3].is_selected);

        let outside = date_chips(today, date(2026, 11, 1), &BoardConfig::default());
        assert!(outside.iter().all(|c| !c.is_selected));
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let today = date(2026, 3, 1);
        let config = BoardConfig::default().with_days_before(1).with_days_after(0);
        let chips = date_chips(today, today, &config);
        let isos: Vec<&str> = chips.iter().map(|c| c.iso.as_str()).collect();
        assert_eq!(isos, ["2026-02-28", "2026-03-01"]);
    }

    #[test]
    fn test_zero_window_is_just_today() {
        let today = date(2026, 10, 18);
        let config = BoardConfig::default().with_days_before(0).with_days_after(0);
        let chips = date_chips(today, today, &config);
        assert_eq!(chips.len(), 1);
        assert!(chips[0].is_today);
    }
}

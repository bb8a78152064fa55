//! Weekly open/closed schedule of a market.
//!
//! The backend stores the days a market is *closed* as a comma-separated list
//! of weekday names in `market_close_days` (e.g. `"Saturday,Sunday"`).

use chrono::Weekday;
use std::str::FromStr;

/// Monday-first week order used for display and for the wire string.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name, as sent in `market_close_days`.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Seven open/closed flags, one per weekday. Defaults to open every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekSchedule {
    open: [bool; 7],
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::all_open()
    }
}

impl WeekSchedule {
    pub fn all_open() -> Self {
        Self { open: [true; 7] }
    }

    fn index(day: Weekday) -> usize {
        day.num_days_from_monday() as usize
    }

    pub fn is_open(&self, day: Weekday) -> bool {
        self.open[Self::index(day)]
    }

    pub fn set_open(&mut self, day: Weekday, open: bool) {
        self.open[Self::index(day)] = open;
    }

    /// Flip one day and return its new open state. Other days are untouched.
    pub fn toggle(&mut self, day: Weekday) -> bool {
        let slot = &mut self.open[Self::index(day)];
        *slot = !*slot;
        *slot
    }

    pub fn open_days(&self) -> Vec<Weekday> {
        WEEK.iter().copied().filter(|d| self.is_open(*d)).collect()
    }

    pub fn closed_days(&self) -> Vec<Weekday> {
        WEEK.iter().copied().filter(|d| !self.is_open(*d)).collect()
    }

    /// Wire form: closed days, Monday-first, joined by `,`. Empty when open daily.
    pub fn close_days_string(&self) -> String {
        self.closed_days()
            .into_iter()
            .map(day_name)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse `market_close_days`. Accepts full or short names in any case,
    /// separated by `,` or `|`. Unknown and empty tokens are ignored.
    pub fn from_close_days(raw: &str) -> Self {
        let mut schedule = Self::all_open();
        for token in raw.split([',', '|']) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match Weekday::from_str(token) {
                Ok(day) => schedule.set_open(day, false),
                Err(_) => tracing::debug!(token, "Ignoring unknown weekday in market_close_days"),
            }
        }
        schedule
    }

    /// As [`Self::from_close_days`], but also accepts a JSON array of names.
    pub fn from_close_days_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::from_close_days(s),
            serde_json::Value::Array(items) => {
                let joined = items
                    .iter()
                    .filter_map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                Self::from_close_days(&joined)
            }
            _ => Self::all_open(),
        }
    }
}

impl std::fmt::Display for WeekSchedule {
    /// `Mon Tue Wed Thu Fri` (open days) or `Closed all week`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = self.open_days();
        if open.is_empty() {
            return write!(f, "Closed all week");
        }
        let names: Vec<String> = open.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toggle_flips_only_that_day() {
        let mut s = WeekSchedule::all_open();
        assert!(!s.toggle(Weekday::Sun));
        assert!(!s.is_open(Weekday::Sun));
        for day in WEEK.iter().filter(|d| **d != Weekday::Sun) {
            assert!(s.is_open(*day));
        }
        assert!(s.toggle(Weekday::Sun));
        assert_eq!(s, WeekSchedule::all_open());
    }

    #[test]
    fn test_close_days_string_matches_closed_days() {
        let mut s = WeekSchedule::all_open();
        assert_eq!(s.close_days_string(), "");
        s.toggle(Weekday::Sun);
        s.toggle(Weekday::Wed);
        assert_eq!(s.close_days_string(), "Wednesday,Sunday");
        assert_eq!(s.closed_days(), vec![Weekday::Wed, Weekday::Sun]);
    }

    #[test]
    fn test_from_close_days_is_lenient() {
        let s = WeekSchedule::from_close_days(" saturday, SUN ,, Funday");
        assert_eq!(s.closed_days(), vec![Weekday::Sat, Weekday::Sun]);
        assert_eq!(WeekSchedule::from_close_days(""), WeekSchedule::all_open());
    }

    #[test]
    fn test_close_days_string_round_trips() {
        let mut s = WeekSchedule::all_open();
        s.toggle(Weekday::Mon);
        s.toggle(Weekday::Fri);
        assert_eq!(WeekSchedule::from_close_days(&s.close_days_string()), s);
    }

    #[test]
    fn test_from_close_days_value_array() {
        let s = WeekSchedule::from_close_days_value(&json!(["Tuesday", "Thu"]));
        assert_eq!(s.closed_days(), vec![Weekday::Tue, Weekday::Thu]);
        assert_eq!(WeekSchedule::from_close_days_value(&json!(null)), WeekSchedule::all_open());
    }

    #[test]
    fn test_display() {
        let mut s = WeekSchedule::all_open();
        s.toggle(Weekday::Sat);
        s.toggle(Weekday::Sun);
        assert_eq!(s.to_string(), "Mon Tue Wed Thu Fri");
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Utility for parsing the loosely formatted date strings found in the sales
/// dataset and in filter input. Records keep their raw date text; everything
/// that needs a chronological value goes through this parser.
pub struct TimeParser;

impl TimeParser {
    /// Parse a string into a naive datetime. Date-only inputs resolve to
    /// midnight. Returns None for blank or unrecognized input; callers decide
    /// what an unparsable date means (filters reject, sorts place last).
    pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
        let s = input.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_utc());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Some(dt);
        }
        Self::parse_date(s).map(|d| d.and_time(NaiveTime::MIN))
    }

    /// Parse a string into a calendar date. Accepts ISO dates plus the
    /// US-style and day-first forms seen in CSV exports.
    pub fn parse_date(input: &str) -> Option<NaiveDate> {
        let s = input.trim();
        if s.is_empty() {
            return None;
        }
        for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"] {
            if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
                return Some(d);
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_utc().date());
        }
        None
    }
}

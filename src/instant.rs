use std::fmt::Debug;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Date-time pattern used by range literals, `YYYY-MM-DD HH:MM:SS`.
pub const LITERAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub type Timestamp = NaiveDateTime;

/// A totally ordered point in time that can be written to and read from a
/// range literal.
pub trait Instant: Copy + Ord + Debug {
    fn format_literal(&self) -> String;

    fn parse_literal(s: &str) -> Result<Self, chrono::ParseError>;

    #[inline]
    fn before(&self, other: &Self) -> bool {
        self < other
    }

    #[inline]
    fn after(&self, other: &Self) -> bool {
        self > other
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl Instant for NaiveDateTime {
    fn format_literal(&self) -> String {
        self.format(LITERAL_FORMAT).to_string()
    }

    fn parse_literal(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, LITERAL_FORMAT)
    }
}

impl Instant for DateTime<Utc> {
    fn format_literal(&self) -> String {
        self.format(LITERAL_FORMAT).to_string()
    }

    fn parse_literal(s: &str) -> Result<Self, chrono::ParseError> {
        let naive = NaiveDateTime::parse_from_str(s, LITERAL_FORMAT)?;
        Ok(Utc.from_utc_datetime(&naive))
    }
}

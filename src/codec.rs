use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::interval::Interval;

/// Parses a range literal such as `["2024-10-13 10:00:00","2024-10-13 15:00:00")`.
///
/// An opening `[` makes the lower endpoint inclusive and a closing `]` the
/// upper one. Any other delimiter leaves its endpoint exclusive. Double
/// quotes are stripped before the body is split on commas, and tokens past
/// the second are ignored.
pub fn parse<T>(literal: &str) -> Result<Interval<T>>
where
    T: Instant,
{
    let mut delimiters = literal.chars();
    let (open, close) = match (delimiters.next(), delimiters.next_back()) {
        (Some(open), Some(close)) => (open, close),
        _ => return Err(malformed(literal)),
    };
    let bounds = Bounds::from_inclusion(open == '[', close == ']');

    let unquoted = literal.replace('"', "");
    let mut body = unquoted.chars();
    if body.next().is_none() || body.next_back().is_none() {
        return Err(malformed(literal));
    }

    let mut endpoints = body.as_str().split(',');
    let lower = endpoint::<T>(literal, endpoints.next())?;
    let upper = endpoint::<T>(literal, endpoints.next())?;

    Interval::new(lower, upper, bounds).map_err(|error| {
        debug!("range literal {:?} rejected: {}", literal, error);
        error
    })
}

fn endpoint<T>(literal: &str, token: Option<&str>) -> Result<T>
where
    T: Instant,
{
    let token = token.ok_or_else(|| malformed(literal))?;
    T::parse_literal(token).map_err(|source| {
        debug!("invalid endpoint {:?} in range literal {:?}", token, literal);
        Error::parse(literal, Some(source))
    })
}

fn malformed(literal: &str) -> Error {
    debug!("malformed range literal {:?}", literal);
    Error::parse(literal, None)
}

impl<T> Interval<T>
where
    T: Instant,
{
    /// Describes the interval in words. The phrase cannot be parsed back.
    pub fn verbose(&self) -> String {
        let lower = self.lower().format_literal();
        let upper = self.upper().format_literal();
        match self.bounds() {
            Bounds::BothExclusive => {
                format!("Past {} and before {}", lower, upper)
            }
            Bounds::BothInclusive => format!("From {} to {}", lower, upper),
            Bounds::UpperInclusive => format!("Past {} to {}", lower, upper),
            Bounds::LowerInclusive => {
                format!("From {} and before {}", lower, upper)
            }
        }
    }
}

/// Writes the canonical range literal, always quoting both endpoints.
impl<T> fmt::Display for Interval<T>
where
    T: Instant,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower_inclusive() { '[' } else { '(' };
        let close = if self.upper_inclusive() { ']' } else { ')' };
        write!(
            f,
            "{}\"{}\",\"{}\"{}",
            open,
            self.lower().format_literal(),
            self.upper().format_literal(),
            close
        )
    }
}

impl<T> FromStr for Interval<T>
where
    T: Instant,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Interval<T>
where
    T: Instant,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Interval<T>
where
    T: Instant,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let literal = String::deserialize(deserializer)?;
        parse(&literal).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instant::Timestamp;
    use chrono::{DateTime, Utc};

    const LITERALS: [&str; 4] = [
        "[\"2024-10-13 10:00:00\",\"2024-10-13 15:00:00\")",
        "(\"2024-10-13 10:00:00\",\"2025-10-13 15:00:00\")",
        "[\"2024-10-13 10:00:00\",\"2026-10-13 15:00:00\"]",
        "(\"2024-10-13 10:00:00\",\"2027-10-13 15:00:00\"]",
    ];

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_literal(s).unwrap()
    }

    #[test]
    fn test_round_trip() {
        for literal in LITERALS.iter() {
            let interval: Interval = literal.parse().unwrap();
            assert_eq!(interval.to_string(), *literal);
        }
    }

    #[test]
    fn test_parse_bounds_from_delimiters() {
        let expected = [
            Bounds::LowerInclusive,
            Bounds::BothExclusive,
            Bounds::BothInclusive,
            Bounds::UpperInclusive,
        ];
        for (literal, bounds) in LITERALS.iter().zip(expected.iter()) {
            let interval: Interval = parse(literal).unwrap();
            assert_eq!(interval.bounds(), *bounds);
        }
    }

    #[test]
    fn test_parse_unquoted_and_extra_tokens() {
        let interval: Interval =
            parse("[2024-10-13 10:00:00,2024-10-13 15:00:00,garbage]").unwrap();
        assert_eq!(interval.lower(), ts("2024-10-13 10:00:00"));
        assert_eq!(interval.upper(), ts("2024-10-13 15:00:00"));
        assert_eq!(interval.bounds(), Bounds::BothInclusive);
    }

    #[test]
    fn test_parse_permissive_delimiters() {
        let interval: Interval =
            parse("{2024-10-13 10:00:00,2024-10-13 15:00:00}").unwrap();
        assert_eq!(interval.bounds(), Bounds::BothExclusive);
    }

    #[test]
    fn test_parse_invalid_date() {
        let result: Result<Interval> =
            parse("[\"2024-13-13 10:00:00\",\"2024-10-13 15:00:00\")");
        match result {
            Err(Error::Parse { source, .. }) => assert!(source.is_some()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_malformed() {
        for literal in ["", "[", "\"\"", "[]", "[2024-10-13 10:00:00]"].iter() {
            let result: Result<Interval> = parse(literal);
            assert!(
                matches!(result, Err(Error::Parse { .. })),
                "literal {:?}",
                literal
            );
        }
    }

    #[test]
    fn test_parse_inverted() {
        let result: Result<Interval> =
            parse("[\"2024-10-13 15:00:00\",\"2024-10-13 10:00:00\")");
        assert_eq!(result, Err(Error::InvalidOrdering));
    }

    #[test]
    fn test_parse_utc() {
        let interval: Interval<DateTime<Utc>> = LITERALS[0].parse().unwrap();
        assert_eq!(interval.to_string(), LITERALS[0]);
    }

    #[test]
    fn test_verbose() {
        let lower = ts("2024-10-13 10:00:00");
        let upper = ts("2024-10-13 15:00:00");
        let phrase =
            |bounds| Interval::new(lower, upper, bounds).unwrap().verbose();
        assert_eq!(
            phrase(Bounds::BothExclusive),
            "Past 2024-10-13 10:00:00 and before 2024-10-13 15:00:00"
        );
        assert_eq!(
            phrase(Bounds::BothInclusive),
            "From 2024-10-13 10:00:00 to 2024-10-13 15:00:00"
        );
        assert_eq!(
            phrase(Bounds::UpperInclusive),
            "Past 2024-10-13 10:00:00 to 2024-10-13 15:00:00"
        );
        assert_eq!(
            phrase(Bounds::LowerInclusive),
            "From 2024-10-13 10:00:00 and before 2024-10-13 15:00:00"
        );
    }
}

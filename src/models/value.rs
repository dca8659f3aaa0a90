//! Cell values of the statement view
//!
//! The view's columns are not known ahead of time, so each cell carries one
//! of a small set of value kinds.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A single cell of a statement row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Text(String),
    Number(Decimal),
    DateTime(NaiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Calendar date of this cell, if it holds or spells one
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::DateTime(dt) => Some(dt.date()),
            Self::Text(s) => parse_date_time(s).map(|dt| dt.date()),
            _ => None,
        }
    }

    /// Numeric value of this cell, if it holds or spells one
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(d) => Some(*d),
            Self::Text(s) => parse_decimal(s),
            _ => None,
        }
    }

    /// Text used for exact comparisons against search values
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(d) => write!(f, "{}", d),
            Self::DateTime(dt) if dt.time() == NaiveTime::MIN => {
                write!(f, "{}", dt.format("%Y-%m-%d"))
            }
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Parse a date or date-time in the formats database extracts commonly use
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    const DATE_TIME_FORMATS: [&str; 3] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Parse a decimal, accepting plain and scientific notation
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Text("ACME LTD".into()).to_string(), "ACME LTD");
        assert_eq!(
            Value::Number(Decimal::from_str("250.50").unwrap()).to_string(),
            "250.50"
        );

        let midnight = parse_date_time("2024-03-01").unwrap();
        assert_eq!(Value::DateTime(midnight).to_string(), "2024-03-01");

        let afternoon = parse_date_time("2024-03-01 14:05:00").unwrap();
        assert_eq!(Value::DateTime(afternoon).to_string(), "2024-03-01 14:05:00");
    }

    #[test]
    fn test_as_date() {
        let dt = parse_date_time("2024-03-01T09:30:00").unwrap();
        assert_eq!(
            Value::DateTime(dt).as_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(
            Value::Text("2024-03-01".into()).as_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(Value::Text("not a date".into()).as_date(), None);
        assert_eq!(Value::Null.as_date(), None);
    }

    #[test]
    fn test_as_decimal() {
        assert_eq!(
            Value::Text(" 49.50 ".into()).as_decimal(),
            Some(Decimal::new(4950, 2))
        );
        assert_eq!(Value::Text("1e3".into()).as_decimal(), Some(Decimal::new(1000, 0)));
        assert_eq!(Value::Text("n/a".into()).as_decimal(), None);
        assert_eq!(Value::Null.as_decimal(), None);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(Value::Null.as_text(), None);
        assert_eq!(
            Value::Text("G/001".into()).as_text(),
            Some("G/001".to_string())
        );
    }
}

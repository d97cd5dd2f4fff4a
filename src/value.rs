// src/value.rs
//
// Raw cell text → typed value.
//
// Every cell on a statistics page is free text: numbers carry thousands
// separators and magnitude suffixes, dates are written out, labels are
// mixed-case prose. `normalize` tries, in this order:
//
//   1. number  `[+-]digits[,digits][.digits][k|M|B|%]`
//   2. date    `Mon D, YYYY`
//   3. text    `canonicalize` (always succeeds)
//
// The order is part of the contract: "12" is a number, never text, and a
// date-looking cell is only a date if it isn't a number first.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::core::sanitize::canonicalize;

static NUMBER_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>[-+])?(?P<number>[0-9,]+\.?[0-9]*)(?P<suffix>[kMB%])?$").ok()
});

static DATE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]{2} [0-9]{1,2}, [0-9]{4}$").ok()
});

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl Value {
    /// Only `Text("")` is empty; numbers and dates always carry something.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
            Value::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Normalize one trimmed cell. Never fails; worst case is `Text("")`.
pub fn normalize(raw: &str) -> Value {
    let raw = raw.trim();
    parse_number(raw)
        .map(Value::Number)
        .or_else(|| parse_date(raw).map(Value::Date))
        .unwrap_or_else(|| Value::Text(canonicalize(raw)))
}

fn parse_number(raw: &str) -> Option<f64> {
    let caps = NUMBER_RE.as_ref()?.captures(raw)?;

    // "," alone matches the pattern but has no digits
    let digits = caps["number"].replace(',', "");
    let mut n: f64 = digits.parse().ok()?;

    if caps.name("sign").is_some_and(|m| m.as_str() == "-") {
        n = -n;
    }
    match caps.name("suffix").map(|m| m.as_str()) {
        Some("k") => n *= 1e3,
        Some("M") => n *= 1e6,
        Some("B") => n *= 1e9,
        // percentages are stored as fractions
        Some("%") => n /= 100.0,
        _ => {}
    }

    // JSON has no infinity; a 300-digit cell goes to the text path instead
    n.is_finite().then_some(n)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !DATE_RE.as_ref()?.is_match(raw) {
        return None;
    }
    // Matches the shape but not the calendar ("Feb 30, 2021", "Foo 1, 2020")
    NaiveDate::parse_from_str(raw, "%b %d, %Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(raw: &str) -> f64 {
        match normalize(raw) {
            Value::Number(n) => n,
            other => panic!("{raw:?} → {other:?}, expected a number"),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn suffix_scaling() {
        assert!(close(num("-1,234.5k"), -1_234_500.0));
        assert!(close(num("12.3%"), 0.123));
        assert_eq!(num("2B"), 2_000_000_000.0);
        assert_eq!(num("1.5B"), 1_500_000_000.0);
        assert!(close(num("3.21M"), 3_210_000.0));
        assert_eq!(num("42"), 42.0);
    }

    #[test]
    fn signs_and_separators() {
        assert_eq!(num("+7"), 7.0);
        assert_eq!(num("-0.5"), -0.5);
        assert_eq!(num("1,000,000"), 1_000_000.0);
        assert_eq!(num("5."), 5.0);
    }

    #[test]
    fn suffixes_are_case_sensitive() {
        // "m" and "b" are not magnitude suffixes, so these are labels
        assert_eq!(normalize("3m"), Value::Text(s!("3m")));
        assert_eq!(normalize("2b"), Value::Text(s!("2b")));
        assert_eq!(normalize("2K"), Value::Text(s!("2k")));
    }

    #[test]
    fn comma_only_falls_through_to_text() {
        assert_eq!(normalize(","), Value::Text(s!()));
        assert_eq!(normalize(",,,%"), Value::Text(s!("pct")));
    }

    #[test]
    fn date_reformatting() {
        assert_eq!(normalize("Dec 31, 2020"), Value::Date(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap()));
        assert_eq!(normalize("Mar 1, 2021"), Value::Date(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()));
    }

    #[test]
    fn impossible_dates_are_text() {
        assert_eq!(normalize("Feb 30, 2021"), Value::Text(s!("feb_30_2021")));
        assert_eq!(normalize("Foo 1, 2020"), Value::Text(s!("foo_1_2020")));
        // lowercase month doesn't match the date shape
        assert_eq!(normalize("dec 31, 2020"), Value::Text(s!("dec_31_2020")));
    }

    #[test]
    fn text_fallback() {
        assert_eq!(normalize("N/A"), Value::Text(s!()));
        assert_eq!(normalize("Nasdaq GS"), Value::Text(s!("nasdaq_gs")));
        assert_eq!(normalize("3:2"), Value::Text(s!("3:2")));
        assert!(normalize("N/A").is_empty());
        assert!(!normalize("0").is_empty());
    }

    #[test]
    fn every_input_gets_a_value() {
        let inputs = ["", " ", "-", "+", ".", "%", "k", "1.2.3", "∞", "1e5", "Dec 31 2020", "١٢٣"];
        for raw in inputs {
            // must not panic; any variant is acceptable
            let _ = normalize(raw);
        }
        assert_eq!(normalize("1.2.3"), Value::Text(s!("1.2.3")));
        assert_eq!(normalize("-"), Value::Text(s!()));
    }

    #[test]
    fn overflow_is_not_a_number() {
        let huge = "9".repeat(400);
        assert!(matches!(normalize(&huge), Value::Text(_)));
    }

    #[test]
    fn serializes_as_plain_json() {
        let v = vec![
            Value::Number(0.5),
            Value::Date(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()),
            Value::Text(s!("nyse")),
        ];
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"[0.5,"2020-01-02","nyse"]"#);
    }
}

//! Declarative field rules for record forms

use chrono::NaiveDate;

/// Bound of a date field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Fixed { year: i32, month: u32, day: u32 },
    /// The current date at validation time
    Today,
}

impl DateBound {
    pub const fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::Fixed { year, month, day }
    }

    pub fn resolve(&self, today: NaiveDate) -> Option<NaiveDate> {
        match *self {
            Self::Fixed { year, month, day } => NaiveDate::from_ymd_opt(year, month, day),
            Self::Today => Some(today),
        }
    }
}

/// Validation rule of one field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    /// Non-empty text of at least `min_len` characters (trimmed)
    Text { min_len: usize },
    /// Finite number within the optional inclusive bounds
    Number { min: Option<f64>, max: Option<f64> },
    /// `YYYY-MM-DD` date within the optional inclusive bounds
    Date {
        earliest: Option<DateBound>,
        latest: Option<DateBound>,
    },
    /// Yes/no select; the empty-string "nothing chosen" sentinel fails
    Choice,
    /// Integer identifier of another record; must be set
    Reference,
    /// Never rejected (switches, checkboxes)
    Unchecked,
}

impl FieldRule {
    pub const fn text(min_len: usize) -> Self {
        Self::Text { min_len }
    }

    pub const fn number() -> Self {
        Self::Number {
            min: None,
            max: None,
        }
    }

    pub const fn number_between(min: f64, max: f64) -> Self {
        Self::Number {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn non_negative() -> Self {
        Self::Number {
            min: Some(0.0),
            max: None,
        }
    }

    pub const fn date() -> Self {
        Self::Date {
            earliest: None,
            latest: None,
        }
    }

    pub const fn date_between(earliest: DateBound, latest: DateBound) -> Self {
        Self::Date {
            earliest: Some(earliest),
            latest: Some(latest),
        }
    }

    /// Check a raw input value against the rule
    pub fn accepts(&self, raw: &str, today: NaiveDate) -> bool {
        match *self {
            Self::Text { min_len } => {
                let value = raw.trim();
                !value.is_empty() && value.chars().count() >= min_len
            }
            Self::Number { min, max } => match super::draft::parse_number(raw) {
                Some(n) => min.map_or(true, |m| n >= m) && max.map_or(true, |m| n <= m),
                None => false,
            },
            Self::Date { earliest, latest } => match super::draft::parse_date(raw) {
                Some(d) => {
                    let after = earliest
                        .and_then(|b| b.resolve(today))
                        .map_or(true, |b| d >= b);
                    let before = latest
                        .and_then(|b| b.resolve(today))
                        .map_or(true, |b| d <= b);
                    after && before
                }
                None => false,
            },
            Self::Choice => matches!(raw.trim(), "true" | "false"),
            Self::Reference => raw.trim().parse::<i64>().is_ok(),
            Self::Unchecked => true,
        }
    }
}

/// One row of a form's rule table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Key in the draft and in the JSON payload
    pub name: &'static str,
    pub label: &'static str,
    pub rule: FieldRule,
    /// Inline hint shown under an invalid field
    pub hint: &'static str,
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        rule: FieldRule,
        hint: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            rule,
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_text_rule_counts_trimmed_chars() {
        let rule = FieldRule::text(3);
        assert!(rule.accepts("Ávila", today()));
        assert!(rule.accepts("Oña", today()));
        assert!(!rule.accepts("Ab", today()));
        assert!(!rule.accepts("  Ab  ", today()));
        assert!(!rule.accepts("", today()));
    }

    #[test]
    fn test_number_rule_bounds_are_inclusive() {
        let rule = FieldRule::number_between(0.0, 100.0);
        assert!(rule.accepts("0", today()));
        assert!(rule.accepts("100", today()));
        assert!(rule.accepts("55.5", today()));
        assert!(!rule.accepts("-0.1", today()));
        assert!(!rule.accepts("100.01", today()));
        assert!(!rule.accepts("", today()));
        assert!(!rule.accepts("cien", today()));
    }

    #[test]
    fn test_date_rule_with_today_bound() {
        let rule = FieldRule::date_between(DateBound::ymd(1800, 1, 1), DateBound::Today);
        assert!(rule.accepts("1800-01-01", today()));
        assert!(rule.accepts("2024-06-01", today()));
        assert!(!rule.accepts("2024-06-02", today()));
        assert!(!rule.accepts("1799-12-31", today()));
        assert!(!rule.accepts("01/02/2000", today()));
    }

    #[test]
    fn test_choice_accepts_only_yes_no() {
        assert!(!FieldRule::Choice.accepts("", today()));
        assert!(FieldRule::Choice.accepts("false", today()));
        assert!(FieldRule::Choice.accepts("true", today()));
        assert!(!FieldRule::Choice.accepts("anything", today()));
    }

    #[test]
    fn test_reference_and_unchecked() {
        assert!(!FieldRule::Reference.accepts(" ", today()));
        assert!(!FieldRule::Reference.accepts("tres", today()));
        assert!(FieldRule::Reference.accepts("4", today()));
        assert!(FieldRule::Unchecked.accepts("", today()));
    }
}

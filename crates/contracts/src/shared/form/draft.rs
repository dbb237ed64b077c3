use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Date format used by date inputs and by the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// In-progress copy of a record as typed by the user
///
/// A flat mapping of field name to raw input text. Typed accessors parse on
/// demand and return `None` for missing or malformed values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    values: BTreeMap<String, String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Raw text of a field; missing fields read as empty
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Trimmed text
    pub fn text(&self, field: &str) -> String {
        self.get(field).trim().to_string()
    }

    /// Finite number parsed from the trimmed text
    pub fn number(&self, field: &str) -> Option<f64> {
        parse_number(self.get(field))
    }

    /// Calendar date in `YYYY-MM-DD` form
    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        parse_date(self.get(field))
    }

    /// "true"/"false" flag
    pub fn flag(&self, field: &str) -> Option<bool> {
        match self.get(field).trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// Integer identifier of a referenced record
    pub fn reference(&self, field: &str) -> Option<i64> {
        self.get(field).trim().parse::<i64>().ok()
    }
}

pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn flag_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

use super::{FieldSpec, FormDraft};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Per-field validity computed by one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    fields: BTreeMap<&'static str, bool>,
}

impl ValidationReport {
    /// Report before the first pass: every field shown as valid
    pub fn pristine(rules: &[FieldSpec]) -> Self {
        Self {
            fields: rules.iter().map(|spec| (spec.name, true)).collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|ok| *ok)
    }

    /// Unknown fields count as valid
    pub fn is_field_valid(&self, field: &str) -> bool {
        self.fields.get(field).copied().unwrap_or(true)
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|(_, ok)| !**ok)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Hint for `field` if it failed, looked up in `rules`
    pub fn hint<'a>(&self, rules: &'a [FieldSpec], field: &str) -> Option<&'a str> {
        if self.is_field_valid(field) {
            return None;
        }
        rules.iter().find(|s| s.name == field).map(|s| s.hint)
    }
}

/// Validate `draft` against `rules`
///
/// Pure: recomputes every field from scratch and never touches the draft.
pub fn validate(draft: &FormDraft, rules: &[FieldSpec], today: NaiveDate) -> ValidationReport {
    let fields = rules
        .iter()
        .map(|spec| (spec.name, spec.rule.accepts(draft.get(spec.name), today)))
        .collect();
    ValidationReport { fields }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FieldRule;

    const RULES: &[FieldSpec] = &[
        FieldSpec::new("nombre", "Nombre", FieldRule::text(3), "Mínimo 3"),
        FieldSpec::new("pct", "%", FieldRule::number_between(0.0, 100.0), "0-100"),
    ];

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_all_or_nothing() {
        let ok = FormDraft::new().with("nombre", "Abc").with("pct", "50");
        let report = validate(&ok, RULES, today());
        assert!(report.is_valid());
        assert!(report.invalid_fields().is_empty());

        let bad = FormDraft::new().with("nombre", "Abc").with("pct", "150");
        let report = validate(&bad, RULES, today());
        assert!(!report.is_valid());
        assert_eq!(report.invalid_fields(), vec!["pct"]);
        assert_eq!(report.hint(RULES, "pct"), Some("0-100"));
        assert_eq!(report.hint(RULES, "nombre"), None);
    }

    #[test]
    fn test_validation_does_not_mutate_draft() {
        let draft = FormDraft::new().with("nombre", " A ");
        let before = draft.clone();
        let _ = validate(&draft, RULES, today());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_pristine_report_is_valid() {
        let report = ValidationReport::pristine(RULES);
        assert!(report.is_valid());
        assert!(report.is_field_valid("nombre"));
    }
}

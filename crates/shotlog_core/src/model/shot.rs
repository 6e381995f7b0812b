//! Shot entry domain model.
//!
//! # Responsibility
//! - Define the single record shape for one medication administration.
//! - Keep the serialized property names stable for on-device data.
//!
//! # Invariants
//! - `id` is caller-supplied and opaque; the core never enforces uniqueness.
//! - `date` is a `YYYY-MM-DD` calendar string; presence is the only check
//!   the core makes.
//! - Optional fields serialize by omission, never as explicit nulls.

use serde::{Deserialize, Serialize};

/// One administration record as entered by the user.
///
/// All validation beyond field presence (date shape, pain-score range,
/// dose bounds) is a UI concern. The core stores what it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotEntry {
    /// Caller-supplied unique identifier. Opaque to the core.
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Clock time, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Unit-less numeric dose; the unit is a display concern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dose_amount: Option<f64>,
    /// Free-text injection site label, e.g. "thigh".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Pain rating, conventionally 0-10. Never clamped here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_score: Option<f64>,
    /// Free-text mood note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Long-form notes, unbounded length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ShotEntry {
    /// Creates an entry with the two required fields and everything else
    /// absent.
    pub fn new(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: None,
            dose_amount: None,
            site: None,
            pain_score: None,
            mood: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ShotEntry;

    #[test]
    fn new_leaves_optional_fields_absent() {
        let entry = ShotEntry::new("shot-1", "2024-01-15");
        assert_eq!(entry.id, "shot-1");
        assert_eq!(entry.date, "2024-01-15");
        assert!(entry.time.is_none());
        assert!(entry.dose_amount.is_none());
        assert!(entry.site.is_none());
        assert!(entry.pain_score.is_none());
        assert!(entry.mood.is_none());
        assert!(entry.notes.is_none());
    }

    #[test]
    fn absent_optional_fields_are_omitted_from_json() {
        let entry = ShotEntry::new("shot-1", "2024-01-15");
        let raw = serde_json::to_string(&entry).unwrap();
        assert_eq!(raw, r#"{"id":"shot-1","date":"2024-01-15"}"#);
    }

    #[test]
    fn populated_fields_use_camel_case_property_names() {
        let mut entry = ShotEntry::new("shot-2", "2024-02-01");
        entry.time = Some("08:30".to_string());
        entry.dose_amount = Some(50.0);
        entry.site = Some("thigh".to_string());
        entry.pain_score = Some(3.0);

        let raw = serde_json::to_string(&entry).unwrap();
        assert!(raw.contains(r#""doseAmount":50.0"#));
        assert!(raw.contains(r#""painScore":3.0"#));
        assert!(raw.contains(r#""site":"thigh""#));
        assert!(raw.contains(r#""time":"08:30""#));
    }

    #[test]
    fn json_without_optional_properties_decodes_to_absent_fields() {
        let raw = r#"{"id":"shot-3","date":"2024-03-10"}"#;
        let entry: ShotEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry, ShotEntry::new("shot-3", "2024-03-10"));
    }
}

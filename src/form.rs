//! Editable student record and its conversion into the backend payload.
//!
//! Field values are kept exactly as typed so half-finished input never
//! errors; numeric coercion happens only when a payload is built.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Identifies one of the fourteen inputs the backend expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    ApplicationOrder,
    InflationRate,
    ApplicationMode,
    Gdp,
    UnemploymentRate,
    Course,
    FirstSemEvaluations,
    SecondSemEvaluations,
    AgeAtEnrollment,
    AdmissionGrade,
    FirstSemApproved,
    FirstSemGrade,
    SecondSemGrade,
    SecondSemApproved,
}

/// Number of fields in a [`FormRecord`].
pub const FIELD_COUNT: usize = 14;

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; FIELD_COUNT] = [
        FieldId::ApplicationOrder,
        FieldId::InflationRate,
        FieldId::ApplicationMode,
        FieldId::Gdp,
        FieldId::UnemploymentRate,
        FieldId::Course,
        FieldId::FirstSemEvaluations,
        FieldId::SecondSemEvaluations,
        FieldId::AgeAtEnrollment,
        FieldId::AdmissionGrade,
        FieldId::FirstSemApproved,
        FieldId::FirstSemGrade,
        FieldId::SecondSemGrade,
        FieldId::SecondSemApproved,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Key used in the JSON request body. Must match the backend exactly.
    pub fn payload_key(self) -> &'static str {
        match self {
            Self::ApplicationOrder => "Application order",
            Self::InflationRate => "Inflation rate",
            Self::ApplicationMode => "Application mode",
            Self::Gdp => "GDP",
            Self::UnemploymentRate => "Unemployment rate",
            Self::Course => "Course",
            Self::FirstSemEvaluations => "Curricular units 1st sem (evaluations)",
            Self::SecondSemEvaluations => "Curricular units 2nd sem (evaluations)",
            Self::AgeAtEnrollment => "Age at enrollment",
            Self::AdmissionGrade => "Admission grade",
            Self::FirstSemApproved => "Curricular units 1st sem (approved)",
            Self::FirstSemGrade => "Curricular units 1st sem (grade)",
            Self::SecondSemGrade => "Curricular units 2nd sem (grade)",
            Self::SecondSemApproved => "Curricular units 2nd sem (approved)",
        }
    }

    /// Short label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::ApplicationOrder => "Application order",
            Self::InflationRate => "Inflation rate",
            Self::ApplicationMode => "Application mode",
            Self::Gdp => "GDP",
            Self::UnemploymentRate => "Unemployment rate",
            Self::Course => "Course",
            Self::FirstSemEvaluations => "1st sem evaluations",
            Self::SecondSemEvaluations => "2nd sem evaluations",
            Self::AgeAtEnrollment => "Age at enrollment",
            Self::AdmissionGrade => "Admission grade",
            Self::FirstSemApproved => "1st sem approved",
            Self::FirstSemGrade => "1st sem grade",
            Self::SecondSemGrade => "2nd sem grade",
            Self::SecondSemApproved => "2nd sem approved",
        }
    }

    /// Value the form starts with.
    pub fn seed(self) -> &'static str {
        match self {
            Self::ApplicationOrder => "1",
            Self::InflationRate => "2.5",
            Self::ApplicationMode => "5",
            Self::Gdp => "1.8",
            Self::UnemploymentRate => "7.4",
            Self::Course => "9500",
            Self::FirstSemEvaluations => "6",
            Self::SecondSemEvaluations => "5",
            Self::AgeAtEnrollment => "20",
            Self::AdmissionGrade => "145",
            Self::FirstSemApproved => "5",
            Self::FirstSemGrade => "13.5",
            Self::SecondSemGrade => "14",
            Self::SecondSemApproved => "4",
        }
    }

    pub fn tooltip(self) -> &'static str {
        crate::tooltips::field_help(self)
    }
}

/// Raw text for every field. Edits go through [`FormRecord::set_field`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRecord {
    values: [String; FIELD_COUNT],
}

impl Default for FormRecord {
    fn default() -> Self {
        Self {
            values: FieldId::ALL.map(|field| field.seed().to_string()),
        }
    }
}

impl FormRecord {
    /// Raw text currently held for `field`.
    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Replace one field with the raw text entered. Never fails.
    pub fn set_field(&mut self, field: FieldId, raw: impl Into<String>) {
        self.values[field.index()] = raw.into();
    }

    /// Return a copy with one field replaced and every other field preserved.
    pub fn with_field(&self, field: FieldId, raw: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set_field(field, raw);
        next
    }

    /// Restore every field to its seed value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fields whose text does not coerce to a finite number.
    pub fn non_numeric_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|field| !coerce_number(self.get(*field)).is_finite())
            .collect()
    }

    /// Build the request body, coercing every field to a number.
    ///
    /// Text that is not a number becomes `NaN` and is passed on as-is.
    pub fn to_payload(&self) -> StudentPayload {
        StudentPayload {
            values: FieldId::ALL.map(|field| coerce_number(self.get(field))),
        }
    }
}

/// Numeric request body shared by the predict and explanation calls.
///
/// Serializes as a JSON object keyed by [`FieldId::payload_key`]. JSON has no
/// `NaN`, so non-numeric entries go out as `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentPayload {
    values: [f64; FIELD_COUNT],
}

impl StudentPayload {
    pub fn get(&self, field: FieldId) -> f64 {
        self.values[field.index()]
    }

    /// `(payload key, value)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FieldId::ALL
            .into_iter()
            .map(|field| (field.payload_key(), self.get(field)))
    }
}

impl Serialize for StudentPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (key, value) in self.entries() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

/// Coerce text to a number the way a browser's `Number()` does.
///
/// Blank text is 0, surrounding whitespace is ignored, `0x`/`0o`/`0b`
/// prefixes and `Infinity` are understood, anything else unparseable is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(value) = parse_radix_literal(text) {
        return value;
    }
    // Rust accepts "inf"/"nan" spellings that are not numbers in a form.
    if text.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    Some(
        u64::from_str_radix(digits, radix)
            .map(|value| value as f64)
            .unwrap_or(f64::NAN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_holds_seed_values() {
        let record = FormRecord::default();
        assert_eq!(record.get(FieldId::Course), "9500");
        assert_eq!(record.get(FieldId::FirstSemGrade), "13.5");
        assert!(record.non_numeric_fields().is_empty());
    }

    #[test]
    fn payload_has_exactly_the_fixed_keys_with_numbers() {
        let json = serde_json::to_value(FormRecord::default().to_payload()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), FIELD_COUNT);
        for field in FieldId::ALL {
            assert!(
                object.get(field.payload_key()).is_some_and(|v| v.is_number()),
                "missing numeric {}",
                field.payload_key()
            );
        }
        assert_eq!(object["Application order"], 1.0);
        assert_eq!(object["Curricular units 1st sem (grade)"], 13.5);
        assert_eq!(object["GDP"], 1.8);
    }

    #[test]
    fn set_field_tolerates_partial_input() {
        let mut record = FormRecord::default();
        record.set_field(FieldId::AdmissionGrade, "");
        assert_eq!(record.get(FieldId::AdmissionGrade), "");
        record.set_field(FieldId::AdmissionGrade, "1.");
        assert_eq!(record.to_payload().get(FieldId::AdmissionGrade), 1.0);
    }

    #[test]
    fn non_numeric_input_becomes_nan_and_serializes_as_null() {
        let record = FormRecord::default().with_field(FieldId::Gdp, "abc");
        let payload = record.to_payload();
        assert!(payload.get(FieldId::Gdp).is_nan());
        assert_eq!(record.non_numeric_fields(), vec![FieldId::Gdp]);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["GDP"].is_null());
        assert_eq!(json.as_object().unwrap().len(), FIELD_COUNT);
    }

    #[test]
    fn with_field_leaves_source_untouched() {
        let original = FormRecord::default();
        let patched = original.with_field(FieldId::AgeAtEnrollment, "31");
        assert_eq!(original.get(FieldId::AgeAtEnrollment), "20");
        assert_eq!(patched.get(FieldId::AgeAtEnrollment), "31");
        for field in FieldId::ALL {
            if field != FieldId::AgeAtEnrollment {
                assert_eq!(original.get(field), patched.get(field));
            }
        }
    }

    #[test]
    fn reset_restores_seeds() {
        let mut record = FormRecord::default().with_field(FieldId::Course, "1");
        record.reset();
        assert_eq!(record, FormRecord::default());
    }

    #[test]
    fn coercion_follows_browser_number_rules() {
        assert_eq!(coerce_number("  42 "), 42.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("-7.25"), -7.25);
        assert_eq!(coerce_number("0x10"), 16.0);
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("nan").is_nan());
        assert!(coerce_number("12abc").is_nan());
        assert!(coerce_number("0xzz").is_nan());
        assert!(coerce_number("1,5").is_nan());
    }

    #[test]
    fn payload_keys_are_distinct() {
        let keys: std::collections::HashSet<&str> =
            FieldId::ALL.iter().map(|field| field.payload_key()).collect();
        assert_eq!(keys.len(), FIELD_COUNT);
    }
}

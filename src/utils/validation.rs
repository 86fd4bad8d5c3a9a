//! Centralized input validation for symptom reports.
//!
//! The matcher itself accepts anything; these checks run at the CLI and
//! HTTP boundaries before a query is built.

/// Maximum number of symptoms accepted in a single report (DOS protection)
pub const MAX_SYMPTOMS: usize = 50;

/// Maximum length of a single symptom name, in characters
pub const MAX_SYMPTOM_LENGTH: usize = 100;

/// Upper bounds for patient measurements
pub const MAX_AGE_YEARS: f64 = 150.0;
pub const MAX_WEIGHT_KG: f64 = 1000.0;

/// Input validation error types
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("No symptoms provided")]
    NoSymptoms,
    #[error("Symptoms must be a list of strings")]
    SymptomsNotAList,
    #[error("Too many symptoms: at most {MAX_SYMPTOMS} are accepted")]
    TooManySymptoms,
    #[error("Symptom name too long: exceeds {MAX_SYMPTOM_LENGTH} characters")]
    SymptomTooLong,
    #[error("Symptom name contains control characters")]
    InvalidSymptom,
    #[error("Invalid value for '{0}': expected a non-negative number")]
    InvalidMeasurement(&'static str),
}

impl ValidationError {
    /// Stable machine-readable identifier for API error bodies
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::NoSymptoms => "missing_symptoms",
            Self::SymptomsNotAList => "invalid_symptoms",
            Self::TooManySymptoms => "too_many_symptoms",
            Self::SymptomTooLong => "symptom_too_long",
            Self::InvalidSymptom => "invalid_symptom",
            Self::InvalidMeasurement(_) => "invalid_measurement",
        }
    }
}

/// Validate reported symptoms and drop blank entries.
///
/// Entries are trimmed; casing is left alone (matching normalizes it).
///
/// # Errors
///
/// Returns `ValidationError::NoSymptoms` if nothing non-blank remains,
/// `ValidationError::TooManySymptoms` above [`MAX_SYMPTOMS`] entries,
/// `ValidationError::SymptomTooLong` or `ValidationError::InvalidSymptom`
/// for a bad individual entry.
pub fn validate_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Result<Vec<String>, ValidationError> {
    if symptoms.len() > MAX_SYMPTOMS {
        return Err(ValidationError::TooManySymptoms);
    }

    let mut cleaned = Vec::with_capacity(symptoms.len());
    for symptom in symptoms {
        let trimmed = symptom.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.chars().count() > MAX_SYMPTOM_LENGTH {
            return Err(ValidationError::SymptomTooLong);
        }
        if trimmed.chars().any(char::is_control) {
            return Err(ValidationError::InvalidSymptom);
        }
        cleaned.push(trimmed.to_string());
    }

    if cleaned.is_empty() {
        return Err(ValidationError::NoSymptoms);
    }

    Ok(cleaned)
}

/// Split a comma-separated symptom list ("fever, cough,headache").
///
/// # Examples
///
/// ```
/// use symptom_matcher::utils::validation::split_symptom_list;
///
/// assert_eq!(split_symptom_list("fever, Sore Throat,,"), vec!["fever", "Sore Throat"]);
/// ```
#[must_use]
pub fn split_symptom_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract symptom names from a JSON value that must be an array of strings.
///
/// # Errors
///
/// Returns `ValidationError::SymptomsNotAList` for anything other than an
/// array of strings, and the [`validate_symptoms`] errors otherwise. A
/// missing (`null`) value counts as no symptoms.
pub fn symptoms_from_json(value: &serde_json::Value) -> Result<Vec<String>, ValidationError> {
    let items = match value {
        serde_json::Value::Null => return Err(ValidationError::NoSymptoms),
        serde_json::Value::Array(items) => items,
        _ => return Err(ValidationError::SymptomsNotAList),
    };

    let names = items
        .iter()
        .map(|item| item.as_str().ok_or(ValidationError::SymptomsNotAList))
        .collect::<Result<Vec<&str>, _>>()?;

    validate_symptoms(&names)
}

/// Parse an optional patient measurement (age or weight) from JSON.
///
/// Accepts a number, a numeric string, an empty string, or null. Web forms
/// commonly send numbers as strings, and an empty field as `""`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidMeasurement` for other types,
/// non-numeric strings, negative or non-finite values, or values above
/// `max`.
pub fn measurement_from_json(
    value: Option<&serde_json::Value>,
    field: &'static str,
    max: f64,
) -> Result<Option<f64>, ValidationError> {
    let parsed = match value {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(v) => validate_measurement(v, field, max).map(Some),
        None => Err(ValidationError::InvalidMeasurement(field)),
    }
}

/// Check a measurement is finite and within `0..=max`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidMeasurement` if the value is out of range.
pub fn validate_measurement(value: f64, field: &'static str, max: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidMeasurement(field))
    }
}

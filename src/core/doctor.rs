use serde::{Deserialize, Serialize};

/// A doctor in the consultation directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,

    /// e.g. "Cardiologist", "General Physician"
    pub specialization: String,

    #[serde(default)]
    pub qualification: String,

    #[serde(default)]
    pub experience_years: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_affiliation: Option<String>,

    #[serde(default = "default_consultation_fee")]
    pub consultation_fee: f64,

    #[serde(default)]
    pub verified: bool,

    #[serde(default = "default_available_days")]
    pub available_days: String,
}

fn default_consultation_fee() -> f64 {
    500.0
}

fn default_available_days() -> String {
    "Mon-Fri".to_string()
}

impl Doctor {
    pub fn new(name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialization: specialization.into(),
            qualification: String::new(),
            experience_years: 0,
            hospital_affiliation: None,
            consultation_fee: default_consultation_fee(),
            verified: false,
            available_days: default_available_days(),
        }
    }

    /// Case-insensitive comparison against a specialist label
    #[must_use]
    pub fn specializes_in(&self, specialist: &str) -> bool {
        self.specialization.trim().eq_ignore_ascii_case(specialist.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_minimal_json() {
        let doctor: Doctor =
            serde_json::from_str(r#"{"name": "Dr. Lee", "specialization": "Cardiologist"}"#)
                .unwrap();
        assert!((doctor.consultation_fee - 500.0).abs() < f64::EPSILON);
        assert_eq!(doctor.available_days, "Mon-Fri");
        assert!(!doctor.verified);
    }

    #[test]
    fn test_specializes_in() {
        let doctor = Doctor::new("Dr. Lee", "General Physician");
        assert!(doctor.specializes_in("general physician"));
        assert!(doctor.specializes_in(" General Physician "));
        assert!(!doctor.specializes_in("Pulmonologist"));
    }
}

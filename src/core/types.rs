use serde::{Deserialize, Serialize};

/// Clinical severity tier of a disease.
///
/// Labels outside the known tiers are kept verbatim in [`Severity::Other`]
/// so that a catalog with malformed data still loads and round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Other(String),
}

impl Severity {
    /// Fixed score bonus added on top of symptom coverage.
    #[must_use]
    pub fn offset(&self) -> f64 {
        match self {
            Self::Low | Self::Other(_) => 0.0,
            Self::Medium => 10.0,
            Self::High => 20.0,
            Self::Critical => 30.0,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Severity {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            "Critical" => Self::Critical,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for Severity {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_str().to_string()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of a medicine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemedyType {
    Home,
    Ayurveda,
    Homeopathy,
    Allopathy,
}

impl std::fmt::Display for RemedyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "Home Remedy"),
            Self::Ayurveda => write!(f, "Ayurveda"),
            Self::Homeopathy => write!(f, "Homeopathy"),
            Self::Allopathy => write!(f, "Allopathy"),
        }
    }
}

/// Advisory treatment tier derived from the final match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Home Remedies")]
    HomeRemedies,
    #[serde(rename = "Ayurveda & Homeopathy")]
    AyurvedaHomeopathy,
    #[serde(rename = "Allopathy + Doctor Consultation")]
    AllopathyConsultation,
}

/// Scores at or below this stay in home care.
pub const HOME_REMEDIES_MAX_SCORE: f64 = 30.0;

/// Scores at or below this (and above [`HOME_REMEDIES_MAX_SCORE`]) suggest traditional remedies.
pub const AYURVEDA_MAX_SCORE: f64 = 60.0;

impl Recommendation {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= HOME_REMEDIES_MAX_SCORE {
            Self::HomeRemedies
        } else if score <= AYURVEDA_MAX_SCORE {
            Self::AyurvedaHomeopathy
        } else {
            Self::AllopathyConsultation
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HomeRemedies => "Home Remedies",
            Self::AyurvedaHomeopathy => "Ayurveda & Homeopathy",
            Self::AllopathyConsultation => "Allopathy + Doctor Consultation",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_offsets() {
        assert!((Severity::Low.offset() - 0.0).abs() < f64::EPSILON);
        assert!((Severity::Medium.offset() - 10.0).abs() < f64::EPSILON);
        assert!((Severity::High.offset() - 20.0).abs() < f64::EPSILON);
        assert!((Severity::Critical.offset() - 30.0).abs() < f64::EPSILON);
        assert!((Severity::from("Severe").offset() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_severity_round_trips() {
        let severity: Severity = serde_json::from_str("\"Moderate\"").unwrap();
        assert_eq!(severity, Severity::Other("Moderate".to_string()));
        assert_eq!(serde_json::to_string(&severity).unwrap(), "\"Moderate\"");

        let severity: Severity = serde_json::from_str("\"Critical\"").unwrap();
        assert_eq!(severity, Severity::Critical);
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert_eq!(Recommendation::from_score(0.0), Recommendation::HomeRemedies);
        assert_eq!(Recommendation::from_score(30.0), Recommendation::HomeRemedies);
        assert_eq!(
            Recommendation::from_score(30.01),
            Recommendation::AyurvedaHomeopathy
        );
        assert_eq!(
            Recommendation::from_score(60.0),
            Recommendation::AyurvedaHomeopathy
        );
        assert_eq!(
            Recommendation::from_score(60.5),
            Recommendation::AllopathyConsultation
        );
        assert_eq!(
            Recommendation::from_score(100.0),
            Recommendation::AllopathyConsultation
        );
    }

    #[test]
    fn test_recommendation_serializes_as_label() {
        let json = serde_json::to_string(&Recommendation::AyurvedaHomeopathy).unwrap();
        assert_eq!(json, "\"Ayurveda & Homeopathy\"");
    }

    #[test]
    fn test_remedy_type_parse() {
        let remedy: RemedyType = serde_json::from_str("\"Homeopathy\"").unwrap();
        assert_eq!(remedy, RemedyType::Homeopathy);
        assert!(serde_json::from_str::<RemedyType>("\"Magic\"").is_err());
    }
}

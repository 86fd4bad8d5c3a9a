use std::collections::HashSet;

use crate::core::disease::Disease;
use crate::core::types::Recommendation;

/// Upper bound for any match score
pub const MAX_SCORE: f64 = 100.0;

/// Safely convert usize to f64 for percentage calculations
///
/// Symptom counts are tiny, so the precision loss on 64-bit platforms never
/// matters in practice.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Round to two decimal places, exact ties to even
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Score breakdown for one disease against one symptom report
#[derive(Debug, Clone)]
pub struct MatchScore {
    /// Reported symptoms the disease shares, sorted
    pub matched_symptoms: Vec<String>,

    /// Size of the disease's normalized symptom set
    pub disease_symptom_count: usize,

    /// Percentage of the disease's symptoms that were reported (0-100)
    pub coverage: f64,

    /// Bonus from the disease's severity tier
    pub severity_offset: f64,

    /// `min(coverage + severity_offset, 100)`, unrounded
    pub final_score: f64,

    /// Tier derived from `final_score`
    pub recommendation: Recommendation,
}

impl MatchScore {
    /// Score a disease against a normalized symptom set.
    ///
    /// Returns `None` when the disease has no symptoms or shares none with
    /// the report; such diseases never appear in results.
    #[must_use]
    pub fn calculate(reported: &HashSet<String>, disease: &Disease) -> Option<Self> {
        if disease.symptom_set.is_empty() {
            return None;
        }

        let mut matched_symptoms: Vec<String> = reported
            .intersection(&disease.symptom_set)
            .cloned()
            .collect();
        if matched_symptoms.is_empty() {
            return None;
        }
        matched_symptoms.sort_unstable();

        let disease_symptom_count = disease.symptom_set.len();
        let coverage = count_to_f64(matched_symptoms.len()) / count_to_f64(disease_symptom_count)
            * 100.0;
        let severity_offset = disease.severity.offset();
        let final_score = (coverage + severity_offset).min(MAX_SCORE);

        Some(Self {
            matched_symptoms,
            disease_symptom_count,
            coverage,
            severity_offset,
            final_score,
            recommendation: Recommendation::from_score(final_score),
        })
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matched_symptoms.len()
    }

    /// The reported score, rounded to two decimal places
    #[must_use]
    pub fn rounded(&self) -> f64 {
        round_to_hundredths(self.final_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Severity;

    fn reported(symptoms: &[&str]) -> HashSet<String> {
        symptoms.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_coverage_is_fraction_of_disease_symptoms() {
        let disease = Disease::new("Common Cold", Severity::Low).with_symptoms([
            "cough",
            "runny nose",
            "sore throat",
            "headache",
        ]);

        // Extra unrelated symptoms do not dilute the score
        let score =
            MatchScore::calculate(&reported(&["cough", "fever", "rash", "nausea"]), &disease)
                .unwrap();
        assert_eq!(score.match_count(), 1);
        assert_eq!(score.disease_symptom_count, 4);
        assert!((score.coverage - 25.0).abs() < 1e-9);
        assert!((score.final_score - 25.0).abs() < 1e-9);
        assert_eq!(score.recommendation, Recommendation::HomeRemedies);
    }

    #[test]
    fn test_severity_offset_applied() {
        let disease = Disease::new("Influenza", Severity::Medium).with_symptoms([
            "fever",
            "body ache",
            "fatigue",
            "cough",
        ]);

        let score = MatchScore::calculate(&reported(&["fever"]), &disease).unwrap();
        assert!((score.severity_offset - 10.0).abs() < 1e-9);
        assert!((score.final_score - 35.0).abs() < 1e-9);
        assert_eq!(score.recommendation, Recommendation::AyurvedaHomeopathy);
    }

    #[test]
    fn test_score_clamped_to_max() {
        let disease = Disease::new("COVID-19", Severity::High).with_symptoms([
            "fever",
            "cough",
            "loss of taste",
            "shortness of breath",
        ]);

        let score = MatchScore::calculate(
            &reported(&["fever", "cough", "loss of taste", "shortness of breath"]),
            &disease,
        )
        .unwrap();
        assert!((score.coverage - 100.0).abs() < 1e-9);
        assert!((score.final_score - MAX_SCORE).abs() < 1e-9);
        assert_eq!(score.recommendation, Recommendation::AllopathyConsultation);
        assert_eq!(
            score.matched_symptoms,
            vec!["cough", "fever", "loss of taste", "shortness of breath"]
        );
    }

    #[test]
    fn test_no_overlap_is_none() {
        let disease = Disease::new("Migraine", Severity::Medium).with_symptoms(["headache"]);
        assert!(MatchScore::calculate(&reported(&["cough"]), &disease).is_none());
    }

    #[test]
    fn test_empty_disease_is_none() {
        let disease = Disease::new("Placeholder", Severity::Critical);
        assert!(MatchScore::calculate(&reported(&["cough"]), &disease).is_none());
    }

    #[test]
    fn test_rounding_to_two_places() {
        let disease =
            Disease::new("Triad", Severity::Low).with_symptoms(["a", "b", "c"]);
        let score = MatchScore::calculate(&reported(&["a"]), &disease).unwrap();
        assert!((score.rounded() - 33.33).abs() < 1e-9);
        assert_eq!(score.recommendation, Recommendation::AyurvedaHomeopathy);

        assert!((round_to_hundredths(66.666_666) - 66.67).abs() < 1e-9);
        assert!((round_to_hundredths(100.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        let symptoms: Vec<String> = (0..32).map(|i| format!("s{i}")).collect();
        let disease = Disease::new("Wide", Severity::Medium).with_symptoms(symptoms);

        // 1/32 coverage is 3.125, so the unrounded score is exactly 13.125
        let score = MatchScore::calculate(&reported(&["s0"]), &disease).unwrap();
        assert!((score.final_score - 13.125).abs() < f64::EPSILON);
        assert!((score.rounded() - 13.12).abs() < 1e-9);

        assert!((round_to_hundredths(0.125) - 0.12).abs() < 1e-9);
        assert!((round_to_hundredths(0.375) - 0.38).abs() < 1e-9);
    }
}

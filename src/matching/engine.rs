use serde::Serialize;

use crate::catalog::store::DiseaseCatalog;
use crate::core::disease::Disease;
use crate::core::query::SymptomQuery;
use crate::core::types::{Recommendation, RemedyType, Severity};
use crate::matching::scoring::MatchScore;

/// Result of matching a symptom report against one disease
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub disease_name: String,

    /// Final score in (0, 100], rounded to two decimal places
    pub match_score: f64,

    pub severity: Severity,

    pub recommendation: Recommendation,

    pub specialist: String,

    /// Reported symptoms shared with the disease, normalized and sorted
    pub matched_symptoms: Vec<String>,

    pub allopathic_medicines: Vec<String>,

    pub home_remedies: Vec<String>,

    pub ayurvedic_medicines: Vec<String>,
}

impl MatchResult {
    /// Build the result for a scored disease.
    ///
    /// Homeopathy medicines have no output list and are left out.
    pub fn new(disease: &Disease, score: MatchScore) -> Self {
        let mut allopathic_medicines = Vec::new();
        let mut home_remedies = Vec::new();
        let mut ayurvedic_medicines = Vec::new();

        for medicine in &disease.medicines {
            match medicine.remedy_type {
                RemedyType::Allopathy => allopathic_medicines.push(medicine.name.clone()),
                RemedyType::Home => home_remedies.push(medicine.name.clone()),
                RemedyType::Ayurveda => ayurvedic_medicines.push(medicine.name.clone()),
                RemedyType::Homeopathy => {}
            }
        }

        Self {
            disease_name: disease.name.clone(),
            match_score: score.rounded(),
            severity: disease.severity.clone(),
            recommendation: score.recommendation,
            specialist: disease.specialist.clone(),
            matched_symptoms: score.matched_symptoms,
            allopathic_medicines,
            home_remedies,
            ayurvedic_medicines,
        }
    }
}

/// Default number of results returned per query
pub const DEFAULT_RESULT_LIMIT: usize = 3;

/// Configuration for the matching engine
#[derive(Debug, Clone, Serialize)]
pub struct MatchingConfig {
    /// Maximum number of ranked results to return
    pub result_limit: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

/// The symptom matching engine.
///
/// Holds a borrowed, read-only catalog; safe to use from many threads at
/// once since matching mutates nothing.
pub struct SymptomMatcher<'a> {
    catalog: &'a DiseaseCatalog,
    config: MatchingConfig,
}

impl<'a> SymptomMatcher<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(catalog: &'a DiseaseCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(catalog: &'a DiseaseCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Rank diseases for raw symptom names.
    ///
    /// `age` and `weight` are accepted for interface compatibility and do not
    /// influence scoring.
    pub fn match_symptoms<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        age: Option<f64>,
        weight: Option<f64>,
    ) -> Vec<MatchResult> {
        let query = SymptomQuery::new(symptoms.iter().map(|s| s.as_ref().to_string()))
            .with_age(age)
            .with_weight(weight);
        self.find_matches(&query)
    }

    /// Find the best matching diseases for a query, highest score first
    pub fn find_matches(&self, query: &SymptomQuery) -> Vec<MatchResult> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<MatchResult> = self
            .catalog
            .diseases
            .iter()
            .filter_map(|disease| {
                MatchScore::calculate(&query.symptom_set, disease)
                    .map(|score| MatchResult::new(disease, score))
            })
            .collect();

        tracing::debug!(
            "{} of {} diseases share at least one of {} reported symptoms",
            results.len(),
            self.catalog.len(),
            query.symptom_set.len()
        );

        // Stable sort: ties keep catalog order
        results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        results.truncate(self.config.result_limit);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disease::Medicine;

    fn scenario_catalog() -> DiseaseCatalog {
        let mut catalog = DiseaseCatalog::new();
        catalog.add_disease(
            Disease::new("Common Cold", Severity::Low)
                .with_symptoms(["cough", "runny nose", "sore throat", "headache"])
                .with_specialist("General Physician")
                .with_medicine(Medicine::new("Ginger Tea", RemedyType::Home))
                .with_medicine(Medicine::new("Vitamin C", RemedyType::Allopathy)),
        );
        catalog.add_disease(
            Disease::new("Influenza", Severity::Medium)
                .with_symptoms(["fever", "body ache", "fatigue", "cough"])
                .with_specialist("General Physician")
                .with_medicine(Medicine::new("Paracetamol", RemedyType::Allopathy))
                .with_medicine(Medicine::new("Arsenicum Album", RemedyType::Homeopathy))
                .with_medicine(Medicine::new("Tulsi Kadha", RemedyType::Ayurveda)),
        );
        catalog
    }

    #[test]
    fn test_scenario_ranking() {
        let catalog = scenario_catalog();
        let engine = SymptomMatcher::new(&catalog);

        let matches = engine.match_symptoms(&["cough", "fever"], None, None);
        assert_eq!(matches.len(), 2);

        assert_eq!(matches[0].disease_name, "Influenza");
        assert!((matches[0].match_score - 35.0).abs() < 1e-9);
        assert_eq!(matches[0].recommendation, Recommendation::AyurvedaHomeopathy);

        assert_eq!(matches[1].disease_name, "Common Cold");
        assert!((matches[1].match_score - 25.0).abs() < 1e-9);
        assert_eq!(matches[1].recommendation, Recommendation::HomeRemedies);
    }

    #[test]
    fn test_medicines_partitioned_without_homeopathy() {
        let catalog = scenario_catalog();
        let engine = SymptomMatcher::new(&catalog);

        let flu = engine
            .match_symptoms(&["fever"], None, None)
            .into_iter()
            .find(|m| m.disease_name == "Influenza")
            .unwrap();
        assert_eq!(flu.allopathic_medicines, vec!["Paracetamol"]);
        assert_eq!(flu.ayurvedic_medicines, vec!["Tulsi Kadha"]);
        assert!(flu.home_remedies.is_empty());
        assert!(!flu
            .allopathic_medicines
            .iter()
            .chain(&flu.home_remedies)
            .chain(&flu.ayurvedic_medicines)
            .any(|m| m == "Arsenicum Album"));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let mut catalog = DiseaseCatalog::new();
        for name in ["Alpha", "Bravo", "Charlie"] {
            catalog.add_disease(
                Disease::new(name, Severity::Low).with_symptoms(["itch", "rash"]),
            );
        }
        let engine = SymptomMatcher::new(&catalog);

        let matches = engine.match_symptoms(&["itch"], None, None);
        let names: Vec<&str> = matches.iter().map(|m| m.disease_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let catalog = scenario_catalog();
        let engine = SymptomMatcher::new(&catalog);
        assert!(engine.match_symptoms::<&str>(&[], None, None).is_empty());
        assert!(engine.match_symptoms(&["  "], None, None).is_empty());
    }

    #[test]
    fn test_age_and_weight_do_not_change_scores() {
        let catalog = scenario_catalog();
        let engine = SymptomMatcher::new(&catalog);

        let plain = engine.match_symptoms(&["cough"], None, None);
        let with_patient = engine.match_symptoms(&["cough"], Some(82.0), Some(54.5));
        assert_eq!(plain.len(), with_patient.len());
        for (a, b) in plain.iter().zip(&with_patient) {
            assert_eq!(a.disease_name, b.disease_name);
            assert!((a.match_score - b.match_score).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_custom_result_limit() {
        let catalog = scenario_catalog();
        let engine = SymptomMatcher::with_config(&catalog, MatchingConfig { result_limit: 1 });

        let matches = engine.match_symptoms(&["cough"], None, None);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].disease_name, "Influenza");
    }

    #[test]
    fn test_embedded_catalog_top_match() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let engine = SymptomMatcher::new(&catalog);

        let query = SymptomQuery::new(["Loss of Taste", "Shortness of Breath"]);
        let matches = engine.find_matches(&query);
        let best = &matches[0];
        assert_eq!(best.disease_name, "COVID-19");
        assert_eq!(best.specialist, "Pulmonologist");
        assert_eq!(best.home_remedies, vec!["Steam Inhalation"]);
    }

    #[test]
    fn test_serialized_shape() {
        let catalog = scenario_catalog();
        let engine = SymptomMatcher::new(&catalog);
        let matches = engine.match_symptoms(&["cough"], None, None);

        let json = serde_json::to_value(&matches[0]).unwrap();
        assert_eq!(json["disease_name"], "Influenza");
        assert_eq!(json["severity"], "Medium");
        assert_eq!(json["recommendation"], "Ayurveda & Homeopathy");
        assert_eq!(json["specialist"], "General Physician");
        assert!(json["allopathic_medicines"].is_array());
        assert!(json["home_remedies"].is_array());
        assert!(json["ayurvedic_medicines"].is_array());
    }
}

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

use crate::core::disease::Disease;
use crate::core::doctor::Doctor;
use crate::core::symptom::{normalize_symptom, Symptom};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    pub diseases: Vec<Disease>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

/// The disease catalog with lookup indexes.
///
/// Loaded once and read-only afterwards, so a single instance can be shared
/// between request handlers.
#[derive(Debug)]
pub struct DiseaseCatalog {
    /// All diseases, in catalog order
    pub diseases: Vec<Disease>,

    /// Registered symptom vocabulary
    pub symptoms: Vec<Symptom>,

    /// Consultation directory
    pub doctors: Vec<Doctor>,

    /// Index: lower-cased disease name -> index in diseases vec
    name_to_index: HashMap<String, usize>,
}

impl DiseaseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            diseases: Vec::new(),
            symptoms: Vec::new(),
            doctors: Vec::new(),
            name_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/diseases.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from `path` if given, otherwise the embedded catalog
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                tracing::debug!("Loading catalog from {}", path.display());
                Self::load_from_file(path)
            }
            None => Self::load_embedded(),
        }
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let mut catalog = Self::new();
        catalog.symptoms = data.symptoms;
        catalog.doctors = data.doctors;
        for disease in data.diseases {
            catalog.add_disease(disease);
        }

        let unmatchable = catalog.diseases.iter().filter(|d| !d.is_matchable()).count();
        if unmatchable > 0 {
            tracing::warn!("{unmatchable} disease(s) have no symptoms and will never match");
        }

        Ok(catalog)
    }

    /// Add a disease to the catalog, rebuilding its symptom index.
    ///
    /// If the name is already present, lookups by name keep returning the
    /// earlier entry; both still take part in matching.
    pub fn add_disease(&mut self, mut disease: Disease) {
        let index = self.diseases.len();

        disease.rebuild_indexes();
        self.name_to_index
            .entry(disease.name.trim().to_lowercase())
            .or_insert(index);

        self.diseases.push(disease);
    }

    /// Remove a disease (and the medicines it owns) by name
    pub fn remove_disease(&mut self, name: &str) -> Option<Disease> {
        let index = *self.name_to_index.get(&name.trim().to_lowercase())?;
        let removed = self.diseases.remove(index);

        self.name_to_index.clear();
        for (i, disease) in self.diseases.iter().enumerate() {
            self.name_to_index
                .entry(disease.name.trim().to_lowercase())
                .or_insert(i);
        }

        Some(removed)
    }

    /// Get a disease by case-insensitive name
    pub fn get(&self, name: &str) -> Option<&Disease> {
        self.name_to_index
            .get(&name.trim().to_lowercase())
            .map(|&idx| &self.diseases[idx])
    }

    /// All known symptom names: the registered vocabulary plus every symptom
    /// referenced by a disease, deduplicated by normalized name and sorted.
    ///
    /// The first spelling seen wins, registered symptoms before disease ones.
    pub fn symptom_vocabulary(&self) -> Vec<String> {
        let mut vocabulary: BTreeMap<String, String> = BTreeMap::new();

        let registered = self.symptoms.iter().map(|s| s.name.as_str());
        let referenced = self
            .diseases
            .iter()
            .flat_map(|d| d.symptoms.iter().map(String::as_str));

        for name in registered.chain(referenced) {
            if let Some(key) = normalize_symptom(name) {
                vocabulary
                    .entry(key)
                    .or_insert_with(|| name.trim().to_string());
            }
        }

        vocabulary.into_values().collect()
    }

    /// Look up a doctor by case-insensitive name
    pub fn doctor(&self, name: &str) -> Option<&Doctor> {
        let name = name.trim();
        self.doctors
            .iter()
            .find(|d| d.name.trim().eq_ignore_ascii_case(name))
    }

    /// Doctors whose specialization matches, case-insensitively
    pub fn doctors_for(&self, specialist: &str) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|d| d.specializes_in(specialist))
            .collect()
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            symptoms: self.symptoms.clone(),
            diseases: self.diseases.clone(),
            doctors: self.doctors.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of diseases in catalog
    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    /// Check if catalog has no diseases
    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}

impl Default for DiseaseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disease::Medicine;
    use crate::core::types::{RemedyType, Severity};

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.diseases.iter().all(Disease::is_matchable));
    }

    #[test]
    fn test_catalog_get_by_name() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();

        let covid = catalog.get("covid-19").unwrap();
        assert_eq!(covid.name, "COVID-19");
        assert_eq!(covid.severity, Severity::High);
        assert_eq!(covid.specialist, "Pulmonologist");
        assert!(covid.symptom_set.contains("loss of taste"));
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        assert!(catalog.get("Dragon Pox").is_none());
    }

    #[test]
    fn test_catalog_to_json_round_trip() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"diseases\""));
        assert!(json.contains("Influenza (Flu)"));

        let reloaded = DiseaseCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), catalog.len());
        assert_eq!(reloaded.doctors.len(), catalog.doctors.len());
        assert_eq!(
            reloaded.get("Common Cold").unwrap().symptom_set,
            catalog.get("Common Cold").unwrap().symptom_set
        );
    }

    #[test]
    fn test_unknown_severity_loads() {
        let json = r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00Z",
            "diseases": [
                {"name": "Odd", "symptoms": ["itch"], "severity": "Extreme"}
            ]
        }"#;
        let catalog = DiseaseCatalog::from_json(json).unwrap();
        let odd = catalog.get("odd").unwrap();
        assert_eq!(odd.severity, Severity::Other("Extreme".to_string()));
        assert!(catalog.symptoms.is_empty());
        assert!(catalog.doctors.is_empty());
    }

    #[test]
    fn test_malformed_catalog_is_parse_error() {
        let result = DiseaseCatalog::from_json("{\"diseases\": 12}");
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = DiseaseCatalog::load_from_file(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CatalogError::ReadError(_))));
    }

    #[test]
    fn test_add_and_remove_disease() {
        let mut catalog = DiseaseCatalog::new();
        assert!(catalog.is_empty());

        catalog.add_disease(
            Disease::new("Migraine", Severity::Medium)
                .with_symptoms(["headache", "nausea"])
                .with_medicine(Medicine::new("Ibuprofen", RemedyType::Allopathy)),
        );
        catalog.add_disease(Disease::new("Gastritis", Severity::Low).with_symptoms(["nausea"]));
        assert_eq!(catalog.len(), 2);

        let removed = catalog.remove_disease("MIGRAINE").unwrap();
        assert_eq!(removed.medicines.len(), 1);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("migraine").is_none());
        assert_eq!(catalog.get("gastritis").unwrap().name, "Gastritis");
        assert!(catalog.remove_disease("migraine").is_none());
    }

    #[test]
    fn test_symptom_vocabulary_dedups_and_sorts() {
        let mut catalog = DiseaseCatalog::new();
        catalog.symptoms.push(Symptom::new("Fever"));
        catalog.add_disease(
            Disease::new("Flu", Severity::Medium).with_symptoms(["fever", "Body Ache"]),
        );

        assert_eq!(catalog.symptom_vocabulary(), vec!["Body Ache", "Fever"]);
    }

    #[test]
    fn test_doctors_for_specialist() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let doctors = catalog.doctors_for("pulmonologist");
        assert_eq!(doctors.len(), 1);
        assert!(catalog.doctors_for("Dermatologist").is_empty());
    }

    #[test]
    fn test_doctor_by_name() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let doctor = catalog.doctor("  dr. asha menon ").unwrap();
        assert_eq!(doctor.name, "Dr. Asha Menon");
        assert_eq!(doctor.specialization, "General Physician");
        assert!(catalog.doctor("Dr. Nobody").is_none());
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::symptom::normalize_symptom;
use crate::core::types::{RemedyType, Severity};

/// A medicine attached to exactly one disease.
///
/// Medicines are stored nested in their owning [`Disease`], so removing the
/// disease from a catalog removes its medicines with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,

    pub remedy_type: RemedyType,

    /// e.g. "500mg twice a day"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub prescription_required: bool,
}

impl Medicine {
    pub fn new(name: impl Into<String>, remedy_type: RemedyType) -> Self {
        Self {
            name: name.into(),
            remedy_type,
            dosage: None,
            description: None,
            side_effects: None,
            prescription_required: false,
        }
    }
}

/// A disease definition in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disease {
    /// Display name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Defining symptom names, as written in the catalog
    #[serde(default)]
    pub symptoms: Vec<String>,

    pub severity: Severity,

    /// Recommended specialist, e.g. "Cardiologist"; may be empty
    #[serde(default)]
    pub specialist: String,

    #[serde(default)]
    pub medicines: Vec<Medicine>,

    // === Pre-computed for fast matching (populated on load) ===
    /// Normalized symptom names
    #[serde(skip)]
    pub symptom_set: HashSet<String>,
}

impl Disease {
    pub fn new(name: impl Into<String>, severity: Severity) -> Self {
        Self {
            name: name.into(),
            description: None,
            symptoms: Vec::new(),
            severity,
            specialist: String::new(),
            medicines: Vec::new(),
            symptom_set: HashSet::new(),
        }
    }

    #[must_use]
    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self.rebuild_indexes();
        self
    }

    #[must_use]
    pub fn with_specialist(mut self, specialist: impl Into<String>) -> Self {
        self.specialist = specialist.into();
        self
    }

    #[must_use]
    pub fn with_medicine(mut self, medicine: Medicine) -> Self {
        self.medicines.push(medicine);
        self
    }

    /// Rebuild the normalized symptom set after modifying `symptoms`
    pub fn rebuild_indexes(&mut self) {
        self.symptom_set = self
            .symptoms
            .iter()
            .filter_map(|s| normalize_symptom(s))
            .collect();
    }

    /// A disease without symptoms can never be matched.
    #[must_use]
    pub fn is_matchable(&self) -> bool {
        !self.symptom_set.is_empty()
    }

    /// Names of medicines of the given remedy type, in catalog order
    #[must_use]
    pub fn medicine_names(&self, remedy_type: RemedyType) -> Vec<String> {
        self.medicines
            .iter()
            .filter(|m| m.remedy_type == remedy_type)
            .map(|m| m.name.clone())
            .collect()
    }
}

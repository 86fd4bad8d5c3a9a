use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::symptom::normalize_symptom;

/// A patient's symptom report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomQuery {
    /// Reported symptom names, as entered
    pub symptoms: Vec<String>,

    /// Patient age in years. Accepted but not used for scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,

    /// Patient weight in kg. Accepted but not used for scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    // === Pre-computed for matching ===
    /// Normalized, deduplicated symptom names
    #[serde(skip)]
    pub symptom_set: HashSet<String>,
}

impl SymptomQuery {
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symptoms: Vec<String> = symptoms.into_iter().map(Into::into).collect();
        let symptom_set = symptoms.iter().filter_map(|s| normalize_symptom(s)).collect();

        Self {
            symptoms,
            age: None,
            weight: None,
            symptom_set,
        }
    }

    #[must_use]
    pub fn with_age(mut self, age: Option<f64>) -> Self {
        self.age = age;
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: Option<f64>) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symptom_set.is_empty()
    }
}

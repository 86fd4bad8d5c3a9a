use serde::{Deserialize, Serialize};

/// Normalize a symptom name for matching: trimmed and lower-cased.
///
/// Returns `None` for names that are blank after trimming.
///
/// # Examples
///
/// ```
/// use symptom_matcher::core::symptom::normalize_symptom;
///
/// assert_eq!(normalize_symptom("  Sore Throat "), Some("sore throat".to_string()));
/// assert_eq!(normalize_symptom("   "), None);
/// ```
#[must_use]
pub fn normalize_symptom(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// A known symptom in the catalog vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    /// Display name; identity is the normalized form
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Symptom {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn normalized_name(&self) -> Option<String> {
        normalize_symptom(&self.name)
    }
}

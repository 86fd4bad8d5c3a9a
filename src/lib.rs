//! # symptom-matcher
//!
//! A library for ranking likely diseases from a patient's reported symptoms.
//!
//! Given free-form symptom names, `symptom-matcher` compares them against a
//! catalog of known diseases and returns the best candidates, each with a
//! match score, the disease's severity, a treatment tier recommendation,
//! the recommended specialist, and the catalogued medicines grouped by
//! remedy type.
//!
//! Results are advisory. They are not a diagnosis.
//!
//! ## Features
//!
//! - **Coverage scoring**: How much of a disease's symptom profile was reported
//! - **Severity weighting**: Serious diseases rank higher for the same coverage
//! - **Treatment tiers**: Home remedies, Ayurveda & Homeopathy, or Allopathy + doctor
//! - **Case-insensitive matching**: "Fever" and "fever" are the same symptom
//! - **Custom catalogs**: Load your own diseases, medicines, and doctors from JSON
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_matcher::{DiseaseCatalog, SymptomMatcher, SymptomQuery};
//!
//! // Load the embedded catalog
//! let catalog = DiseaseCatalog::load_embedded().unwrap();
//!
//! // Describe the patient
//! let query = SymptomQuery::new(["Fever", "cough"]).with_age(Some(34.0));
//!
//! // Rank candidate diseases
//! let engine = SymptomMatcher::new(&catalog);
//! for m in engine.find_matches(&query) {
//!     println!("{}: {:.2} -> {}", m.disease_name, m.match_score, m.recommendation);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`booking`]: In-memory consultation booking
//! - [`catalog`]: Disease catalog storage and lookup
//! - [`core`]: Core data types for diseases, medicines, symptoms, and queries
//! - [`matching`]: Matching engine and scoring
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON HTTP API

pub mod booking;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::catalog::store::DiseaseCatalog;
pub use crate::core::disease::{Disease, Medicine};
pub use crate::core::query::SymptomQuery;
pub use crate::core::types::*;
pub use crate::matching::engine::{MatchResult, MatchingConfig, SymptomMatcher};

//! Symptom matching engine and scoring.
//!
//! - [`SymptomMatcher`]: Main entry point for ranking diseases
//! - [`MatchScore`]: Score breakdown for one disease
//! - [`MatchResult`]: A ranked result with recommendation and medicines
//!
//! ## Scoring
//!
//! For each disease that shares at least one reported symptom:
//!
//! 1. **Coverage**: shared symptoms / the disease's symptoms, as a percentage.
//!    This is the fraction of the *disease's* defining symptoms the patient
//!    reports, so unrelated extra symptoms never lower a score.
//! 2. **Severity offset**: Low +0, Medium +10, High +20, Critical +30.
//! 3. **Clamp** to 100 and round to two decimals.
//!
//! The final score picks a recommendation tier: up to 30 is
//! "Home Remedies", up to 60 is "Ayurveda & Homeopathy", anything higher is
//! "Allopathy + Doctor Consultation".
//!
//! Results are stable-sorted by score, so ties keep catalog order, and cut
//! to the top three by default.
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_matcher::{DiseaseCatalog, SymptomMatcher};
//!
//! let catalog = DiseaseCatalog::load_embedded().unwrap();
//! let engine = SymptomMatcher::new(&catalog);
//!
//! for m in engine.match_symptoms(&["fever", "cough"], None, None) {
//!     println!("{}: {:.2} ({})", m.disease_name, m.match_score, m.recommendation);
//! }
//! ```
//!
//! [`SymptomMatcher`]: engine::SymptomMatcher
//! [`MatchScore`]: scoring::MatchScore
//! [`MatchResult`]: engine::MatchResult

pub mod engine;
pub mod scoring;

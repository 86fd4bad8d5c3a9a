//! Core data types for symptom matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Disease`]: A catalog entry with symptoms, severity, specialist, and medicines
//! - [`Medicine`]: A remedy owned by one disease, tagged with a [`RemedyType`]
//! - [`Symptom`]: An entry in the symptom vocabulary
//! - [`Doctor`]: An entry in the consultation directory
//! - [`Appointment`]: A booked consultation with a directory doctor
//! - [`SymptomQuery`]: A patient's reported symptoms plus optional age/weight
//! - [`Severity`], [`Recommendation`]: Scoring and result classification types
//!
//! ## Symptom Names
//!
//! Symptoms are identified by name only. Matching is case-insensitive and
//! ignores surrounding whitespace: "Sore Throat", "sore throat" and
//! " SORE THROAT " are the same symptom.
//!
//! [`Disease`]: disease::Disease
//! [`Medicine`]: disease::Medicine
//! [`Symptom`]: symptom::Symptom
//! [`Doctor`]: doctor::Doctor
//! [`Appointment`]: appointment::Appointment
//! [`SymptomQuery`]: query::SymptomQuery
//! [`Severity`]: types::Severity
//! [`Recommendation`]: types::Recommendation
//! [`RemedyType`]: types::RemedyType

pub mod appointment;
pub mod disease;
pub mod doctor;
pub mod query;
pub mod symptom;
pub mod types;

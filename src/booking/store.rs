use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

use crate::catalog::store::DiseaseCatalog;
use crate::core::appointment::{Appointment, AppointmentStatus};

/// Maximum length of a patient name
pub const MAX_PATIENT_NAME_LENGTH: usize = 100;

/// Maximum length of the free-text symptom summary
pub const MAX_SUMMARY_LENGTH: usize = 1000;

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    #[error("Patient name is required")]
    MissingPatient,

    #[error("Patient name is invalid: at most {MAX_PATIENT_NAME_LENGTH} printable characters")]
    InvalidPatient,

    #[error("Doctor '{0}' is not in the directory")]
    UnknownDoctor(String),

    #[error("Appointment time must be an RFC 3339 timestamp in the future")]
    InvalidDateTime,

    #[error("Symptom summary too long: exceeds {MAX_SUMMARY_LENGTH} characters")]
    SummaryTooLong,
}

impl BookingError {
    /// Machine-readable error code for API responses
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::MissingPatient => "missing_patient",
            Self::InvalidPatient => "invalid_patient",
            Self::UnknownDoctor(_) => "unknown_doctor",
            Self::InvalidDateTime => "invalid_date_time",
            Self::SummaryTooLong => "summary_too_long",
        }
    }
}

/// A request to book a consultation
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub patient_name: String,
    pub doctor: String,
    pub date_time: DateTime<Utc>,
    pub symptoms_summary: String,
}

/// In-memory appointment store keyed by id.
///
/// Ids are assigned from 1 upwards and never reused.
#[derive(Debug)]
pub struct AppointmentBook {
    next_id: AtomicU64,
    appointments: RwLock<BTreeMap<u64, Appointment>>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            appointments: RwLock::new(BTreeMap::new()),
        }
    }

    /// Book a consultation with a doctor from the catalog's directory.
    ///
    /// New appointments start out `Pending` with no meeting link.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError`] if the patient name is blank or invalid,
    /// the doctor is unknown, `date_time` is before `now`, or the summary
    /// is too long.
    pub fn book(
        &self,
        catalog: &DiseaseCatalog,
        request: BookingRequest,
        now: DateTime<Utc>,
    ) -> Result<Appointment, BookingError> {
        let patient_name = request.patient_name.trim();
        if patient_name.is_empty() {
            return Err(BookingError::MissingPatient);
        }
        if patient_name.chars().count() > MAX_PATIENT_NAME_LENGTH
            || patient_name.chars().any(char::is_control)
        {
            return Err(BookingError::InvalidPatient);
        }

        let doctor = catalog
            .doctor(&request.doctor)
            .ok_or_else(|| BookingError::UnknownDoctor(request.doctor.trim().to_string()))?;

        if request.date_time < now {
            return Err(BookingError::InvalidDateTime);
        }

        let symptoms_summary = request.symptoms_summary.trim();
        if symptoms_summary.chars().count() > MAX_SUMMARY_LENGTH {
            return Err(BookingError::SummaryTooLong);
        }

        let appointment = Appointment {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            patient_name: patient_name.to_string(),
            doctor: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            date_time: request.date_time,
            status: AppointmentStatus::Pending,
            meet_link: None,
            symptoms_summary: symptoms_summary.to_string(),
            created_at: now,
        };

        tracing::info!(
            "Booked appointment {} with {} at {}",
            appointment.id,
            appointment.doctor,
            appointment.date_time.to_rfc3339()
        );

        self.appointments
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(appointment.id, appointment.clone());

        Ok(appointment)
    }

    pub fn get(&self, id: u64) -> Option<Appointment> {
        self.appointments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.appointments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AppointmentBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn request(doctor: &str, offset: Duration) -> (BookingRequest, DateTime<Utc>) {
        let now = Utc::now();
        let request = BookingRequest {
            patient_name: " Priya ".to_string(),
            doctor: doctor.to_string(),
            date_time: now + offset,
            symptoms_summary: "fever, cough".to_string(),
        };
        (request, now)
    }

    #[test]
    fn test_book_pending_appointment() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let book = AppointmentBook::new();

        let (req, now) = request("dr. rohan iyer", Duration::days(2));
        let appointment = book.book(&catalog, req, now).unwrap();

        assert_eq!(appointment.id, 1);
        assert_eq!(appointment.patient_name, "Priya");
        assert_eq!(appointment.doctor, "Dr. Rohan Iyer");
        assert_eq!(appointment.specialization, "Pulmonologist");
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert!(appointment.meet_link.is_none());
        assert_eq!(book.get(1), Some(appointment));
    }

    #[test]
    fn test_ids_increase() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let book = AppointmentBook::new();

        for expected in 1..=3 {
            let (req, now) = request("Dr. Asha Menon", Duration::hours(1));
            assert_eq!(book.book(&catalog, req, now).unwrap().id, expected);
        }
        assert_eq!(book.len(), 3);
        assert!(book.get(4).is_none());
    }

    #[test]
    fn test_unknown_doctor_rejected() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let book = AppointmentBook::new();

        let (req, now) = request("Dr. Nobody", Duration::days(1));
        assert_eq!(
            book.book(&catalog, req, now),
            Err(BookingError::UnknownDoctor("Dr. Nobody".to_string()))
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_past_time_rejected() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let book = AppointmentBook::new();

        let (req, now) = request("Dr. Asha Menon", Duration::minutes(-5));
        assert_eq!(
            book.book(&catalog, req, now),
            Err(BookingError::InvalidDateTime)
        );
    }

    #[test]
    fn test_patient_and_summary_limits() {
        let catalog = DiseaseCatalog::load_embedded().unwrap();
        let book = AppointmentBook::new();

        let (mut req, now) = request("Dr. Asha Menon", Duration::days(1));
        req.patient_name = "   ".to_string();
        assert_eq!(
            book.book(&catalog, req, now),
            Err(BookingError::MissingPatient)
        );

        let (mut req, now) = request("Dr. Asha Menon", Duration::days(1));
        req.patient_name = "a".repeat(MAX_PATIENT_NAME_LENGTH + 1);
        assert_eq!(
            book.book(&catalog, req, now).unwrap_err().error_type(),
            "invalid_patient"
        );

        let (mut req, now) = request("Dr. Asha Menon", Duration::days(1));
        req.symptoms_summary = "x".repeat(MAX_SUMMARY_LENGTH + 1);
        assert_eq!(
            book.book(&catalog, req, now),
            Err(BookingError::SummaryTooLong)
        );
    }
}

//! Consultation booking.
//!
//! Appointments pair a patient with a doctor from the catalog's directory.
//! They live in an in-memory [`AppointmentBook`] for the lifetime of the
//! server and start out `Pending`.
//!
//! [`AppointmentBook`]: store::AppointmentBook

pub mod store;

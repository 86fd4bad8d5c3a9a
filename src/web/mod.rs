//! JSON HTTP API for symptom checks.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8000
//! symptom-matcher serve
//!
//! # Custom port and catalog
//! symptom-matcher serve --port 3000 --catalog my_diseases.json
//!
//! # Bind to all interfaces
//! symptom-matcher serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /api/health` - Liveness and catalog size
//! - `POST /api/symptom-check` - Rank diseases for `{"symptoms": [...], "age": .., "weight": ..}`
//! - `GET /api/catalog` - List all diseases in the catalog
//! - `GET /api/symptoms` - List every known symptom name
//! - `GET /api/doctors?specialist=...` - List doctors, optionally by specialization
//! - `POST /api/appointments` - Book a consultation: `{"patient_name", "doctor", "date_time", "symptoms_summary"}`
//! - `GET /api/appointments/{id}` - Fetch a booked appointment

pub mod server;

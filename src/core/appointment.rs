use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a consultation booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booked consultation with a doctor from the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,

    pub patient_name: String,

    /// Directory name of the doctor, as stored in the catalog
    pub doctor: String,

    pub specialization: String,

    /// Requested consultation time
    pub date_time: DateTime<Utc>,

    pub status: AppointmentStatus,

    /// Video call link, set once a doctor confirms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meet_link: Option<String>,

    #[serde(default)]
    pub symptoms_summary: String,

    pub created_at: DateTime<Utc>,
}

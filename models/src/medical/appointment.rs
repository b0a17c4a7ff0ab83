// models/src/medical/appointment.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// The only status label that gets the "done" styling. Everything else is
/// rendered as pending.
pub const COMPLETED_STATUS: &str = "Completed";

pub fn is_terminal_status(status: &str) -> bool {
    status == COMPLETED_STATUS
}

/// Appointment as listed on the patient dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAppointment {
    pub appointment_id: i64,
    pub appointment_time: String,
    pub doctor_first_name: String,
    pub doctor_last_name: String,
    pub specialization: String,
    pub status: String,
    #[serde(default)]
    pub visit_notes: Option<String>,
}

/// Appointment as listed on the doctor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorAppointment {
    pub appointment_id: i64,
    pub appointment_time: String,
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub status: String,
    #[serde(default)]
    pub visit_notes: Option<String>,
}

impl DoctorAppointment {
    pub fn patient_name(&self) -> String {
        format!("{} {}", self.patient_first_name, self.patient_last_name)
    }
}

/// Body of `POST /api/appointments/book`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAppointment {
    pub patient_id: i64,
    pub doctor_id: i64,
    /// `YYYY-MM-DD HH:MM:00`
    pub appointment_time: String,
}

/// Body of `PUT /api/appointments/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitUpdate {
    pub visit_notes: String,
    pub status: String,
}

/// Generic success body. Some endpoints answer `{}`, others add a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Converts the value of a `datetime-local` input (`2024-05-01T09:30`) into
/// the API's `2024-05-01 09:30:00` form. Seconds, when present, are kept.
pub fn to_api_appointment_time(local: &str) -> ValidationResult<String> {
    let trimmed = local.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("Appointment time"));
    }
    let parsed = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidAppointmentTime(trimmed.to_string()))?;
    Ok(parsed.format("%Y-%m-%d %H:%M:%S").to_string())
}

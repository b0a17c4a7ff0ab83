// models/src/medical/patient.rs

use serde::{Deserialize, Serialize};

/// Body of `POST /api/register/patient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Success body of `POST /api/login/patient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientLogin {
    pub message: String,
    pub patient_id: i64,
    pub first_name: String,
}

// models/src/medical/doctor.rs

use serde::{Deserialize, Serialize};

/// Entry of `GET /api/doctors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub doctor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
}

/// Success body of `POST /api/login/doctor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorLogin {
    pub doctor_id: i64,
    pub first_name: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
}

/// Body of `POST /api/register/doctor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRegistration {
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub email: String,
    pub password: String,
}

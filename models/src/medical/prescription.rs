// models/src/medical/prescription.rs

use serde::{Deserialize, Serialize};

/// The API encodes the ordered flag as `"Yes"` / `"No"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderFlag {
    Yes,
    No,
}

/// Entry of `GET /api/patients/{id}/prescriptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub prescription_id: i64,
    pub medication_name: String,
    pub dosage: String,
    #[serde(default)]
    pub instructions: Option<String>,
    pub is_ordered: OrderFlag,
    #[serde(default)]
    pub appointment_time: Option<String>,
    pub doctor_first_name: String,
    pub doctor_last_name: String,
}

impl Prescription {
    /// Only prescriptions that have not been ordered yet can go into a
    /// pharmacy order.
    pub fn is_orderable(&self) -> bool {
        self.is_ordered == OrderFlag::No
    }
}

/// Body of `POST /api/prescriptions/issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePrescription {
    pub appointment_id: i64,
    pub medication_name: String,
    pub dosage: String,
    pub instructions: String,
}

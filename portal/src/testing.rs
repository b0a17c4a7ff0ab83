// portal/src/testing.rs

// Record builders shared by the controller tests.

use std::sync::Arc;

use models::{Doctor, DoctorAppointment, Order, OrderFlag, PatientAppointment, Prescription};

use crate::api::{ClinicApi, MockClinicApi};
use crate::storage::MemoryStorage;

pub fn api(mock: MockClinicApi) -> Arc<dyn ClinicApi> {
    Arc::new(mock)
}

pub fn storage(entries: &[(&str, &str)]) -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::with_entries(entries.iter().copied()))
}

pub fn prescription(id: i64, flag: OrderFlag) -> Prescription {
    Prescription {
        prescription_id: id,
        medication_name: format!("Med {}", id),
        dosage: "10mg".into(),
        instructions: Some("twice daily".into()),
        is_ordered: flag,
        appointment_time: Some("Wed, 01 May 2024 09:30:00 GMT".into()),
        doctor_first_name: "Gregory".into(),
        doctor_last_name: "House".into(),
    }
}

pub fn patient_appointment(id: i64, status: &str) -> PatientAppointment {
    PatientAppointment {
        appointment_id: id,
        appointment_time: "Wed, 01 May 2024 09:30:00 GMT".into(),
        doctor_first_name: "Gregory".into(),
        doctor_last_name: "House".into(),
        specialization: "Diagnostics".into(),
        status: status.into(),
        visit_notes: None,
    }
}

pub fn doctor_appointment(id: i64, status: &str, notes: Option<&str>) -> DoctorAppointment {
    DoctorAppointment {
        appointment_id: id,
        appointment_time: "2024-05-01 09:30:00".into(),
        patient_first_name: "Ada".into(),
        patient_last_name: "Byron".into(),
        status: status.into(),
        visit_notes: notes.map(str::to_string),
    }
}

pub fn order(id: i64) -> Order {
    Order {
        order_id: id,
        order_date: "2024-05-02 10:00:00".into(),
        status: "Pending".into(),
        items: vec!["Med 5 (10mg)".into()],
    }
}

pub fn doctor(id: i64, specialization: &str) -> Doctor {
    Doctor {
        doctor_id: id,
        first_name: "Gregory".into(),
        last_name: "House".into(),
        specialization: specialization.into(),
    }
}

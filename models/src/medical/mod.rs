// models/src/medical/mod.rs

pub mod appointment;
pub mod doctor;
pub mod login;
pub mod patient;
pub mod pharmacy;
pub mod prescription;

pub use appointment::{
    is_terminal_status, to_api_appointment_time, ApiMessage, BookAppointment,
    DoctorAppointment, PatientAppointment, VisitUpdate, COMPLETED_STATUS,
};
pub use doctor::{Doctor, DoctorLogin, DoctorRegistration};
pub use login::{Credentials, ErrorBody};
pub use patient::{PatientLogin, PatientRegistration};
pub use pharmacy::{Order, OrderPlaced, PharmacyOrderRequest};
pub use prescription::{IssuePrescription, OrderFlag, Prescription};

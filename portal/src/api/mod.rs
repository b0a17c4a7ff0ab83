// portal/src/api/mod.rs

// The remote clinic API as the portal sees it. Controllers only talk to
// this trait; `HttpClinicApi` is the reqwest-backed implementation.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use models::{
    ApiMessage, BookAppointment, Credentials, Doctor, DoctorAppointment, DoctorLogin,
    DoctorRegistration, IssuePrescription, Order, OrderPlaced, PatientAppointment, PatientLogin,
    PatientRegistration, PharmacyOrderRequest, Prescription, VisitUpdate,
};

use crate::errors::ApiResult;

pub mod http;

pub use http::HttpClinicApi;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClinicApi: Send + Sync {
    /// `GET /api/doctors`, filtered by specialization when one is given.
    async fn list_doctors(&self, specialization: Option<String>) -> ApiResult<Vec<Doctor>>;
    async fn book_appointment(&self, request: &BookAppointment) -> ApiResult<ApiMessage>;

    async fn login_patient(&self, credentials: &Credentials) -> ApiResult<PatientLogin>;
    async fn register_patient(&self, registration: &PatientRegistration) -> ApiResult<ApiMessage>;
    async fn login_doctor(&self, credentials: &Credentials) -> ApiResult<DoctorLogin>;
    async fn register_doctor(&self, registration: &DoctorRegistration) -> ApiResult<ApiMessage>;

    async fn patient_appointments(&self, patient_id: i64) -> ApiResult<Vec<PatientAppointment>>;
    async fn patient_prescriptions(&self, patient_id: i64) -> ApiResult<Vec<Prescription>>;
    async fn patient_orders(&self, patient_id: i64) -> ApiResult<Vec<Order>>;
    async fn place_order(&self, request: &PharmacyOrderRequest) -> ApiResult<OrderPlaced>;

    async fn doctor_appointments(&self, doctor_id: i64) -> ApiResult<Vec<DoctorAppointment>>;
    async fn update_visit(&self, appointment_id: i64, update: &VisitUpdate) -> ApiResult<ApiMessage>;
    async fn issue_prescription(&self, request: &IssuePrescription) -> ApiResult<ApiMessage>;
}

// portal/src/api/http.rs

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use models::{
    ApiMessage, BookAppointment, Credentials, Doctor, DoctorAppointment, DoctorLogin,
    DoctorRegistration, ErrorBody, IssuePrescription, Order, OrderPlaced, PatientAppointment,
    PatientLogin, PatientRegistration, PharmacyOrderRequest, Prescription, VisitUpdate,
};

use super::ClinicApi;
use crate::errors::{ApiError, ApiResult};

/// reqwest-backed client for the clinic API. No timeouts and no retries:
/// a request either completes or fails once.
#[derive(Debug, Clone)]
pub struct HttpClinicApi {
    client: Client,
    base_url: String,
}

impl HttpClinicApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpClinicApi { client: Client::new(), base_url }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        send(self.request(Method::GET, path)).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        send(self.request(method, path).json(body)).await
    }
}

/// Sends the request and maps the answer onto `ApiError`: 2xx decodes
/// into `T`, non-2xx becomes `Application` when it
/// carries an `error` body and `Status` otherwise, anything else is a
/// transport or decode failure.
async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
    let response = builder.send().await.map_err(|e| {
        warn!("Request failed before a response arrived: {}", e);
        ApiError::Transport(e.to_string())
    })?;
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&body)?);
    }

    match serde_json::from_slice::<ErrorBody>(&body) {
        Ok(ErrorBody { error }) => {
            debug!("API answered {} with error: {}", status, error);
            Err(ApiError::Application { status: status.as_u16(), message: error })
        }
        Err(e) => {
            warn!("API answered {} without a readable error body: {}", status, e);
            Err(ApiError::Status { status: status.as_u16() })
        }
    }
}

#[async_trait]
impl ClinicApi for HttpClinicApi {
    async fn list_doctors(&self, specialization: Option<String>) -> ApiResult<Vec<Doctor>> {
        let mut builder = self.request(Method::GET, "/api/doctors");
        if let Some(specialization) = specialization.filter(|s| !s.is_empty()) {
            builder = builder.query(&[("specialization", specialization)]);
        }
        send(builder).await
    }

    async fn book_appointment(&self, request: &BookAppointment) -> ApiResult<ApiMessage> {
        self.send_json(Method::POST, "/api/appointments/book", request).await
    }

    async fn login_patient(&self, credentials: &Credentials) -> ApiResult<PatientLogin> {
        self.send_json(Method::POST, "/api/login/patient", credentials).await
    }

    async fn register_patient(&self, registration: &PatientRegistration) -> ApiResult<ApiMessage> {
        self.send_json(Method::POST, "/api/register/patient", registration).await
    }

    async fn login_doctor(&self, credentials: &Credentials) -> ApiResult<DoctorLogin> {
        self.send_json(Method::POST, "/api/login/doctor", credentials).await
    }

    async fn register_doctor(&self, registration: &DoctorRegistration) -> ApiResult<ApiMessage> {
        self.send_json(Method::POST, "/api/register/doctor", registration).await
    }

    async fn patient_appointments(&self, patient_id: i64) -> ApiResult<Vec<PatientAppointment>> {
        self.get_json(&format!("/api/patients/{}/appointments", patient_id)).await
    }

    async fn patient_prescriptions(&self, patient_id: i64) -> ApiResult<Vec<Prescription>> {
        self.get_json(&format!("/api/patients/{}/prescriptions", patient_id)).await
    }

    async fn patient_orders(&self, patient_id: i64) -> ApiResult<Vec<Order>> {
        self.get_json(&format!("/api/patients/{}/orders", patient_id)).await
    }

    async fn place_order(&self, request: &PharmacyOrderRequest) -> ApiResult<OrderPlaced> {
        self.send_json(Method::POST, "/api/pharmacy/order", request).await
    }

    async fn doctor_appointments(&self, doctor_id: i64) -> ApiResult<Vec<DoctorAppointment>> {
        self.get_json(&format!("/api/doctors/{}/appointments", doctor_id)).await
    }

    async fn update_visit(&self, appointment_id: i64, update: &VisitUpdate) -> ApiResult<ApiMessage> {
        self.send_json(Method::PUT, &format!("/api/appointments/{}", appointment_id), update).await
    }

    async fn issue_prescription(&self, request: &IssuePrescription) -> ApiResult<ApiMessage> {
        self.send_json(Method::POST, "/api/prescriptions/issue", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    type Captured = Arc<Mutex<Vec<Value>>>;

    async fn book(State(seen): State<Captured>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        seen.lock().unwrap().push(body);
        (StatusCode::CREATED, Json(json!({ "message": "Appointment booked successfully" })))
    }

    async fn doctors(
        State(seen): State<Captured>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        seen.lock().unwrap().push(json!(params));
        Json(json!([{
            "doctor_id": 3, "first_name": "Gregory", "last_name": "House",
            "specialization": "Diagnostics"
        }]))
    }

    async fn update(Path(id): Path<i64>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if id == 404 {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Appointment not found or no changes made" })),
            );
        }
        let status = body["status"].clone();
        (StatusCode::OK, Json(json!({ "message": status })))
    }

    async fn broken() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>")
    }

    async fn garbled() -> (StatusCode, &'static str) {
        (StatusCode::OK, "[{\"appointment_id\": ")
    }

    async fn spawn_server() -> (String, Captured) {
        let seen: Captured = Arc::default();
        let app = Router::new()
            .route("/api/appointments/book", post(book))
            .route("/api/doctors", get(doctors))
            .route("/api/appointments/:id", put(update))
            .route("/api/patients/:id/orders", get(broken))
            .route("/api/patients/:id/appointments", get(garbled))
            .with_state(seen.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), seen)
    }

    #[tokio::test]
    async fn should_post_booking_body_in_api_shape() {
        let (base, seen) = spawn_server().await;
        let api = HttpClinicApi::new(base);
        let request = BookAppointment {
            patient_id: 7,
            doctor_id: 3,
            appointment_time: "2024-05-01 09:30:00".into(),
        };

        let reply = api.book_appointment(&request).await.unwrap();

        assert_eq!(reply.message.as_deref(), Some("Appointment booked successfully"));
        let bodies = seen.lock().unwrap();
        assert_eq!(
            bodies[0],
            json!({ "patient_id": 7, "doctor_id": 3, "appointment_time": "2024-05-01 09:30:00" })
        );
    }

    #[tokio::test]
    async fn should_send_specialization_only_when_given() {
        let (base, seen) = spawn_server().await;
        let api = HttpClinicApi::new(format!("{}/", base));

        let found = api.list_doctors(Some("Diag nostics".into())).await.unwrap();
        api.list_doctors(None).await.unwrap();
        api.list_doctors(Some(String::new())).await.unwrap();

        assert_eq!(found[0].doctor_id, 3);
        let queries = seen.lock().unwrap();
        assert_eq!(queries[0], json!({ "specialization": "Diag nostics" }));
        assert_eq!(queries[1], json!({}));
        assert_eq!(queries[2], json!({}));
    }

    #[tokio::test]
    async fn should_surface_server_error_text() {
        let (base, _) = spawn_server().await;
        let api = HttpClinicApi::new(base);
        let update = VisitUpdate { visit_notes: "ok".into(), status: "Completed".into() };

        let err = api.update_visit(404, &update).await.unwrap_err();

        match err {
            ApiError::Application { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Appointment not found or no changes made");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(api.update_visit(9, &update).await.is_ok());
    }

    #[tokio::test]
    async fn should_classify_bodyless_error_responses_by_status() {
        let (base, _) = spawn_server().await;
        let api = HttpClinicApi::new(base);

        assert!(matches!(api.patient_orders(7).await, Err(ApiError::Status { status: 500 })));
        // No route: axum answers 404 with an empty body.
        assert!(matches!(api.patient_prescriptions(7).await, Err(ApiError::Status { status: 404 })));
    }

    #[tokio::test]
    async fn should_report_decode_failure_for_malformed_success_body() {
        let (base, _) = spawn_server().await;
        let api = HttpClinicApi::new(base);

        let err = api.patient_appointments(7).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn should_report_transport_failure_when_nothing_listens() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = HttpClinicApi::new(format!("http://{}", addr));

        let err = api.patient_appointments(7).await.unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
    }
}

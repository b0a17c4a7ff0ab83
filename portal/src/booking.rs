// portal/src/booking.rs

use std::sync::Arc;

use log::info;
use models::{to_api_appointment_time, BookAppointment, Doctor, Role, Session};

use crate::api::ClinicApi;
use crate::fetch::{fetch_into, ListLayout};
use crate::page::{GuardRejection, MessageSlot, Region, SubmitOutcome};
use crate::render::{self, Slot};
use crate::session;
use crate::storage::LocalStorage;

pub const BOOKING_NOTICE: &str = "You must be logged in to book an appointment.";
pub const BOOKED_MESSAGE: &str = "Appointment booked successfully!";

const DOCTORS: ListLayout<Doctor> = ListLayout {
    slot: Slot::Paragraph,
    empty_text: "No doctors found.",
    failure_text: "Failed to fetch doctors",
    error_prefix: "Error: ",
    item: render::doctor_card,
};

/// Booking form embedded in one doctor card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub doctor_id: i64,
    /// Value of the `datetime-local` input, e.g. `2024-05-01T09:30`.
    pub appointment_time: String,
}

impl BookingForm {
    pub fn for_doctor(doctor_id: i64) -> Self {
        BookingForm { doctor_id, appointment_time: String::new() }
    }

    /// Clears the time; the hidden doctor id belongs to the card and stays.
    pub fn reset(&mut self) {
        self.appointment_time.clear();
    }
}

/// Doctor search and booking page.
pub struct BookingPage {
    api: Arc<dyn ClinicApi>,
    session: Session,
    doctors: Region,
    message: MessageSlot,
}

impl BookingPage {
    pub fn open(api: Arc<dyn ClinicApi>, storage: &dyn LocalStorage) -> Result<Self, GuardRejection> {
        let session = session::require_session(storage, Role::Patient, BOOKING_NOTICE)?;
        Ok(BookingPage { api, session, doctors: Region::new("doctor-list"), message: MessageSlot::new() })
    }

    pub fn doctors(&self) -> &Region {
        &self.doctors
    }

    pub fn message(&self) -> &MessageSlot {
        &self.message
    }

    /// Initial load lists every doctor.
    pub async fn load(&self) {
        self.search("").await;
    }

    /// Lists doctors whose specialization matches `specialization`; an empty
    /// query lists everyone. When searches overlap only the last one issued
    /// gets to render.
    pub async fn search(&self, specialization: &str) {
        let filter = Some(specialization.to_string()).filter(|s| !s.is_empty());
        fetch_into(&self.doctors, &DOCTORS, self.api.list_doctors(filter)).await;
    }

    /// The "clear" button: empties the query and lists everyone again.
    pub async fn clear_search(&self, query: &mut String) {
        query.clear();
        self.search("").await;
    }

    pub async fn book(&self, form: &mut BookingForm) -> SubmitOutcome {
        let appointment_time = match to_api_appointment_time(&form.appointment_time) {
            Ok(t) => t,
            Err(err) => {
                self.message.error(err.to_string()).await;
                return SubmitOutcome::Invalid(err);
            }
        };
        let request = BookAppointment {
            patient_id: self.session.id,
            doctor_id: form.doctor_id,
            appointment_time,
        };

        match self.api.book_appointment(&request).await {
            Ok(_) => {
                info!("Booked doctor {} at {}", request.doctor_id, request.appointment_time);
                self.message.success(BOOKED_MESSAGE).await;
                form.reset();
                SubmitOutcome::Accepted
            }
            Err(err) => self.message.report(&err).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockClinicApi;
    use crate::errors::ApiError;
    use crate::page::RegionState;
    use crate::testing::{self, api, storage};
    use mockall::predicate::eq;
    use models::{ApiMessage, ValidationError};

    fn page(mock: MockClinicApi) -> BookingPage {
        BookingPage::open(api(mock), &*storage(&[("patient_id", "7"), ("patient_name", "Ada")])).unwrap()
    }

    #[test]
    fn should_require_login_to_book() {
        let err = BookingPage::open(api(MockClinicApi::new()), &*storage(&[])).err().unwrap();
        assert_eq!(err.notice, BOOKING_NOTICE);
        assert_eq!(err.redirect, "/");
    }

    #[tokio::test]
    async fn should_list_all_doctors_on_load_and_filter_on_search() {
        let mut mock = MockClinicApi::new();
        mock.expect_list_doctors()
            .with(eq(None))
            .times(2)
            .returning(|_| Ok(vec![testing::doctor(3, "Diagnostics"), testing::doctor(4, "Cardiology")]));
        mock.expect_list_doctors()
            .with(eq(Some("Cardio".to_string())))
            .times(1)
            .returning(|_| Ok(vec![testing::doctor(4, "Cardiology")]));

        let page = page(mock);
        page.load().await;
        assert_eq!(page.doctors().state().await, RegionState::Records(2));

        page.search("Cardio").await;
        assert_eq!(page.doctors().state().await, RegionState::Records(1));

        let mut query = "Cardio".to_string();
        page.clear_search(&mut query).await;
        assert!(query.is_empty());
        assert_eq!(page.doctors().state().await, RegionState::Records(2));
    }

    #[tokio::test]
    async fn should_say_when_no_doctor_matches() {
        let mut mock = MockClinicApi::new();
        mock.expect_list_doctors().returning(|_| Ok(vec![]));

        let page = page(mock);
        page.search("Podiatry").await;

        let html = page.doctors().html().await;
        assert!(html.starts_with("<p"));
        assert!(html.contains("No doctors found."));
    }

    #[tokio::test]
    async fn should_send_api_formatted_time() {
        let mut mock = MockClinicApi::new();
        mock.expect_book_appointment()
            .withf(|req| {
                *req == BookAppointment {
                    patient_id: 7,
                    doctor_id: 3,
                    appointment_time: "2024-05-01 09:30:00".into(),
                }
            })
            .times(1)
            .returning(|_| Ok(ApiMessage::default()));

        let page = page(mock);
        let mut form = BookingForm { doctor_id: 3, appointment_time: "2024-05-01T09:30".into() };

        assert_eq!(page.book(&mut form).await, SubmitOutcome::Accepted);
        assert_eq!(form, BookingForm::for_doctor(3));
        assert_eq!(page.message().current().await.unwrap().text, BOOKED_MESSAGE);
    }

    #[tokio::test]
    async fn should_not_book_without_a_time() {
        let mut mock = MockClinicApi::new();
        mock.expect_book_appointment().never();

        let page = page(mock);
        let mut form = BookingForm::for_doctor(3);

        assert_eq!(
            page.book(&mut form).await,
            SubmitOutcome::Invalid(ValidationError::MissingField("Appointment time"))
        );
    }

    #[tokio::test]
    async fn should_report_taken_slot_verbatim() {
        let mut mock = MockClinicApi::new();
        mock.expect_book_appointment().returning(|_| {
            Err(ApiError::Application {
                status: 409,
                message: "This time slot is unavailable. Please choose another time.".into(),
            })
        });

        let page = page(mock);
        let mut form = BookingForm { doctor_id: 3, appointment_time: "2024-05-01T09:30".into() };
        page.book(&mut form).await;

        assert_eq!(
            page.message().current().await.unwrap().text,
            "Error: This time slot is unavailable. Please choose another time."
        );
        assert_eq!(form.appointment_time, "2024-05-01T09:30");
    }
}

// portal/src/doctor_dashboard.rs

use std::sync::Arc;

use log::{debug, info};
use models::{require, DoctorAppointment, IssuePrescription, Role, Session, VisitUpdate};
use tokio::sync::Mutex;

use crate::api::ClinicApi;
use crate::errors::StorageResult;
use crate::fetch::{fetch_into, ListLayout};
use crate::page::{GuardRejection, MessageSlot, Navigation, Region, SubmitOutcome};
use crate::render::{self, Slot};
use crate::session::{self, NOT_LOGGED_IN_NOTICE};
use crate::storage::LocalStorage;

pub const VISIT_UPDATED_MESSAGE: &str = "Visit updated successfully!";
pub const PRESCRIPTION_ISSUED_MESSAGE: &str = "Prescription issued!";

const APPOINTMENTS: ListLayout<DoctorAppointment> = ListLayout {
    slot: Slot::ListItem,
    empty_text: "You have no scheduled appointments.",
    failure_text: "Failed to fetch appointments",
    error_prefix: "Error loading appointments: ",
    item: render::doctor_appointment,
};

/// The appointment the doctor clicked on, as shown above the forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentSelection {
    pub appointment_id: i64,
    pub patient_name: String,
    pub appointment_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitForm {
    pub visit_notes: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrescriptionForm {
    pub medication_name: String,
    pub dosage: String,
    pub instructions: String,
}

impl PrescriptionForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Page state of the doctor dashboard: the rows currently listed (what a
/// click can land on) and the selected appointment.
#[derive(Debug, Default)]
pub struct DashboardState {
    listed: Vec<DoctorAppointment>,
    selected: Option<AppointmentSelection>,
}

impl DashboardState {
    pub fn listed(&self) -> &[DoctorAppointment] {
        &self.listed
    }

    pub fn selected(&self) -> Option<&AppointmentSelection> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|s| s.appointment_id)
    }

    fn replace_listed(&mut self, rows: Vec<DoctorAppointment>) {
        self.listed = rows;
    }

    fn select(&mut self, appointment_id: i64) -> Option<&DoctorAppointment> {
        let row = self.listed.iter().find(|a| a.appointment_id == appointment_id)?;
        self.selected = Some(AppointmentSelection {
            appointment_id,
            patient_name: row.patient_name(),
            appointment_time: render::display_time(&row.appointment_time),
        });
        Some(row)
    }
}

/// Doctor dashboard: appointment list, visit update and prescription
/// issuance for the selected appointment.
pub struct DoctorDashboard {
    api: Arc<dyn ClinicApi>,
    storage: Arc<dyn LocalStorage>,
    session: Session,
    appointments: Region,
    state: Mutex<DashboardState>,
    update_message: MessageSlot,
    prescription_message: MessageSlot,
}

impl DoctorDashboard {
    pub fn open(api: Arc<dyn ClinicApi>, storage: Arc<dyn LocalStorage>) -> Result<Self, GuardRejection> {
        let session = session::require_session(storage.as_ref(), Role::Doctor, NOT_LOGGED_IN_NOTICE)?;
        Ok(DoctorDashboard {
            api,
            storage,
            session,
            appointments: Region::new("appointments-list"),
            state: Mutex::new(DashboardState::default()),
            update_message: MessageSlot::new(),
            prescription_message: MessageSlot::new(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn welcome(&self) -> String {
        self.session.welcome()
    }

    pub fn appointments(&self) -> &Region {
        &self.appointments
    }

    pub fn update_message(&self) -> &MessageSlot {
        &self.update_message
    }

    pub fn prescription_message(&self) -> &MessageSlot {
        &self.prescription_message
    }

    pub async fn selection(&self) -> Option<AppointmentSelection> {
        self.state.lock().await.selected().cloned()
    }

    pub async fn load(&self) {
        self.refresh_appointments().await;
    }

    pub async fn refresh_appointments(&self) {
        let rows = fetch_into(&self.appointments, &APPOINTMENTS, self.api.doctor_appointments(self.session.id)).await;
        if let Some(rows) = rows {
            self.state.lock().await.replace_listed(rows);
        }
    }

    /// Equivalent of clicking a row: remembers the appointment, prefills the
    /// visit form, clears both messages and resets the prescription form.
    /// Ids that are not currently listed are ignored.
    pub async fn select_appointment(
        &self,
        appointment_id: i64,
        visit: &mut VisitForm,
        prescription: &mut PrescriptionForm,
    ) -> Option<AppointmentSelection> {
        let mut state = self.state.lock().await;
        let Some(row) = state.select(appointment_id) else {
            debug!("Appointment {} is not listed; ignoring selection", appointment_id);
            return None;
        };
        visit.visit_notes = row.visit_notes.clone().unwrap_or_default();
        visit.status = row.status.clone();
        let selection = state.selected().cloned();
        drop(state);

        prescription.reset();
        self.update_message.clear().await;
        self.prescription_message.clear().await;
        selection
    }

    /// Saves notes and status for the selected appointment, then reloads the
    /// list. The form keeps its values.
    pub async fn submit_visit_update(&self, form: &VisitForm) -> SubmitOutcome {
        let Some(appointment_id) = self.state.lock().await.selected_id() else {
            return SubmitOutcome::Ignored;
        };
        let update = VisitUpdate { visit_notes: form.visit_notes.clone(), status: form.status.clone() };

        match self.api.update_visit(appointment_id, &update).await {
            Ok(_) => {
                info!("Updated appointment {} -> {}", appointment_id, update.status);
                self.update_message.success(VISIT_UPDATED_MESSAGE).await;
                self.refresh_appointments().await;
                SubmitOutcome::Accepted
            }
            Err(err) => self.update_message.report(&err).await,
        }
    }

    pub async fn submit_prescription(&self, form: &mut PrescriptionForm) -> SubmitOutcome {
        let Some(appointment_id) = self.state.lock().await.selected_id() else {
            return SubmitOutcome::Ignored;
        };
        if let Err(err) = require("Medication name", &form.medication_name)
            .and_then(|_| require("Dosage", &form.dosage))
        {
            self.prescription_message.error(err.to_string()).await;
            return SubmitOutcome::Invalid(err);
        }

        let request = IssuePrescription {
            appointment_id,
            medication_name: form.medication_name.clone(),
            dosage: form.dosage.clone(),
            instructions: form.instructions.clone(),
        };
        match self.api.issue_prescription(&request).await {
            Ok(_) => {
                info!("Issued {} for appointment {}", request.medication_name, appointment_id);
                self.prescription_message.success(PRESCRIPTION_ISSUED_MESSAGE).await;
                form.reset();
                SubmitOutcome::Accepted
            }
            Err(err) => self.prescription_message.report(&err).await,
        }
    }

    pub fn logout(&self) -> StorageResult<Navigation> {
        session::logout(self.storage.as_ref(), Role::Doctor)
    }
}

// portal/src/patient_dashboard.rs

use std::collections::BTreeSet;
use std::sync::Arc;

use log::info;
use models::{
    require, PatientAppointment, PharmacyOrderRequest, Prescription, Order, Role, Session,
    ValidationError,
};

use crate::api::ClinicApi;
use crate::errors::StorageResult;
use crate::fetch::{fetch_into, ListLayout};
use crate::page::{Control, GuardRejection, MessageSlot, Navigation, Region, RegionState, SubmitOutcome};
use crate::render::{self, Slot};
use crate::session::{self, NOT_LOGGED_IN_NOTICE};
use crate::storage::LocalStorage;

pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully!";
pub const NO_ORDERABLE_TEXT: &str = "You have no prescriptions available to order.";

const APPOINTMENTS: ListLayout<PatientAppointment> = ListLayout {
    slot: Slot::ListItem,
    empty_text: "You have no appointments.",
    failure_text: "Failed to fetch appointments",
    error_prefix: "Error: ",
    item: render::patient_appointment,
};

const PRESCRIPTIONS: ListLayout<Prescription> = ListLayout {
    slot: Slot::ListItem,
    empty_text: "You have no prescriptions.",
    failure_text: "Failed to fetch prescriptions",
    error_prefix: "Error: ",
    item: render::prescription,
};

const ORDERS: ListLayout<Order> = ListLayout {
    slot: Slot::ListItem,
    empty_text: "You have no past orders.",
    failure_text: "Failed to fetch order history",
    error_prefix: "Error: ",
    item: render::order,
};

/// Pharmacy order form: a shipping address plus the checked prescriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PharmacyOrderForm {
    pub shipping_address: String,
    pub selected: BTreeSet<i64>,
}

impl PharmacyOrderForm {
    /// Checks or unchecks one prescription box.
    pub fn toggle(&mut self, prescription_id: i64) {
        if !self.selected.remove(&prescription_id) {
            self.selected.insert(prescription_id);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Patient dashboard: appointments, prescriptions with the pharmacy order
/// form, and order history.
pub struct PatientDashboard {
    api: Arc<dyn ClinicApi>,
    storage: Arc<dyn LocalStorage>,
    session: Session,
    appointments: Region,
    prescriptions: Region,
    order_candidates: Region,
    orders: Region,
    place_order: Control,
    pharmacy_message: MessageSlot,
}

impl PatientDashboard {
    /// Runs the session guard. Nothing is fetched when it fails.
    pub fn open(api: Arc<dyn ClinicApi>, storage: Arc<dyn LocalStorage>) -> Result<Self, GuardRejection> {
        let session = session::require_session(storage.as_ref(), Role::Patient, NOT_LOGGED_IN_NOTICE)?;
        Ok(PatientDashboard {
            api,
            storage,
            session,
            appointments: Region::new("appointments-list"),
            prescriptions: Region::new("prescriptions-list"),
            order_candidates: Region::new("order-items-list"),
            orders: Region::new("order-history-list"),
            place_order: Control::default(),
            pharmacy_message: MessageSlot::new(),
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

    pub fn prescriptions(&self) -> &Region {
        &self.prescriptions
    }

    pub fn order_candidates(&self) -> &Region {
        &self.order_candidates
    }

    pub fn orders(&self) -> &Region {
        &self.orders
    }

    pub fn place_order_control(&self) -> &Control {
        &self.place_order
    }

    pub fn pharmacy_message(&self) -> &MessageSlot {
        &self.pharmacy_message
    }

    /// Initial page load: all three lists, concurrently.
    pub async fn load(&self) {
        tokio::join!(
            self.refresh_appointments(),
            self.refresh_prescriptions(),
            self.refresh_orders()
        );
    }

    pub async fn refresh_appointments(&self) {
        fetch_into(&self.appointments, &APPOINTMENTS, self.api.patient_appointments(self.session.id)).await;
    }

    /// Prescription history plus the order candidates and the order button.
    pub async fn refresh_prescriptions(&self) {
        let candidates_token = self.order_candidates.begin();
        let Some(prescriptions) =
            fetch_into(&self.prescriptions, &PRESCRIPTIONS, self.api.patient_prescriptions(self.session.id)).await
        else {
            return;
        };

        let orderable: Vec<&Prescription> = prescriptions.iter().filter(|p| p.is_orderable()).collect();
        let (state, markup) = if orderable.is_empty() {
            (RegionState::Empty, render::empty_state(Slot::SmallParagraph, NO_ORDERABLE_TEXT))
        } else {
            (
                RegionState::Records(orderable.len()),
                render::records(orderable.iter().copied(), render::order_candidate),
            )
        };
        if self.order_candidates.commit(candidates_token, state, markup).await {
            self.place_order.set_enabled(!orderable.is_empty());
        }
    }

    pub async fn refresh_orders(&self) {
        fetch_into(&self.orders, &ORDERS, self.api.patient_orders(self.session.id)).await;
    }

    /// Places a pharmacy order for the checked prescriptions. With nothing
    /// checked, or no shipping address, no request is sent.
    pub async fn submit_order(&self, form: &mut PharmacyOrderForm) -> SubmitOutcome {
        let checked = if form.selected.is_empty() {
            Err(ValidationError::NoItemsSelected)
        } else {
            require("Shipping address", &form.shipping_address)
        };
        if let Err(err) = checked {
            self.pharmacy_message.error(err.to_string()).await;
            return SubmitOutcome::Invalid(err);
        }

        let request = PharmacyOrderRequest {
            patient_id: self.session.id,
            shipping_address: form.shipping_address.clone(),
            prescription_ids: form.selected.iter().copied().collect(),
        };
        match self.api.place_order(&request).await {
            Ok(placed) => {
                info!("Pharmacy order placed: {:?}", placed.order_id);
                self.pharmacy_message.success(ORDER_PLACED_MESSAGE).await;
                form.reset();
                tokio::join!(self.refresh_prescriptions(), self.refresh_orders());
                SubmitOutcome::Accepted
            }
            Err(err) => self.pharmacy_message.report(&err).await,
        }
    }

    pub fn logout(&self) -> StorageResult<Navigation> {
        session::logout(self.storage.as_ref(), Role::Patient)
    }
}

// cli/src/cli/handlers_doctor.rs

// Doctor dashboard: appointment list, visit notes and prescriptions. Both
// mutations go through the same row selection the page uses.

use anyhow::{anyhow, Result};
use portal::doctor_dashboard::{DoctorDashboard, PrescriptionForm, VisitForm};

use crate::cli::cli::PortalContext;
use crate::cli::handlers_utils::{finish, print_message, print_region, reject};

async fn open(ctx: &PortalContext) -> Result<DoctorDashboard> {
    match DoctorDashboard::open(ctx.api.clone(), ctx.storage.clone()) {
        Ok(page) => Ok(page),
        Err(rejection) => Err(reject(rejection).await),
    }
}

/// Loads the list and selects `appointment_id`, prefilling both forms.
async fn open_selected(
    ctx: &PortalContext,
    appointment_id: i64,
    visit: &mut VisitForm,
    prescription: &mut PrescriptionForm,
) -> Result<DoctorDashboard> {
    let page = open(ctx).await?;
    page.load().await;
    let selection = page
        .select_appointment(appointment_id, visit, prescription)
        .await
        .ok_or_else(|| anyhow!("Appointment {} is not in your schedule", appointment_id))?;
    println!("Selected: {} at {}", selection.patient_name, selection.appointment_time);
    Ok(page)
}

pub async fn handle_dashboard(ctx: &PortalContext) -> Result<()> {
    let page = open(ctx).await?;
    page.load().await;
    println!("{}", page.welcome());
    print_region(page.appointments()).await;
    Ok(())
}

pub async fn handle_update_visit(
    ctx: &PortalContext,
    appointment_id: i64,
    notes: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let mut visit = VisitForm::default();
    let mut prescription = PrescriptionForm::default();
    let page = open_selected(ctx, appointment_id, &mut visit, &mut prescription).await?;

    if let Some(notes) = notes {
        visit.visit_notes = notes;
    }
    if let Some(status) = status {
        visit.status = status;
    }
    let outcome = page.submit_visit_update(&visit).await;
    print_message(page.update_message()).await;
    if outcome.is_accepted() {
        print_region(page.appointments()).await;
    }
    finish("Visit update", outcome)
}

pub async fn handle_prescribe(
    ctx: &PortalContext,
    appointment_id: i64,
    medication_name: String,
    dosage: String,
    instructions: String,
) -> Result<()> {
    let mut visit = VisitForm::default();
    let mut prescription = PrescriptionForm::default();
    let page = open_selected(ctx, appointment_id, &mut visit, &mut prescription).await?;

    prescription = PrescriptionForm { medication_name, dosage, instructions };
    let outcome = page.submit_prescription(&mut prescription).await;
    print_message(page.prescription_message()).await;
    finish("Prescription", outcome)
}

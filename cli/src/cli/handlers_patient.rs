// cli/src/cli/handlers_patient.rs

// Patient dashboard: the three lists and the pharmacy order form.

use anyhow::Result;
use portal::patient_dashboard::{PatientDashboard, PharmacyOrderForm};

use crate::cli::cli::PortalContext;
use crate::cli::handlers_utils::{finish, print_control, print_message, print_region, reject};

async fn open(ctx: &PortalContext) -> Result<PatientDashboard> {
    match PatientDashboard::open(ctx.api.clone(), ctx.storage.clone()) {
        Ok(page) => Ok(page),
        Err(rejection) => Err(reject(rejection).await),
    }
}

async fn print_dashboard(page: &PatientDashboard) {
    println!("{}", page.welcome());
    print_region(page.appointments()).await;
    print_region(page.prescriptions()).await;
    print_region(page.order_candidates()).await;
    print_control("place-order", page.place_order_control());
    print_region(page.orders()).await;
}

pub async fn handle_dashboard(ctx: &PortalContext) -> Result<()> {
    let page = open(ctx).await?;
    page.load().await;
    print_dashboard(&page).await;
    Ok(())
}

pub async fn handle_order(ctx: &PortalContext, shipping_address: String, prescriptions: Vec<i64>) -> Result<()> {
    let page = open(ctx).await?;
    page.load().await;

    let mut form = PharmacyOrderForm { shipping_address, selected: prescriptions.into_iter().collect() };
    let outcome = page.submit_order(&mut form).await;
    print_message(page.pharmacy_message()).await;
    if outcome.is_accepted() {
        print_region(page.prescriptions()).await;
        print_region(page.order_candidates()).await;
        print_region(page.orders()).await;
    }
    finish("Order", outcome)
}

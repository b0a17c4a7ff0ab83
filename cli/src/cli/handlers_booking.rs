// cli/src/cli/handlers_booking.rs

// Doctor search and appointment booking (patient session required).

use anyhow::Result;
use portal::booking::{BookingForm, BookingPage};

use crate::cli::cli::PortalContext;
use crate::cli::handlers_utils::{finish, print_message, print_region, reject};

async fn open(ctx: &PortalContext) -> Result<BookingPage> {
    match BookingPage::open(ctx.api.clone(), ctx.storage.as_ref()) {
        Ok(page) => Ok(page),
        Err(rejection) => Err(reject(rejection).await),
    }
}

pub async fn handle_search(ctx: &PortalContext, specialization: Option<String>) -> Result<()> {
    let page = open(ctx).await?;
    page.search(specialization.as_deref().unwrap_or_default()).await;
    print_region(page.doctors()).await;
    Ok(())
}

pub async fn handle_book(ctx: &PortalContext, doctor_id: i64, appointment_time: String) -> Result<()> {
    let page = open(ctx).await?;
    let mut form = BookingForm { appointment_time, ..BookingForm::for_doctor(doctor_id) };
    let outcome = page.book(&mut form).await;
    print_message(page.message()).await;
    finish("Booking", outcome)
}

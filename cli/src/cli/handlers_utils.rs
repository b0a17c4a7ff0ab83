// cli/src/cli/handlers_utils.rs

// Shared output helpers: regions and messages are printed as the markup
// the page would show, navigations as their notice and target.

use anyhow::{anyhow, Result};
use log::info;
use portal::errors::NETWORK_ERROR_MESSAGE;
use portal::page::Control;
use portal::{GuardRejection, MessageSlot, Navigation, Region, SubmitOutcome};

pub async fn print_region(region: &Region) {
    println!("<!-- #{} -->", region.id());
    println!("{}", region.html().await);
}

pub async fn print_message(slot: &MessageSlot) {
    let html = slot.html().await;
    if !html.is_empty() {
        println!("{}", html);
    }
}

pub fn print_control(name: &str, control: &Control) {
    let state = if control.is_enabled() { "enabled" } else { "disabled" };
    println!("{}: {}", name, state);
}

/// Prints the notice, waits out the redirect delay and reports the target.
pub async fn follow_navigation(navigation: &Navigation) {
    if let Some(notice) = &navigation.notice {
        println!("{}", notice);
    }
    if !navigation.delay.is_zero() {
        tokio::time::sleep(navigation.delay).await;
    }
    info!("Navigating to {}", navigation.to);
    println!("-> {}", navigation.to);
}

/// A guard rejection ends the command: notice, redirect, failure exit.
pub async fn reject(rejection: GuardRejection) -> anyhow::Error {
    follow_navigation(&rejection.navigation()).await;
    anyhow!(rejection.notice)
}

/// Maps a submission outcome to the command's exit status. The message slot
/// has already been printed, so the error only names the failure kind.
pub fn finish(action: &str, outcome: SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Accepted => Ok(()),
        SubmitOutcome::Ignored => Err(anyhow!("{}: nothing to submit", action)),
        SubmitOutcome::Invalid(err) => Err(anyhow!("{}: {}", action, err)),
        SubmitOutcome::Rejected(message) => Err(anyhow!("{} rejected: {}", action, message)),
        SubmitOutcome::NetworkFailure => Err(anyhow!("{}: {}", action, NETWORK_ERROR_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::ValidationError;

    #[test]
    fn should_only_succeed_on_accepted_submissions() {
        assert!(finish("Booking", SubmitOutcome::Accepted).is_ok());

        let err = finish("Booking", SubmitOutcome::Rejected("Doctor not available".into())).unwrap_err();
        assert_eq!(err.to_string(), "Booking rejected: Doctor not available");

        let err = finish("Order", SubmitOutcome::Invalid(ValidationError::NoItemsSelected)).unwrap_err();
        assert_eq!(err.to_string(), "Order: Please select at least one item to order.");

        let err = finish("Order", SubmitOutcome::NetworkFailure).unwrap_err();
        assert_eq!(err.to_string(), "Order: A network error occurred.");
    }
}

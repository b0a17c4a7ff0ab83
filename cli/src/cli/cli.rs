// cli/src/cli/cli.rs

// Parses the command line, resolves configuration and dispatches to the
// page handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use portal::config::PortalConfig;
use portal::{load_portal_config, ClinicApi, FileStorage, HttpClinicApi, LocalStorage};

use crate::cli::commands::{CliArgs, DoctorCommand, DoctorsCommand, PatientCommand, PortalCommand};
use crate::cli::{handlers_auth, handlers_booking, handlers_doctor, handlers_patient, handlers_theme};

/// Collaborators shared by every page: the remote API and local storage.
#[derive(Clone)]
pub struct PortalContext {
    pub api: Arc<dyn ClinicApi>,
    pub storage: Arc<dyn LocalStorage>,
}

impl PortalContext {
    pub fn from_config(config: &PortalConfig) -> Result<Self> {
        let storage_path = config.resolved_storage_path();
        let storage = FileStorage::open(&storage_path)
            .with_context(|| format!("Failed to open local storage at {}", storage_path.display()))?;
        info!("Using API {} with storage {}", config.api_base_url, storage_path.display());
        Ok(PortalContext {
            api: Arc::new(HttpClinicApi::new(config.api_base_url.clone())),
            storage: Arc::new(storage),
        })
    }
}

/// Config file, then `.env`/environment, then command-line flags.
pub fn resolve_config(args: &CliArgs) -> Result<PortalConfig> {
    let mut config = load_portal_config(args.config.as_deref())?;
    if let Some(url) = &args.api_url {
        debug!("--api-url overrides api_base_url");
        config.api_base_url = url.clone();
    }
    if let Some(path) = &args.storage {
        debug!("--storage overrides storage_path");
        config.storage_path = Some(path.clone());
    }
    Ok(config)
}

pub async fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    let config = resolve_config(&args)?;
    let ctx = PortalContext::from_config(&config)?;
    run_command(&ctx, args.command).await
}

pub async fn run_command(ctx: &PortalContext, command: PortalCommand) -> Result<()> {
    match command {
        PortalCommand::Patient(command) => match command {
            PatientCommand::Register { first_name, last_name, email, password } => {
                handlers_auth::handle_patient_register(ctx, first_name, last_name, email, password).await
            }
            PatientCommand::Login { email, password } => {
                handlers_auth::handle_patient_login(ctx, email, password).await
            }
            PatientCommand::Dashboard => handlers_patient::handle_dashboard(ctx).await,
            PatientCommand::Order { shipping_address, prescriptions } => {
                handlers_patient::handle_order(ctx, shipping_address, prescriptions).await
            }
        },
        PortalCommand::Doctor(command) => match command {
            DoctorCommand::Register { first_name, last_name, specialization, email, password } => {
                handlers_auth::handle_doctor_register(ctx, first_name, last_name, specialization, email, password)
                    .await
            }
            DoctorCommand::Login { email, password } => {
                handlers_auth::handle_doctor_login(ctx, email, password).await
            }
            DoctorCommand::Dashboard => handlers_doctor::handle_dashboard(ctx).await,
            DoctorCommand::UpdateVisit { appointment_id, notes, status } => {
                handlers_doctor::handle_update_visit(ctx, appointment_id, notes, status).await
            }
            DoctorCommand::Prescribe { appointment_id, medication, dosage, instructions } => {
                handlers_doctor::handle_prescribe(ctx, appointment_id, medication, dosage, instructions).await
            }
        },
        PortalCommand::Doctors(DoctorsCommand::Search { specialization }) => {
            handlers_booking::handle_search(ctx, specialization).await
        }
        PortalCommand::Book { doctor_id, time } => handlers_booking::handle_book(ctx, doctor_id, time).await,
        PortalCommand::Logout { role } => handlers_auth::handle_logout(ctx, role.into()).await,
        PortalCommand::Theme(command) => handlers_theme::handle_theme_command(ctx, command),
    }
}

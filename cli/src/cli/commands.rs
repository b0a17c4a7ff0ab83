// cli/src/cli/commands.rs

// Command-line arguments and subcommands for the clinic portal client,
// one subcommand per page action.

use clap::{Parser, Subcommand, ValueEnum};
use models::Role;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clinic-cli")]
#[command(version = "0.1.0")]
#[command(about = "Clinic portal client: appointments, prescriptions and pharmacy orders")]
pub struct CliArgs {
    /// Portal config file (YAML with a top-level `portal:` key).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Overrides the API base URL from the config file and environment.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
    /// Overrides the local storage file.
    #[arg(long, global = true, value_name = "FILE")]
    pub storage: Option<PathBuf>,
    #[command(subcommand)]
    pub command: PortalCommand,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum PortalCommand {
    /// Patient registration, login, dashboard and pharmacy orders
    #[command(subcommand)]
    Patient(PatientCommand),
    /// Doctor registration, login, dashboard, visit notes and prescriptions
    #[command(subcommand)]
    Doctor(DoctorCommand),
    /// Browse doctors (requires a patient session)
    #[command(subcommand)]
    Doctors(DoctorsCommand),
    /// Book an appointment with a doctor (requires a patient session)
    Book {
        #[arg(long)]
        doctor_id: i64,
        /// Local date and time, e.g. 2024-05-01T09:30
        #[arg(long, value_name = "YYYY-MM-DDTHH:MM")]
        time: String,
    },
    /// Clear every stored session
    Logout {
        #[arg(long, value_enum, default_value_t = RoleArg::Patient)]
        role: RoleArg,
    },
    #[command(subcommand)]
    Theme(ThemeCommand),
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum PatientCommand {
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CLINIC_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CLINIC_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Appointments, prescriptions and order history
    Dashboard,
    /// Order prescriptions from the pharmacy
    Order {
        #[arg(long)]
        shipping_address: String,
        /// Prescription id to include; repeat for several
        #[arg(long = "prescription", value_name = "ID")]
        prescriptions: Vec<i64>,
    },
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum DoctorCommand {
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        specialization: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CLINIC_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CLINIC_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Scheduled appointments
    Dashboard,
    /// Save visit notes and status; omitted values keep the current ones
    UpdateVisit {
        #[arg(long)]
        appointment_id: i64,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Issue a prescription for an appointment
    Prescribe {
        #[arg(long)]
        appointment_id: i64,
        #[arg(long)]
        medication: String,
        #[arg(long)]
        dosage: String,
        #[arg(long, default_value = "")]
        instructions: String,
    },
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum DoctorsCommand {
    /// Lists doctors, optionally filtered by specialization
    Search {
        #[arg(long)]
        specialization: Option<String>,
    },
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum ThemeCommand {
    Show,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Patient,
    Doctor,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Patient => Role::Patient,
            RoleArg::Doctor => Role::Doctor,
        }
    }
}

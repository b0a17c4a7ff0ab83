// cli/src/cli/mod.rs

pub mod cli;
pub mod commands;
pub mod handlers_auth;
pub mod handlers_booking;
pub mod handlers_doctor;
pub mod handlers_patient;
pub mod handlers_theme;
pub mod handlers_utils;

pub use cli::{start_cli, PortalContext};
pub use commands::{
    CliArgs, DoctorCommand, DoctorsCommand, PatientCommand, PortalCommand, RoleArg, ThemeCommand,
};

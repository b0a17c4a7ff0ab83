// portal/src/lib.rs

// Headless client for the clinic web application. Every page is a
// controller over an explicit set of render targets; the remote JSON API
// and the browser's local storage sit behind traits.

pub mod api;
pub mod auth;
pub mod booking;
pub mod config;
pub mod doctor_dashboard;
pub mod errors;
mod fetch;
pub mod page;
pub mod patient_dashboard;
pub mod render;
pub mod session;
pub mod storage;
pub mod theme;
#[cfg(test)]
mod testing;

pub use api::{ClinicApi, HttpClinicApi};
pub use config::{load_portal_config, PortalConfig};
pub use errors::{ApiError, ApiResult, StorageError};
pub use page::{GuardRejection, MessageSlot, Navigation, Region, RegionState, SubmitOutcome, Tone};
pub use storage::{FileStorage, LocalStorage, MemoryStorage};

// models/src/lib.rs

// View models and request bodies exchanged with the clinic HTTP API,
// plus the small pieces of state the portal persists locally.

pub mod errors;
pub mod medical;
pub mod session;
pub mod theme;

pub use errors::{require, ValidationError, ValidationResult};
pub use medical::*;
pub use session::{Role, Session};
pub use theme::{Theme, THEME_STORAGE_KEY};

// models/src/session.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the clinic a session belongs to. Each role keeps its
/// session under its own pair of local-storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Patient, Role::Doctor];

    pub fn id_key(self) -> &'static str {
        match self {
            Role::Patient => "patient_id",
            Role::Doctor => "doctor_id",
        }
    }

    pub fn name_key(self) -> &'static str {
        match self {
            Role::Patient => "patient_name",
            Role::Doctor => "doctor_name",
        }
    }

    /// Page a signed-out user of this role is sent to.
    pub fn entry_page(self) -> &'static str {
        match self {
            Role::Patient => "/",
            Role::Doctor => "/doctor/login",
        }
    }

    pub fn dashboard_page(self) -> &'static str {
        match self {
            Role::Patient => "/dashboard",
            Role::Doctor => "/doctor/dashboard",
        }
    }

    pub fn welcome(self, display_name: &str) -> String {
        match self {
            Role::Patient => format!("Welcome, {}!", display_name),
            Role::Doctor => format!("Welcome, Dr. {}!", display_name),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Doctor => write!(f, "doctor"),
        }
    }
}

/// A locally persisted login. Presence is all the portal checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub id: i64,
    pub display_name: String,
}

impl Session {
    pub fn welcome(&self) -> String {
        self.role.welcome(&self.display_name)
    }
}

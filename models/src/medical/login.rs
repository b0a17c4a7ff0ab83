// models/src/medical/login.rs

use serde::{Deserialize, Serialize};

/// Body of both login endpoints.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Keeps passwords out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body the API sends with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn should_not_leak_password_in_debug_output() {
        let creds = Credentials { email: "a@b.c".into(), password: "hunter2".into() };
        let dbg = format!("{:?}", creds);
        assert!(dbg.contains("a@b.c"));
        assert!(!dbg.contains("hunter2"));
    }
}

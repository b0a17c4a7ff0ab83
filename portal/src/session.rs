// portal/src/session.rs

// Session guard for protected pages. A stored identifier is taken as proof
// of login; nothing here ever asks the server whether it is still valid.

use log::{info, warn};
use models::{Role, Session};

use crate::errors::StorageResult;
use crate::page::{GuardRejection, Navigation};
use crate::storage::LocalStorage;

pub const NOT_LOGGED_IN_NOTICE: &str = "You are not logged in. Redirecting to login page.";
pub const LOGGED_OUT_NOTICE: &str = "You have been logged out.";

/// Reads the session for `role`, or the rejection to act on when there is
/// none. An identifier that is not an integer counts as absent.
pub fn require_session(
    storage: &dyn LocalStorage,
    role: Role,
    notice: &'static str,
) -> Result<Session, GuardRejection> {
    let rejection = GuardRejection { notice, redirect: role.entry_page() };

    let Some(raw_id) = storage.get(role.id_key()) else {
        info!("No {} session stored; redirecting to {}", role, role.entry_page());
        return Err(rejection);
    };
    let id = raw_id.trim().parse::<i64>().map_err(|_| {
        warn!("Stored {} is not an integer: {:?}", role.id_key(), raw_id);
        rejection.clone()
    })?;

    Ok(Session {
        role,
        id,
        display_name: storage.get(role.name_key()).unwrap_or_default(),
    })
}

/// Persists a fresh login.
pub fn store_session(storage: &dyn LocalStorage, session: &Session) -> StorageResult<()> {
    storage.set(session.role.id_key(), &session.id.to_string())?;
    storage.set(session.role.name_key(), &session.display_name)?;
    info!("Stored {} session {}", session.role, session.id);
    Ok(())
}

/// Removes every stored session (both roles) and sends the user to the
/// entry page of `role`. The theme preference survives.
pub fn logout(storage: &dyn LocalStorage, role: Role) -> StorageResult<Navigation> {
    for r in Role::ALL {
        storage.remove(r.id_key())?;
        storage.remove(r.name_key())?;
    }
    info!("Logged out ({})", role);
    Ok(Navigation::to(role.entry_page()).with_notice(LOGGED_OUT_NOTICE))
}

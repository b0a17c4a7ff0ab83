// portal/src/theme.rs

use std::sync::Arc;

use log::debug;
use models::{Theme, THEME_STORAGE_KEY};

use crate::errors::StorageResult;
use crate::storage::LocalStorage;

/// What applying a theme does to the page chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTheme {
    pub theme: Theme,
    pub body_classes: [&'static str; 2],
    pub toggle_label: &'static str,
    pub icon: &'static str,
}

impl From<Theme> for AppliedTheme {
    fn from(theme: Theme) -> Self {
        AppliedTheme {
            theme,
            body_classes: ["app-theme", theme.body_class()],
            toggle_label: theme.toggle_label(),
            icon: theme.icon(),
        }
    }
}

/// Light/dark switch present on every page, independent of any session.
pub struct ThemeToggle {
    storage: Arc<dyn LocalStorage>,
    applied: AppliedTheme,
}

impl ThemeToggle {
    /// Applies the stored preference, or light when there is none. Nothing
    /// is written until the first toggle.
    pub fn init(storage: Arc<dyn LocalStorage>) -> Self {
        let theme = Theme::from_stored(storage.get(THEME_STORAGE_KEY).as_deref());
        debug!("Applying initial theme {}", theme);
        ThemeToggle { storage, applied: theme.into() }
    }

    pub fn applied(&self) -> &AppliedTheme {
        &self.applied
    }

    pub fn current(&self) -> Theme {
        self.applied.theme
    }

    pub fn toggle(&mut self) -> StorageResult<&AppliedTheme> {
        let next = self.current().toggled();
        self.storage.set(THEME_STORAGE_KEY, next.as_str())?;
        self.applied = next.into();
        debug!("Theme switched to {}", next);
        Ok(&self.applied)
    }
}

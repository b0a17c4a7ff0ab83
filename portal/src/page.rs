// portal/src/page.rs

// Page-level building blocks shared by every controller: render targets
// guarded by a latest-request token, status-message lines, toggleable
// controls and navigation results.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use log::debug;
use maud::Markup;
use models::ValidationError;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::errors::{ApiError, NETWORK_ERROR_MESSAGE};
use crate::render;

/// Ticket handed out when a request for a region is issued. Only the most
/// recently issued ticket may replace the region's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// What a region currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionState {
    /// Nothing has been committed yet (or a request is still in flight).
    #[default]
    Untouched,
    Records(usize),
    Empty,
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionView {
    pub state: RegionState,
    pub html: String,
}

/// A render target owned by exactly one fetcher.
#[derive(Debug)]
pub struct Region {
    id: &'static str,
    latest: AtomicU64,
    view: Mutex<RegionView>,
}

impl Region {
    pub fn new(id: &'static str) -> Self {
        Region { id, latest: AtomicU64::new(0), view: Mutex::new(RegionView::default()) }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Registers a new request for this region, superseding any request
    /// still in flight.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Replaces the whole content of the region if `token` is still the
    /// latest one issued. Returns whether the write happened.
    pub async fn commit(&self, token: RequestToken, state: RegionState, markup: Markup) -> bool {
        let mut view = self.view.lock().await;
        if !self.is_current(token) {
            debug!(
                "Discarding stale completion for #{} (token {}, latest {})",
                self.id,
                token.0,
                self.latest.load(Ordering::SeqCst)
            );
            return false;
        }
        *view = RegionView { state, html: markup.into_string() };
        true
    }

    pub async fn view(&self) -> RegionView {
        self.view.lock().await.clone()
    }

    pub async fn state(&self) -> RegionState {
        self.view.lock().await.state.clone()
    }

    pub async fn html(&self) -> String {
        self.view.lock().await.html.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "text-green-600",
            Tone::Error => "text-red-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub tone: Tone,
    pub text: String,
}

/// The one-line message area under a form.
#[derive(Debug, Default)]
pub struct MessageSlot {
    current: Mutex<Option<StatusMessage>>,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn success(&self, text: impl Into<String>) {
        *self.current.lock().await = Some(StatusMessage { tone: Tone::Success, text: text.into() });
    }

    pub async fn error(&self, text: impl Into<String>) {
        *self.current.lock().await = Some(StatusMessage { tone: Tone::Error, text: text.into() });
    }

    pub async fn clear(&self) {
        *self.current.lock().await = None;
    }

    pub async fn current(&self) -> Option<StatusMessage> {
        self.current.lock().await.clone()
    }

    /// Shows the failure of a submission and classifies it.
    pub(crate) async fn report(&self, err: &ApiError) -> SubmitOutcome {
        self.report_with(err, NETWORK_ERROR_MESSAGE).await
    }

    /// Like `report`, with the text shown when no server `error` arrived.
    pub(crate) async fn report_with(&self, err: &ApiError, network_text: &str) -> SubmitOutcome {
        self.error(err.form_message(network_text)).await;
        match err {
            ApiError::Application { message, .. } => SubmitOutcome::Rejected(message.clone()),
            _ => SubmitOutcome::NetworkFailure,
        }
    }

    pub async fn html(&self) -> String {
        match self.current().await {
            Some(message) => render::status_message(&message).into_string(),
            None => String::new(),
        }
    }
}

/// A button that can be disabled, e.g. the pharmacy order submit.
#[derive(Debug, Default)]
pub struct Control {
    enabled: AtomicBool,
}

impl Control {
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

/// A request to leave the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Blocking notice shown before leaving, if any.
    pub notice: Option<String>,
    pub to: &'static str,
    pub delay: Duration,
}

impl Navigation {
    pub fn to(to: &'static str) -> Self {
        Navigation { notice: None, to, delay: Duration::ZERO }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A protected page refused to open because no session is stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{notice}")]
pub struct GuardRejection {
    pub notice: &'static str,
    pub redirect: &'static str,
}

impl GuardRejection {
    pub fn navigation(&self) -> Navigation {
        Navigation::to(self.redirect).with_notice(self.notice)
    }
}

/// How a form submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; no request was sent.
    Invalid(ValidationError),
    /// The form could not be submitted in the current page state
    /// (e.g. no appointment selected); nothing happened.
    Ignored,
    Accepted,
    /// The API answered non-2xx; carries the server's error text.
    Rejected(String),
    NetworkFailure,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    #[tokio::test]
    async fn should_keep_newest_content_when_completions_arrive_out_of_order() {
        let region = Region::new("doctor-list");
        let older = region.begin();
        let newer = region.begin();

        assert!(region.commit(newer, RegionState::Records(1), html! { p { "new" } }).await);
        assert!(!region.commit(older, RegionState::Empty, html! { p { "old" } }).await);

        let view = region.view().await;
        assert_eq!(view.state, RegionState::Records(1));
        assert_eq!(view.html, "<p>new</p>");
    }

    #[tokio::test]
    async fn should_replace_rather_than_append() {
        let region = Region::new("appointments-list");
        let first = region.begin();
        region.commit(first, RegionState::Records(1), html! { li { "a" } }).await;
        let second = region.begin();
        region.commit(second, RegionState::Records(1), html! { li { "a" } }).await;

        assert_eq!(region.html().await, "<li>a</li>");
    }

    #[tokio::test]
    async fn should_render_message_with_tone_class() {
        let slot = MessageSlot::new();
        assert_eq!(slot.html().await, "");
        slot.error("Error: nope").await;
        let html = slot.html().await;
        assert!(html.contains("text-red-600"));
        assert!(html.contains("Error: nope"));
        slot.clear().await;
        assert_eq!(slot.current().await, None);
    }

    #[test]
    fn should_turn_rejection_into_navigation() {
        let rejection = GuardRejection { notice: "go away", redirect: "/" };
        let nav = rejection.navigation();
        assert_eq!(nav.to, "/");
        assert_eq!(nav.notice.as_deref(), Some("go away"));
        assert_eq!(nav.delay, Duration::ZERO);
    }
}

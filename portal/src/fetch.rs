// portal/src/fetch.rs

use std::future::Future;

use log::{debug, warn};
use maud::Markup;

use crate::errors::ApiResult;
use crate::page::{Region, RegionState};
use crate::render::{self, Slot};

/// Fixed presentation of one list region.
pub(crate) struct ListLayout<T> {
    pub slot: Slot,
    pub empty_text: &'static str,
    /// Shown for any non-2xx answer, whatever its body.
    pub failure_text: &'static str,
    pub error_prefix: &'static str,
    pub item: fn(&T) -> Markup,
}

/// Runs one read and renders its result into `region`. Never fails: every
/// outcome ends up as region content. Returns the records only when they
/// were actually committed, so callers can update dependent state without
/// racing a newer request.
pub(crate) async fn fetch_into<T, F>(region: &Region, layout: &ListLayout<T>, request: F) -> Option<Vec<T>>
where
    F: Future<Output = ApiResult<Vec<T>>>,
{
    let token = region.begin();
    debug!("Fetching #{}", region.id());

    match request.await {
        Ok(records) if records.is_empty() => {
            let markup = render::empty_state(layout.slot, layout.empty_text);
            region.commit(token, RegionState::Empty, markup).await.then_some(records)
        }
        Ok(records) => {
            let markup = render::records(&records, layout.item);
            debug!("#{}: {} records", region.id(), records.len());
            region
                .commit(token, RegionState::Records(records.len()), markup)
                .await
                .then_some(records)
        }
        Err(err) => {
            let reason = if err.is_status_failure() {
                layout.failure_text.to_string()
            } else {
                err.to_string()
            };
            warn!("#{} failed: {}", region.id(), err);
            let markup = render::error_line(layout.slot, layout.error_prefix, &reason);
            region.commit(token, RegionState::Error(reason), markup).await;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use maud::html;
    use tokio::sync::oneshot;

    fn things() -> ListLayout<String> {
        ListLayout {
            slot: Slot::ListItem,
            empty_text: "Nothing here.",
            failure_text: "Failed to fetch things",
            error_prefix: "Error: ",
            item: |s| html! { li data-kind="record" { (s) } },
        }
    }

    #[tokio::test]
    async fn should_render_one_placeholder_for_empty_collection() {
        let region = Region::new("things");
        let out = fetch_into(&region, &things(), async { Ok(Vec::new()) }).await;

        assert_eq!(out, Some(vec![]));
        let view = region.view().await;
        assert_eq!(view.state, RegionState::Empty);
        assert_eq!(view.html.matches(r#"data-kind="empty""#).count(), 1);
        assert_eq!(view.html.matches(r#"data-kind="record""#).count(), 0);
    }

    #[tokio::test]
    async fn should_render_generic_text_for_server_errors() {
        let region = Region::new("things");
        let out = fetch_into(&region, &things(), async {
            Err(ApiError::Application { status: 500, message: "db down".into() })
        })
        .await;

        assert_eq!(out, None);
        let view = region.view().await;
        assert_eq!(view.state, RegionState::Error("Failed to fetch things".into()));
        assert_eq!(view.html.matches(r#"data-kind="error""#).count(), 1);
        assert!(!view.html.contains("db down"));
    }

    #[tokio::test]
    async fn should_render_generic_text_for_bodyless_error_pages() {
        let region = Region::new("things");
        fetch_into(&region, &things(), async { Err(ApiError::Status { status: 502 }) }).await;

        let view = region.view().await;
        assert_eq!(view.state, RegionState::Error("Failed to fetch things".into()));
        assert!(!view.html.contains("502"));
    }

    #[tokio::test]
    async fn should_surface_transport_reason() {
        let region = Region::new("things");
        fetch_into(&region, &things(), async { Err(ApiError::Transport("connection refused".into())) }).await;

        assert!(region.html().await.contains("connection refused"));
    }

    #[tokio::test]
    async fn should_render_identically_when_refetched() {
        let region = Region::new("things");
        let data = vec!["a".to_string(), "b".to_string()];
        fetch_into(&region, &things(), async { Ok(data.clone()) }).await;
        let first = region.view().await;
        fetch_into(&region, &things(), async { Ok(data.clone()) }).await;

        assert_eq!(region.view().await, first);
        assert_eq!(first.state, RegionState::Records(2));
    }

    #[tokio::test]
    async fn should_drop_superseded_completion() {
        let region = Region::new("things");
        let layout = things();
        let (slow_tx, slow_rx) = oneshot::channel::<Vec<String>>();

        let slow = fetch_into(&region, &layout, async move { Ok(slow_rx.await.unwrap()) });
        let fast = async {
            tokio::task::yield_now().await;
            let out = fetch_into(&region, &layout, async { Ok(vec!["fresh".to_string()]) }).await;
            slow_tx.send(vec!["stale".to_string()]).unwrap();
            out
        };
        let (slow_out, fast_out) = tokio::join!(slow, fast);

        assert_eq!(slow_out, None);
        assert_eq!(fast_out, Some(vec!["fresh".to_string()]));
        let html = region.html().await;
        assert!(html.contains("fresh"));
        assert!(!html.contains("stale"));
    }
}

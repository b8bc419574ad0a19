//! Background worker draining the click-event queue.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ClickRepository;

/// Processes click events until the channel closes.
///
/// For each event the worker appends a row to the click log and increments
/// the link's counter, both bounded by `record_timeout`. Failures and
/// timeouts are logged and the event is dropped; there are no retries and
/// nothing propagates back to the redirect path.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    clicks: Arc<dyn ClickRepository>,
    record_timeout: Duration,
) {
    while let Some(event) = rx.recv().await {
        let result = tokio::time::timeout(record_timeout, async {
            clicks.append_click(&event.short_code).await?;
            clicks.increment_click_count(&event.short_code).await
        })
        .await;

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Failed to record click for {}: {}", event.short_code, e),
            Err(_) => warn!(
                "Click recording for {} timed out after {:?}, event dropped",
                event.short_code, record_timeout
            ),
        }
    }
}

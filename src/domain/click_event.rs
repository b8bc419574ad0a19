//! Click event model for asynchronous click tracking.

/// An in-memory click event passed from the redirect path to the background
/// worker via a bounded channel.
///
/// Carries only the short code; the timestamp is assigned by the store when
/// the worker persists the event. Sending is fire-and-forget: the redirect
/// response never waits on recording, and a full queue drops the event.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub short_code: String,
}

impl ClickEvent {
    pub fn new(short_code: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_creation() {
        let event = ClickEvent::new("abc123");
        assert_eq!(event.short_code, "abc123");
    }

    #[test]
    fn test_click_event_clone() {
        let event = ClickEvent::new("xyz");
        let cloned = event.clone();
        assert_eq!(cloned.short_code, event.short_code);
    }
}

use sentry::{protocol::Event, Hub, Level};

/// Capture a test event on the active hub, returning its ID.
pub fn send_test_event(message: Option<String>) -> String {
    let event = Event {
        message: Some(message.unwrap_or_else(|| "This is a test".into())),
        level: Level::Info,
        ..Default::default()
    };

    Hub::with_active(|hub| hub.capture_event(event)).to_string()
}

//! Integration tests for diagnostics emitted through `tracing`
//!
//! A capturing layer records every event raised while a closure runs.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use sundry::foundation::{Error, to_json};

// =============================================================================
// Capture Layer
// =============================================================================

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    fields: Vec<(String, String)>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .push((field.name().to_string(), format!("{value:?}")));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        if let Ok(mut events) = self.events.lock() {
            events.push(Captured {
                level: *event.metadata().level(),
                fields: visitor.fields,
            });
        }
    }
}

fn capture(f: impl FnOnce()) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let subscriber = Registry::default().with(layer.clone());
    tracing::subscriber::with_default(subscriber, f);
    let events = layer.events.lock().unwrap();
    events.clone()
}

// =============================================================================
// Emitted Events
// =============================================================================

#[test]
fn located_errors_log_at_debug() {
    let events = capture(|| {
        let _ = Error::invalid_param("chunk size must be positive");
    });
    let event = events
        .iter()
        .find(|e| e.field("error_type") == Some("invalid_param"))
        .expect("debug event for invalid_param");
    assert_eq!(event.level, Level::DEBUG);
    assert!(event.field("call_site").unwrap().contains("logging.rs"));
    assert!(event.field("message").unwrap().contains("chunk size"));
}

#[test]
fn serialization_failures_log_at_warn() {
    let events = capture(|| {
        let map = std::collections::HashMap::from([((1, 2), "tuple key")]);
        assert!(to_json(&map).is_err());
    });
    assert!(
        events
            .iter()
            .any(|e| e.level == Level::WARN
                && e.field("message").is_some_and(|m| m.contains("serialization failed")))
    );
}

#[test]
fn unlocated_errors_are_silent() {
    let events = capture(|| {
        let _ = Error::new(sundry::ErrorKind::DuplicateKey("k".to_string()));
    });
    assert!(events.is_empty());
}

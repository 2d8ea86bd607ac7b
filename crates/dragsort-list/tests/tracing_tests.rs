#![forbid(unsafe_code)]

//! Tracing integration tests for the drag loop.
//!
//! Spans enabled:
//!   cargo test -p dragsort-list --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p dragsort-list --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dragsort_core::{DragConfig, HostEvent, PointerSample};
use dragsort_list::{DragSession, Item, ViewHost};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    level: tracing::Level,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records spans and events.
struct Capture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn spans_named(&self, name: &str) -> Vec<CapturedSpan> {
        self.spans().into_iter().filter(|s| s.name == name).collect()
    }

    #[allow(dead_code)]
    fn messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| e.fields.get("message").cloned())
            .collect()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = Capture {
        spans: spans.clone(),
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans, events }
}

struct NullHost;

impl ViewHost for NullHost {
    fn scroll_to_offset(&mut self, _offset: f32, _animated: bool) {}
    fn request_next_frame(&mut self) {}
}

/// 15 rows of 60px in a 1000px viewport; drag row 3 to row 7 and release.
fn run_drag(ticks: usize) {
    let items: Vec<Item> = (1..=15).map(|id| Item::new(id, id.to_string())).collect();
    let mut session = DragSession::new(items, DragConfig::default());
    let mut host = NullHost;
    session.handle_event(HostEvent::ViewportMeasured { height: 1_000.0 }, &mut host);
    session.handle_event(HostEvent::RowMeasured { height: 60.0 }, &mut host);
    session.handle_event(HostEvent::GestureStart(PointerSample::at_y(265.0)), &mut host);
    session.handle_event(HostEvent::GestureMove(PointerSample::at_y(505.0)), &mut host);
    for _ in 0..ticks {
        session.handle_event(HostEvent::Frame, &mut host);
    }
    session.handle_event(HostEvent::GestureEnd, &mut host);
    // Idle frames must not open a span.
    session.handle_event(HostEvent::Frame, &mut host);
}

// ============================================================================
// Tests
// ============================================================================

/// One `drag_tick` span per tick while dragging.
#[test]
#[cfg(feature = "tracing")]
fn one_span_per_active_tick() {
    let handle = with_captured(|| run_drag(4));
    let ticks = handle.spans_named("drag_tick");
    assert_eq!(ticks.len(), 4, "got {ticks:?}");
}

#[test]
#[cfg(feature = "tracing")]
fn tick_span_records_drag_state() {
    let handle = with_captured(|| run_drag(2));
    let ticks = handle.spans_named("drag_tick");
    let first = &ticks[0];
    assert_eq!(first.fields.get("drag_index").map(String::as_str), Some("3"));
    assert_eq!(first.fields.get("y").map(String::as_str), Some("505"));
    assert!(first.fields.contains_key("scroll"));
    // The reorder happened in the first tick.
    assert_eq!(ticks[1].fields.get("drag_index").map(String::as_str), Some("7"));
}

#[test]
#[cfg(feature = "tracing")]
fn lifecycle_events_are_logged() {
    let handle = with_captured(|| run_drag(1));
    let messages = handle.messages();
    for expected in ["drag started", "reordered", "drag released"] {
        assert!(
            messages.iter().any(|m| m == expected),
            "missing {expected:?} in {messages:?}"
        );
    }
    let debug_only = handle
        .events()
        .iter()
        .filter(|e| e.fields.get("message").is_some_and(|m| m == "reordered"))
        .all(|e| e.level == tracing::Level::DEBUG);
    assert!(debug_only);
}

/// Without the feature, the instrumentation is compiled out entirely.
#[test]
fn zero_overhead_when_disabled() {
    let handle = with_captured(|| run_drag(3));
    let ticks = handle.spans_named("drag_tick");

    #[cfg(feature = "tracing")]
    assert_eq!(ticks.len(), 3);

    #[cfg(not(feature = "tracing"))]
    assert!(
        ticks.is_empty(),
        "Without tracing feature, no drag_tick spans should exist (got {})",
        ticks.len()
    );
}

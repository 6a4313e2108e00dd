//! Integration tests for dent-telemetry.

use dent_telemetry::bus::EventBus;
use dent_telemetry::events::{EventKind, SimulationEvent};
use dent_telemetry::sinks::{EventSink, SharedVecSink, TracingSink, VecSink};
use dent_types::RuntimeWarning;

#[test]
fn emit_and_flush_reaches_sink() {
    let sink = SharedVecSink::new();
    let mut bus = EventBus::new().with_sink(Box::new(sink.clone()));

    bus.emit(SimulationEvent::new(1, EventKind::TickBegin { dt: 0.016 }));
    bus.emit(SimulationEvent::new(
        1,
        EventKind::TickEnd {
            wall_time: 0.001,
            normals_refreshed: false,
        },
    ));
    assert!(sink.events().is_empty());

    assert_eq!(bus.flush(), 2);
    assert_eq!(bus.delivered(), 2);
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].tick, 1);
}

#[test]
fn disabled_bus_drops_events() {
    let sink = SharedVecSink::new();
    let mut bus = EventBus::new().with_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(SimulationEvent::new(0, EventKind::Reset));
    bus.flush();
    assert!(sink.events().is_empty());
}

#[test]
fn multiple_sinks() {
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(VecSink::new()));
    bus.add_sink(Box::new(TracingSink::new()));
    assert_eq!(bus.sink_count(), 2);
    assert_eq!(bus.sink_names(), vec!["vec_sink", "tracing_sink"]);
    bus.emit(SimulationEvent::new(
        0,
        EventKind::Warning(RuntimeWarning::HighVertexCount {
            vertex_count: 4000,
            threshold: 3000,
        }),
    ));
    bus.finish();
}

#[test]
fn vec_sink_collects() {
    let mut sink = VecSink::new();
    sink.handle(&SimulationEvent::new(3, EventKind::Reset));
    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.name(), "vec_sink");
}

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::Proximity {
            sampled: 10,
            affected: 4,
            penetrating: 1,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.tick, 5);
    assert!(json.contains("penetrating"));
}

#[test]
fn reaction_event_serialization() {
    let event = SimulationEvent::new(
        2,
        EventKind::Reaction {
            force: [0.0, -5.0, 0.0],
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("Reaction"));
}

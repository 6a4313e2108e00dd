//! # dent-telemetry
//!
//! Event bus for simulation telemetry. Emits structured events
//! (initialization, tick timing, proximity counts, reaction forces,
//! warnings) that can be consumed by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, SharedVecSink, TracingSink, VecSink};

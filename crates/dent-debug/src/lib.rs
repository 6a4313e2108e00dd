//! # dent-debug
//!
//! Inspection hooks, binary state snapshots and a read-only debug overlay
//! (probe sphere, influence sphere, reaction ray) for a running simulator.

pub mod hooks;
pub mod overlay;
pub mod snapshot;

pub use hooks::{InspectionHook, TelemetryHook};
pub use overlay::{Color, DebugOverlay, DebugShape};
pub use snapshot::StateSnapshot;

//! # dent-bench
//!
//! Benchmark suite and headless host driver for the deformation simulator.
//!
//! Provides three procedural scenarios, a driver loop that plays the role
//! of the engine (moving the probe, receiving the reaction force, handing
//! frames to a renderer), and CSV/JSON metric export.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::{BenchmarkRunner, RunOutput};
pub use scenarios::{Scenario, ScenarioKind};

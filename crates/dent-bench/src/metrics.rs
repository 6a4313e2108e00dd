//! Benchmark metrics — data collected during a run.

use dent_types::{DentError, DentResult};
use serde::{Deserialize, Serialize};

/// Metrics collected from one scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Number of ticks that ran.
    pub ticks: u32,
    /// Average wall-clock time per tick (seconds).
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    /// Largest displacement from rest seen at any frame.
    pub max_displacement: f32,
    /// Displacement from rest after the last frame.
    pub final_displacement: f32,
    /// Kinetic energy left in the mesh after the last frame (unit mass).
    pub final_kinetic_energy: f64,
    /// Σ |reaction| · dt over the frames where a reaction was applied.
    pub total_reaction_impulse: f32,
    /// Frames on which a reaction force was applied to the probe.
    pub reaction_frames: u32,
    /// Mean affected (influenced + penetrating) sampled vertices per tick.
    pub avg_affected: f32,
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Warnings raised at initialization.
    pub warnings: usize,
}

impl BenchmarkMetrics {
    pub fn to_csv_header() -> String {
        "scenario,vertex_count,triangle_count,ticks,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,max_displacement,final_displacement,final_kinetic_energy,reaction_impulse,reaction_frames,avg_affected,warnings".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6},{:.6},{:.6},{:.6},{},{:.2},{}",
            self.scenario,
            self.vertex_count,
            self.triangle_count,
            self.ticks,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.max_displacement,
            self.final_displacement,
            self.final_kinetic_energy,
            self.total_reaction_impulse,
            self.reaction_frames,
            self.avg_affected,
            self.warnings,
        )
    }

    /// Header plus one row per entry.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }

    pub fn to_json(metrics: &[BenchmarkMetrics]) -> DentResult<String> {
        serde_json::to_string_pretty(metrics).map_err(|e| DentError::Serialization(e.to_string()))
    }
}

//! The deformation simulator component.
//!
//! Two states: `Uninitialized` (only [`initialize`](DeformationSimulator::initialize)
//! does anything) and `Ready`. There is no terminal state; a failed
//! initialization drops back to `Uninitialized` and the caller may try
//! again with corrected input.

use std::time::Instant;

use dent_math::{MeshTransform, Vec3};
use dent_mesh::bounds::{compute_bounds, Aabb};
use dent_mesh::normals::compute_vertex_normals;
use dent_mesh::TriangleMesh;
use dent_telemetry::{EventBus, EventKind, SimulationEvent};
use dent_types::constants::HIGH_VERTEX_COUNT_THRESHOLD;
use dent_types::{DentError, DentResult, RuntimeWarning};

use crate::config::SimulationParams;
use crate::integrator::Integrator;
use crate::probe::{ProbeBody, SphereProbe};
use crate::proximity::{ProbeFrame, Zone};
use crate::smoothing::{blend_temporal, fill_skipped, sample_count, sample_indices};
use crate::state::GeometryCache;

/// Summary of a successful initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct InitReport {
    pub vertex_count: usize,
    /// Non-fatal diagnostics raised while initializing.
    pub warnings: Vec<RuntimeWarning>,
}

/// Why a tick did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `initialize` has not succeeded yet.
    Uninitialized,
    /// No probe was supplied this frame.
    NoProbe,
    /// `dt` was negative or not finite.
    InvalidTimestep,
    /// The output mesh rejected the position buffer. The geometry cache
    /// advanced but the mesh still holds the previous frame.
    OutputRejected,
}

/// Result of a completed tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// 1-based tick index.
    pub tick: u64,
    /// Vertices classified and integrated directly.
    pub sampled: usize,
    /// Sampled vertices in the influenced or penetrating zone.
    pub affected: usize,
    /// Sampled vertices in the penetrating zone.
    pub penetrating: usize,
    /// Sum of reaction contributions (world frame), before thresholding.
    pub accumulated_reaction: Vec3,
    /// Force to apply to the probe this frame, if any.
    pub reaction: Option<Vec3>,
    /// Whether vertex normals were recomputed.
    pub normals_refreshed: bool,
    /// Mesh-local bounds after the tick.
    pub bounds: Aabb,
    /// Wall-clock time for the tick (seconds).
    pub wall_time: f64,
}

/// Outcome of [`DeformationSimulator::tick`].
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Skipped(SkipReason),
    Stepped(TickReport),
}

impl TickOutcome {
    /// The report, if the tick ran.
    pub fn report(&self) -> Option<&TickReport> {
        match self {
            TickOutcome::Stepped(report) => Some(report),
            TickOutcome::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TickOutcome::Skipped(_))
    }
}

struct Ready {
    cache: GeometryCache,
    /// Private copy of the source mesh; its positions are the output buffer.
    mesh: TriangleMesh,
}

enum Lifecycle {
    Uninitialized,
    Ready(Box<Ready>),
}

/// Locally reactive displacement-and-recovery of one mesh against one
/// spherical probe.
///
/// ```text
/// let mut sim = DeformationSimulator::new(SimulationParams::default());
/// sim.initialize(Some(&mesh))?;
/// loop {
///     sim.tick_with_body(Some(&probe), dt, &mut rigid_body);
///     renderer.upload(sim.positions());
/// }
/// ```
pub struct DeformationSimulator {
    params: SimulationParams,
    transform: MeshTransform,
    lifecycle: Lifecycle,
    bus: Option<EventBus>,
    tick_count: u64,
    affected_vertex_count: usize,
    last_reaction: Vec3,
}

impl DeformationSimulator {
    /// Creates an uninitialized simulator.
    pub fn new(params: SimulationParams) -> Self {
        Self {
            params,
            transform: MeshTransform::IDENTITY,
            lifecycle: Lifecycle::Uninitialized,
            bus: None,
            tick_count: 0,
            affected_vertex_count: 0,
            last_reaction: Vec3::ZERO,
        }
    }

    /// Sets where the mesh sits in the world.
    pub fn with_transform(mut self, transform: MeshTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Attaches a telemetry bus. Events are flushed at the end of each tick.
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    // ─── Lifecycle ────────────────────────────────────────────

    /// Copies `source` into the geometry cache and the output buffer.
    ///
    /// # Errors
    /// - [`DentError::MissingGeometry`] if `source` is `None` or empty.
    /// - [`DentError::UnreadableGeometry`] if the mesh is flagged as not
    ///   CPU-readable or its buffers are inconsistent.
    ///
    /// On error the simulator is left uninitialized.
    pub fn initialize(&mut self, source: Option<&TriangleMesh>) -> DentResult<InitReport> {
        match Self::build_ready(source) {
            Ok(ready) => {
                let vertex_count = ready.cache.vertex_count();
                self.lifecycle = Lifecycle::Ready(Box::new(ready));
                self.tick_count = 0;
                self.affected_vertex_count = 0;
                self.last_reaction = Vec3::ZERO;

                tracing::info!(vertex_count, "mesh initialized");
                self.emit(EventKind::Initialized { vertex_count });

                let mut warnings = Vec::new();
                if vertex_count > HIGH_VERTEX_COUNT_THRESHOLD {
                    let warning = RuntimeWarning::HighVertexCount {
                        vertex_count,
                        threshold: HIGH_VERTEX_COUNT_THRESHOLD,
                    };
                    tracing::warn!(%warning, "performance warning");
                    self.emit(EventKind::Warning(warning));
                    warnings.push(warning);
                }
                self.flush_events();

                Ok(InitReport {
                    vertex_count,
                    warnings,
                })
            }
            Err(err) => {
                self.lifecycle = Lifecycle::Uninitialized;
                tracing::warn!(error = %err, "mesh initialization failed");
                self.emit(EventKind::InitFailed {
                    reason: err.to_string(),
                });
                self.flush_events();
                Err(err)
            }
        }
    }

    fn build_ready(source: Option<&TriangleMesh>) -> DentResult<Ready> {
        let source = source.ok_or(DentError::MissingGeometry)?;
        if !source.readable {
            return Err(DentError::UnreadableGeometry(
                "vertex data is not CPU-readable; enable read/write on the asset".into(),
            ));
        }
        if source.vertex_count() == 0 {
            return Err(DentError::MissingGeometry);
        }
        source
            .validate()
            .map_err(|e| DentError::UnreadableGeometry(e.to_string()))?;

        let mut mesh = source.clone();
        compute_bounds(&mut mesh);
        let cache = GeometryCache::from_rest(mesh.positions())?;
        Ok(Ready { cache, mesh })
    }

    /// Restores the rest pose, zeroes velocities and refreshes normals and
    /// bounds immediately.
    ///
    /// Returns `false` when uninitialized, or when the output mesh rejects
    /// the rest pose.
    pub fn reset(&mut self) -> bool {
        let Lifecycle::Ready(ready) = &mut self.lifecycle else {
            return false;
        };
        let Ready { cache, mesh } = &mut **ready;
        cache.reset();
        if let Err(err) = mesh.write_positions(cache.current()) {
            tracing::error!(error = %err, "reset could not publish the rest pose");
            return false;
        }
        compute_vertex_normals(mesh);
        compute_bounds(mesh);

        self.affected_vertex_count = 0;
        self.last_reaction = Vec3::ZERO;
        self.emit(EventKind::Reset);
        self.flush_events();
        true
    }

    // ─── Simulation ───────────────────────────────────────────

    /// Advances the simulation by one frame.
    ///
    /// Skips (with no state change) when uninitialized, when `probe` is
    /// `None`, or when `dt` is negative or not finite.
    pub fn tick(&mut self, probe: Option<&SphereProbe>, dt: f32) -> TickOutcome {
        if !self.is_ready() {
            return TickOutcome::Skipped(SkipReason::Uninitialized);
        }
        let Some(probe) = probe else {
            return TickOutcome::Skipped(SkipReason::NoProbe);
        };
        if !dt.is_finite() || dt < 0.0 {
            return TickOutcome::Skipped(SkipReason::InvalidTimestep);
        }

        let start = Instant::now();
        let params = self.params.sanitized();
        let transform = self.transform;
        self.tick_count += 1;
        let tick = self.tick_count;
        self.emit(EventKind::TickBegin { dt });

        let Lifecycle::Ready(ready) = &mut self.lifecycle else {
            return TickOutcome::Skipped(SkipReason::Uninitialized);
        };

        let frame = ProbeFrame::new(
            transform.world_to_local_point(probe.center),
            transform.world_to_local_radius(probe.radius),
            params.influence_radius,
            params.prevent_penetration,
        );
        let integrator = Integrator::new(&params, &frame, dt);

        let Ready { cache, mesh } = &mut **ready;
        cache.save_previous();

        let GeometryCache {
            rest,
            current,
            previous,
            velocities,
        } = cache;
        let n = rest.len();
        let stride = params.vertex_stride;

        let mut affected = 0usize;
        let mut penetrating = 0usize;
        let mut accumulated = Vec3::ZERO;

        for i in sample_indices(n, stride) {
            let proximity = frame.classify(current[i]);
            if proximity.zone.is_affected() {
                affected += 1;
            }
            if proximity.zone == Zone::Penetrating {
                penetrating += 1;
            }

            if let Some(local) =
                integrator.step_vertex(rest[i], &mut current[i], &mut velocities[i], &proximity)
            {
                accumulated += transform.local_to_world_direction(local);
            }

            current[i] = blend_temporal(previous[i], current[i], params.smoothing_strength);
        }

        fill_skipped(current, stride);

        if let Err(err) = mesh.write_positions(current) {
            tracing::error!(tick, error = %err, "output mesh rejected positions");
            self.flush_events();
            return TickOutcome::Skipped(SkipReason::OutputRejected);
        }
        let normals_refreshed = tick % u64::from(params.normal_refresh_interval) == 0;
        if normals_refreshed {
            compute_vertex_normals(mesh);
        }
        compute_bounds(mesh);
        let bounds = mesh.bounds;

        let reaction = (params.prevent_penetration
            && accumulated.length_squared() > params.reaction_threshold)
            .then_some(accumulated);

        self.affected_vertex_count = affected;
        self.last_reaction = accumulated;

        let sampled = sample_count(n, stride);
        self.emit(EventKind::Proximity {
            sampled,
            affected,
            penetrating,
        });
        if let Some(force) = reaction {
            tracing::trace!(tick, ?force, "reaction force");
            self.emit(EventKind::Reaction {
                force: force.to_array(),
            });
        }

        let wall_time = start.elapsed().as_secs_f64();
        self.emit(EventKind::TickEnd {
            wall_time,
            normals_refreshed,
        });
        self.flush_events();

        TickOutcome::Stepped(TickReport {
            tick,
            sampled,
            affected,
            penetrating,
            accumulated_reaction: accumulated,
            reaction,
            normals_refreshed,
            bounds,
            wall_time,
        })
    }

    /// [`tick`](Self::tick), then applies the reaction force (if any) to
    /// `body`.
    pub fn tick_with_body(
        &mut self,
        probe: Option<&SphereProbe>,
        dt: f32,
        body: &mut dyn ProbeBody,
    ) -> TickOutcome {
        let outcome = self.tick(probe, dt);
        if let Some(force) = outcome.report().and_then(|r| r.reaction) {
            body.apply_force(force);
        }
        outcome
    }

    // ─── Accessors ────────────────────────────────────────────

    pub fn is_ready(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Ready(_))
    }

    /// Live vertex positions in mesh-local space. Empty when uninitialized.
    pub fn positions(&self) -> &[Vec3] {
        match &self.lifecycle {
            Lifecycle::Ready(ready) => ready.cache.current(),
            Lifecycle::Uninitialized => &[],
        }
    }

    /// The output mesh (positions, normals, bounds) for the renderer.
    pub fn mesh(&self) -> Option<&TriangleMesh> {
        match &self.lifecycle {
            Lifecycle::Ready(ready) => Some(&ready.mesh),
            Lifecycle::Uninitialized => None,
        }
    }

    pub fn cache(&self) -> Option<&GeometryCache> {
        match &self.lifecycle {
            Lifecycle::Ready(ready) => Some(&ready.cache),
            Lifecycle::Uninitialized => None,
        }
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Mutable access to the parameters; edits apply from the next tick.
    pub fn params_mut(&mut self) -> &mut SimulationParams {
        &mut self.params
    }

    pub fn set_params(&mut self, params: SimulationParams) {
        self.params = params;
    }

    pub fn transform(&self) -> &MeshTransform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: MeshTransform) {
        self.transform = transform;
    }

    /// Sampled vertices in the influenced or penetrating zone last tick.
    pub fn affected_vertex_count(&self) -> usize {
        self.affected_vertex_count
    }

    /// Vertex count of the initialized mesh, 0 when uninitialized.
    pub fn total_vertex_count(&self) -> usize {
        self.cache().map_or(0, GeometryCache::vertex_count)
    }

    /// Number of ticks run since initialization.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Reaction accumulated during the last tick (world frame).
    pub fn last_reaction(&self) -> Vec3 {
        self.last_reaction
    }

    pub fn event_bus_mut(&mut self) -> Option<&mut EventBus> {
        self.bus.as_mut()
    }

    // ─── Telemetry ────────────────────────────────────────────

    fn emit(&self, kind: EventKind) {
        if let Some(bus) = &self.bus {
            bus.emit(SimulationEvent::new(self.tick_count, kind));
        }
    }

    fn flush_events(&mut self) {
        if let Some(bus) = &mut self.bus {
            bus.flush();
        }
    }
}

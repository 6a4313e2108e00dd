//! Integration tests for dent-debug.

use dent_debug::hooks::{InspectionHook, TelemetryHook};
use dent_debug::overlay::{Color, DebugOverlay, DebugShape};
use dent_debug::snapshot::StateSnapshot;
use dent_math::{MeshTransform, Vec3};
use dent_mesh::generators::polyline;
use dent_solver::{DeformationSimulator, SimulationParams, SphereProbe};
use dent_telemetry::EventKind;

fn pressed_sim() -> (DeformationSimulator, SphereProbe) {
    let mesh = polyline(4, 1.0);
    let mut sim = DeformationSimulator::new(SimulationParams::responsive());
    sim.initialize(Some(&mesh)).unwrap();
    let probe = SphereProbe::new(Vec3::ZERO, 0.5);
    sim.tick(Some(&probe), 0.016);
    (sim, probe)
}

// ─── Hook Tests ───────────────────────────────────────────────

#[test]
fn telemetry_hook_collects_events() {
    let (mut sim, probe) = pressed_sim();
    let mut hook = TelemetryHook::new();
    hook.on_tick_begin(2, 0.016);
    let outcome = sim.tick(Some(&probe), 0.016);
    hook.on_tick_end(outcome.report().unwrap());

    let events = hook.drain_events();
    assert_eq!(events[0].tick, 2);
    assert!(matches!(events[0].kind, EventKind::TickBegin { .. }));
    assert!(matches!(
        events.last().map(|e| &e.kind),
        Some(EventKind::TickEnd { .. })
    ));
}

#[test]
fn hook_drain_clears() {
    let mut hook = TelemetryHook::new();
    hook.on_tick_begin(1, 0.016);
    hook.on_reset();
    assert_eq!(hook.drain_events().len(), 2);
    assert!(hook.drain_events().is_empty());
}

#[test]
fn hook_name() {
    assert_eq!(TelemetryHook::new().name(), "telemetry_hook");
}

// ─── Snapshot Tests ───────────────────────────────────────────

#[test]
fn snapshot_round_trip() {
    let (sim, _) = pressed_sim();
    let snap = StateSnapshot::from_cache(1, 0.016, sim.cache().unwrap());

    let bytes = snap.to_bytes().unwrap();
    let recovered = StateSnapshot::from_bytes(&bytes).unwrap();

    assert_eq!(recovered, snap);
    assert_eq!(recovered.vertex_count, 4);
    assert_eq!(recovered.positions.len(), 12);
}

#[test]
fn snapshot_interleaving() {
    let (sim, _) = pressed_sim();
    let snap = StateSnapshot::from_cache(1, 0.016, sim.cache().unwrap());
    assert_eq!(snap.position(0), sim.positions()[0]);
    assert_eq!(snap.rest_position(2), Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(snap.rest[6..9], [2.0, 0.0, 0.0]);
}

#[test]
fn snapshot_displacement_metrics() {
    let (sim, _) = pressed_sim();
    let snap = StateSnapshot::from_cache(1, 0.016, sim.cache().unwrap());
    assert!(snap.max_displacement() > 0.5);
    // Vertex 0 (pushed) and vertex 1 (influenced)
    assert_eq!(snap.displaced_count(1e-6), 2);
}

#[test]
fn snapshot_rejects_garbage() {
    assert!(StateSnapshot::from_bytes(&[1, 2, 3]).is_err());
}

#[test]
fn snapshot_rejects_mismatched_buffers() {
    let (sim, _) = pressed_sim();
    let mut snap = StateSnapshot::from_cache(1, 0.016, sim.cache().unwrap());
    snap.velocities.pop();
    let bytes = snap.to_bytes().unwrap();
    assert!(StateSnapshot::from_bytes(&bytes).is_err());
}

#[test]
fn snapshot_file_round_trip() {
    let (sim, _) = pressed_sim();
    let snap = StateSnapshot::from_cache(7, 0.112, sim.cache().unwrap());
    let path = std::env::temp_dir().join(format!("dent_snapshot_{}.bin", std::process::id()));
    snap.write_to(&path).unwrap();
    let recovered = StateSnapshot::read_from(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(recovered.tick, 7);
    assert_eq!(recovered, snap);
}

// ─── Overlay Tests ────────────────────────────────────────────

#[test]
fn overlay_draws_spheres_and_force_ray() {
    let (sim, probe) = pressed_sim();
    let shapes = DebugOverlay::default().shapes(&probe, &sim);
    assert_eq!(shapes.len(), 3);

    assert_eq!(
        shapes[0],
        DebugShape::WireSphere {
            center: Vec3::ZERO,
            radius: 0.5,
            color: Color::RED,
        }
    );
    assert!(matches!(
        shapes[1],
        DebugShape::WireSphere { radius, color, .. } if (radius - 1.5).abs() < 1e-6 && color == Color::YELLOW
    ));
    match shapes[2] {
        DebugShape::Ray {
            origin,
            direction,
            color,
        } => {
            assert_eq!(origin, Vec3::ZERO);
            assert_eq!(color, Color::CYAN);
            assert!((direction - Vec3::new(0.0, -0.25, 0.0)).length() < 1e-5);
        }
        other => panic!("expected ray, got {other:?}"),
    }
}

#[test]
fn overlay_scales_influence_with_transform() {
    let mesh = polyline(4, 1.0);
    let mut sim = DeformationSimulator::new(SimulationParams::default())
        .with_transform(MeshTransform::IDENTITY.with_uniform_scale(2.0));
    sim.initialize(Some(&mesh)).unwrap();
    let probe = SphereProbe::new(Vec3::splat(50.0), 0.5);
    let shapes = DebugOverlay::default().shapes(&probe, &sim);
    assert_eq!(shapes.len(), 2);
    assert!(matches!(
        shapes[1],
        DebugShape::WireSphere { radius, .. } if (radius - 2.5).abs() < 1e-6
    ));
}

#[test]
fn overlay_without_reaction_has_no_ray() {
    let mesh = polyline(4, 1.0);
    let mut sim = DeformationSimulator::new(SimulationParams::default());
    sim.initialize(Some(&mesh)).unwrap();
    let probe = SphereProbe::new(Vec3::new(0.0, 10.0, 0.0), 0.5);
    sim.tick(Some(&probe), 0.016);
    let shapes = DebugOverlay::default().shapes(&probe, &sim);
    assert!(shapes
        .iter()
        .all(|s| !matches!(s, DebugShape::Ray { .. })));
}

#[test]
fn disabled_overlay_is_empty() {
    let (sim, probe) = pressed_sim();
    let overlay = DebugOverlay {
        enabled: false,
        ..Default::default()
    };
    assert!(overlay.shapes(&probe, &sim).is_empty());
    assert!(overlay.lines(&probe, &sim).is_empty());
}

#[test]
fn sphere_tessellation_stays_on_surface() {
    let sphere = DebugShape::WireSphere {
        center: Vec3::new(1.0, 2.0, 3.0),
        radius: 0.75,
        color: Color::RED,
    };
    let segments = sphere.line_segments(16);
    assert_eq!(segments.len(), 48);
    for [a, b] in segments {
        assert!((a.distance(Vec3::new(1.0, 2.0, 3.0)) - 0.75).abs() < 1e-5);
        assert!((b.distance(Vec3::new(1.0, 2.0, 3.0)) - 0.75).abs() < 1e-5);
    }
}

#[test]
fn overlay_lines_carry_colors() {
    let (sim, probe) = pressed_sim();
    let overlay = DebugOverlay {
        circle_segments: 8,
        ..Default::default()
    };
    let lines = overlay.lines(&probe, &sim);
    // two spheres of 3 × 8 segments plus one ray
    assert_eq!(lines.len(), 49);
    assert_eq!(lines.last().map(|(_, c)| *c), Some(Color::CYAN));
}

//! Temporal smoothing and stride interpolation.

use dent_math::{lerp_vec3, Vec3};

/// Indices simulated directly for a given stride.
///
/// Every `stride`-th index starting at 0, plus the last index so every
/// skipped vertex has a sampled neighbour on both sides.
pub fn sample_indices(vertex_count: usize, stride: usize) -> impl Iterator<Item = usize> {
    let stride = stride.max(1);
    let last = vertex_count.checked_sub(1);
    let tail = match last {
        Some(l) if l % stride != 0 => Some(l),
        _ => None,
    };
    (0..vertex_count).step_by(stride).chain(tail)
}

/// Number of indices [`sample_indices`] yields.
pub fn sample_count(vertex_count: usize, stride: usize) -> usize {
    if vertex_count == 0 {
        return 0;
    }
    let stride = stride.max(1);
    let regular = (vertex_count - 1) / stride + 1;
    if (vertex_count - 1) % stride != 0 {
        regular + 1
    } else {
        regular
    }
}

/// Blend a freshly integrated position with last frame's.
///
/// `smoothing = 0` keeps `current`; `smoothing = 1` keeps `previous`.
#[inline]
pub fn blend_temporal(previous: Vec3, current: Vec3, smoothing: f32) -> Vec3 {
    lerp_vec3(previous, current, 1.0 - smoothing)
}

/// Fill vertices skipped by the stride with a linear blend of the sampled
/// neighbours that bracket them (by index).
pub fn fill_skipped(positions: &mut [Vec3], stride: usize) {
    if stride <= 1 || positions.len() < 3 {
        return;
    }
    let mut samples = sample_indices(positions.len(), stride);
    let Some(mut lo) = samples.next() else {
        return;
    };
    for hi in samples {
        let span = (hi - lo) as f32;
        let (a, b) = (positions[lo], positions[hi]);
        for i in lo + 1..hi {
            positions[i] = lerp_vec3(a, b, (i - lo) as f32 / span);
        }
        lo = hi;
    }
}

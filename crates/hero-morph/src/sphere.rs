//! Scattered-sphere base positions.
//!
//! Particles start uniformly distributed inside a ball centred at the
//! origin. North pole is +Y, matching the vertical rotation axis.

use rand::Rng;

/// Base positions and per-particle phase offsets.
#[derive(Debug, Clone)]
pub struct ScatterCloud {
    pub positions: Vec<[f32; 3]>,
    /// Reserved jitter phase in `[0, 2π)`; generated but not yet animated.
    pub phases: Vec<f32>,
}

/// Scatter `count` points uniformly inside a ball of `radius`.
///
/// Direction comes from a uniform point on the unit sphere and the radius is
/// `radius * cbrt(u)` so that density is even throughout the volume.
pub fn scatter_sphere<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32) -> ScatterCloud {
    let mut positions = Vec::with_capacity(count);
    let mut phases = Vec::with_capacity(count);

    for _ in 0..count {
        let theta = rng.gen::<f32>() * std::f32::consts::TAU;
        let cos_phi = rng.gen::<f32>() * 2.0 - 1.0;
        let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
        let r = radius * rng.gen::<f32>().cbrt();

        positions.push([
            r * sin_phi * theta.cos(),
            r * cos_phi,
            r * sin_phi * theta.sin(),
        ]);
        phases.push(rng.gen::<f32>() * std::f32::consts::TAU);
    }

    ScatterCloud { positions, phases }
}

// =============================================================================
// Tests
// =============================================================================

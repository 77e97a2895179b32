//! Scalar and point helpers shared by the sampler and the per-frame step.

/// Hermite smoothstep. Returns 0 below `edge0`, 1 at or above `edge1`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Blend two points. Written as `a*(1-m) + b*m` so that `m = 0` yields `a`
/// and `m = 1` yields `b` bit-for-bit.
pub fn mix3(a: [f32; 3], b: [f32; 3], m: f32) -> [f32; 3] {
    let k = 1.0 - m;
    [a[0] * k + b[0] * m, a[1] * k + b[1] * m, a[2] * k + b[2] * m]
}

/// Rotate a point around the vertical (Y) axis.
///
/// Positive angles turn +X toward -Z.
pub fn rotate_y(p: [f32; 3], angle: f32) -> [f32; 3] {
    let (s, c) = angle.sin_cos();
    [c * p[0] + s * p[2], p[1], -s * p[0] + c * p[2]]
}

pub fn distance_sq(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_edges() {
        assert_eq!(smoothstep(0.2, 0.9, 0.0), 0.0);
        assert_eq!(smoothstep(0.2, 0.9, 0.2), 0.0);
        assert_eq!(smoothstep(0.2, 0.9, 0.9), 1.0);
        assert_eq!(smoothstep(0.2, 0.9, 1.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smoothstep_degenerate_window_is_a_step() {
        assert_eq!(smoothstep(0.5, 0.5, 0.4), 0.0);
        assert_eq!(smoothstep(0.5, 0.5, 0.5), 1.0);
    }

    #[test]
    fn mix3_is_exact_at_both_ends() {
        let a = [0.1, -2.3, 7.77];
        let b = [1.9, 0.35, 0.0];
        assert_eq!(mix3(a, b, 0.0), a);
        assert_eq!(mix3(a, b, 1.0), b);
    }

    #[test]
    fn rotate_y_quarter_turn() {
        let p = rotate_y([1.0, 2.0, 0.0], std::f32::consts::FRAC_PI_2);
        assert!(p[0].abs() < 1e-6);
        assert!((p[1] - 2.0).abs() < 1e-6);
        assert!((p[2] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_y_zero_angle_is_identity() {
        let p = [0.3, -0.4, 1.2];
        assert_eq!(rotate_y(p, 0.0), p);
    }

    #[test]
    fn rotate_y_preserves_length() {
        let p = [0.7, 0.2, -1.3];
        let q = rotate_y(p, 0.83);
        let len = |v: [f32; 3]| distance_sq(v, [0.0; 3]);
        assert!((len(p) - len(q)).abs() < 1e-5);
        assert_eq!(q[1], p[1]);
    }
}

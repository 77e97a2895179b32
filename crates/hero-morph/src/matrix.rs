//! Camera matrices for the snapshot preview.

use std::ops::Mul;

/// Column-major 4×4 matrix, the layout WGSL `mat4x4<f32>` expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// Right-handed perspective projection mapping depth to [-1, 1].
    ///
    /// `fov_y` is in radians; `near` and `far` must be positive.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let focal = 1.0 / (fov_y / 2.0).tan();
        let depth = near - far;
        Self {
            cols: [
                [focal / aspect, 0.0, 0.0, 0.0],
                [0.0, focal, 0.0, 0.0],
                [0.0, 0.0, (near + far) / depth, -1.0],
                [0.0, 0.0, 2.0 * near * far / depth, 0.0],
            ],
        }
    }

    /// Moves every point by `offset`.
    pub fn translation(offset: [f32; 3]) -> Self {
        let [x, y, z] = offset;
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Homogeneous image of the point `(p, 1)`.
    pub fn transform(&self, p: [f32; 3]) -> [f32; 4] {
        let [x, y, z] = p;
        let [c0, c1, c2, c3] = &self.cols;
        std::array::from_fn(|row| c0[row] * x + c1[row] * y + c2[row] * z + c3[row])
    }

    /// Flat column-major copy, ready for a uniform buffer.
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (chunk, col) in out.chunks_exact_mut(4).zip(&self.cols) {
            chunk.copy_from_slice(col);
        }
        out
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    /// `self` applied after `rhs`.
    fn mul(self, rhs: Mat4) -> Mat4 {
        let cols = std::array::from_fn(|c| {
            let v = rhs.cols[c];
            std::array::from_fn(|row| (0..4).map(|k| self.cols[k][row] * v[k]).sum::<f32>())
        });
        Mat4 { cols }
    }
}

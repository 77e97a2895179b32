//! GPU-bound vertex types for the points and plexus lines.

/// One particle as uploaded to the points buffer.
///
/// Layout: position(vec3) = 12 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
}

impl PointVertex {
    /// wgpu vertex buffer layout for `PointVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PointVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    };
}

/// One end of a plexus line segment.
///
/// Layout: position(vec3) + alpha(f32) = 16 bytes. Both ends of a segment
/// carry the same alpha.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub alpha: f32,
}

impl LineVertex {
    /// wgpu vertex buffer layout for `LineVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // alpha: f32 at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vertex_size_is_12_bytes() {
        assert_eq!(std::mem::size_of::<PointVertex>(), 12);
        assert_eq!(PointVertex::LAYOUT.array_stride, 12);
    }

    #[test]
    fn line_vertex_size_is_16_bytes() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 16);
        assert_eq!(std::mem::align_of::<LineVertex>(), 4);
    }

    #[test]
    fn bytemuck_cast_slice_works() {
        let lines = [
            LineVertex {
                position: [1.0, 2.0, 3.0],
                alpha: 0.5,
            },
            LineVertex::default(),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&lines);
        assert_eq!(bytes.len(), 32);
    }
}

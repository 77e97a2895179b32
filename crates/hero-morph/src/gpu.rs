//! GPU vertex buffers for the morph field.
//!
//! Both buffers are created once at full capacity. Each frame only the
//! dirty prefix (the active particles and the emitted segments) is copied.

use crate::field::{max_segments, MorphField};
use crate::vertex::{LineVertex, PointVertex};

/// Byte size of a vertex buffer holding `count` elements of `T`.
///
/// wgpu rejects zero-sized vertex buffers, so room for one element is always
/// reserved.
pub fn buffer_bytes<T>(count: usize) -> u64 {
    (count.max(1) * std::mem::size_of::<T>()) as u64
}

pub struct MorphBuffers {
    point_buffer: wgpu::Buffer,
    line_buffer: wgpu::Buffer,
    point_count: u32,
    line_vertex_count: u32,
    line_capacity: usize,
}

impl MorphBuffers {
    /// Allocate buffers for `particle_count` points and every possible segment.
    pub fn new(device: &wgpu::Device, particle_count: usize) -> Self {
        let line_capacity = max_segments(particle_count) * 2;

        let point_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("morph points"),
            size: buffer_bytes::<PointVertex>(particle_count),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let line_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("morph plexus lines"),
            size: buffer_bytes::<LineVertex>(line_capacity),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        tracing::debug!(
            particles = particle_count,
            line_vertices = line_capacity,
            "morph buffers allocated"
        );

        Self {
            point_buffer,
            line_buffer,
            point_count: 0,
            line_vertex_count: 0,
            line_capacity,
        }
    }

    /// Copy whatever the field changed since the last upload.
    pub fn upload(&mut self, queue: &wgpu::Queue, field: &mut MorphField) {
        if field.points_dirty() {
            let points = field.points();
            self.point_count = points.len() as u32;
            if !points.is_empty() {
                queue.write_buffer(&self.point_buffer, 0, bytemuck::cast_slice(points));
            }
        }

        let lines = field.lines();
        if lines.is_dirty() {
            let active = lines.active_vertices();
            let count = active.len().min(self.line_capacity);
            self.line_vertex_count = count as u32;
            if count > 0 {
                queue.write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(&active[..count]));
            }
        }

        field.mark_uploaded();
    }

    pub fn point_buffer(&self) -> &wgpu::Buffer {
        &self.point_buffer
    }

    pub fn line_buffer(&self) -> &wgpu::Buffer {
        &self.line_buffer
    }

    /// Vertices to draw from the point buffer.
    pub fn point_count(&self) -> u32 {
        self.point_count
    }

    /// Vertices to draw from the line buffer (two per segment).
    pub fn line_vertex_count(&self) -> u32 {
        self.line_vertex_count
    }

    /// Bind both buffers and issue the point and line draws.
    ///
    /// The caller owns the pipelines; `points` and `lines` must use
    /// [`PointVertex::LAYOUT`] and [`LineVertex::LAYOUT`] respectively.
    pub fn draw<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        points: &'pass wgpu::RenderPipeline,
        lines: &'pass wgpu::RenderPipeline,
    ) {
        if self.line_vertex_count > 0 {
            pass.set_pipeline(lines);
            pass.set_vertex_buffer(0, self.line_buffer.slice(..));
            pass.draw(0..self.line_vertex_count, 0..1);
        }
        if self.point_count > 0 {
            pass.set_pipeline(points);
            pass.set_vertex_buffer(0, self.point_buffer.slice(..));
            pass.draw(0..self.point_count, 0..1);
        }
    }
}

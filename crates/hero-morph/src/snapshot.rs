//! CPU preview of a single frame, written as PNG.
//!
//! Points and plexus lines are projected through a fixed perspective camera
//! looking down -Z at the origin.

use std::path::Path;

use hero_common::{Color, HeroError};
use hero_config::colors::parse_color;
use hero_config::HeroConfig;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_antialiased_line_segment_mut, draw_filled_circle_mut};
use imageproc::pixelops::interpolate;

use crate::field::MorphField;
use crate::matrix::Mat4;

const BACKGROUND: Color = Color::from_rgba(10, 10, 15, 255);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotStyle {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub point_color: Color,
    pub line_color: Color,
    /// Point radius in pixels.
    pub point_radius: f32,
    pub camera_distance: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
}

impl SnapshotStyle {
    pub fn from_config(config: &HeroConfig) -> Result<Self, HeroError> {
        Ok(Self {
            point_color: parse_color(&config.particles.point_color)?,
            line_color: parse_color(&config.plexus.color)?,
            point_radius: config.particles.point_size as f32 * 0.5,
            ..Self::default()
        })
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Combined projection × view matrix.
    pub fn camera(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height as f32;
        Mat4::perspective(self.fov_y, aspect, 0.1, 100.0)
            * Mat4::translation([0.0, 0.0, -self.camera_distance])
    }

    /// Pixel coordinates of a world point, or `None` behind the camera.
    pub fn project(&self, camera: &Mat4, p: [f32; 3]) -> Option<(f32, f32)> {
        let clip = camera.transform(p);
        if clip[3] <= f32::EPSILON {
            return None;
        }
        let ndc_x = clip[0] / clip[3];
        let ndc_y = clip[1] / clip[3];
        Some((
            (ndc_x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc_y) * 0.5 * self.height as f32,
        ))
    }
}

impl Default for SnapshotStyle {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            background: BACKGROUND,
            point_color: Color::WHITE,
            line_color: Color::WHITE,
            point_radius: 1.0,
            camera_distance: 6.0,
            fov_y: 45f32.to_radians(),
        }
    }
}

fn rgba(c: Color) -> Rgba<u8> {
    Rgba(c.to_array())
}

/// Draw the field's last computed frame.
pub fn render_snapshot(field: &MorphField, style: &SnapshotStyle) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(style.width, style.height, rgba(style.background));
    let camera = style.camera();
    let line_color = rgba(style.line_color);

    for pair in field.lines().active_vertices().chunks_exact(2) {
        let (Some(a), Some(b)) = (
            style.project(&camera, pair[0].position),
            style.project(&camera, pair[1].position),
        ) else {
            continue;
        };
        let alpha = pair[0].alpha.clamp(0.0, 1.0);
        draw_antialiased_line_segment_mut(
            &mut img,
            (a.0.round() as i32, a.1.round() as i32),
            (b.0.round() as i32, b.1.round() as i32),
            line_color,
            |line, under, weight| interpolate(line, under, weight * alpha),
        );
    }

    let point_color = rgba(style.point_color);
    let radius = style.point_radius.round().max(0.0) as i32;
    for p in field.positions() {
        if let Some((x, y)) = style.project(&camera, *p) {
            draw_filled_circle_mut(&mut img, (x.round() as i32, y.round() as i32), radius, point_color);
        }
    }

    img
}

/// Render and save as PNG.
pub fn save_snapshot(field: &MorphField, style: &SnapshotStyle, path: &Path) -> Result<(), HeroError> {
    let img = render_snapshot(field, style);
    img.save(path)
        .map_err(|e| HeroError::Snapshot(format!("{}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), segments = field.lines().segment_count(), "snapshot written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::MorphParams;

    fn single_point_field() -> MorphField {
        let mut field =
            MorphField::new(MorphParams::default(), vec![[1.0, 0.0, 0.0]], vec![0.0], &[0.0; 3]).unwrap();
        field.step(0.0, 1.0, None);
        field
    }

    #[test]
    fn origin_projects_to_center() {
        let style = SnapshotStyle::default();
        let (x, y) = style.project(&style.camera(), [0.0, 0.0, 0.0]).unwrap();
        assert!((x - 480.0).abs() < 1e-3);
        assert!((y - 270.0).abs() < 1e-3);
    }

    #[test]
    fn up_is_up() {
        let style = SnapshotStyle::default();
        let (_, y) = style.project(&style.camera(), [0.0, 1.0, 0.0]).unwrap();
        assert!(y < 270.0);
    }

    #[test]
    fn behind_camera_is_skipped() {
        let style = SnapshotStyle::default();
        assert!(style.project(&style.camera(), [0.0, 0.0, 10.0]).is_none());
    }

    #[test]
    fn point_is_drawn_with_point_color() {
        let style = SnapshotStyle::from_config(&HeroConfig::default()).unwrap().with_size(64, 64);
        let img = render_snapshot(&single_point_field(), &style);
        assert_eq!(img.get_pixel(32, 32), &Rgba([0x00, 0xd4, 0xff, 0xff]));
        assert_eq!(img.get_pixel(0, 0), &rgba(BACKGROUND));
    }

    #[test]
    fn bad_color_is_an_error() {
        let mut config = HeroConfig::default();
        config.plexus.color = "not-a-color".into();
        assert!(SnapshotStyle::from_config(&config).is_err());
    }

    #[test]
    fn save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let style = SnapshotStyle::default().with_size(32, 16);
        save_snapshot(&single_point_field(), &style, &path).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (32, 16));
    }
}

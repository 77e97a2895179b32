//! Pointer and progress state fed by [`InteractionEvent`] messages.

use hero_common::InteractionEvent;
use hero_config::schema::InteractionConfig;

/// Latest pointer position and timeline progress. Latest value wins; there
/// is no ordering between pointer and progress updates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pointer: Option<[f32; 2]>,
    progress: f32,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InteractionEvent) {
        match event {
            InteractionEvent::PointerMoved { x, y } => {
                if x.is_finite() && y.is_finite() {
                    self.pointer = Some([x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)]);
                }
            }
            InteractionEvent::PointerLeft => self.pointer = None,
            InteractionEvent::ProgressChanged(p) => self.progress = p,
        }
    }

    /// Pointer in normalized viewport coordinates.
    pub fn pointer(&self) -> Option<[f32; 2]> {
        self.pointer
    }

    /// Pointer scaled into world xy by the configured extents.
    pub fn pointer_world(&self, config: &InteractionConfig) -> Option<[f32; 2]> {
        self.pointer.map(|[x, y]| {
            [
                x * config.pointer_extent_x as f32,
                y * config.pointer_extent_y as f32,
            ]
        })
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

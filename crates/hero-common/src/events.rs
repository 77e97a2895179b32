//! Messages that feed the hero effect from outside the frame callback.
//!
//! Pointer listeners and the timeline driver never touch effect state
//! directly; they send one of these and the latest value wins.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InteractionEvent {
    /// Pointer position in normalized viewport coordinates, each axis in [-1, 1], y up.
    PointerMoved { x: f32, y: f32 },
    /// Pointer left the hero section.
    PointerLeft,
    /// New morph progress from the timeline driver.
    ProgressChanged(f32),
}

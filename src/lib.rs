//! Driftfield - an ambient background of drifting rectangles
//!
//! Two layered pools of blocks (a darker "background" layer and a lighter
//! "foreground" layer) drift across a bounded border and wrap around its
//! edges, or respawn with fresh geometry under the churn policy. The field
//! is purely decorative: the host owns the render loop and the actual
//! drawing, this crate owns the block simulation.
//!
//! Core modules:
//! - `rect`: axis-aligned float rectangle geometry
//! - `block`: a single drifting rectangle with a velocity
//! - `config`: construction-time configuration and validation
//! - `field`: the two-layer pool simulation
//! - `vertex`: optional quad tessellation for raw triangle batches
//!
//! The simulation is deterministic: all randomness comes from a generator
//! seeded at construction, so a fixed seed and elapsed-time sequence
//! reproduce block positions exactly.
//!
//! ```
//! use driftfield::{BlockField, FieldConfig};
//!
//! let mut field = BlockField::new(FieldConfig::default(), 7)?;
//! field.update(1.0 / 60.0);
//!
//! let mut quads = Vec::new();
//! field.draw(|rect, color| quads.push((rect, color)));
//! assert_eq!(quads.len(), 2 * field.blocks_per_layer());
//! # Ok::<(), driftfield::ConfigError>(())
//! ```

pub mod block;
pub mod config;
pub mod field;
pub mod rect;
pub mod vertex;

pub use block::Block;
pub use config::{ConfigError, FieldConfig, RespawnPolicy};
pub use field::BlockField;
pub use rect::Rect;
pub use vertex::{Vertex, quad, tessellate};

/// Named defaults; every one is overridable through [`FieldConfig`].
pub mod consts {
    use crate::rect::Rect;

    /// Blocks generated per layer
    pub const DEFAULT_BLOCKS_PER_LAYER: usize = 80;

    /// Block width generation range, closed-open
    pub const DEFAULT_MIN_BLOCK_WIDTH: f32 = 64.0;
    pub const DEFAULT_MAX_BLOCK_WIDTH: f32 = 256.0;

    /// Block height generation range, closed-open
    pub const DEFAULT_MIN_BLOCK_HEIGHT: f32 = 50.0;
    pub const DEFAULT_MAX_BLOCK_HEIGHT: f32 = 128.0;

    /// Per-axis speed magnitude range in units per second (halved on y)
    pub const DEFAULT_MIN_SPEED: f32 = 30.0;
    pub const DEFAULT_MAX_SPEED: f32 = 50.0;

    /// Border used when the host does not supply one
    pub const DEFAULT_BORDER: Rect = Rect::new(0.0, 0.0, 1280.0, 720.0);

    /// Dark gray drawn behind
    pub const DEFAULT_BACKGROUND_COLOR: [f32; 4] = [0.45, 0.45, 0.45, 1.0];
    /// Lighter gray drawn in front
    pub const DEFAULT_FOREGROUND_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
}

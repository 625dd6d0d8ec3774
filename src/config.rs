//! Field configuration and validation
//!
//! Every knob is fixed when a field is built; `BlockField::reconfigure`
//! swaps the whole set at once. Validation runs before any block is
//! generated, so a bad range can never surface mid-run.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::rect::Rect;

/// What happens to a block that has fully left the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RespawnPolicy {
    /// Teleport to the opposite edge, keeping size and velocity.
    /// Steady recycling: the population never visibly changes.
    #[default]
    Reposition,
    /// Replace with a freshly rolled block entering flush against a
    /// horizontal edge. Constant population churn.
    Respawn,
}

impl RespawnPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RespawnPolicy::Reposition => "reposition",
            RespawnPolicy::Respawn => "respawn",
        }
    }
}

/// Rejected configurations, detected by [`FieldConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A min/max pair that cannot produce a sample: reversed, empty,
    /// negative, or non-finite.
    #[error("{what} range [{min}, {max}) cannot generate values")]
    BadRange {
        what: &'static str,
        min: f32,
        max: f32,
    },

    /// The border rectangle contains a NaN or infinity.
    #[error("border rectangle must be finite")]
    NonFiniteBorder,

    /// Blocks at the top of the size range would not fit inside the border.
    #[error("border {what} {border} must exceed the maximum block {what} {max_block}")]
    BorderTooSmall {
        what: &'static str,
        border: f32,
        max_block: f32,
    },
}

/// Construction-time configuration for a [`BlockField`](crate::BlockField).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Rectangle the blocks are confined to, in the host's draw coordinates.
    pub border: Rect,
    /// Pool size per layer; both layers use the same count.
    pub blocks_per_layer: usize,

    // === Generation ranges (closed-open) ===
    pub min_block_width: f32,
    pub max_block_width: f32,
    pub min_block_height: f32,
    pub max_block_height: f32,
    /// Speed magnitude range per axis. The y axis uses half of both bounds
    /// so vertical drift reads slower than horizontal.
    pub min_speed: f32,
    pub max_speed: f32,

    // === Layer colors (RGBA) ===
    /// Drawn first, behind everything else in the field.
    pub background_color: [f32; 4],
    /// Drawn second, in front of the background layer.
    pub foreground_color: [f32; 4],

    /// Initial field-wide drift added to every block's own velocity.
    pub field_velocity: Vec2,
    /// Recycling policy for blocks that leave the border.
    pub respawn_policy: RespawnPolicy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            border: DEFAULT_BORDER,
            blocks_per_layer: DEFAULT_BLOCKS_PER_LAYER,
            min_block_width: DEFAULT_MIN_BLOCK_WIDTH,
            max_block_width: DEFAULT_MAX_BLOCK_WIDTH,
            min_block_height: DEFAULT_MIN_BLOCK_HEIGHT,
            max_block_height: DEFAULT_MAX_BLOCK_HEIGHT,
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            background_color: DEFAULT_BACKGROUND_COLOR,
            foreground_color: DEFAULT_FOREGROUND_COLOR,
            field_velocity: Vec2::ZERO,
            respawn_policy: RespawnPolicy::Reposition,
        }
    }
}

impl FieldConfig {
    /// Defaults with size ranges derived from the border, keeping blocks
    /// proportional to the viewport: each extent lands between 1/14 and
    /// 1/10 of the matching border extent.
    pub fn for_border(border: Rect) -> Self {
        Self {
            border,
            min_block_width: border.width() / 14.0,
            max_block_width: border.width() / 10.0,
            min_block_height: border.height() / 14.0,
            max_block_height: border.height() / 10.0,
            ..Self::default()
        }
    }

    /// Check every generation range before any block is rolled.
    ///
    /// Border checks run the position sampler's own arithmetic: x is drawn
    /// from `[left, right - width)` in f32, and at large border coordinates
    /// a margin that only nominally exceeds the block size can round away.
    /// Rounding is monotone, so a bound that clears the largest block also
    /// clears every smaller sampled size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        range_ok("block width", self.min_block_width, self.max_block_width)?;
        range_ok("block height", self.min_block_height, self.max_block_height)?;
        range_ok("speed", self.min_speed, self.max_speed)?;
        // the y axis draws from the halved range, which subnormal bounds
        // can collapse even when the full range is valid
        range_ok("vertical speed", self.min_speed / 2.0, self.max_speed / 2.0)?;

        if !self.border.is_finite()
            || !self.border.right().is_finite()
            || !self.border.bottom().is_finite()
        {
            return Err(ConfigError::NonFiniteBorder);
        }
        if self.border.right() - self.max_block_width <= self.border.left() {
            return Err(ConfigError::BorderTooSmall {
                what: "width",
                border: self.border.width(),
                max_block: self.max_block_width,
            });
        }
        if self.border.bottom() - self.max_block_height <= self.border.top() {
            return Err(ConfigError::BorderTooSmall {
                what: "height",
                border: self.border.height(),
                max_block: self.max_block_height,
            });
        }
        Ok(())
    }
}

/// A usable closed-open range: finite bounds, non-negative min, min < max.
/// NaN fails every comparison and is rejected with the rest.
fn range_ok(what: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && 0.0 <= min && min < max {
        Ok(())
    } else {
        Err(ConfigError::BadRange { what, min, max })
    }
}

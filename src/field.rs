//! The drifting block field
//!
//! Owns both block pools and the seeded RNG that rolled them. `update`
//! advances every block and recycles the ones that fully left the border,
//! `draw` hands each block's rectangle to the caller back to front.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::block::Block;
use crate::config::{ConfigError, FieldConfig, RespawnPolicy};
use crate::rect::Rect;

/// Two layers of drifting blocks confined to a border rectangle.
///
/// All randomness flows through one PCG stream seeded at construction,
/// so a given `(config, seed)` pair replays the same animation on every
/// run and every platform.
#[derive(Debug, Clone)]
pub struct BlockField {
    config: FieldConfig,
    field_velocity: Vec2,
    rng: Pcg32,
    background: Vec<Block>,
    foreground: Vec<Block>,
}

impl BlockField {
    /// Validate the configuration and roll both pools.
    ///
    /// The background pool is filled first, then the foreground, so the
    /// per-layer draw sequence is part of the seed contract.
    pub fn new(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let background = fill_layer(&config, &mut rng);
        let foreground = fill_layer(&config, &mut rng);
        log::info!(
            "Block field initialized: {} blocks per layer, {} policy, seed {}",
            config.blocks_per_layer,
            config.respawn_policy.as_str(),
            seed
        );
        Ok(Self {
            field_velocity: config.field_velocity,
            config,
            rng,
            background,
            foreground,
        })
    }

    /// Advance every block by `dt` seconds and recycle the escapees.
    pub fn update(&mut self, dt: f32) {
        // f32::max ignores a NaN operand, so bad frame times land on zero
        let dt = dt.max(0.0);
        advance_layer(
            &mut self.background,
            &self.config,
            &mut self.rng,
            self.field_velocity,
            dt,
        );
        advance_layer(
            &mut self.foreground,
            &self.config,
            &mut self.rng,
            self.field_velocity,
            dt,
        );
    }

    /// Emit one `(rectangle, color)` pair per block, background layer
    /// first so the foreground paints over it.
    pub fn draw<F>(&self, mut emit: F)
    where
        F: FnMut(Rect, [f32; 4]),
    {
        for block in &self.background {
            emit(block.rect(), self.config.background_color);
        }
        for block in &self.foreground {
            emit(block.rect(), self.config.foreground_color);
        }
    }

    /// Swap in a new configuration and reroll both pools from the live
    /// RNG stream. The old state is untouched if validation fails.
    pub fn reconfigure(&mut self, config: FieldConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.field_velocity = config.field_velocity;
        self.config = config;
        self.background = fill_layer(&self.config, &mut self.rng);
        self.foreground = fill_layer(&self.config, &mut self.rng);
        log::debug!(
            "Block field reconfigured: {} blocks per layer, {} policy",
            self.config.blocks_per_layer,
            self.config.respawn_policy.as_str()
        );
        Ok(())
    }

    /// Field-wide drift added on top of each block's own velocity.
    pub fn set_field_velocity(&mut self, velocity: Vec2) {
        self.field_velocity = velocity;
    }

    #[inline]
    pub fn field_velocity(&self) -> Vec2 {
        self.field_velocity
    }

    /// Replace both layer colors at once.
    pub fn set_colors(&mut self, background: [f32; 4], foreground: [f32; 4]) {
        self.config.background_color = background;
        self.config.foreground_color = foreground;
    }

    /// Overwrite the alpha channel of both layer colors, leaving the
    /// RGB channels alone. Hosts drive fade-in and fade-out with this.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.config.background_color[3] = alpha;
        self.config.foreground_color[3] = alpha;
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn blocks_per_layer(&self) -> usize {
        self.config.blocks_per_layer
    }

    #[inline]
    pub fn background_blocks(&self) -> &[Block] {
        &self.background
    }

    #[inline]
    pub fn foreground_blocks(&self) -> &[Block] {
        &self.foreground
    }
}

fn fill_layer(config: &FieldConfig, rng: &mut Pcg32) -> Vec<Block> {
    (0..config.blocks_per_layer)
        .map(|_| random_block(config, rng))
        .collect()
}

/// Roll one block fully inside the border.
///
/// Draw order is fixed: width, height, x, y, then velocity. Reordering
/// the draws changes every field a seed produces.
fn random_block(config: &FieldConfig, rng: &mut Pcg32) -> Block {
    let width = rng.random_range(config.min_block_width..config.max_block_width);
    let height = rng.random_range(config.min_block_height..config.max_block_height);
    let x = rng.random_range(config.border.left()..config.border.right() - width);
    let y = rng.random_range(config.border.top()..config.border.bottom() - height);
    let velocity = random_velocity(config, rng);
    Block::new(Rect::new(x, y, width, height), velocity)
}

/// Roll a velocity with per-axis magnitude and an independent sign flip
/// on each axis. Vertical magnitudes use half the configured range so
/// the field reads as mostly sideways drift.
fn random_velocity(config: &FieldConfig, rng: &mut Pcg32) -> Vec2 {
    let speed_x = rng.random_range(config.min_speed..config.max_speed);
    let speed_y = rng.random_range(config.min_speed / 2.0..config.max_speed / 2.0);
    let x = if rng.random_bool(0.5) { -speed_x } else { speed_x };
    let y = if rng.random_bool(0.5) { -speed_y } else { speed_y };
    Vec2::new(x, y)
}

fn advance_layer(blocks: &mut [Block], config: &FieldConfig, rng: &mut Pcg32, drift: Vec2, dt: f32) {
    for block in blocks.iter_mut() {
        block.advance(dt, drift);
        recycle(block, config, rng);
    }
}

/// Put an escaped block back into circulation per the configured policy.
/// Blocks still inside or only partially outside the border are left alone.
fn recycle(block: &mut Block, config: &FieldConfig, rng: &mut Pcg32) {
    match config.respawn_policy {
        RespawnPolicy::Reposition => reposition(block, config.border),
        RespawnPolicy::Respawn => {
            if escaped(block.rect(), config.border) {
                *block = respawn_at_edge(config, rng);
            }
        }
    }
}

/// Wrap a fully escaped block to the opposite edge, axis by axis.
///
/// The destination sits flush against the border on the side the block
/// re-enters from, so it drifts back into view over the following frames.
/// Each axis wraps at most once per call, even on a huge `dt`.
fn reposition(block: &mut Block, border: Rect) {
    let r = block.rect();
    if r.top() >= border.bottom() {
        block.set_y(border.top() - r.height());
    } else if r.bottom() < border.top() {
        block.set_y(border.bottom());
    }
    if r.left() >= border.right() {
        block.set_x(border.left() - r.width());
    } else if r.right() < border.left() {
        block.set_x(border.right());
    }
}

/// Fully past the border, beyond merely touching it. `respawn_at_edge`
/// seats replacements exactly flush against an edge, and a flush block
/// must not count as escaped until it moves again.
fn escaped(r: Rect, border: Rect) -> bool {
    r.top() > border.bottom()
        || r.bottom() < border.top()
        || r.left() > border.right()
        || r.right() < border.left()
}

/// Roll a complete replacement block and seat it flush against a randomly
/// chosen horizontal edge, heading into view.
fn respawn_at_edge(config: &FieldConfig, rng: &mut Pcg32) -> Block {
    let fresh = random_block(config, rng);
    let r = fresh.rect();
    let velocity = fresh.velocity();
    let border = config.border;
    if rng.random_bool(0.5) {
        Block::new(
            Rect::new(r.left(), border.top() - r.height(), r.width(), r.height()),
            Vec2::new(velocity.x, velocity.y.abs()),
        )
    } else {
        Block::new(
            Rect::new(r.left(), border.bottom(), r.width(), r.height()),
            Vec2::new(velocity.x, -velocity.y.abs()),
        )
    }
}

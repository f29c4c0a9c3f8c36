//! Flappy Komar - a single-screen tap-to-fly arcade game
//!
//! Core modules:
//! - `sim`: Simulation (viewport-scaled physics, spawning, collisions, session state)
//! - `game`: Platform-free session driver (owns state, params, RNG and score sink)
//! - `renderer`: Canvas 2D projection of the game state
//! - `report`: Best-effort score reporting to an embedding host
//! - `audio`: Background music
//! - `platform`: Browser glue (viewport, host bridge, asset loading)
//! - `settings`: Game configuration

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod report;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use report::{NullSink, RecordingSink, ScorePayload, ScoreSink};
pub use settings::{CoinRule, GameConfig, Variant};

/// Game configuration constants
///
/// Values marked "base" are tuned for an 800 px tall viewport and scaled by
/// `height / BASE_HEIGHT` in [`sim::Params::for_viewport`].
pub mod consts {
    /// Reference viewport height all scaled values are tuned for
    pub const BASE_HEIGHT: f32 = 800.0;

    /// Base gravity (px/frame²)
    pub const BASE_GRAVITY: f32 = 0.35;
    /// Base jump impulse (px/frame, negative is up)
    pub const BASE_JUMP: f32 = -8.5;
    /// Base vertical gap between obstacle bands
    pub const BASE_GAP: f32 = 250.0;

    /// Time between obstacle spawns (ms, not scaled)
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;
    /// Obstacle scroll speed (px/frame, not scaled)
    pub const OBSTACLE_SPEED: f32 = 4.0;
    /// Obstacle band width
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    /// Minimum distance between a gap and the top/bottom of the viewport
    pub const GAP_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_SIZE: f32 = 40.0;

    /// Coin defaults
    pub const COIN_SIZE: f32 = 30.0;
    /// Horizontal offset of a coin from its obstacle's leading edge
    pub const COIN_OFFSET_X: f32 = 20.0;

    /// Entities whose x drops below these are pruned
    pub const OBSTACLE_PRUNE_X: f32 = -100.0;
    pub const COIN_PRUNE_X: f32 = -50.0;
}

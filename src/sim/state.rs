//! Game state and core simulation types
//!
//! One `GameState` owns everything a session mutates: the player, the live
//! obstacle and coin lists, counters, the spawn schedule and the RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::params::Params;
use super::spawner::SpawnTimer;
use super::collision::Aabb;
use crate::consts::*;
use crate::settings::{CoinRule, Variant};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Page loaded, waiting for the first activate
    Ready,
    /// Session running, simulation ticks every frame
    Active,
    /// Session ended, waiting for activate to restart
    GameOver,
}

impl GamePhase {
    #[inline]
    pub fn is_active(self) -> bool {
        self == GamePhase::Active
    }
}

/// Something the host side may want to react to (reporting, sound)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle was passed; `score` is the new total
    Scored { score: u32, coins: u32 },
    /// A coin was picked up; `coins` is the new total
    CoinCollected { coins: u32 },
    /// The session ended
    GameOver { score: u32, coins: u32 },
}

/// The player square
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner (x stays fixed)
    pub pos: Vec2,
    /// Side of the square hitbox
    pub size: f32,
    /// Vertical velocity (px/frame, positive is down)
    pub velocity: f32,
}

impl Player {
    /// Player at rest, vertically centered in a viewport of `height`
    pub fn centered(height: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, height / 2.0),
            size: PLAYER_SIZE,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn hitbox(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// A pair of obstacle bands with an open gap between them
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Leading (left) edge
    pub x: f32,
    /// Bottom of the upper band / top of the gap
    pub top: f32,
    /// Top of the lower band / bottom of the gap (`top + gap`)
    pub bottom: f32,
    /// Already counted toward the score
    pub passed: bool,
    /// Coin already created for this obstacle
    pub coin_spawned: bool,
}

impl Obstacle {
    /// Trailing (right) edge for a given band width
    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    /// Top-left corner of the coin's bounding square
    pub pos: Vec2,
    pub size: f32,
    pub collected: bool,
}

impl Collectible {
    #[inline]
    pub fn hitbox(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    /// Center point (for circle rendering)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Which ruleset this page plays
    pub variant: Variant,
    /// How the coin counter advances (coin variant only)
    pub coin_rule: CoinRule,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Live coins, oldest first
    pub coins: Vec<Collectible>,
    /// Obstacles passed this session
    pub score: u32,
    /// Coins counted this session
    pub coin_count: u32,
    /// Obstacle spawn schedule; running only while the session is active
    pub spawner: SpawnTimer,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Simulation ticks this session
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an idle state for the given viewport
    pub fn new(seed: u64, variant: Variant, coin_rule: CoinRule, params: &Params) -> Self {
        Self {
            variant,
            coin_rule,
            phase: GamePhase::Ready,
            player: Player::centered(params.height),
            obstacles: Vec::new(),
            coins: Vec::new(),
            score: 0,
            coin_count: 0,
            spawner: SpawnTimer::idle(),
            events: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Host time enters only as `now_ms` arguments (spawn schedule)
//! - Seeded RNG only
//! - One tick per rendered frame

pub mod autopilot;
pub mod collision;
pub mod params;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, hits_obstacle};
pub use params::Params;
pub use spawner::{SpawnTimer, attach_coins, spawn_obstacle};
pub use state::{Collectible, GameEvent, GamePhase, GameState, Obstacle, Player};
pub use tick::{Activation, activate, end_session, restart, run_spawner, tick};

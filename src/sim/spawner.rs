//! Obstacle spawning
//!
//! Spawns run on their own host-clock schedule, independent of the frame
//! rate. The schedule is a `SpawnTimer` owned by the session: started on
//! restart, cancelled on game over, and restarting always replaces the old
//! schedule so two schedules never overlap.

use glam::Vec2;
use rand::Rng;

use super::params::Params;
use super::state::{Collectible, GameState, Obstacle};
use crate::consts::*;
use crate::settings::Variant;

/// Cancellable fixed-period schedule measured in host milliseconds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnTimer {
    interval_ms: f64,
    next_due_ms: Option<f64>,
}

impl SpawnTimer {
    /// A timer that never fires until started
    pub fn idle() -> Self {
        Self::default()
    }

    /// (Re)start the schedule; the first firing is one interval after `now`
    pub fn start(&mut self, now_ms: f64, interval_ms: f64) {
        self.interval_ms = interval_ms;
        self.next_due_ms = Some(now_ms + interval_ms);
    }

    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Returns true if a firing is due at `now`.
    ///
    /// Fires at most once per poll. After a stall longer than one interval
    /// the schedule re-anchors on `now` instead of bursting.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let Some(due) = self.next_due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let mut next = due + self.interval_ms;
        if next <= now_ms {
            next = now_ms + self.interval_ms;
        }
        self.next_due_ms = Some(next);
        true
    }
}

/// Append a new obstacle at the right edge of the viewport
pub fn spawn_obstacle(state: &mut GameState, params: &Params) {
    let (min_top, max_top) = params.gap_top_range();
    let top = if max_top > min_top {
        state.rng.random_range(min_top..=max_top)
    } else {
        min_top
    };

    state.obstacles.push(Obstacle {
        x: params.width,
        top,
        bottom: top + params.gap,
        passed: false,
        coin_spawned: false,
    });
    log::trace!("Spawned obstacle: top={:.1} bottom={:.1}", top, top + params.gap);

    if state.variant == Variant::Coins {
        attach_coins(state);
    }
}

/// Create the coin for every obstacle that does not have one yet
pub fn attach_coins(state: &mut GameState) {
    for obstacle in state.obstacles.iter_mut().filter(|o| !o.coin_spawned) {
        obstacle.coin_spawned = true;

        let min_y = obstacle.top;
        let max_y = obstacle.bottom - COIN_SIZE;
        let y = if max_y > min_y {
            state.rng.random_range(min_y..=max_y)
        } else {
            min_y
        };

        state.coins.push(Collectible {
            pos: Vec2::new(obstacle.x + COIN_OFFSET_X, y),
            size: COIN_SIZE,
            collected: false,
        });
    }
}

//! Per-frame simulation step
//!
//! Physics is integrated once per rendered frame with no delta-time term:
//! gravity is px/frame² and speeds are px/frame, so the game's feel follows
//! the host's animation callback rate. This coupling is deliberate and kept.

use super::collision::hits_obstacle;
use super::params::Params;
use super::spawner::spawn_obstacle;
use super::state::{GameEvent, GamePhase, GameState, Player};
use crate::consts::*;
use crate::settings::{CoinRule, Variant};

/// What an activate action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Session was idle and has been restarted
    Restarted,
    /// Session was running and the player got an upward impulse
    Flapped,
}

/// Handle the single user action (tap, click, space)
pub fn activate(state: &mut GameState, params: &Params, now_ms: f64) -> Activation {
    if !state.phase.is_active() {
        restart(state, params, now_ms);
        return Activation::Restarted;
    }
    state.player.velocity = params.jump_impulse;
    Activation::Flapped
}

/// Reset every entity and counter and start a fresh session
pub fn restart(state: &mut GameState, params: &Params, now_ms: f64) {
    state.player = Player::centered(params.height);
    state.obstacles.clear();
    state.coins.clear();
    state.score = 0;
    state.coin_count = 0;
    state.time_ticks = 0;
    state.phase = GamePhase::Active;
    state.spawner.start(now_ms, params.spawn_interval_ms);
    log::info!("Session started");
}

/// Run any spawns that are due on the session's schedule
pub fn run_spawner(state: &mut GameState, params: &Params, now_ms: f64) {
    if state.spawner.poll(now_ms) {
        spawn_obstacle(state, params);
    }
}

/// Advance the session by one frame. No-op unless the session is active.
pub fn tick(state: &mut GameState, params: &Params) {
    if !state.phase.is_active() {
        return;
    }
    state.time_ticks += 1;

    // Integrate
    state.player.velocity += params.gravity;
    state.player.pos.y += state.player.velocity;

    let hitbox = state.player.hitbox();
    if hitbox.min.y < 0.0 || hitbox.max.y > params.height {
        end_session(state);
        return;
    }

    // Obstacles
    let width = params.obstacle_width;
    let coin_variant = state.variant == Variant::Coins;
    let mut crashed = false;
    for obstacle in state.obstacles.iter_mut() {
        obstacle.x -= params.obstacle_speed;

        if hits_obstacle(&hitbox, obstacle.x, width, obstacle.top, obstacle.bottom) {
            crashed = true;
            break;
        }

        if !obstacle.passed && hitbox.min.x > obstacle.right(width) {
            obstacle.passed = true;
            state.score += 1;
            if coin_variant && state.coin_rule == CoinRule::PerPass {
                state.coin_count += 1;
            }
            state.events.push(GameEvent::Scored {
                score: state.score,
                coins: state.coin_count,
            });
            log::debug!("Scored: {}", state.score);
        }
    }
    if crashed {
        end_session(state);
        return;
    }

    // Coins
    if coin_variant {
        for coin in state.coins.iter_mut() {
            coin.pos.x -= params.obstacle_speed;
            if !coin.collected && coin.hitbox().overlaps(&hitbox) {
                coin.collected = true;
                if state.coin_rule == CoinRule::Pickup {
                    state.coin_count += 1;
                    state.events.push(GameEvent::CoinCollected {
                        coins: state.coin_count,
                    });
                }
            }
        }
    }

    // Prune
    state.obstacles.retain(|o| o.x > OBSTACLE_PRUNE_X);
    state.coins.retain(|c| !c.collected && c.pos.x > COIN_PRUNE_X);
}

/// Move an active session to game over. Idempotent.
pub fn end_session(state: &mut GameState) {
    if !state.phase.is_active() {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.spawner.cancel();
    state.events.push(GameEvent::GameOver {
        score: state.score,
        coins: state.coin_count,
    });
    log::info!(
        "Game over: score={} coins={} ticks={}",
        state.score,
        state.coin_count,
        state.time_ticks
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Collectible, Obstacle};
    use glam::Vec2;

    fn params() -> Params {
        Params::for_viewport(400.0, 800.0)
    }

    fn active_state(variant: Variant, rule: CoinRule) -> GameState {
        let p = params();
        let mut s = GameState::new(42, variant, rule, &p);
        restart(&mut s, &p, 0.0);
        s
    }

    fn obstacle(x: f32, top: f32) -> Obstacle {
        Obstacle {
            x,
            top,
            bottom: top + 250.0,
            passed: false,
            coin_spawned: true,
        }
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let p = params();
        let mut s = GameState::new(1, Variant::Classic, CoinRule::Pickup, &p);
        let before = s.player.clone();
        tick(&mut s, &p);
        assert_eq!(s.player, before);
        assert_eq!(s.time_ticks, 0);
    }

    #[test]
    fn test_euler_integration() {
        let p = params();
        let mut s = active_state(Variant::Classic, CoinRule::Pickup);
        let y0 = s.player.pos.y;
        tick(&mut s, &p);
        assert!((s.player.velocity - 0.35).abs() < 1e-6);
        assert!((s.player.pos.y - (y0 + 0.35)).abs() < 1e-4);
        tick(&mut s, &p);
        assert!((s.player.velocity - 0.70).abs() < 1e-6);
        assert!((s.player.pos.y - (y0 + 1.05)).abs() < 1e-4);
    }

    #[test]
    fn test_activate_while_active_only_flaps() {
        let p = params();
        let mut s = active_state(Variant::Classic, CoinRule::Pickup);
        s.obstacles.push(obstacle(300.0, 300.0));
        s.score = 3;

        assert_eq!(activate(&mut s, &p, 100.0), Activation::Flapped);
        assert_eq!(s.player.velocity, p.jump_impulse);
        assert_eq!(s.score, 3);
        assert_eq!(s.obstacles.len(), 1);
        assert_eq!(s.phase, GamePhase::Active);
    }

    #[test]
    fn test_activate_while_idle_restarts() {
        let p = params();
        let mut s = GameState::new(1, Variant::Coins, CoinRule::Pickup, &p);
        assert_eq!(activate(&mut s, &p, 0.0), Activation::Restarted);
        assert_eq!(s.phase, GamePhase::Active);
        assert_eq!(s.player.velocity, 0.0);
        assert!(s.spawner.is_running());
    }

    #[test]
    fn test_restart_resets_everything() {
        let p = params();
        let mut s = active_state(Variant::Coins, CoinRule::Pickup);
        s.score = 9;
        s.coin_count = 4;
        s.obstacles.push(obstacle(200.0, 100.0));
        s.coins.push(Collectible {
            pos: Vec2::new(220.0, 150.0),
            size: COIN_SIZE,
            collected: false,
        });
        s.player.pos.y = 12.0;
        s.player.velocity = 5.0;

        restart(&mut s, &p, 50.0);
        assert_eq!(s.score, 0);
        assert_eq!(s.coin_count, 0);
        assert!(s.obstacles.is_empty());
        assert!(s.coins.is_empty());
        assert_eq!(s.player.pos.y, 400.0);
        assert_eq!(s.player.velocity, 0.0);
    }

    #[test]
    fn test_ceiling_ends_session() {
        let p = params();
        let mut s = active_state(Variant::Classic, CoinRule::Pickup);
        s.player.pos.y = 2.0;
        s.player.velocity = -5.0;
        tick(&mut s, &p);
        assert_eq!(s.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_floor_ends_session() {
        let p = params();
        let mut s = active_state(Variant::Classic, CoinRule::Pickup);
        s.player.pos.y = 800.0;
        tick(&mut s, &p);
        assert_eq!(s.phase, GamePhase::GameOver);
        assert!(!s.spawner.is_running());
        assert_eq!(
            s.drain_events(),
            vec![GameEvent::GameOver { score: 0, coins: 0 }]
        );
    }

    #[test]
    fn test_end_session_is_idempotent() {
        let mut s = active_state(Variant::Classic, CoinRule::Pickup);
        end_session(&mut s);
        end_session(&mut s);
        assert_eq!(s.drain_events().len(), 1);
    }

    #[test]
    fn test_touching_obstacle_edge_is_safe() {
        let p = params();
        let mut s = active_state(Variant::Classic, CoinRule::Pickup);
        s.player.pos.y = 20.0;
        // Moves to x=120 this tick: exactly touches the player's right edge
        s.obstacles.push(obstacle(124.0, 300.0));
        tick(&mut s, &p);
        assert_eq!(s.phase, GamePhase::Active);
    }

    #[test]
    fn test_one_unit_obstacle_overlap_ends_session() {
        let p = params();
        let mut s = active_state(Variant::Classic, CoinRule::Pickup);
        s.player.pos.y = 20.0;
        s.obstacles.push(obstacle(123.0, 300.0));
        tick(&mut s, &p);
        assert_eq!(s.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_passing_scores_exactly_once() {
        let p = params();
        let mut s = active_state(Variant::Classic, CoinRule::Pickup);
        // Trailing edge at 9 - 4 + 70 = 75 after the move, left of the player at 80
        s.obstacles.push(obstacle(9.0, 300.0));
        s.player.pos.y = 400.0;
        tick(&mut s, &p);
        assert_eq!(s.score, 1);
        tick(&mut s, &p);
        tick(&mut s, &p);
        assert_eq!(s.score, 1);
        assert!(s.obstacles[0].passed);
        let scored = s
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Scored { .. }))
            .count();
        assert_eq!(scored, 1);
    }

    #[test]
    fn test_offscreen_obstacles_are_pruned() {
        let p = params();
        let mut s = active_state(Variant::Classic, CoinRule::Pickup);
        s.obstacles.push(obstacle(-97.0, 300.0));
        s.obstacles.push(obstacle(-95.0, 300.0));
        s.obstacles[0].passed = true;
        s.obstacles[1].passed = true;
        tick(&mut s, &p);
        assert_eq!(s.obstacles.len(), 1);
        assert_eq!(s.obstacles[0].x, -99.0);
    }

    #[test]
    fn test_coin_pickup_rule_counts_overlaps() {
        let p = params();
        let mut s = active_state(Variant::Coins, CoinRule::Pickup);
        s.coins.push(Collectible {
            pos: Vec2::new(104.0, 410.0),
            size: COIN_SIZE,
            collected: false,
        });
        tick(&mut s, &p);
        assert_eq!(s.coin_count, 1);
        // Collected coins are dropped in the same tick's prune
        assert!(s.coins.is_empty());
        assert!(s.events.contains(&GameEvent::CoinCollected { coins: 1 }));
    }

    #[test]
    fn test_coin_pickup_rule_ignores_passes() {
        let p = params();
        let mut s = active_state(Variant::Coins, CoinRule::Pickup);
        s.obstacles.push(obstacle(9.0, 300.0));
        tick(&mut s, &p);
        assert_eq!(s.score, 1);
        assert_eq!(s.coin_count, 0);
    }

    #[test]
    fn test_coin_per_pass_rule_counts_passes_not_overlaps() {
        let p = params();
        let mut s = active_state(Variant::Coins, CoinRule::PerPass);
        s.obstacles.push(obstacle(9.0, 300.0));
        s.coins.push(Collectible {
            pos: Vec2::new(104.0, 410.0),
            size: COIN_SIZE,
            collected: false,
        });
        tick(&mut s, &p);
        assert_eq!(s.score, 1);
        assert_eq!(s.coin_count, 1);
        assert!(s.coins.is_empty());
        assert_eq!(
            s.drain_events(),
            vec![GameEvent::Scored { score: 1, coins: 1 }]
        );
    }

    #[test]
    fn test_classic_variant_never_counts_coins() {
        let p = params();
        let mut s = active_state(Variant::Classic, CoinRule::PerPass);
        s.obstacles.push(obstacle(9.0, 300.0));
        tick(&mut s, &p);
        assert_eq!(s.score, 1);
        assert_eq!(s.coin_count, 0);
    }

    #[test]
    fn test_spawner_runs_on_schedule_only_while_active() {
        let p = params();
        let mut s = active_state(Variant::Classic, CoinRule::Pickup);
        run_spawner(&mut s, &p, 1499.0);
        assert!(s.obstacles.is_empty());
        run_spawner(&mut s, &p, 1500.0);
        assert_eq!(s.obstacles.len(), 1);

        end_session(&mut s);
        run_spawner(&mut s, &p, 10_000.0);
        assert_eq!(s.obstacles.len(), 1);
    }
}

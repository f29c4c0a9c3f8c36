//! Platform-free session driver
//!
//! `Game` is the one owned object every component goes through: the browser
//! driver forwards input, resize and frame callbacks to it and the renderer
//! reads from it. Score reporting goes to whatever `ScoreSink` it was built
//! with.

use crate::report::{ScorePayload, ScoreSink};
use crate::settings::GameConfig;
use crate::sim::{self, Activation, GameEvent, GamePhase, GameState, Params, Player};

/// Game instance holding all state
pub struct Game<S: ScoreSink> {
    state: GameState,
    params: Params,
    config: GameConfig,
    sink: S,
}

impl<S: ScoreSink> Game<S> {
    pub fn new(config: GameConfig, width: f32, height: f32, seed: u64, sink: S) -> Self {
        let params = Params::for_viewport(width, height);
        let state = GameState::new(seed, config.variant, config.coin_rule, &params);
        log::info!(
            "Game created: {}x{} variant={:?} seed={}",
            width,
            height,
            config.variant,
            seed
        );
        Self {
            state,
            params,
            config,
            sink,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Viewport changed: rebuild every scaled parameter.
    /// Before the first session the idle player is recentered as well.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.params = Params::for_viewport(width, height);
        if self.state.phase == GamePhase::Ready {
            self.state.player = Player::centered(height);
        }
        log::debug!(
            "Resized to {}x{}: gravity={:.3} jump={:.3} gap={:.1}",
            width,
            height,
            self.params.gravity,
            self.params.jump_impulse,
            self.params.gap
        );
    }

    /// The single user action: restart when idle, flap when active
    pub fn activate(&mut self, now_ms: f64) -> Activation {
        sim::activate(&mut self.state, &self.params, now_ms)
    }

    /// Run one frame: due spawns, one simulation tick, then reporting.
    /// Returns the events raised this frame.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        sim::run_spawner(&mut self.state, &self.params, now_ms);
        sim::tick(&mut self.state, &self.params);

        let events = self.state.drain_events();
        for event in &events {
            self.dispatch(event);
        }
        events
    }

    fn dispatch(&mut self, event: &GameEvent) {
        let (score, coins) = match *event {
            GameEvent::Scored { score, coins } | GameEvent::GameOver { score, coins } => {
                (score, coins)
            }
            GameEvent::CoinCollected { .. } => return,
        };
        let payload =
            ScorePayload::for_variant(self.config.variant, score, coins, &self.config.game_id);
        self.sink.report(&payload);
    }
}

//! Score reporting to an embedding host
//!
//! Reporting is fire-and-forget: sinks never return errors and never retry.
//! A page without a host gets [`NullSink`].

use serde::{Deserialize, Serialize};

use crate::settings::Variant;

/// Payload pushed to the host on each scoring event and on game over.
///
/// Classic: `{"score":N}`. Coins: `{"score":N,"coins":M,"game":"flappy"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePayload {
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub coins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub game: Option<String>,
}

impl ScorePayload {
    /// Build the payload shape for a variant
    pub fn for_variant(variant: Variant, score: u32, coins: u32, game_id: &str) -> Self {
        match variant {
            Variant::Classic => Self {
                score,
                coins: None,
                game: None,
            },
            Variant::Coins => Self {
                score,
                coins: Some(coins),
                game: Some(game_id.to_string()),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Best-effort destination for score payloads
pub trait ScoreSink {
    /// Deliver a payload. Failures are swallowed by the implementation.
    fn report(&mut self, payload: &ScorePayload);
}

impl<S: ScoreSink + ?Sized> ScoreSink for Box<S> {
    fn report(&mut self, payload: &ScorePayload) {
        (**self).report(payload);
    }
}

/// Sink for pages with no host; drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn report(&mut self, _payload: &ScorePayload) {}
}

/// Keeps every payload in memory (headless runs and tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub payloads: Vec<ScorePayload>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&ScorePayload> {
        self.payloads.last()
    }
}

impl ScoreSink for RecordingSink {
    fn report(&mut self, payload: &ScorePayload) {
        self.payloads.push(payload.clone());
    }
}

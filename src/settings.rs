//! Game configuration
//!
//! Read once at startup from an optional `data-config` JSON attribute on the
//! game canvas. Every field has a default, so partial JSON is fine.

use serde::{Deserialize, Serialize};

/// Which ruleset the page plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Obstacles and score only
    #[default]
    Classic,
    /// Adds one coin per obstacle and a coin counter
    Coins,
}

/// How the coin counter advances in the coin variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinRule {
    /// One coin per coin actually touched
    #[default]
    Pickup,
    /// One coin per obstacle passed, touching coins only removes them
    PerPass,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub variant: Variant,
    pub coin_rule: CoinRule,

    // === Assets ===
    /// Background image, drawn cover-fit behind everything
    pub background_image: String,
    /// Looping background music
    pub music_track: String,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f64,

    // === Colors / fonts ===
    /// Background fill while the image is missing
    pub fallback_color: String,
    pub player_color: String,
    pub obstacle_color: String,
    pub coin_color: String,
    pub text_color: String,
    pub game_over_color: String,
    pub font_family: String,

    // === Host bridge ===
    /// Game identifier sent with coin variant payloads
    pub game_id: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,
            coin_rule: CoinRule::Pickup,

            background_image: "images/komar.jpg".to_string(),
            music_track: "sounds/gufmusic.mp3".to_string(),
            music_volume: 0.5,

            fallback_color: "#87CEEB".to_string(),
            player_color: "yellow".to_string(),
            obstacle_color: "green".to_string(),
            coin_color: "gold".to_string(),
            text_color: "white".to_string(),
            game_over_color: "red".to_string(),
            font_family: "Arial".to_string(),

            game_id: "flappy".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse from JSON, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.music_volume = config.music_volume.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Parse from an optional JSON string, falling back to defaults
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
            log::info!("Using default config");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => {
                log::info!("Loaded config: variant={:?}", config.variant);
                config
            }
            Err(e) => {
                log::warn!("Invalid game config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load from the canvas `data-config` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::HtmlCanvasElement) -> Self {
        Self::from_json_or_default(canvas.get_attribute("data-config").as_deref())
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assets_and_colors() {
        let c = GameConfig::default();
        assert_eq!(c.variant, Variant::Classic);
        assert_eq!(c.background_image, "images/komar.jpg");
        assert_eq!(c.music_track, "sounds/gufmusic.mp3");
        assert_eq!(c.music_volume, 0.5);
        assert_eq!(c.fallback_color, "#87CEEB");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let c = GameConfig::from_json(r#"{"variant":"coins","coin_rule":"per_pass"}"#).unwrap();
        assert_eq!(c.variant, Variant::Coins);
        assert_eq!(c.coin_rule, CoinRule::PerPass);
        assert_eq!(c.game_id, "flappy");
        assert_eq!(c.music_volume, 0.5);
    }

    #[test]
    fn test_volume_is_clamped() {
        let c = GameConfig::from_json(r#"{"music_volume": 3.0}"#).unwrap();
        assert_eq!(c.music_volume, 1.0);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(GameConfig::from_json("{not json").is_err());
        assert_eq!(
            GameConfig::from_json_or_default(Some("{not json")),
            GameConfig::default()
        );
        assert_eq!(GameConfig::from_json_or_default(None), GameConfig::default());
        assert_eq!(
            GameConfig::from_json_or_default(Some("  ")),
            GameConfig::default()
        );
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!(GameConfig::from_json(r#"{"variant":"hard"}"#).is_err());
    }
}

//! Frame rendering
//!
//! `render` is a pure projection of the game state onto a [`Painter`]; it
//! never mutates state. The browser build paints through
//! [`canvas::CanvasPainter`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;

use crate::settings::{GameConfig, Variant};
use crate::sim::{GamePhase, GameState, Params};

/// Minimal 2D drawing surface
pub trait Painter {
    /// Clear the whole surface
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);
    /// Draw text with its baseline at `y`; `font` is a CSS font shorthand
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
    /// Draw the loaded background image into the given rectangle
    fn draw_background(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// Natural size of a loaded image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

/// Destination rectangle that covers the viewport while keeping the image's
/// aspect ratio, centered (CSS `object-fit: cover`).
pub fn cover_fit(view_w: f32, view_h: f32, image: ImageSize) -> (f32, f32, f32, f32) {
    let scale = (view_w / image.width).max(view_h / image.height);
    let w = image.width * scale;
    let h = image.height * scale;
    ((view_w - w) / 2.0, (view_h - h) / 2.0, w, h)
}

/// Paint one frame
pub fn render<P: Painter>(
    painter: &mut P,
    state: &GameState,
    params: &Params,
    config: &GameConfig,
    background: Option<ImageSize>,
) {
    let (w, h) = (params.width, params.height);
    painter.clear(w, h);

    // Background
    match background.filter(|img| img.width > 0.0 && img.height > 0.0) {
        Some(img) => {
            let (x, y, bw, bh) = cover_fit(w, h, img);
            painter.draw_background(x, y, bw, bh);
        }
        None => painter.fill_rect(0.0, 0.0, w, h, &config.fallback_color),
    }

    // Player
    let player = &state.player;
    painter.fill_rect(
        player.pos.x,
        player.pos.y,
        player.size,
        player.size,
        &config.player_color,
    );

    // Obstacles
    let ow = params.obstacle_width;
    for o in &state.obstacles {
        painter.fill_rect(o.x, 0.0, ow, o.top, &config.obstacle_color);
        painter.fill_rect(o.x, o.bottom, ow, h - o.bottom, &config.obstacle_color);
    }

    // Coins
    if state.variant == Variant::Coins {
        for coin in state.coins.iter().filter(|c| !c.collected) {
            let c = coin.center();
            painter.fill_circle(c.x, c.y, coin.size / 2.0, &config.coin_color);
        }
    }

    // HUD
    let font = |px: u32| format!("{}px {}", px, config.font_family);
    painter.fill_text(
        &format!("Score: {}", state.score),
        30.0,
        60.0,
        &font(40),
        &config.text_color,
    );
    if state.variant == Variant::Coins {
        painter.fill_text(
            &format!("Coins: {}", state.coin_count),
            30.0,
            110.0,
            &font(40),
            &config.coin_color,
        );
    }

    // Overlays
    match state.phase {
        GamePhase::Active => {}
        GamePhase::Ready => {
            painter.fill_text(
                "Tap to Start",
                w / 2.0 - 110.0,
                h / 2.0,
                &font(40),
                &config.text_color,
            );
        }
        GamePhase::GameOver => {
            painter.fill_text(
                "GAME OVER",
                w / 2.0 - 150.0,
                h / 2.0,
                &font(50),
                &config.game_over_color,
            );
            painter.fill_text(
                "Tap to restart",
                w / 2.0 - 100.0,
                h / 2.0 + 40.0,
                &font(30),
                &config.text_color,
            );
        }
    }
}

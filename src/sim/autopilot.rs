//! Scripted player for headless runs
//!
//! Bang-bang control: flap whenever the player sinks below a line just above
//! the bottom of the next gap. Good enough to clear obstacles at the default
//! tuning; not meant to be perfect.

use super::params::Params;
use super::state::GameState;

/// Distance kept between the player's bottom edge and the gap bottom
const BOTTOM_CLEARANCE: f32 = 30.0;

/// Should the autopilot flap this frame?
pub fn wants_flap(state: &GameState, params: &Params) -> bool {
    if !state.phase.is_active() {
        return false;
    }
    let player = &state.player;
    let gap_bottom = state
        .obstacles
        .iter()
        .find(|o| o.right(params.obstacle_width) >= player.pos.x)
        .map(|o| o.bottom)
        .unwrap_or((params.height + params.gap) / 2.0);

    player.pos.y > gap_bottom - player.size - BOTTOM_CLEARANCE
}

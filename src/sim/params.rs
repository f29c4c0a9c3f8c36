//! Viewport-derived simulation parameters
//!
//! Gravity, jump impulse and gap size scale linearly with viewport height
//! (`height / 800`). Spawn interval, scroll speed and obstacle width do not.
//! A `Params` is always rebuilt from the viewport, never edited in place.

use crate::consts::*;

/// Physics constants for one viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Viewport width in px
    pub width: f32,
    /// Viewport height in px
    pub height: f32,
    /// Downward acceleration (px/frame²)
    pub gravity: f32,
    /// Velocity applied on activate (px/frame, negative is up)
    pub jump_impulse: f32,
    /// Vertical size of the opening between obstacle bands
    pub gap: f32,
    /// Time between obstacle spawns (ms)
    pub spawn_interval_ms: f64,
    /// Obstacle scroll speed (px/frame)
    pub obstacle_speed: f32,
    /// Obstacle band width
    pub obstacle_width: f32,
}

impl Params {
    /// Derive all parameters from the current viewport
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let scale = height / BASE_HEIGHT;
        Self {
            width,
            height,
            gravity: BASE_GRAVITY * scale,
            jump_impulse: BASE_JUMP * scale,
            gap: BASE_GAP * scale,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
        }
    }

    /// Inclusive range the top of a new gap is drawn from.
    ///
    /// Collapses to the top margin when the viewport is too short to fit a gap
    /// with margins on both sides.
    pub fn gap_top_range(&self) -> (f32, f32) {
        let min_top = GAP_MARGIN;
        let max_top = self.height - self.gap - GAP_MARGIN;
        (min_top, max_top.max(min_top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_height_uses_base_values() {
        let p = Params::for_viewport(400.0, 800.0);
        assert_eq!(p.gravity, 0.35);
        assert_eq!(p.jump_impulse, -8.5);
        assert_eq!(p.gap, 250.0);
        assert_eq!(p.spawn_interval_ms, 1500.0);
        assert_eq!(p.obstacle_speed, 4.0);
    }

    #[test]
    fn test_half_height_halves_scaled_values() {
        let p = Params::for_viewport(400.0, 400.0);
        assert!((p.gravity - 0.175).abs() < 1e-6);
        assert!((p.jump_impulse + 4.25).abs() < 1e-6);
        assert!((p.gap - 125.0).abs() < 1e-4);
        // Not scaled
        assert_eq!(p.spawn_interval_ms, SPAWN_INTERVAL_MS);
        assert_eq!(p.obstacle_width, OBSTACLE_WIDTH);
    }

    #[test]
    fn test_gap_top_range_collapses_on_tiny_viewport() {
        // 120 - 37.5 - 50 < 50: no room for margins on both sides
        let p = Params::for_viewport(300.0, 120.0);
        let (min, max) = p.gap_top_range();
        assert_eq!(min, GAP_MARGIN);
        assert_eq!(max, GAP_MARGIN);
    }

    #[test]
    fn test_gap_top_range_open_just_above_collapse() {
        // Gap scales too, so 150 px still leaves 53.125
        let p = Params::for_viewport(300.0, 150.0);
        let (min, max) = p.gap_top_range();
        assert_eq!(min, GAP_MARGIN);
        assert!((max - 53.125).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_scaling_is_linear_in_height(h in 100.0f32..4000.0) {
            let p = Params::for_viewport(500.0, h);
            prop_assert!((p.gap - 250.0 * h / 800.0).abs() < 1e-3);
            prop_assert!((p.gravity - 0.35 * h / 800.0).abs() < 1e-5);
            prop_assert!((p.jump_impulse - (-8.5 * h / 800.0)).abs() < 1e-4);
        }

        #[test]
        fn prop_scaling_is_monotonic(h in 100.0f32..4000.0, dh in 1.0f32..500.0) {
            let a = Params::for_viewport(500.0, h);
            let b = Params::for_viewport(500.0, h + dh);
            prop_assert!(b.gap > a.gap);
            prop_assert!(b.gravity > a.gravity);
        }
    }
}

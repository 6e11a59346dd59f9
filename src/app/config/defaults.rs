// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for application constants.
//!
//! This module serves as the single source of truth for fixed values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: Fake progress timer cadence
//! - **Window**: Initial and minimum window geometry

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between two firings of the progress timer (in milliseconds).
pub const ANIMATION_TICK_INTERVAL_MS: u64 = 500;

/// Firings in one complete run: ten advancing steps plus the terminating one.
pub const ANIMATION_FIRINGS_PER_RUN: u32 = 11;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width (in logical pixels).
pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;

/// Default window height (in logical pixels).
pub const WINDOW_DEFAULT_HEIGHT: f32 = 560.0;

/// Minimum window width (in logical pixels).
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Minimum window height (in logical pixels).
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

const _: () = {
    use crate::domain::reader::newtypes::completion_bounds::{MAX_PERCENT, STEP_PERCENT};

    assert!(ANIMATION_TICK_INTERVAL_MS > 0);
    assert!(ANIMATION_FIRINGS_PER_RUN == (MAX_PERCENT / STEP_PERCENT) as u32 + 1);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_run_lasts_five_and_a_half_seconds() {
        let total_ms = ANIMATION_TICK_INTERVAL_MS * u64::from(ANIMATION_FIRINGS_PER_RUN);
        assert_eq!(total_ms, 5_500);
    }
}

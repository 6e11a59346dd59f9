// SPDX-License-Identifier: MPL-2.0
//! Reader newtypes.
//!
//! This module provides type-safe wrappers for progress values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Completion Bounds
// =============================================================================

/// Completion percentage bounds.
pub mod completion_bounds {
    /// Value at the start of a run.
    pub const MIN_PERCENT: u8 = 0;
    /// Value at which a run terminates.
    pub const MAX_PERCENT: u8 = 100;
    /// Amount added on every timer firing.
    pub const STEP_PERCENT: u8 = 10;
}

const _: () = {
    assert!(completion_bounds::STEP_PERCENT > 0);
    assert!(completion_bounds::MAX_PERCENT % completion_bounds::STEP_PERCENT == 0);
};

// =============================================================================
// CompletionPercent
// =============================================================================

/// Synthetic completion of a run, guaranteed to be within 0%–100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CompletionPercent(u8);

impl CompletionPercent {
    /// Completion at the start of a run.
    pub const ZERO: Self = Self(completion_bounds::MIN_PERCENT);

    /// Completion at which a run terminates.
    pub const FULL: Self = Self(completion_bounds::MAX_PERCENT);

    /// Creates a completion value, clamping to the valid range.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.min(completion_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns completion as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / f32::from(completion_bounds::MAX_PERCENT)
    }

    /// Returns whether the run has reached its terminal value.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= completion_bounds::MAX_PERCENT
    }

    /// Advances by one step, never past 100%.
    #[must_use]
    pub fn advance(self) -> Self {
        Self::new(self.0.saturating_add(completion_bounds::STEP_PERCENT))
    }
}

/// Maps completion onto an index into a phase-message sequence of
/// `message_count` entries.
///
/// The index is `floor(fraction * count)`, clamped to the last entry, so
/// 100% selects the final message. Returns `None` for an empty sequence.
#[must_use]
pub fn phase_index(completion: CompletionPercent, message_count: usize) -> Option<usize> {
    if message_count == 0 {
        return None;
    }
    let scaled = usize::from(completion.value()) * message_count
        / usize::from(completion_bounds::MAX_PERCENT);
    Some(scaled.min(message_count - 1))
}

// SPDX-License-Identifier: MPL-2.0
//! The mind-reading form: session state and its fake progress run.

pub mod newtypes;
pub mod session;

pub use newtypes::{phase_index, CompletionPercent};
pub use session::{Session, TickOutcome};

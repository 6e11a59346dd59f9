// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core rules with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so the whole form
//! lifecycle can be tested without a window.
//!
//! # Modules
//!
//! - [`locale`]: The closed set of display languages ([`LocaleCode`](locale::LocaleCode))
//! - [`reader`]: Session state and the fake progress run
//!   ([`Session`](reader::Session), [`CompletionPercent`](reader::CompletionPercent))

pub mod locale;
pub mod reader;

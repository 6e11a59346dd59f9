// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Follows the Elm-style "state down, messages up" pattern: components take a
//! borrowed `ViewContext` and emit their own `Message` type, which the app
//! wraps.
//!
//! - [`reader`] - The mind-reading form
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod reader;
pub mod styles;
pub mod theming;

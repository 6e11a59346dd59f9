// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string lookup.
//!
//! # Features
//!
//! - Locale selection from CLI, config, or the host language preference
//! - `.ftl` resources embedded at build time, optionally overridden from a directory
//! - One-time validation so every locale has a complete set of strings
//! - Fallback to the baseline locale when nothing matches

pub mod fluent;
pub mod selector;

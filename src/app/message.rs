// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::reader;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Reader(reader::Message),
    Tick(Instant), // Animation timer firing, only subscribed while running
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `it-IT`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MIND_READER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Host language preference as reported by the operating system.
    pub host_locale: Option<String>,
}

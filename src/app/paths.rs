// SPDX-License-Identifier: MPL-2.0
//! Location of the directory holding `settings.toml`.
//!
//! First match wins: an explicit override, `--config-dir`,
//! `MIND_READER_CONFIG_DIR`, then `<platform config dir>/MindReader`.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "MindReader";

pub const ENV_CONFIG_DIR: &str = "MIND_READER_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--config-dir`. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already set, ignoring");
    }
}

/// Resolves the config directory; `None` only when the platform has no
/// config location and nothing overrides it.
pub fn config_dir(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(|| {
            std::env::var(ENV_CONFIG_DIR)
                .ok()
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_NAME)))
}

// SPDX-License-Identifier: MPL-2.0
//! Process-wide `tracing` subscriber setup.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Renderer crates are noisy at `info`.
const DEFAULT_LOG_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn,iced_wgpu=warn";

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// default filter. Safe to call more than once.
pub fn init_logging() {
    LOGGING_INITIALIZED.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt().with_env_filter(env_filter).try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_quiets_renderer_targets() {
        assert!(DEFAULT_LOG_FILTER.starts_with("info"));
        assert!(DEFAULT_LOG_FILTER.contains("wgpu_core=warn"));
        assert!(DEFAULT_LOG_FILTER.contains("naga=warn"));
    }

    #[test]
    fn init_logging_can_be_called_multiple_times() {
        init_logging();
        init_logging();
    }
}

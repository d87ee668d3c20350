// src/logging.rs

//! Diagnostics on stderr through `tracing`.
//!
//! Stdout belongs to the status lines written by [`crate::report::Reporter`],
//! so everything here goes to stderr. The filter comes from `--log-level`
//! when given, else from `DEVTASK_LOG` (any `EnvFilter` directive such as
//! `devtask=debug` or `devtask::exec=trace`), else `warn`.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "DEVTASK_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(cli_level, env.as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

/// Pick the filter: explicit level, then a valid env directive, then `warn`.
///
/// An env value that does not parse is ignored rather than fatal; a typo in
/// `DEVTASK_LOG` should not stop a build.
pub fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level.as_directive());
    }

    env.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_wins_over_env() {
        let filter = build_filter(Some(LogLevel::Trace), Some("devtask=debug"));
        assert_eq!(filter.to_string(), "trace");
    }

    #[test]
    fn env_accepts_per_target_directives() {
        let filter = build_filter(None, Some(" devtask=debug "));
        assert_eq!(filter.to_string(), "devtask=debug");
    }

    #[test]
    fn blank_env_falls_back_to_warn() {
        assert_eq!(build_filter(None, Some("  ")).to_string(), "warn");
        assert_eq!(build_filter(None, None).to_string(), "warn");
    }
}

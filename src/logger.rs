// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Records go to stdout through `fern`. Renderer and windowing crates are
//! silenced because they log every frame at debug level.

use crate::error::Result;
use log::LevelFilter;

/// Log level used when `--log-level` is not given.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Crates whose output is dropped regardless of the chosen level.
const QUIET_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "cosmic_text",
    "calloop",
    "polling",
];

/// Parses a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.parse().ok()
}

/// Installs the global logger.
///
/// Fails with [`Error::Logger`](crate::error::Error::Logger) if a logger is
/// already installed.
pub fn setup_logger(level: LevelFilter) -> Result<()> {
    let dispatch = QUIET_TARGETS.iter().fold(
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}][{}] {}",
                    record.target(),
                    record.level(),
                    message
                ))
            })
            .level(level),
        |dispatch, target| dispatch.level_for(*target, LevelFilter::Off),
    );

    dispatch.chain(std::io::stdout()).apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_known_names() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    }

    #[test]
    fn parse_level_rejects_garbage() {
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn second_setup_reports_logger_error() {
        // Only test in this binary that installs a logger.
        let _ = setup_logger(LevelFilter::Off);
        let second = setup_logger(LevelFilter::Off);
        assert!(matches!(second, Err(crate::error::Error::Logger(_))));
    }
}

// SPDX-License-Identifier: MPL-2.0
use iced_dialogs::app::{self, Flags};
use iced_dialogs::logger;

const HELP: &str = "\
Usage: iced_dialogs [OPTIONS]

Options:
  --lang <id>           Interface language (e.g. en-US, fr)
  --config-dir <path>   Directory holding settings.toml
  --log-level <level>   error, warn, info, debug, trace or off
  -h, --help            Print this help
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_level: Option<String> = args.opt_value_from_str("--log-level")?;
    let level = match log_level.as_deref() {
        Some(raw) => logger::parse_level(raw).ok_or_else(|| format!("invalid log level: {raw}"))?,
        None => logger::DEFAULT_LOG_LEVEL,
    };
    let mut startup_warnings = Vec::new();
    if let Err(err) = logger::setup_logger(level) {
        eprintln!("{err}");
        startup_warnings.push(err);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        startup_warnings,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)?;
    Ok(())
}

// SPDX-License-Identifier: MPL-2.0
use mind_reader::app::{self, Flags};
use mind_reader::error::{Error, Result};
use mind_reader::logging;

const USAGE: &str = "Usage: mind-reader [--lang TAG] [--i18n-dir DIR] [--config-dir DIR]";

fn main() -> Result<()> {
    logging::init_logging();

    let args = pico_args::Arguments::from_env();
    let Some(flags) = parse_flags(args, sys_locale::get_locale())? else {
        println!("{USAGE}");
        return Ok(());
    };

    app::run(flags).inspect_err(|err| tracing::error!(error = %err, "exiting"))
}

/// Reads the command line into [`Flags`]. `None` means help was requested.
fn parse_flags(
    mut args: pico_args::Arguments,
    host_locale: Option<String>,
) -> Result<Option<Flags>> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").map_err(cli_error)?,
        i18n_dir: args.opt_value_from_str("--i18n-dir").map_err(cli_error)?,
        config_dir: args.opt_value_from_str("--config-dir").map_err(cli_error)?,
        host_locale,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn cli_error(err: pico_args::Error) -> Error {
    Error::Config(format!("{err}\n{USAGE}"))
}

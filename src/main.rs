//! issue2md CLI entrypoint.
//!
//! Usage: `issue2md [flags] <url> [output_file]`.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use issue2md::{ConvertError, Issue2mdConfig, Positionals};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::usage::{EarlyExit, detect_early_exit, write_usage, write_version};

/// Environment variable holding the `tracing` filter directive.
const LOG_ENV_VAR: &str = "ISSUE2MD_LOG";

/// Long flags whose value is the following argument.
const VALUE_FLAGS: &[&str] = &[
    "--url",
    "--output",
    "--token",
    "--api-base",
    "--timeout-seconds",
];

/// Short flags whose value is the following argument.
const VALUE_SHORT_FLAGS: &[&str] = &["-u", "-o", "-t", "-a", "-T"];

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let args: Vec<OsString> = std::env::args_os().collect();
    match detect_early_exit(&args) {
        Some(EarlyExit::Help) => return finish(write_usage(&mut io::stdout().lock())),
        Some(EarlyExit::Version) => return finish(write_version(&mut io::stdout().lock())),
        None => {}
    }

    finish(run(args).await)
}

fn finish(result: Result<(), ConvertError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // A closed stderr still exits with failure.
            drop(writeln!(io::stderr().lock(), "{error}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Vec<OsString>) -> Result<(), ConvertError> {
    let config = load_config(args)?;
    cli::convert::run(&config).await
}

/// Installs a stderr `tracing` subscriber filtered by `ISSUE2MD_LOG`,
/// defaulting to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// Positional arguments are removed before ortho-config parses the flags and
/// merged back afterwards.
///
/// # Errors
///
/// Returns [`ConvertError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files, or when the merged values conflict.
fn load_config(args: Vec<OsString>) -> Result<Issue2mdConfig, ConvertError> {
    let (positionals, filtered) = extract_positionals(args);

    let mut config =
        Issue2mdConfig::load_from_iter(filtered).map_err(|error| ConvertError::Configuration {
            message: error.to_string(),
        })?;

    config.set_positionals(positionals)?;
    config.validate()?;
    Ok(config)
}

/// Splits raw arguments into up to two positional values and the remaining
/// flags.
///
/// The program name is always kept. Values following a value-taking flag are
/// not positional unless the flag uses `--name=value` syntax. Everything
/// after `--` is positional and the separator itself is dropped. Positional
/// values beyond the second are left in place for the flag parser to reject.
fn extract_positionals(args: Vec<OsString>) -> (Positionals, Vec<OsString>) {
    let mut found: Vec<OsString> = Vec::new();
    let mut remaining: Vec<OsString> = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();

    if let Some(program) = iter.next() {
        remaining.push(program);
    }

    let mut expects_value = false;
    let mut after_separator = false;

    for arg in iter {
        if expects_value {
            expects_value = false;
            remaining.push(arg);
            continue;
        }

        let text = arg.to_string_lossy().into_owned();
        let is_flag = !after_separator && text.starts_with('-') && text.len() > 1;

        if !after_separator && text == "--" {
            after_separator = true;
            continue;
        }

        if is_flag {
            expects_value = takes_separate_value(&text);
            remaining.push(arg);
        } else if found.len() < 2 {
            found.push(arg);
        } else {
            remaining.push(arg);
        }
    }

    let mut values = found
        .into_iter()
        .map(|value| value.to_string_lossy().into_owned());
    let positionals = Positionals {
        url: values.next(),
        output: values.next(),
    };
    (positionals, remaining)
}

fn takes_separate_value(flag: &str) -> bool {
    if flag.contains('=') {
        return false;
    }
    VALUE_FLAGS.contains(&flag) || VALUE_SHORT_FLAGS.contains(&flag)
}

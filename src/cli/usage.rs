//! Help and version output, recognised before configuration loading.

use std::ffi::OsString;
use std::io::Write;

use issue2md::ConvertError;

const USAGE: &str = "\
Usage: issue2md [flags] <url> [output_file]

Convert a GitHub issue, pull request, or discussion into Markdown.

Arguments:
  <url>          GitHub issue, pull request, or discussion URL
  [output_file]  Write the document here instead of standard output

Flags:
  -u, --url <URL>              Resource URL (instead of the positional)
  -o, --output <PATH>          Output file (instead of the positional)
  -t, --token <TOKEN>          GitHub token (or ISSUE2MD_TOKEN / GITHUB_TOKEN)
  -r, --enable-reactions       Append reaction summaries to comments
  -l, --enable-user-links      Render authors as profile links
  -a, --api-base <URL>         API base URL [default: https://api.github.com]
  -T, --timeout-seconds <SECS> Request timeout [default: 30]
  -h, --help                   Print this help
  -V, --version                Print the version and build date

Logging is written to standard error; set ISSUE2MD_LOG (for example
ISSUE2MD_LOG=debug) to change the level.
";

/// Requests that end the run before any conversion happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarlyExit {
    /// `--help` or `-h`.
    Help,
    /// `--version` or `-V`.
    Version,
}

/// Returns the first help or version request in `args`, ignoring the program
/// name and anything after `--`.
pub fn detect_early_exit(args: &[OsString]) -> Option<EarlyExit> {
    args.iter()
        .skip(1)
        .take_while(|arg| arg.as_os_str() != "--")
        .find_map(|arg| match arg.to_str() {
            Some("--help" | "-h") => Some(EarlyExit::Help),
            Some("--version" | "-V") => Some(EarlyExit::Version),
            _ => None,
        })
}

/// Writes the usage text.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] when writing fails.
pub fn write_usage<W: Write>(writer: &mut W) -> Result<(), ConvertError> {
    writer.write_all(USAGE.as_bytes()).map_err(|e| ConvertError::Io {
        message: e.to_string(),
    })
}

/// Build date injected through `ISSUE2MD_BUILD_DATE` at compile time.
const BUILD_DATE: &str = match option_env!("ISSUE2MD_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

/// Writes `issue2md version: <version>` and `build date: <date>` lines.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] when writing fails.
pub fn write_version<W: Write>(writer: &mut W) -> Result<(), ConvertError> {
    write!(
        writer,
        "issue2md version: {}\nbuild date: {BUILD_DATE}\n",
        env!("CARGO_PKG_VERSION")
    )
    .map_err(|e| ConvertError::Io {
        message: e.to_string(),
    })
}

//! Core library entry for the `classclash` CLI.
//!
//! Reads a list of stylesheets, extracts `.class` selectors from each with a
//! regular expression, and reports every class name found in more than one
//! file.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod config;
pub mod context;
pub mod logging;
pub mod ports;
pub mod report;
pub mod scan;
pub mod scanner;

use clap::Parser;

use crate::config::ScanConfig;
use crate::context::ServiceContext;
use crate::scanner::ClassNameCollisionScanner;

/// Run the CLI with the provided arguments, writing the report to stdout.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, the configuration is
/// inconsistent, a replay cassette cannot be loaded, or stdout cannot be
/// written. Unreadable stylesheets are never an error.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    let config = ScanConfig::from_cli(&cli)?;
    let ctx = ServiceContext::for_mode(&config.cassette)?;

    let stdout = std::io::stdout();
    ClassNameCollisionScanner::new(&ctx, &config).run(&mut stdout.lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_with_missing_files_succeeds() {
        let root = std::env::temp_dir().join("classclash_lib_empty_root");
        let root = root.to_string_lossy().into_owned();
        assert!(run(["classclash", "--root", root.as_str()]).is_ok());
    }

    #[test]
    fn run_help_is_not_an_error() {
        assert!(run(["classclash", "--help"]).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_flag() {
        let result = run(["classclash", "--frobnicate"]);
        assert!(result.is_err());
    }
}

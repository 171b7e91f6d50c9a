//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Top-level CLI parser for `classclash`.
#[derive(Debug, Parser)]
#[command(
    name = "classclash",
    version,
    about = "Report CSS class names defined in more than one stylesheet"
)]
pub struct Cli {
    /// Stylesheets to scan, in report order.
    ///
    /// Defaults to common.css, molotov.css, coifeuer.css and wafer.css.
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Directory the stylesheet names are resolved against.
    #[arg(short = 'C', long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output format of the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How the collision report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Classes in multiple files:` followed by one line per class.
    Text,
    /// The report serialized as YAML.
    Yaml,
    /// The report serialized as pretty-printed JSON.
    Json,
}

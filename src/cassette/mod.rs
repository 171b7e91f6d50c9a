//! Cassettes: recorded port interactions stored as YAML.

pub mod format;
pub mod recorder;
pub mod replayer;

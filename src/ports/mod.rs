//! Port traits defining external boundaries.
//!
//! The scanner only crosses one boundary: reading stylesheets from disk.
//! Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::FileSystem;

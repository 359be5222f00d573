/// World definition loading
pub mod catalog;
/// Command-line interface
pub mod cli;
/// Runtime configuration defaults and world constraints
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of map snapshots
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Text rendering of map snapshots
pub mod table;

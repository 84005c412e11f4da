//! Command layer
//!
//! Turns lines of text into store operations and prints their outcomes. This
//! is what the `objstore` binary drives; the store itself never prints.
//!
//! - `script`: Parsing of command lines
//! - `session`: A repository plus the writer outcomes are printed to
//! - `porcelain`: One handler per command

pub mod porcelain;
pub mod script;
pub mod session;

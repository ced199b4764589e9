//! CLI argument parsing and command handling.

mod args;
pub mod commands;
mod validators;

pub use args::{BatchArgs, Cli, Command, ConfigAction};
pub use validators::{parse_gregorian_date, parse_jalaali_date};

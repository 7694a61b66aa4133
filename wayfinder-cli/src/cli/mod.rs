//! Command-line interface for the campus navigator.
//!
//! Each subcommand maps onto one navigator query. The floor plan defaults to
//! the built-in campus and can be replaced with an edge list file.

mod commands;
mod render;

pub use commands::{
    BfsArgs, Cli, CliError, Command, CommandOutput, DEMO_DESTINATION, DEMO_START, Demo, DfsArgs,
    GraphArgs, PathArgs, SearchArgs, run_cli,
};
pub use render::render_output;

#[cfg(test)]
mod test_helpers;

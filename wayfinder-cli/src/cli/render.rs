//! Plain-text rendering of command results.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::Arc;

use wayfinder_core::QueryError;

use super::commands::{CommandOutput, DEMO_DESTINATION, DEMO_START, Demo};

const INDENT: &str = "   ";

/// Renders `output` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wayfinder_cli::cli::{CommandOutput, render_output};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let output = CommandOutput::Search {
///     name: "Library".into(),
///     found: false,
/// };
/// let mut buffer = Vec::new();
/// render_output(&output, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "Not found.\n");
/// # Ok(())
/// # }
/// ```
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Locations(names) => writeln!(writer, "Locations: {}", names.join(", ")),
        CommandOutput::Route(route) => writeln!(writer, "{route}"),
        CommandOutput::Traversal(report) => writeln!(writer, "{report}"),
        CommandOutput::SpanningTree(report) => writeln!(writer, "{report}"),
        CommandOutput::Search { found, .. } => {
            writeln!(writer, "{}", if *found { "Found." } else { "Not found." })
        }
        CommandOutput::Sorted(names) => {
            writeln!(writer, "Sorted locations: {}", names.join(", "))
        }
        CommandOutput::Demo(demo) => render_demo(demo, &mut writer),
    }
}

fn render_demo(demo: &Demo, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "DEMO MODE: automatic runs for screenshots.")?;
    writeln!(writer)?;
    writeln!(writer, "1) Locations: {}", demo.locations.join(", "))?;
    writeln!(writer)?;
    writeln!(
        writer,
        "2) Dijkstra: shortest path {DEMO_START} -> {DEMO_DESTINATION}"
    )?;
    write_step(writer, &demo.route)?;
    writeln!(writer)?;
    writeln!(writer, "3) BFS from {DEMO_START}:")?;
    write_step(writer, &demo.bfs)?;
    writeln!(writer)?;
    writeln!(writer, "4) DFS from {DEMO_START}:")?;
    write_step(writer, &demo.dfs)?;
    writeln!(writer)?;
    writeln!(writer, "5) Kruskal MST:")?;
    write_step(writer, &demo.mst)?;
    writeln!(writer)?;
    writeln!(writer, "6) BST inorder (sorted locations):")?;
    writeln!(writer, "{INDENT} {}", quoted_list(&demo.sorted))
}

fn write_step<T: Display>(
    writer: &mut impl Write,
    step: &Result<T, QueryError>,
) -> io::Result<()> {
    let text = match step {
        Ok(value) => value.to_string(),
        Err(err) => err.to_string(),
    };
    for line in text.lines() {
        writeln!(writer, "{INDENT}{line}")?;
    }
    Ok(())
}

fn quoted_list(names: &[Arc<str>]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{name}'")).collect();
    format!("[{}]", quoted.join(", "))
}

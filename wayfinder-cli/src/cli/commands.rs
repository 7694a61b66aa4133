//! Command implementations and argument parsing for the wayfinder CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use wayfinder_core::{
    EdgeList, EdgeListError, Navigator, NavigatorBuilder, Orientation, QueryError, Route,
    SpanningTreeReport, TraversalKind, TraversalReport,
};

/// Start location used by the demo walkthrough.
pub const DEMO_START: &str = "Cafeteria";
/// Destination used by the demo walkthrough.
pub const DEMO_DESTINATION: &str = "Auditorium";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "wayfinder", about = "Query routes across the campus floor plan.")]
pub struct Cli {
    /// Floor plan selection shared by every command.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Options selecting the floor plan the navigator is built from.
#[derive(Debug, Args, Clone, Default)]
pub struct GraphArgs {
    /// Edge list file replacing the built-in campus plan.
    #[arg(long, global = true, value_name = "FILE")]
    pub edges: Option<PathBuf>,

    /// Store walkways one way only, from source to target.
    #[arg(long, global = true)]
    pub directed: bool,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List every location in ascending order.
    Locations,
    /// Find the shortest weighted route between two locations.
    Path(PathArgs),
    /// Breadth-first traversal, optionally reporting a fewest-hop path.
    Bfs(BfsArgs),
    /// Depth-first traversal.
    Dfs(DfsArgs),
    /// Compute the minimum spanning tree of the floor plan.
    Mst,
    /// Check whether a location name exists.
    Search(SearchArgs),
    /// List locations read back from the sorted name index.
    Sorted,
    /// Run the canned walkthrough of every query.
    Demo,
}

/// Arguments for the `path` command.
#[derive(Debug, Args, Clone)]
pub struct PathArgs {
    /// Location to start from.
    pub start: String,
    /// Location to reach.
    pub destination: String,
}

/// Arguments for the `bfs` command.
#[derive(Debug, Args, Clone)]
pub struct BfsArgs {
    /// Location to start from.
    pub start: String,
    /// Report the fewest-hop path to this location.
    #[arg(long = "to", value_name = "DEST")]
    pub destination: Option<String>,
}

/// Arguments for the `dfs` command.
#[derive(Debug, Args, Clone)]
pub struct DfsArgs {
    /// Location to start from.
    pub start: String,
}

/// Arguments for the `search` command.
#[derive(Debug, Args, Clone)]
pub struct SearchArgs {
    /// Exact, case-sensitive location name.
    pub name: String,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an edge list.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: std::io::Error,
    },
    /// The edge list could not be parsed or was empty.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// A navigator query was rejected.
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Result of a single CLI command, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Location names in ascending order.
    Locations(Vec<Arc<str>>),
    /// Shortest weighted route.
    Route(Route),
    /// BFS or DFS visitation order.
    Traversal(TraversalReport),
    /// Minimum spanning tree or forest.
    SpanningTree(SpanningTreeReport),
    /// Outcome of a name lookup.
    Search {
        /// Name that was looked up.
        name: String,
        /// Whether the name is a known location.
        found: bool,
    },
    /// Location names read from the sorted index.
    Sorted(Vec<Arc<str>>),
    /// Every step of the demo walkthrough.
    Demo(Demo),
}

/// Results gathered by the demo walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct Demo {
    /// Every location name.
    pub locations: Vec<Arc<str>>,
    /// Route from [`DEMO_START`] to [`DEMO_DESTINATION`].
    pub route: Result<Route, QueryError>,
    /// Breadth-first traversal from [`DEMO_START`].
    pub bfs: Result<TraversalReport, QueryError>,
    /// Depth-first traversal from [`DEMO_START`].
    pub dfs: Result<TraversalReport, QueryError>,
    /// Minimum spanning tree of the plan.
    pub mst: Result<SpanningTreeReport, QueryError>,
    /// Locations read from the sorted index.
    pub sorted: Vec<Arc<str>>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the edge list cannot be loaded or a query is
/// rejected. Demo steps report their failures inline instead.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wayfinder_cli::cli::{Cli, Command, CommandOutput, GraphArgs, SearchArgs, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     graph: GraphArgs::default(),
///     command: Command::Search(SearchArgs {
///         name: "Library".into(),
///     }),
/// };
/// let output = run_cli(cli)?;
/// assert!(matches!(output, CommandOutput::Search { found: true, .. }));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty, custom_edges = cli.graph.edges.is_some()),
)]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let navigator = build_navigator(&cli.graph)?;
    Span::current().record("command", field::display(command_label(&cli.command)));
    let output = run_command(&navigator, cli.command)?;
    info!("command completed");
    Ok(output)
}

pub(super) fn run_command(
    navigator: &Navigator,
    command: Command,
) -> Result<CommandOutput, CliError> {
    let output = match command {
        Command::Locations => CommandOutput::Locations(navigator.list_locations()),
        Command::Path(PathArgs { start, destination }) => {
            CommandOutput::Route(navigator.shortest_path(&start, &destination)?)
        }
        Command::Bfs(BfsArgs { start, destination }) => CommandOutput::Traversal(
            navigator.breadth_first(&start, destination.as_deref())?,
        ),
        Command::Dfs(DfsArgs { start }) => {
            CommandOutput::Traversal(navigator.depth_first(&start)?)
        }
        Command::Mst => CommandOutput::SpanningTree(navigator.minimum_spanning_tree()?),
        Command::Search(SearchArgs { name }) => {
            let found = navigator.search(&name);
            CommandOutput::Search { name, found }
        }
        Command::Sorted => CommandOutput::Sorted(navigator.sorted_locations()),
        Command::Demo => CommandOutput::Demo(run_demo(navigator)),
    };
    Ok(output)
}

pub(super) fn run_demo(navigator: &Navigator) -> Demo {
    Demo {
        locations: navigator.list_locations(),
        route: navigator.shortest_path(DEMO_START, DEMO_DESTINATION),
        bfs: navigator.traversal(TraversalKind::Bfs, DEMO_START, None),
        dfs: navigator.traversal(TraversalKind::Dfs, DEMO_START, None),
        mst: navigator.minimum_spanning_tree(),
        sorted: navigator.sorted_locations(),
    }
}

#[instrument(
    name = "cli.build_navigator",
    err,
    skip(args),
    fields(directed = args.directed, path = field::Empty),
)]
pub(super) fn build_navigator(args: &GraphArgs) -> Result<Navigator, CliError> {
    let orientation = if args.directed {
        Orientation::Directed
    } else {
        Orientation::Undirected
    };
    let mut builder = NavigatorBuilder::new().with_orientation(orientation);
    if let Some(path) = &args.edges {
        Span::current().record("path", field::display(path.display()));
        builder = builder.with_edges(load_edges(path)?);
    }
    Ok(builder.build()?)
}

pub(super) fn load_edges(path: &Path) -> Result<EdgeList, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(EdgeList::from_reader(BufReader::new(file))?)
}

pub(super) const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Locations => "locations",
        Command::Path(_) => "path",
        Command::Bfs(_) => "bfs",
        Command::Dfs(_) => "dfs",
        Command::Mst => "mst",
        Command::Search(_) => "search",
        Command::Sorted => "sorted",
        Command::Demo => "demo",
    }
}

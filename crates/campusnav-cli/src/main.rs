use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::commands::graph::handle_graph_command;
use campusnav_cli::commands::locations::handle_locations_command;
use campusnav_cli::commands::route::{handle_route_command, RouteCommandArgs};
use campusnav_cli::commands::CatalogSources;
use campusnav_cli::output::{AlgorithmArg, CategoryArg, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus walking directions")]
struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Segment catalog JSON file (defaults to the built-in campus network).
    #[arg(long, global = true)]
    segments: Option<PathBuf>,

    /// Location catalog JSON file (defaults to the built-in campus locations).
    #[arg(long, global = true)]
    locations: Option<PathBuf>,

    /// Snap waypoint coordinates to this many decimal places before joining
    /// segments.
    #[arg(long, global = true)]
    quantize: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a walking route between two locations or coordinates.
    Route {
        /// Origin: location name or `lat,lon`.
        #[arg(long = "from")]
        from: String,
        /// Destination: location name or `lat,lon`.
        #[arg(long = "to")]
        to: String,
        /// Shortest-path algorithm.
        #[arg(long, value_enum)]
        algorithm: Option<AlgorithmArg>,
        /// Target distance between route points in metres.
        #[arg(long)]
        spacing: Option<f64>,
        /// List every route point in text output.
        #[arg(long)]
        points: bool,
    },
    /// List known locations.
    Locations {
        /// Only list one category.
        #[arg(long, value_enum, default_value_t = CategoryArg::All)]
        category: CategoryArg,
    },
    /// Build the waypoint graph and report its size.
    Graph {
        /// Target distance between waypoints in metres.
        #[arg(long)]
        spacing: Option<f64>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let sources = CatalogSources {
        segments: cli.segments,
        locations: cli.locations,
        quantize: cli.quantize,
    }
    .with_env_fallback();

    let rendered = match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            spacing,
            points,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                algorithm,
                spacing,
                show_points: points,
            };
            handle_route_command(&sources, cli.format, &args)?
        }
        Command::Locations { category } => {
            handle_locations_command(&sources, cli.format, category)?
        }
        Command::Graph { spacing } => handle_graph_command(&sources, cli.format, spacing)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

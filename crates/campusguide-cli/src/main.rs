use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusguide_lib::{
    compute_route, load_campus_graph, resolve_destination, Destination, RouteOptions,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus route planning utilities")]
struct Cli {
    /// Path to the campus map JSON file.
    #[arg(long)]
    campus: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the campus map and report its size.
    Validate,
    /// Compute walking directions between two destinations.
    Route {
        /// Starting building shorthand.
        #[arg(long)]
        from_building: String,
        /// Starting room identifier.
        #[arg(long)]
        from_room: Option<String>,
        /// Destination building shorthand.
        #[arg(long)]
        to_building: String,
        /// Destination room identifier.
        #[arg(long)]
        to_room: Option<String>,
        /// Restrict the route to wheelchair-accessible connectors.
        #[arg(long)]
        accessible: bool,
        /// Minimize route complexity instead of physical distance.
        #[arg(long)]
        simplest: bool,
        /// Emit the raw route result as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Validate => handle_validate(&cli.campus),
        Command::Route {
            from_building,
            from_room,
            to_building,
            to_room,
            accessible,
            simplest,
            json,
        } => {
            let start = destination(from_building, from_room);
            let goal = destination(to_building, to_room);
            let options = RouteOptions::new(accessible, !simplest);
            handle_route(&cli.campus, &start, &goal, &options, json)
        }
    }
}

fn destination(building: String, room: Option<String>) -> Destination {
    match room {
        Some(room) => Destination::room(building, room),
        None => Destination::building(building),
    }
}

fn handle_validate(campus: &Path) -> Result<()> {
    let graph = load_campus_graph(campus)
        .with_context(|| format!("failed to load campus map from {}", campus.display()))?;
    println!(
        "Campus map OK: {} buildings, {} nodes, {} edges",
        graph.building_codes().len(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

fn handle_route(
    campus: &Path,
    start: &Destination,
    goal: &Destination,
    options: &RouteOptions,
    json: bool,
) -> Result<()> {
    let graph = load_campus_graph(campus)
        .with_context(|| format!("failed to load campus map from {}", campus.display()))?;

    // Surface resolution errors with their suggestions before routing; the
    // library itself folds them into a report result.
    resolve_destination(&graph, start).context("invalid start destination")?;
    resolve_destination(&graph, goal).context("invalid goal destination")?;

    let result = compute_route(&graph, start, goal, options);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.show_report {
        bail!("no usable route from {start} to {goal}");
    }

    println!("Route from {start} to {goal}:");
    for (index, step) in result.steps.iter().enumerate() {
        println!("{:>3}. {} [{}]", index + 1, step.description_key, step.key);
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

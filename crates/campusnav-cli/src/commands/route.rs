//! Route command handler for computing walking directions.

use anyhow::{Context, Result};
use tracing::info;

use campusnav_lib::{Endpoint, RouteSummary, Router};

use crate::commands::CatalogSources;
use crate::output::{AlgorithmArg, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin: location name or `lat,lon`.
    pub from: String,
    /// Destination: location name or `lat,lon`.
    pub to: String,
    /// Overrides the configured algorithm.
    pub algorithm: Option<AlgorithmArg>,
    /// Overrides the configured point spacing in metres.
    pub spacing: Option<f64>,
    /// List every polyline point in text output.
    pub show_points: bool,
}

/// Handle the route subcommand.
///
/// Resolves both endpoints, builds the graph once, and returns the rendered
/// route.
pub fn handle_route_command(
    sources: &CatalogSources,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<String> {
    let locations = sources.load_locations()?;
    let (origin_label, origin) = Endpoint::parse(&args.from).resolve(&locations)?;
    let (destination_label, destination) = Endpoint::parse(&args.to).resolve(&locations)?;

    let mut config = sources.routing_config()?;
    if let Some(algorithm) = args.algorithm {
        config = config.with_algorithm(algorithm.into());
    }
    if let Some(spacing) = args.spacing {
        config = config.with_spacing(spacing);
    }

    let segments = sources.load_segments()?;
    let router = Router::build(&segments, config).context("failed to build routing graph")?;
    let route = router.compute_route(origin, destination);
    info!(
        from = %origin_label,
        to = %destination_label,
        kind = ?route.kind(),
        points = route.point_count(),
        "route computed"
    );

    let summary = RouteSummary::from_route(
        &route,
        config.algorithm,
        origin_label,
        destination_label,
    );
    format.render_route(&summary, args.show_points)
}

//! Graph command handler: build the waypoint graph and report its shape.

use anyhow::{Context, Result};

use campusnav_lib::Router;

use crate::commands::CatalogSources;
use crate::output::{GraphReport, OutputFormat};

pub fn handle_graph_command(
    sources: &CatalogSources,
    format: OutputFormat,
    spacing: Option<f64>,
) -> Result<String> {
    let segments = sources.load_segments()?;
    let mut config = sources.routing_config()?;
    if let Some(spacing) = spacing {
        config = config.with_spacing(spacing);
    }
    let router = Router::build(&segments, config).context("failed to build routing graph")?;

    let report = GraphReport {
        segments: segments.len(),
        spacing_m: config.spacing_m,
        stats: router.graph().stats(),
    };
    format.render_graph(&report)
}

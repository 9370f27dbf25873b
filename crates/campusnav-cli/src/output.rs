//! Output formatting for CLI results.
//!
//! Text output is meant for people; JSON and GeoJSON are written to stdout
//! unadorned so they can be piped into other tools.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::{json, Value};

use campusnav_lib::{
    GraphStats, Location, LocationCategory, RouteAlgorithm, RouteRenderMode, RouteSummary,
};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Geojson,
}

/// Algorithm selected with `--algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum AlgorithmArg {
    Dijkstra,
    AStar,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
        }
    }
}

/// Category selected with `locations --category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum CategoryArg {
    #[default]
    All,
    Entrance,
    Academic,
    Food,
    Sports,
    Facility,
    Other,
}

impl CategoryArg {
    /// `None` means every category.
    pub fn category(self) -> Option<LocationCategory> {
        match self {
            CategoryArg::All => None,
            CategoryArg::Entrance => Some(LocationCategory::Entrance),
            CategoryArg::Academic => Some(LocationCategory::Academic),
            CategoryArg::Food => Some(LocationCategory::Food),
            CategoryArg::Sports => Some(LocationCategory::Sports),
            CategoryArg::Facility => Some(LocationCategory::Facility),
            CategoryArg::Other => Some(LocationCategory::Other),
        }
    }
}

impl OutputFormat {
    /// Render a route summary.
    pub fn render_route(self, summary: &RouteSummary, show_points: bool) -> Result<String> {
        match self {
            OutputFormat::Text => {
                let mode = if show_points {
                    RouteRenderMode::Detailed
                } else {
                    RouteRenderMode::PlainText
                };
                Ok(summary.render(mode))
            }
            OutputFormat::Json => Ok(format!("{}\n", summary.to_json()?)),
            OutputFormat::Geojson => pretty(&summary.to_geojson()),
        }
    }

    /// Render a location listing. Text output is grouped under category
    /// headings in catalog order.
    pub fn render_locations(self, locations: &[&Location]) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(render_locations_text(locations)),
            OutputFormat::Json => pretty(&locations),
            OutputFormat::Geojson => {
                let features: Vec<Value> = locations
                    .iter()
                    .map(|location| {
                        json!({
                            "type": "Feature",
                            "geometry": {
                                "type": "Point",
                                "coordinates": [location.coordinate.lon, location.coordinate.lat],
                            },
                            "properties": {
                                "name": location.name,
                                "category": location.category,
                            },
                        })
                    })
                    .collect();
                pretty(&json!({ "type": "FeatureCollection", "features": features }))
            }
        }
    }

    /// Render graph statistics. GeoJSON has no natural form here and falls
    /// back to JSON.
    pub fn render_graph(self, report: &GraphReport) -> Result<String> {
        match self {
            OutputFormat::Text => {
                let mut buffer = String::new();
                let _ = writeln!(buffer, "Segments:   {}", report.segments);
                let _ = writeln!(buffer, "Waypoints:  {}", report.stats.waypoints);
                let _ = writeln!(buffer, "Edges:      {}", report.stats.edges);
                let _ = writeln!(buffer, "Components: {}", report.stats.components);
                let _ = writeln!(buffer, "Spacing:    {} m", report.spacing_m);
                Ok(buffer)
            }
            OutputFormat::Json | OutputFormat::Geojson => pretty(report),
        }
    }
}

/// Graph summary printed by the `graph` subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    pub segments: usize,
    pub spacing_m: f64,
    #[serde(flatten)]
    pub stats: GraphStats,
}

fn render_locations_text(locations: &[&Location]) -> String {
    let mut buffer = String::new();
    for category in LocationCategory::ALL {
        let mut members = locations
            .iter()
            .filter(|location| location.category == category)
            .peekable();
        if members.peek().is_none() {
            continue;
        }
        if !buffer.is_empty() {
            buffer.push('\n');
        }
        let _ = writeln!(buffer, "{}:", category.label());
        for location in members {
            let _ = writeln!(buffer, "  - {} ({})", location.name, location.coordinate);
        }
    }
    if buffer.is_empty() {
        buffer.push_str("No locations found.\n");
    }
    buffer
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusnav_lib::LocationCatalog;

    #[test]
    fn text_listing_groups_by_category() {
        let catalog = LocationCatalog::campus();
        let text = OutputFormat::Text
            .render_locations(&catalog.filter(None))
            .unwrap();
        let entrances = text.find("Entrances:").unwrap();
        let academic = text.find("Academic Blocks:").unwrap();
        assert!(entrances < academic);
        assert!(text.contains("  - Library (13.033330,80.181380)"));
        assert!(!text.contains("Sports Facilities:"));
    }

    #[test]
    fn empty_listing_says_so() {
        let text = OutputFormat::Text.render_locations(&[]).unwrap();
        assert_eq!(text, "No locations found.\n");
    }

    #[test]
    fn geojson_listing_is_a_feature_collection() {
        let catalog = LocationCatalog::campus();
        let rendered = OutputFormat::Geojson
            .render_locations(&catalog.filter(Some(LocationCategory::Food)))
            .unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn category_all_means_no_filter() {
        assert_eq!(CategoryArg::All.category(), None);
        assert_eq!(
            CategoryArg::Food.category(),
            Some(LocationCategory::Food)
        );
    }
}

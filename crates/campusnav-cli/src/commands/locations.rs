//! Locations command handler.

use anyhow::Result;

use crate::commands::CatalogSources;
use crate::output::{CategoryArg, OutputFormat};

/// List catalog locations, optionally limited to one category.
pub fn handle_locations_command(
    sources: &CatalogSources,
    format: OutputFormat,
    category: CategoryArg,
) -> Result<String> {
    let catalog = sources.load_locations()?;
    let locations = catalog.filter(category.category());
    format.render_locations(&locations)
}

//! Static catalog of named trail segments.
//!
//! Segments were hand-digitised from satellite imagery. Junctions are formed by
//! segments that share bit-identical endpoint coordinates; the graph builder
//! does not merge near-duplicates unless quantisation is enabled.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coord::Coordinate;
use crate::error::{Error, Result};

/// Named, ordered run of coordinates along a walkable trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub coordinates: Vec<Coordinate>,
}

impl Segment {
    pub fn new(name: impl Into<String>, coordinates: Vec<Coordinate>) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}

/// Collection of trail segments describing the walkable network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentCatalog {
    pub segments: Vec<Segment>,
}

impl SegmentCatalog {
    /// Build a catalog after checking names are unique and segments are
    /// non-empty.
    pub fn new(segments: Vec<Segment>) -> Result<Self> {
        let catalog = Self { segments };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: SegmentCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents).map_err(|err| match err {
            Error::Json(inner) => Error::CatalogLoad {
                path: path.to_path_buf(),
                message: inner.to_string(),
            },
            other => other,
        })?;
        debug!(
            path = %path.display(),
            segments = catalog.len(),
            "loaded segment catalog"
        );
        Ok(catalog)
    }

    /// Number of segments in the catalog.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Lookup a segment by name.
    pub fn get(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.name == name)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for segment in &self.segments {
            if segment.coordinates.is_empty() {
                return Err(Error::EmptySegment {
                    name: segment.name.clone(),
                });
            }
            if !seen.insert(segment.name.as_str()) {
                return Err(Error::DuplicateSegment {
                    name: segment.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Trail network of the main campus.
    pub fn campus() -> Self {
        let segments = CAMPUS_SEGMENTS
            .iter()
            .enumerate()
            .map(|(index, [start, end])| {
                Segment::new(
                    format!("Path {}", index + 1),
                    vec![Coordinate::from(*start), Coordinate::from(*end)],
                )
            })
            .collect();
        Self { segments }
    }
}

const CAMPUS_SEGMENTS: [[[f64; 2]; 2]; 30] = [
    [[13.031977, 80.181137], [13.032077, 80.181126]],
    [[13.032077, 80.181126], [13.032094, 80.181121]],
    [[13.032094, 80.181121], [13.033298, 80.181267]],
    [[13.033298, 80.181267], [13.033344, 80.181227]],
    [[13.033344, 80.181227], [13.03399, 80.18126]],
    [[13.033298, 80.181267], [13.033283, 80.181536]],
    [[13.033283, 80.181536], [13.032125, 80.181420]],
    [[13.032125, 80.181420], [13.032077, 80.181126]],
    [[13.032077, 80.181126], [13.032069, 80.180546]],
    [[13.032069, 80.180546], [13.032846, 80.180523]],
    [[13.032846, 80.180523], [13.03289, 80.18032]],
    [[13.03289, 80.18032], [13.03288, 80.17972]],
    [[13.03288, 80.17972], [13.033291, 80.179754]],
    [[13.03288, 80.17972], [13.032856, 80.179668]],
    [[13.032856, 80.179668], [13.032859, 80.178891]],
    [[13.032859, 80.178891], [13.032810, 80.178464]],
    [[13.032810, 80.178464], [13.032619, 80.178236]],
    [[13.032619, 80.178236], [13.032410, 80.178190]],
    [[13.032856, 80.179668], [13.032154, 80.179629]],
    [[13.032154, 80.179629], [13.031908, 80.179620]],
    [[13.031908, 80.179620], [13.031882, 80.179955]],
    [[13.032846, 80.180523], [13.033245, 80.180522]],
    [[13.033245, 80.180522], [13.033291, 80.179754]],
    [[13.032069, 80.180546], [13.031646, 80.180588]],
    [[13.031646, 80.180588], [13.031626, 80.180157]],
    [[13.031626, 80.180157], [13.031654, 80.179691]],
    [[13.031654, 80.179691], [13.031678, 80.179635]],
    [[13.031678, 80.179635], [13.031908, 80.179620]],
    [[13.033245, 80.180522], [13.033610, 80.180530]],
    [[13.033610, 80.180530], [13.03366, 80.17992]],
];

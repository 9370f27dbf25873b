//! Named points of interest and resolution of user-supplied route endpoints.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coord::Coordinate;
use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Maximum number of suggestions attached to an unknown-location error.
const MAX_SUGGESTIONS: usize = 3;

/// Grouping used to filter locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    Entrance,
    Academic,
    Food,
    Sports,
    Facility,
    Other,
}

impl LocationCategory {
    pub const ALL: [LocationCategory; 6] = [
        LocationCategory::Entrance,
        LocationCategory::Academic,
        LocationCategory::Food,
        LocationCategory::Sports,
        LocationCategory::Facility,
        LocationCategory::Other,
    ];

    /// Human-readable heading.
    pub fn label(self) -> &'static str {
        match self {
            LocationCategory::Entrance => "Entrances",
            LocationCategory::Academic => "Academic Blocks",
            LocationCategory::Food => "Food & Dining",
            LocationCategory::Sports => "Sports Facilities",
            LocationCategory::Facility => "Other Facilities",
            LocationCategory::Other => "Other",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            LocationCategory::Entrance => "entrance",
            LocationCategory::Academic => "academic",
            LocationCategory::Food => "food",
            LocationCategory::Sports => "sports",
            LocationCategory::Facility => "facility",
            LocationCategory::Other => "other",
        };
        f.write_str(value)
    }
}

impl FromStr for LocationCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LocationCategory::ALL
            .into_iter()
            .find(|category| category.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidConfig {
                key: "category".to_string(),
                value: s.to_string(),
            })
    }
}

/// Named point of interest on campus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(rename = "position")]
    pub coordinate: Coordinate,
    pub category: LocationCategory,
}

/// Catalog of points of interest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationCatalog {
    pub locations: Vec<Location>,
}

impl LocationCatalog {
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        let catalog = Self { locations };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: LocationCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

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
            locations = catalog.len(),
            "loaded location catalog"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Locations in catalog order, optionally limited to one category.
    pub fn filter(&self, category: Option<LocationCategory>) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|location| category.map_or(true, |c| location.category == c))
            .collect()
    }

    /// Find a location by name, ignoring ASCII case.
    pub fn resolve(&self, name: &str) -> Result<&Location> {
        let needle = name.trim();
        self.locations
            .iter()
            .find(|location| location.name.eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownLocation {
                name: name.to_string(),
                suggestions: self.fuzzy_matches(needle, MAX_SUGGESTIONS),
            })
    }

    /// Names similar to `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .iter()
            .filter_map(|location| {
                let candidate = location.name.to_lowercase();
                let score = if candidate.contains(&query) && !query.is_empty() {
                    1.0
                } else {
                    strsim::jaro_winkler(&query, &candidate)
                };
                (score >= SUGGESTION_THRESHOLD).then_some((score, location.name.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for location in &self.locations {
            if !seen.insert(location.name.to_lowercase()) {
                return Err(Error::DuplicateLocation {
                    name: location.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Points of interest on the main campus.
    pub fn campus() -> Self {
        use LocationCategory::*;

        let entries: [(&str, [f64; 2], LocationCategory); 23] = [
            ("Main Entrance", [13.031966, 80.181146], Entrance),
            ("Side Main Entrance", [13.032050, 80.180606], Entrance),
            ("Easwari Entrance", [13.031825, 80.179673], Entrance),
            ("BMS Entrance", [13.032799, 80.180489], Entrance),
            ("BMS Backside Entrance(Bus Exit)", [13.033317, 80.179761], Entrance),
            ("Admin Block Side Entrance", [13.03262, 80.18060], Entrance),
            ("Library", [13.03333, 80.18138], Academic),
            ("East Block", [13.033024, 80.181570], Academic),
            ("Admin Block", [13.03247, 80.18074], Academic),
            ("Block 5", [13.03374, 80.18129], Academic),
            ("BMS Block", [13.03293, 80.17981], Academic),
            ("Block 3 ECE", [13.03291, 80.17965], Academic),
            ("Easwari Block", [13.03307, 80.17845], Academic),
            ("IIE Center and Fab Lab", [13.03346, 80.18043], Academic),
            ("Easwari Canteen", [13.03307, 80.17845], Food),
            ("BMS Canteen", [13.032876, 80.180000], Food),
            ("Q Cafe", [13.033092, 80.181404], Food),
            ("Q Mart", [13.03354, 80.18063], Food),
            ("CUB ATM", [13.03197, 80.18003], Facility),
            ("Easwari Xerox", [13.032224, 80.179703], Facility),
            ("BMS Xerox", [13.03294, 80.18040], Facility),
            ("TRP Auditorium", [13.03264, 80.17871], Facility),
            ("Boys Hostel", [13.03376, 80.18109], Other),
        ];

        let locations = entries
            .into_iter()
            .map(|(name, position, category)| Location {
                name: name.to_string(),
                coordinate: Coordinate::from(position),
                category,
            })
            .collect();
        Self { locations }
    }
}

/// Route endpoint supplied by a caller: a location name or a literal
/// `lat,lon` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Named(String),
    Position(Coordinate),
}

impl Endpoint {
    /// Interpret `input` as coordinates when it parses as `lat,lon`,
    /// otherwise as a location name.
    pub fn parse(input: &str) -> Self {
        match Coordinate::parse(input) {
            Ok(coordinate) => Endpoint::Position(coordinate),
            Err(_) => Endpoint::Named(input.trim().to_string()),
        }
    }

    /// Resolve to a display label and coordinate.
    pub fn resolve(&self, catalog: &LocationCatalog) -> Result<(String, Coordinate)> {
        match self {
            Endpoint::Named(name) => {
                let location = catalog.resolve(name)?;
                Ok((location.name.clone(), location.coordinate))
            }
            Endpoint::Position(coordinate) => Ok((coordinate.to_string(), *coordinate)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campus_catalog_is_valid() {
        let catalog = LocationCatalog::campus();
        assert_eq!(catalog.len(), 23);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn resolve_ignores_case() {
        let catalog = LocationCatalog::campus();
        let library = catalog.resolve("library").expect("library exists");
        assert_eq!(library.coordinate, Coordinate::new(13.03333, 80.18138));
    }

    #[test]
    fn unknown_location_suggests_close_names() {
        let catalog = LocationCatalog::campus();
        let err = catalog.resolve("Libary").expect_err("typo");
        match err {
            Error::UnknownLocation { suggestions, .. } => {
                assert_eq!(suggestions.first().map(String::as_str), Some("Library"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn substring_queries_rank_containing_names_first() {
        let catalog = LocationCatalog::campus();
        let matches = catalog.fuzzy_matches("xerox", 3);
        assert_eq!(matches, vec!["BMS Xerox", "Easwari Xerox"]);
    }

    #[test]
    fn filter_by_category() {
        let catalog = LocationCatalog::campus();
        let food = catalog.filter(Some(LocationCategory::Food));
        assert_eq!(food.len(), 4);
        assert!(food.iter().all(|l| l.category == LocationCategory::Food));
        assert!(catalog.filter(Some(LocationCategory::Sports)).is_empty());
        assert_eq!(catalog.filter(None).len(), catalog.len());
    }

    #[test]
    fn category_parses_from_lowercase_names() {
        assert_eq!(
            "Academic".parse::<LocationCategory>().unwrap(),
            LocationCategory::Academic
        );
        assert!("gym".parse::<LocationCategory>().is_err());
    }

    #[test]
    fn duplicate_location_names_are_rejected() {
        let json = r#"{"locations":[
            {"name":"Gate","position":[0.0,0.0],"category":"entrance"},
            {"name":"gate","position":[1.0,1.0],"category":"other"}
        ]}"#;
        assert!(matches!(
            LocationCatalog::from_json_str(json),
            Err(Error::DuplicateLocation { .. })
        ));
    }

    #[test]
    fn endpoint_parses_coordinates_or_names() {
        assert_eq!(
            Endpoint::parse("13.0,80.0"),
            Endpoint::Position(Coordinate::new(13.0, 80.0))
        );
        assert_eq!(
            Endpoint::parse(" Q Cafe "),
            Endpoint::Named("Q Cafe".to_string())
        );
    }

    #[test]
    fn endpoint_resolves_through_catalog() {
        let catalog = LocationCatalog::campus();
        let (label, coordinate) = Endpoint::parse("q mart").resolve(&catalog).unwrap();
        assert_eq!(label, "Q Mart");
        assert_eq!(coordinate, Coordinate::new(13.03354, 80.18063));
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Campus Navigator library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Route computation itself never fails: an empty graph or an unreachable
/// destination degrades to a direct route. These variants cover the
/// surrounding work of loading catalogs, resolving names, and validating
/// configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name could not be found in the catalog.
    #[error("unknown location name: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when two trail segments share the same name.
    #[error("duplicate segment name encountered: {name}")]
    DuplicateSegment { name: String },

    /// Raised when two locations share the same name.
    #[error("duplicate location name encountered: {name}")]
    DuplicateLocation { name: String },

    /// Raised when a trail segment has no coordinates.
    #[error("segment {name} has no coordinates")]
    EmptySegment { name: String },

    /// Raised when a `lat,lon` pair could not be parsed.
    #[error("invalid coordinate '{input}': expected 'lat,lon'")]
    InvalidCoordinate { input: String },

    /// Raised when the densification spacing is not finite or is below
    /// [`MIN_SPACING_M`](crate::config::MIN_SPACING_M).
    #[error("point spacing must be a positive number of metres no smaller than 0.01, got {value}")]
    InvalidSpacing { value: f64 },

    /// Raised when the proximity threshold is negative or not finite.
    #[error("proximity threshold must be a non-negative number of degrees, got {value}")]
    InvalidThreshold { value: f64 },

    /// Raised when a configuration value could not be interpreted.
    #[error("invalid configuration value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    /// Raised when a catalog file could not be parsed.
    #[error("failed to load catalog from {path}: {message}")]
    CatalogLoad { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_lists_single_suggestion() {
        let err = Error::UnknownLocation {
            name: "Libary".to_string(),
            suggestions: vec!["Library".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown location name: Libary. Did you mean 'Library'?"
        );
    }

    #[test]
    fn unknown_location_lists_multiple_suggestions() {
        let err = Error::UnknownLocation {
            name: "BMS".to_string(),
            suggestions: vec!["BMS Block".to_string(), "BMS Canteen".to_string()],
        };
        assert!(err
            .to_string()
            .ends_with("Did you mean one of: 'BMS Block', 'BMS Canteen'?"));
    }

    #[test]
    fn unknown_location_without_suggestions_has_no_hint() {
        let err = Error::UnknownLocation {
            name: "Moon".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown location name: Moon");
    }
}

//! Catalog validation errors.

/// Error returned when catalog validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries in the same catalog share a key
    DuplicateKey { catalog: String, key: String },
    /// An entry has an empty class
    EmptyClass { catalog: String, key: String },
    /// A background color stop is not a CSS color
    InvalidColorStop {
        catalog: String,
        key: String,
        stop: String,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::DuplicateKey { catalog, key } => {
                write!(f, "duplicate key '{}' in {} catalog", key, catalog)
            }
            CatalogError::EmptyClass { catalog, key } => {
                write!(f, "entry '{}' in {} catalog has an empty class", key, catalog)
            }
            CatalogError::InvalidColorStop { catalog, key, stop } => {
                write!(
                    f,
                    "entry '{}' in {} catalog has invalid color stop '{}'",
                    key, catalog, stop
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = CatalogError::DuplicateKey {
            catalog: "font".to_string(),
            key: "inter".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate key 'inter' in font catalog");
    }

    #[test]
    fn test_invalid_color_stop_display() {
        let err = CatalogError::InvalidColorStop {
            catalog: "mesh".to_string(),
            key: "aurora".to_string(),
            stop: "#zz".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("aurora"));
        assert!(msg.contains("#zz"));
    }
}

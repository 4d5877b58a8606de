//! Loading options and resolver configuration from preset files.
//!
//! Presets are JSON or YAML documents. When loading from a path, the file
//! extension picks the format:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.json` | JSON |
//! | `.yaml`, `.yml` | YAML |
//!
//! Presets are partial by nature: any field they omit takes its default.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::options::ContentOptions;
use crate::style::ResolverConfig;

/// Recognized preset file extensions.
pub const PRESET_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Error returned when a preset cannot be loaded.
#[derive(Debug)]
pub enum PresetError {
    /// Failed to read the preset file.
    Io { path: PathBuf, source: std::io::Error },
    /// The document is not valid JSON for the target type.
    Json(serde_json::Error),
    /// The document is not valid YAML for the target type.
    Yaml(serde_yaml::Error),
    /// The file extension is not one of [`PRESET_EXTENSIONS`].
    UnsupportedFormat { path: PathBuf },
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetError::Io { path, source } => {
                write!(f, "failed to read preset \"{}\": {}", path.display(), source)
            }
            PresetError::Json(e) => write!(f, "invalid JSON preset: {}", e),
            PresetError::Yaml(e) => write!(f, "invalid YAML preset: {}", e),
            PresetError::UnsupportedFormat { path } => write!(
                f,
                "unsupported preset format \"{}\" (expected one of: {})",
                path.display(),
                PRESET_EXTENSIONS.join(", ")
            ),
        }
    }
}

impl std::error::Error for PresetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresetError::Io { source, .. } => Some(source),
            PresetError::Json(e) => Some(e),
            PresetError::Yaml(e) => Some(e),
            PresetError::UnsupportedFormat { .. } => None,
        }
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(e: serde_json::Error) -> Self {
        PresetError::Json(e)
    }
}

impl From<serde_yaml::Error> for PresetError {
    fn from(e: serde_yaml::Error) -> Self {
        PresetError::Yaml(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PresetFormat {
    Json,
    Yaml,
}

impl PresetFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(PresetFormat::Json),
            "yaml" | "yml" => Some(PresetFormat::Yaml),
            _ => None,
        }
    }
}

fn load_path<T: DeserializeOwned>(path: &Path) -> Result<T, PresetError> {
    let format = PresetFormat::from_path(path).ok_or_else(|| PresetError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, "loading preset");
    match format {
        PresetFormat::Json => Ok(serde_json::from_str(&content)?),
        PresetFormat::Yaml => Ok(serde_yaml::from_str(&content)?),
    }
}

impl ContentOptions {
    /// Parses options from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, PresetError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses options from a YAML document.
    ///
    /// ```rust
    /// use textcard::{ContentOptions, Ratio, Tint};
    ///
    /// let options = ContentOptions::from_yaml_str(
    ///     "text: Hello\nratio: 9/16\ntextStroke: white\ntextStrokeSize: 2\n",
    /// ).unwrap();
    /// assert_eq!(options.ratio, Ratio::Story);
    /// assert_eq!(options.text_stroke, Tint::White);
    /// ```
    pub fn from_yaml_str(source: &str) -> Result<Self, PresetError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads options from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        load_path(path.as_ref())
    }
}

impl ResolverConfig {
    pub fn from_json_str(source: &str) -> Result<Self, PresetError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, PresetError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads a configuration from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        load_path(path.as_ref())
    }
}

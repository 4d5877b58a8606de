//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Whether a line height also produces a `gap` between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineGap {
    /// Line height only sets `line-height`.
    #[default]
    Omit,
    /// Line height also sets `gap` to `line height × 3` spacing units.
    Derived,
}

/// Tunables for [`StyleResolver`](crate::StyleResolver).
///
/// Every field has a default, so partial presets load cleanly:
///
/// ```rust
/// use textcard::{LineGap, ResolverConfig};
///
/// let config = ResolverConfig::from_yaml_str("lineGap: derived\n").unwrap();
/// assert_eq!(config.line_gap, LineGap::Derived);
/// assert_eq!(config.spacing_unit_rem, 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    /// Size of one spacing unit in `rem`.
    pub spacing_unit_rem: f64,
    pub line_gap: LineGap,
}

impl ResolverConfig {
    pub const DEFAULT_SPACING_UNIT_REM: f64 = 0.25;

    /// Sets the line gap policy, returning the updated config for chaining.
    pub fn line_gap(mut self, line_gap: LineGap) -> Self {
        self.line_gap = line_gap;
        self
    }

    /// Sets the spacing unit, returning the updated config for chaining.
    ///
    /// Non-finite or non-positive units are replaced by the default.
    pub fn spacing_unit_rem(mut self, unit: f64) -> Self {
        self.spacing_unit_rem = crate::util::positive(unit).unwrap_or(Self::DEFAULT_SPACING_UNIT_REM);
        self
    }

    /// The spacing unit used for resolution. A deserialized config may hold an
    /// invalid unit; non-finite or non-positive values read as the default.
    pub(crate) fn effective_spacing_unit(&self) -> f64 {
        crate::util::positive(self.spacing_unit_rem).unwrap_or(Self::DEFAULT_SPACING_UNIT_REM)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            spacing_unit_rem: Self::DEFAULT_SPACING_UNIT_REM,
            line_gap: LineGap::Omit,
        }
    }
}

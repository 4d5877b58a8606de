//! Asset catalogs: fonts, text colors and backgrounds.
//!
//! This module provides:
//!
//! - [`FontEntry`], [`TextColorEntry`], [`BackgroundEntry`]: catalog records
//! - [`Catalogs`]: the set of catalogs consulted during resolution
//! - [`CatalogError`]: errors from catalog validation
//!
//! The built-in catalogs live in a process-wide [`Catalogs::global`]
//! instance that is built on first access and never mutated, so it can be
//! read from any number of threads. Lookups never fail: a missing key
//! resolves to an empty (or `None`) fragment.

mod color;
mod data;
mod error;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::options::BackgroundType;

pub use error::CatalogError;

/// A font family and weight bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub class: &'static str,
}

impl FontEntry {
    pub const fn new(key: &'static str, label: &'static str, class: &'static str) -> Self {
        Self { key, label, class }
    }
}

/// Which class of a text color entry to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorRole {
    #[default]
    Text,
    Stroke,
    Glow,
}

/// A text color with optional companion classes for stroke and glow fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColorEntry {
    pub label: &'static str,
    pub text: &'static str,
    pub stroke: Option<&'static str>,
    pub glow: Option<&'static str>,
}

impl TextColorEntry {
    /// Returns the class for `role`, if the entry defines one.
    pub fn class(&self, role: ColorRole) -> Option<&'static str> {
        match role {
            ColorRole::Text => Some(self.text),
            ColorRole::Stroke => self.stroke,
            ColorRole::Glow => self.glow,
        }
    }
}

/// A background treatment: the class to apply plus its color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub class: &'static str,
    pub stops: &'static [&'static str],
}

impl BackgroundEntry {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        class: &'static str,
        stops: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            class,
            stops,
        }
    }
}

trait Keyed {
    fn key(&self) -> &'static str;
}

impl Keyed for FontEntry {
    fn key(&self) -> &'static str {
        self.key
    }
}

impl Keyed for BackgroundEntry {
    fn key(&self) -> &'static str {
        self.key
    }
}

/// Ordered entries with a key index.
///
/// The first entry wins when keys collide; later duplicates are recorded so
/// [`Catalogs::validate`] can report them.
#[derive(Debug, Clone)]
struct KeyedCatalog<T> {
    entries: Vec<T>,
    index: HashMap<&'static str, usize>,
    duplicates: Vec<&'static str>,
}

impl<T: Keyed + Clone> KeyedCatalog<T> {
    fn new(entries: &[T]) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        let mut duplicates = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if index.contains_key(entry.key()) {
                duplicates.push(entry.key());
            } else {
                index.insert(entry.key(), i);
            }
        }
        Self {
            entries: entries.to_vec(),
            index,
            duplicates,
        }
    }

    fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&i| &self.entries[i])
    }
}

/// The catalogs consulted by the class helpers.
///
/// # Example
///
/// ```rust
/// use textcard::{BackgroundType, Catalogs, ColorRole};
///
/// let catalogs = Catalogs::global();
/// assert_eq!(catalogs.font_class("inter"), Some("font-inter font-semibold"));
/// assert_eq!(catalogs.text_color_class(999, ColorRole::Text), "");
/// assert_eq!(catalogs.bg_color_class(BackgroundType::Solid, "nope"), "");
/// ```
#[derive(Debug, Clone)]
pub struct Catalogs {
    fonts: KeyedCatalog<FontEntry>,
    text_colors: Vec<TextColorEntry>,
    solid: KeyedCatalog<BackgroundEntry>,
    gradient: KeyedCatalog<BackgroundEntry>,
    mesh: KeyedCatalog<BackgroundEntry>,
}

static GLOBAL: Lazy<Catalogs> = Lazy::new(|| {
    let catalogs = Catalogs::builtin();
    tracing::debug!(
        fonts = catalogs.fonts.entries.len(),
        text_colors = catalogs.text_colors.len(),
        solid = catalogs.solid.entries.len(),
        gradient = catalogs.gradient.entries.len(),
        mesh = catalogs.mesh.entries.len(),
        "initialized asset catalogs"
    );
    catalogs
});

impl Catalogs {
    /// Creates catalogs from explicit tables.
    pub fn new(
        fonts: &[FontEntry],
        text_colors: &[TextColorEntry],
        solid: &[BackgroundEntry],
        gradient: &[BackgroundEntry],
        mesh: &[BackgroundEntry],
    ) -> Self {
        Self {
            fonts: KeyedCatalog::new(fonts),
            text_colors: text_colors.to_vec(),
            solid: KeyedCatalog::new(solid),
            gradient: KeyedCatalog::new(gradient),
            mesh: KeyedCatalog::new(mesh),
        }
    }

    /// Builds a fresh copy of the built-in catalogs.
    pub fn builtin() -> Self {
        Self::new(
            data::FONTS,
            data::TEXT_COLORS,
            data::SOLID_BACKGROUNDS,
            data::GRADIENT_BACKGROUNDS,
            data::MESH_BACKGROUNDS,
        )
    }

    /// Returns the shared built-in catalogs.
    pub fn global() -> &'static Catalogs {
        &GLOBAL
    }

    /// Font entries in display order.
    pub fn fonts(&self) -> &[FontEntry] {
        &self.fonts.entries
    }

    /// Text color entries in display order.
    pub fn text_colors(&self) -> &[TextColorEntry] {
        &self.text_colors
    }

    /// Background entries of one type in display order.
    pub fn backgrounds(&self, kind: BackgroundType) -> &[BackgroundEntry] {
        match self.background_catalog(kind) {
            Some(catalog) => &catalog.entries,
            None => &[],
        }
    }

    pub fn font(&self, key: &str) -> Option<&FontEntry> {
        self.fonts.get(key)
    }

    pub fn text_color(&self, index: usize) -> Option<&TextColorEntry> {
        self.text_colors.get(index)
    }

    pub fn background(&self, kind: BackgroundType, key: &str) -> Option<&BackgroundEntry> {
        self.background_catalog(kind)?.get(key)
    }

    /// Font class for `key`, or `None` when the font is unknown.
    pub fn font_class(&self, key: &str) -> Option<&'static str> {
        let class = self.font(key).map(|entry| entry.class);
        if class.is_none() {
            tracing::debug!(key, "font catalog miss");
        }
        class
    }

    /// The `role` class of the text color at `index`, or `""` if either the
    /// index or the role is missing.
    pub fn text_color_class(&self, index: usize, role: ColorRole) -> &'static str {
        match self.text_color(index).and_then(|entry| entry.class(role)) {
            Some(class) => class,
            None => {
                tracing::debug!(index, ?role, "text color catalog miss");
                ""
            }
        }
    }

    /// Background class for `key` within `kind`, or `""` on any miss.
    pub fn bg_color_class(&self, kind: BackgroundType, key: &str) -> &'static str {
        match self.background(kind, key) {
            Some(entry) => entry.class,
            None => {
                tracing::debug!(kind = kind.as_key(), key, "background catalog miss");
                ""
            }
        }
    }

    /// Checks that keys are unique, classes are non-empty and every
    /// background color stop is a CSS color.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(key) = self.fonts.duplicates.first() {
            return Err(CatalogError::DuplicateKey {
                catalog: "font".to_string(),
                key: key.to_string(),
            });
        }
        if let Some(entry) = self.fonts.entries.iter().find(|e| e.class.trim().is_empty()) {
            return Err(CatalogError::EmptyClass {
                catalog: "font".to_string(),
                key: entry.key.to_string(),
            });
        }
        if let Some(i) = self
            .text_colors
            .iter()
            .position(|e| e.text.trim().is_empty())
        {
            return Err(CatalogError::EmptyClass {
                catalog: "text color".to_string(),
                key: i.to_string(),
            });
        }

        for kind in BackgroundType::CATALOGED {
            let Some(catalog) = self.background_catalog(kind) else {
                continue;
            };
            let name = kind.as_key();
            if let Some(key) = catalog.duplicates.first() {
                return Err(CatalogError::DuplicateKey {
                    catalog: name.to_string(),
                    key: key.to_string(),
                });
            }
            for entry in &catalog.entries {
                if entry.class.trim().is_empty() {
                    return Err(CatalogError::EmptyClass {
                        catalog: name.to_string(),
                        key: entry.key.to_string(),
                    });
                }
                if let Some(stop) = entry.stops.iter().find(|s| !color::is_css_color(s)) {
                    return Err(CatalogError::InvalidColorStop {
                        catalog: name.to_string(),
                        key: entry.key.to_string(),
                        stop: stop.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn background_catalog(&self, kind: BackgroundType) -> Option<&KeyedCatalog<BackgroundEntry>> {
        match kind {
            BackgroundType::None => None,
            BackgroundType::Solid => Some(&self.solid),
            BackgroundType::Gradient => Some(&self.gradient),
            BackgroundType::Mesh => Some(&self.mesh),
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::builtin()
    }
}

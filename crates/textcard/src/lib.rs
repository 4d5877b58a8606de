//! # Textcard - option-to-style resolution for styled text cards
//!
//! Textcard turns the presentation options a user picks in a card editor
//! (text, font, colors, background, box decoration, stroke and glow,
//! aspect ratio, alignment) into the concrete attributes a rendering layer
//! applies.
//!
//! ## Core Concepts
//!
//! - [`ContentOptions`]: the typed options record, loadable from JSON/YAML presets
//! - [`StyleResolver`] / [`content_styles`]: resolve options into a [`StyleRecord`]
//! - [`Catalogs`]: read-only font, text color and background tables
//! - [`content_classes`]: catalog and mapping classes for the frame and text
//! - [`is_empty_text`]: the emptiness gate, backed by an injected [`MarkupSanitizer`]
//!
//! ## Quick Start
//!
//! ```rust
//! use textcard::{content_styles, ContentOptions, Tint};
//!
//! let style = content_styles(&ContentOptions {
//!     text: "Hello".into(),
//!     text_size: 2.0,
//!     text_line_height: 1.5,
//!     box_background: Tint::White,
//!     box_background_opacity: 0.8,
//!     box_inner_padding: 4.0,
//!     box_border_radius: 2.0,
//!     text_letter_spacing: 0.5,
//!     ..ContentOptions::default()
//! });
//!
//! assert_eq!(style.font_size.as_deref(), Some("2rem"));
//! assert_eq!(style.background_color.as_deref(), Some("rgba(255, 255, 255, 0.8)"));
//! assert_eq!(style.padding.as_deref(), Some("1rem"));
//! assert_eq!(style.letter_spacing.as_deref(), Some("0.5px"));
//! assert_eq!(style.webkit_text_stroke, None);
//! ```
//!
//! ## Fallbacks
//!
//! Resolution never fails. Unknown enum keys map to their defaults, catalog
//! misses resolve to empty fragments, and malformed numbers are treated as
//! unset. The worst outcome of bad input is a missing attribute.
//!
//! ## Presets
//!
//! Options and [`ResolverConfig`] can be loaded from `.json`, `.yaml` or
//! `.yml` files; see [`ContentOptions::from_path`]. Loading is the only
//! fallible operation and reports a [`PresetError`].

mod catalog;
mod classes;
mod helpers;
mod options;
mod preset;
mod style;
mod util;
mod validator;

pub use catalog::{
    BackgroundEntry, CatalogError, Catalogs, ColorRole, FontEntry, TextColorEntry,
};
pub use classes::{content_classes, ContentClasses};
pub use helpers::{
    alignment_class, bg_color_class, font_class, ratio_class, shadow_property, text_color_class,
    FULL_RATIO_CLASS, SHADOW_SCALE,
};
pub use options::{Alignment, BackgroundType, ContentOptions, Ratio, Tint};
pub use preset::{PresetError, PRESET_EXTENSIONS};
pub use style::{content_styles, LineGap, ResolverConfig, StyleRecord, StyleResolver};
pub use util::{format_number, parse_float, positive};
pub use validator::{is_empty_text, is_empty_text_with, MarkupSanitizer};

pub use textcard_markup::{MarkupStripper, StripConfig};

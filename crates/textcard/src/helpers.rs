//! Scalar mapping helpers.
//!
//! Each helper turns one option into a class or CSS value. All of them are
//! total: unknown input yields the documented fallback, never a panic.

use crate::catalog::{Catalogs, ColorRole};
use crate::options::{Alignment, BackgroundType, Ratio};

/// Class applied when the ratio is `full` or unknown: auto height, filling
/// the viewport.
pub const FULL_RATIO_CLASS: &str = "h-auto min-h-dvh w-full";

/// Box shadow intensities, lightest first.
pub const SHADOW_SCALE: [&str; 7] = [
    "0 1px 2px 0 rgb(0 0 0 / 0.05)",
    "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    "0 25px 50px -12px rgb(0 0 0 / 0.25)",
    "0 35px 60px -15px rgb(0 0 0 / 0.3)",
];

/// Maps an aspect ratio to its canvas class.
///
/// # Example
///
/// ```rust
/// use textcard::{ratio_class, Ratio, FULL_RATIO_CLASS};
///
/// assert_eq!(ratio_class(Ratio::Square), "aspect-square w-full");
/// assert_eq!(ratio_class(Ratio::from_key("unknown")), FULL_RATIO_CLASS);
/// ```
pub fn ratio_class(ratio: Ratio) -> &'static str {
    match ratio {
        Ratio::Story => "aspect-[9/16] w-full",
        Ratio::Square => "aspect-square w-full",
        Ratio::Portrait => "aspect-[4/5] w-full",
        Ratio::Landscape => "aspect-video w-full",
        Ratio::Tall => "aspect-[10/16] w-full",
        Ratio::Full => FULL_RATIO_CLASS,
    }
}

/// Maps an alignment to its text alignment class.
pub fn alignment_class(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "text-left",
        Alignment::Right => "text-right",
        Alignment::Center => "text-center",
    }
}

/// The `role` class of text color `index` in the built-in catalog.
pub fn text_color_class(index: usize, role: ColorRole) -> &'static str {
    Catalogs::global().text_color_class(index, role)
}

/// Font class for `key` in the built-in catalog.
pub fn font_class(key: &str) -> Option<&'static str> {
    Catalogs::global().font_class(key)
}

/// Background class for `key` of type `kind` in the built-in catalog.
pub fn bg_color_class(kind: BackgroundType, key: &str) -> &'static str {
    Catalogs::global().bg_color_class(kind, key)
}

/// Box shadow value for a level of [`SHADOW_SCALE`]; `""` when out of range.
pub fn shadow_property(level: i64) -> &'static str {
    usize::try_from(level)
        .ok()
        .and_then(|i| SHADOW_SCALE.get(i))
        .copied()
        .unwrap_or("")
}

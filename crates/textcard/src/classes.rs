//! Class-based fragments applied next to the style record.

use crate::catalog::{Catalogs, ColorRole};
use crate::helpers::{alignment_class, ratio_class};
use crate::options::ContentOptions;

/// Classes for the canvas frame and the text element.
///
/// Every part follows its lookup's fallback: unknown catalog keys produce
/// empty strings (or `None` for the font), never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentClasses {
    pub ratio: &'static str,
    pub background: &'static str,
    pub font: Option<&'static str>,
    pub text_color: &'static str,
    pub alignment: &'static str,
}

impl ContentClasses {
    /// Classes for the canvas element, joined with spaces.
    pub fn frame(&self) -> String {
        join([self.ratio, self.background])
    }

    /// Classes for the text element, joined with spaces.
    pub fn text(&self) -> String {
        join([self.font.unwrap_or(""), self.text_color, self.alignment])
    }

    /// All non-empty classes, frame first, joined with spaces.
    pub fn into_class_string(self) -> String {
        join([
            self.ratio,
            self.background,
            self.font.unwrap_or(""),
            self.text_color,
            self.alignment,
        ])
    }
}

fn join<const N: usize>(parts: [&str; N]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

impl Catalogs {
    /// Gathers the class fragments for `options` from these catalogs.
    pub fn content_classes(&self, options: &ContentOptions) -> ContentClasses {
        ContentClasses {
            ratio: ratio_class(options.ratio),
            background: self.bg_color_class(options.background_type, &options.background_key),
            font: self.font_class(&options.font_key),
            text_color: options
                .text_color_key
                .map(|index| self.text_color_class(index, ColorRole::Text))
                .unwrap_or(""),
            alignment: alignment_class(options.alignment),
        }
    }
}

/// Gathers the class fragments for `options` from the built-in catalogs.
///
/// ```rust
/// use textcard::{content_classes, Alignment, ContentOptions, Ratio};
///
/// let classes = content_classes(&ContentOptions {
///     ratio: Ratio::Square,
///     alignment: Alignment::Left,
///     font_key: "inter".into(),
///     ..ContentOptions::default()
/// });
/// assert_eq!(classes.frame(), "aspect-square w-full");
/// assert_eq!(classes.text(), "font-inter font-semibold text-left");
/// ```
pub fn content_classes(options: &ContentOptions) -> ContentClasses {
    Catalogs::global().content_classes(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BackgroundType, Ratio};
    use crate::FULL_RATIO_CLASS;

    #[test]
    fn test_defaults_use_fallbacks() {
        let classes = content_classes(&ContentOptions::default());
        assert_eq!(classes.ratio, FULL_RATIO_CLASS);
        assert_eq!(classes.background, "");
        assert_eq!(classes.font, None);
        assert_eq!(classes.text_color, "");
        assert_eq!(classes.alignment, "text-center");
        assert_eq!(classes.text(), "text-center");
    }

    #[test]
    fn test_full_selection() {
        let classes = content_classes(&ContentOptions {
            ratio: Ratio::Story,
            background_type: BackgroundType::Solid,
            background_key: "black".into(),
            font_key: "lobster".into(),
            text_color_key: Some(0),
            ..ContentOptions::default()
        });
        assert_eq!(classes.frame(), "aspect-[9/16] w-full bg-black");
        assert_eq!(classes.text(), "font-lobster text-white text-center");
        assert_eq!(
            classes.into_class_string(),
            "aspect-[9/16] w-full bg-black font-lobster text-white text-center"
        );
    }

    #[test]
    fn test_unknown_keys_are_skipped() {
        let classes = content_classes(&ContentOptions {
            background_type: BackgroundType::Mesh,
            background_key: "nope".into(),
            font_key: "nope".into(),
            text_color_key: Some(500),
            ..ContentOptions::default()
        });
        assert_eq!(classes.background, "");
        assert_eq!(classes.font, None);
        assert_eq!(classes.text_color, "");
    }
}

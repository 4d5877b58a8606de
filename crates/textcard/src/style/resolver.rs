//! Composite style resolution.

use once_cell::sync::Lazy;
use textcard_markup::MarkupStripper;

use super::config::{LineGap, ResolverConfig};
use super::record::StyleRecord;
use crate::helpers::shadow_property;
use crate::options::ContentOptions;
use crate::util::{finite_or_zero, format_number, positive};
use crate::validator::{is_empty_text_with, MarkupSanitizer};

/// Turns [`ContentOptions`] into a [`StyleRecord`].
///
/// Resolution is pure: the same options always produce the same record,
/// and a resolver can be shared freely across threads.
///
/// # Example
///
/// ```rust
/// use textcard::{ContentOptions, StyleResolver, Tint};
///
/// let resolver = StyleResolver::new();
/// let style = resolver.resolve(&ContentOptions {
///     text: "Hello".into(),
///     box_background: Tint::Black,
///     box_background_opacity: 0.4,
///     ..ContentOptions::default()
/// });
/// assert_eq!(style.background_color.as_deref(), Some("rgba(0, 0, 0, 0.4)"));
/// assert_eq!(style.letter_spacing.as_deref(), Some("0px"));
/// ```
#[derive(Debug, Clone)]
pub struct StyleResolver<S = MarkupStripper> {
    sanitizer: S,
    config: ResolverConfig,
}

impl StyleResolver {
    /// Creates a resolver with the plain-text stripper and default config.
    pub fn new() -> Self {
        Self::with_sanitizer(MarkupStripper::default())
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MarkupSanitizer> StyleResolver<S> {
    /// Creates a resolver that uses `sanitizer` for the emptiness gate.
    pub fn with_sanitizer(sanitizer: S) -> Self {
        Self {
            sanitizer,
            config: ResolverConfig::default(),
        }
    }

    /// Replaces the configuration, returning the updated resolver for chaining.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves `options` into a style record.
    ///
    /// Blocks are applied in a fixed order: typography, box decoration
    /// (only for non-empty content with a box background), stroke, glow,
    /// and finally letter spacing, which is always present.
    pub fn resolve(&self, options: &ContentOptions) -> StyleRecord {
        let content_is_not_empty = !is_empty_text_with(&self.sanitizer, &options.text);
        let mut style = StyleRecord::default();

        if let Some(size) = positive(options.text_size) {
            style.font_size = Some(format!("{}rem", format_number(size)));
        }

        if let Some(line_height) = positive(options.text_line_height) {
            style.line_height = Some(format_number(line_height));
            if self.config.line_gap == LineGap::Derived {
                style.gap = self.spacing(line_height * 3.0);
            }
        }

        let boxed = content_is_not_empty && options.box_background.is_set();
        if boxed {
            self.apply_box(options, &mut style);
        }

        if let Some(color) = options.text_stroke.hex() {
            style.paint_order = Some("stroke fill".to_string());
            style.webkit_text_stroke = Some(format!(
                "{}px {}",
                format_number(non_negative(options.text_stroke_size)),
                color
            ));
        }

        if let Some(color) = options.text_shadow.hex() {
            let size = format_number(non_negative(options.text_shadow_size));
            style.text_shadow = Some(format!(
                "0 0 {size}vh {color}, 0 0 {size}vh {color}, 0 0 0.1vh {color}"
            ));
        }

        style.letter_spacing = Some(format!(
            "{}px",
            format_number(finite_or_zero(options.text_letter_spacing))
        ));

        tracing::trace!(
            content_is_not_empty,
            boxed,
            stroke = options.text_stroke.is_set(),
            glow = options.text_shadow.is_set(),
            attributes = style.len(),
            "resolved content styles"
        );

        style
    }

    fn apply_box(&self, options: &ContentOptions, style: &mut StyleRecord) {
        style.overflow = Some("hidden".to_string());

        if let Some((r, g, b)) = options.box_background.rgb() {
            style.background_color = Some(format!(
                "rgba({}, {}, {}, {})",
                r,
                g,
                b,
                format_number(opacity(options.box_background_opacity))
            ));
        }

        style.padding = positive(options.box_inner_padding).and_then(|p| self.spacing(p));
        style.border_radius = positive(options.box_border_radius).and_then(|r| self.spacing(r));

        if options.box_glossy {
            let shadow = shadow_property(options.box_glossy_shadow);
            if !shadow.is_empty() {
                style.box_shadow = Some(shadow.to_string());
            }
            if let Some(blur) = positive(options.box_glossy_blur) {
                style.backdrop_filter = Some(format!("blur({}px)", format_number(blur)));
            }
        }
    }

    /// Converts spacing units to a `rem` length, or `None` if the length
    /// overflows.
    fn spacing(&self, units: f64) -> Option<String> {
        positive(units * self.config.effective_spacing_unit())
            .map(|rem| format!("{}rem", format_number(rem)))
    }
}

fn non_negative(value: f64) -> f64 {
    positive(value).unwrap_or(0.0)
}

/// Clamps to `[0, 1]`; non-finite opacity is treated as fully opaque.
fn opacity(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

static DEFAULT_RESOLVER: Lazy<StyleResolver> = Lazy::new(StyleResolver::new);

/// Resolves `options` with the default resolver.
///
/// Equivalent to `StyleResolver::new().resolve(options)` without building
/// a resolver per call.
pub fn content_styles(options: &ContentOptions) -> StyleRecord {
    DEFAULT_RESOLVER.resolve(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Tint;
    use crate::SHADOW_SCALE;

    fn with_text(text: &str) -> ContentOptions {
        ContentOptions {
            text: text.to_string(),
            ..ContentOptions::default()
        }
    }

    #[test]
    fn test_defaults_only_letter_spacing() {
        let style = content_styles(&ContentOptions::default());
        assert_eq!(style.letter_spacing.as_deref(), Some("0px"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_typography() {
        let style = content_styles(&ContentOptions {
            text_size: 2.0,
            text_line_height: 1.5,
            ..with_text("Hi")
        });
        assert_eq!(style.font_size.as_deref(), Some("2rem"));
        assert_eq!(style.line_height.as_deref(), Some("1.5"));
        assert_eq!(style.gap, None);
    }

    #[test]
    fn test_non_positive_numbers_are_absent() {
        let style = content_styles(&ContentOptions {
            text_size: -1.0,
            text_line_height: f64::NAN,
            ..with_text("Hi")
        });
        assert_eq!(style.font_size, None);
        assert_eq!(style.line_height, None);
    }

    #[test]
    fn test_derived_line_gap() {
        let resolver = StyleResolver::new()
            .with_config(ResolverConfig::default().line_gap(LineGap::Derived));
        let style = resolver.resolve(&ContentOptions {
            text_line_height: 2.0,
            ..with_text("Hi")
        });
        assert_eq!(style.line_height.as_deref(), Some("2"));
        assert_eq!(style.gap.as_deref(), Some("1.5rem"));
    }

    #[test]
    fn test_box_black_formula() {
        let style = content_styles(&ContentOptions {
            box_background: Tint::Black,
            box_background_opacity: 0.4,
            ..with_text("Hello")
        });
        assert_eq!(style.overflow.as_deref(), Some("hidden"));
        assert_eq!(style.background_color.as_deref(), Some("rgba(0, 0, 0, 0.4)"));
        assert_eq!(style.padding, None);
        assert_eq!(style.border_radius, None);
    }

    #[test]
    fn test_box_suppressed_for_empty_markup() {
        let style = content_styles(&ContentOptions {
            box_background: Tint::Black,
            box_background_opacity: 1.0,
            box_inner_padding: 4.0,
            ..with_text("<p>   </p>")
        });
        assert_eq!(style.background_color, None);
        assert_eq!(style.overflow, None);
        assert_eq!(style.padding, None);
    }

    #[test]
    fn test_box_requires_background() {
        let style = content_styles(&ContentOptions {
            box_inner_padding: 4.0,
            box_glossy: true,
            ..with_text("Hello")
        });
        assert_eq!(style.padding, None);
        assert_eq!(style.box_shadow, None);
    }

    #[test]
    fn test_opacity_is_clamped() {
        let style = content_styles(&ContentOptions {
            box_background: Tint::White,
            box_background_opacity: 3.0,
            ..with_text("x")
        });
        assert_eq!(
            style.background_color.as_deref(),
            Some("rgba(255, 255, 255, 1)")
        );

        let style = content_styles(&ContentOptions {
            box_background: Tint::White,
            box_background_opacity: f64::NAN,
            ..with_text("x")
        });
        assert_eq!(
            style.background_color.as_deref(),
            Some("rgba(255, 255, 255, 1)")
        );
    }

    #[test]
    fn test_glossy_box() {
        let style = content_styles(&ContentOptions {
            box_background: Tint::White,
            box_background_opacity: 0.2,
            box_glossy: true,
            box_glossy_blur: 12.0,
            box_glossy_shadow: 3,
            ..with_text("Glass")
        });
        assert_eq!(style.box_shadow.as_deref(), Some(SHADOW_SCALE[3]));
        assert_eq!(style.backdrop_filter.as_deref(), Some("blur(12px)"));
    }

    #[test]
    fn test_glossy_out_of_range_shadow_is_absent() {
        let style = content_styles(&ContentOptions {
            box_background: Tint::White,
            box_glossy: true,
            box_glossy_shadow: 99,
            ..with_text("Glass")
        });
        assert_eq!(style.box_shadow, None);
        assert_eq!(style.backdrop_filter, None);
    }

    #[test]
    fn test_stroke_white() {
        let style = content_styles(&ContentOptions {
            text_stroke: Tint::White,
            text_stroke_size: 2.0,
            ..with_text("Stroke")
        });
        assert_eq!(style.paint_order.as_deref(), Some("stroke fill"));
        assert_eq!(style.webkit_text_stroke.as_deref(), Some("2px #ffffff"));
    }

    #[test]
    fn test_stroke_applies_to_empty_text() {
        let style = content_styles(&ContentOptions {
            text_stroke: Tint::Black,
            text_stroke_size: 1.0,
            ..ContentOptions::default()
        });
        assert_eq!(style.webkit_text_stroke.as_deref(), Some("1px #000000"));
    }

    #[test]
    fn test_glow_layers() {
        let style = content_styles(&ContentOptions {
            text_shadow: Tint::Black,
            text_shadow_size: 1.5,
            ..with_text("Glow")
        });
        assert_eq!(
            style.text_shadow.as_deref(),
            Some("0 0 1.5vh #000000, 0 0 1.5vh #000000, 0 0 0.1vh #000000")
        );
    }

    #[test]
    fn test_letter_spacing_values() {
        let negative = content_styles(&ContentOptions {
            text_letter_spacing: -1.25,
            ..ContentOptions::default()
        });
        assert_eq!(negative.letter_spacing.as_deref(), Some("-1.25px"));

        let invalid = content_styles(&ContentOptions {
            text_letter_spacing: f64::NAN,
            ..ContentOptions::default()
        });
        assert_eq!(invalid.letter_spacing.as_deref(), Some("0px"));
    }

    #[test]
    fn test_overflowing_spacing_is_absent() {
        let resolver = StyleResolver::new()
            .with_config(ResolverConfig::default().line_gap(LineGap::Derived));
        let style = resolver.resolve(&ContentOptions {
            text_line_height: f64::MAX,
            box_background: Tint::Black,
            box_inner_padding: f64::MAX,
            box_border_radius: 2.0,
            ..with_text("Hi")
        });
        assert!(style.line_height.is_some());
        assert_eq!(style.gap, None);
        assert_eq!(style.padding, None);
        assert_eq!(style.border_radius.as_deref(), Some("0.5rem"));
        assert!(!style.to_css().contains("inf"));
    }

    #[test]
    fn test_custom_spacing_unit() {
        let resolver = StyleResolver::new()
            .with_config(ResolverConfig::default().spacing_unit_rem(0.5));
        let style = resolver.resolve(&ContentOptions {
            box_background: Tint::Black,
            box_inner_padding: 3.0,
            ..with_text("x")
        });
        assert_eq!(style.padding.as_deref(), Some("1.5rem"));
    }

    struct NeverEmpty;

    impl MarkupSanitizer for NeverEmpty {
        fn strip(&self, _text: &str) -> String {
            "content".to_string()
        }
    }

    #[test]
    fn test_injected_sanitizer_drives_gate() {
        let resolver = StyleResolver::with_sanitizer(NeverEmpty);
        let style = resolver.resolve(&ContentOptions {
            box_background: Tint::Black,
            ..with_text("<p> </p>")
        });
        assert_eq!(style.overflow.as_deref(), Some("hidden"));
    }
}

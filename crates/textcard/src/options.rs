//! The options record accepted by the resolver.
//!
//! Every option the editor exposes is a typed field with a documented
//! default. Deserialization is lenient so that option bags coming from a UI
//! layer never fail to load:
//!
//! - numbers may be given as numbers or strings (`"2.5"`, `"4px"`), and
//!   unparsable values become `NaN`, which the resolver treats as unset;
//! - enum-like options accept any string, falling back to their default;
//! - text and key fields take numbers as their decimal text;
//! - `null`, booleans in text or key fields, and arrays or objects anywhere
//!   are the same as omitting the field.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::util::{format_number, parse_float};

/// Black or white selection used by the box, stroke and glow options.
///
/// The empty key (`""`) and any unknown key select [`Tint::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tint {
    #[default]
    None,
    Black,
    White,
}

impl Tint {
    /// Maps a selection key to a tint. Total: unknown keys give `None`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "black" => Tint::Black,
            "white" => Tint::White,
            _ => Tint::None,
        }
    }

    /// Returns the selection key for this tint.
    pub fn as_key(self) -> &'static str {
        match self {
            Tint::None => "",
            Tint::Black => "black",
            Tint::White => "white",
        }
    }

    /// Returns `true` unless this is [`Tint::None`].
    pub fn is_set(self) -> bool {
        self != Tint::None
    }

    /// RGB channels for the tint, if one is selected.
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Tint::None => None,
            Tint::Black => Some((0, 0, 0)),
            Tint::White => Some((255, 255, 255)),
        }
    }

    /// Hex color for the tint, if one is selected.
    pub fn hex(self) -> Option<&'static str> {
        match self {
            Tint::None => None,
            Tint::Black => Some("#000000"),
            Tint::White => Some("#ffffff"),
        }
    }
}

/// Canvas aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ratio {
    /// `9/16`
    Story,
    /// `1/1`
    Square,
    /// `4/5`
    Portrait,
    /// `16/9`
    Landscape,
    /// `10/16`
    Tall,
    /// `full`: auto height, filling the viewport. Also the fallback.
    #[default]
    Full,
}

impl Ratio {
    pub const ALL: [Ratio; 6] = [
        Ratio::Story,
        Ratio::Square,
        Ratio::Portrait,
        Ratio::Landscape,
        Ratio::Tall,
        Ratio::Full,
    ];

    /// Maps a ratio key to a ratio. Unknown keys give [`Ratio::Full`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "9/16" => Ratio::Story,
            "1/1" => Ratio::Square,
            "4/5" => Ratio::Portrait,
            "16/9" => Ratio::Landscape,
            "10/16" => Ratio::Tall,
            _ => Ratio::Full,
        }
    }

    /// Like [`Ratio::from_key`], treating a missing key as the fallback.
    pub fn from_key_opt(key: Option<&str>) -> Self {
        key.map(Ratio::from_key).unwrap_or_default()
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Ratio::Story => "9/16",
            Ratio::Square => "1/1",
            Ratio::Portrait => "4/5",
            Ratio::Landscape => "16/9",
            Ratio::Tall => "10/16",
            Ratio::Full => "full",
        }
    }
}

/// Horizontal text alignment. Defaults to [`Alignment::Center`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// Maps an alignment key. Unknown keys give [`Alignment::Center`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "left" => Alignment::Left,
            "right" => Alignment::Right,
            _ => Alignment::Center,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// The kind of canvas background, selecting which background catalog a
/// background key is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundType {
    /// No background treatment. Unknown type keys map here.
    #[default]
    None,
    Solid,
    Gradient,
    Mesh,
}

impl BackgroundType {
    pub const CATALOGED: [BackgroundType; 3] = [
        BackgroundType::Solid,
        BackgroundType::Gradient,
        BackgroundType::Mesh,
    ];

    pub fn from_key(key: &str) -> Self {
        match key {
            "solid" => BackgroundType::Solid,
            "gradient" => BackgroundType::Gradient,
            "mesh" => BackgroundType::Mesh,
            _ => BackgroundType::None,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            BackgroundType::None => "",
            BackgroundType::Solid => "solid",
            BackgroundType::Gradient => "gradient",
            BackgroundType::Mesh => "mesh",
        }
    }
}

macro_rules! keyed_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_key())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let key = lenient_text(deserializer)?;
                    Ok(<$ty>::from_key(&key))
                }
            }
        )*
    };
}

keyed_serde!(Tint, Ratio, Alignment, BackgroundType);

/// The complete set of presentation options for one resolution pass.
///
/// Field names serialize in camelCase (`textSize`, `boxBackground`, ...).
/// All fields default to their "falsy" value, so an empty record resolves
/// to a style containing only the letter spacing.
///
/// # Example
///
/// ```rust
/// use textcard::{ContentOptions, Tint};
///
/// let options = ContentOptions {
///     text: "Hello".into(),
///     text_size: 2.0,
///     box_background: Tint::White,
///     box_background_opacity: 0.8,
///     ..ContentOptions::default()
/// };
/// assert!(options.box_background.is_set());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentOptions {
    /// Content to style. May contain markup.
    #[serde(deserialize_with = "lenient_text")]
    pub text: String,

    /// Font size in root-relative units. Unset when not positive.
    #[serde(deserialize_with = "lenient_number")]
    pub text_size: f64,
    /// Unitless line height. Unset when not positive.
    #[serde(deserialize_with = "lenient_number")]
    pub text_line_height: f64,
    /// Letter spacing in pixels. Any real value.
    #[serde(deserialize_with = "lenient_number")]
    pub text_letter_spacing: f64,

    pub box_background: Tint,
    /// Opacity of the box background color, clamped to `[0, 1]`.
    #[serde(deserialize_with = "lenient_number")]
    pub box_background_opacity: f64,
    /// Inner padding in spacing units.
    #[serde(deserialize_with = "lenient_number")]
    pub box_inner_padding: f64,
    /// Border radius in spacing units.
    #[serde(deserialize_with = "lenient_number")]
    pub box_border_radius: f64,

    #[serde(deserialize_with = "lenient_bool")]
    pub box_glossy: bool,
    /// Backdrop blur in pixels.
    #[serde(deserialize_with = "lenient_number")]
    pub box_glossy_blur: f64,
    /// Index into the shadow scale (see [`crate::shadow_property`]).
    #[serde(deserialize_with = "lenient_index")]
    pub box_glossy_shadow: i64,

    pub text_stroke: Tint,
    /// Stroke width in pixels.
    #[serde(deserialize_with = "lenient_number")]
    pub text_stroke_size: f64,

    #[serde(alias = "textGlow")]
    pub text_shadow: Tint,
    /// Glow size in viewport-height units.
    #[serde(alias = "textGlowSize", deserialize_with = "lenient_number")]
    pub text_shadow_size: f64,

    #[serde(alias = "font", deserialize_with = "lenient_text")]
    pub font_key: String,
    /// Index into the text color catalog. `None` selects nothing.
    #[serde(alias = "textColor", deserialize_with = "lenient_catalog_index")]
    pub text_color_key: Option<usize>,
    pub background_type: BackgroundType,
    #[serde(alias = "background", deserialize_with = "lenient_text")]
    pub background_key: String,

    pub ratio: Ratio,
    pub alignment: Alignment,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_size: 0.0,
            text_line_height: 0.0,
            text_letter_spacing: 0.0,
            box_background: Tint::None,
            box_background_opacity: 0.0,
            box_inner_padding: 0.0,
            box_border_radius: 0.0,
            box_glossy: false,
            box_glossy_blur: 0.0,
            box_glossy_shadow: 0,
            text_stroke: Tint::None,
            text_stroke_size: 0.0,
            text_shadow: Tint::None,
            text_shadow_size: 0.0,
            font_key: String::new(),
            text_color_key: None,
            background_type: BackgroundType::None,
            background_key: String::new(),
            ratio: Ratio::Full,
            alignment: Alignment::Center,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(s)) => s,
        Some(Loose::Number(n)) if n.is_finite() => format_number(n),
        _ => String::new(),
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => 0.0,
        Some(Loose::Number(n)) => n,
        Some(Loose::Text(s)) => parse_float(&s),
        Some(Loose::Bool(_) | Loose::Other(_)) => f64::NAN,
    })
}

/// Numbers and non-empty strings are truthy, except `"false"` and `"0"`.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => false,
        Some(Loose::Bool(b)) => b,
        Some(Loose::Number(n)) => n != 0.0 && !n.is_nan(),
        Some(Loose::Text(s)) => !matches!(s.trim(), "" | "false" | "0"),
        Some(Loose::Other(_)) => false,
    })
}

/// Non-finite values become `-1`, which is out of range for every scale.
fn lenient_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = lenient_number(deserializer)?;
    Ok(if value.is_finite() {
        value.trunc() as i64
    } else {
        -1
    })
}

fn lenient_catalog_index<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<usize>, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(n)) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 => {
            Some(n as usize)
        }
        Some(Loose::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_from_key_is_total() {
        assert_eq!(Tint::from_key("black"), Tint::Black);
        assert_eq!(Tint::from_key("white"), Tint::White);
        assert_eq!(Tint::from_key(""), Tint::None);
        assert_eq!(Tint::from_key("purple"), Tint::None);
    }

    #[test]
    fn test_tint_colors() {
        assert_eq!(Tint::Black.hex(), Some("#000000"));
        assert_eq!(Tint::White.rgb(), Some((255, 255, 255)));
        assert_eq!(Tint::None.hex(), None);
    }

    #[test]
    fn test_ratio_keys_round_trip() {
        for ratio in Ratio::ALL {
            assert_eq!(Ratio::from_key(ratio.as_key()), ratio);
        }
        assert_eq!(Ratio::from_key("3/2"), Ratio::Full);
        assert_eq!(Ratio::from_key_opt(None), Ratio::Full);
    }

    #[test]
    fn test_alignment_default_is_center() {
        assert_eq!(Alignment::default(), Alignment::Center);
        assert_eq!(Alignment::from_key("justify"), Alignment::Center);
        assert_eq!(Alignment::from_key("left"), Alignment::Left);
    }

    #[test]
    fn test_deserialize_empty_object_gives_defaults() {
        let options: ContentOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ContentOptions::default());
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let options: ContentOptions = serde_json::from_str(
            r#"{
                "text": "Hi",
                "textSize": 2,
                "boxBackground": "white",
                "boxBackgroundOpacity": 0.8,
                "ratio": "4/5",
                "alignment": "left",
                "backgroundType": "gradient",
                "backgroundKey": "sunset",
                "textColorKey": 3
            }"#,
        )
        .unwrap();
        assert_eq!(options.text, "Hi");
        assert_eq!(options.text_size, 2.0);
        assert_eq!(options.box_background, Tint::White);
        assert_eq!(options.ratio, Ratio::Portrait);
        assert_eq!(options.alignment, Alignment::Left);
        assert_eq!(options.background_type, BackgroundType::Gradient);
        assert_eq!(options.text_color_key, Some(3));
    }

    #[test]
    fn test_deserialize_numbers_from_strings() {
        let options: ContentOptions =
            serde_json::from_str(r#"{"textSize": "1.5", "textStrokeSize": "2px", "textLineHeight": "tall"}"#)
                .unwrap();
        assert_eq!(options.text_size, 1.5);
        assert_eq!(options.text_stroke_size, 2.0);
        assert!(options.text_line_height.is_nan());
    }

    #[test]
    fn test_deserialize_nulls_and_unknown_enums() {
        let options: ContentOptions = serde_json::from_str(
            r#"{"text": null, "textSize": null, "boxBackground": "red", "ratio": null, "textStroke": null}"#,
        )
        .unwrap();
        assert_eq!(options.text, "");
        assert_eq!(options.text_size, 0.0);
        assert_eq!(options.box_background, Tint::None);
        assert_eq!(options.ratio, Ratio::Full);
        assert_eq!(options.text_stroke, Tint::None);
    }

    #[test]
    fn test_wrong_value_types_fall_back() {
        let options = ContentOptions::from_json_str(
            r#"{"text": "Hi", "boxBackground": false, "textSize": 2, "ratio": 16, "alignment": []}"#,
        )
        .unwrap();
        assert_eq!(options.text, "Hi");
        assert_eq!(options.box_background, Tint::None);
        assert_eq!(options.text_size, 2.0);
        assert_eq!(options.ratio, Ratio::Full);
        assert_eq!(options.alignment, Alignment::Center);
    }

    #[test]
    fn test_numbers_in_text_fields_become_text() {
        let options = ContentOptions::from_json_str(r#"{"fontKey": 3, "text": 5, "backgroundKey": 1.5}"#)
            .unwrap();
        assert_eq!(options.font_key, "3");
        assert_eq!(options.text, "5");
        assert_eq!(options.background_key, "1.5");

        let options =
            ContentOptions::from_json_str(r#"{"text": true, "fontKey": {"name": "inter"}}"#).unwrap();
        assert_eq!(options.text, "");
        assert_eq!(options.font_key, "");
    }

    #[test]
    fn test_structured_values_in_numeric_fields() {
        let options =
            ContentOptions::from_json_str(r#"{"textSize": [2], "boxGlossy": {}, "textColorKey": [1]}"#)
                .unwrap();
        assert!(options.text_size.is_nan());
        assert!(!options.box_glossy);
        assert_eq!(options.text_color_key, None);
    }

    #[test]
    fn test_text_glow_alias() {
        let options: ContentOptions =
            serde_json::from_str(r#"{"textGlow": "black", "textGlowSize": 1}"#).unwrap();
        assert_eq!(options.text_shadow, Tint::Black);
        assert_eq!(options.text_shadow_size, 1.0);
    }

    #[test]
    fn test_lenient_bool_and_index() {
        let options: ContentOptions =
            serde_json::from_str(r#"{"boxGlossy": "true", "boxGlossyShadow": 3.7}"#).unwrap();
        assert!(options.box_glossy);
        assert_eq!(options.box_glossy_shadow, 3);

        let options: ContentOptions =
            serde_json::from_str(r#"{"boxGlossy": "false", "boxGlossyShadow": "x"}"#).unwrap();
        assert!(!options.box_glossy);
        assert_eq!(options.box_glossy_shadow, -1);
    }

    #[test]
    fn test_text_color_key_forms() {
        let from_str: ContentOptions = serde_json::from_str(r#"{"textColorKey": "2"}"#).unwrap();
        assert_eq!(from_str.text_color_key, Some(2));
        let negative: ContentOptions = serde_json::from_str(r#"{"textColorKey": -1}"#).unwrap();
        assert_eq!(negative.text_color_key, None);
        let fractional: ContentOptions = serde_json::from_str(r#"{"textColorKey": 1.5}"#).unwrap();
        assert_eq!(fractional.text_color_key, None);
    }

    #[test]
    fn test_serialize_uses_keys() {
        let options = ContentOptions {
            ratio: Ratio::Story,
            box_background: Tint::Black,
            ..ContentOptions::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["ratio"], "9/16");
        assert_eq!(value["boxBackground"], "black");
        assert_eq!(value["textShadow"], "");
    }
}

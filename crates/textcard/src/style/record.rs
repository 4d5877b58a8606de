//! The resolved style record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Concrete rendering attributes produced by the resolver.
///
/// Each attribute is optional; `None` means "leave unstyled", never "reset".
/// Serializing produces a flat camelCase map with absent attributes
/// omitted, matching the keys a DOM style object expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paint_order: Option<String>,
    #[serde(
        rename = "WebkitTextStroke",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub webkit_text_stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
}

impl StyleRecord {
    /// `(style key, css property, value)` for every attribute, in output order.
    fn fields(&self) -> [(&'static str, &'static str, &Option<String>); 13] {
        [
            ("fontSize", "font-size", &self.font_size),
            ("lineHeight", "line-height", &self.line_height),
            ("gap", "gap", &self.gap),
            ("overflow", "overflow", &self.overflow),
            ("backgroundColor", "background-color", &self.background_color),
            ("padding", "padding", &self.padding),
            ("borderRadius", "border-radius", &self.border_radius),
            ("boxShadow", "box-shadow", &self.box_shadow),
            ("backdropFilter", "backdrop-filter", &self.backdrop_filter),
            ("paintOrder", "paint-order", &self.paint_order),
            ("WebkitTextStroke", "-webkit-text-stroke", &self.webkit_text_stroke),
            ("textShadow", "text-shadow", &self.text_shadow),
            ("letterSpacing", "letter-spacing", &self.letter_spacing),
        ]
    }

    /// Present attributes as `(css property, value)` pairs, in a fixed order.
    pub fn declarations(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields()
            .into_iter()
            .filter_map(|(_, property, value)| value.as_deref().map(|v| (property, v)))
    }

    /// Renders present attributes as an inline CSS declaration list.
    ///
    /// ```rust
    /// use textcard::StyleRecord;
    ///
    /// let record = StyleRecord {
    ///     font_size: Some("2rem".into()),
    ///     letter_spacing: Some("0px".into()),
    ///     ..StyleRecord::default()
    /// };
    /// assert_eq!(record.to_css(), "font-size: 2rem; letter-spacing: 0px;");
    /// ```
    pub fn to_css(&self) -> String {
        self.declarations()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Present attributes as a JSON object keyed by style key.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields()
            .into_iter()
            .filter_map(|(key, _, value)| {
                value
                    .as_ref()
                    .map(|v| (key.to_string(), Value::String(v.clone())))
            })
            .collect();
        Value::Object(map)
    }

    /// Number of present attributes.
    pub fn len(&self) -> usize {
        self.fields().iter().filter(|(_, _, v)| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

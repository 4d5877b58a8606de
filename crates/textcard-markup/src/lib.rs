//! Markup stripping for plain-text extraction.
//!
//! [`MarkupStripper`] parses its input as an HTML body fragment with
//! `html5ever` and returns the text content. Which tags and attributes survive
//! is controlled by [`StripConfig`]; the default configuration allows none,
//! which makes the stripper a "markup to plain text" function.
//!
//! Character references are decoded the way browsers decode them, including
//! the legacy forms without a trailing semicolon (`&nbsp`).
//!
//! ```rust
//! use textcard_markup::MarkupStripper;
//!
//! let stripper = MarkupStripper::default();
//! assert_eq!(stripper.strip("<p>Hello <b>world</b></p>"), "Hello world");
//! assert_eq!(stripper.strip("<script>alert(1)</script>ok"), "ok");
//! assert_eq!(stripper.strip("Fish &amp; Chips"), "Fish & Chips");
//! ```

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_fragment, LocalName, Namespace, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Elements whose text content is dropped along with the tags.
const DROPPED_CONTENT_TAGS: &[&str] = &["script", "style", "textarea", "noscript"];

/// Elements that never have an end tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Controls what survives stripping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripConfig {
    /// Tag names (lowercase) that are kept in the output.
    pub allowed_tags: Vec<String>,
    /// Attribute names (lowercase) kept on allowed tags.
    pub allowed_attributes: Vec<String>,
}

impl StripConfig {
    /// Allows nothing: every tag and attribute is removed.
    pub fn plain_text() -> Self {
        Self::default()
    }

    /// Adds an allowed tag, returning the updated config for chaining.
    pub fn allow_tag(mut self, tag: &str) -> Self {
        self.allowed_tags.push(tag.to_ascii_lowercase());
        self
    }

    /// Adds an allowed attribute, returning the updated config for chaining.
    pub fn allow_attribute(mut self, attr: &str) -> Self {
        self.allowed_attributes.push(attr.to_ascii_lowercase());
        self
    }

    /// Whether stripped output can contain markup.
    pub fn emits_markup(&self) -> bool {
        !self.allowed_tags.is_empty()
    }

    fn is_tag_allowed(&self, name: &str) -> bool {
        self.allowed_tags.iter().any(|t| t == name)
    }

    fn is_attribute_allowed(&self, name: &str) -> bool {
        self.allowed_attributes.iter().any(|a| a == name)
    }
}

/// Removes markup from text according to a [`StripConfig`].
///
/// With the plain-text config the output is decoded text. When any tag is
/// allowed the output is markup, so text is escaped again.
#[derive(Debug, Clone, Default)]
pub struct MarkupStripper {
    config: StripConfig,
}

impl MarkupStripper {
    /// Creates a stripper with the given configuration.
    pub fn new(config: StripConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Strips markup from `input`.
    ///
    /// Never fails: malformed markup is recovered by the HTML parsing
    /// algorithm.
    pub fn strip(&self, input: &str) -> String {
        let dom = parse_body_fragment(input);
        let mut out = String::with_capacity(input.len());
        // A fragment parses into a synthetic <html> root holding the content.
        for root in dom.document.children.borrow().iter() {
            for child in root.children.borrow().iter() {
                self.write_node(child, &mut out);
            }
        }
        out
    }

    fn write_node(&self, handle: &Handle, out: &mut String) {
        match &handle.data {
            NodeData::Text { contents } => {
                let text = contents.borrow();
                if self.config.emits_markup() {
                    escape_into(&text, false, out);
                } else {
                    out.push_str(&text);
                }
            }
            NodeData::Element { name, attrs, .. } => {
                let tag = name.local.as_ref();
                let allowed = self.config.is_tag_allowed(tag);
                if !allowed && DROPPED_CONTENT_TAGS.contains(&tag) {
                    return;
                }

                if allowed {
                    out.push('<');
                    out.push_str(tag);
                    for attr in attrs.borrow().iter() {
                        let attr_name = attr.name.local.as_ref();
                        if !self.config.is_attribute_allowed(attr_name) {
                            continue;
                        }
                        out.push(' ');
                        out.push_str(attr_name);
                        out.push_str("=\"");
                        escape_into(&attr.value, true, out);
                        out.push('"');
                    }
                    out.push('>');
                }

                for child in handle.children.borrow().iter() {
                    self.write_node(child, out);
                }

                if allowed && !VOID_TAGS.contains(&tag) {
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
            }
            _ => {}
        }
    }
}

fn parse_body_fragment(input: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let context = QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from("body"),
    );
    parse_fragment(RcDom::default(), opts, context, Vec::new()).one(input)
}

fn escape_into(text: &str, in_attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Strips all markup from `input` with the default (plain text) config.
pub fn strip_markup(input: &str) -> String {
    MarkupStripper::default().strip(input)
}

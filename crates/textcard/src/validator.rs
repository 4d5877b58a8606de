//! Emptiness gate for styled content.

use once_cell::sync::Lazy;
use textcard_markup::{MarkupStripper, StripConfig};

/// A capability that removes all tags and attributes, returning plain text.
///
/// Any compliant markup sanitizer can be injected into
/// [`StyleResolver`](crate::StyleResolver) through this trait.
pub trait MarkupSanitizer: Send + Sync {
    fn strip(&self, text: &str) -> String;
}

impl MarkupSanitizer for MarkupStripper {
    fn strip(&self, text: &str) -> String {
        MarkupStripper::strip(self, text)
    }
}

impl<S: MarkupSanitizer + ?Sized> MarkupSanitizer for &S {
    fn strip(&self, text: &str) -> String {
        (**self).strip(text)
    }
}

impl<S: MarkupSanitizer + ?Sized> MarkupSanitizer for Box<S> {
    fn strip(&self, text: &str) -> String {
        (**self).strip(text)
    }
}

static PLAIN_TEXT: Lazy<MarkupStripper> = Lazy::new(|| MarkupStripper::new(StripConfig::plain_text()));

/// Returns `true` if `text` has no visible content once markup is removed.
///
/// Whitespace (including non-breaking spaces) does not count as content.
///
/// ```rust
/// use textcard::is_empty_text;
///
/// assert!(is_empty_text("<p>   </p>"));
/// assert!(is_empty_text("<p>&nbsp;</p>"));
/// assert!(!is_empty_text("<p>Hi</p>"));
/// ```
pub fn is_empty_text(text: &str) -> bool {
    is_empty_text_with(&*PLAIN_TEXT, text)
}

/// Like [`is_empty_text`], with an injected sanitizer.
pub fn is_empty_text_with<S: MarkupSanitizer + ?Sized>(sanitizer: &S, text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    sanitizer.strip(text).trim().is_empty()
}

//! Style resolution for content options.
//!
//! This module provides the composite resolver and its output:
//!
//! - [`StyleResolver`]: turns [`ContentOptions`](crate::ContentOptions) into a style record
//! - [`StyleRecord`]: the sparse set of resolved rendering attributes
//! - [`ResolverConfig`] and [`LineGap`]: resolver tunables
//!
//! Resolution layers conditionally: box decoration only applies to content
//! that is non-empty after markup is stripped, and stroke and glow only
//! apply when a tint is selected.

mod config;
mod record;
mod resolver;

pub use config::{LineGap, ResolverConfig};
pub use record::StyleRecord;
pub use resolver::{content_styles, StyleResolver};

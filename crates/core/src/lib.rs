#![deny(missing_docs)]
//! Docport core: pure rewrite passes and file collection for porting
//! GitBook-flavored Markdown/MDX docs to MDX-component syntax.

/// Arcade iframe unwrapping.
pub mod arcade;
/// Directive attribute-list parsing.
pub mod attrs;
/// Embed directive rewriting.
pub mod embed;
/// Core error types.
pub mod error;
/// HTML attribute escaping.
pub mod escape;
/// Hint directive rewriting.
pub mod hint;
/// Figure unwrapping and image tag normalization.
pub mod image;
/// Rewrite outcome type shared by all passes.
pub mod rewrite;
/// Recursive collection of documentation files.
pub mod scan;

pub use arcade::unwrap_arcade_iframes;
pub use attrs::parse_attrs;
pub use embed::rewrite_embeds;
pub use error::DocportError;
pub use escape::escape_attr;
pub use hint::rewrite_hints;
pub use image::normalize_images;
pub use rewrite::Rewrite;
pub use scan::collect_files;

#![deny(missing_docs)]
//! helpmdx core: rewrite passes that turn template-flavored help Markdown
//! into Starlight MDX, plus import injection and frontmatter generation.

/// Slug to component-name case conversion.
pub mod case;
/// Core error types.
pub mod error;
/// Title frontmatter generation.
pub mod frontmatter;
/// Import registry and injection.
pub mod imports;
/// Conversion options.
pub mod options;
/// Per-mode conversion pipeline.
pub mod pipeline;
/// Content resolution.
pub mod resolve;
/// Text rewrite passes.
pub mod rewrite;

pub use error::ConvertError;
pub use frontmatter::{apply_frontmatter, title_from_heading};
pub use imports::{ImportRegistry, insert_imports};
pub use options::{ConvertOptions, EmoticonTable, IconFont, LinkRetarget, ModeOptions};
pub use pipeline::{ConversionMode, Pipeline, convert, convert_document};
pub use resolve::{ContentResolver, FsResolver};
pub use rewrite::RewritePass;

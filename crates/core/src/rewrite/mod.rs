//! Text rewrite passes.
//!
//! - `transclusion`: `{!file.md!}` macro lines to component tags.
//! - `escape`: literal braces to `\{` / `\}`.
//! - `paths`: relative link and legacy image folder retargeting.
//! - `emoticon`: the escaped emoticon table macro to its component.
//! - `icons`: `<i class="...">` icon font tags to icon components.
//!
//! Passes work on raw text with pattern substitutions and never fail. Their
//! relative order is significant, see [`crate::pipeline::Pipeline::for_mode`].

use std::borrow::Cow;

use crate::imports::ImportRegistry;

/// Emoticon table expansion.
pub mod emoticon;
/// Brace escaping.
pub mod escape;
/// Icon font tag replacement.
pub mod icons;
/// Link and image path retargeting.
pub mod paths;
/// Transclusion macro expansion.
pub mod transclusion;

pub use emoticon::EmoticonPass;
pub use escape::{EscapeBraces, escape_braces};
pub use icons::IconPass;
pub use paths::{ImagePathPass, LinkRetargetPass};
pub use transclusion::{TransclusionPass, component_name_for_macro};

/// A single text-to-text rewrite over one document.
///
/// Passes that introduce components register the matching import
/// declarations in `imports`; the rest ignore it. Returning
/// `Cow::Borrowed` signals that nothing changed.
pub trait RewritePass {
    /// Rewrite `input`, recording required imports.
    fn rewrite<'a>(&self, input: &'a str, imports: &mut ImportRegistry) -> Cow<'a, str>;
}

impl<F> RewritePass for F
where
    F: for<'a> Fn(&'a str, &mut ImportRegistry) -> Cow<'a, str>,
{
    fn rewrite<'a>(&self, input: &'a str, imports: &mut ImportRegistry) -> Cow<'a, str> {
        (self)(input, imports)
    }
}

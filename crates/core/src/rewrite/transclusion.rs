use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

use super::RewritePass;
use crate::case::to_pascal_case;
use crate::imports::ImportRegistry;

/// A `{!target!}` macro alone on its line, indented at most three spaces.
static MACRO_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)^ {0,3}\{!(?P<target>[^!\n]+)!\}[ \t]*$").expect("valid macro pattern")
});

/// Derives the component name for a macro target such as `help/send-dm.md`.
///
/// The last path segment is PascalCased, the trailing `Md` contributed by the
/// extension is dropped, and any remaining hyphens are removed.
///
/// # Examples
///
/// ```
/// use helpmdx_core::rewrite::component_name_for_macro;
///
/// assert_eq!(component_name_for_macro("macro-name.md"), "MacroName");
/// assert_eq!(component_name_for_macro("include/start-a-dm.md"), "StartADm");
/// ```
pub fn component_name_for_macro(target: &str) -> String {
    let pascal = to_pascal_case(last_segment(target));
    let name = pascal.strip_suffix("Md").unwrap_or(&pascal);
    name.replace('-', "")
}

fn last_segment(target: &str) -> &str {
    let target = target.trim();
    target.rsplit(['/', '\\']).next().unwrap_or(target)
}

/// Replaces transclusion macro lines with self-closing component tags and
/// registers one import per distinct macro target.
#[derive(Debug, Clone)]
pub struct TransclusionPass {
    import_base: String,
}

impl TransclusionPass {
    /// Creates the pass; imports point at `<import_base>/_<file>x`.
    pub fn new(import_base: impl Into<String>) -> Self {
        Self {
            import_base: import_base.into(),
        }
    }

    fn import_statement(&self, component: &str, segment: &str) -> String {
        format!(
            "import {} from \"{}/_{}x\"",
            component, self.import_base, segment
        )
    }
}

impl RewritePass for TransclusionPass {
    fn rewrite<'a>(&self, input: &'a str, imports: &mut ImportRegistry) -> Cow<'a, str> {
        MACRO_LINE.replace_all(input, |caps: &Captures<'_>| {
            let target = &caps["target"];
            let component = component_name_for_macro(target);
            if component.is_empty() {
                log::debug!("leaving macro {:?} untouched: empty component name", target);
                return caps[0].to_string();
            }
            imports.insert(self.import_statement(&component, last_segment(target)));
            format!("<{} />", component)
        })
    }
}

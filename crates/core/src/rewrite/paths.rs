use std::borrow::Cow;

use super::RewritePass;
use crate::imports::ImportRegistry;

/// Replaces every occurrence of `from` with `to`.
///
/// This is a plain substring replacement across the whole document, so
/// occurrences of the prefix in prose are rewritten too.
#[derive(Debug, Clone)]
pub struct LinkRetargetPass {
    from: String,
    to: String,
}

impl LinkRetargetPass {
    /// Creates a pass rewriting `from` into `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl RewritePass for LinkRetargetPass {
    fn rewrite<'a>(&self, input: &'a str, _imports: &mut ImportRegistry) -> Cow<'a, str> {
        replace_if_present(input, [(self.from.as_str(), self.to.as_str())])
    }
}

/// Points image references in the legacy folder at a relative replacement.
///
/// Both Markdown link targets `(<legacy>/...)` and raw `src="<legacy>/..."`
/// attributes are rewritten. Only the exact legacy sub-path matches, so
/// images living in other static folders keep their absolute paths.
#[derive(Debug, Clone)]
pub struct ImagePathPass {
    replacements: [(String, String); 2],
}

impl ImagePathPass {
    /// Creates a pass rewriting `legacy_dir` into `replacement`.
    pub fn new(legacy_dir: &str, replacement: &str) -> Self {
        let legacy_dir = legacy_dir.trim_end_matches('/');
        let replacement = replacement.trim_end_matches('/');
        Self {
            replacements: [
                (format!("({}/", legacy_dir), format!("({}/", replacement)),
                (
                    format!("src=\"{}/", legacy_dir),
                    format!("src=\"{}/", replacement),
                ),
            ],
        }
    }
}

impl RewritePass for ImagePathPass {
    fn rewrite<'a>(&self, input: &'a str, _imports: &mut ImportRegistry) -> Cow<'a, str> {
        replace_if_present(
            input,
            self.replacements
                .iter()
                .map(|(from, to)| (from.as_str(), to.as_str())),
        )
    }
}

fn replace_if_present<'a, 'p>(
    input: &'a str,
    replacements: impl IntoIterator<Item = (&'p str, &'p str)>,
) -> Cow<'a, str> {
    let mut current = Cow::Borrowed(input);
    for (from, to) in replacements {
        if from.is_empty() || !current.contains(from) {
            continue;
        }
        current = Cow::Owned(current.replace(from, to));
    }
    current
}

use std::borrow::Cow;

use super::RewritePass;
use crate::imports::ImportRegistry;

/// Escapes every literal `{` and `}` so MDX does not read them as expressions.
///
/// Runs after transclusion expansion, which needs the raw `{!...!}` syntax.
pub fn escape_braces(input: &str) -> Cow<'_, str> {
    if !input.contains(['{', '}']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        if ch == '{' || ch == '}' {
            out.push('\\');
        }
        out.push(ch);
    }
    Cow::Owned(out)
}

/// Pass wrapper around [`escape_braces`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeBraces;

impl RewritePass for EscapeBraces {
    fn rewrite<'a>(&self, input: &'a str, _imports: &mut ImportRegistry) -> Cow<'a, str> {
        escape_braces(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_both_braces() {
        assert_eq!(
            escape_braces("Use {{ name }} here"),
            r"Use \{\{ name \}\} here"
        );
    }

    #[test]
    fn brace_free_text_is_borrowed_and_idempotent() {
        let text = "No braces <FaBars /> here";
        let once = escape_braces(text);
        assert!(matches!(once, Cow::Borrowed(_)));
        assert_eq!(escape_braces(&once), once);
    }

    #[test]
    fn already_escaped_braces_are_escaped_again() {
        assert_eq!(escape_braces(r"\{"), r"\\{");
    }
}

//! Import declaration bookkeeping and injection.
//!
//! Rewrite passes register the declarations their output depends on in an
//! [`ImportRegistry`]; once all passes have run, [`insert_imports`] splices
//! the collected block into the document at a 1-indexed line.

use std::collections::BTreeSet;

/// Deduplicated set of import declarations collected while converting one document.
///
/// Identity is textual. Iteration is lexicographic so injected blocks are
/// deterministic regardless of the order in which passes registered them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRegistry {
    statements: BTreeSet<String>,
}

impl ImportRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration. Returns `false` if it was already present.
    pub fn insert(&mut self, statement: impl Into<String>) -> bool {
        let statement = statement.into();
        let added = self.statements.insert(statement);
        if added {
            log::debug!("registered import ({} total)", self.statements.len());
        }
        added
    }

    /// Returns true if the exact declaration is registered.
    pub fn contains(&self, statement: &str) -> bool {
        self.statements.contains(statement)
    }

    /// Number of distinct declarations.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns true when no declaration has been registered.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterates declarations in canonical (lexicographic) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(String::as_str)
    }
}

/// Splices the registered imports, followed by one blank line, into `text`
/// so the first import lands on 1-indexed `line_number`.
///
/// Inserted lines end with `\r\n` when `text` uses CRLF line endings.
/// Returns the text unchanged when the registry is empty or when
/// `line_number` falls outside `1..=line_count`. The latter is a silent
/// no-op apart from a debug log record.
pub fn insert_imports(text: &str, imports: &ImportRegistry, line_number: usize) -> String {
    if imports.is_empty() {
        return text.to_string();
    }

    let line_count = text.split('\n').count();
    if line_number == 0 || line_number > line_count {
        log::debug!(
            "skipping import injection: line {} outside 1..={}",
            line_number,
            line_count
        );
        return text.to_string();
    }

    // Byte offset where the target line starts.
    let offset = match line_number {
        1 => 0,
        n => text
            .match_indices('\n')
            .nth(n - 2)
            .map_or(text.len(), |(index, _)| index + 1),
    };
    let eol = if text.contains("\r\n") { "\r\n" } else { "\n" };

    let mut out = String::with_capacity(text.len() + 64 * (imports.len() + 1));
    out.push_str(&text[..offset]);
    for statement in imports.iter() {
        out.push_str(statement);
        out.push_str(eol);
    }
    out.push_str(eol);
    out.push_str(&text[offset..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(statements: &[&str]) -> ImportRegistry {
        let mut imports = ImportRegistry::new();
        for statement in statements {
            imports.insert(*statement);
        }
        imports
    }

    #[test]
    fn registry_deduplicates_textually() {
        let mut imports = ImportRegistry::new();
        assert!(imports.insert("import A from \"a\""));
        assert!(!imports.insert("import A from \"a\""));
        assert!(imports.insert("import A from 'a'"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn registry_iterates_sorted() {
        let imports = registry(&["import Zed from \"z\"", "import Alpha from \"a\""]);
        let order: Vec<&str> = imports.iter().collect();
        assert_eq!(order, vec!["import Alpha from \"a\"", "import Zed from \"z\""]);
    }

    #[test]
    fn empty_registry_leaves_text_alone() {
        let text = "# Title\n\nBody";
        assert_eq!(insert_imports(text, &ImportRegistry::new(), 2), text);
    }

    #[test]
    fn inserts_block_and_blank_line_at_line_two() {
        let imports = registry(&["import B from \"b\"", "import A from \"a\""]);
        let out = insert_imports("# Title\nBody", &imports, 2);
        assert_eq!(
            out,
            "# Title\nimport A from \"a\"\nimport B from \"b\"\n\nBody"
        );
    }

    #[test]
    fn inserts_at_first_line() {
        let imports = registry(&["import A from \"a\""]);
        let out = insert_imports("Body\nMore", &imports, 1);
        assert_eq!(out, "import A from \"a\"\n\nBody\nMore");
    }

    #[test]
    fn content_before_target_line_is_untouched() {
        let text = "one\ntwo\nthree\nfour";
        let imports = registry(&["import X from \"x\"", "import Y from \"y\""]);
        let out = insert_imports(text, &imports, 3);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(&lines[..2], &["one", "two"]);
        assert_eq!(lines[4], "", "line after the import block must be blank");
        assert_eq!(&lines[5..], &["three", "four"]);
    }

    #[test]
    fn out_of_range_line_is_a_no_op() {
        let imports = registry(&["import A from \"a\""]);
        assert_eq!(insert_imports("# Title", &imports, 2), "# Title");
        assert_eq!(insert_imports("a\nb", &imports, 0), "a\nb");
        assert_eq!(insert_imports("a\nb", &imports, 9), "a\nb");
    }

    #[test]
    fn trailing_newline_counts_as_a_line() {
        let imports = registry(&["import A from \"a\""]);
        let out = insert_imports("# Title\n", &imports, 2);
        assert_eq!(out, "# Title\nimport A from \"a\"\n\n");
    }

    #[test]
    fn crlf_text_gets_crlf_import_lines() {
        let imports = registry(&["import B from \"b\"", "import A from \"a\""]);
        let out = insert_imports("# Title\r\nBody\r\n", &imports, 2);
        assert_eq!(
            out,
            "# Title\r\nimport A from \"a\"\r\nimport B from \"b\"\r\n\r\nBody\r\n"
        );
        assert!(!out.replace("\r\n", "").contains('\n'));
    }
}

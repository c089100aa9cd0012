use std::borrow::Cow;

use super::RewritePass;
use crate::imports::ImportRegistry;
use crate::options::EmoticonTable;

/// Expands the emoticon table macro into its component.
///
/// The macro is matched in its escaped form (`\{\{ emoticon_translations \}\}`),
/// so this pass runs after brace escaping. One import is registered no matter
/// how many times the token appears.
#[derive(Debug, Clone)]
pub struct EmoticonPass {
    table: EmoticonTable,
}

impl EmoticonPass {
    /// Creates the pass for `table`.
    pub fn new(table: EmoticonTable) -> Self {
        Self { table }
    }
}

impl RewritePass for EmoticonPass {
    fn rewrite<'a>(&self, input: &'a str, imports: &mut ImportRegistry) -> Cow<'a, str> {
        if self.table.token.is_empty() || !input.contains(self.table.token.as_str()) {
            return Cow::Borrowed(input);
        }
        imports.insert(self.table.import_statement());
        Cow::Owned(input.replace(self.table.token.as_str(), &self.table.tag()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_escaped_token_and_registers_once() {
        let pass = EmoticonPass::new(EmoticonTable::default());
        let mut imports = ImportRegistry::new();
        let input = "Table:\n\n\\{\\{ emoticon_translations \\}\\}\n\nAgain \\{\\{ emoticon_translations \\}\\}";
        let out = pass.rewrite(input, &mut imports);
        assert_eq!(
            out,
            "Table:\n\n<EmoticonTranslations />\n\nAgain <EmoticonTranslations />"
        );
        assert_eq!(imports.len(), 1);
        assert!(imports.contains(
            "import EmoticonTranslations from \"../../components/EmoticonTranslations.astro\""
        ));
    }

    #[test]
    fn unescaped_token_is_not_matched() {
        let pass = EmoticonPass::new(EmoticonTable::default());
        let mut imports = ImportRegistry::new();
        let input = "{{ emoticon_translations }}";
        assert_eq!(pass.rewrite(input, &mut imports), input);
        assert!(imports.is_empty());
    }
}

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

use super::RewritePass;
use crate::case::to_pascal_case;
use crate::imports::ImportRegistry;
use crate::options::IconFont;

/// An `<i>` element with a `class` attribute, other attributes in any order,
/// and optional inline text before the closing tag.
static ICON_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<i\s(?:[^>]*?\s)?class="(?P<classes>[^"]*)"[^>]*>[^<]*?</i>"#)
        .expect("valid icon pattern")
});

/// Replaces icon font tags with icon components.
///
/// `<i class="fa fa-bars"></i>` becomes `<FaBars />` and registers
/// `import FaBars from "~icons/fa/bars"`. Tags belonging to other fonts
/// are left as they are.
#[derive(Debug, Clone)]
pub struct IconPass {
    font: IconFont,
    variant_prefix: String,
}

impl IconPass {
    /// Creates the pass for one icon font.
    pub fn new(font: IconFont) -> Self {
        let variant_prefix = format!("{}-", font.marker_class);
        Self {
            font,
            variant_prefix,
        }
    }

    /// Returns the variant name (`bars` for `fa-bars`) when `classes`
    /// belong to this font.
    fn variant<'c>(&self, classes: &'c str) -> Option<&'c str> {
        let mut has_marker = false;
        let mut variant = None;
        for class in classes.split_whitespace() {
            if class == self.font.marker_class {
                has_marker = true;
            } else if variant.is_none()
                && let Some(name) = class.strip_prefix(self.variant_prefix.as_str())
                && is_icon_name(name)
            {
                variant = Some(name);
            }
        }
        if has_marker { variant } else { None }
    }

    fn component_name(&self, variant: &str) -> String {
        format!(
            "{}{}",
            self.font.component_prefix,
            to_pascal_case(variant).replace('-', "")
        )
    }
}

fn is_icon_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl RewritePass for IconPass {
    fn rewrite<'a>(&self, input: &'a str, imports: &mut ImportRegistry) -> Cow<'a, str> {
        if !input.contains("<i") {
            return Cow::Borrowed(input);
        }
        ICON_TAG.replace_all(input, |caps: &Captures<'_>| {
            let Some(variant) = self.variant(&caps["classes"]) else {
                return caps[0].to_string();
            };
            let component = self.component_name(variant);
            imports.insert(format!(
                "import {} from \"~icons/{}/{}\"",
                component, self.font.collection, variant
            ));
            format!("<{} />", component)
        })
    }
}

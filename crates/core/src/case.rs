/// Converts a slug-like identifier into a PascalCase component identifier.
///
/// Words are separated by any character that is not alphanumeric (hyphens,
/// underscores, dots, whitespace). The first character of each word is
/// uppercased; the rest of the word is kept as written.
///
/// # Examples
///
/// ```
/// use helpmdx_core::case::to_pascal_case;
///
/// assert_eq!(to_pascal_case("fa-bars"), "FaBars");
/// assert_eq!(to_pascal_case("macro-name.md"), "MacroNameMd");
/// assert_eq!(to_pascal_case("emoticon_translations"), "EmoticonTranslations");
/// ```
pub fn to_pascal_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if !ch.is_alphanumeric() {
            at_word_start = true;
            continue;
        }
        if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_hyphenated_words() {
        assert_eq!(to_pascal_case("gear"), "Gear");
        assert_eq!(to_pascal_case("user-cog"), "UserCog");
        assert_eq!(to_pascal_case("send-dm-hint"), "SendDmHint");
    }

    #[test]
    fn keeps_digits_and_inner_case() {
        assert_eq!(to_pascal_case("arrow-up-1"), "ArrowUp1");
        assert_eq!(to_pascal_case("iOS-app"), "IOSApp");
    }

    #[test]
    fn collapses_repeated_separators() {
        assert_eq!(to_pascal_case("--a__b..c  d"), "ABCD");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("---"), "");
    }
}

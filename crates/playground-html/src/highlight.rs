//! Re-highlighting of pygments HTML for the editor theme.
//!
//! The playground asks pygments to highlight assembly and LLVM IR on the server. Pygments
//! tags tokens with short class codes (`c`, `nl`, `mi`, ...), while the editor's themes style
//! `ace_*` classes. The tables here translate one into the other.

use std::{fmt, str::FromStr, sync::OnceLock};

use regex::{Captures, Regex};

use crate::Error;

const SPAN_REGEX: &str = r#"<span class="([^"]*)">([^<]*)</span>"#;

fn span_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(SPAN_REGEX).unwrap())
}

/// The emit targets whose output is highlighted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LanguageTag {
    /// Assembly listing, lexed by pygments' `gas` lexer
    Assembly,
    /// LLVM intermediate representation, lexed by pygments' `llvm` lexer
    LlvmIr,
}

impl LanguageTag {
    /// The name of the emit target, as used by the compile endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageTag::Assembly => "asm",
            LanguageTag::LlvmIr => "llvm-ir",
        }
    }
}

impl FromStr for LanguageTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asm" => Ok(LanguageTag::Assembly),
            "llvm-ir" => Ok(LanguageTag::LlvmIr),
            _ => Err(Error::unsupported_language(s)),
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the editor classes for a pygments token code, or `None` if the language has no
/// mapping for it.
///
/// The empty code stands for plain text and maps to no class at all.
pub fn token_classes(language: LanguageTag, code: &str) -> Option<&'static str> {
    match language {
        LanguageTag::Assembly => asm_classes(code),
        LanguageTag::LlvmIr => llvm_ir_classes(code),
    }
}

fn asm_classes(code: &str) -> Option<&'static str> {
    Some(match code {
        "c" => "ace_comment",                                   // Comment
        "na" => "ace_support ace_function ace_directive",       // Name.Attribute
        "no" => "ace_constant",                                 // Name.Constant
        "nl" => "ace_entity ace_name ace_function",             // Name.Label
        "nv" => "ace_variable ace_parameter ace_register",      // Name.Variable
        "mh" => "ace_constant ace_character ace_hexadecimal",   // Number.Hex
        "mi" => "ace_constant ace_character ace_decimal",       // Number.Integer
        "p" => "ace_punctuation",                               // Punctuation
        "s" | "sc" => "ace_string",                             // String, String.Char
        "" => "",                                               // Text
        _ => return None,
    })
}

fn llvm_ir_classes(code: &str) -> Option<&'static str> {
    Some(match code {
        "c" => "ace_comment",                         // Comment
        "k" => "ace_keyword",                         // Keyword
        "kt" => "ace_storage ace_type",               // Keyword.Type
        "nl" => "ace_identifier",                     // Name.Label
        "nv" => "ace_variable",                       // Name.Variable
        "nv-Anonymous" => "ace_support ace_variable", // Name.Variable.Anonymous
        "vg" => "ace_variable ace_other",             // Name.Variable.Global
        "m" => "ace_constant ace_numeric",            // Number
        "p" => "ace_punctuation",                     // Punctuation
        "s" => "ace_string",                          // String
        "" => "",                                     // Text
        _ => return None,
    })
}

/// Rewrites the classes of pygments' `<span class="CODE">TEXT</span>` fragments to the
/// editor's classes.
///
/// A code without a mapping loses its span, leaving only `TEXT`. Everything outside the
/// spans, and the text inside them, is copied verbatim.
///
/// ## Example
///
/// ```
/// use playground_html::{remap_token_classes, LanguageTag};
///
/// let pygmentized = r#"<span class="nl">main:</span> <span class="zz">x</span>"#;
/// assert_eq!(
///     remap_token_classes(pygmentized, LanguageTag::Assembly),
///     r#"<span class="ace_entity ace_name ace_function">main:</span> x"#,
/// );
/// ```
pub fn remap_token_classes(input: &str, language: LanguageTag) -> String {
    span_regex()
        .replace_all(input, |caps: &Captures<'_>| {
            let text = &caps[2];
            match token_classes(language, &caps[1]) {
                Some(classes) => format!("<span class=\"{classes}\">{text}</span>"),
                None => text.to_owned(),
            }
        })
        .into_owned()
}

/// Like [`remap_token_classes`], but takes the emit target by name (`asm` or `llvm-ir`).
///
/// ```
/// let err = playground_html::remap_token_classes_for("", "wasm").unwrap_err();
/// assert!(matches!(err, playground_html::Error::UnsupportedLanguage { .. }));
/// ```
pub fn remap_token_classes_for(input: &str, tag: &str) -> Result<String, Error> {
    let language = tag.parse()?;
    Ok(remap_token_classes(input, language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names() {
        for tag in [LanguageTag::Assembly, LanguageTag::LlvmIr] {
            assert_eq!(tag.as_str().parse::<LanguageTag>().unwrap(), tag);
        }
        assert!(matches!(
            "LLVM-IR".parse::<LanguageTag>(),
            Err(Error::UnsupportedLanguage { tag }) if tag == "LLVM-IR"
        ));
    }

    #[test]
    fn tables_differ_per_language() {
        assert_eq!(
            token_classes(LanguageTag::Assembly, "nl"),
            Some("ace_entity ace_name ace_function")
        );
        assert_eq!(
            token_classes(LanguageTag::LlvmIr, "nl"),
            Some("ace_identifier")
        );
        assert_eq!(token_classes(LanguageTag::Assembly, "k"), None);
        assert_eq!(token_classes(LanguageTag::LlvmIr, "mi"), None);
    }

    #[test]
    fn plain_text_code_is_known() {
        for tag in [LanguageTag::Assembly, LanguageTag::LlvmIr] {
            assert_eq!(token_classes(tag, ""), Some(""));
        }
    }
}

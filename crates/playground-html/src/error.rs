/// Errors that can occur while rendering playground output as HTML
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The language tag does not name one of the supported emit targets
    #[error("Unsupported language `{tag}`, expected `asm` or `llvm-ir`")]
    UnsupportedLanguage { tag: String },

    /// Compiler output can't be formatted without the name of the user's source file
    #[error("The source file name must not be empty")]
    EmptySourceName,

    /// A pattern built from user supplied paths failed to compile
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl Error {
    pub(crate) fn unsupported_language(tag: &str) -> Self {
        Error::UnsupportedLanguage {
            tag: tag.to_string(),
        }
    }
}

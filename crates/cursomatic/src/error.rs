//! CLI error types.

use cursomatic_translate::TranslateError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Translate(#[from] TranslateError),
}

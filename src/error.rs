//! Crate-level error type.

use std::fmt;
use std::path::Path;

use crate::prompt::{Environment, PromptError, render_prompt};
use crate::theme::{Theme, ThemeError};

/// Any failure between reading a theme file and producing a prompt.
#[derive(Debug)]
pub enum Error {
    Theme(ThemeError),
    Prompt(PromptError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme(e) => write!(f, "{e}"),
            Self::Prompt(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Theme(e) => Some(e),
            Self::Prompt(e) => Some(e),
        }
    }
}

impl From<ThemeError> for Error {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}

impl From<PromptError> for Error {
    fn from(e: PromptError) -> Self {
        Self::Prompt(e)
    }
}

/// Load the theme at `path` and render it, falling back to `PS1` if the result is empty.
///
/// # Errors
///
/// Returns [`Error::Theme`] if the file cannot be loaded and [`Error::Prompt`]
/// if rendering fails.
pub fn prompt_from_file(path: impl AsRef<Path>, env: &impl Environment) -> Result<String, Error> {
    let theme = Theme::from_file(path)?;
    Ok(render_prompt(&theme, env)?)
}

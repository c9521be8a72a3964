//! Prompt themes.
//!
//! A theme is a non-empty, ordered list of [`PromptComponent`]s read from a
//! JSON array. Each element is an object with optional `type`, `text`, `env`
//! and `color` fields:
//!
//! ```json
//! [
//!   { "env": "USER", "color": { "fg": "light green", "effect": "bold" } },
//!   { "text": "@" },
//!   { "text": "\\h", "color": { "fg": "#ff8800", "depth": 8 } },
//!   { "type": "reset" },
//!   { "text": " \\$ " }
//! ]
//! ```
//!
//! Loading fills the gaps the file leaves open:
//! - a component with `env` but no `text` is an env component, whatever its `type` says
//! - otherwise a missing `type` means `text`
//! - a color's `depth` defaults to 4
//! - a color with no `fg`, `bg` or `effect` is dropped
//!
//! Color names and numbers are not checked here; they are resolved (and may
//! fail) when the prompt is rendered.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::color::ColorDepth;
use crate::style::{Effect, EffectError, Style};

/// How a component produces its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentKind {
    /// Literal text.
    #[default]
    Text,
    /// The value of an environment variable.
    Env,
    /// The reset sequence; any color is ignored.
    Reset,
}

impl ComponentKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Env => "env",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "env" => Ok(Self::Env),
            "reset" => Ok(Self::Reset),
            _ => Err(s.to_string()),
        }
    }
}

/// One piece of the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptComponent {
    pub kind: ComponentKind,
    pub text: Option<String>,
    /// Name of the environment variable read by [`ComponentKind::Env`].
    pub env: Option<String>,
    pub color: Option<Style>,
}

impl PromptComponent {
    /// A literal text component.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Text,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A text component without text. With a color it only emits the escape.
    #[must_use]
    pub fn color_only(style: Style) -> Self {
        Self::default().with_color(style)
    }

    /// An environment variable component.
    #[must_use]
    pub fn env(name: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Env,
            env: Some(name.into()),
            ..Self::default()
        }
    }

    /// A reset component.
    #[must_use]
    pub fn reset() -> Self {
        Self {
            kind: ComponentKind::Reset,
            ..Self::default()
        }
    }

    /// Attach a color. Empty styles are dropped.
    #[must_use]
    pub fn with_color(mut self, style: Style) -> Self {
        self.color = (!style.is_empty()).then_some(style);
        self
    }
}

/// A validated, non-empty sequence of prompt components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    components: Vec<PromptComponent>,
}

impl Theme {
    /// Create a theme from components.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Empty`] if `components` is empty.
    pub fn new(components: Vec<PromptComponent>) -> Result<Self, ThemeError> {
        if components.is_empty() {
            return Err(ThemeError::Empty);
        }
        Ok(Self { components })
    }

    /// Parse and validate a JSON theme.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] describing the first problem found.
    pub fn from_json_str(contents: &str) -> Result<Self, ThemeError> {
        let value: Value = serde_json::from_str(contents).map_err(ThemeError::Json)?;
        let Value::Array(elements) = value else {
            return Err(ThemeError::NotAnArray);
        };

        let mut components = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            if !element.is_object() {
                return Err(ThemeError::NotAnObject { index });
            }
            let raw: RawComponent = serde_json::from_value(element).map_err(ThemeError::Json)?;
            components.push(raw.validate(index)?);
        }

        log::debug!("loaded theme with {} components", components.len());
        Self::new(components)
    }

    /// Read and validate a JSON theme file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] if the file cannot be read, otherwise see
    /// [`Theme::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let contents = fs::read_to_string(&path).map_err(|err| ThemeError::Io {
            path: path.as_ref().to_path_buf(),
            err,
        })?;
        Self::from_json_str(&contents)
    }

    #[must_use]
    pub fn components(&self) -> &[PromptComponent] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PromptComponent> {
        self.components.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always false for a constructed theme.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<'a> IntoIterator for &'a Theme {
    type Item = &'a PromptComponent;
    type IntoIter = std::slice::Iter<'a, PromptComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// File format
// ============================================================================

/// A color in the file may be written as a string or a bare palette number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawColorValue {
    Text(String),
    Number(u64),
}

impl RawColorValue {
    fn into_expr(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawColor {
    fg: Option<RawColorValue>,
    bg: Option<RawColorValue>,
    effect: Option<String>,
    depth: Option<u64>,
}

impl RawColor {
    fn validate(self, index: usize) -> Result<Option<Style>, ThemeError> {
        let depth = match self.depth {
            None => ColorDepth::default(),
            Some(bits) => {
                ColorDepth::from_bits(bits).ok_or(ThemeError::InvalidDepth { index, depth: bits })?
            }
        };
        let effect = self
            .effect
            .as_deref()
            .map(Effect::parse)
            .transpose()
            .map_err(|err| ThemeError::InvalidEffect { index, err })?;

        let style = Style {
            fg: self.fg.map(RawColorValue::into_expr),
            bg: self.bg.map(RawColorValue::into_expr),
            effect,
            depth,
        };
        Ok((!style.is_empty()).then_some(style))
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawComponent {
    #[serde(rename = "type")]
    kind: Option<String>,
    text: Option<String>,
    env: Option<String>,
    color: Option<RawColor>,
}

impl RawComponent {
    fn validate(self, index: usize) -> Result<PromptComponent, ThemeError> {
        let kind = if self.env.is_some() && self.text.is_none() {
            ComponentKind::Env
        } else {
            match self.kind.as_deref() {
                None => ComponentKind::Text,
                Some(name) => name
                    .parse::<ComponentKind>()
                    .map_err(|kind| ThemeError::InvalidType { index, kind })?,
            }
        };

        let color = match self.color {
            Some(raw) => raw.validate(index)?,
            None => None,
        };

        Ok(PromptComponent {
            kind,
            text: self.text,
            env: self.env,
            color,
        })
    }
}

/// Errors returned while loading a theme.
#[derive(Debug)]
pub enum ThemeError {
    Io {
        path: std::path::PathBuf,
        err: std::io::Error,
    },
    Json(serde_json::Error),
    NotAnArray,
    Empty,
    NotAnObject {
        index: usize,
    },
    InvalidType {
        index: usize,
        kind: String,
    },
    InvalidDepth {
        index: usize,
        depth: u64,
    },
    InvalidEffect {
        index: usize,
        err: EffectError,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, err } => {
                write!(f, "failed to read theme file {}: {err}", path.display())
            }
            Self::Json(err) => write!(f, "invalid theme JSON: {err}"),
            Self::NotAnArray | Self::Empty => {
                write!(f, "JSON outer element must be an array of one or more elements")
            }
            Self::NotAnObject { index } => {
                write!(f, "theme element {index} is not a valid JSON object")
            }
            Self::InvalidType { index, kind } => {
                write!(f, "invalid type {kind:?} in theme element {index}")
            }
            Self::InvalidDepth { index, depth } => {
                write!(f, "unsupported color depth {depth} in theme element {index} (expected 4 or 8)")
            }
            Self::InvalidEffect { index, err } => {
                write!(f, "theme element {index}: {err}")
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { err, .. } => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidEffect { err, .. } => Some(err),
            _ => None,
        }
    }
}

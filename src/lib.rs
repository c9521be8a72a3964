//! # prompt_theme
//!
//! Builds bash `PS1` strings from JSON themes.
//!
//! A theme is an ordered list of components: literal text, the value of an
//! environment variable, or a reset. Any component may carry a color made of
//! a foreground, a background and one text effect, resolved against the
//! 4-bit (16 color) or 8-bit (256 color) palette.
//!
//! ## Quick Start
//!
//! ```rust
//! use prompt_theme::prelude::*;
//! use std::collections::HashMap;
//!
//! let theme = Theme::from_json_str(
//!     r#"[{"text": "$ ", "color": {"fg": "red", "effect": "bold"}}, {"type": "reset"}]"#,
//! )
//! .unwrap();
//! let prompt = build_prompt(&theme, &HashMap::<String, String>::new()).unwrap();
//! assert_eq!(prompt, r"\[\033[1;31m\]$ \[\033[0m\]");
//! ```
//!
//! ## Core Concepts
//!
//! - **Palette**: fixed tables of named colors for each depth
//! - **Color resolution**: names, numbers, `#rrggbb` and `rgb(r,g,b)` to SGR fragments
//! - **Style**: a component's color, rendered as a `\[\033[...m\]` escape
//! - **Theme**: the validated component list
//! - **Prompt**: rendering and assembly, with `PS1` as the fallback for empty output

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod color;
pub mod error;
pub mod logging;
pub mod palette;
pub mod prompt;
pub mod style;
pub mod theme;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{Channel, ColorCode, ColorDepth, ColorError, ColorExpr, ColorTriplet};
    pub use crate::error::{Error, prompt_from_file};
    pub use crate::prompt::{
        Environment, ProcessEnvironment, PromptError, build_prompt, render_component, render_prompt,
    };
    pub use crate::style::{Effect, Style, format_escape};
    pub use crate::theme::{ComponentKind, PromptComponent, Theme, ThemeError};
}

// Re-export key types at crate root
pub use color::{ColorDepth, ColorError, resolve_fragment};
pub use error::{Error, prompt_from_file};
pub use prompt::{PromptError, build_prompt, render_prompt};
pub use style::{Effect, Style, format_escape};
pub use theme::{PromptComponent, Theme, ThemeError};

//! Prompt rendering.
//!
//! Each [`PromptComponent`] renders on its own, with no state carried between
//! components, and the results are concatenated in theme order. Environment
//! variables are read through the [`Environment`] trait so rendering can be
//! driven from a fixed map in tests.

use std::collections::HashMap;
use std::fmt;

use crate::color::ColorError;
use crate::style::RESET_SEQUENCE;
use crate::theme::{ComponentKind, PromptComponent, Theme};

/// Variable holding the shell's current prompt, used when a theme renders to nothing.
pub const PS1: &str = "PS1";

/// Source of environment variables.
pub trait Environment {
    /// The value of `name`, or `None` if it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: std::hash::BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Render one component.
///
/// Returns `None` for a text component with neither text nor color.
///
/// # Errors
///
/// - [`PromptError::UndefinedEnvVar`] if an env component names an unset variable
/// - [`PromptError::Color`] if the component's color cannot be resolved
pub fn render_component(
    component: &PromptComponent,
    env: &impl Environment,
) -> Result<Option<String>, PromptError> {
    let text = match component.kind {
        ComponentKind::Reset => return Ok(Some(RESET_SEQUENCE.to_string())),
        ComponentKind::Env => {
            let name = component.env.as_deref().unwrap_or_default();
            Some(
                env.var(name)
                    .ok_or_else(|| PromptError::UndefinedEnvVar(name.to_string()))?,
            )
        }
        ComponentKind::Text => component.text.clone(),
    };

    match &component.color {
        Some(style) => {
            let mut out = style.render_escape()?;
            out.push_str(text.as_deref().unwrap_or_default());
            Ok(Some(out))
        }
        None => Ok(text),
    }
}

/// Render every component of `theme` and concatenate the results.
///
/// # Errors
///
/// Stops at the first component that fails; see [`render_component`].
pub fn build_prompt(theme: &Theme, env: &impl Environment) -> Result<String, PromptError> {
    let mut prompt = String::new();
    for (index, component) in theme.iter().enumerate() {
        if let Some(text) = render_component(component, env)? {
            log::trace!("component {index} ({}) -> {text:?}", component.kind);
            prompt.push_str(&text);
        }
    }
    Ok(prompt)
}

/// Return `prompt`, or the current `PS1` if `prompt` is empty.
///
/// # Errors
///
/// Returns [`PromptError::UndefinedEnvVar`] if the fallback is needed and
/// `PS1` is unset.
pub fn prompt_or_fallback(prompt: String, env: &impl Environment) -> Result<String, PromptError> {
    if !prompt.is_empty() {
        return Ok(prompt);
    }
    log::info!("theme rendered an empty prompt, keeping the current {PS1}");
    env.var(PS1)
        .ok_or_else(|| PromptError::UndefinedEnvVar(PS1.to_string()))
}

/// Build the prompt for `theme`, falling back to the current `PS1` when empty.
///
/// # Errors
///
/// See [`build_prompt`] and [`prompt_or_fallback`].
pub fn render_prompt(theme: &Theme, env: &impl Environment) -> Result<String, PromptError> {
    let prompt = build_prompt(theme, env)?;
    prompt_or_fallback(prompt, env)
}

/// Error type for prompt rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    Color(ColorError),
    UndefinedEnvVar(String),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(err) => write!(f, "{err}"),
            Self::UndefinedEnvVar(name) => write!(f, "Environment variable {name} is not set"),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(err) => Some(err),
            Self::UndefinedEnvVar(_) => None,
        }
    }
}

impl From<ColorError> for PromptError {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorDepth;
    use crate::style::{Effect, Style};

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_reset_ignores_color() {
        let component = PromptComponent::reset().with_color(Style::new(ColorDepth::Standard).fg("red"));
        assert_eq!(
            render_component(&component, &env(&[])).unwrap().as_deref(),
            Some(r"\[\033[0m\]")
        );
    }

    #[test]
    fn test_reset_ignores_unresolvable_color() {
        let component = PromptComponent::reset().with_color(Style::new(ColorDepth::Standard).fg("nope"));
        assert!(render_component(&component, &env(&[])).is_ok());
    }

    #[test]
    fn test_text_component() {
        assert_eq!(
            render_component(&PromptComponent::text("\\u"), &env(&[])).unwrap().as_deref(),
            Some("\\u")
        );
        assert_eq!(render_component(&PromptComponent::default(), &env(&[])).unwrap(), None);
    }

    #[test]
    fn test_colored_text_component() {
        let component = PromptComponent::text("$ ")
            .with_color(Style::new(ColorDepth::Standard).fg("red").effect(Effect::Bold));
        assert_eq!(
            render_component(&component, &env(&[])).unwrap().as_deref(),
            Some(r"\[\033[1;31m\]$ ")
        );
    }

    #[test]
    fn test_color_without_text_primes_terminal() {
        let component = PromptComponent::color_only(Style::new(ColorDepth::EightBit).bg("#ff0000"));
        assert_eq!(
            render_component(&component, &env(&[])).unwrap().as_deref(),
            Some(r"\[\033[48;5;196m\]")
        );
    }

    #[test]
    fn test_env_component() {
        let component = PromptComponent::env("USER");
        assert_eq!(
            render_component(&component, &env(&[("USER", "ada")])).unwrap().as_deref(),
            Some("ada")
        );
    }

    #[test]
    fn test_env_component_undefined() {
        let component = PromptComponent::env("MISSING");
        assert_eq!(
            render_component(&component, &env(&[])),
            Err(PromptError::UndefinedEnvVar("MISSING".into()))
        );
    }

    #[test]
    fn test_build_prompt_concatenates_in_order() {
        let theme = Theme::new(vec![
            PromptComponent::env("USER").with_color(Style::new(ColorDepth::Standard).fg("green")),
            PromptComponent::text("@"),
            PromptComponent::default(),
            PromptComponent::text("\\h"),
            PromptComponent::reset(),
        ])
        .unwrap();
        assert_eq!(
            build_prompt(&theme, &env(&[("USER", "ada")])).unwrap(),
            r"\[\033[32m\]ada@\h\[\033[0m\]"
        );
    }

    #[test]
    fn test_build_prompt_aborts_on_color_error() {
        let theme = Theme::new(vec![
            PromptComponent::text("ok"),
            PromptComponent::text("x").with_color(Style::new(ColorDepth::Standard).fg("ultraviolet")),
        ])
        .unwrap();
        let err = build_prompt(&theme, &env(&[])).unwrap_err();
        assert!(matches!(
            err,
            PromptError::Color(ColorError::UnknownColorName { .. })
        ));
    }

    #[test]
    fn test_empty_prompt_falls_back_to_ps1() {
        let theme = Theme::new(vec![PromptComponent::default(), PromptComponent::text("")]).unwrap();
        let vars = env(&[(PS1, r"\u@\h:\w\$ ")]);
        assert_eq!(render_prompt(&theme, &vars).unwrap(), r"\u@\h:\w\$ ");
    }

    #[test]
    fn test_empty_prompt_without_ps1() {
        let theme = Theme::new(vec![PromptComponent::default()]).unwrap();
        assert_eq!(
            render_prompt(&theme, &env(&[])),
            Err(PromptError::UndefinedEnvVar(PS1.into()))
        );
    }

    #[test]
    fn test_non_empty_prompt_ignores_ps1() {
        let theme = Theme::new(vec![PromptComponent::text("> ")]).unwrap();
        assert_eq!(render_prompt(&theme, &env(&[(PS1, "old")])).unwrap(), "> ");
    }
}

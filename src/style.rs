//! Text effects and SGR escape formatting.
//!
//! A [`Style`] bundles the optional foreground, background and effect of a
//! prompt component together with the color depth they are resolved at.
//! [`format_escape`] turns the resolved pieces into a bash prompt escape:
//! `\[\033[<effect>;<fg>;<bg>m\]`. The `\[` and `\]` markers tell readline
//! that the enclosed bytes take no space on screen.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::color::{Channel, ColorDepth, ColorError, resolve};

/// Reset sequence emitted for reset components.
pub const RESET_SEQUENCE: &str = r"\[\033[0m\]";

/// A text effect. Exactly one may be applied per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Effect {
    /// Reset all attributes (SGR 0).
    None = 0,
    /// Bold/bright text (SGR 1).
    Bold = 1,
    /// Dim/faint text (SGR 2).
    Dim = 2,
    /// Single underline (SGR 4).
    Underline = 4,
    /// Slow blinking text (SGR 5).
    Blink = 5,
    /// Reverse video (SGR 7).
    Invert = 7,
    /// Concealed text (SGR 8).
    Hidden = 8,
}

impl Effect {
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Bold,
        Self::Dim,
        Self::Underline,
        Self::Blink,
        Self::Invert,
        Self::Hidden,
    ];

    /// The SGR code for this effect.
    #[must_use]
    pub const fn sgr_code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Bold => "BOLD",
            Self::Dim => "DIM",
            Self::Underline => "UNDERLINE",
            Self::Blink => "BLINK",
            Self::Invert => "INVERT",
            Self::Hidden => "HIDDEN",
        }
    }

    /// Parse an effect name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`EffectError::InvalidEffectName`] for anything outside the fixed set.
    pub fn parse(name: &str) -> Result<Self, EffectError> {
        let upper = name.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|effect| effect.name() == upper)
            .ok_or_else(|| EffectError::InvalidEffectName(name.to_string()))
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Effect {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for effect parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    InvalidEffectName(String),
}

impl fmt::Display for EffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEffectName(s) => write!(f, "Unrecognized effect name: {s}"),
        }
    }
}

impl std::error::Error for EffectError {}

/// Ordered SGR parameters: effect first, then foreground, then background.
fn sgr_parameters(fg: Option<&str>, bg: Option<&str>, effect: Option<Effect>) -> SmallVec<[String; 3]> {
    let mut params = SmallVec::new();
    if let Some(effect) = effect {
        params.push(effect.sgr_code().to_string());
    }
    params.extend(fg.map(str::to_string));
    params.extend(bg.map(str::to_string));
    params
}

/// Format resolved fragments as a prompt escape.
///
/// With nothing set this still yields `\[\033[m\]`.
#[must_use]
pub fn format_escape(fg: Option<&str>, bg: Option<&str>, effect: Option<Effect>) -> String {
    let params = sgr_parameters(fg, bg, effect);
    format!(r"\[\033[{}m\]", params.join(";"))
}

/// Component color: optional foreground, background and effect at one depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color expression.
    pub fg: Option<String>,
    /// Background color expression.
    pub bg: Option<String>,
    pub effect: Option<Effect>,
    pub depth: ColorDepth,
}

impl Style {
    /// Create an empty style at `depth`.
    #[must_use]
    pub fn new(depth: ColorDepth) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Set the foreground color expression.
    #[must_use]
    pub fn fg(mut self, color: impl Into<String>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color expression.
    #[must_use]
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = Some(color.into());
        self
    }

    #[must_use]
    pub fn effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Returns true if neither color nor effect is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.effect.is_none()
    }

    /// Resolve the colors into SGR parameters joined with `;`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ColorError`] from resolving `fg` or `bg`.
    pub fn make_ansi_codes(&self) -> Result<String, ColorError> {
        let fg = resolve(self.fg.as_deref(), Channel::Foreground, self.depth)?;
        let bg = resolve(self.bg.as_deref(), Channel::Background, self.depth)?;
        Ok(sgr_parameters(fg.as_deref(), bg.as_deref(), self.effect).join(";"))
    }

    /// Render the prompt escape for this style.
    ///
    /// # Errors
    ///
    /// Propagates any [`ColorError`] from resolving `fg` or `bg`.
    pub fn render_escape(&self) -> Result<String, ColorError> {
        let fg = resolve(self.fg.as_deref(), Channel::Foreground, self.depth)?;
        let bg = resolve(self.bg.as_deref(), Channel::Background, self.depth)?;
        Ok(format_escape(fg.as_deref(), bg.as_deref(), self.effect))
    }

    /// Wrap `text` in raw terminal escapes, for direct output rather than a prompt.
    ///
    /// # Errors
    ///
    /// Propagates any [`ColorError`] from resolving `fg` or `bg`.
    pub fn render(&self, text: &str) -> Result<String, ColorError> {
        let codes = self.make_ansi_codes()?;
        if codes.is_empty() {
            return Ok(text.to_string());
        }
        Ok(format!("\x1b[{codes}m{text}\x1b[0m"))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(effect) = self.effect {
            parts.push(effect.name().to_lowercase());
        }
        if let Some(fg) = &self.fg {
            parts.push(fg.clone());
        }
        if let Some(bg) = &self.bg {
            parts.push(format!("on {bg}"));
        }
        if parts.is_empty() {
            return write!(f, "none");
        }
        write!(f, "{} ({})", parts.join(" "), self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_codes() {
        let codes: Vec<u8> = Effect::ALL.iter().map(|e| e.sgr_code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 4, 5, 7, 8]);
    }

    #[test]
    fn test_effect_parse_case_insensitive() {
        assert_eq!(Effect::parse("bold").unwrap(), Effect::Bold);
        assert_eq!(Effect::parse("Underline").unwrap(), Effect::Underline);
        assert_eq!("INVERT".parse::<Effect>().unwrap(), Effect::Invert);
        assert_eq!(Effect::parse("none").unwrap(), Effect::None);
    }

    #[test]
    fn test_effect_parse_invalid() {
        assert_eq!(
            Effect::parse("italic"),
            Err(EffectError::InvalidEffectName("italic".into()))
        );
    }

    #[test]
    fn test_effect_parse_keeps_surrounding_whitespace() {
        assert_eq!(
            Effect::parse(" bold "),
            Err(EffectError::InvalidEffectName(" bold ".into()))
        );
        assert!(Effect::parse("bold\n").is_err());
    }

    #[test]
    fn test_format_escape_order() {
        assert_eq!(format_escape(Some("31"), None, Some(Effect::Bold)), r"\[\033[1;31m\]");
        assert_eq!(
            format_escape(Some("38;5;196"), Some("48;5;16"), Some(Effect::Underline)),
            r"\[\033[4;38;5;196;48;5;16m\]"
        );
        assert_eq!(format_escape(None, Some("44"), None), r"\[\033[44m\]");
    }

    #[test]
    fn test_format_escape_empty() {
        assert_eq!(format_escape(None, None, None), r"\[\033[m\]");
    }

    #[test]
    fn test_style_render_escape() {
        let style = Style::new(ColorDepth::Standard)
            .fg("light green")
            .bg("black")
            .effect(Effect::Bold);
        assert_eq!(style.render_escape().unwrap(), r"\[\033[1;92;40m\]");
    }

    #[test]
    fn test_style_render_escape_eight_bit() {
        let style = Style::new(ColorDepth::EightBit).fg("#ff0000").bg("default");
        assert_eq!(style.render_escape().unwrap(), r"\[\033[38;5;196;49m\]");
    }

    #[test]
    fn test_style_propagates_color_error() {
        let style = Style::new(ColorDepth::Standard).bg("#123456");
        assert!(matches!(
            style.render_escape(),
            Err(ColorError::UnsupportedDepth { .. })
        ));
    }

    #[test]
    fn test_style_is_empty() {
        assert!(Style::default().is_empty());
        assert!(!Style::default().effect(Effect::None).is_empty());
    }

    #[test]
    fn test_style_render_raw() {
        let style = Style::new(ColorDepth::Standard).fg("red");
        assert_eq!(style.render("x").unwrap(), "\x1b[31mx\x1b[0m");
        assert_eq!(Style::default().render("x").unwrap(), "x");
    }

    #[test]
    fn test_style_display() {
        let style = Style::new(ColorDepth::EightBit).fg("red").bg("blue").effect(Effect::Dim);
        assert_eq!(style.to_string(), "dim red on blue (8-bit)");
        assert_eq!(Style::default().to_string(), "none");
    }
}

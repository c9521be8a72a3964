//! Color resolution for prompt escape sequences.
//!
//! This module turns a color expression into the numeric payload of an SGR
//! sequence for one of two terminal color depths:
//! - 4-bit (16 colors), addressed by name or raw number
//! - 8-bit (256 colors), addressed by name, raw number, `#rrggbb` or `rgb(r,g,b)`
//!
//! Off-palette RGB values are approximated by snapping each channel to the
//! nearest level present in the palette and looking the snapped color up in
//! a reverse index. Grey inputs (all channels equal) snap against the
//! grayscale ramp only.
//!
//! # Examples
//!
//! ```
//! use prompt_theme::color::{Channel, ColorDepth, resolve_fragment};
//!
//! let red = resolve_fragment("#ff0000", Channel::Foreground, ColorDepth::EightBit).unwrap();
//! assert_eq!(red, "38;5;196");
//!
//! let default_bg = resolve_fragment("default", Channel::Background, ColorDepth::Standard).unwrap();
//! assert_eq!(default_bg, "49");
//! ```
//!
//! The lookup tables are built once per process on first use and are
//! read-only afterwards.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::palette::{EIGHT_BIT_PALETTE, PaletteBand, PaletteEntry, STANDARD_PALETTE};

/// RGB color triplet with values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorTriplet {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorTriplet {
    /// Create a new color triplet from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns CSS-style hex format `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Returns CSS-style rgb format `rgb(r,g,b)`.
    #[must_use]
    pub fn rgb(&self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }

    /// Returns true if all three channels are equal.
    #[must_use]
    pub const fn is_grey(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }

    /// Apply `f` to every channel.
    #[must_use]
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}

impl From<(u8, u8, u8)> for ColorTriplet {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for ColorTriplet {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for ColorTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Terminal color depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ColorDepth {
    /// 4-bit ANSI colors (16 colors).
    #[default]
    Standard = 4,
    /// 8-bit colors (256 colors).
    EightBit = 8,
}

impl ColorDepth {
    /// Map a bit count to a depth. Only 4 and 8 are supported.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Option<Self> {
        match bits {
            4 => Some(Self::Standard),
            8 => Some(Self::EightBit),
            _ => None,
        }
    }

    /// Number of bits per color for this depth.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Which half of the SGR color space a fragment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Foreground,
    Background,
}

impl Channel {
    /// Offset added to 4-bit ids (`30` foreground, `40` background).
    #[must_use]
    pub const fn offset(self) -> u32 {
        match self {
            Self::Foreground => 30,
            Self::Background => 40,
        }
    }

    /// Leading parameter of the extended 256-color form.
    #[must_use]
    pub const fn extended(self) -> u32 {
        match self {
            Self::Foreground => 38,
            Self::Background => 48,
        }
    }
}

/// A resolved palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCode {
    /// The terminal's own default color (SGR 39 / 49).
    Default,
    /// A palette id. Not range checked.
    Index(u32),
}

impl ColorCode {
    /// Format this code as an SGR fragment for the given channel and depth.
    #[must_use]
    pub fn sgr_fragment(self, channel: Channel, depth: ColorDepth) -> String {
        match (self, depth) {
            (Self::Default, _) => (9 + channel.offset()).to_string(),
            (Self::Index(id), ColorDepth::EightBit) => format!("{};5;{id}", channel.extended()),
            (Self::Index(id), ColorDepth::Standard) => (u64::from(id) + u64::from(channel.offset())).to_string(),
        }
    }
}

// ============================================================================
// Lookup Index
// ============================================================================

/// Reverse lookups used to approximate arbitrary RGB values (8-bit only).
#[derive(Debug, Clone)]
pub struct RgbApproximation {
    rgb: HashMap<ColorTriplet, u8>,
    hex: HashMap<String, u8>,
    nearest: [u8; 256],
    nearest_grey: [u8; 256],
}

impl RgbApproximation {
    fn build(entries: &[PaletteEntry]) -> Self {
        let mut rgb = HashMap::new();
        let mut hex = HashMap::new();
        let mut levels = BTreeSet::new();
        let mut grey_levels = Vec::new();

        for entry in entries.iter().filter(|e| e.is_approximable()) {
            let Some(triplet) = entry.rgb else { continue };
            rgb.entry(triplet).or_insert(entry.id);
            hex.entry(triplet.hex()).or_insert(entry.id);
            match entry.band {
                PaletteBand::Cube => {
                    levels.extend([triplet.red, triplet.green, triplet.blue]);
                }
                PaletteBand::Greyscale => grey_levels.push(triplet.red),
                PaletteBand::System => {}
            }
        }

        let levels: Vec<u8> = levels.into_iter().collect();
        log::debug!("color cube levels: {levels:?}, grey ramp: {grey_levels:?}");

        Self {
            rgb,
            hex,
            nearest: nearest_table(&levels),
            nearest_grey: nearest_table(&grey_levels),
        }
    }

    /// Nearest color-cube level for a single channel value.
    #[must_use]
    pub fn nearest_channel(&self, value: u8) -> u8 {
        self.nearest[usize::from(value)]
    }

    /// Nearest grayscale-ramp level for a single channel value.
    #[must_use]
    pub fn nearest_grey_channel(&self, value: u8) -> u8 {
        self.nearest_grey[usize::from(value)]
    }

    /// Snap a color onto the palette grid. Grey colors snap to the ramp.
    #[must_use]
    pub fn snap(&self, triplet: ColorTriplet) -> ColorTriplet {
        if triplet.is_grey() {
            triplet.map(|v| self.nearest_grey_channel(v))
        } else {
            triplet.map(|v| self.nearest_channel(v))
        }
    }

    /// Exact reverse lookup by RGB value.
    #[must_use]
    pub fn rgb_to_id(&self, triplet: ColorTriplet) -> Option<u8> {
        self.rgb.get(&triplet).copied()
    }

    /// Exact reverse lookup by lowercase `#rrggbb` string.
    #[must_use]
    pub fn hex_to_id(&self, hex: &str) -> Option<u8> {
        self.hex.get(hex).copied()
    }
}

/// For every byte value, the closest entry of `levels`. Ties keep the
/// earlier level.
fn nearest_table(levels: &[u8]) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (value, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
        let mut best: Option<u8> = None;
        for &level in levels {
            if best.is_none_or(|b| level.abs_diff(value) < b.abs_diff(value)) {
                best = Some(level);
            }
        }
        *slot = best.unwrap_or(value);
    }
    table
}

/// Name and RGB lookups for one color depth.
#[derive(Debug, Clone)]
pub struct ColorIndex {
    depth: ColorDepth,
    names: HashMap<String, ColorCode>,
    approximation: Option<RgbApproximation>,
}

static STANDARD_INDEX: LazyLock<ColorIndex> =
    LazyLock::new(|| ColorIndex::build(ColorDepth::Standard, &STANDARD_PALETTE));

static EIGHT_BIT_INDEX: LazyLock<ColorIndex> =
    LazyLock::new(|| ColorIndex::build(ColorDepth::EightBit, &EIGHT_BIT_PALETTE));

impl ColorIndex {
    /// The process-wide index for `depth`.
    #[must_use]
    pub fn get(depth: ColorDepth) -> &'static Self {
        match depth {
            ColorDepth::Standard => &STANDARD_INDEX,
            ColorDepth::EightBit => &EIGHT_BIT_INDEX,
        }
    }

    fn build(depth: ColorDepth, entries: &[PaletteEntry]) -> Self {
        let mut names = HashMap::new();
        for entry in entries {
            names
                .entry(entry.name.to_lowercase())
                .or_insert(ColorCode::Index(u32::from(entry.id)));
        }
        names.insert("default".to_string(), ColorCode::Default);

        let approximation = match depth {
            ColorDepth::EightBit => Some(RgbApproximation::build(entries)),
            ColorDepth::Standard => None,
        };

        log::debug!("built {depth} color index with {} names", names.len());

        Self {
            depth,
            names,
            approximation,
        }
    }

    #[must_use]
    pub const fn depth(&self) -> ColorDepth {
        self.depth
    }

    /// Look up a color name (case-insensitive).
    #[must_use]
    pub fn name_to_code(&self, name: &str) -> Option<ColorCode> {
        self.names.get(&name.to_lowercase()).copied()
    }

    /// RGB approximation tables, present only for 8-bit depth.
    #[must_use]
    pub fn approximation(&self) -> Option<&RgbApproximation> {
        self.approximation.as_ref()
    }
}

// ============================================================================
// Color Expressions
// ============================================================================

/// A parsed color expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorExpr {
    /// `#rrggbb`
    Hex(ColorTriplet),
    /// `rgb(r,g,b)`
    Rgb(ColorTriplet),
    /// A bare palette number such as `196`.
    Number(u32),
    /// Anything else, lowercased.
    Name(String),
}

impl ColorExpr {
    /// Classify a color expression.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidRgb`] if an `rgb(...)` component is above 255.
    pub fn parse(expr: &str) -> Result<Self, ColorError> {
        static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^#([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").expect("valid regex")
        });
        static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
                .expect("valid regex")
        });

        let normalized = expr.trim().to_lowercase();

        if let Some(caps) = HEX_RE.captures(&normalized)
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&caps[1], 16),
                u8::from_str_radix(&caps[2], 16),
                u8::from_str_radix(&caps[3], 16),
            )
        {
            return Ok(Self::Hex(ColorTriplet::new(r, g, b)));
        }

        if let Some(caps) = RGB_RE.captures(&normalized) {
            return match (caps[1].parse::<u8>(), caps[2].parse::<u8>(), caps[3].parse::<u8>()) {
                (Ok(r), Ok(g), Ok(b)) => Ok(Self::Rgb(ColorTriplet::new(r, g, b))),
                _ => Err(ColorError::InvalidRgb(normalized)),
            };
        }

        if !normalized.is_empty()
            && normalized.bytes().all(|b| b.is_ascii_digit())
            && let Ok(number) = normalized.parse::<u32>()
        {
            return Ok(Self::Number(number));
        }

        Ok(Self::Name(normalized))
    }

    /// Resolve this expression to a palette code at `depth`.
    ///
    /// # Errors
    ///
    /// - [`ColorError::UnsupportedDepth`] for hex/rgb input below 8-bit depth
    /// - [`ColorError::UnknownColorName`] if a name is not in the palette
    /// - [`ColorError::LookupMiss`] if a snapped color has no palette entry
    pub fn to_code(&self, depth: ColorDepth) -> Result<ColorCode, ColorError> {
        let index = ColorIndex::get(depth);
        match self {
            Self::Hex(triplet) | Self::Rgb(triplet) => {
                let Some(approx) = index.approximation() else {
                    return Err(ColorError::UnsupportedDepth {
                        color: self.to_string(),
                        depth,
                    });
                };
                let snapped = approx.snap(*triplet);
                let id = match self {
                    Self::Hex(_) => approx.hex_to_id(&snapped.hex()),
                    _ => approx.rgb_to_id(snapped),
                };
                id.map(|id| ColorCode::Index(u32::from(id)))
                    .ok_or_else(|| ColorError::LookupMiss(snapped.hex()))
            }
            Self::Number(number) => Ok(ColorCode::Index(*number)),
            Self::Name(name) => index
                .name_to_code(name)
                .ok_or_else(|| ColorError::UnknownColorName {
                    name: name.clone(),
                    depth,
                }),
        }
    }
}

impl fmt::Display for ColorExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(triplet) => write!(f, "{}", triplet.hex()),
            Self::Rgb(triplet) => write!(f, "{}", triplet.rgb()),
            Self::Number(number) => write!(f, "{number}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for ColorExpr {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Resolve a color expression into an SGR fragment such as `"31"` or `"38;5;196"`.
///
/// # Errors
///
/// See [`ColorExpr::parse`] and [`ColorExpr::to_code`].
pub fn resolve_fragment(expr: &str, channel: Channel, depth: ColorDepth) -> Result<String, ColorError> {
    let code = ColorExpr::parse(expr)?.to_code(depth)?;
    let fragment = code.sgr_fragment(channel, depth);
    log::trace!("resolved {expr:?} ({channel:?}, {depth}) -> {fragment}");
    Ok(fragment)
}

/// Like [`resolve_fragment`], passing `None` through.
///
/// # Errors
///
/// See [`resolve_fragment`].
pub fn resolve(color: Option<&str>, channel: Channel, depth: ColorDepth) -> Result<Option<String>, ColorError> {
    color
        .map(|expr| resolve_fragment(expr, channel, depth))
        .transpose()
}

/// Error type for color resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex or rgb input used below 8-bit depth.
    UnsupportedDepth { color: String, depth: ColorDepth },
    /// Name not present in the palette for this depth.
    UnknownColorName { name: String, depth: ColorDepth },
    /// A snapped color had no reverse entry. Indicates broken tables.
    LookupMiss(String),
    /// `rgb(...)` with a component outside 0-255.
    InvalidRgb(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDepth { color, depth } => {
                write!(f, "Color {color} requires 8-bit depth (got {depth})")
            }
            Self::UnknownColorName { name, depth } => {
                write!(f, "Unknown {depth} color name: {name}")
            }
            Self::LookupMiss(key) => write!(f, "No palette entry for snapped color {key}"),
            Self::InvalidRgb(s) => write!(f, "Invalid RGB color: {s}"),
        }
    }
}

impl std::error::Error for ColorError {}

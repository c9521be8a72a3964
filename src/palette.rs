//! Static terminal palettes.
//!
//! Two palettes are defined, one per supported [`ColorDepth`](crate::color::ColorDepth):
//!
//! - the 16-color palette, addressed by name only. Its ids follow the SGR
//!   layout used by the formatter: `0..=7` for the standard colors and
//!   `60..=67` for the light variants, so `id + 30` / `id + 40` lands on the
//!   `30-37`/`90-97` and `40-47`/`100-107` families.
//! - the 256-color palette, where every entry carries its RGB value and
//!   belongs to one of three [`PaletteBand`]s.
//!
//! Entries are listed in ascending id order. Several ids share a name or a
//! color; consumers that build reverse lookups rely on this order and keep
//! the first occurrence.

use crate::color::ColorTriplet;

/// Region of the 256-color palette an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteBand {
    /// Ids 0-15 except 7. Terminals are free to remap these, so they are
    /// only reachable by name or number.
    System,
    /// Ids 16-231, the 6x6x6 color cube.
    Cube,
    /// Id 7 (Silver) and ids 232-255, the grayscale ramp.
    Greyscale,
}

/// A single palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub id: u8,
    pub name: &'static str,
    pub rgb: Option<ColorTriplet>,
    pub band: PaletteBand,
}

impl PaletteEntry {
    const fn with_rgb(id: u8, name: &'static str, band: PaletteBand, rgb: ColorTriplet) -> Self {
        Self {
            id,
            name,
            rgb: Some(rgb),
            band,
        }
    }

    /// Returns true if this entry participates in RGB approximation.
    #[must_use]
    pub const fn is_approximable(&self) -> bool {
        matches!(self.band, PaletteBand::Cube | PaletteBand::Greyscale)
    }
}

const fn named(id: u8, name: &'static str) -> PaletteEntry {
    PaletteEntry {
        id,
        name,
        rgb: None,
        band: PaletteBand::System,
    }
}

const fn base(id: u8, name: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry::with_rgb(id, name, PaletteBand::System, ColorTriplet::new(r, g, b))
}

const fn cube(id: u8, name: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry::with_rgb(id, name, PaletteBand::Cube, ColorTriplet::new(r, g, b))
}

const fn ramp(id: u8, name: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry::with_rgb(id, name, PaletteBand::Greyscale, ColorTriplet::new(r, g, b))
}

/// 16-color palette (4-bit depth).
pub static STANDARD_PALETTE: [PaletteEntry; 16] = [
    named(0, "Black"),
    named(1, "Red"),
    named(2, "Green"),
    named(3, "Yellow"),
    named(4, "Blue"),
    named(5, "Magenta"),
    named(6, "Cyan"),
    named(7, "Light gray"),
    named(60, "Dark gray"),
    named(61, "Light red"),
    named(62, "Light green"),
    named(63, "Light yellow"),
    named(64, "Light blue"),
    named(65, "Light magenta"),
    named(66, "Light cyan"),
    named(67, "White"),
];

/// 256-color palette (8-bit depth), indexed by id.
#[rustfmt::skip]
pub static EIGHT_BIT_PALETTE: [PaletteEntry; 256] = [
    base(  0, "Black",               0,   0,   0),
    base(  1, "Maroon",            128,   0,   0),
    base(  2, "Green",               0, 128,   0),
    base(  3, "Olive",             128, 128,   0),
    base(  4, "Navy",                0,   0, 128),
    base(  5, "Purple",            128,   0, 128),
    base(  6, "Teal",                0, 128, 128),
    ramp(  7, "Silver",            192, 192, 192),
    base(  8, "Grey",              128, 128, 128),
    base(  9, "Red",               255,   0,   0),
    base( 10, "Lime",                0, 255,   0),
    base( 11, "Yellow",            255, 255,   0),
    base( 12, "Blue",                0,   0, 255),
    base( 13, "Fuchsia",           255,   0, 255),
    base( 14, "Aqua",                0, 255, 255),
    base( 15, "White",             255, 255, 255),
    cube( 16, "Grey0",               0,   0,   0),
    cube( 17, "NavyBlue",            0,   0,  95),
    cube( 18, "DarkBlue",            0,   0, 135),
    cube( 19, "Blue3",               0,   0, 175),
    cube( 20, "Blue3",               0,   0, 215),
    cube( 21, "Blue1",               0,   0, 255),
    cube( 22, "DarkGreen",           0,  95,   0),
    cube( 23, "DeepSkyBlue4",        0,  95,  95),
    cube( 24, "DeepSkyBlue4",        0,  95, 135),
    cube( 25, "DeepSkyBlue4",        0,  95, 175),
    cube( 26, "DodgerBlue3",         0,  95, 215),
    cube( 27, "DodgerBlue2",         0,  95, 255),
    cube( 28, "Green4",              0, 135,   0),
    cube( 29, "SpringGreen4",        0, 135,  95),
    cube( 30, "Turquoise4",          0, 135, 135),
    cube( 31, "DeepSkyBlue3",        0, 135, 175),
    cube( 32, "DeepSkyBlue3",        0, 135, 215),
    cube( 33, "DodgerBlue1",         0, 135, 255),
    cube( 34, "Green3",              0, 175,   0),
    cube( 35, "SpringGreen3",        0, 175,  95),
    cube( 36, "DarkCyan",            0, 175, 135),
    cube( 37, "LightSeaGreen",       0, 175, 175),
    cube( 38, "DeepSkyBlue2",        0, 175, 215),
    cube( 39, "DeepSkyBlue1",        0, 175, 255),
    cube( 40, "Green3",              0, 215,   0),
    cube( 41, "SpringGreen3",        0, 215,  95),
    cube( 42, "SpringGreen2",        0, 215, 135),
    cube( 43, "Cyan3",               0, 215, 175),
    cube( 44, "DarkTurquoise",       0, 215, 215),
    cube( 45, "Turquoise2",          0, 215, 255),
    cube( 46, "Green1",              0, 255,   0),
    cube( 47, "SpringGreen2",        0, 255,  95),
    cube( 48, "SpringGreen1",        0, 255, 135),
    cube( 49, "MediumSpringGreen",   0, 255, 175),
    cube( 50, "Cyan2",               0, 255, 215),
    cube( 51, "Cyan1",               0, 255, 255),
    cube( 52, "DarkRed",            95,   0,   0),
    cube( 53, "DeepPink4",          95,   0,  95),
    cube( 54, "Purple4",            95,   0, 135),
    cube( 55, "Purple4",            95,   0, 175),
    cube( 56, "Purple3",            95,   0, 215),
    cube( 57, "BlueViolet",         95,   0, 255),
    cube( 58, "Orange4",            95,  95,   0),
    cube( 59, "Grey37",             95,  95,  95),
    cube( 60, "MediumPurple4",      95,  95, 135),
    cube( 61, "SlateBlue3",         95,  95, 175),
    cube( 62, "SlateBlue3",         95,  95, 215),
    cube( 63, "RoyalBlue1",         95,  95, 255),
    cube( 64, "Chartreuse4",        95, 135,   0),
    cube( 65, "DarkSeaGreen4",      95, 135,  95),
    cube( 66, "PaleTurquoise4",     95, 135, 135),
    cube( 67, "SteelBlue",          95, 135, 175),
    cube( 68, "SteelBlue3",         95, 135, 215),
    cube( 69, "CornflowerBlue",     95, 135, 255),
    cube( 70, "Chartreuse3",        95, 175,   0),
    cube( 71, "DarkSeaGreen4",      95, 175,  95),
    cube( 72, "CadetBlue",          95, 175, 135),
    cube( 73, "CadetBlue",          95, 175, 175),
    cube( 74, "SkyBlue3",           95, 175, 215),
    cube( 75, "SteelBlue1",         95, 175, 255),
    cube( 76, "Chartreuse3",        95, 215,   0),
    cube( 77, "PaleGreen3",         95, 215,  95),
    cube( 78, "SeaGreen3",          95, 215, 135),
    cube( 79, "Aquamarine3",        95, 215, 175),
    cube( 80, "MediumTurquoise",    95, 215, 215),
    cube( 81, "SteelBlue1",         95, 215, 255),
    cube( 82, "Chartreuse2",        95, 255,   0),
    cube( 83, "SeaGreen2",          95, 255,  95),
    cube( 84, "SeaGreen1",          95, 255, 135),
    cube( 85, "SeaGreen1",          95, 255, 175),
    cube( 86, "Aquamarine1",        95, 255, 215),
    cube( 87, "DarkSlateGray2",     95, 255, 255),
    cube( 88, "DarkRed",           135,   0,   0),
    cube( 89, "DeepPink4",         135,   0,  95),
    cube( 90, "DarkMagenta",       135,   0, 135),
    cube( 91, "DarkMagenta",       135,   0, 175),
    cube( 92, "DarkViolet",        135,   0, 215),
    cube( 93, "Purple",            135,   0, 255),
    cube( 94, "Orange4",           135,  95,   0),
    cube( 95, "LightPink4",        135,  95,  95),
    cube( 96, "Plum4",             135,  95, 135),
    cube( 97, "MediumPurple3",     135,  95, 175),
    cube( 98, "MediumPurple3",     135,  95, 215),
    cube( 99, "SlateBlue1",        135,  95, 255),
    cube(100, "Yellow4",           135, 135,   0),
    cube(101, "Wheat4",            135, 135,  95),
    cube(102, "Grey53",            135, 135, 135),
    cube(103, "LightSlateGrey",    135, 135, 175),
    cube(104, "MediumPurple",      135, 135, 215),
    cube(105, "LightSlateBlue",    135, 135, 255),
    cube(106, "Yellow4",           135, 175,   0),
    cube(107, "DarkOliveGreen3",   135, 175,  95),
    cube(108, "DarkSeaGreen",      135, 175, 135),
    cube(109, "LightSkyBlue3",     135, 175, 175),
    cube(110, "LightSkyBlue3",     135, 175, 215),
    cube(111, "SkyBlue2",          135, 175, 255),
    cube(112, "Chartreuse2",       135, 215,   0),
    cube(113, "DarkOliveGreen3",   135, 215,  95),
    cube(114, "PaleGreen3",        135, 215, 135),
    cube(115, "DarkSeaGreen3",     135, 215, 175),
    cube(116, "DarkSlateGray3",    135, 215, 215),
    cube(117, "SkyBlue1",          135, 215, 255),
    cube(118, "Chartreuse1",       135, 255,   0),
    cube(119, "LightGreen",        135, 255,  95),
    cube(120, "LightGreen",        135, 255, 135),
    cube(121, "PaleGreen1",        135, 255, 175),
    cube(122, "Aquamarine1",       135, 255, 215),
    cube(123, "DarkSlateGray1",    135, 255, 255),
    cube(124, "Red3",              175,   0,   0),
    cube(125, "DeepPink4",         175,   0,  95),
    cube(126, "MediumVioletRed",   175,   0, 135),
    cube(127, "Magenta3",          175,   0, 175),
    cube(128, "DarkViolet",        175,   0, 215),
    cube(129, "Purple",            175,   0, 255),
    cube(130, "DarkOrange3",       175,  95,   0),
    cube(131, "IndianRed",         175,  95,  95),
    cube(132, "HotPink3",          175,  95, 135),
    cube(133, "MediumOrchid3",     175,  95, 175),
    cube(134, "MediumOrchid",      175,  95, 215),
    cube(135, "MediumPurple2",     175,  95, 255),
    cube(136, "DarkGoldenrod",     175, 135,   0),
    cube(137, "LightSalmon3",      175, 135,  95),
    cube(138, "RosyBrown",         175, 135, 135),
    cube(139, "Grey63",            175, 135, 175),
    cube(140, "MediumPurple2",     175, 135, 215),
    cube(141, "MediumPurple1",     175, 135, 255),
    cube(142, "Gold3",             175, 175,   0),
    cube(143, "DarkKhaki",         175, 175,  95),
    cube(144, "NavajoWhite3",      175, 175, 135),
    cube(145, "Grey69",            175, 175, 175),
    cube(146, "LightSteelBlue3",   175, 175, 215),
    cube(147, "LightSteelBlue",    175, 175, 255),
    cube(148, "Yellow3",           175, 215,   0),
    cube(149, "DarkOliveGreen3",   175, 215,  95),
    cube(150, "DarkSeaGreen3",     175, 215, 135),
    cube(151, "DarkSeaGreen2",     175, 215, 175),
    cube(152, "LightCyan3",        175, 215, 215),
    cube(153, "LightSkyBlue1",     175, 215, 255),
    cube(154, "GreenYellow",       175, 255,   0),
    cube(155, "DarkOliveGreen2",   175, 255,  95),
    cube(156, "PaleGreen1",        175, 255, 135),
    cube(157, "DarkSeaGreen2",     175, 255, 175),
    cube(158, "DarkSeaGreen1",     175, 255, 215),
    cube(159, "PaleTurquoise1",    175, 255, 255),
    cube(160, "Red3",              215,   0,   0),
    cube(161, "DeepPink3",         215,   0,  95),
    cube(162, "DeepPink3",         215,   0, 135),
    cube(163, "Magenta3",          215,   0, 175),
    cube(164, "Magenta3",          215,   0, 215),
    cube(165, "Magenta2",          215,   0, 255),
    cube(166, "DarkOrange3",       215,  95,   0),
    cube(167, "IndianRed",         215,  95,  95),
    cube(168, "HotPink3",          215,  95, 135),
    cube(169, "HotPink2",          215,  95, 175),
    cube(170, "Orchid",            215,  95, 215),
    cube(171, "MediumOrchid1",     215,  95, 255),
    cube(172, "Orange3",           215, 135,   0),
    cube(173, "LightSalmon3",      215, 135,  95),
    cube(174, "LightPink3",        215, 135, 135),
    cube(175, "Pink3",             215, 135, 175),
    cube(176, "Plum3",             215, 135, 215),
    cube(177, "Violet",            215, 135, 255),
    cube(178, "Gold3",             215, 175,   0),
    cube(179, "LightGoldenrod3",   215, 175,  95),
    cube(180, "Tan",               215, 175, 135),
    cube(181, "MistyRose3",        215, 175, 175),
    cube(182, "Thistle3",          215, 175, 215),
    cube(183, "Plum2",             215, 175, 255),
    cube(184, "Yellow3",           215, 215,   0),
    cube(185, "Khaki3",            215, 215,  95),
    cube(186, "LightGoldenrod2",   215, 215, 135),
    cube(187, "LightYellow3",      215, 215, 175),
    cube(188, "Grey84",            215, 215, 215),
    cube(189, "LightSteelBlue1",   215, 215, 255),
    cube(190, "Yellow2",           215, 255,   0),
    cube(191, "DarkOliveGreen1",   215, 255,  95),
    cube(192, "DarkOliveGreen1",   215, 255, 135),
    cube(193, "DarkSeaGreen1",     215, 255, 175),
    cube(194, "Honeydew2",         215, 255, 215),
    cube(195, "LightCyan1",        215, 255, 255),
    cube(196, "Red1",              255,   0,   0),
    cube(197, "DeepPink2",         255,   0,  95),
    cube(198, "DeepPink1",         255,   0, 135),
    cube(199, "DeepPink1",         255,   0, 175),
    cube(200, "Magenta2",          255,   0, 215),
    cube(201, "Magenta1",          255,   0, 255),
    cube(202, "OrangeRed1",        255,  95,   0),
    cube(203, "IndianRed1",        255,  95,  95),
    cube(204, "IndianRed1",        255,  95, 135),
    cube(205, "HotPink",           255,  95, 175),
    cube(206, "HotPink",           255,  95, 215),
    cube(207, "MediumOrchid1",     255,  95, 255),
    cube(208, "DarkOrange",        255, 135,   0),
    cube(209, "Salmon1",           255, 135,  95),
    cube(210, "LightCoral",        255, 135, 135),
    cube(211, "PaleVioletRed1",    255, 135, 175),
    cube(212, "Orchid2",           255, 135, 215),
    cube(213, "Orchid1",           255, 135, 255),
    cube(214, "Orange1",           255, 175,   0),
    cube(215, "SandyBrown",        255, 175,  95),
    cube(216, "LightSalmon1",      255, 175, 135),
    cube(217, "LightPink1",        255, 175, 175),
    cube(218, "Pink1",             255, 175, 215),
    cube(219, "Plum1",             255, 175, 255),
    cube(220, "Gold1",             255, 215,   0),
    cube(221, "LightGoldenrod2",   255, 215,  95),
    cube(222, "LightGoldenrod2",   255, 215, 135),
    cube(223, "NavajoWhite1",      255, 215, 175),
    cube(224, "MistyRose1",        255, 215, 215),
    cube(225, "Thistle1",          255, 215, 255),
    cube(226, "Yellow1",           255, 255,   0),
    cube(227, "LightGoldenrod1",   255, 255,  95),
    cube(228, "Khaki1",            255, 255, 135),
    cube(229, "Wheat1",            255, 255, 175),
    cube(230, "Cornsilk1",         255, 255, 215),
    cube(231, "Grey100",           255, 255, 255),
    ramp(232, "Grey3",               8,   8,   8),
    ramp(233, "Grey7",              18,  18,  18),
    ramp(234, "Grey11",             28,  28,  28),
    ramp(235, "Grey15",             38,  38,  38),
    ramp(236, "Grey19",             48,  48,  48),
    ramp(237, "Grey23",             58,  58,  58),
    ramp(238, "Grey27",             68,  68,  68),
    ramp(239, "Grey30",             78,  78,  78),
    ramp(240, "Grey35",             88,  88,  88),
    ramp(241, "Grey39",             98,  98,  98),
    ramp(242, "Grey42",            108, 108, 108),
    ramp(243, "Grey46",            118, 118, 118),
    ramp(244, "Grey50",            128, 128, 128),
    ramp(245, "Grey54",            138, 138, 138),
    ramp(246, "Grey58",            148, 148, 148),
    ramp(247, "Grey62",            158, 158, 158),
    ramp(248, "Grey66",            168, 168, 168),
    ramp(249, "Grey70",            178, 178, 178),
    ramp(250, "Grey74",            188, 188, 188),
    ramp(251, "Grey78",            198, 198, 198),
    ramp(252, "Grey82",            208, 208, 208),
    ramp(253, "Grey85",            218, 218, 218),
    ramp(254, "Grey89",            228, 228, 228),
    ramp(255, "Grey93",            238, 238, 238),
];

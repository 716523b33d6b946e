//! Model a color with the NCol (natural color) notation, an artist oriented
//! variant of HWB where the hue is named by the primary it starts from.
//!
//! The hue circle is split into six 60 degree sectors starting at red. A hue
//! is written as the letter of its sector followed by the percentage of the
//! way towards the next sector, so `R0` is red, `Y50` is halfway between
//! yellow and green (90 degrees) and `M99` is almost back at red.

use std::fmt;

use crate::{
    color::{Component, Flags, Rgba},
    math::normalize_hue,
    models::{hwb::Hwb, FromRgba, ToRgba},
};

/// One of the six 60 degree hue sectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HueSector {
    /// Red, starting at 0 degrees.
    Red,
    /// Yellow, starting at 60 degrees.
    Yellow,
    /// Green, starting at 120 degrees.
    Green,
    /// Cyan, starting at 180 degrees.
    Cyan,
    /// Blue, starting at 240 degrees.
    Blue,
    /// Magenta, starting at 300 degrees.
    Magenta,
}

impl HueSector {
    /// All sectors in hue order.
    pub const ALL: [HueSector; 6] = [
        HueSector::Red,
        HueSector::Yellow,
        HueSector::Green,
        HueSector::Cyan,
        HueSector::Blue,
        HueSector::Magenta,
    ];

    /// Width of a sector in degrees.
    pub const WIDTH: Component = 60.0;

    /// Return the sector for the given letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter.to_ascii_uppercase() {
            'R' => Self::Red,
            'Y' => Self::Yellow,
            'G' => Self::Green,
            'C' => Self::Cyan,
            'B' => Self::Blue,
            'M' => Self::Magenta,
            _ => return None,
        })
    }

    /// The upper case letter naming this sector.
    pub fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Cyan => 'C',
            Self::Blue => 'B',
            Self::Magenta => 'M',
        }
    }

    /// The hue in degrees where this sector starts.
    pub fn start(self) -> Component {
        self.index() as Component * Self::WIDTH
    }

    /// The sector following this one around the hue circle.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Split a hue in degrees into its sector and the percentage of the way
    /// through that sector.
    pub fn from_hue(hue: Component) -> (Self, Component) {
        let hue = normalize_hue(hue);
        let index = ((hue / Self::WIDTH).floor() as usize).min(Self::ALL.len() - 1);
        let sector = Self::ALL[index];
        let position = (hue - sector.start()) / Self::WIDTH * 100.0;

        (sector, position.clamp(0.0, 100.0))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HueSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A color specified with the NCol notation. Position, whiteness and
/// blackness are percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ncol {
    /// The hue sector of the color.
    pub sector: HueSector,
    /// How far through the sector the hue is.
    pub position: Component,
    /// The whiteness component of the color.
    pub whiteness: Component,
    /// The blackness component of the color.
    pub blackness: Component,
    /// The alpha component of the color.
    pub alpha: Component,
    /// Components that are missing or powerless.
    pub flags: Flags,
}

impl Ncol {
    /// Create a new color with the NCol notation.
    pub fn new(
        sector: HueSector,
        position: Component,
        whiteness: Component,
        blackness: Component,
        alpha: Component,
    ) -> Self {
        Self {
            sector,
            position,
            whiteness,
            blackness,
            alpha,
            flags: Flags::empty(),
        }
    }

    /// Return the hue in degrees.
    pub fn hue(&self) -> Component {
        let offset = self.position.clamp(0.0, 100.0) / 100.0 * HueSector::WIDTH;
        normalize_hue(self.sector.start() + offset)
    }

    /// Convert to the equivalent HWB model.
    pub fn to_hwb(&self) -> Hwb {
        Hwb::new(self.hue(), self.whiteness, self.blackness, self.alpha).with_flags(self.flags)
    }
}

impl From<Hwb> for Ncol {
    fn from(hwb: Hwb) -> Self {
        let (sector, position) = HueSector::from_hue(hwb.hue);
        let mut ncol = Ncol::new(sector, position, hwb.whiteness, hwb.blackness, hwb.alpha);
        ncol.flags = hwb.flags;
        ncol
    }
}

impl FromRgba for Ncol {
    fn from_rgba(color: &Rgba) -> Self {
        Hwb::from_rgba(color).into()
    }
}

impl ToRgba for Ncol {
    fn to_rgba(&self) -> Rgba {
        self.to_hwb().to_rgba()
    }
}

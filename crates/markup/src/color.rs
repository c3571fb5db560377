//! Color types and the basic color table.
//!
//! Basic colors are the eight standard foreground codes (30-37). Extended
//! colors are carried as literal numbers: palette indices and RGB
//! components are never range-checked or converted.

use phf::phf_map;

use crate::decimal::Decimal;

/// The basic color table: uppercase name to foreground code.
///
/// The background variant of each entry is `code + 10`.
pub static COLORS: phf::Map<&'static str, u8> = phf_map! {
    "BLACK" => 30,
    "RED" => 31,
    "GREEN" => 32,
    "YELLOW" => 33,
    "BLUE" => 34,
    "MAGENTA" => 35,
    "CYAN" => 36,
    "WHITE" => 37,
};

/// Offset from a basic foreground code to its background code.
const BACKGROUND_OFFSET: u8 = 10;

/// Which cell layer a color applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layer {
    /// Text color.
    #[default]
    Foreground,
    /// Cell background.
    Background,
}

impl Layer {
    /// Select the layer from a `BG` flag.
    pub fn from_background(background: bool) -> Self {
        if background {
            Layer::Background
        } else {
            Layer::Foreground
        }
    }

    /// Returns true for [`Layer::Background`].
    pub fn is_background(self) -> bool {
        self == Layer::Background
    }

    /// The SGR introducer for extended (256 and truecolor) colors.
    pub fn extended_code(self) -> u8 {
        match self {
            Layer::Foreground => 38,
            Layer::Background => 48,
        }
    }
}

/// A color a directive can select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Color {
    /// A basic color, stored as its foreground code from [`COLORS`].
    Basic(u8),
    /// A 256-color palette index, passed through as given.
    Indexed(Decimal),
    /// A truecolor triple, passed through as given.
    Rgb(Decimal, Decimal, Decimal),
}

impl Color {
    /// Look up a basic color by name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use warna_markup::Color;
    ///
    /// assert_eq!(Color::named("red"), Some(Color::Basic(31)));
    /// assert_eq!(Color::named("Cyan"), Some(Color::Basic(36)));
    /// assert_eq!(Color::named("orange"), None);
    /// ```
    pub fn named(name: &str) -> Option<Self> {
        COLORS.get(name.to_uppercase().as_str()).map(|&code| Color::Basic(code))
    }

    /// A truecolor from byte components.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r.into(), g.into(), b.into())
    }

    /// SGR parameters selecting this color on the given layer.
    pub fn params(&self, layer: Layer) -> Vec<Decimal> {
        match self {
            Color::Basic(code) => {
                let code = if layer.is_background() {
                    code + BACKGROUND_OFFSET
                } else {
                    *code
                };
                vec![code.into()]
            }
            Color::Indexed(index) => {
                vec![layer.extended_code().into(), 5u8.into(), index.clone()]
            }
            Color::Rgb(r, g, b) => vec![
                layer.extended_code().into(),
                2u8.into(),
                r.clone(),
                g.clone(),
                b.clone(),
            ],
        }
    }
}

//! Text style modifiers.
//!
//! Modifiers are selected by one-letter abbreviations inside a basic color
//! directive, e.g. `{GREEN(B,U)}`.

use phf::phf_map;

/// Text styling attributes a directive can add.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    /// Bold/increased intensity.
    Bold,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
}

/// The style table: uppercase abbreviation to modifier.
pub static STYLES: phf::Map<&'static str, Modifier> = phf_map! {
    "B" => Modifier::Bold,
    "I" => Modifier::Italic,
    "U" => Modifier::Underline,
};

impl Modifier {
    /// Look up a modifier by its abbreviation.
    ///
    /// The abbreviation must already be uppercase, as produced by
    /// [`Params`](crate::parser::Params).
    pub fn from_abbrev(abbrev: &str) -> Option<Self> {
        STYLES.get(abbrev).copied()
    }

    /// The SGR code for this modifier.
    pub fn code(self) -> i64 {
        match self {
            Modifier::Bold => 1,
            Modifier::Italic => 3,
            Modifier::Underline => 4,
        }
    }
}

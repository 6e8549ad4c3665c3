//! Character classes and their fixed alphabets.
//!
//! The letter and digit alphabets never contain visually similar glyphs.

/// Glyphs omitted from every generator alphabet.
pub const SIMILAR_GLYPHS: &str = "iloIO01";

const LOWERCASE: &str = "abcdefghjkmnpqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS: &str = "23456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Symbols removed from the symbol alphabet when ambiguous characters are excluded.
pub const AMBIGUOUS_SYMBOLS: &str = "()[]{}|;:,.<>";

/// One of the four generator character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Number,
    Symbol,
}

impl CharClass {
    /// The characters this class draws from.
    pub fn alphabet(&self, exclude_ambiguous: bool) -> Vec<char> {
        match self {
            CharClass::Lowercase => LOWERCASE.chars().collect(),
            CharClass::Uppercase => UPPERCASE.chars().collect(),
            CharClass::Number => DIGITS.chars().collect(),
            CharClass::Symbol => SYMBOLS
                .chars()
                .filter(|c| !exclude_ambiguous || !AMBIGUOUS_SYMBOLS.contains(*c))
                .collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Number => "numbers",
            CharClass::Symbol => "symbols",
        }
    }
}

/// Concatenation of the alphabets of `classes`.
pub fn build(classes: &[CharClass], exclude_ambiguous: bool) -> Vec<char> {
    classes
        .iter()
        .flat_map(|class| class.alphabet(exclude_ambiguous))
        .collect()
}

//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use super::SectionResult;
use crate::denylist::Denylist;

/// Which character classes appear in a password.
///
/// Letters and digits are ASCII; anything outside ASCII alphanumerics
/// counts as special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Variety {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special: bool,
}

impl Variety {
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut v, c| {
            v.has_uppercase |= c.is_ascii_uppercase();
            v.has_lowercase |= c.is_ascii_lowercase();
            v.has_number |= c.is_ascii_digit();
            v.has_special |= !c.is_ascii_alphanumeric();
            v
        })
    }

    /// Number of classes present, 0 to 4.
    pub fn count(&self) -> usize {
        [
            self.has_uppercase,
            self.has_lowercase,
            self.has_number,
            self.has_special,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }

    fn missing(&self) -> Vec<&'static str> {
        vec![
            if !self.has_uppercase { Some("uppercase") } else { None },
            if !self.has_lowercase { Some("lowercase") } else { None },
            if !self.has_number { Some("numbers") } else { None },
            if !self.has_special { Some("special characters") } else { None },
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Checks if the password contains a variety of character types.
///
/// # Returns
/// - `Some(reason)` if missing required character types
/// - `None` if all character types are present
pub fn character_variety_section(password: &str, _denylist: &Denylist) -> SectionResult {
    let missing = Variety::of(password).missing();
    if !missing.is_empty() {
        return Some(format!("Missing: {}", missing.join(", ")));
    }
    None
}

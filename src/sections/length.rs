//! Length section - checks password minimum length.

use super::SectionResult;
use crate::denylist::Denylist;

pub const MIN_LENGTH: usize = 8;

/// Length in code points.
pub fn char_count(password: &str) -> usize {
    password.chars().count()
}

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &str, _denylist: &Denylist) -> SectionResult {
    if char_count(password) < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        length_section(pwd, Denylist::builtin())
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            check("Short1!"),
            Some("Password must be at least 8 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(check("87654329"), None);
    }

    #[test]
    fn test_length_section_counts_code_points() {
        // 7 code points, 14 bytes
        assert_eq!(char_count("ééééééé"), 7);
        assert!(check("ééééééé").is_some());
    }

    #[test]
    fn test_length_section_valid() {
        assert_eq!(check("LongEnough9!"), None);
    }
}

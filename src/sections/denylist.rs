//! Denylist section - checks the password against common passwords and patterns.

use super::SectionResult;
use crate::denylist::Denylist;

/// Checks if the password is a common password or contains a common pattern.
///
/// # Returns
/// - `Some(reason)` if password is denied
/// - `None` otherwise
pub fn denylist_section(password: &str, denylist: &Denylist) -> SectionResult {
    if denylist.is_denied(password) {
        return Some(
            "Password is a common password or contains a common pattern".to_string(),
        );
    }
    None
}

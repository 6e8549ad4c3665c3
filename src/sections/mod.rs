//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength.

mod denylist;
mod length;
mod pattern;
mod variety;

pub use denylist::denylist_section;
pub use length::{MIN_LENGTH, char_count, length_section};
pub use pattern::pattern_analysis_section;
pub use variety::{Variety, character_variety_section};

use crate::denylist::Denylist;

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;

pub type Section = fn(&str, &Denylist) -> SectionResult;

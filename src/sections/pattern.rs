//! Pattern analysis section - detects repetitive and sequential patterns.
//!
//! Advisory only: a hit adds a reason but does not affect the score.

use super::SectionResult;
use crate::denylist::Denylist;

const REPEAT_RUN: usize = 3;
const SEQUENCE_RUN: usize = 4;

/// Analyzes password for repetitive and sequential patterns.
///
/// # Returns
/// - `Some(reason)` if problematic patterns found
/// - `None` if no problematic patterns
pub fn pattern_analysis_section(password: &str, _denylist: &Denylist) -> SectionResult {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() < REPEAT_RUN {
        return None;
    }

    // Check repeated chars (e.g., "aaa")
    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count >= REPEAT_RUN {
                return Some("Password contains repetitive patterns".to_string());
            }
        } else {
            repeated_count = 1;
        }
    }

    // Strictly ascending or descending code points (e.g., "abcd", "9876")
    let is_sequential = chars.windows(SEQUENCE_RUN).any(|window| {
        let steps: Vec<i64> = window
            .windows(2)
            .map(|w| w[1] as i64 - w[0] as i64)
            .collect();
        steps.iter().all(|&s| s == 1) || steps.iter().all(|&s| s == -1)
    });

    if is_sequential {
        return Some("Password contains sequential patterns".to_string());
    }

    None
}

//! Strength result types.

use std::fmt;

/// Qualitative strength bucket derived from the 0-10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    /// The password was empty; nothing was evaluated.
    Empty,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Maps a final score to its label: 0-3 weak, 4-6 fair, 7-8 good, 9-10 strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => StrengthLabel::Weak,
            4..=6 => StrengthLabel::Fair,
            7..=8 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Empty => "Empty",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-criterion pass/fail breakdown, suitable for a UI checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Criteria {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special_char: bool,
    pub no_common_patterns: bool,
}

impl Criteria {
    /// All six criteria as `(name, passed)` pairs, in display order.
    pub fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("min_length", self.min_length),
            ("has_uppercase", self.has_uppercase),
            ("has_lowercase", self.has_lowercase),
            ("has_number", self.has_number),
            ("has_special_char", self.has_special_char),
            ("no_common_patterns", self.no_common_patterns),
        ]
    }

    pub fn passed_count(&self) -> usize {
        self.entries().iter().filter(|(_, passed)| *passed).count()
    }
}

/// Outcome of a single evaluation.
///
/// `reasons` holds advisory messages for failed checks. They never feed back
/// into `score`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
    pub criteria: Criteria,
    pub reasons: Vec<String>,
}

impl StrengthResult {
    pub(crate) fn empty() -> Self {
        Self {
            score: 0,
            label: StrengthLabel::Empty,
            criteria: Criteria::default(),
            reasons: vec!["Password is empty".to_string()],
        }
    }

    /// Width of a strength bar in percent.
    pub fn percent(&self) -> u8 {
        self.score * 10
    }
}

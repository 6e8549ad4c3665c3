//! Password strength evaluator - main evaluation logic.
//!
//! Points accumulate in steps of two: one step per length tier reached, one
//! per character class present, and one for staying clear of the denylist.
//! The raw total (at most 18) is halved into the 0-10 score.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::denylist::Denylist;
use crate::sections::{
    MIN_LENGTH, Section, Variety, char_count, character_variety_section, denylist_section,
    length_section, pattern_analysis_section,
};
use crate::types::{Criteria, StrengthLabel, StrengthResult};

const POINTS_PER_STEP: u8 = 2;
const LENGTH_TIERS: [usize; 4] = [8, 10, 12, 14];
const MAX_SCORE: u8 = 10;

/// Delay before a keystroke-triggered evaluation runs.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates password strength against the built-in denylist.
///
/// Total over all inputs. The score is a heuristic, not a security
/// guarantee.
pub fn evaluate(password: &str) -> StrengthResult {
    evaluate_with(password, Denylist::builtin())
}

/// Same as [`evaluate`] for a password held in a [`SecretString`].
pub fn evaluate_secret(password: &SecretString) -> StrengthResult {
    evaluate(password.expose_secret())
}

/// Evaluates password strength against a caller-supplied denylist.
pub fn evaluate_with(password: &str, denylist: &Denylist) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::empty();
    }

    // Orchestrator: execute sections in sequence
    let sections: [Section; 4] = [
        denylist_section,
        length_section,
        character_variety_section,
        pattern_analysis_section,
    ];
    let reasons: Vec<String> = sections
        .iter()
        .filter_map(|section_fn| section_fn(password, denylist))
        .collect();

    let len = char_count(password);
    let variety = Variety::of(password);
    let criteria = Criteria {
        min_length: len >= MIN_LENGTH,
        has_uppercase: variety.has_uppercase,
        has_lowercase: variety.has_lowercase,
        has_number: variety.has_number,
        has_special_char: variety.has_special,
        no_common_patterns: !denylist.is_denied(password),
    };

    let tiers = LENGTH_TIERS.iter().filter(|&&tier| len >= tier).count();
    let mut steps = tiers + variety.count();
    if criteria.no_common_patterns {
        steps += 1;
    }
    let raw = steps as u8 * POINTS_PER_STEP;
    let score = (raw / 2).min(MAX_SCORE);

    StrengthResult {
        score,
        label: StrengthLabel::from_score(score),
        criteria,
        reasons,
    }
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`], then evaluates. Returns without sending as
/// soon as `token` is cancelled during the wait.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded before it started");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let result = evaluate_secret(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

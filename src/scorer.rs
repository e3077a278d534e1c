//! Password strength scorer - main scoring logic.

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, digit_section, extended_length_section, length_section, symbol_section,
};
use crate::types::{StrengthEvaluation, StrengthInput, StrengthScore};

/// Scores password strength and returns a detailed evaluation.
///
/// One point per satisfied criterion; the label mapping lives on
/// [`StrengthEvaluation::strength`].
///
/// # Arguments
/// * `input` - The password length and inclusion flags to score
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `StrengthEvaluation` containing score and reasons.
pub fn score_password_strength(
    input: &StrengthInput,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> StrengthEvaluation {
    let mut reasons = Vec::new();
    let mut is_cancelled = false;
    let mut points: usize = 0;
    let mut score: Option<usize> = None;

    // Orchestrator: execute sections in sequence
    let sections: Vec<(&str, fn(&StrengthInput) -> SectionResult)> = vec![
        ("length", length_section),
        ("digits", digit_section),
        ("symbols", symbol_section),
        ("extended_length", extended_length_section),
    ];

    for (section_name, section_fn) in sections {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    reasons.push("Scoring cancelled".to_string());
                    is_cancelled = true;
                    break;
                }
            }
        }

        match section_fn(input) {
            Ok(None) => {
                // Criterion met, one point
                points += 1;
            }
            Ok(Some(reason)) => {
                reasons.push(reason);
            }
            Err(()) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Fatal error in strength scoring section: {}", section_name);
                reasons.push("Error".to_string());
                break;
            }
        }
    }

    if !is_cancelled {
        let score_ref = score.get_or_insert(0);
        *score_ref += points;
    }

    StrengthEvaluation {
        score: score.map(StrengthScore::new),
        reasons,
    }
}

/// Async version that sends the evaluation via channel after a short
/// debounce delay.
#[cfg(feature = "async")]
pub async fn score_password_strength_tx(
    input: &StrengthInput,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthEvaluation>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("scoring is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let evaluation = score_password_strength(input, Some(token));

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength scoring result: {}", e);
    }
}

//! Context-aware question answering.
//!
//! Prompt construction and prompt dispatch are separate steps: [`build_prompt`]
//! decides what to send, [`answer`] sends it and never fails.

use crate::ai::{context_prompt, mentions_diet, TextGenerator};
use crate::constants::FALLBACK_ANSWER;
use crate::errors::StorageError;
use crate::readings::ReadingStore;
use crate::trend::latest_and_trend;
use tracing::{debug, info, warn};

/// Builds the prompt for `question`.
///
/// When the question mentions "diet" (any case) and at least one reading
/// exists, the latest level and trend are prepended. Otherwise the question
/// is returned verbatim.
///
/// # Errors
///
/// Propagates any `StorageError` from reading the log.
pub fn build_prompt(store: &ReadingStore, question: &str) -> Result<String, StorageError> {
    let latest = latest_and_trend(store)?;

    match latest {
        Some(latest) if mentions_diet(question) => {
            debug!(
                mg_dl = latest.level,
                trend = %latest.trend,
                "Injecting reading context into prompt"
            );
            Ok(context_prompt(latest.level, latest.trend, question))
        }
        _ => Ok(question.to_string()),
    }
}

/// Answers `question`, always producing some text for the user.
///
/// # Flow
///
/// 1. Build the prompt with [`build_prompt`]
/// 2. Send it to `generator`
/// 3. Return the completion
///
/// Any failure is logged and replaced by a fixed apology. If the reading log
/// cannot be read, nothing is sent to `generator`.
pub fn answer<G: TextGenerator>(store: &ReadingStore, generator: &G, question: &str) -> String {
    info!("Answering question");

    let prompt = match build_prompt(store, question) {
        Ok(prompt) => prompt,
        Err(e) => {
            warn!(error = %e, "Could not read reading log, returning fallback answer");
            return FALLBACK_ANSWER.to_string();
        }
    };

    match generator.generate(&prompt) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Generation failed, returning fallback answer");
            FALLBACK_ANSWER.to_string()
        }
    }
}

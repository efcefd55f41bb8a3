//! Prompt construction for context-aware questions.
//!
//! Questions about diet get the latest reading and trend prepended so the
//! model can tailor its answer. Everything else is sent as typed.

use crate::constants::DIET_KEYWORD;
use crate::trend::Trend;

/// Returns true when the question should carry glucose context.
///
/// This is a plain case-insensitive substring test for "diet", so
/// "Dietary", "DIET" and "diets" all match.
///
/// # Examples
///
/// ```
/// use sugarlog::ai::mentions_diet;
///
/// assert!(mentions_diet("What should I eat for a low-carb DIET?"));
/// assert!(!mentions_diet("How often should I check my levels?"));
/// ```
pub fn mentions_diet(question: &str) -> bool {
    question.to_lowercase().contains(DIET_KEYWORD)
}

/// Prefixes `question` with the latest level and trend.
///
/// # Examples
///
/// ```
/// use sugarlog::ai::context_prompt;
/// use sugarlog::trend::Trend;
///
/// assert_eq!(
///     context_prompt(140, Trend::Rising, "Is oatmeal ok?"),
///     "My latest blood sugar reading is 140 mg/dL and the trend is rising. Based on this, Is oatmeal ok?"
/// );
/// ```
pub fn context_prompt(level: u16, trend: Trend, question: &str) -> String {
    format!(
        "My latest blood sugar reading is {} mg/dL and the trend is {}. Based on this, {}",
        level, trend, question
    )
}

//! Text generation for the diabetes assistant.
//!
//! The assistant only needs one capability from a language model: turn a
//! prompt into a completion. That capability is the [`TextGenerator`] trait,
//! so the prompt logic can be tested without a network.
//!
//! # Module Structure
//!
//! - `gemini`: HTTP client for the Gemini `generateContent` API
//! - `prompts`: Context-injection rule and prompt text
//!
//! # Example
//!
//! ```no_run
//! use sugarlog::ai::{GeminiClient, TextGenerator};
//! use std::time::Duration;
//!
//! let client = GeminiClient::new(
//!     "https://generativelanguage.googleapis.com/v1beta",
//!     "gemini-2.0-flash",
//!     "my-api-key",
//!     Duration::from_secs(30),
//! )?;
//! let reply = client.generate("What is a normal fasting glucose level?")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod gemini;
pub mod prompts;

use crate::errors::GenerationError;

// Re-export commonly used types
pub use gemini::GeminiClient;
pub use prompts::{context_prompt, mentions_diet};

/// Turns a single prompt into a single completion.
pub trait TextGenerator {
    /// Generates a completion for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` for transport failures, non-success
    /// responses, or responses without completion text.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

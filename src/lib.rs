/*!
# Sugarlog

Sugarlog keeps a personal log of blood sugar readings and answers questions
through a language model. Questions about diet automatically carry the latest
reading and its short-term trend so the answer can take them into account.

## Core Features

- Record readings in mg/dL (validated against 40-500)
- Classify the recent trend as rising, falling, or stable
- Ask questions, with reading context injected into diet questions
- Print the full history with a terminal chart
- Show static health tips

## Architecture

- `readings`: Reading model and the append-only JSON store
- `trend`: Trend classification over the stored readings
- `ai`: Text generation seam, Gemini client, and prompt building
- `ops`: User-facing operations combining the pieces above
- `cli`, `config`, `logging`, `errors`: Application plumbing

## Usage Example

```rust,no_run
use sugarlog::readings::ReadingStore;
use sugarlog::trend::latest_and_trend;

fn main() -> sugarlog::AppResult<()> {
    let store = ReadingStore::new("/home/me/.sugarlog/blood_sugar_log.json");
    store.append(120)?;

    if let Some(latest) = latest_and_trend(&store)? {
        println!("{} mg/dL, {}", latest.level, latest.trend);
    }
    Ok(())
}
```
*/

/// Text generation client and prompt building
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Tracing subscriber setup
pub mod logging;
/// User-facing operations
pub mod ops;
/// Reading model and persistence
pub mod readings;
/// Trend classification
pub mod trend;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use readings::{Reading, ReadingStore};
pub use trend::{LatestReading, Trend};

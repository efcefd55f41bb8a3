//! Constants used throughout the application.
//!
//! This module contains all constants used in the sugarlog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "sugarlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A blood sugar log with a trend-aware diabetes assistant";

// CLI Arguments & Defaults
/// Default log level. Absorbed failures are logged at `warn`.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is given.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for the location of the reading log document.
pub const ENV_VAR_SUGARLOG_FILE: &str = "SUGARLOG_FILE";
/// Environment variable holding the Gemini API key.
pub const ENV_VAR_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// Environment variable selecting the generation model.
pub const ENV_VAR_SUGARLOG_MODEL: &str = "SUGARLOG_MODEL";
/// Environment variable overriding the generation API base URL.
pub const ENV_VAR_SUGARLOG_API_URL: &str = "SUGARLOG_API_URL";
/// Environment variable for the HTTP timeout in seconds.
pub const ENV_VAR_SUGARLOG_TIMEOUT_SECS: &str = "SUGARLOG_TIMEOUT_SECS";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default location of the reading log relative to the user's home directory.
pub const DEFAULT_LOG_SUBPATH: &str = ".sugarlog/blood_sugar_log.json";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Generation Service
/// Default Gemini model used for answers.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// Default base URL of the Gemini REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default HTTP timeout for generation requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Reply shown to the user whenever the generation service fails.
pub const FALLBACK_ANSWER: &str = "⚠️ Sorry, I couldn't process your request.";
/// Keyword that triggers context injection (matched case-insensitively).
pub const DIET_KEYWORD: &str = "diet";

// Validation
/// Lowest accepted glucose reading in mg/dL.
pub const MIN_LEVEL: i64 = 40;
/// Highest accepted glucose reading in mg/dL.
pub const MAX_LEVEL: i64 = 500;

// File System Parameters
/// Timestamp layout in the reading log: ISO-8601 with microseconds.
pub const STORED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for the reading log (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Presentation
/// Format for timestamps in the history table.
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Width in characters of the longest bar in the history chart.
pub const CHART_WIDTH: usize = 40;
/// Message shown when no readings have been logged.
pub const NO_DATA_MESSAGE: &str = "No blood sugar data available yet.";

/// Static health tips shown by the `tips` command.
pub const HEALTH_TIPS: &str = r#"Health Tips for Managing Diabetes

Lifestyle & Dietary Tips:
  - Eat balanced meals with low glycemic index foods
  - Exercise regularly (30 mins/day)
  - Stay hydrated and avoid sugary drinks
  - Get enough sleep (7-8 hrs)
  - Manage stress with mindfulness or yoga

Monitoring Tips:
  - Monitor your blood sugar consistently
  - Take medications as prescribed
  - Schedule regular checkups with your doctor
  - Keep a log of readings, symptoms, and meals

Always consult with your healthcare provider before making changes."#;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "sugarlog";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

use crate::constants::{APP_DESCRIPTION, APP_NAME};
use clap::{Parser, Subcommand, ValueEnum};

/// A blood sugar log with a trend-aware diabetes assistant
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Path to the reading log (overrides SUGARLOG_FILE)
    #[arg(short = 'f', long, global = true)]
    pub file: Option<String>,

    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Format of diagnostic logs written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// User actions.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Ask the assistant a question (diet questions include your latest reading)
    Ask {
        /// The question, as one or more words
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Record a blood sugar reading in mg/dL (40-500)
    Log {
        /// Blood sugar level in mg/dL
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },

    /// Show every reading, oldest first, with a chart
    History {
        /// Print the raw log as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Show the latest reading and its trend
    Trend,

    /// Show health tips for managing diabetes
    Tips,
}

/// Diagnostic log output format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[value(name = "text")]
    Text,
    /// One JSON object per line
    #[value(name = "json")]
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_command() {
        let args = CliArgs::parse_from(["sugarlog", "log", "120"]);
        assert_eq!(args.command, Command::Log { level: 120 });
        assert!(!args.verbose);
        assert_eq!(args.log_format, LogFormat::Text);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_log_accepts_negative_numbers_for_validation() {
        let args = CliArgs::parse_from(["sugarlog", "log", "-5"]);
        assert_eq!(args.command, Command::Log { level: -5 });
    }

    #[test]
    fn test_log_rejects_non_integer() {
        assert!(CliArgs::try_parse_from(["sugarlog", "log", "12.5"]).is_err());
        assert!(CliArgs::try_parse_from(["sugarlog", "log", "high"]).is_err());
    }

    #[test]
    fn test_ask_collects_words() {
        let args = CliArgs::parse_from(["sugarlog", "ask", "best", "diet", "for", "me?"]);
        match args.command {
            Command::Ask { question } => assert_eq!(question.join(" "), "best diet for me?"),
            other => panic!("Expected Ask, got {:?}", other),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(CliArgs::try_parse_from(["sugarlog", "ask"]).is_err());
    }

    #[test]
    fn test_history_json_flag() {
        let args = CliArgs::parse_from(["sugarlog", "history", "--json"]);
        assert_eq!(args.command, Command::History { json: true });
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from([
            "sugarlog",
            "trend",
            "--verbose",
            "--log-format",
            "json",
            "--file",
            "/tmp/log.json",
        ]);
        assert_eq!(args.command, Command::Trend);
        assert!(args.verbose);
        assert_eq!(args.log_format, LogFormat::Json);
        assert_eq!(args.file.as_deref(), Some("/tmp/log.json"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(CliArgs::try_parse_from(["sugarlog"]).is_err());
    }
}

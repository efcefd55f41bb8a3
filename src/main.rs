/*!
# Sugarlog - Blood Sugar Log and Diabetes Assistant

Sugarlog records blood sugar readings in a local JSON document and answers
questions through the Gemini API, adding the latest reading and trend to
questions about diet.

## Usage

```
sugarlog [OPTIONS] <COMMAND>

Commands:
  ask      Ask the assistant a question (diet questions include your latest reading)
  log      Record a blood sugar reading in mg/dL (40-500)
  history  Show every reading, oldest first, with a chart
  trend    Show the latest reading and its trend
  tips     Show health tips for managing diabetes

Options:
  -f, --file <FILE>              Path to the reading log (overrides SUGARLOG_FILE)
  -v, --verbose                  Print verbose output
      --log-format <LOG_FORMAT>  Format of diagnostic logs written to stderr [text, json]
```

## Configuration

- `SUGARLOG_FILE`: Location of the reading log (defaults to ~/.sugarlog/blood_sugar_log.json)
- `GEMINI_API_KEY`: Required by `ask`
- `SUGARLOG_MODEL`, `SUGARLOG_API_URL`, `SUGARLOG_TIMEOUT_SECS`: Generation service settings
*/

use clap::Parser;
use std::process::ExitCode;
use sugarlog::ai::GeminiClient;
use sugarlog::cli::{CliArgs, Command};
use sugarlog::config::Config;
use sugarlog::constants::{
    HEALTH_TIPS, HISTORY_TIMESTAMP_FORMAT, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use sugarlog::errors::AppResult;
use sugarlog::ops;
use sugarlog::readings::ReadingStore;
use sugarlog::trend::latest_and_trend;
use tracing::{debug, error, info_span};
use uuid::Uuid;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = sugarlog::logging::init(args.log_format, args.verbose) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let correlation_id = Uuid::new_v4();
    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = span.enter();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Executes one command.
///
/// Configuration is loaded only for commands that touch the log or the
/// generation service.
fn run(args: CliArgs) -> AppResult<()> {
    debug!("CLI arguments: {:?}", args);

    if args.command == Command::Tips {
        println!("{}", HEALTH_TIPS);
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(file) = args.file.as_deref() {
        config = config.with_log_file(file)?;
    }
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let store = ReadingStore::new(&config.log_file);

    match args.command {
        Command::Ask { question } => {
            let question = question.join(" ");
            let client = GeminiClient::new(
                &config.api_base_url,
                &config.model,
                config.require_api_key()?,
                config.timeout,
            )?;
            println!("{}", ops::answer(&store, &client, &question));
        }
        Command::Log { level } => {
            let reading = ops::log_reading(&store, level)?;
            println!(
                "Saved reading of {} mg/dL at {}",
                reading.level,
                reading.timestamp.format(HISTORY_TIMESTAMP_FORMAT)
            );
        }
        Command::History { json } => {
            let readings = store.load()?;
            if json {
                println!("{}", ops::history_json(&readings)?);
            } else {
                println!("{}", ops::render_history(&readings));
            }
        }
        Command::Trend => {
            println!("{}", ops::render_latest(latest_and_trend(&store)?));
        }
        Command::Tips => println!("{}", HEALTH_TIPS),
    }

    Ok(())
}

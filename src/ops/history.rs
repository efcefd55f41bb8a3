//! Text rendering of the reading log for the terminal.

use crate::constants::{CHART_WIDTH, HISTORY_TIMESTAMP_FORMAT, NO_DATA_MESSAGE};
use crate::errors::AppResult;
use crate::readings::Reading;
use crate::trend::{summarize, LatestReading};
use std::fmt::Write;

/// Renders every reading as a table row with a bar scaled to the largest level.
///
/// ```text
/// 2024-05-01 08:30:00   120 mg/dL  ##########################
/// 2024-05-01 12:10:00   180 mg/dL  ########################################
/// ```
pub fn render_history(readings: &[Reading]) -> String {
    let Some(max) = readings.iter().map(|r| r.level).max() else {
        return NO_DATA_MESSAGE.to_string();
    };

    let mut out = String::new();
    for reading in readings {
        let _ = writeln!(
            out,
            "{}  {:>4} mg/dL  {}",
            reading.timestamp.format(HISTORY_TIMESTAMP_FORMAT),
            reading.level,
            "#".repeat(bar_width(reading.level, max))
        );
    }

    if let Some(latest) = summarize(readings) {
        let _ = write!(
            out,
            "{} readings, {}",
            readings.len(),
            render_latest(Some(latest))
        );
    }
    out
}

/// Renders the latest reading and its trend, or the empty-log message.
pub fn render_latest(latest: Option<LatestReading>) -> String {
    match latest {
        Some(latest) => format!(
            "Latest reading: {} mg/dL (trend: {})",
            latest.level, latest.trend
        ),
        None => NO_DATA_MESSAGE.to_string(),
    }
}

/// Serializes the log as pretty JSON, in the same shape as the stored document.
pub fn history_json(readings: &[Reading]) -> AppResult<String> {
    serde_json::to_string_pretty(readings).map_err(|e| std::io::Error::from(e).into())
}

fn bar_width(level: u16, max: u16) -> usize {
    let width = usize::from(level) * CHART_WIDTH / usize::from(max.max(1));
    width.max(1)
}

//! Short-term trend classification over the reading log.
//!
//! The classifier looks only at the last three readings and requires two
//! consecutive strict steps in the same direction. Any plateau or change of
//! direction is `Stable`, as is a log with fewer than three readings. Noisy
//! series that drift over a longer window are therefore often reported as
//! `Stable`.

use crate::errors::StorageError;
use crate::readings::{Reading, ReadingStore};
use serde::Serialize;
use std::fmt;

/// Direction of the most recent readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Two consecutive strict increases.
    Rising,
    /// Two consecutive strict decreases.
    Falling,
    /// Anything else.
    Stable,
}

impl Trend {
    /// Lowercase label used in prompts and output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The most recent level together with its trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LatestReading {
    /// Level of the newest reading in mg/dL.
    pub level: u16,
    /// Trend over the last three readings.
    pub trend: Trend,
}

/// Classifies a series of levels, oldest first.
///
/// # Examples
///
/// ```
/// use sugarlog::trend::{classify, Trend};
///
/// assert_eq!(classify(&[100, 110, 120]), Trend::Rising);
/// assert_eq!(classify(&[150, 130, 110]), Trend::Falling);
/// assert_eq!(classify(&[100, 130, 110]), Trend::Stable);
/// assert_eq!(classify(&[90, 95]), Trend::Stable);
/// ```
pub fn classify(levels: &[u16]) -> Trend {
    match levels {
        [.., a, b, c] if c > b && b > a => Trend::Rising,
        [.., a, b, c] if c < b && b < a => Trend::Falling,
        _ => Trend::Stable,
    }
}

/// Summarizes an in-memory log. Returns `None` for an empty log.
pub fn summarize(readings: &[Reading]) -> Option<LatestReading> {
    let latest = readings.last()?;
    let levels: Vec<u16> = readings.iter().map(|r| r.level).collect();
    Some(LatestReading {
        level: latest.level,
        trend: classify(&levels),
    })
}

/// Reads the current log and returns its newest level and trend.
///
/// Returns `Ok(None)` when nothing has been logged yet. Nothing is cached;
/// each call sees every append that finished before it.
///
/// # Errors
///
/// Propagates any `StorageError` from loading the log.
pub fn latest_and_trend(store: &ReadingStore) -> Result<Option<LatestReading>, StorageError> {
    let readings = store.load()?;
    Ok(summarize(&readings))
}

//! Short per-competitor summary text.

use pulse_core::{Mention, NarrativeTable};

use crate::metrics::tally;

pub const NO_DATA_MESSAGE: &str = "No data available for this competitor.";
pub const INSUFFICIENT_DATA_MESSAGE: &str = "Insufficient data to generate summary.";

/// Summarize one competitor's filtered mentions.
///
/// Returns [`NO_DATA_MESSAGE`] for an empty set and
/// [`INSUFFICIENT_DATA_MESSAGE`] when no record has a usable timestamp.
/// Otherwise a hand-written narrative from `narratives` wins if one exists
/// for `competitor`; failing that, a generated TLDR lists the date range
/// and label counts.
#[must_use]
pub fn summarize(records: &[&Mention], competitor: &str, narratives: &NarrativeTable) -> String {
    if records.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    // Missing timestamps are skipped, so the range only collapses when all are missing.
    let timestamps = records.iter().filter_map(|m| m.timestamp);
    let (Some(start), Some(end)) = (timestamps.clone().min(), timestamps.max()) else {
        tracing::debug!(competitor, "no parseable timestamps; skipping summary");
        return INSUFFICIENT_DATA_MESSAGE.to_string();
    };

    if let Some(text) = narratives.get(competitor) {
        return text.to_string();
    }

    let counts = tally(records);
    format!(
        "TLDR for week {} to {}:\n\
         Total mentions: {}\n\
         Positive mentions: {}\n\
         Negative mentions: {}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
        counts.total,
        counts.wow,
        counts.pain,
    )
}

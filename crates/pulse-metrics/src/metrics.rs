//! Aggregate counts, dominant sentiment, and most frequent platforms.

use std::collections::HashMap;

use pulse_core::{Label, Mention};

use crate::error::MetricsError;
use crate::types::{CompetitorMetrics, MentionTally};

/// Count mentions by label.
///
/// Total over any input; labels other than `wow` and `pain` only add to
/// `total`.
#[must_use]
pub fn tally(records: &[&Mention]) -> MentionTally {
    records.iter().fold(MentionTally::default(), |mut acc, m| {
        acc.total += 1;
        match m.label {
            Label::Wow => acc.wow += 1,
            Label::Pain => acc.pain += 1,
            Label::Other(_) => {}
        }
        acc
    })
}

/// Most frequent `platform` among mentions carrying `label`.
///
/// Ties go to the platform whose first matching mention comes earliest in
/// `records`.
///
/// # Errors
///
/// Returns [`MetricsError::EmptyCategory`] if no mention carries `label`.
pub fn top_platform<'a>(
    records: &[&'a Mention],
    label: &Label,
) -> Result<&'a str, MetricsError> {
    // (platform, count) in first-seen order.
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for m in records.iter().filter(|m| &m.label == label) {
        let platform = m.platform.as_str();
        match index.get(platform).copied() {
            Some(i) => counts[i].1 += 1,
            None => {
                index.insert(platform, counts.len());
                counts.push((platform, 1));
            }
        }
    }

    let mut best: Option<(&'a str, usize)> = None;
    for &(platform, count) in &counts {
        // Strict comparison keeps the earliest platform on ties.
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((platform, count));
        }
    }

    best.map(|(platform, _)| platform)
        .ok_or_else(|| MetricsError::EmptyCategory {
            label: label.clone(),
        })
}

/// Compute the full metric set for one competitor's filtered mentions.
///
/// Expects every record to be labelled `wow` or `pain`; records are not
/// re-filtered.
///
/// # Errors
///
/// Returns [`MetricsError::EmptyCategory`] when there are no `wow` or no
/// `pain` mentions, since the most frequent platform of an empty category
/// is undefined. Use [`tally`] and [`top_platform`] directly to render the
/// parts that are defined.
pub fn compute_metrics(records: &[&Mention]) -> Result<CompetitorMetrics, MetricsError> {
    let counts = tally(records);
    let top_positive_platform = top_platform(records, &Label::Wow)?.to_string();
    let top_negative_platform = top_platform(records, &Label::Pain)?.to_string();

    Ok(CompetitorMetrics {
        total_mentions: counts.total,
        wow_count: counts.wow,
        pain_count: counts.pain,
        sentiment: counts.sentiment(),
        top_positive_platform,
        top_negative_platform,
    })
}

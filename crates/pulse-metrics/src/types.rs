use serde::Serialize;

/// Dominant sentiment of a competitor's mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// `Positive` only when wow strictly outnumbers pain. Ties, including
    /// zero/zero, are `Negative`.
    #[must_use]
    pub fn from_counts(wow: usize, pain: usize) -> Self {
        if wow > pain {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

/// Label counts for one competitor's filtered mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MentionTally {
    pub total: usize,
    pub wow: usize,
    pub pain: usize,
}

impl MentionTally {
    #[must_use]
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_counts(self.wow, self.pain)
    }
}

/// Aggregate metrics for one competitor.
///
/// Derived on every call from the filtered record set; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitorMetrics {
    pub total_mentions: usize,
    pub wow_count: usize,
    pub pain_count: usize,
    pub sentiment: Sentiment,
    /// Most frequent platform among `wow` mentions.
    pub top_positive_platform: String,
    /// Most frequent platform among `pain` mentions.
    pub top_negative_platform: String,
}

//! Metrics and summaries over one competitor's filtered mentions.
//!
//! Every function here is pure: the same records always give the same
//! result, and nothing is cached between calls. Callers are expected to have
//! restricted the records to `wow` and `pain` labels already.

pub mod error;
pub mod metrics;
pub mod summary;
pub mod types;

pub use error::MetricsError;
pub use metrics::{compute_metrics, tally, top_platform};
pub use summary::{summarize, INSUFFICIENT_DATA_MESSAGE, NO_DATA_MESSAGE};
pub use types::{CompetitorMetrics, MentionTally, Sentiment};

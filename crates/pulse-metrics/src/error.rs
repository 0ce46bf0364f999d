use pulse_core::Label;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    /// A most-frequent-platform query ran over zero mentions with this label.
    #[error("no '{label}' mentions to take a most frequent platform from")]
    EmptyCategory { label: Label },
}

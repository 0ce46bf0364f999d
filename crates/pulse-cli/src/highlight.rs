//! Tone markers for mention rows and the headline metrics.

use pulse_core::Label;
use pulse_metrics::Sentiment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowHighlight {
    Positive,
    Negative,
    None,
}

impl RowHighlight {
    pub(crate) fn for_label(label: &Label) -> Self {
        match label {
            Label::Wow => RowHighlight::Positive,
            Label::Pain => RowHighlight::Negative,
            Label::Other(_) => RowHighlight::None,
        }
    }

    /// Tone of the sentiment and wow/pain cells.
    pub(crate) fn for_sentiment(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => RowHighlight::Positive,
            Sentiment::Negative => RowHighlight::Negative,
        }
    }

    /// Single-character gutter marker for plain text output.
    pub(crate) fn marker(self) -> char {
        match self {
            RowHighlight::Positive => '+',
            RowHighlight::Negative => '-',
            RowHighlight::None => ' ',
        }
    }

    /// Leading cell for markdown tables.
    pub(crate) fn badge(self) -> &'static str {
        match self {
            RowHighlight::Positive => "🟢",
            RowHighlight::Negative => "🔴",
            RowHighlight::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wow_is_positive() {
        assert_eq!(RowHighlight::for_label(&Label::Wow), RowHighlight::Positive);
        assert_eq!(RowHighlight::Positive.marker(), '+');
    }

    #[test]
    fn pain_is_negative() {
        assert_eq!(RowHighlight::for_label(&Label::Pain), RowHighlight::Negative);
        assert_eq!(RowHighlight::Negative.marker(), '-');
    }

    #[test]
    fn sentiment_tone_follows_polarity() {
        assert_eq!(
            RowHighlight::for_sentiment(Sentiment::Positive),
            RowHighlight::Positive
        );
        assert_eq!(
            RowHighlight::for_sentiment(Sentiment::Negative).badge(),
            "🔴"
        );
    }

    #[test]
    fn other_labels_are_not_highlighted() {
        let h = RowHighlight::for_label(&Label::Other("question".to_string()));
        assert_eq!(h, RowHighlight::None);
        assert_eq!(h.marker(), ' ');
        assert_eq!(h.badge(), "");
    }
}

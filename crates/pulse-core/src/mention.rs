use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentiment tag attached to a mention.
///
/// Only [`Label::Wow`] and [`Label::Pain`] take part in metrics. Every other
/// raw value is kept verbatim in [`Label::Other`] so it can still be shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Label {
    Wow,
    Pain,
    Other(String),
}

impl Label {
    /// Labels that carry a sentiment polarity.
    pub const SENTIMENT: [Label; 2] = [Label::Wow, Label::Pain];

    /// Parse a raw label cell. Matching is exact, whitespace included; any
    /// other value, empty cells too, is kept verbatim in `Other`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "wow" => Label::Wow,
            "pain" => Label::Pain,
            other => Label::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Label::Wow => "wow",
            Label::Pain => "pain",
            Label::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<String> for Label {
    fn from(raw: String) -> Self {
        Label::parse(&raw)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.as_str().to_string()
    }
}

/// One observed post about a competitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// When the mention was posted. `None` when the source value could not be parsed.
    pub timestamp: Option<NaiveDateTime>,
    /// Competitor identifier, e.g. `"cursor_ai"`. Partition key for all metrics.
    pub competitor: String,
    /// Channel the mention was observed on, e.g. `"reddit"` or `"twitter"`.
    pub platform: String,
    pub user: String,
    pub content: String,
    /// URL of the original post.
    pub link: String,
    pub label: Label,
}

impl Mention {
    /// Returns `true` for mentions labelled `wow` or `pain`.
    #[must_use]
    pub fn has_sentiment(&self) -> bool {
        matches!(self.label, Label::Wow | Label::Pain)
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp cell into a naive UTC date-time.
///
/// Tries RFC 3339 first (offsets are normalized to UTC), then the plain
/// date-time layouts (space or `T` separated, optional fractional seconds,
/// optional seconds), then a bare `YYYY-MM-DD` which maps to midnight.
/// Returns `None` for empty or unrecognized input.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};

    use super::*;

    #[test]
    fn label_parse_known_values() {
        assert_eq!(Label::parse("wow"), Label::Wow);
        assert_eq!(Label::parse("pain"), Label::Pain);
    }

    #[test]
    fn label_parse_keeps_surrounding_whitespace_verbatim() {
        assert_eq!(Label::parse(" pain "), Label::Other(" pain ".to_string()));
        assert_eq!(Label::parse("neutral "), Label::Other("neutral ".to_string()));
        assert_eq!(Label::parse(" wow").as_str(), " wow");
    }

    #[test]
    fn label_parse_is_case_sensitive() {
        assert_eq!(Label::parse("WOW"), Label::Other("WOW".to_string()));
    }

    #[test]
    fn label_parse_empty_is_other() {
        let label = Label::parse("");
        assert_eq!(label, Label::Other(String::new()));
        assert_eq!(label.as_str(), "");
    }

    #[test]
    fn label_serializes_as_plain_string() {
        let json = serde_json::to_string(&Label::Wow).unwrap();
        assert_eq!(json, "\"wow\"");
        let back: Label = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(back, Label::Other("neutral".to_string()));
    }

    #[test]
    fn sentiment_labels_are_wow_and_pain() {
        assert!(Label::SENTIMENT.contains(&Label::Wow));
        assert!(Label::SENTIMENT.contains(&Label::Pain));
        assert!(!Label::SENTIMENT.contains(&Label::Other("meh".to_string())));
    }

    #[test]
    fn parse_timestamp_space_separated() {
        let ts = parse_timestamp("2024-10-28 22:34:20").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 10, 28).unwrap());
        assert_eq!(ts.hour(), 22);
        assert_eq!(ts.second(), 20);
    }

    #[test]
    fn parse_timestamp_fractional_seconds() {
        let ts = parse_timestamp("2024-10-28T22:34:20.123456").unwrap();
        assert_eq!(ts.minute(), 34);
    }

    #[test]
    fn parse_timestamp_rfc3339_normalizes_to_utc() {
        let ts = parse_timestamp("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn parse_timestamp_date_only_is_midnight() {
        let ts = parse_timestamp("2024-01-08").unwrap();
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-45").is_none());
    }

    #[test]
    fn has_sentiment_only_for_wow_and_pain() {
        let mut mention = Mention {
            timestamp: None,
            competitor: "cursor_ai".to_string(),
            platform: "reddit".to_string(),
            user: "u".to_string(),
            content: "c".to_string(),
            link: "https://example.com".to_string(),
            label: Label::Wow,
        };
        assert!(mention.has_sentiment());
        mention.label = Label::Other("question".to_string());
        assert!(!mention.has_sentiment());
    }
}

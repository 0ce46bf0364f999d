//! In-memory, read-only store of mention records.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::mention::{parse_timestamp, Label, Mention};
use crate::DataSourceError;

/// Columns every mentions file must carry. Order in the file is irrelevant
/// and extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "timestamp",
    "competitor",
    "platform",
    "user",
    "content",
    "link",
    "label",
];

/// One CSV row before normalization; every cell is still a raw string.
#[derive(Debug, Deserialize)]
struct RawMention {
    timestamp: String,
    competitor: String,
    platform: String,
    user: String,
    content: String,
    link: String,
    label: String,
}

impl RawMention {
    fn into_mention(self, row: usize) -> Mention {
        let timestamp = parse_timestamp(&self.timestamp);
        if timestamp.is_none() {
            tracing::debug!(
                row,
                raw = %self.timestamp,
                "unparseable timestamp; keeping row with missing timestamp"
            );
        }

        Mention {
            timestamp,
            competitor: self.competitor,
            platform: self.platform,
            user: self.user,
            content: self.content,
            link: self.link,
            label: Label::parse(&self.label),
        }
    }
}

/// Immutable snapshot of every mention in the source file.
///
/// Built once at startup and shared by reference; nothing mutates it after
/// loading.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Mention>,
}

impl RecordStore {
    /// Load and normalize a mentions CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::Io`] if the file cannot be opened, and the
    /// errors of [`RecordStore::from_reader`] for its contents.
    pub fn load(path: &Path) -> Result<Self, DataSourceError> {
        let file = std::fs::File::open(path).map_err(|e| DataSourceError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let store = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            records = store.records.len(),
            "loaded mentions"
        );
        Ok(store)
    }

    /// Parse mentions from any CSV byte stream with a header row.
    ///
    /// Timestamps that fail to parse are kept as `None`; the row itself is
    /// never dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::MissingColumns`] if the header lacks any of
    /// [`REQUIRED_COLUMNS`], or [`DataSourceError::Csv`] if the stream cannot
    /// be read or a row is malformed (for example a wrong number of fields).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataSourceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?;
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .map(|col| (*col).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DataSourceError::MissingColumns(missing));
        }

        let mut records = Vec::new();
        for (idx, row) in csv_reader.deserialize::<RawMention>().enumerate() {
            // Header is line 1, so data rows start at 2.
            records.push(row?.into_mention(idx + 2));
        }

        Ok(Self { records })
    }

    /// Build a store from already-normalized mentions.
    #[must_use]
    pub fn from_records(records: Vec<Mention>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Mention] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique competitor identifiers across all records.
    ///
    /// Callers should treat this as an unordered set and impose their own
    /// display order.
    #[must_use]
    pub fn distinct_competitors(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|m| m.competitor.as_str())
            .collect()
    }

    /// Records for exactly `competitor` whose label is one of `labels`, in
    /// source order.
    #[must_use]
    pub fn filter_by_competitor_and_labels(
        &self,
        competitor: &str,
        labels: &[Label],
    ) -> Vec<&Mention> {
        filter_by_competitor_and_labels(&self.records, competitor, labels)
    }
}

/// Slice form of [`RecordStore::filter_by_competitor_and_labels`].
#[must_use]
pub fn filter_by_competitor_and_labels<'a>(
    records: &'a [Mention],
    competitor: &str,
    labels: &[Label],
) -> Vec<&'a Mention> {
    records
        .iter()
        .filter(|m| m.competitor == competitor && labels.contains(&m.label))
        .collect()
}

/// Order records for a detail view: newest first, missing timestamps last.
///
/// The sort is stable, so records with equal timestamps keep source order.
pub fn sort_for_display(records: &mut [&Mention]) {
    records.sort_by(|a, b| match (a.timestamp, b.timestamp) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

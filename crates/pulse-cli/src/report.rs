//! Per-competitor report assembly and rendering.
//!
//! All presentation decisions (layout, `N/A` placeholders, row highlights)
//! live here; the metrics crate only hands back plain values.

use clap::ValueEnum;
use serde::Serialize;

use pulse_core::{sort_for_display, Label, Mention, NarrativeTable, RecordStore};
use pulse_metrics::{
    compute_metrics, summarize, tally, top_platform, CompetitorMetrics, MetricsError, Sentiment,
};

use crate::highlight::RowHighlight;

const NOT_AVAILABLE: &str = "N/A";
const DISPLAY_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Markdown,
    Json,
}

/// Metric values as displayed. Platforms are `None` when the category is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct MetricsView {
    pub total_mentions: usize,
    pub wow_count: usize,
    pub pain_count: usize,
    pub sentiment: Sentiment,
    pub top_positive_platform: Option<String>,
    pub top_negative_platform: Option<String>,
}

impl From<CompetitorMetrics> for MetricsView {
    fn from(m: CompetitorMetrics) -> Self {
        Self {
            total_mentions: m.total_mentions,
            wow_count: m.wow_count,
            pain_count: m.pain_count,
            sentiment: m.sentiment,
            top_positive_platform: Some(m.top_positive_platform),
            top_negative_platform: Some(m.top_negative_platform),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CompetitorReport<'a> {
    pub competitor: &'a str,
    /// `None` when the competitor has no `wow`/`pain` mentions at all.
    pub metrics: Option<MetricsView>,
    pub summary: String,
    /// Newest first.
    pub mentions: Vec<&'a Mention>,
}

/// Build the metrics view, degrading empty categories to `None` platforms.
fn metrics_view(competitor: &str, records: &[&Mention]) -> MetricsView {
    match compute_metrics(records) {
        Ok(metrics) => metrics.into(),
        Err(MetricsError::EmptyCategory { label }) => {
            tracing::warn!(
                competitor,
                %label,
                "no mentions in category; most frequent platform unavailable"
            );
            let counts = tally(records);
            MetricsView {
                total_mentions: counts.total,
                wow_count: counts.wow,
                pain_count: counts.pain,
                sentiment: counts.sentiment(),
                top_positive_platform: top_platform(records, &Label::Wow)
                    .ok()
                    .map(str::to_string),
                top_negative_platform: top_platform(records, &Label::Pain)
                    .ok()
                    .map(str::to_string),
            }
        }
    }
}

pub(crate) fn build_report<'a>(
    store: &'a RecordStore,
    competitor: &'a str,
    narratives: &NarrativeTable,
) -> CompetitorReport<'a> {
    let records = store.filter_by_competitor_and_labels(competitor, &Label::SENTIMENT);

    // Metrics are only computed for competitors with sentiment-bearing mentions.
    let metrics = if records.is_empty() {
        None
    } else {
        Some(metrics_view(competitor, &records))
    };
    let summary = summarize(&records, competitor, narratives);

    let mut mentions = records;
    sort_for_display(&mut mentions);

    CompetitorReport {
        competitor,
        metrics,
        summary,
        mentions,
    }
}

fn platform_cell(platform: Option<&str>) -> &str {
    platform.unwrap_or(NOT_AVAILABLE)
}

fn timestamp_cell(mention: &Mention) -> String {
    mention
        .timestamp
        .map(|t| t.format(DISPLAY_TIMESTAMP).to_string())
        .unwrap_or_default()
}

/// Collapse newlines so a mention stays on one line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn render_text(report: &CompetitorReport<'_>, details: bool) -> String {
    let mut lines = vec![format!("== {} ==", report.competitor)];

    if let Some(m) = &report.metrics {
        let tone = RowHighlight::for_sentiment(m.sentiment).marker();
        lines.push(format!("{:<19}{tone} {}", "Overall Sentiment:", m.sentiment));
        lines.push(format!(
            "{:<19}{tone} {}/{}",
            "Wow/Pain:", m.wow_count, m.pain_count
        ));
        lines.push(format!("{:<19}{}", "Total Mentions:", m.total_mentions));
        lines.push(format!(
            "{:<19}{}",
            "Most (+) Platform:",
            platform_cell(m.top_positive_platform.as_deref())
        ));
        lines.push(format!(
            "{:<19}{}",
            "Most (-) Platform:",
            platform_cell(m.top_negative_platform.as_deref())
        ));
        lines.push(String::new());
    }

    lines.push("Summary".to_string());
    lines.push(report.summary.clone());

    if details && !report.mentions.is_empty() {
        lines.push(String::new());
        lines.push("Mentions (newest first)".to_string());
        for m in &report.mentions {
            let marker = RowHighlight::for_label(&m.label).marker();
            lines.push(format!(
                "{marker} {:<19}  {:<16}  {}  <{}>  {:<12}  {}",
                timestamp_cell(m),
                m.user,
                single_line(&m.content),
                m.link,
                m.platform,
                m.label,
            ));
        }
    }

    lines.join("\n")
}

fn escape_cell(text: &str) -> String {
    single_line(text).replace('|', "\\|")
}

pub(crate) fn render_markdown(report: &CompetitorReport<'_>, details: bool) -> String {
    let mut lines = vec![format!("## {}", report.competitor), String::new()];

    if let Some(m) = &report.metrics {
        lines.push(
            "| Overall Sentiment | Wow/Pain | Total Mentions | Most (+) Platform | Most (-) Platform |"
                .to_string(),
        );
        lines.push("|---|---|---|---|---|".to_string());
        let badge = RowHighlight::for_sentiment(m.sentiment).badge();
        lines.push(format!(
            "| {badge} {} | {badge} {}/{} | {} | {} | {} |",
            m.sentiment,
            m.wow_count,
            m.pain_count,
            m.total_mentions,
            escape_cell(platform_cell(m.top_positive_platform.as_deref())),
            escape_cell(platform_cell(m.top_negative_platform.as_deref())),
        ));
        lines.push(String::new());
    }

    lines.push("### Summary".to_string());
    lines.push(String::new());
    lines.push("```text".to_string());
    lines.push(report.summary.clone());
    lines.push("```".to_string());

    if details && !report.mentions.is_empty() {
        lines.push(String::new());
        lines.push("### Mentions".to_string());
        lines.push(String::new());
        lines.push("| | Timestamp | User | Content | Link | Platform | Label |".to_string());
        lines.push("|---|---|---|---|---|---|---|".to_string());
        for m in &report.mentions {
            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} | {} |",
                RowHighlight::for_label(&m.label).badge(),
                timestamp_cell(m),
                escape_cell(&m.user),
                escape_cell(&m.content),
                escape_cell(&m.link),
                escape_cell(&m.platform),
                m.label,
            ));
        }
    }

    lines.join("\n")
}

/// Render every report in the requested format.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub(crate) fn render_all(
    reports: &[CompetitorReport<'_>],
    format: OutputFormat,
    details: bool,
) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports)?,
        OutputFormat::Text => reports
            .iter()
            .map(|r| render_text(r, details))
            .collect::<Vec<_>>()
            .join("\n\n"),
        OutputFormat::Markdown => {
            let mut sections = vec!["# Competitor Analysis".to_string()];
            sections.extend(reports.iter().map(|r| render_markdown(r, details)));
            sections.join("\n\n")
        }
    };
    Ok(rendered)
}

//! Export formatting: CSV and plain-text report.
//!
//! Pure string templating over the pipeline output; file I/O stays with
//! the caller.

use chrono::Utc;

use crate::types::{ScoredArticle, Summary};

const CSV_HEADER: &str = "Title,Description,Source,Sentiment,Confidence,URL";

/// Render scored articles as a CSV string with a fixed column set.
pub fn to_csv(articles: &[ScoredArticle]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for a in articles {
        let row = [
            csv_field(&a.article.title),
            csv_field(&a.article.description),
            csv_field(&a.article.source),
            a.sentiment.to_string(),
            format!("{:.1}", a.confidence),
            csv_field(&a.article.url),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field when it contains a delimiter, quote, or newline;
/// embedded quotes are doubled per RFC 4180.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render a plain-text report with totals, trend, and distribution.
pub fn text_report(topic: &str, summary: &Summary) -> String {
    format!(
        "SENTIMENT ANALYSIS REPORT\n\
         ========================\n\
         Topic: {}\n\
         Date: {}\n\
         \n\
         SUMMARY:\n\
         - Total: {}\n\
         - Trend: {}\n\
         - Avg confidence: {:.1}%\n\
         \n\
         DISTRIBUTION:\n\
         - Positive: {} ({:.1}%)\n\
         - Negative: {} ({:.1}%)\n\
         - Neutral: {} ({:.1}%)\n",
        topic.to_uppercase(),
        Utc::now().format("%d %B %Y %H:%M"),
        summary.total,
        summary.overall_trend,
        summary.avg_confidence,
        summary.positive_count,
        summary.positive_pct,
        summary.negative_count,
        summary.negative_pct,
        summary.neutral_count,
        summary.neutral_pct,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

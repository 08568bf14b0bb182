use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::application::{BulkResult, HistoryResult};
use crate::error::{Error, Result};
use crate::github::Release;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Text output is the tag name only.
pub fn format_release(release: &Release, format: &str) -> Result<String> {
    match format.parse::<OutputFormat>()? {
        OutputFormat::Json => to_json(release),
        OutputFormat::Text => Ok(release.tag_name.clone()),
    }
}

pub fn format_bulk_results(results: &[BulkResult], format: &str) -> Result<String> {
    match format.parse::<OutputFormat>()? {
        OutputFormat::Json => to_json(results),
        OutputFormat::Text => Ok(results
            .iter()
            .map(bulk_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn format_history_results(results: &[HistoryResult], format: &str) -> Result<String> {
    match format.parse::<OutputFormat>()? {
        OutputFormat::Json => to_json(results),
        OutputFormat::Text => Ok(results
            .iter()
            .map(history_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn bulk_line(result: &BulkResult) -> String {
    match (&result.error, &result.tag) {
        (Some(error), _) => format!("{}: ERROR - {}", result.repository, error),
        (None, Some(tag)) => format!("{}: {}", result.repository, tag),
        (None, None) => format!("{}: ", result.repository),
    }
}

fn history_line(result: &HistoryResult) -> String {
    if let Some(error) = &result.error {
        return format!(
            "{}: {} -> ERROR - {}",
            result.repository, result.historical_version, error
        );
    }

    match (&result.current_version, result.has_update) {
        (Some(current), true) => format!(
            "{}: {} -> {}",
            result.repository, result.historical_version, current
        ),
        _ => format!("{}: {}", result.repository, result.historical_version),
    }
}

fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::HistoryEntry;

    fn release() -> Release {
        Release {
            repository: "owner/repo".into(),
            tag_name: "v1.2.3".into(),
            name: "Release 1.2.3".into(),
            html_url: "https://github.com/owner/repo/releases/tag/v1.2.3".into(),
            published_at: "2023-01-01T12:00:00Z".into(),
        }
    }

    fn bulk() -> Vec<BulkResult> {
        vec![
            BulkResult::tag("owner/repo1", "v1.0.0"),
            BulkResult::tag("owner/repo2", "v2.0.0"),
            BulkResult::error("owner/repo3", "not found"),
        ]
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "JSON".parse::<OutputFormat>(),
            Err(Error::UnsupportedFormat(ref f)) if f == "JSON"
        ));
        assert_eq!(OutputFormat::default().to_string(), "text");
    }

    #[test]
    fn test_format_release_text() {
        assert_eq!(format_release(&release(), "text").unwrap(), "v1.2.3");
    }

    #[test]
    fn test_format_release_json() {
        let out = format_release(&release(), "json").unwrap();
        // 2-space indented
        assert!(out.contains("\n  \"tag_name\": \"v1.2.3\""));

        let decoded: Release = serde_json::from_str(&out).unwrap();
        assert_eq!(decoded, release());
    }

    #[test]
    fn test_format_release_unsupported() {
        let err = format_release(&release(), "yaml").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref f) if f == "yaml"));
    }

    #[test]
    fn test_format_bulk_text() {
        let out = format_bulk_results(&bulk(), "text").unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "owner/repo1: v1.0.0",
                "owner/repo2: v2.0.0",
                "owner/repo3: ERROR - not found",
            ]
        );
    }

    #[test]
    fn test_format_bulk_json() {
        let out = format_bulk_results(&bulk(), "json").unwrap();
        let decoded: Vec<BulkResult> = serde_json::from_str(&out).unwrap();
        assert_eq!(decoded, bulk());
        assert!(!out.contains("\"error\": null"));
        assert!(!out.contains("\"tag\": null"));
    }

    #[test]
    fn test_format_bulk_unsupported() {
        let err = format_bulk_results(&bulk(), "").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_format_history_text() {
        let results = vec![
            HistoryResult::compared(HistoryEntry::new("owner/same", "v1.0.0"), "v1.0.0".into()),
            HistoryResult::compared(HistoryEntry::new("owner/newer", "v1.0.0"), "v1.1.0".into()),
            HistoryResult::failed(HistoryEntry::new("owner/gone", "v0.1.0"), "not found"),
        ];

        let out = format_history_results(&results, "text").unwrap();
        assert_eq!(
            out,
            "owner/same: v1.0.0\n\
             owner/newer: v1.0.0 -> v1.1.0\n\
             owner/gone: v0.1.0 -> ERROR - not found"
        );
    }

    #[test]
    fn test_format_history_json_and_unsupported() {
        let results = vec![HistoryResult::compared(
            HistoryEntry::new("owner/repo", "v1"),
            "v2".into(),
        )];

        let out = format_history_results(&results, "json").unwrap();
        let decoded: Vec<HistoryResult> = serde_json::from_str(&out).unwrap();
        assert_eq!(decoded, results);

        assert!(matches!(
            format_history_results(&results, "xml"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_empty_batch_text() {
        assert_eq!(format_bulk_results(&[], "text").unwrap(), "");
        assert_eq!(format_history_results(&[], "json").unwrap(), "[]");
    }
}

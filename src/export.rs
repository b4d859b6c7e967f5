//! Report export
//!
//! Serializes a finished scan verbatim to a timestamped JSON file. The
//! timestamp exists only in the export envelope and the filename; the
//! report itself carries none, so back-to-back scans of an unchanged host
//! stay byte-identical.

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use crate::error::Result;
use crate::report::{ScanReport, SystemInfo};

#[derive(Serialize)]
struct ExportEnvelope<'a> {
    generated_at: String,
    system: &'a SystemInfo,
    report: &'a ScanReport,
}

/// Write the report as pretty JSON into `dir` and return the file path.
pub fn write_report(report: &ScanReport, system: &SystemInfo, dir: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("mediasense-report-{timestamp}.json"));

    let envelope = ExportEnvelope {
        generated_at: Local::now().to_rfc3339(),
        system,
        report,
    };
    let json = serde_json::to_string_pretty(&envelope)?;
    std::fs::write(&path, json)?;

    tracing::info!(path = %path.display(), "report exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::scan::run_scan;

    #[tokio::test]
    async fn test_export_writes_valid_json() {
        let report = run_scan(&Platform::detached()).await;
        let system = SystemInfo::unknown();
        let dir = tempfile::tempdir().unwrap();

        let path = write_report(&report, &system, dir.path()).unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("mediasense-report-"));
        assert!(name.ends_with(".json"));

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(value["generated_at"].is_string());
        assert!(value["report"]["media"]["video_codecs"].is_array());
        assert!(value["report"]["protection_schemes"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_report_body_has_no_timestamp() {
        let report = run_scan(&Platform::detached()).await;
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("generated_at"));
    }
}

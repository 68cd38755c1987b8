//! Export of a server's merged metric + traffic series to downloadable
//! files: CSV, structured JSON, or a human-readable text report.
//!
//! Formatters are pure over their inputs; `write_export` stamps the
//! current time and drops the artifact in the target directory.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{MetricSample, Server, TrafficSample};

/// One metric sample joined with the traffic sample that shares its
/// timestamp. Field names match the API schema so JSON exports round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    pub cpu_usage: f64,
    pub ram_usage: f64,
    pub disk_usage: f64,
    pub app_usage: f64,
    pub timestamp: String,
    pub network_traffic: f64,
}

/// Payload of the structured (JSON) export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredExport {
    pub server: Server,
    pub data: Vec<MergedRow>,
    #[serde(rename = "exportDate")]
    pub export_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Report,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Report => "txt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Report => "report",
        }
    }

    /// `server_data_<name>_<YYYY-MM-DD>.<ext>`; reports use the
    /// `server_report_` prefix.
    pub fn file_name(self, server: &Server, date: chrono::NaiveDate) -> String {
        let prefix = match self {
            ExportFormat::Report => "server_report",
            _ => "server_data",
        };
        format!(
            "{prefix}_{}_{}.{}",
            server.name,
            date.format("%Y-%m-%d"),
            self.extension()
        )
    }
}

/// Join each metric sample with the traffic sample carrying an identical
/// timestamp string; rows without a match get 0 traffic. Traffic is
/// indexed up front so the merge stays linear in the series lengths.
pub fn merge_by_timestamp(metrics: &[MetricSample], traffic: &[TrafficSample]) -> Vec<MergedRow> {
    let by_ts: HashMap<&str, f64> = traffic
        .iter()
        .map(|t| (t.timestamp.as_str(), t.network_traffic))
        .collect();

    metrics
        .iter()
        .map(|m| MergedRow {
            cpu_usage: m.cpu_usage,
            ram_usage: m.ram_usage,
            disk_usage: m.disk_usage,
            app_usage: m.app_usage,
            timestamp: m.timestamp.clone(),
            network_traffic: by_ts.get(m.timestamp.as_str()).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Delimited-text export. Fields are numeric or ISO timestamps, so no
/// quoting is needed.
pub fn format_csv(rows: &[MergedRow]) -> String {
    let mut out = String::from("Timestamp,CPU Usage,RAM Usage,Disk Usage,App Usage,Network Traffic\n");
    for r in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            r.timestamp, r.cpu_usage, r.ram_usage, r.disk_usage, r.app_usage, r.network_traffic
        );
    }
    out
}

/// Structured-text export: server descriptor + merged rows + generation
/// timestamp, pretty-printed.
pub fn format_json(
    server: &Server,
    rows: &[MergedRow],
    export_date: &str,
) -> serde_json::Result<String> {
    let payload = StructuredExport {
        server: server.clone(),
        data: rows.to_vec(),
        export_date: export_date.to_string(),
    };
    serde_json::to_string_pretty(&payload)
}

/// Human-readable report: header block, then one block per sample with
/// unit suffixes.
pub fn format_report(server: &Server, rows: &[MergedRow], generated_at: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Server Monitoring Report");
    let _ = writeln!(out, "Generated: {generated_at}");
    let _ = writeln!(out, "Server: {} ({})", server.name, server.ip_address);
    let _ = writeln!(out, "Status: {}", server.status);
    let _ = writeln!(out);
    let _ = writeln!(out, "PERFORMANCE METRICS:");
    let _ = writeln!(out, "-------------------");
    for r in rows {
        let _ = writeln!(out, "{}", localize_timestamp(&r.timestamp));
        let _ = writeln!(out, "   CPU: {}%", r.cpu_usage);
        let _ = writeln!(out, "   RAM: {}%", r.ram_usage);
        let _ = writeln!(out, "   Disk: {}%", r.disk_usage);
        let _ = writeln!(out, "   App: {}%", r.app_usage);
        let _ = writeln!(out, "   Network: {} MB/s", r.network_traffic);
        let _ = writeln!(out);
    }
    out
}

// Render an API timestamp for humans; unparseable inputs pass through
// verbatim.
fn localize_timestamp(ts: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    // The API also emits naive ISO timestamps without an offset
    if let Ok(naive) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    ts.to_string()
}

/// Merge, format, and write one export artifact. Returns the path of the
/// written file. Callers gate on a server being selected before invoking.
pub fn write_export(
    dir: &Path,
    server: &Server,
    format: ExportFormat,
    metrics: &[MetricSample],
    traffic: &[TrafficSample],
) -> io::Result<PathBuf> {
    let rows = merge_by_timestamp(metrics, traffic);
    let now_local = Local::now();

    let content = match format {
        ExportFormat::Csv => format_csv(&rows),
        ExportFormat::Json => {
            let export_date = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            format_json(server, &rows, &export_date).map_err(io::Error::other)?
        }
        ExportFormat::Report => format_report(
            server,
            &rows,
            &now_local.format("%Y-%m-%d %H:%M:%S").to_string(),
        ),
    };

    let path = dir.join(format.file_name(server, now_local.date_naive()));
    std::fs::write(&path, content)?;
    Ok(path)
}

//! Derived fleet health: score, active counts, and performance insights.
//!
//! Everything here is a pure function over the current snapshot; nothing
//! is cached between polls.

use crate::types::{AlertCounts, MetricSample, Server};

// Score deductions per alert/server condition
const CRITICAL_ALERT_PENALTY: i64 = 10;
const MEDIUM_ALERT_PENALTY: i64 = 5;
const LOW_ALERT_PENALTY: i64 = 2;
const INACTIVE_SERVER_PENALTY: i64 = 15;

// Insight thresholds (percent)
const CPU_HIGH_AVG: f64 = 80.0;
const CPU_LOW_AVG: f64 = 20.0;
const RAM_HIGH_AVG: f64 = 85.0;
const DISK_CRITICAL_AVG: f64 = 90.0;
const DISK_HIGH_AVG: f64 = 75.0;
const CPU_TREND_DELTA: f64 = 15.0;
const RAM_TREND_DELTA: f64 = 10.0;

// Trailing window for trend detection
const TREND_WINDOW: usize = 5;

/// Severity of a derived insight. Closed set; display treatment is looked
/// up per variant in the UI rather than carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Critical,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

/// One diagnostic record derived from a server's metric history.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    /// Subject label, e.g. "CPU" or "RAM Trend".
    pub metric: &'static str,
    /// Formatted value: "85.0%" for averages, "+20.0%" for deltas.
    pub value: String,
    pub message: &'static str,
    pub trend: Option<TrendDirection>,
}

/// Fleet health score in 0..=100.
///
/// Starts from 100 and deducts 10 per critical alert, 5 per medium, 2 per
/// low, and 15 per inactive server. Total: empty inputs score 100 (the UI
/// is responsible for not presenting a score before data has arrived).
pub fn compute_health_score(servers: &[Server], alerts: &AlertCounts) -> u8 {
    let mut score = 100i64;
    score -= alerts.critical as i64 * CRITICAL_ALERT_PENALTY;
    score -= alerts.medium as i64 * MEDIUM_ALERT_PENALTY;
    score -= alerts.low as i64 * LOW_ALERT_PENALTY;

    let inactive = servers.iter().filter(|s| !s.is_active()).count() as i64;
    score -= inactive * INACTIVE_SERVER_PENALTY;

    score.clamp(0, 100) as u8
}

/// Number of servers whose status is exactly `"active"`.
pub fn count_active(servers: &[Server]) -> usize {
    servers.iter().filter(|s| s.is_active()).count()
}

/// Derive insights from a server's metric history.
///
/// Averages cpu/ram/disk over all samples and compares the trailing
/// five-sample window for trends. Rules fire independently in a fixed
/// order; if none fires, a single success insight is returned. An empty
/// history yields no insights at all.
///
/// NaN samples are not sanitized: a NaN poisons the affected mean or
/// trend, which then fails every threshold comparison and suppresses that
/// rule's insight.
pub fn generate_insights(samples: &[MetricSample]) -> Vec<Insight> {
    let mut insights = Vec::new();
    if samples.is_empty() {
        return insights;
    }

    let n = samples.len() as f64;
    let cpu_avg = samples.iter().map(|m| m.cpu_usage).sum::<f64>() / n;
    let ram_avg = samples.iter().map(|m| m.ram_usage).sum::<f64>() / n;
    let disk_avg = samples.iter().map(|m| m.disk_usage).sum::<f64>() / n;

    let window = &samples[samples.len().saturating_sub(TREND_WINDOW)..];
    let (cpu_trend, ram_trend) = if window.len() > 1 {
        let first = &window[0];
        let last = &window[window.len() - 1];
        (
            last.cpu_usage - first.cpu_usage,
            last.ram_usage - first.ram_usage,
        )
    } else {
        (0.0, 0.0)
    };

    if cpu_avg > CPU_HIGH_AVG {
        insights.push(Insight {
            kind: InsightKind::Warning,
            metric: "CPU",
            value: format!("{cpu_avg:.1}%"),
            message: "High average CPU usage detected. Consider optimizing applications or upgrading hardware.",
            trend: None,
        });
    } else if cpu_avg < CPU_LOW_AVG {
        insights.push(Insight {
            kind: InsightKind::Info,
            metric: "CPU",
            value: format!("{cpu_avg:.1}%"),
            message: "Low CPU utilization. This server might be underutilized.",
            trend: None,
        });
    }

    if ram_avg > RAM_HIGH_AVG {
        insights.push(Insight {
            kind: InsightKind::Warning,
            metric: "RAM",
            value: format!("{ram_avg:.1}%"),
            message: "Memory usage is high. Consider adding more RAM or optimizing applications.",
            trend: None,
        });
    }

    if disk_avg > DISK_CRITICAL_AVG {
        insights.push(Insight {
            kind: InsightKind::Critical,
            metric: "Disk",
            value: format!("{disk_avg:.1}%"),
            message: "Disk space critically low. Free up space to prevent system failures.",
            trend: None,
        });
    } else if disk_avg > DISK_HIGH_AVG {
        insights.push(Insight {
            kind: InsightKind::Warning,
            metric: "Disk",
            value: format!("{disk_avg:.1}%"),
            message: "Disk space is getting low. Consider cleanup or expansion.",
            trend: None,
        });
    }

    if cpu_trend > CPU_TREND_DELTA {
        insights.push(Insight {
            kind: InsightKind::Warning,
            metric: "CPU Trend",
            value: format!("+{cpu_trend:.1}%"),
            message: "CPU usage is trending upward significantly. Monitor for potential issues.",
            trend: Some(TrendDirection::Up),
        });
    }

    if ram_trend > RAM_TREND_DELTA {
        insights.push(Insight {
            kind: InsightKind::Warning,
            metric: "RAM Trend",
            value: format!("+{ram_trend:.1}%"),
            message: "Memory usage is increasing. Check for memory leaks.",
            trend: Some(TrendDirection::Up),
        });
    }

    if insights.is_empty() {
        insights.push(Insight {
            kind: InsightKind::Success,
            metric: "Overall",
            value: "Good".to_string(),
            message: "All server metrics within normal parameters.",
            trend: None,
        });
    }

    insights
}

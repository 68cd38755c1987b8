//! Health score, active count, and insight derivation properties.

use fleetwatch::health::{
    compute_health_score, count_active, generate_insights, InsightKind, TrendDirection,
};
use fleetwatch::state::DashboardState;
use fleetwatch::types::{AlertCounts, MetricSample, Server};

fn server(id: u64, status: &str) -> Server {
    Server {
        id,
        name: format!("Server-{id}"),
        ip_address: format!("192.168.1.{id}"),
        status: status.to_string(),
    }
}

fn sample(cpu: f64, ram: f64, disk: f64, ts: &str) -> MetricSample {
    MetricSample {
        cpu_usage: cpu,
        ram_usage: ram,
        disk_usage: disk,
        app_usage: 40.0,
        timestamp: ts.to_string(),
    }
}

fn alerts(critical: u64, medium: u64, low: u64) -> AlertCounts {
    AlertCounts {
        critical,
        medium,
        low,
    }
}

#[test]
fn empty_inputs_score_perfect() {
    assert_eq!(compute_health_score(&[], &AlertCounts::default()), 100);
}

#[test]
fn each_critical_alert_costs_ten_until_clamped() {
    let mut prev = compute_health_score(&[], &alerts(0, 0, 0));
    for critical in 1..=12u64 {
        let score = compute_health_score(&[], &alerts(critical, 0, 0));
        if prev > 0 {
            assert_eq!(prev - score, 10.min(prev));
        }
        prev = score;
    }
    // 12 criticals would be -120; clamped at the floor
    assert_eq!(compute_health_score(&[], &alerts(12, 0, 0)), 0);
}

#[test]
fn score_stays_in_range_for_arbitrary_inputs() {
    let fleets = [
        vec![],
        vec![server(1, "active")],
        vec![server(1, "down"), server(2, "down"), server(3, "down")],
    ];
    for servers in &fleets {
        for critical in [0u64, 1, 5, 50] {
            for medium in [0u64, 3, 30] {
                for low in [0u64, 7, 70] {
                    let score = compute_health_score(servers, &alerts(critical, medium, low));
                    assert!(score <= 100, "score {score} out of range");
                }
            }
        }
    }
}

#[test]
fn mixed_fleet_scenario() {
    // One active, one down, one critical alert: 100 - 10 - 15
    let servers = vec![server(1, "active"), server(2, "down")];
    assert_eq!(compute_health_score(&servers, &alerts(1, 0, 0)), 75);
    assert_eq!(count_active(&servers), 1);
}

#[test]
fn active_count_is_case_sensitive_exact_match() {
    let servers = vec![
        server(1, "active"),
        server(2, "Active"),
        server(3, "ACTIVE"),
        server(4, "inactive"),
    ];
    assert_eq!(count_active(&servers), 1);
    // The three non-matches all deduct as inactive
    assert_eq!(
        compute_health_score(&servers, &AlertCounts::default()),
        100 - 3 * 15
    );
}

#[test]
fn no_samples_no_insights() {
    assert!(generate_insights(&[]).is_empty());
}

#[test]
fn high_cpu_average_yields_single_warning() {
    let samples: Vec<MetricSample> = (0..4)
        .map(|i| sample(85.0, 50.0, 50.0, &format!("2025-04-17T10:0{i}:00")))
        .collect();
    let insights = generate_insights(&samples);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].kind, InsightKind::Warning);
    assert_eq!(insights[0].metric, "CPU");
    assert_eq!(insights[0].value, "85.0%");
    // The low-utilization info rule must not fire alongside it
    assert!(!insights
        .iter()
        .any(|i| i.metric == "CPU" && i.kind == InsightKind::Info));
}

#[test]
fn rising_cpu_emits_trend_warning_over_trailing_window() {
    // Six samples; the trailing five run 10 -> 30
    let cpu = [30.0, 10.0, 14.0, 18.0, 22.0, 30.0];
    let samples: Vec<MetricSample> = cpu
        .iter()
        .enumerate()
        .map(|(i, c)| sample(*c, 50.0, 50.0, &format!("2025-04-17T10:0{i}:00")))
        .collect();
    let insights = generate_insights(&samples);
    assert_eq!(insights.len(), 1, "unexpected extra insights: {insights:?}");
    let trend = &insights[0];
    assert_eq!(trend.kind, InsightKind::Warning);
    assert_eq!(trend.metric, "CPU Trend");
    assert_eq!(trend.value, "+20.0%");
    assert_eq!(trend.trend, Some(TrendDirection::Up));
}

#[test]
fn single_sample_window_has_no_trend() {
    let samples = vec![sample(50.0, 99.0, 50.0, "2025-04-17T10:00:00")];
    let insights = generate_insights(&samples);
    // RAM average fires, but no trend insight can
    assert!(insights.iter().any(|i| i.metric == "RAM"));
    assert!(insights.iter().all(|i| i.trend.is_none()));
}

#[test]
fn disk_tiers_are_mutually_exclusive() {
    let critical = generate_insights(&[sample(50.0, 50.0, 92.0, "2025-04-17T10:00:00")]);
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].kind, InsightKind::Critical);
    assert_eq!(critical[0].metric, "Disk");

    let warning = generate_insights(&[sample(50.0, 50.0, 80.0, "2025-04-17T10:00:00")]);
    assert_eq!(warning.len(), 1);
    assert_eq!(warning[0].kind, InsightKind::Warning);
    assert_eq!(warning[0].metric, "Disk");
}

#[test]
fn all_normal_collapses_to_single_success() {
    let samples: Vec<MetricSample> = (0..8)
        .map(|i| sample(50.0, 50.0, 50.0, &format!("2025-04-17T10:0{i}:00")))
        .collect();
    let insights = generate_insights(&samples);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].kind, InsightKind::Success);
    assert_eq!(insights[0].metric, "Overall");
    assert_eq!(insights[0].value, "Good");
}

#[test]
fn dashboard_state_transitions() {
    let mut state = DashboardState::new(true);
    assert!(state.dark_mode());
    state.toggle_dark_mode();
    assert!(!state.dark_mode());

    let s1 = server(1, "active");
    state.select_server(Some(s1.clone()));
    assert_eq!(state.selected_server(), Some(&s1));

    // Selection survives a refresh of the same fleet, follows updates,
    // and drops when the server disappears
    let refreshed = vec![server(1, "down"), server(2, "active")];
    state.resync(&refreshed);
    assert_eq!(state.selected_server().map(|s| s.status.as_str()), Some("down"));

    state.resync(&[server(2, "active")]);
    assert!(state.selected_server().is_none());
}

//! Types that mirror the monitoring API's JSON schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Server {
    pub id: u64,
    pub name: String,
    pub ip_address: String,
    pub status: String,
}

impl Server {
    // Exact match on purpose: the API reports anything else ("down",
    // "maintenance", ...) and all of it counts as inactive.
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MetricSample {
    pub cpu_usage: f64,
    pub ram_usage: f64,
    pub disk_usage: f64,
    pub app_usage: f64,
    // ISO-8601, sortable; kept as the raw string the API sent so traffic
    // rows can be matched by string equality
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrafficSample {
    // MB/s, same cadence as MetricSample but timestamps may not line up
    pub network_traffic: f64,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertCounts {
    pub critical: u64,
    pub medium: u64,
    pub low: u64,
}

// Chart input: per benchmark/part/device summary statistics and chart slot positions.
// Means feed resource and refresh-time bars; network bars use the last cumulative value.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::models::{DeviceResults, IndexedSeries, ResultTree};

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn mean_u64(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64)
}

/// Position of a (benchmark, device) pair in the chart grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub benchmark: usize,
    pub device: usize,
}

#[derive(Debug, Clone)]
pub struct Layout {
    benchmarks: Vec<String>,
    devices: Vec<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for Layout {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            benchmarks: config.benchmarks.clone(),
            devices: config.devices.clone(),
        }
    }
}

impl Layout {
    pub fn slot(&self, benchmark: &str, device: &str) -> Result<Slot, LayoutError> {
        let b = self
            .benchmarks
            .iter()
            .position(|x| x == benchmark)
            .ok_or_else(|| LayoutError::UnknownBenchmark(benchmark.to_string()))?;
        let d = self
            .devices
            .iter()
            .position(|x| x == device)
            .ok_or_else(|| LayoutError::UnknownDevice(device.to_string()))?;
        Ok(Slot {
            benchmark: b,
            device: d,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceSummary {
    pub cpu_mean: Option<f64>,
    pub mem_mean: Option<f64>,
    pub sent_total: Option<f64>,
    pub received_total: Option<f64>,
    pub liveboard_mean: Option<f64>,
    pub planner_mean: Option<f64>,
    pub resource_samples: usize,
    pub network_samples: usize,
    pub liveboard_samples: usize,
    pub planner_samples: usize,
}

impl DeviceSummary {
    pub fn from_results(results: &DeviceResults) -> Self {
        let mut summary = Self::default();
        if let Some(top) = &results.top {
            summary.cpu_mean = mean(&top.cpu);
            summary.mem_mean = mean(&top.mem);
            summary.resource_samples = top.len();
        }
        if let Some(net) = &results.nethogs {
            summary.sent_total = net.sent.last().copied();
            summary.received_total = net.received.last().copied();
            summary.network_samples = net.len();
        }
        if let Some(latency) = &results.user_informed_time {
            let liveboard = indexed_values(&latency.liveboard);
            let planner = indexed_values(&latency.planner);
            summary.liveboard_mean = mean_u64(liveboard);
            summary.planner_mean = mean_u64(planner);
            summary.liveboard_samples = liveboard.len();
            summary.planner_samples = planner.len();
        }
        summary
    }
}

fn indexed_values(series: &Option<IndexedSeries>) -> &[u64] {
    series.as_ref().map_or(&[][..], |s| s.values.as_slice())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub slot: Slot,
    #[serde(flatten)]
    pub stats: DeviceSummary,
}

/// benchmark -> part -> device -> summary
pub type Summary = BTreeMap<String, BTreeMap<String, BTreeMap<String, SummaryEntry>>>;

/// Fails on the first benchmark or device the layout does not know.
pub fn summarize(tree: &ResultTree, layout: &Layout) -> Result<Summary, LayoutError> {
    let mut out = Summary::new();
    for (benchmark, part, device, results) in tree.iter() {
        let entry = SummaryEntry {
            slot: layout.slot(benchmark, device)?,
            stats: DeviceSummary::from_results(results),
        };
        out.entry(benchmark.to_string())
            .or_default()
            .entry(part.to_string())
            .or_default()
            .insert(device.to_string(), entry);
    }
    Ok(out)
}

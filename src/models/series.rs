// Per-file parsed series. Value vectors and timelines are index-aligned.

use serde::{Deserialize, Serialize};

use super::{Component, LatencyEvent, NetworkSample, ResourceSample};
use crate::parser::timeline;

/// Network usage of one file. `timeline` is elapsed seconds since the first sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSeries {
    pub sent: Vec<f64>,
    pub received: Vec<f64>,
    pub timeline: Vec<f64>,
}

impl NetworkSeries {
    pub fn from_samples(samples: &[NetworkSample]) -> Self {
        let timestamps: Vec<f64> = samples.iter().map(|s| s.timestamp).collect();
        Self {
            sent: samples.iter().map(|s| s.sent).collect(),
            received: samples.iter().map(|s| s.received).collect(),
            timeline: timeline::normalize(&timestamps),
        }
    }

    pub fn len(&self) -> usize {
        self.sent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.is_empty()
    }
}

/// CPU/memory usage of one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSeries {
    pub cpu: Vec<f64>,
    pub mem: Vec<f64>,
    pub timeline: Vec<f64>,
}

impl ResourceSeries {
    pub fn from_samples(samples: &[ResourceSample]) -> Self {
        let timestamps: Vec<f64> = samples.iter().map(|s| s.timestamp).collect();
        Self {
            cpu: samples.iter().map(|s| s.cpu_percent).collect(),
            mem: samples.iter().map(|s| s.mem_percent).collect(),
            timeline: timeline::normalize(&timestamps),
        }
    }

    pub fn len(&self) -> usize {
        self.cpu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty()
    }
}

/// Refresh-time values with a degenerate timeline: the measurement count, not elapsed time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedSeries {
    pub values: Vec<u64>,
    pub timeline: usize,
}

impl IndexedSeries {
    pub fn new(values: Vec<u64>) -> Self {
        let timeline = values.len();
        Self { values, timeline }
    }
}

/// Refresh times of one file, split by component.
/// A side is `None` when the file had no markers for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveboard: Option<IndexedSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner: Option<IndexedSeries>,
}

impl LatencySeries {
    pub fn from_events(events: &[LatencyEvent]) -> Self {
        let pick = |component: Component| {
            let values: Vec<u64> = events
                .iter()
                .filter(|e| e.component == component)
                .map(|e| e.magnitude)
                .collect();
            (!values.is_empty()).then(|| IndexedSeries::new(values))
        };
        Self {
            liveboard: pick(Component::Liveboard),
            planner: pick(Component::Planner),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.liveboard.is_none() && self.planner.is_none()
    }
}

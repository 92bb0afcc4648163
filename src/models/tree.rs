// Aggregated result tree: benchmark configuration -> application part -> device -> results

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{LatencySeries, NetworkSeries, ResourceSeries};

/// Everything parsed for one configuration/part/device combination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nethogs: Option<NetworkSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<ResourceSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_informed_time: Option<LatencySeries>,
}

pub type PartMap = BTreeMap<String, BTreeMap<String, DeviceResults>>;

/// Keys are case-sensitive path segments. Ordered maps keep serialized output stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTree {
    benchmarks: BTreeMap<String, PartMap>,
}

impl ResultTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for the path, creating empty levels on first encounter.
    pub fn ensure(&mut self, benchmark: &str, part: &str, device: &str) -> &mut DeviceResults {
        self.benchmarks
            .entry(benchmark.to_string())
            .or_default()
            .entry(part.to_string())
            .or_default()
            .entry(device.to_string())
            .or_default()
    }

    pub fn get(&self, benchmark: &str, part: &str, device: &str) -> Option<&DeviceResults> {
        self.benchmarks.get(benchmark)?.get(part)?.get(device)
    }

    pub fn benchmark(&self, benchmark: &str) -> Option<&PartMap> {
        self.benchmarks.get(benchmark)
    }

    /// All leaves in key order as (benchmark, part, device, results).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str, &DeviceResults)> {
        self.benchmarks.iter().flat_map(|(benchmark, parts)| {
            parts.iter().flat_map(move |(part, devices)| {
                devices.iter().map(move |(device, results)| {
                    (benchmark.as_str(), part.as_str(), device.as_str(), results)
                })
            })
        })
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}

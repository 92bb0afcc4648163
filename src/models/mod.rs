// Domain models: per-line samples, per-file series, the aggregated result tree

mod issue;
mod sample;
mod series;
mod tree;

pub use issue::{Issue, IssueKind};
pub use sample::{Component, LatencyEvent, NetworkSample, ResourceSample};
pub use series::{IndexedSeries, LatencySeries, NetworkSeries, ResourceSeries};
pub use tree::{DeviceResults, PartMap, ResultTree};

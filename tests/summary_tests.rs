// Summary statistics and chart layout lookup

use lcrail_bench::config::LayoutConfig;
use lcrail_bench::error::LayoutError;
use lcrail_bench::models::{
    DeviceResults, IndexedSeries, LatencySeries, NetworkSeries, ResourceSeries, ResultTree,
};
use lcrail_bench::summary::{DeviceSummary, Layout, Slot, mean, summarize};

fn results() -> DeviceResults {
    DeviceResults {
        nethogs: Some(NetworkSeries {
            sent: vec![0.1, 0.4, 1.2],
            received: vec![0.5, 2.0, 3.5],
            timeline: vec![0.0, 1.0, 2.0],
        }),
        top: Some(ResourceSeries {
            cpu: vec![10.0, 20.0, 30.0, 40.0],
            mem: vec![2.0, 2.0, 3.0, 3.0],
            timeline: vec![0.0, 1.0, 2.0, 3.0],
        }),
        user_informed_time: Some(LatencySeries {
            liveboard: Some(IndexedSeries::new(vec![100, 300])),
            planner: None,
        }),
    }
}

#[test]
fn device_summary_uses_means_and_final_totals() {
    let s = DeviceSummary::from_results(&results());
    assert_eq!(s.cpu_mean, Some(25.0));
    assert_eq!(s.mem_mean, Some(2.5));
    assert_eq!(s.sent_total, Some(1.2));
    assert_eq!(s.received_total, Some(3.5));
    assert_eq!(s.liveboard_mean, Some(200.0));
    assert_eq!(s.planner_mean, None);
    assert_eq!(s.resource_samples, 4);
    assert_eq!(s.network_samples, 3);
    assert_eq!(s.liveboard_samples, 2);
    assert_eq!(s.planner_samples, 0);
}

#[test]
fn empty_results_have_no_statistics() {
    let s = DeviceSummary::from_results(&DeviceResults::default());
    assert_eq!(s, DeviceSummary::default());
    assert_eq!(mean(&[]), None);
}

#[test]
fn layout_slots_follow_configured_order() {
    let layout = Layout::default();
    assert_eq!(
        layout.slot("rt-sse", "xperia-x"),
        Ok(Slot {
            benchmark: 2,
            device: 1
        })
    );
    assert_eq!(
        layout.slot("original", "jolla-1"),
        Ok(Slot {
            benchmark: 0,
            device: 0
        })
    );
}

#[test]
fn unknown_identifiers_are_errors() {
    let layout = Layout::default();
    assert_eq!(
        layout.slot("rt-ws", "jolla-1"),
        Err(LayoutError::UnknownBenchmark("rt-ws".into()))
    );
    assert_eq!(
        layout.slot("original", "pixel"),
        Err(LayoutError::UnknownDevice("pixel".into()))
    );
}

#[test]
fn summarize_walks_every_leaf() {
    let mut tree = ResultTree::new();
    *tree.ensure("rt-sse", "liveboard", "jolla-1") = results();
    tree.ensure("original", "planner", "xperia-x");
    let summary = summarize(&tree, &Layout::default()).unwrap();
    let entry = &summary["rt-sse"]["liveboard"]["jolla-1"];
    assert_eq!(
        entry.slot,
        Slot {
            benchmark: 2,
            device: 0
        }
    );
    assert_eq!(entry.stats.cpu_mean, Some(25.0));
    assert_eq!(
        summary["original"]["planner"]["xperia-x"].stats.cpu_mean,
        None
    );
}

#[test]
fn summarize_fails_on_unknown_device() {
    let mut tree = ResultTree::new();
    tree.ensure("rt-sse", "liveboard", "emulator");
    let layout = Layout::from(&LayoutConfig {
        benchmarks: vec!["rt-sse".into()],
        devices: vec!["jolla-1".into()],
    });
    let err = summarize(&tree, &layout).unwrap_err();
    assert_eq!(err, LayoutError::UnknownDevice("emulator".into()));
}

#[test]
fn summary_json_is_flat_per_device() {
    let mut tree = ResultTree::new();
    *tree.ensure("rt-sse", "liveboard", "jolla-1") = results();
    let summary = summarize(&tree, &Layout::default()).unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    let entry = &json["rt-sse"]["liveboard"]["jolla-1"];
    assert_eq!(entry["slot"]["benchmark"], 2);
    assert_eq!(entry["cpu_mean"], 25.0);
    assert!(entry["planner_mean"].is_null());
}

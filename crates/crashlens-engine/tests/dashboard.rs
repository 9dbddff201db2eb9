// End-to-end dashboard pipeline: filter a collection, then aggregate the
// survivors the way the chart widgets consume them.

use chrono::{TimeZone, Utc};
use crashlens_engine::{
    aggregate_by, browser_version_tree, filter_logs, platform_key,
};
use crashlens_testing::fixtures::{browser_mix, dashboard_sample, log};
use crashlens_types::{DateRange, FacetSelection};

#[test]
fn unconstrained_pipeline_builds_full_tree() {
    let logs = browser_mix();
    let filtered = filter_logs(&logs, &FacetSelection::unconstrained());
    assert_eq!(filtered, logs);

    let tree = browser_version_tree(&filtered);
    assert_eq!(tree.len(), 2);
    assert_eq!((tree[0].label.as_str(), tree[0].count), ("Chrome", 2));
    assert_eq!((tree[1].label.as_str(), tree[1].count), ("Safari", 1));
}

#[test]
fn browser_facet_narrows_the_tree() {
    let logs = browser_mix();
    let selection = FacetSelection::unconstrained().with_browsers(["Safari"]);
    let filtered = filter_logs(&logs, &selection);
    assert_eq!(filtered.len(), 1);

    let tree = browser_version_tree(&filtered);
    assert_eq!(tree.len(), 1);
    assert_eq!((tree[0].label.as_str(), tree[0].count), ("Safari", 1));
}

#[test]
fn out_of_window_selection_empties_every_stage() {
    let logs = browser_mix();
    let window = DateRange::new(
        Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap(),
    );
    let filtered = filter_logs(&logs, &FacetSelection::within(window));
    assert!(filtered.is_empty());
    assert!(browser_version_tree(&filtered).is_empty());
    assert!(aggregate_by(&filtered, platform_key).is_empty());
}

#[test]
fn record_without_first_brand_still_counts_by_platform() {
    let logs = vec![log(1).platform("Linux").build()];
    assert!(browser_version_tree(&logs).is_empty());

    let platforms = aggregate_by(&logs, platform_key);
    assert_eq!(platforms.len(), 1);
    assert_eq!((platforms[0].label.as_str(), platforms[0].count), ("Linux", 1));
}

#[test]
fn mixed_sample_filters_and_aggregates_consistently() {
    let logs = dashboard_sample();
    let selection = FacetSelection::unconstrained().with_games(["solitaire"]);
    let filtered = filter_logs(&logs, &selection);
    assert_eq!(filtered.len(), 2);

    let tree = browser_version_tree(&filtered);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].label, "Chrome");
    assert_eq!(tree[0].count, 2);
    let child_sum: usize = tree[0].children.iter().map(|c| c.count).sum();
    assert_eq!(tree[0].count, child_sum);
}

#[test]
fn leaf_nodes_serialize_without_children_field() {
    let tree = browser_version_tree(&browser_mix());
    let json = serde_json::to_value(&tree).unwrap();
    let safari = &json[1];
    assert_eq!(safari["label"], "Safari");
    let version = &safari["children"][0];
    assert_eq!(version["label"], "17");
    assert!(version.get("children").is_none());
}

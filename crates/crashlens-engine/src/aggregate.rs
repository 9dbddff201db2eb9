use crashlens_types::ErrorLog;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::palette::{ColorToken, child_token, outer_token};

/// One grouped count, possibly with a second grouping level underneath.
///
/// Emission order is first-seen order of the group key in the scanned input,
/// at both levels. That order is part of the contract: it is what keeps
/// chart slices and legend entries stable across re-evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateNode {
    pub label: String,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AggregateNode>,
    pub color_token: ColorToken,
}

/// Single-level grouping: count records by a caller-supplied key.
///
/// Records whose extractor yields `None` are dropped entirely - there is no
/// synthetic "unknown" bucket. Zero surviving records means an empty vec;
/// presenting a "no data" state is the caller's concern.
pub fn aggregate_by<F>(logs: &[ErrorLog], key_fn: F) -> Vec<AggregateNode>
where
    F: Fn(&ErrorLog) -> Option<String>,
{
    let counts = fold_counts(logs.iter().filter_map(|log| key_fn(log)));
    counts
        .into_iter()
        .enumerate()
        .map(|(ordinal, (label, count))| AggregateNode {
            label,
            count,
            children: Vec::new(),
            color_token: outer_token(ordinal),
        })
        .collect()
}

/// Two-level grouping: main browser brand, then version within each brand.
///
/// Only records with a defined first brand entry participate; the outer
/// count is always the sum of its children's counts.
pub fn aggregate_browser_versions(logs: &[ErrorLog]) -> Vec<AggregateNode> {
    let mut brands: Vec<(String, Vec<(String, usize)>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for log in logs {
        let Some(main) = log.main_brand() else {
            continue;
        };
        let slot = *index.entry(main.brand.clone()).or_insert_with(|| {
            brands.push((main.brand.clone(), Vec::new()));
            brands.len() - 1
        });
        let versions = &mut brands[slot].1;
        match versions.iter_mut().find(|(v, _)| *v == main.version) {
            Some((_, n)) => *n += 1,
            None => versions.push((main.version.clone(), 1)),
        }
    }

    brands
        .into_iter()
        .enumerate()
        .map(|(outer, (brand, versions))| {
            let count = versions.iter().map(|(_, n)| n).sum();
            let children = versions
                .into_iter()
                .enumerate()
                .map(|(inner, (version, n))| AggregateNode {
                    label: version,
                    count: n,
                    children: Vec::new(),
                    color_token: child_token(outer, inner),
                })
                .collect();
            AggregateNode {
                label: brand,
                count,
                children,
                color_token: outer_token(outer),
            }
        })
        .collect()
}

/// Fold a key stream into `(key, count)` pairs in first-seen order.
/// The ordered vec is the source of truth; the map only locates slots.
fn fold_counts<I>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for key in keys {
        match index.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

// Canned key extractors for the standard dashboard breakdowns.

pub fn game_key(log: &ErrorLog) -> Option<String> {
    log.game.clone()
}

pub fn platform_key(log: &ErrorLog) -> Option<String> {
    log.platform().map(str::to_owned)
}

pub fn main_browser_key(log: &ErrorLog) -> Option<String> {
    log.main_brand().map(|b| b.brand.clone())
}

/// Hour-of-day bucket, for timeline/heatmap style breakdowns.
pub fn hour_bucket_key(log: &ErrorLog) -> Option<String> {
    Some(log.timestamp.format("%Y-%m-%d %H:00").to_string())
}

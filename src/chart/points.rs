//! src/chart/points.rs
//!
//! Labeled scatter points: normalization from the backend coordinate map and
//! merging of the baseline and queried populations.

use std::collections::BTreeMap;

use ratatui::style::Color;

/// Backend payload shape: label -> `[x, y]`.
///
/// A `BTreeMap` keeps iteration order stable for a given snapshot (sorted
/// keys), which is all the chart needs; the backend promises nothing about
/// order.
pub type RawCoordinateMap = BTreeMap<String, [f64; 2]>;

/// Which population a point belongs to. Display-only category, not identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointSource {
    /// Pro-player reference population, fetched once per session.
    Baseline,
    /// On-demand result for the searched player.
    Queried,
}

impl PointSource {
    /// The one source -> color table. Keeps styling policy out of the
    /// normalizer and merger.
    pub fn fill(self) -> Color {
        match self {
            PointSource::Baseline => Color::Cyan,
            PointSource::Queried => Color::Magenta,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PointSource::Baseline => "pros",
            PointSource::Queried => "you",
        }
    }
}

/// One chart point. `key` is unique within its source; a key colliding
/// across sources is a valid, retained duplicate (pro player vs. searched
/// player with the same name).
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub key: String,
    pub source: PointSource,
}

impl LabeledPoint {
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Turn a raw coordinate map into labeled points, one per entry, all tagged
/// with `source`. Empty map -> empty sequence, not an error.
pub fn normalize(raw: &RawCoordinateMap, source: PointSource) -> Vec<LabeledPoint> {
    raw.iter()
        .map(|(key, &[x, y])| LabeledPoint {
            x,
            y,
            key: key.clone(),
            source,
        })
        .collect()
}

/// Concatenate baseline and (optional) queried points, baseline first.
///
/// Queried points come last so an adapter drawing in sequence order paints
/// them on top. No deduplication across sources.
pub fn merge(baseline: &[LabeledPoint], queried: Option<&[LabeledPoint]>) -> Vec<LabeledPoint> {
    let mut out = Vec::with_capacity(baseline.len() + queried.map_or(0, |q| q.len()));
    out.extend_from_slice(baseline);
    if let Some(q) = queried {
        out.extend_from_slice(q);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, [f64; 2])]) -> RawCoordinateMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn normalize_maps_every_entry_once() {
        let m = raw(&[("Faker", [1.0, 2.0]), ("Caps", [3.0, 4.0])]);
        let points = normalize(&m, PointSource::Baseline);

        assert_eq!(points.len(), m.len());
        for (k, &[x, y]) in &m {
            let matches: Vec<_> = points
                .iter()
                .filter(|p| p.key == *k && p.x == x && p.y == y)
                .collect();
            assert_eq!(matches.len(), 1, "exactly one point for key {k}");
        }
        assert!(points.iter().all(|p| p.source == PointSource::Baseline));
    }

    #[test]
    fn normalize_empty_map_is_empty() {
        assert!(normalize(&RawCoordinateMap::new(), PointSource::Queried).is_empty());
    }

    #[test]
    fn normalize_order_is_stable_per_snapshot() {
        let m = raw(&[("b", [1.0, 1.0]), ("a", [2.0, 2.0]), ("c", [3.0, 3.0])]);
        assert_eq!(
            normalize(&m, PointSource::Baseline),
            normalize(&m, PointSource::Baseline)
        );
    }

    #[test]
    fn merge_without_queried_is_baseline() {
        let baseline = normalize(&raw(&[("Faker", [1.0, 2.0])]), PointSource::Baseline);
        assert_eq!(merge(&baseline, None), baseline);
    }

    #[test]
    fn merge_is_baseline_then_queried() {
        let baseline = normalize(
            &raw(&[("Caps", [3.0, 4.0]), ("Faker", [1.0, 2.0])]),
            PointSource::Baseline,
        );
        let queried = normalize(&raw(&[("Searched", [9.0, 9.0])]), PointSource::Queried);

        let merged = merge(&baseline, Some(&queried));
        assert_eq!(merged.len(), baseline.len() + queried.len());
        assert_eq!(&merged[..baseline.len()], &baseline[..]);
        assert_eq!(&merged[baseline.len()..], &queried[..]);
    }

    #[test]
    fn duplicate_key_across_sources_is_retained() {
        let baseline = normalize(&raw(&[("A", [0.0, 0.0])]), PointSource::Baseline);
        let queried = normalize(&raw(&[("A", [5.0, 5.0])]), PointSource::Queried);

        let merged = merge(&baseline, Some(&queried));
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|p| p.key == "A"));
        assert_ne!(merged[0].source, merged[1].source);
        assert_ne!(merged[0].source.fill(), merged[1].source.fill());
        assert_ne!(merged[0].xy(), merged[1].xy());
    }
}

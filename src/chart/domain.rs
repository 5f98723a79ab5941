//! src/chart/domain.rs
//!
//! Auto-fit viewing window over a point sequence.

use super::points::LabeledPoint;

/// Padding applied on every side of the fitted window so boundary points are
/// not clipped at the viewport edge.
pub const DOMAIN_PADDING: f64 = 1.0;

/// The rectangular coordinate range the chart viewport is fitted to.
///
/// Invariant: `min <= max` on each axis. An empty point sequence collapses
/// both axes to `(0, 0)`, which is degenerate but defined; the chart adapter
/// renders an empty canvas for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartDomain {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl ChartDomain {
    pub const EMPTY: ChartDomain = ChartDomain {
        x: (0.0, 0.0),
        y: (0.0, 0.0),
    };

    /// Fit a domain around `points` with [`DOMAIN_PADDING`] on each side.
    ///
    /// Pure function of its input; callers pass the union of all sources when
    /// a combined view is needed.
    pub fn fit(points: &[LabeledPoint]) -> ChartDomain {
        let Some(first) = points.first() else {
            return ChartDomain::EMPTY;
        };

        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;
        for p in points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        ChartDomain {
            x: (min_x - DOMAIN_PADDING, max_x + DOMAIN_PADDING),
            y: (min_y - DOMAIN_PADDING, max_y + DOMAIN_PADDING),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.0 == self.x.1 || self.y.0 == self.y.1
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x.0 + self.x.1) / 2.0, (self.y.0 + self.y.1) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::points::{PointSource, RawCoordinateMap, normalize};

    fn points(entries: &[(&str, [f64; 2])]) -> Vec<LabeledPoint> {
        let raw: RawCoordinateMap = entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        normalize(&raw, PointSource::Baseline)
    }

    #[test]
    fn fit_pads_one_unit_per_side() {
        let pts = points(&[("Faker", [1.0, 2.0]), ("Caps", [3.0, 4.0])]);
        let domain = ChartDomain::fit(&pts);
        assert_eq!(domain.x, (0.0, 4.0));
        assert_eq!(domain.y, (1.0, 5.0));
    }

    #[test]
    fn fit_of_empty_is_degenerate_zero() {
        let domain = ChartDomain::fit(&[]);
        assert_eq!(domain, ChartDomain::EMPTY);
        assert!(domain.is_empty());
    }

    #[test]
    fn fit_is_idempotent() {
        let pts = points(&[("a", [-2.5, 0.5]), ("b", [7.0, -3.0]), ("c", [0.0, 0.0])]);
        assert_eq!(ChartDomain::fit(&pts), ChartDomain::fit(&pts));
    }

    #[test]
    fn single_point_still_gets_padding() {
        let pts = points(&[("solo", [5.0, -5.0])]);
        let domain = ChartDomain::fit(&pts);
        assert_eq!(domain.x, (4.0, 6.0));
        assert_eq!(domain.y, (-6.0, -4.0));
        assert!(!domain.is_empty());
    }
}

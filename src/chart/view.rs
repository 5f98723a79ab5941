//! src/chart/view.rs
//!
//! Pan/zoom view transform applied on top of the fitted domain.
//!
//! The fitted [`ChartDomain`] stays a pure function of the points; the view
//! owns the interactive part (zoom factor and pan offset) and projects the
//! window to render each frame.

use super::domain::ChartDomain;

/// Multiplier applied per zoom step.
const ZOOM_STEP: f64 = 1.25;
/// Zoom factor bounds. 1.0 shows the whole fitted domain.
const ZOOM_MIN: f64 = 0.25;
const ZOOM_MAX: f64 = 64.0;
/// Pan step as a fraction of the currently visible extent.
const PAN_FRAC: f64 = 0.1;

/// Interactive view state. Fresh state (or [`ViewState::reset`]) shows the
/// fitted domain exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    zoom: f64,
    pan: (f64, f64),
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: (0.0, 0.0),
        }
    }
}

impl ViewState {
    /// Project the visible window for `domain` under the current transform.
    ///
    /// A degenerate domain is passed through untouched; there is nothing to
    /// zoom into and the chart draws an empty canvas for it anyway.
    pub fn window(&self, domain: ChartDomain) -> ChartDomain {
        if domain.is_empty() {
            return domain;
        }
        let (cx, cy) = domain.center();
        let half_x = (domain.x.1 - domain.x.0) / 2.0 / self.zoom;
        let half_y = (domain.y.1 - domain.y.0) / 2.0 / self.zoom;
        let cx = cx + self.pan.0;
        let cy = cy + self.pan.1;
        ChartDomain {
            x: (cx - half_x, cx + half_x),
            y: (cy - half_y, cy + half_y),
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(ZOOM_MIN);
    }

    /// Pan by `(dx, dy)` steps of the visible extent of `domain`.
    pub fn pan(&mut self, domain: ChartDomain, dx: f64, dy: f64) {
        if domain.is_empty() {
            return;
        }
        let span_x = (domain.x.1 - domain.x.0) / self.zoom;
        let span_y = (domain.y.1 - domain.y.0) / self.zoom;
        self.pan.0 += dx * span_x * PAN_FRAC;
        self.pan.1 += dy * span_y * PAN_FRAC;
    }

    /// Back to the fitted domain.
    pub fn reset(&mut self) {
        *self = ViewState::default();
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: ChartDomain = ChartDomain {
        x: (0.0, 4.0),
        y: (1.0, 5.0),
    };

    #[test]
    fn fresh_view_shows_fitted_domain() {
        assert_eq!(ViewState::default().window(DOMAIN), DOMAIN);
    }

    #[test]
    fn zoom_in_shrinks_window_around_center() {
        let mut view = ViewState::default();
        view.zoom_in();
        let w = view.window(DOMAIN);
        assert!(w.x.1 - w.x.0 < DOMAIN.x.1 - DOMAIN.x.0);
        assert_eq!(w.center(), DOMAIN.center());
    }

    #[test]
    fn pan_then_reset_restores_fitted_domain() {
        let mut view = ViewState::default();
        view.pan(DOMAIN, 2.0, -1.0);
        view.zoom_in();
        assert_ne!(view.window(DOMAIN), DOMAIN);
        view.reset();
        assert_eq!(view.window(DOMAIN), DOMAIN);
    }

    #[test]
    fn degenerate_domain_passes_through() {
        let mut view = ViewState::default();
        view.zoom_in();
        view.pan(ChartDomain::EMPTY, 1.0, 1.0);
        assert_eq!(view.window(ChartDomain::EMPTY), ChartDomain::EMPTY);
    }

    #[test]
    fn zoom_out_is_clamped() {
        let mut view = ViewState::default();
        for _ in 0..100 {
            view.zoom_out();
        }
        assert!(view.zoom_factor() >= 0.25);
    }
}

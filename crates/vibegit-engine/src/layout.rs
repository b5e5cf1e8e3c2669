use serde::Serialize;

/// Geometry of the decorative axis joining the first and last round marker.
///
/// Units are whatever the caller measured in (pixels, terminal rows).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLayout {
    /// Offset of the first marker within its container
    pub start: f64,
    /// Distance from the first marker to the last one
    pub span: f64,
}

impl AxisLayout {
    pub fn end(&self) -> f64 {
        self.start + self.span
    }

    /// Whether `offset` lies on the axis (inclusive)
    pub fn covers(&self, offset: f64) -> bool {
        let (lo, hi) = if self.span >= 0.0 {
            (self.start, self.end())
        } else {
            (self.end(), self.start)
        };
        offset >= lo && offset <= hi
    }
}

/// Derive the axis from marker offsets, in render order.
///
/// Returns `None` when nothing is rendered. A single marker yields a zero span.
pub fn axis_layout(markers: &[f64]) -> Option<AxisLayout> {
    let first = *markers.first()?;
    let last = *markers.last()?;
    Some(AxisLayout {
        start: first,
        span: last - first,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_spans_first_to_last() {
        let layout = axis_layout(&[10.0, 40.0, 90.0]).unwrap();
        assert_eq!(layout.start, 10.0);
        assert_eq!(layout.span, 80.0);
        assert_eq!(layout.end(), 90.0);
    }

    #[test]
    fn test_single_marker_has_zero_span() {
        let layout = axis_layout(&[24.0]).unwrap();
        assert_eq!(layout.start, 24.0);
        assert_eq!(layout.span, 0.0);
        assert!(layout.covers(24.0));
        assert!(!layout.covers(25.0));
    }

    #[test]
    fn test_no_markers() {
        assert!(axis_layout(&[]).is_none());
    }

    #[test]
    fn test_covers() {
        let layout = axis_layout(&[2.0, 5.0]).unwrap();
        assert!(layout.covers(2.0));
        assert!(layout.covers(3.5));
        assert!(layout.covers(5.0));
        assert!(!layout.covers(1.0));
        assert!(!layout.covers(6.0));
    }
}

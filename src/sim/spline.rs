//! Closed smooth-outline builder
//!
//! Turns a ring of boundary points into a cardinal spline (Catmull-Rom at
//! tension 1): one cubic Bezier per consecutive point pair, control points
//! derived from the two surrounding neighbors. The curve passes through every
//! input point and is tangent-continuous at each, so the outline reads as
//! organic rather than polygonal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One cubic Bezier piece; the implicit start is the previous segment's end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub ctrl1: Vec2,
    pub ctrl2: Vec2,
    pub end: Vec2,
}

/// A drawable curve: a start point plus chained cubic segments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    pub start: Vec2,
    pub segments: Vec<CurveSegment>,
}

impl CurvePath {
    /// Last drawn coordinate (the start itself when there are no segments)
    pub fn end_point(&self) -> Vec2 {
        self.segments.last().map_or(self.start, |s| s.end)
    }

    /// A path is closed when it ends exactly where it started
    pub fn is_closed(&self) -> bool {
        !self.segments.is_empty() && self.end_point() == self.start
    }

    /// Render as an SVG path string (`M .. C ..`, `z`-terminated when closed)
    pub fn to_svg_path(&self) -> String {
        use std::fmt::Write;
        let mut path = format!("M{} {}", self.start.x, self.start.y);
        if !self.segments.is_empty() {
            path.push_str(" C");
            for seg in &self.segments {
                let _ = write!(
                    path,
                    " {} {} {} {} {} {}",
                    seg.ctrl1.x, seg.ctrl1.y, seg.ctrl2.x, seg.ctrl2.y, seg.end.x, seg.end.y
                );
            }
        }
        if self.is_closed() {
            path.push('z');
        }
        path
    }
}

/// Build a cardinal spline through `points`, treated as a ring when `closed`
///
/// For the segment `p1 -> p2` with neighbors `p0` and `p3`:
/// `ctrl1 = p1 + tension * (p2 - p0) / 6`, `ctrl2 = p2 - tension * (p3 - p1) / 6`.
/// Open curves clamp the neighbors at the ends. An empty input yields a
/// degenerate single-point path at the origin. Pure; the logical ring order of
/// the input decides the outline.
pub fn cardinal(points: &[Vec2], closed: bool, tension: f32) -> CurvePath {
    let n = points.len();
    if n == 0 {
        return CurvePath::default();
    }
    let size = if closed { n } else { n - 1 };
    let mut segments = Vec::with_capacity(size);
    for i in 0..size {
        let (p0, p1, p2, p3) = if closed {
            (
                points[(i + n - 1) % n],
                points[i],
                points[(i + 1) % n],
                points[(i + 2) % n],
            )
        } else {
            let p2 = points[i + 1];
            (
                points[i.saturating_sub(1)],
                points[i],
                p2,
                if i + 2 < n { points[i + 2] } else { p2 },
            )
        };
        segments.push(CurveSegment {
            ctrl1: p1 + (p2 - p0) * (tension / 6.0),
            ctrl2: p2 - (p3 - p1) * (tension / 6.0),
            end: p2,
        });
    }
    CurvePath {
        start: points[0],
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_empty_input_is_degenerate_point() {
        let path = cardinal(&[], true, 1.0);
        assert_eq!(path.start, Vec2::ZERO);
        assert!(path.segments.is_empty());
        assert!(!path.is_closed());
        assert_eq!(path.to_svg_path(), "M0 0");
    }

    #[test]
    fn test_closed_ring_is_closed() {
        let path = cardinal(&square(), true, 1.0);
        assert_eq!(path.segments.len(), 4);
        assert!(path.is_closed());
        assert_eq!(path.end_point(), path.start);
    }

    #[test]
    fn test_curve_passes_through_every_input_point() {
        let points = square();
        let path = cardinal(&points, true, 1.0);
        assert_eq!(path.start, points[0]);
        for (i, seg) in path.segments.iter().enumerate() {
            assert_eq!(seg.end, points[(i + 1) % points.len()]);
        }
    }

    #[test]
    fn test_zero_tension_degenerates_to_straight_lines() {
        let points = square();
        let path = cardinal(&points, true, 0.0);
        for (i, seg) in path.segments.iter().enumerate() {
            assert_eq!(seg.ctrl1, points[i]);
            assert_eq!(seg.ctrl2, seg.end);
        }
    }

    #[test]
    fn test_open_curve_has_one_fewer_segment() {
        let points = square();
        let path = cardinal(&points, false, 1.0);
        assert_eq!(path.segments.len(), 3);
        assert!(!path.is_closed());
        assert_eq!(path.end_point(), points[3]);
    }

    #[test]
    fn test_single_point_ring() {
        let p = Vec2::new(5.0, 7.0);
        let path = cardinal(&[p], true, 1.0);
        assert_eq!(path.start, p);
        assert_eq!(path.segments.len(), 1);
        assert!(path.is_closed());
    }

    #[test]
    fn test_svg_path_shape() {
        let path = cardinal(&square(), true, 1.0);
        let svg = path.to_svg_path();
        assert!(svg.starts_with("M0 0 C"));
        assert!(svg.ends_with('z'));
    }

    #[test]
    fn test_ring_order_changes_outline() {
        let forward = cardinal(&square(), true, 1.0);
        let mut reversed = square();
        reversed.reverse();
        let backward = cardinal(&reversed, true, 1.0);
        assert_ne!(forward, backward);
    }
}

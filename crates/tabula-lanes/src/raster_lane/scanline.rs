// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scanline span generation.
//!
//! Every shape is sampled at pixel-row centers (`row + 0.5`). A row produces
//! zero or more [`Span`]s, each one pixel tall.

use std::ops::Range;

use tabula_core::math::Vec2;

/// Spans narrower than this are dropped.
const MIN_SPAN_WIDTH: f32 = 1e-3;

/// A row window that clips nothing.
pub const ALL_ROWS: Range<i32> = i32::MIN..i32::MAX;

/// A horizontal run of pixels on a single row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// The row, i.e. the top edge of the span.
    pub y: i32,
    /// Left edge, in pixels.
    pub x0: f32,
    /// Right edge, in pixels. Always greater than `x0`.
    pub x1: f32,
}

impl Span {
    /// Width of the span in pixels.
    #[inline]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }
}

fn push_span(spans: &mut Vec<Span>, y: i32, x0: f32, x1: f32) {
    if x1 - x0 > MIN_SPAN_WIDTH {
        spans.push(Span { y, x0, x1 });
    }
}

/// The rows touched by `[min_y, max_y)`, restricted to `window`.
fn row_range(min_y: f32, max_y: f32, window: &Range<i32>) -> Range<i32> {
    let start = (min_y.floor() as i32).max(window.start);
    let end = (max_y.ceil() as i32).min(window.end);
    start..end.max(start)
}

fn is_finite(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Half-width of the circle of `radius` at vertical distance `dy` from its center.
#[inline]
fn half_chord(radius: f32, dy: f32) -> Option<f32> {
    let sq = radius * radius - dy * dy;
    (sq > 0.0).then(|| sq.sqrt())
}

/// Computes the spans covering a filled circle, limited to the rows in `rows`.
///
/// Each row's extent is `sqrt(r² - dy²)` on either side of the center.
/// A radius `<= 0`, or any non-finite input, yields no spans.
pub fn circle_spans(center: Vec2, radius: f32, rows: Range<i32>) -> Vec<Span> {
    if !(radius > 0.0) || !radius.is_finite() || !is_finite(center) {
        return Vec::new();
    }
    let rows = row_range(center.y - radius, center.y + radius, &rows);
    let mut spans = Vec::with_capacity(rows.len());
    for row in rows {
        let dy = row as f32 + 0.5 - center.y;
        if let Some(half) = half_chord(radius, dy) {
            push_span(&mut spans, row, center.x - half, center.x + half);
        }
    }
    spans
}

/// Computes the spans covering a ring of outer `radius` and thickness `width`,
/// limited to the rows in `rows`.
///
/// Rows crossing the hole produce two spans; rows above and below it produce
/// one. A `width` reaching the center degenerates into a filled circle, and a
/// `width <= 0` or any non-finite input yields no spans.
pub fn ring_spans(center: Vec2, radius: f32, width: f32, rows: Range<i32>) -> Vec<Span> {
    if !(width > 0.0) || !width.is_finite() {
        return Vec::new();
    }
    let inner = radius - width;
    if !(inner > 0.0) {
        return circle_spans(center, radius, rows);
    }
    if !radius.is_finite() || !is_finite(center) {
        return Vec::new();
    }
    let mut spans = Vec::new();
    for row in row_range(center.y - radius, center.y + radius, &rows) {
        let dy = row as f32 + 0.5 - center.y;
        let Some(outer_half) = half_chord(radius, dy) else {
            continue;
        };
        match half_chord(inner, dy) {
            Some(inner_half) => {
                push_span(&mut spans, row, center.x - outer_half, center.x - inner_half);
                push_span(&mut spans, row, center.x + inner_half, center.x + outer_half);
            }
            None => push_span(&mut spans, row, center.x - outer_half, center.x + outer_half),
        }
    }
    spans
}

/// Computes the spans covering a filled polygon with the even-odd rule,
/// limited to the rows in `rows`.
///
/// For each row the crossings of every edge with the row center are sorted
/// and paired. Self-intersecting polygons render per the even-odd rule, not
/// nonzero winding. Fewer than three points, or any non-finite point, yields
/// no spans, and collinear points yield no visible span.
pub fn polygon_spans(points: &[Vec2], rows: Range<i32>) -> Vec<Span> {
    if points.len() < 3 || !points.iter().all(|&p| is_finite(p)) {
        return Vec::new();
    }
    let (min_y, max_y) = points
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });

    let mut spans = Vec::new();
    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
    for row in row_range(min_y, max_y, &rows) {
        let y = row as f32 + 0.5;
        crossings.clear();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            if (a.y > y) != (b.y > y) {
                crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        crossings.sort_by(f32::total_cmp);
        for pair in crossings.chunks_exact(2) {
            push_span(&mut spans, row, pair[0], pair[1]);
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::math::{FRAC_PI_2, PI};

    #[test]
    fn test_circle_non_positive_radius_is_empty() {
        assert!(circle_spans(Vec2::new(10.0, 10.0), 0.0, ALL_ROWS).is_empty());
        assert!(circle_spans(Vec2::new(10.0, 10.0), -3.0, ALL_ROWS).is_empty());
        assert!(circle_spans(Vec2::new(10.0, 10.0), f32::NAN, ALL_ROWS).is_empty());
    }

    #[test]
    fn test_circle_spans_are_symmetric_and_bounded() {
        let center = Vec2::new(20.0, 20.0);
        let spans = circle_spans(center, 10.0, ALL_ROWS);
        assert_eq!(spans.len(), 20);
        for span in &spans {
            assert!((center.x - span.x0 - (span.x1 - center.x)).abs() < 1e-4);
            assert!(span.width() <= 20.0);
            assert!(span.y >= 10 && span.y < 30);
        }
        // The widest rows sit next to the center.
        let widest = spans.iter().map(|s| s.width()).fold(0.0, f32::max);
        assert!(widest > 19.9);
    }

    #[test]
    fn test_ring_has_two_spans_through_hole() {
        let center = Vec2::new(50.0, 50.0);
        let spans = ring_spans(center, 20.0, 5.0, ALL_ROWS);
        let middle_row: Vec<_> = spans.iter().filter(|s| s.y == 50).collect();
        assert_eq!(middle_row.len(), 2);
        assert!(middle_row[0].x1 <= middle_row[1].x0);
        // Top row lies above the hole.
        let top: Vec<_> = spans.iter().filter(|s| s.y == 30).collect();
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_thick_ring_is_filled_circle() {
        let center = Vec2::new(5.0, 5.0);
        assert_eq!(ring_spans(center, 4.0, 10.0, ALL_ROWS), circle_spans(center, 4.0, ALL_ROWS));
        assert!(ring_spans(center, 4.0, 0.0, ALL_ROWS).is_empty());
    }

    #[test]
    fn test_polygon_needs_three_points() {
        assert!(polygon_spans(&[], ALL_ROWS).is_empty());
        assert!(polygon_spans(&[Vec2::ZERO, Vec2::new(10.0, 10.0)], ALL_ROWS).is_empty());
    }

    #[test]
    fn test_polygon_collinear_points_have_no_area() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0)];
        assert!(polygon_spans(&points, ALL_ROWS).is_empty());

        let horizontal = [Vec2::new(0.0, 3.0), Vec2::new(5.0, 3.0), Vec2::new(9.0, 3.0)];
        assert!(polygon_spans(&horizontal, ALL_ROWS).is_empty());
    }

    #[test]
    fn test_polygon_square_fills_every_row() {
        let square = [
            Vec2::new(2.0, 2.0),
            Vec2::new(12.0, 2.0),
            Vec2::new(12.0, 12.0),
            Vec2::new(2.0, 12.0),
        ];
        let spans = polygon_spans(&square, ALL_ROWS);
        assert_eq!(spans.len(), 10);
        for span in spans {
            assert_eq!(span.x0, 2.0);
            assert_eq!(span.x1, 12.0);
        }
    }

    #[test]
    fn test_polygon_self_intersection_uses_even_odd() {
        // A five-pointed star drawn as a single stroke leaves its pentagon
        // center unfilled under the even-odd rule.
        let center = Vec2::new(50.0, 50.0);
        let star: Vec<Vec2> = (0..5)
            .map(|i| {
                let angle = -FRAC_PI_2 + i as f32 * 4.0 * PI / 5.0;
                center + Vec2::from_angle(angle) * 40.0
            })
            .collect();
        let spans = polygon_spans(&star, ALL_ROWS);
        let covers_center = spans
            .iter()
            .any(|s| s.y == 50 && s.x0 <= 50.0 && s.x1 >= 50.0);
        assert!(!covers_center);
        assert!(!spans.is_empty());
    }

    #[test]
    fn test_non_finite_input_is_empty() {
        assert!(circle_spans(Vec2::ZERO, f32::INFINITY, ALL_ROWS).is_empty());
        assert!(circle_spans(Vec2::new(f32::NAN, 0.0), 5.0, ALL_ROWS).is_empty());
        assert!(ring_spans(Vec2::ZERO, f32::INFINITY, 2.0, ALL_ROWS).is_empty());
        assert!(ring_spans(Vec2::new(0.0, f32::INFINITY), 10.0, 2.0, ALL_ROWS).is_empty());
        assert!(ring_spans(Vec2::ZERO, 10.0, f32::INFINITY, ALL_ROWS).is_empty());
        let triangle = [Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(2.0, f32::INFINITY)];
        assert!(polygon_spans(&triangle, ALL_ROWS).is_empty());
    }

    #[test]
    fn test_rows_are_limited_to_the_window() {
        let sliver = [Vec2::ZERO, Vec2::new(2.0, 0.0), Vec2::new(1.0, 5e6)];
        let spans = polygon_spans(&sliver, 0..100);
        assert_eq!(spans.len(), 100);
        assert!(spans.iter().all(|s| (0..100).contains(&s.y)));

        let circle = circle_spans(Vec2::new(50.0, 50.0), 40.0, 45..48);
        assert_eq!(circle.iter().map(|s| s.y).collect::<Vec<_>>(), vec![45, 46, 47]);
        assert!(ring_spans(Vec2::new(50.0, 50.0), 40.0, 4.0, 200..300).is_empty());
        assert!(circle_spans(Vec2::new(50.0, 50.0), 40.0, 10..5).is_empty());
    }
}

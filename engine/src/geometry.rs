//! Geometry primitives: rectangles, line segments, points, and the handful of
//! pure operations the rest of the engine is built from.

use geo::Point as GeoPoint;

/// `Tolerance` governs every "approximately equal" comparison in the engine.
pub const TOLERANCE: f64 = 3.0;

/// A minimum length a ruling candidate must clear on its long axis to avoid
/// being mistaken for stray vector decoration (logos, underlines, etc.).
pub const MIN_RULING_LENGTH: f64 = 10.0;

/// A point in page units. A thin wrapper over `geo::Point` so the rest of the
/// crate gets `.x()`/`.y()` without re-deriving point arithmetic by hand.
pub type Point = GeoPoint<f64>;

pub fn point(x: f64, y: f64) -> Point {
    GeoPoint::new(x, y)
}

pub fn points_within_tolerance(a: Point, b: Point) -> bool {
    euclidean_distance(a, b) < TOLERANCE
}

pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    ((a.x() - b.x()).powi(2) + (a.y() - b.y()).powi(2)).sqrt()
}

/// An axis-aligned line segment. Not necessarily horizontal or vertical —
/// `intersect_lines` handles the general case, though in practice the grid
/// reconstructor only ever feeds it horizontal/vertical rulings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn dx(&self) -> f64 {
        self.end.x() - self.start.x()
    }

    pub fn dy(&self) -> f64 {
        self.end.y() - self.start.y()
    }

    pub fn length(&self) -> f64 {
        euclidean_distance(self.start, self.end)
    }
}

/// An axis-aligned rectangle. `(x, y)` is the lower-left corner once the page
/// has been normalized (§4.E); before normalization it is simply "one corner".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const ZERO: Rectangle = Rectangle { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle is a horizontal ruling when its height has collapsed to
    /// (near) zero but it still spans a meaningful length.
    pub fn is_horizontal_ruling(&self) -> bool {
        self.height <= TOLERANCE && self.width >= MIN_RULING_LENGTH
    }

    /// A rectangle is a vertical ruling when its width has collapsed to (near)
    /// zero but it still spans a meaningful length.
    pub fn is_vertical_ruling(&self) -> bool {
        self.width <= TOLERANCE && self.height >= MIN_RULING_LENGTH
    }

    pub fn top_left(&self) -> Point {
        point(self.x, self.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Intersection rectangle of `r1` and `r2`, or the zero rectangle when they
/// are disjoint.
pub fn intersect_rectangles(r1: Rectangle, r2: Rectangle) -> Rectangle {
    let x0 = r1.x.max(r2.x);
    let y0 = r1.y.max(r2.y);
    let x1 = r1.right().min(r2.right());
    let y1 = r1.bottom().min(r2.bottom());

    if x1 <= x0 || y1 <= y0 {
        Rectangle::ZERO
    } else {
        Rectangle::new(x0, y0, x1 - x0, y1 - y0)
    }
}

pub fn area(r: Rectangle) -> f64 {
    r.width * r.height
}

/// Intersection point of two line segments, present only when both segments
/// have non-zero length, are not parallel, and the intersection parameter on
/// both lies in `[0, 1]`.
pub fn intersect_lines(l1: Line, l2: Line) -> Option<Point> {
    if l1.length() == 0.0 || l2.length() == 0.0 {
        return None;
    }

    let (x1, y1) = (l1.start.x(), l1.start.y());
    let (x2, y2) = (l1.end.x(), l1.end.y());
    let (x3, y3) = (l2.start.x(), l2.start.y());
    let (x4, y4) = (l2.end.x(), l2.end.y());

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0.0 {
        return None; // parallel (or coincident)
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = ((x1 - x3) * (y1 - y2) - (y1 - y3) * (x1 - x2)) / denom;

    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(point(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
}

/// Percentage overlap of the x-projections of `r1` and `r2`, zero if either
/// width is zero or the projections are disjoint.
pub fn horizontal_overlap_percent(r1: Rectangle, r2: Rectangle) -> f64 {
    if r1.width <= 0.0 || r2.width <= 0.0 {
        return 0.0;
    }

    let overlap_start = r1.x.max(r2.x);
    let overlap_end = r1.right().min(r2.right());
    let overlap_width = (overlap_end - overlap_start).max(0.0);
    if overlap_width <= 0.0 {
        return 0.0;
    }

    let union_start = r1.x.min(r2.x);
    let union_end = r1.right().max(r2.right());
    let union_width = union_end - union_start;
    if union_width <= 0.0 {
        return 0.0;
    }

    100.0 * overlap_width / union_width
}

/// Percentage of `a`'s area contained within `b`. Zero if `a` has zero area.
pub fn percent_of_a_in_b(a: Rectangle, b: Rectangle) -> f64 {
    let a_area = area(a);
    if a_area <= 0.0 {
        return 0.0;
    }
    100.0 * area(intersect_rectangles(a, b)) / a_area
}

/// Clockwise 90° rotation of a rectangle: `(x, y, w, h) -> (-(y+h), x, h, w)`.
pub fn rotate90_clockwise(r: Rectangle) -> Rectangle {
    Rectangle::new(-(r.y + r.height), r.x, r.height, r.width)
}

/// Quantized `y` bucket of width `Tolerance`, shared by every component that
/// needs to group rectangles into rows (grid cells, text elements) before
/// sorting by `x` within the bucket.
pub fn y_bucket(y: f64) -> i64 {
    (y / TOLERANCE).floor() as i64
}

/// The reading-order comparator used throughout C, F and G: `y` bucket first,
/// then `x` ascending.
pub fn cmp_reading_order(a: (f64, f64), b: (f64, f64)) -> std::cmp::Ordering {
    y_bucket(a.1)
        .cmp(&y_bucket(b.1))
        .then_with(|| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_rectangles_disjoint_is_zero() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(20.0, 20.0, 5.0, 5.0);
        assert_eq!(intersect_rectangles(a, b), Rectangle::ZERO);
    }

    #[test]
    fn intersect_rectangles_overlapping() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        let i = intersect_rectangles(a, b);
        assert_eq!(i, Rectangle::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn area_of_zero_rect_is_zero() {
        assert_eq!(area(Rectangle::ZERO), 0.0);
    }

    #[test]
    fn intersect_lines_crossing_segments() {
        let l1 = Line::new(point(0.0, 0.0), point(10.0, 10.0));
        let l2 = Line::new(point(0.0, 10.0), point(10.0, 0.0));
        let p = intersect_lines(l1, l2).expect("segments cross");
        assert!((p.x() - 5.0).abs() < 1e-9);
        assert!((p.y() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn intersect_lines_parallel_is_none() {
        let l1 = Line::new(point(0.0, 0.0), point(10.0, 0.0));
        let l2 = Line::new(point(0.0, 5.0), point(10.0, 5.0));
        assert!(intersect_lines(l1, l2).is_none());
    }

    #[test]
    fn intersect_lines_outside_segment_is_none() {
        let l1 = Line::new(point(0.0, 0.0), point(1.0, 1.0));
        let l2 = Line::new(point(5.0, 0.0), point(5.0, -5.0));
        assert!(intersect_lines(l1, l2).is_none());
    }

    #[test]
    fn horizontal_overlap_of_identical_rects_is_full() {
        let r = Rectangle::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(horizontal_overlap_percent(r, r), 100.0);
    }

    #[test]
    fn horizontal_overlap_of_disjoint_rects_is_zero() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 5.0);
        let b = Rectangle::new(20.0, 0.0, 10.0, 5.0);
        assert_eq!(horizontal_overlap_percent(a, b), 0.0);
    }

    #[test]
    fn percent_of_a_in_b_half_contained() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 0.0, 10.0, 10.0);
        assert_eq!(percent_of_a_in_b(a, b), 50.0);
    }

    #[test]
    fn rotate90_clockwise_matches_formula() {
        let r = Rectangle::new(2.0, 3.0, 4.0, 5.0);
        let rotated = rotate90_clockwise(r);
        assert_eq!(rotated, Rectangle::new(-(3.0 + 5.0), 2.0, 5.0, 4.0));
    }

    #[test]
    fn ruling_classification() {
        assert!(Rectangle::new(0.0, 0.0, 50.0, 1.0).is_horizontal_ruling());
        assert!(Rectangle::new(0.0, 0.0, 1.0, 50.0).is_vertical_ruling());
        assert!(!Rectangle::new(0.0, 0.0, 4.0, 2.0).is_horizontal_ruling());
        assert!(!Rectangle::new(0.0, 0.0, 4.0, 2.0).is_vertical_ruling());
    }
}

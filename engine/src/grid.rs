//! Component C: the grid reconstructor. Turns the rectangles committed by B
//! into cells, by classifying rulings, collapsing their endpoints and
//! pairwise intersections into a canonical point set, and walking each
//! point's nearest right/down neighbours to emit cells.
//!
//! The grid is reconstructed as the transitive closure of alignment, not by
//! assuming a rectangular matrix — near-duplicate cells arising from minor
//! coordinate noise are acceptable and are disambiguated downstream by the
//! binder's ownership rule (§4.F).

use crate::geometry::{self, intersect_lines, point, Line, Point, Rectangle, TOLERANCE};
use crate::model::Cell;

/// Reconstructs cells from the rectangles a page's vector paths committed.
/// Rectangles that aren't thin enough to be rulings (stray decoration) are
/// discarded (§4.C.1).
pub fn build_cells(rectangles: &[Rectangle]) -> Vec<Cell> {
    let (horizontals, verticals) = classify_rulings(rectangles);
    let points = seed_points(&horizontals, &verticals);

    let mut cells: Vec<Cell> = points
        .iter()
        .filter_map(|&p| build_cell_at(p, &points))
        .collect();

    sort_cells(&mut cells);
    cells
}

fn classify_rulings(rectangles: &[Rectangle]) -> (Vec<Line>, Vec<Line>) {
    let mut horizontals = Vec::new();
    let mut verticals = Vec::new();

    for &r in rectangles {
        if r.is_horizontal_ruling() {
            horizontals.push(Line::new(point(r.x, r.y), point(r.right(), r.y)));
        } else if r.is_vertical_ruling() {
            verticals.push(Line::new(point(r.x, r.y), point(r.x, r.bottom())));
        }
    }

    horizontals.sort_by(|a, b| a.start.y().partial_cmp(&b.start.y()).unwrap());
    verticals.sort_by(|a, b| a.start.x().partial_cmp(&b.start.x()).unwrap());
    (horizontals, verticals)
}

/// Builds the canonical point set: both endpoints of every ruling, plus every
/// horizontal/vertical intersection, with near-duplicates (within
/// `Tolerance`) collapsed by linear scan (§4.C.3–4).
fn seed_points(horizontals: &[Line], verticals: &[Line]) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();

    for line in horizontals.iter().chain(verticals.iter()) {
        push_unique(&mut points, line.start);
        push_unique(&mut points, line.end);
    }

    for h in horizontals {
        for v in verticals {
            if let Some(p) = intersect_lines(*h, *v) {
                push_unique(&mut points, p);
            }
        }
    }

    points
}

fn push_unique(points: &mut Vec<Point>, p: Point) {
    if !points.iter().any(|&q| geometry::points_within_tolerance(p, q)) {
        points.push(p);
    }
}

/// Emits the cell anchored at `p`, if both a right and a down neighbour exist
/// among `points` (§4.C.5). Neighbours are matched on the orthogonal
/// coordinate within `Tolerance`, not exact equality, since the point set was
/// only collapsed to that precision.
fn build_cell_at(p: Point, points: &[Point]) -> Option<Cell> {
    let right = points
        .iter()
        .filter(|&&q| q.x() > p.x() && (q.y() - p.y()).abs() < TOLERANCE)
        .min_by(|a, b| a.x().partial_cmp(&b.x()).unwrap())
        .copied()?;

    let down = points
        .iter()
        .filter(|&&q| q.y() > p.y() && (q.x() - p.x()).abs() < TOLERANCE)
        .min_by(|a, b| a.y().partial_cmp(&b.y()).unwrap())
        .copied()?;

    Some(Cell::new(Rectangle::new(p.x(), p.y(), right.x() - p.x(), down.y() - p.y())))
}

/// Sorts `cells` into reading order (§4.C.6): `y` bucket first, then `x`
/// ascending. Callers must re-run this after any step that moves cells
/// across the `y` axis — notably page normalization (§4.E), which inverts
/// `y` and so reverses the order `build_cells` established.
pub fn sort_cells(cells: &mut [Cell]) {
    cells.sort_by(|a, b| geometry::cmp_reading_order((a.rect.x, a.rect.y), (b.rect.x, b.rect.y)));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the ruling rectangles for a uniform grid whose column
    /// boundaries are `x_bounds` and row boundaries are `y_bounds` (both
    /// ascending), in whatever coordinate space the caller wants the
    /// resulting cells expressed in.
    fn rulings_for_grid(x_bounds: &[f64], y_bounds: &[f64]) -> Vec<Rectangle> {
        let x0 = x_bounds[0];
        let xn = *x_bounds.last().unwrap();
        let y0 = y_bounds[0];
        let yn = *y_bounds.last().unwrap();

        let mut rects = Vec::new();
        for &y in y_bounds {
            rects.push(Rectangle::new(x0, y, xn - x0, 0.0));
        }
        for &x in x_bounds {
            rects.push(Rectangle::new(x, y0, 0.0, yn - y0));
        }
        rects
    }

    #[test]
    fn two_by_two_grid_yields_four_cells() {
        let rulings = rulings_for_grid(&[0.0, 100.0, 250.0], &[0.0, 20.0, 40.0]);
        let cells = build_cells(&rulings);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].rect, Rectangle::new(0.0, 0.0, 100.0, 20.0));
        assert_eq!(cells[1].rect, Rectangle::new(100.0, 0.0, 150.0, 20.0));
        assert_eq!(cells[2].rect, Rectangle::new(0.0, 20.0, 100.0, 20.0));
        assert_eq!(cells[3].rect, Rectangle::new(100.0, 20.0, 150.0, 20.0));
    }

    #[test]
    fn stray_short_rectangles_are_rejected() {
        let mut rulings = rulings_for_grid(&[0.0, 100.0, 250.0], &[0.0, 20.0, 40.0]);
        // A logo: width 4 and height 2, well under MIN_RULING_LENGTH on both axes.
        for _ in 0..5 {
            rulings.push(Rectangle::new(1000.0, 1000.0, 4.0, 2.0));
        }
        let cells = build_cells(&rulings);
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn coincident_endpoints_collapse_to_one_point() {
        let rulings = rulings_for_grid(&[0.0, 100.0], &[0.0, 20.0]);
        let horizontals_and_verticals = rulings.len();
        assert_eq!(horizontals_and_verticals, 4);
        let cells = build_cells(&rulings);
        // A single 1x1 grid has exactly 4 points, not 8 (shared corners).
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].rect, Rectangle::new(0.0, 0.0, 100.0, 20.0));
    }

    #[test]
    fn empty_input_yields_no_cells() {
        assert!(build_cells(&[]).is_empty());
    }
}

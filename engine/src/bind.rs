//! Component F: the cell-element binder. Assigns each text element to the
//! first cell — in reading order — containing more than 50% of its area
//! (§4.F). An element matching no cell is discarded; it contributes nothing
//! to any row.

use crate::geometry::{cmp_reading_order, percent_of_a_in_b};
use crate::model::{Cell, Element};

/// Binds `elements` into `cells` in place. Callers must pass elements already
/// in reading order (see [`crate::geometry::cmp_reading_order`]) — the
/// within-cell element order is exactly the order elements are bound in, and
/// that is what preserves multi-line reading order inside a cell (§4.F).
pub fn bind_elements(cells: &mut [Cell], elements: Vec<Element>) {
    for element in elements {
        if let Some(cell) = cells
            .iter_mut()
            .find(|cell| percent_of_a_in_b(element.rect, cell.rect) > 50.0)
        {
            cell.elements.push(element);
        }
    }
}

/// Sorts `elements` into reading order, the form [`bind_elements`] expects.
pub fn sort_reading_order(elements: &mut [Element]) {
    elements.sort_by(|a, b| cmp_reading_order((a.rect.x, a.rect.y), (b.rect.x, b.rect.y)));
}

//! Component E: the page normalizer. Inverts the PDF's bottom-up Y axis into
//! a screen-style top-down one, and — when the page declares a 90° rotation —
//! rotates cells and elements, applying an additional empirical correction to
//! elements alone (§4.E, §9). This step is non-optional: every comparator
//! tie-break downstream assumes top-down `y`.

use crate::geometry::{rotate90_clockwise, Rectangle};
use crate::model::{Cell, Element};

/// Normalizes `cells` and `elements` in place for the page's declared
/// rotation. Rotations other than 0 and 90 degrees are unsupported (§4.E);
/// the Y-axis inversion still applies, but no rotation transform is, which
/// may leave the page's geometry nonsensical and yield zero extracted rows
/// (§7) — an accepted outcome, not a crash.
pub fn normalize_page(cells: &mut [Cell], elements: &mut [Element], rotate: i32) {
    for cell in cells.iter_mut() {
        invert_y(&mut cell.rect);
    }
    for element in elements.iter_mut() {
        invert_y(&mut element.rect);
    }

    match rotate {
        0 => {}
        90 => {
            for cell in cells.iter_mut() {
                cell.rect = rotate90_clockwise(cell.rect);
            }
            for element in elements.iter_mut() {
                element.rect = rotate_element(element.rect);
            }
        }
        other => {
            tracing::warn!(rotate = other, "unsupported page rotation; extraction may yield zero rows");
        }
    }
}

fn invert_y(rect: &mut Rectangle) {
    rect.y = -(rect.y + rect.height);
}

/// Rotates an element's rectangle, then applies the empirical correction
/// `(y, width, height) <- (y - width, height, width)` that realigns glyph
/// runs emitted under the rotated font transform. The justification for this
/// correction beyond "experimentation" is unclear in the source system; it is
/// preserved here as specified (§9).
fn rotate_element(rect: Rectangle) -> Rectangle {
    let rotated = rotate90_clockwise(rect);
    Rectangle::new(rotated.x, rotated.y - rotated.width, rotated.height, rotated.width)
}

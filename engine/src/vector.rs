//! Component B: the vector path extractor. Walks a page's operator stream,
//! maintaining a transform stack, and emits every filled axis-aligned
//! rectangle it finds. These rectangles feed the grid reconstructor (§4.C),
//! which decides which of them are actually rulings.

use crate::geometry::Rectangle;
use crate::pdf::{Matrix, Operator, OperatorList, PathSubOp};

/// Extracts the filled rectangles committed by `fill`/`eoFill` operators,
/// in page coordinates (post-transform, pre-normalization).
///
/// Tolerant by design: a malformed sequence (e.g. a `fill` with no preceding
/// `constructPath`, or a `restore` with an empty stack) silently drops the
/// current rectangle rather than aborting the whole page (§4.B, §7).
pub fn extract_rectangles(operators: &OperatorList) -> Vec<Rectangle> {
    let mut current_transform = Matrix::IDENTITY;
    let mut stack: Vec<Matrix> = Vec::new();
    let mut previous_rectangle: Option<Rectangle> = None;
    let mut committed = Vec::new();

    for op in &operators.operators {
        match op {
            Operator::Save => stack.push(current_transform),
            Operator::Restore => {
                if let Some(m) = stack.pop() {
                    current_transform = m;
                }
            }
            Operator::Transform(m) => {
                // cm: CTM' = m * CTM — m is applied first, then the existing
                // current transform (§4.B "current ← current ∘ m").
                current_transform = m.compose(&current_transform);
            }
            Operator::ConstructPath(sub_ops) => {
                previous_rectangle = construct_path_rectangle(sub_ops, &current_transform);
            }
            Operator::Fill | Operator::EoFill => {
                if let Some(rect) = previous_rectangle.take() {
                    committed.push(rect);
                }
            }
            Operator::Other => {}
        }
    }

    committed
}

/// Applies the current transform to a path's last `rectangle` sub-op, if any,
/// recomputing width/height from the transformed corners. Earlier
/// `moveTo`/`lineTo` sub-ops are walked (to stay faithful to the real operator
/// sequence) but otherwise ignored — only rectangles become rulings.
fn construct_path_rectangle(sub_ops: &[PathSubOp], transform: &Matrix) -> Option<Rectangle> {
    let mut rectangle = None;

    for sub_op in sub_ops {
        match *sub_op {
            PathSubOp::MoveTo(_, _) | PathSubOp::LineTo(_, _) => {}
            PathSubOp::Rectangle(x, y, w, h) => {
                let (x0, y0) = transform.apply(x, y);
                let (x1, y1) = transform.apply(x + w, y + h);
                rectangle = Some(Rectangle::new(
                    x0.min(x1),
                    y0.min(y1),
                    (x1 - x0).abs(),
                    (y1 - y0).abs(),
                ));
            }
        }
    }

    rectangle
}

//! Component D: the text extractor. Converts a page's text layer into
//! positioned `Element`s, replacing the natively reported height with one
//! derived from the text matrix (§4.D) — the 50%-containment binder (§4.F)
//! depends on this correction and must never see the raw reported height.

use crate::geometry::Rectangle;
use crate::model::Element;
use crate::pdf::TextContent;

/// `x = e`, `y = f`, `width = item.width`, `height = sqrt(c^2 + d^2)`.
pub fn extract_elements(content: &TextContent) -> Vec<Element> {
    content
        .items
        .iter()
        .map(|item| {
            let [_, _, c, d, e, f] = item.transform;
            let height = (c * c + d * d).sqrt();
            Element::new(Rectangle::new(e, f, item.width, height), item.str.clone())
        })
        .collect()
}

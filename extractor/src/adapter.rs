//! Component I: the lopdf adapter. Concrete `PdfDocument`/`PdfPage` impls over
//! a real `lopdf::Document`, mapping content-stream operators into the plain
//! types `da_table_engine::pdf` declares (§6a). The engine itself never links
//! against `lopdf`; this is the only module that does.

use da_table_engine::error::{EngineError, Result as EngineResult};
use da_table_engine::pdf::{Matrix, Operator, OperatorList, PathSubOp, PdfDocument, PdfPage, TextContent, TextItem};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId};

use crate::error::{ExtractorError, Result};

/// `lopdf` reports no per-glyph advance width outside a font's own metrics,
/// which this adapter doesn't load; a run's width is estimated from its
/// character count and the active text matrix's horizontal scale.
const AVERAGE_GLYPH_WIDTH_EM: f64 = 0.5;

pub struct LopdfDocument {
    document: Document,
    page_ids: Vec<ObjectId>,
}

impl LopdfDocument {
    pub fn load(path: &str) -> Result<Self> {
        let document = Document::load(path).map_err(|source| ExtractorError::PdfLoad {
            path: path.to_string(),
            source,
        })?;
        let page_ids = document.get_pages().into_values().collect();
        Ok(Self { document, page_ids })
    }
}

impl PdfDocument for LopdfDocument {
    fn num_pages(&self) -> usize {
        self.page_ids.len()
    }

    fn get_page(&self, index: usize) -> EngineResult<Box<dyn PdfPage + '_>> {
        let page_id = *self.page_ids.get(index).ok_or_else(|| EngineError::PdfDecode {
            page: index,
            source: format!("page index {index} out of range").into(),
        })?;

        let rotate = page_rotation(&self.document, page_id);
        let content_bytes = self.document.get_page_content(page_id).map_err(|source| EngineError::PdfDecode {
            page: index,
            source: Box::new(source),
        })?;
        let content = Content::decode(&content_bytes).map_err(|source| EngineError::PdfDecode {
            page: index,
            source: Box::new(source),
        })?;

        let (operators, text) = decode_operations(&content.operations);
        Ok(Box::new(LopdfPage { operators, text, rotate }))
    }
}

fn page_rotation(document: &Document, page_id: ObjectId) -> i32 {
    document
        .get_object(page_id)
        .ok()
        .and_then(|obj| obj.as_dict().ok())
        .and_then(|dict| dict.get(b"Rotate").ok())
        .and_then(|obj| obj.as_i64().ok())
        .map(|degrees| degrees as i32)
        .unwrap_or(0)
}

pub struct LopdfPage {
    operators: OperatorList,
    text: TextContent,
    rotate: i32,
}

impl PdfPage for LopdfPage {
    fn operator_list(&self) -> &OperatorList {
        &self.operators
    }

    fn text_content(&self) -> &TextContent {
        &self.text
    }

    fn rotate(&self) -> i32 {
        self.rotate
    }
}

/// Walks a decoded content stream, mapping `q`/`Q`/`cm` to `Save`/`Restore`/
/// `Transform`, `re` to a synthetic single-rectangle `ConstructPath` (a real
/// content stream always pairs it with a following paint operator), `f`/`F`/
/// `f*` to `Fill`/`EoFill`, and `Tm`/`Td`/`TD`/`T*`/`Tj`/`TJ` into text items
/// carrying the active text matrix directly as their transform. `Td`/`TD`/
/// `T*` move the text line matrix the way `Tm` sets it outright — a real
/// content stream almost always positions each run with `Td` after an
/// initial `Tm`/`BT`, not with a fresh `Tm` per run.
fn decode_operations(operations: &[Operation]) -> (OperatorList, TextContent) {
    let mut operators = Vec::new();
    let mut items = Vec::new();
    let mut current_text_matrix = Matrix::IDENTITY;
    let mut current_line_matrix = Matrix::IDENTITY;
    let mut leading = 0.0_f64;

    for op in operations {
        match op.operator.as_str() {
            "q" => operators.push(Operator::Save),
            "Q" => operators.push(Operator::Restore),
            "cm" => {
                if let Some(m) = matrix_operands(&op.operands) {
                    operators.push(Operator::Transform(Matrix { a: m[0], b: m[1], c: m[2], d: m[3], e: m[4], f: m[5] }));
                }
            }
            "re" => {
                let operands = numeric_operands(&op.operands);
                if let [x, y, w, h] = operands[..] {
                    operators.push(Operator::ConstructPath(vec![PathSubOp::Rectangle(x, y, w, h)]));
                }
            }
            "f" | "F" => operators.push(Operator::Fill),
            "f*" => operators.push(Operator::EoFill),
            "BT" => {
                current_text_matrix = Matrix::IDENTITY;
                current_line_matrix = Matrix::IDENTITY;
            }
            "Tm" => {
                if let Some(m) = matrix_operands(&op.operands) {
                    let matrix = Matrix { a: m[0], b: m[1], c: m[2], d: m[3], e: m[4], f: m[5] };
                    current_text_matrix = matrix;
                    current_line_matrix = matrix;
                }
            }
            "TL" => {
                let operands = numeric_operands(&op.operands);
                if let [tl] = operands[..] {
                    leading = tl;
                }
            }
            "Td" => {
                let operands = numeric_operands(&op.operands);
                if let [tx, ty] = operands[..] {
                    current_line_matrix = move_line_matrix(tx, ty, &current_line_matrix);
                    current_text_matrix = current_line_matrix;
                }
            }
            "TD" => {
                let operands = numeric_operands(&op.operands);
                if let [tx, ty] = operands[..] {
                    leading = -ty;
                    current_line_matrix = move_line_matrix(tx, ty, &current_line_matrix);
                    current_text_matrix = current_line_matrix;
                }
            }
            "T*" => {
                current_line_matrix = move_line_matrix(0.0, -leading, &current_line_matrix);
                current_text_matrix = current_line_matrix;
            }
            "Tj" => {
                if let Some(text) = op.operands.first().and_then(decode_string) {
                    items.push(text_item(&text, current_text_matrix));
                }
            }
            "TJ" => {
                if let Some(Object::Array(parts)) = op.operands.first() {
                    let text: String = parts.iter().filter_map(decode_string).collect();
                    if !text.is_empty() {
                        items.push(text_item(&text, current_text_matrix));
                    }
                }
            }
            _ => operators.push(Operator::Other),
        }
    }

    (OperatorList { operators }, TextContent { items })
}

/// `Td`/`TD`/`T*` translate the text line matrix by `(tx, ty)` in the space
/// the line matrix currently defines: `Tlm' = translate(tx, ty) * Tlm`, the
/// same self-applied-first composition `cm` uses for the graphics CTM.
fn move_line_matrix(tx: f64, ty: f64, line_matrix: &Matrix) -> Matrix {
    let translate = Matrix { e: tx, f: ty, ..Matrix::IDENTITY };
    translate.compose(line_matrix)
}

fn text_item(text: &str, transform: Matrix) -> TextItem {
    let width = text.chars().count() as f64 * AVERAGE_GLYPH_WIDTH_EM * transform.a.abs();
    let transform = [transform.a, transform.b, transform.c, transform.d, transform.e, transform.f];
    TextItem { str: text.to_string(), width, transform }
}

fn decode_string(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(Document::decode_text(Some("WinAnsiEncoding"), bytes)),
        _ => None,
    }
}

fn numeric_operands(operands: &[Object]) -> Vec<f64> {
    operands.iter().map(as_f64).collect()
}

fn matrix_operands(operands: &[Object]) -> Option<[f64; 6]> {
    let values = numeric_operands(operands);
    if values.len() == 6 {
        Some([values[0], values[1], values[2], values[3], values[4], values[5]])
    } else {
        None
    }
}

fn as_f64(object: &Object) -> f64 {
    match object {
        Object::Integer(i) => *i as f64,
        Object::Real(r) => *r as f64,
        _ => 0.0,
    }
}

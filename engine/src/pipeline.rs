//! Component J: the document pipeline. Drives §5's per-document loop across
//! B–H, carrying the `HeadingBinding` forward from page to page and
//! forwarding validated records to the sink.

use tracing::{debug, warn};

use crate::bind::{bind_elements, sort_reading_order};
use crate::error::Result;
use crate::grid::{build_cells, sort_cells};
use crate::heading::{discover_headings, HeadingBinding};
use crate::normalize::normalize_page;
use crate::pdf::PdfDocument;
use crate::record::build_record;
use crate::rows::{bucket_rows, map_row};
use crate::sink::RecordSink;
use crate::text::extract_elements;
use crate::vector::extract_rectangles;

/// Tallies how a document's rows resolved, for the caller to log or report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub inserted: usize,
    pub skipped: usize,
}

/// Runs components B–H over every page of a document, reusing one
/// `HeadingBinding` across the whole run (§3, §9). A fresh `Pipeline` should
/// be created per document — the binding does not outlive it.
#[derive(Debug, Default)]
pub struct Pipeline {
    binding: HeadingBinding,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_document(
        &mut self,
        document: &dyn PdfDocument,
        information_url: &str,
        comment_url: &str,
        scrape_date: &str,
        sink: &mut dyn RecordSink,
    ) -> Result<PipelineStats> {
        let mut stats = PipelineStats::default();

        for page_index in 0..document.num_pages() {
            let page = document.get_page(page_index)?;

            let rectangles = extract_rectangles(page.operator_list());
            let mut cells = build_cells(&rectangles);
            let mut elements = extract_elements(page.text_content());

            if cells.is_empty() {
                warn!(page = page_index, element_count = elements.len(), "grid not found; skipping page");
                continue;
            }

            normalize_page(&mut cells, &mut elements, page.rotate());
            // Normalization inverts `y`, reversing the order `build_cells`
            // established; re-sort so rows bucket and emit ascending (§4.G.1, §5).
            sort_cells(&mut cells);
            sort_reading_order(&mut elements);
            bind_elements(&mut cells, elements);

            discover_headings(&cells, &mut self.binding);
            if !self.binding.has_mandatory() {
                debug!(page = page_index, "headers not yet found; skipping page");
                continue;
            }

            for row in bucket_rows(cells) {
                let mapped = map_row(&row, &self.binding);
                let Some(record) = build_record(&mapped, information_url, comment_url, scrape_date) else {
                    continue;
                };

                if sink.insert(record) {
                    stats.inserted += 1;
                } else {
                    stats.skipped += 1;
                }
            }
        }

        Ok(stats)
    }
}

//! The second half of component G: row bucketing and column projection.
//! Groups cells into rows by shared `y`, then for each bound heading picks
//! the row's data cell as the first one whose horizontal overlap with that
//! heading exceeds 90% (§4.G.1, §4.G.4).

use crate::geometry::{horizontal_overlap_percent, TOLERANCE};
use crate::heading::HeadingBinding;
use crate::model::Cell;

/// Buckets already-sorted cells into rows: a cell joins the first existing
/// row whose representative `y` (its first cell's `y`) is within `Tolerance`;
/// otherwise it starts a new row. Each row is sorted by `x` once complete.
pub fn bucket_rows(cells: Vec<Cell>) -> Vec<Vec<Cell>> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();

    for cell in cells {
        let row = rows
            .iter_mut()
            .find(|row: &&mut Vec<Cell>| (row[0].rect.y - cell.rect.y).abs() < TOLERANCE);

        match row {
            Some(row) => row.push(cell),
            None => rows.push(vec![cell]),
        }
    }

    for row in rows.iter_mut() {
        row.sort_by(|a, b| a.rect.x.partial_cmp(&b.rect.x).unwrap());
    }

    rows
}

/// A row's cells, projected onto the bound logical columns. Any field may be
/// absent — most commonly `application_number`, which marks a non-data row
/// (e.g. the header row itself) to be silently skipped by the record
/// extractor (§4.G.4, §4.H).
pub struct MappedRow<'a> {
    pub application_number: Option<&'a Cell>,
    pub address: Option<&'a Cell>,
    pub description: Option<&'a Cell>,
    pub received_date: Option<&'a Cell>,
}

pub fn map_row<'a>(row: &'a [Cell], binding: &HeadingBinding) -> MappedRow<'a> {
    MappedRow {
        application_number: project(row, binding.application_number.as_ref()),
        address: project(row, binding.address.as_ref()),
        description: project(row, binding.description.as_ref()),
        received_date: project(row, binding.received_date.as_ref()),
    }
}

fn project<'a>(row: &'a [Cell], heading: Option<&Cell>) -> Option<&'a Cell> {
    let heading = heading?;
    row.iter().find(|cell| horizontal_overlap_percent(cell.rect, heading.rect) > 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    #[test]
    fn cells_on_same_row_bucket_together() {
        let cells = vec![
            Cell::new(Rectangle::new(0.0, 20.0, 100.0, 20.0)),
            Cell::new(Rectangle::new(100.0, 21.0, 100.0, 20.0)),
            Cell::new(Rectangle::new(0.0, 60.0, 100.0, 20.0)),
        ];
        let rows = bucket_rows(cells);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn row_is_sorted_by_x() {
        let cells = vec![
            Cell::new(Rectangle::new(100.0, 0.0, 50.0, 20.0)),
            Cell::new(Rectangle::new(0.0, 0.0, 50.0, 20.0)),
        ];
        let rows = bucket_rows(cells);
        assert_eq!(rows[0][0].rect.x, 0.0);
        assert_eq!(rows[0][1].rect.x, 100.0);
    }

    #[test]
    fn column_projection_picks_overlapping_cell() {
        let heading = Cell::new(Rectangle::new(0.0, 0.0, 100.0, 20.0));
        let mut binding = HeadingBinding::default();
        binding.application_number = Some(heading);

        let row = vec![
            Cell::new(Rectangle::new(0.0, 20.0, 100.0, 20.0)),
            Cell::new(Rectangle::new(100.0, 20.0, 150.0, 20.0)),
        ];
        let mapped = map_row(&row, &binding);
        assert_eq!(mapped.application_number.unwrap().rect, row[0].rect);
        assert!(mapped.address.is_none());
    }
}

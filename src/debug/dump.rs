//! Plain-text dumps of occupancy and partitions, for logs and the CLI.

use crate::foundation::core::{Cell, GridSize, Region};
use crate::foundation::error::GridResult;
use crate::grid::occupancy::GridOccupancy;

const REGION_GLYPHS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// One line per row: `x` for occupied cells, `.` for free ones.
pub fn occupancy_map(grid: &GridOccupancy) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size.cell_count() + size.rows() as usize);
    for row in 0..size.rows() {
        for column in 0..size.columns() {
            out.push(if grid.is_occupied(Cell::new(row, column)) {
                'x'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}

/// One line per row, each cell showing the base-36 index of its region (wrapping after `z`).
///
/// Cells no region covers are shown as `.`. Overlapping or out-of-grid regions are errors.
pub fn region_map(size: GridSize, regions: &[Region]) -> GridResult<String> {
    GridOccupancy::from_regions(size, regions)?;

    let columns = size.columns() as usize;
    let mut glyphs = vec!['.'; size.cell_count()];
    for (idx, region) in regions.iter().enumerate() {
        let glyph = REGION_GLYPHS[idx % REGION_GLYPHS.len()];
        for cell in region.cells() {
            glyphs[cell.row as usize * columns + cell.column as usize] = glyph;
        }
    }

    let mut out = String::with_capacity(glyphs.len() + size.rows() as usize);
    for line in glyphs.chunks(columns) {
        out.extend(line);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/debug/dump.rs"]
mod tests;

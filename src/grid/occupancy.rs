use crate::foundation::core::{Cell, GridSize, Region};
use crate::foundation::error::{GridError, GridResult};

/// Row-major occupancy map for one partitioning pass.
///
/// Cells only ever go from free to occupied; a pass ends when the map is full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridOccupancy {
    size: GridSize,
    occupied: Vec<bool>,
}

impl GridOccupancy {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            occupied: vec![false; size.cell_count()],
        }
    }

    /// Allocate an empty map from raw counts.
    pub fn initialize(columns: u32, rows: u32) -> GridResult<Self> {
        Ok(Self::new(GridSize::new(columns, rows)?))
    }

    /// Rebuild occupancy from a finished set of regions, rejecting double claims.
    pub fn from_regions(size: GridSize, regions: &[Region]) -> GridResult<Self> {
        let mut grid = Self::new(size);
        for (idx, region) in regions.iter().enumerate() {
            size.check_fits(*region)?;
            if let Some(cell) = region.cells().find(|&c| grid.is_occupied(c)) {
                return Err(GridError::overlap(format!(
                    "region #{idx} claims cell ({}, {}) which is already occupied",
                    cell.row, cell.column
                )));
            }
            grid.fill(*region);
        }
        Ok(grid)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.occupied[i])
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }

    /// First free cell in row-major scan order.
    pub fn first_free_cell(&self) -> Option<Cell> {
        let columns = self.size.columns() as usize;
        self.occupied.iter().position(|&o| !o).map(|i| {
            // Both quotients are bounded by u32 counts.
            Cell::new((i / columns) as u32, (i % columns) as u32)
        })
    }

    pub fn is_full(&self) -> bool {
        self.first_free_cell().is_none()
    }

    /// Free cells from `cell` rightwards, stopping at an occupied cell or the row edge.
    pub fn free_run_right(&self, cell: Cell) -> u32 {
        (cell.column..self.size.columns())
            .take_while(|&column| self.is_free(Cell::new(cell.row, column)))
            .fold(0, |n, _| n + 1)
    }

    /// Free cells from `cell` downwards, stopping at an occupied cell or the column edge.
    pub fn free_run_down(&self, cell: Cell) -> u32 {
        (cell.row..self.size.rows())
            .take_while(|&row| self.is_free(Cell::new(row, cell.column)))
            .fold(0, |n, _| n + 1)
    }

    pub fn mark_occupied(&mut self, region: Region) -> GridResult<()> {
        self.size.check_fits(region)?;
        self.fill(region);
        Ok(())
    }

    // Caller has checked `fits`.
    fn fill(&mut self, region: Region) {
        let columns = self.size.columns() as usize;
        let (c0, c1) = (
            region.start_column as usize,
            (region.start_column + region.width_cells) as usize,
        );
        for row in region.start_row..region.start_row + region.height_cells {
            let base = row as usize * columns;
            self.occupied[base + c0..base + c1].fill(true);
        }
    }

    fn is_free(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| !self.occupied[i])
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.size
            .contains(cell)
            .then(|| cell.row as usize * self.size.columns() as usize + cell.column as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/occupancy.rs"]
mod tests;

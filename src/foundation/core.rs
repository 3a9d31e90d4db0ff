use crate::foundation::error::{GridError, GridResult};

/// Column/row count of a partitioning grid. Both counts are always >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawGridSize")]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

#[derive(serde::Deserialize)]
struct RawGridSize {
    columns: u32,
    rows: u32,
}

impl TryFrom<RawGridSize> for GridSize {
    type Error = GridError;

    fn try_from(raw: RawGridSize) -> GridResult<Self> {
        Self::new(raw.columns, raw.rows)
    }
}

impl GridSize {
    pub fn new(columns: u32, rows: u32) -> GridResult<Self> {
        if columns == 0 {
            return Err(GridError::invalid_dimension("column count must be > 0"));
        }
        if rows == 0 {
            return Err(GridError::invalid_dimension("row count must be > 0"));
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(self) -> u32 {
        self.columns
    }

    pub fn rows(self) -> u32 {
        self.rows
    }

    pub fn cell_count(self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn contains(self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    /// True when every cell of `region` lies inside the grid.
    pub fn fits(self, region: Region) -> bool {
        u64::from(region.start_column) + u64::from(region.width_cells) <= u64::from(self.columns)
            && u64::from(region.start_row) + u64::from(region.height_cells)
                <= u64::from(self.rows)
    }

    /// [`GridSize::fits`] as an `OutOfBounds` error.
    pub fn check_fits(self, region: Region) -> GridResult<()> {
        if self.fits(region) {
            return Ok(());
        }
        Err(GridError::out_of_bounds(format!(
            "region at ({}, {}) sized {}x{} exceeds {}x{} grid",
            region.start_row,
            region.start_column,
            region.width_cells,
            region.height_cells,
            self.columns,
            self.rows
        )))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 8,
        }
    }
}

/// Zero-based `(row, column)` grid coordinate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Cell {
    pub row: u32,
    pub column: u32,
}

impl Cell {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// Rectangular block of cells anchored at its top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Region {
    pub start_row: u32,
    pub start_column: u32,
    pub width_cells: u32,  // >= 1
    pub height_cells: u32, // >= 1
}

impl Region {
    pub fn new(
        start_row: u32,
        start_column: u32,
        width_cells: u32,
        height_cells: u32,
    ) -> GridResult<Self> {
        if width_cells == 0 || height_cells == 0 {
            return Err(GridError::invalid_dimension(format!(
                "region extent must be >= 1x1, got {width_cells}x{height_cells}"
            )));
        }
        Ok(Self {
            start_row,
            start_column,
            width_cells,
            height_cells,
        })
    }

    pub fn anchor(self) -> Cell {
        Cell::new(self.start_row, self.start_column)
    }

    pub fn area(self) -> u64 {
        u64::from(self.width_cells) * u64::from(self.height_cells)
    }

    /// Iterates covered cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let rows = self.start_row..self.start_row.saturating_add(self.height_cells);
        let columns = self.start_column..self.start_column.saturating_add(self.width_cells);
        rows.flat_map(move |row| columns.clone().map(move |column| Cell::new(row, column)))
    }
}

/// Absolute pixel rectangle; `right`/`bottom` are exclusive edges.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelBounds {
    pub fn width(self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

impl ContainerSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Per-child margins, in pixels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(default)]
pub struct Margins {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Margins {
    pub fn uniform(px: u32) -> Self {
        Self {
            left: px,
            top: px,
            right: px,
            bottom: px,
        }
    }

    pub fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

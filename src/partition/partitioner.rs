use crate::foundation::core::{GridSize, Region};
use crate::foundation::error::{GridError, GridResult};
use crate::grid::occupancy::GridOccupancy;
use crate::partition::sizer::{RandomRegionSizer, RandomSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartitionState {
    Filling,
    Done,
}

/// Greedy fill loop over a private occupancy map.
///
/// Every step anchors a region at the first free cell in scan order, sizes it from the free
/// runs at that anchor and marks it occupied. Each step claims at least one cell, so a pass
/// finishes in at most `columns * rows` steps.
#[derive(Debug)]
pub struct RegionPartitioner<S> {
    grid: GridOccupancy,
    sizer: RandomRegionSizer<S>,
    regions: Vec<Region>,
    state: PartitionState,
}

impl<S: RandomSource> RegionPartitioner<S> {
    pub fn new(size: GridSize, sizer: RandomRegionSizer<S>) -> Self {
        Self {
            grid: GridOccupancy::new(size),
            sizer,
            regions: Vec::new(),
            state: PartitionState::Filling,
        }
    }

    pub fn state(&self) -> PartitionState {
        self.state
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn step(&mut self) -> GridResult<PartitionState> {
        if self.state == PartitionState::Done {
            return Ok(PartitionState::Done);
        }
        let Some(anchor) = self.grid.first_free_cell() else {
            self.state = PartitionState::Done;
            return Ok(PartitionState::Done);
        };

        let max_height = self.grid.free_run_down(anchor);
        let max_width = self.grid.free_run_right(anchor);
        let (width, height) = self.sizer.pick(max_width, max_height);
        debug_assert!(width >= 1 && height >= 1);

        let region = Region::new(anchor.row, anchor.column, width, height)?;
        self.grid.mark_occupied(region)?;
        tracing::debug!(
            row = region.start_row,
            column = region.start_column,
            width,
            height,
            max_width,
            max_height,
            "placed region"
        );
        self.regions.push(region);
        Ok(PartitionState::Filling)
    }

    /// Run to `Done` and hand back the regions in anchor order.
    pub fn run(mut self) -> GridResult<Vec<Region>> {
        let limit = self.grid.size().cell_count();
        for _ in 0..=limit {
            if self.step()? == PartitionState::Done {
                return Ok(self.regions);
            }
        }
        Err(GridError::out_of_bounds(format!(
            "partition did not finish within {limit} steps"
        )))
    }
}

/// Partition `size` into random regions that cover every cell exactly once.
#[tracing::instrument(skip_all, fields(columns = size.columns(), rows = size.rows()))]
pub fn partition<S: RandomSource>(size: GridSize, source: S) -> GridResult<Vec<Region>> {
    let regions = RegionPartitioner::new(size, RandomRegionSizer::new(source)).run()?;
    tracing::info!(regions = regions.len(), "partition complete");
    Ok(regions)
}

/// [`partition`] from raw column/row counts.
pub fn partition_grid<S: RandomSource>(
    columns: u32,
    rows: u32,
    source: S,
) -> GridResult<Vec<Region>> {
    partition(GridSize::new(columns, rows)?, source)
}

#[cfg(test)]
#[path = "../../tests/unit/partition/partitioner.rs"]
mod tests;

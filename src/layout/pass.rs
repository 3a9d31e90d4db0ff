use crate::config::LayoutConfig;
use crate::foundation::core::{ContainerSize, GridSize, Region};
use crate::foundation::error::{GridError, GridResult};
use crate::geometry::mapper::{Placement, content_extent_with_margins, place_all};
use crate::partition::partitioner::partition;
use crate::partition::sizer::{RandomSource, RngSource};

/// Result of a full layout pass: the partition and where each child lands.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayoutOutcome {
    pub size: GridSize,
    pub container: ContainerSize,
    pub regions: Vec<Region>,
    pub placements: Vec<Placement>,
}

/// Partition, resolve the container and place every region.
///
/// An explicit `container` wins; otherwise the container is the margin-aware content extent at
/// `cell_size` per cell.
#[tracing::instrument(skip_all, fields(columns = config.columns, rows = config.rows))]
pub fn run_layout<S: RandomSource>(config: &LayoutConfig, source: S) -> GridResult<LayoutOutcome> {
    config.validate()?;
    let size = config.grid_size()?;
    let regions = partition(size, source)?;

    let container = match (config.container, config.cell_size) {
        (Some(container), _) => container,
        (None, Some(cell)) => content_extent_with_margins(
            &regions,
            size,
            cell.width,
            cell.height,
            config.margins,
        )?
        .into(),
        (None, None) => {
            return Err(GridError::config(
                "layout config needs either `container` or `cell_size`",
            ));
        }
    };
    tracing::debug!(
        width = container.width,
        height = container.height,
        "resolved container"
    );

    let placements = place_all(&regions, size, container, &config.label_prefix)?;
    Ok(LayoutOutcome {
        size,
        container,
        regions,
        placements,
    })
}

/// [`run_layout`] with a generator seeded from `config.seed`, or OS entropy when unset.
pub fn run_layout_seeded(config: &LayoutConfig) -> GridResult<LayoutOutcome> {
    match config.seed {
        Some(seed) => run_layout(config, RngSource::seeded(seed)),
        None => run_layout(config, RngSource::from_entropy()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pass.rs"]
mod tests;

use crate::foundation::core::{ContainerSize, GridSize, Margins, PixelBounds, Region};
use crate::foundation::error::GridResult;

/// Total pixel size of a partition laid out at a fixed per-cell size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentExtent {
    pub width: u32,
    pub height: u32,
}

impl From<ContentExtent> for ContainerSize {
    fn from(e: ContentExtent) -> Self {
        Self::new(e.width, e.height)
    }
}

/// A region together with its resolved pixel bounds.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub index: usize,
    pub label: String,
    pub region: Region,
    pub bounds: PixelBounds,
}

/// Column width and row height in whole pixels (truncating division).
///
/// The remainder of each axis is left unused, so the far edges may fall short of the container.
pub fn cell_pitch(size: GridSize, container: ContainerSize) -> (u32, u32) {
    (
        container.width / size.columns(),
        container.height / size.rows(),
    )
}

pub fn to_pixel_bounds(
    region: Region,
    size: GridSize,
    container: ContainerSize,
) -> GridResult<PixelBounds> {
    size.check_fits(region)?;
    let (col_width, row_height) = cell_pitch(size, container);

    // `fits` bounds every multiplier by the grid count, so products stay within the container.
    Ok(PixelBounds {
        left: region.start_column * col_width,
        top: region.start_row * row_height,
        right: (region.start_column + region.width_cells) * col_width,
        bottom: (region.start_row + region.height_cells) * row_height,
    })
}

/// Content size used when the container sizes itself to its children.
///
/// Width sums the regions anchored on row 0, height sums those anchored on column 0. This
/// assumes the first row and column each see every band exactly once, which a random
/// partition does not guarantee; the result is an approximation.
pub fn content_extent(
    regions: &[Region],
    size: GridSize,
    cell_width: u32,
    cell_height: u32,
) -> GridResult<ContentExtent> {
    content_extent_with_margins(regions, size, cell_width, cell_height, Margins::default())
}

/// [`content_extent`] plus each contributing child's margins on that axis.
pub fn content_extent_with_margins(
    regions: &[Region],
    size: GridSize,
    cell_width: u32,
    cell_height: u32,
    margins: Margins,
) -> GridResult<ContentExtent> {
    let mut extent = ContentExtent::default();
    for &region in regions {
        size.check_fits(region)?;
        if region.start_row == 0 {
            extent.width = extent
                .width
                .saturating_add(region.width_cells.saturating_mul(cell_width))
                .saturating_add(margins.horizontal());
        }
        if region.start_column == 0 {
            extent.height = extent
                .height
                .saturating_add(region.height_cells.saturating_mul(cell_height))
                .saturating_add(margins.vertical());
        }
    }
    Ok(extent)
}

/// Map every region of a pass, labelling children `{prefix}{index}`.
pub fn place_all(
    regions: &[Region],
    size: GridSize,
    container: ContainerSize,
    label_prefix: &str,
) -> GridResult<Vec<Placement>> {
    regions
        .iter()
        .enumerate()
        .map(|(index, &region)| {
            Ok(Placement {
                index,
                label: format!("{label_prefix}{index}"),
                region,
                bounds: to_pixel_bounds(region, size, container)?,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mapper.rs"]
mod tests;

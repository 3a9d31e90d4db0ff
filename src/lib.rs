//! gridfill partitions a fixed `columns x rows` grid into random rectangles and places them
//! in pixel space.
//!
//! # Pipeline overview
//!
//! 1. **Partition**: `GridSize + RandomSource -> Vec<Region>`. A greedy fill anchors each new
//!    region at the first free cell in row-major order and sizes it at random, bounded by the
//!    free runs to the right and below the anchor.
//! 2. **Place**: `Region + GridSize + ContainerSize -> PixelBounds` using whole-pixel cell
//!    pitches, or [`content_extent`] when the container sizes itself to its content.
//!
//! [`run_layout`] performs both steps for a [`LayoutConfig`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Injected randomness**: every random draw comes from a caller-supplied [`RandomSource`],
//!   so a seeded source reproduces a partition exactly.
//! - **Exact cover**: the regions of one pass never overlap and cover every cell.
#![forbid(unsafe_code)]

mod config;
mod debug;
mod foundation;
mod geometry;
mod grid;
mod layout;
mod partition;

pub use config::LayoutConfig;
pub use debug::dump::{occupancy_map, region_map};
pub use foundation::core::{Cell, ContainerSize, GridSize, Margins, PixelBounds, Region};
pub use foundation::error::{GridError, GridResult};
pub use geometry::mapper::{
    ContentExtent, Placement, cell_pitch, content_extent, content_extent_with_margins, place_all,
    to_pixel_bounds,
};
pub use grid::occupancy::GridOccupancy;
pub use layout::pass::{LayoutOutcome, run_layout, run_layout_seeded};
pub use partition::partitioner::{PartitionState, RegionPartitioner, partition, partition_grid};
pub use partition::sizer::{
    FixedSource, RandomRegionSizer, RandomSource, RngSource, ScriptedSource,
};

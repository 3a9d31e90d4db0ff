use super::*;
use crate::foundation::core::Cell;
use crate::partition::sizer::{FixedSource, RngSource, ScriptedSource};

fn size(columns: u32, rows: u32) -> GridSize {
    GridSize::new(columns, rows).unwrap()
}

fn assert_exact_cover(size: GridSize, regions: &[Region]) {
    let grid = GridOccupancy::from_regions(size, regions).unwrap();
    assert!(grid.is_full());
    let area: u64 = regions.iter().map(|r| r.area()).sum();
    assert_eq!(area, size.cell_count() as u64);
}

#[test]
fn minimum_draws_give_unit_cells_in_scan_order() {
    let regions = partition_grid(2, 2, FixedSource(0.0)).unwrap();
    assert_eq!(
        regions,
        vec![
            Region::new(0, 0, 1, 1).unwrap(),
            Region::new(0, 1, 1, 1).unwrap(),
            Region::new(1, 0, 1, 1).unwrap(),
            Region::new(1, 1, 1, 1).unwrap(),
        ]
    );
}

#[test]
fn near_maximum_draw_fills_single_row_at_once() {
    let regions = partition_grid(4, 1, FixedSource(0.999)).unwrap();
    assert_eq!(regions, vec![Region::new(0, 0, 4, 1).unwrap()]);
}

#[test]
fn near_maximum_draw_fills_whole_grid_at_once() {
    let regions = partition_grid(5, 3, FixedSource(0.999)).unwrap();
    assert_eq!(regions, vec![Region::new(0, 0, 5, 3).unwrap()]);
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        partition_grid(0, 3, FixedSource(0.5)),
        Err(GridError::InvalidDimension(_))
    ));
    assert!(matches!(
        partition_grid(3, 0, FixedSource(0.5)),
        Err(GridError::InvalidDimension(_))
    ));
}

#[test]
fn later_anchors_respect_earlier_regions() {
    // Draw order is (height, width) per step.
    // Step 1 at (0,0): max 3x3, h = round(0.5*3) = 2, w = round(0.2*3) = 1.
    // Step 2 at (0,1): max 2 wide, 3 tall, h = round(0.0*3) -> 1, w = round(1.0*2) = 2.
    // Step 3 at (1,1): max 2x2, h = 2, w = 2. Remaining (2,0) is 1x1.
    let source = ScriptedSource::new(vec![0.5, 0.2, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
    let regions = partition_grid(3, 3, source).unwrap();
    assert_eq!(
        regions,
        vec![
            Region::new(0, 0, 1, 2).unwrap(),
            Region::new(0, 1, 2, 1).unwrap(),
            Region::new(1, 1, 2, 2).unwrap(),
            Region::new(2, 0, 1, 1).unwrap(),
        ]
    );
    assert_exact_cover(size(3, 3), &regions);
}

#[test]
fn stepper_moves_from_filling_to_done() {
    let mut p = RegionPartitioner::new(size(2, 1), RandomRegionSizer::new(FixedSource(0.0)));
    assert_eq!(p.state(), PartitionState::Filling);
    assert_eq!(p.step().unwrap(), PartitionState::Filling);
    assert_eq!(p.regions().len(), 1);
    assert_eq!(p.step().unwrap(), PartitionState::Filling);
    assert_eq!(p.step().unwrap(), PartitionState::Done);
    assert_eq!(p.state(), PartitionState::Done);
    assert_eq!(p.step().unwrap(), PartitionState::Done);
    assert_eq!(p.regions().len(), 2);
}

#[test]
fn anchors_follow_scan_order() {
    let regions = partition(size(6, 5), RngSource::seeded(3)).unwrap();
    let anchors: Vec<Cell> = regions.iter().map(|r| r.anchor()).collect();
    let mut sorted = anchors.clone();
    sorted.sort();
    assert_eq!(anchors, sorted);
    assert_eq!(anchors[0], Cell::new(0, 0));
}

#[test]
fn seeded_partitions_cover_exactly() {
    for seed in 0..64 {
        let s = size(4, 8);
        let regions = partition(s, RngSource::seeded(seed)).unwrap();
        assert!(!regions.is_empty());
        assert!(regions.len() <= s.cell_count());
        for r in &regions {
            assert!(r.width_cells >= 1 && r.height_cells >= 1);
            assert!(s.fits(*r));
        }
        assert_exact_cover(s, &regions);
    }
}

#[test]
fn same_seed_same_partition() {
    let a = partition(size(7, 7), RngSource::seeded(99)).unwrap();
    let b = partition(size(7, 7), RngSource::seeded(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn borrowed_source_keeps_its_state() {
    let mut source = ScriptedSource::new(vec![0.0, 0.0, 0.999, 0.999]);
    let first = partition_grid(2, 1, &mut source).unwrap();
    assert_eq!(first.len(), 2);
    // Two draws per step and two steps consumed the whole script.
    assert_eq!(source.next_unit(), 0.0);
}

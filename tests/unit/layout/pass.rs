use super::*;
use crate::foundation::core::{Margins, PixelBounds};
use crate::partition::sizer::FixedSource;

fn config(columns: u32, rows: u32) -> LayoutConfig {
    LayoutConfig {
        columns,
        rows,
        ..LayoutConfig::default()
    }
}

#[test]
fn explicit_container_places_every_region() {
    let cfg = LayoutConfig {
        container: Some(ContainerSize::new(200, 100)),
        ..config(2, 2)
    };
    let out = run_layout(&cfg, FixedSource(0.0)).unwrap();
    assert_eq!(out.container, ContainerSize::new(200, 100));
    assert_eq!(out.regions.len(), 4);
    let bounds: Vec<PixelBounds> = out.placements.iter().map(|p| p.bounds).collect();
    assert_eq!(
        bounds,
        vec![
            PixelBounds { left: 0, top: 0, right: 100, bottom: 50 },
            PixelBounds { left: 100, top: 0, right: 200, bottom: 50 },
            PixelBounds { left: 0, top: 50, right: 100, bottom: 100 },
            PixelBounds { left: 100, top: 50, right: 200, bottom: 100 },
        ]
    );
    assert_eq!(out.placements[3].label, "Button3");
}

#[test]
fn cell_size_auto_sizes_container() {
    let cfg = LayoutConfig {
        cell_size: Some(ContainerSize::new(30, 20)),
        margins: Margins::uniform(1),
        label_prefix: "Tile".to_string(),
        ..config(3, 2)
    };
    let out = run_layout(&cfg, FixedSource(0.999)).unwrap();
    // One 3x2 region: 3*30 + 2 wide, 2*20 + 2 tall.
    assert_eq!(out.container, ContainerSize::new(92, 42));
    assert_eq!(out.placements.len(), 1);
    assert_eq!(out.placements[0].label, "Tile0");
    assert_eq!(
        out.placements[0].bounds,
        PixelBounds { left: 0, top: 0, right: 90, bottom: 42 }
    );
}

#[test]
fn container_takes_precedence_over_cell_size() {
    let cfg = LayoutConfig {
        container: Some(ContainerSize::new(10, 10)),
        cell_size: Some(ContainerSize::new(100, 100)),
        ..config(1, 1)
    };
    let out = run_layout(&cfg, FixedSource(0.5)).unwrap();
    assert_eq!(out.container, ContainerSize::new(10, 10));
}

#[test]
fn invalid_config_fails_before_partitioning() {
    let cfg = LayoutConfig {
        rows: 0,
        container: Some(ContainerSize::new(10, 10)),
        ..config(2, 2)
    };
    assert!(matches!(
        run_layout(&cfg, FixedSource(0.0)),
        Err(GridError::InvalidDimension(_))
    ));
    assert!(matches!(
        run_layout(&config(2, 2), FixedSource(0.0)),
        Err(GridError::Config(_))
    ));
}

#[test]
fn seeded_runs_repeat() {
    let cfg = LayoutConfig {
        seed: Some(11),
        container: Some(ContainerSize::new(400, 800)),
        ..LayoutConfig::default()
    };
    let a = run_layout_seeded(&cfg).unwrap();
    let b = run_layout_seeded(&cfg).unwrap();
    assert_eq!(a, b);
}

#[test]
fn outcome_serializes_to_json() {
    let cfg = LayoutConfig {
        container: Some(ContainerSize::new(4, 4)),
        ..config(1, 1)
    };
    let out = run_layout(&cfg, FixedSource(0.0)).unwrap();
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["size"]["columns"], 1);
    assert_eq!(v["placements"][0]["bounds"]["right"], 4);
    let back: LayoutOutcome = serde_json::from_value(v).unwrap();
    assert_eq!(back, out);
}

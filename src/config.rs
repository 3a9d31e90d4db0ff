use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{ContainerSize, GridSize, Margins};
use crate::foundation::error::{GridError, GridResult};

/// JSON-facing description of one layout pass.
///
/// ```json
/// { "columns": 4, "rows": 8, "seed": 7, "container": { "width": 1080, "height": 1920 } }
/// ```
///
/// Either `container` or `cell_size` must be present. Without a container the pass sizes
/// itself from its content at `cell_size` per cell.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub columns: u32,
    pub rows: u32,
    pub seed: Option<u64>,
    pub container: Option<ContainerSize>,
    pub cell_size: Option<ContainerSize>,
    pub margins: Margins,
    pub label_prefix: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let size = GridSize::default();
        Self {
            columns: size.columns(),
            rows: size.rows(),
            seed: None,
            container: None,
            cell_size: None,
            margins: Margins::default(),
            label_prefix: "Button".to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> GridResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GridError::config(format!("parse layout config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> GridResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GridError::config(format!("open layout config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn grid_size(&self) -> GridResult<GridSize> {
        GridSize::new(self.columns, self.rows)
    }

    pub fn validate(&self) -> GridResult<()> {
        self.grid_size()?;
        if self.container.is_none() && self.cell_size.is_none() {
            return Err(GridError::config(
                "layout config needs either `container` or `cell_size`",
            ));
        }
        Ok(())
    }
}

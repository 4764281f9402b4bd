use std::sync::Arc;

use log::{info, warn};

use crate::config::ViewerConfig;
use crate::error::Result;
use crate::geometries::{AxisLine, CameraPose, OrthographicFrustum, build_axes};
use crate::structure::crystal_structure::{CellShape, CrystalStructure, build_structure};
use crate::structure::presets::PresetCatalog;

/// Interactive viewing state: the currently displayed structure.
///
/// Each successful selection replaces the structure wholesale. A failed
/// selection leaves the previous structure on display.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    catalog: &'static PresetCatalog,
    config: ViewerConfig,
    current: Option<Arc<CrystalStructure>>,
}

impl ViewerSession {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            catalog: PresetCatalog::global(),
            config,
            current: None,
        }
    }

    /// Build and display the preset registered under `key`.
    pub fn select(&mut self, key: &str) -> Result<Arc<CrystalStructure>> {
        let structure = self.catalog.lookup(key).and_then(|preset| {
            let shape = if self.config.prism_for_hexagonal {
                CellShape::HexagonalPrism
            } else {
                CellShape::Parallelepiped
            };
            build_structure(preset, shape, self.config.padding)
        });

        match structure {
            Ok(structure) => {
                let structure = if self.config.recenter {
                    structure.recentered()
                } else {
                    structure
                };
                info!("Displaying {} ({})", structure.name, structure.key);
                let structure = Arc::new(structure);
                self.current = Some(Arc::clone(&structure));
                Ok(structure)
            }
            Err(err) => {
                warn!(
                    "Ignoring selection {:?}, keeping {:?}: {}",
                    key,
                    self.current_key(),
                    err
                );
                Err(err)
            }
        }
    }

    pub fn current(&self) -> Option<&Arc<CrystalStructure>> {
        self.current.as_ref()
    }

    pub fn current_key(&self) -> Option<&str> {
        self.current.as_deref().map(|structure| structure.key.as_str())
    }

    pub fn catalog(&self) -> &'static PresetCatalog {
        self.catalog
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Frustum framing the current structure, if any.
    pub fn frustum(&self, aspect: f64) -> Option<OrthographicFrustum> {
        self.current
            .as_deref()
            .map(|structure| OrthographicFrustum::from_fit(&structure.fit, aspect))
    }

    /// Reset view looking at the current structure's center.
    pub fn camera_pose(&self) -> CameraPose {
        self.current
            .as_deref()
            .map(|structure| CameraPose::default_view(structure.fit.center))
            .unwrap_or_default()
    }

    pub fn axes(&self) -> [AxisLine; 3] {
        build_axes(self.config.axis_length)
    }
}

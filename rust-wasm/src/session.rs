use crystal_lattice::config::ViewerConfig;
use crystal_lattice::geometries::build_axes;
use crystal_lattice::LatticeError;
use crystal_lattice::structure::ViewerSession;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::common::{AxisData, PresetEntry, StructureData};

/// WASM wrapper for the viewer session
#[wasm_bindgen]
pub struct WasmViewerSession {
    inner: ViewerSession,
}

#[wasm_bindgen]
impl WasmViewerSession {
    /// Create a session with default viewer settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmViewerSession {
        WasmViewerSession {
            inner: ViewerSession::new(ViewerConfig::default()),
        }
    }

    /// Create a session from a settings object (`padding`, `axis_length`, ...)
    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> Result<WasmViewerSession, JsValue> {
        let config: ViewerConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
        WasmViewerSession::from_config(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))
    }

    /// Switch to a preset and return its geometry
    ///
    /// An unknown key is reported as an error and the previous structure stays current.
    #[wasm_bindgen]
    pub fn select(&mut self, key: &str) -> Result<JsValue, JsValue> {
        let structure = self
            .inner
            .select(key)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&StructureData::from(structure.as_ref()))
    }

    /// Key of the structure currently on display
    #[wasm_bindgen]
    pub fn current_key(&self) -> Option<String> {
        self.inner.current_key().map(str::to_string)
    }

    /// Presets in dropdown order
    #[wasm_bindgen]
    pub fn preset_list(&self) -> Result<JsValue, JsValue> {
        let entries: Vec<PresetEntry> =
            self.inner.catalog().iter().map(PresetEntry::from).collect();
        to_js(&entries)
    }

    /// Orthographic frustum for the current structure, or `undefined` before the first selection
    #[wasm_bindgen]
    pub fn frustum(&self, aspect: f64) -> Result<JsValue, JsValue> {
        match self.inner.frustum(aspect) {
            Some(frustum) => to_js(&frustum),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Camera position and target for the reset view
    #[wasm_bindgen]
    pub fn camera_pose(&self) -> Result<JsValue, JsValue> {
        let pose = self.inner.camera_pose();
        #[derive(Serialize)]
        struct Pose {
            position: [f64; 3],
            target: [f64; 3],
        }
        to_js(&Pose {
            position: pose.position.into(),
            target: pose.target.into(),
        })
    }

    /// Labelled a/b/c axes; `length` defaults to the configured axis length
    #[wasm_bindgen]
    pub fn axes(&self, length: Option<f64>) -> Result<JsValue, JsValue> {
        to_js(&self.axis_data(length))
    }
}

impl WasmViewerSession {
    pub fn from_config(config: ViewerConfig) -> Result<WasmViewerSession, LatticeError> {
        config.validate()?;
        Ok(WasmViewerSession {
            inner: ViewerSession::new(config),
        })
    }

    pub fn axis_data(&self, length: Option<f64>) -> Vec<AxisData> {
        let axes = match length {
            Some(length) => build_axes(length),
            None => self.inner.axes(),
        };
        axes.iter().map(AxisData::from).collect()
    }
}

impl Default for WasmViewerSession {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize value: {}", e)))
}

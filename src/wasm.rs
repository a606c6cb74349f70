//! JavaScript bindings. Structured results cross the boundary as JSON strings.

use std::collections::BTreeMap;

use wasm_bindgen::prelude::*;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::configurator::Configurator;
use crate::mapper::ViewportGeometry;
use crate::model::Point;
use crate::preview::{blank_canvas, encode_png, load_base_from_bytes, render_view_preview};

/// LocalStorage key for the saved part -> color mapping.
const SELECTIONS_KEY: &str = "livery-selections";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = AppConfig::load_from_local_storage()
        .map(|config| config.preferences.log_level)
        .unwrap_or_default();
    if let Some(level) = level.to_level_filter().to_level() {
        // Fails only if a logger is already installed
        let _ = console_log::init_with_level(level);
    }
    log::info!("Livery WASM starting...");
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(to_js_error)
}

/// Paint configurator handle for the web front end.
#[wasm_bindgen]
pub struct WasmConfigurator {
    inner: Configurator,
}

#[wasm_bindgen]
impl WasmConfigurator {
    /// Configurator over the built-in catalog, styled from saved preferences.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmConfigurator, JsValue> {
        Self::build(Catalog::builtin())
    }

    /// Configurator over a catalog given as JSON.
    #[wasm_bindgen(js_name = fromCatalogJson)]
    pub fn from_catalog_json(json: &str) -> Result<WasmConfigurator, JsValue> {
        Self::build(Catalog::from_json(json).map_err(to_js_error)?)
    }

    #[wasm_bindgen(js_name = currentView)]
    pub fn current_view(&self) -> Option<String> {
        self.inner.current_view().ok().map(str::to_string)
    }

    /// View ids in cycle order, as a JSON array.
    pub fn views(&self) -> Result<String, JsValue> {
        to_json(&self.inner.views())
    }

    /// The palette, as a JSON array.
    pub fn colors(&self) -> Result<String, JsValue> {
        to_json(&self.inner.colors())
    }

    #[wasm_bindgen(js_name = setView)]
    pub fn set_view(&mut self, view_id: &str) -> Result<(), JsValue> {
        self.inner.set_view(view_id).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = nextView)]
    pub fn next_view(&mut self) -> Option<String> {
        self.inner.next_view().map(str::to_string)
    }

    #[wasm_bindgen(js_name = previousView)]
    pub fn previous_view(&mut self) -> Option<String> {
        self.inner.previous_view().map(str::to_string)
    }

    /// Record the rendered size of the active view's image.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.inner
            .resize(ViewportGeometry::new(width, height))
            .map_err(to_js_error)
    }

    /// Returns the hovered part id, if any.
    #[wasm_bindgen(js_name = onPointerMove)]
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Result<Option<String>, JsValue> {
        self.inner
            .on_pointer_move(Point::new(x, y))
            .map_err(to_js_error)
    }

    /// Returns the clicked part id, if any.
    #[wasm_bindgen(js_name = onPointerClick)]
    pub fn on_pointer_click(&mut self, x: f32, y: f32) -> Result<Option<String>, JsValue> {
        self.inner
            .on_pointer_click(Point::new(x, y))
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = onPointerLeave)]
    pub fn on_pointer_leave(&mut self) {
        self.inner.on_pointer_leave();
    }

    #[wasm_bindgen(js_name = applyColor)]
    pub fn apply_color(&mut self, part_id: &str, color_id: &str) -> Result<(), JsValue> {
        self.inner
            .apply_color_by_id(part_id, color_id)
            .map_err(to_js_error)?;
        self.persist();
        Ok(())
    }

    /// Paint the last clicked part. Returns false if nothing was clicked.
    #[wasm_bindgen(js_name = paintLastClicked)]
    pub fn paint_last_clicked(&mut self, color_id: &str) -> Result<bool, JsValue> {
        let painted = self
            .inner
            .paint_last_clicked(color_id)
            .map_err(to_js_error)?;
        if painted {
            self.persist();
        }
        Ok(painted)
    }

    #[wasm_bindgen(js_name = clearPart)]
    pub fn clear_part(&mut self, part_id: &str) {
        self.inner.clear_part(part_id);
        self.persist();
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.inner.clear_all();
        self.persist();
    }

    /// part id -> color id, as a JSON object.
    #[wasm_bindgen(js_name = exportSelections)]
    pub fn export_selections(&self) -> Result<String, JsValue> {
        to_json(&self.inner.export_selections())
    }

    /// Restore a JSON object of part id -> color id. Returns the number of
    /// parts painted.
    #[wasm_bindgen(js_name = restoreSelections)]
    pub fn restore_selections(&mut self, json: &str) -> Result<usize, JsValue> {
        let saved: BTreeMap<String, String> = serde_json::from_str(json).map_err(to_js_error)?;
        let restored = self.inner.restore_selections(saved);
        self.persist();
        Ok(restored)
    }

    /// Restore the selections saved in localStorage by a previous session.
    #[wasm_bindgen(js_name = restoreFromStorage)]
    pub fn restore_from_storage(&mut self) -> Result<usize, JsValue> {
        let Some(json) = local_storage().and_then(|s| s.get_item(SELECTIONS_KEY).ok().flatten())
        else {
            log::debug!("No saved selections in localStorage");
            return Ok(0);
        };
        self.restore_selections(&json)
    }

    /// Paint overlays for any view at the given size, as JSON.
    #[wasm_bindgen(js_name = overlaysFor)]
    pub fn overlays_for(&self, view_id: &str, width: f32, height: f32) -> Result<String, JsValue> {
        let items = self
            .inner
            .overlays_for(view_id, ViewportGeometry::new(width, height))
            .map_err(to_js_error)?;
        to_json(&items)
    }

    /// Full overlay for the active view, as JSON.
    pub fn frame(&self) -> Result<String, JsValue> {
        to_json(&self.inner.frame().map_err(to_js_error)?)
    }

    /// Tooltip for the hovered part, as JSON (`null` when nothing is hovered).
    #[wasm_bindgen(js_name = hoverInfo)]
    pub fn hover_info(&self) -> Result<String, JsValue> {
        to_json(&self.inner.hover_info())
    }

    /// PNG preview of one view's paint job over encoded base artwork. An
    /// empty array renders on a plain canvas of the view's reference size.
    #[wasm_bindgen(js_name = previewPng)]
    pub fn preview_png(&self, view_id: &str, base_image: &[u8]) -> Result<Vec<u8>, JsValue> {
        let base = if base_image.is_empty() {
            let view = self.inner.registry().view(view_id).map_err(to_js_error)?;
            blank_canvas(view.reference_size)
        } else {
            load_base_from_bytes(base_image).map_err(to_js_error)?
        };
        let preview = render_view_preview(&self.inner, view_id, &base).map_err(to_js_error)?;
        encode_png(&preview).map_err(to_js_error)
    }

    /// The paint job as JSON.
    #[wasm_bindgen(js_name = paintJob)]
    pub fn paint_job(&self) -> Result<String, JsValue> {
        to_json(&self.inner.paint_job())
    }

    /// The paint job as a printable text table.
    #[wasm_bindgen(js_name = paintJobText)]
    pub fn paint_job_text(&self) -> String {
        self.inner.paint_job().to_string()
    }
}

impl WasmConfigurator {
    fn build(catalog: Catalog) -> Result<Self, JsValue> {
        let style = AppConfig::load_from_local_storage()
            .unwrap_or_default()
            .preferences
            .overlay_style();
        let inner = Configurator::from_catalog(catalog)
            .map_err(to_js_error)?
            .with_style(style);
        Ok(Self { inner })
    }

    fn persist(&self) {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(&self.inner.export_selections()) {
            Ok(json) => {
                if let Err(e) = storage.set_item(SELECTIONS_KEY, &json) {
                    log::warn!("Failed to save selections to localStorage: {:?}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize selections: {}", e),
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

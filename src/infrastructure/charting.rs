use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::domain::charts::{SlideChart, TooltipFormat};
use crate::domain::errors::{ChartingResult, PresentationError};
use crate::domain::logging::{LogComponent, get_logger};
use crate::log_debug;

#[wasm_bindgen]
unsafe extern "C" {
    /// Charting capability supplied by the host page: `Chart(ctx, config)`.
    #[wasm_bindgen(js_name = Chart)]
    type HostChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<HostChart, JsValue>;

    #[wasm_bindgen(static_method_of = HostChart, js_name = register, catch)]
    fn register(plugin: &JsValue) -> Result<(), JsValue>;
}

/// Thin bridge between serializable [`crate::domain::charts::ChartSpec`]
/// values and the host page's chart constructor.
pub struct ChartEngine;

impl ChartEngine {
    pub fn new() -> Self {
        Self
    }

    /// Register the data-label overlay plugin when the host page ships it.
    /// Called once at startup; absence is not an error.
    pub fn register_datalabels_plugin(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match Reflect::get(&window, &JsValue::from_str("ChartDataLabels")) {
            Ok(plugin) if !plugin.is_undefined() && !plugin.is_null() => {
                match HostChart::register(&plugin) {
                    Ok(()) => get_logger().info(
                        LogComponent::Infrastructure("ChartEngine"),
                        "Data-label plugin registered",
                    ),
                    Err(e) => get_logger().warn(
                        LogComponent::Infrastructure("ChartEngine"),
                        &format!("Data-label plugin rejected: {e:?}"),
                    ),
                }
            }
            _ => {
                log_debug!(
                    LogComponent::Infrastructure("ChartEngine"),
                    "data-label plugin not present (optional)"
                );
            }
        }
    }

    /// Build one chart against its canvas. Not idempotent: a second call for
    /// the same canvas stacks a duplicate chart, so callers must gate builds
    /// (the slide deck's write-once flag does).
    pub fn build(&self, chart: &SlideChart) -> ChartingResult<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PresentationError::DomError("document not available".to_string()))?;

        let canvas = document
            .get_element_by_id(chart.container_id)
            .ok_or_else(|| {
                PresentationError::DomError(format!("canvas '{}' not found", chart.container_id))
            })?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| {
                PresentationError::DomError(format!("'{}' is not a canvas", chart.container_id))
            })?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| PresentationError::ChartingError("2d context request failed".to_string()))?
            .ok_or_else(|| PresentationError::ChartingError("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PresentationError::ChartingError("2d context cast failed".to_string()))?;

        let json = serde_json::to_string(&chart.spec).map_err(|e| {
            PresentationError::ChartingError(format!("config serialization failed: {e}"))
        })?;
        let config = js_sys::JSON::parse(&json)
            .map_err(|_| PresentationError::ChartingError("config JSON rejected".to_string()))?;
        attach_tooltip_callback(&config, chart.tooltip)?;

        HostChart::new(&ctx, &config).map_err(|e| {
            PresentationError::ChartingError(format!("Chart constructor failed: {e:?}"))
        })?;

        get_logger().info(
            LogComponent::Infrastructure("ChartEngine"),
            &format!("📊 Chart bound to '{}'", chart.container_id),
        );
        Ok(())
    }
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Tooltip text cannot cross the JSON boundary as data, so the label
/// callback is grafted onto the parsed config afterwards.
fn attach_tooltip_callback(config: &JsValue, format: TooltipFormat) -> ChartingResult<()> {
    let options = ensure_object(config, "options")?;
    let plugins = ensure_object(&options, "plugins")?;
    let tooltip = ensure_object(&plugins, "tooltip")?;
    let callbacks = ensure_object(&tooltip, "callbacks")?;
    Reflect::set(&callbacks, &JsValue::from_str("label"), &tooltip_label_function(format))
        .map_err(|_| PresentationError::ChartingError("tooltip callback rejected".to_string()))?;
    Ok(())
}

fn ensure_object(target: &JsValue, key: &str) -> ChartingResult<JsValue> {
    let existing = Reflect::get(target, &JsValue::from_str(key))
        .map_err(|_| PresentationError::ChartingError(format!("config has no '{key}' slot")))?;
    if existing.is_object() {
        return Ok(existing);
    }
    let fresh: JsValue = Object::new().into();
    Reflect::set(target, &JsValue::from_str(key), &fresh)
        .map_err(|_| PresentationError::ChartingError(format!("cannot create '{key}' slot")))?;
    Ok(fresh)
}

/// Per-point label callback. The closure lives as long as the chart does,
/// which is the page lifetime, so it is handed over to JS for good.
fn tooltip_label_function(format: TooltipFormat) -> JsValue {
    let callback = Closure::wrap(Box::new(move |context: JsValue| -> JsValue {
        let series = js_path(&context, &["dataset", "label"])
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        let value = match format {
            TooltipFormat::CurrencyBillions => js_path(&context, &["parsed", "y"]),
            TooltipFormat::ScoreOutOf100 => js_path(&context, &["raw"]),
        }
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
        JsValue::from_str(&format.label_for_point(&series, value))
    }) as Box<dyn Fn(JsValue) -> JsValue>);
    callback.into_js_value()
}

fn js_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut current = root.clone();
    for key in path {
        current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if current.is_undefined() {
            return None;
        }
    }
    Some(current)
}

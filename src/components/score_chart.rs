//! Score Chart Binding
//!
//! Renders the radar chart from the embedded score payload.

use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use crate::bindings::Chart;
use crate::chart::{radar_config, tooltip_label, RadarChartConfig};
use crate::config::PageConfig;
use crate::dom;
use crate::error::ChartError;
use crate::models::ScoreSnapshot;

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Chart.js tooltip label callback: `"<series label>: <raw value> pontos"`.
fn tooltip_callback() -> JsValue {
    let callback = Closure::<dyn FnMut(JsValue) -> JsValue>::new(|context: JsValue| {
        let series = get(&context, "dataset")
            .and_then(|dataset| get(&dataset, "label"))
            .and_then(|label| label.as_string())
            .unwrap_or_default();
        let raw = get(&context, "raw").and_then(|raw| raw.as_f64()).unwrap_or(0.0);
        JsValue::from_str(&tooltip_label(&series, raw))
    });
    callback.into_js_value()
}

fn to_js_config(config: &RadarChartConfig) -> Result<JsValue, ChartError> {
    let value = serde_wasm_bindgen::to_value(config).map_err(|e| ChartError::Render(e.to_string()))?;
    let plugins = get(&value, "options")
        .and_then(|options| get(&options, "plugins"))
        .ok_or_else(|| ChartError::Render("options.plugins missing".to_string()))?;

    let callbacks = Object::new();
    let tooltip = Object::new();
    Reflect::set(&callbacks, &JsValue::from_str("label"), &tooltip_callback())
        .and_then(|_| Reflect::set(&tooltip, &JsValue::from_str("callbacks"), &callbacks))
        .and_then(|_| Reflect::set(&plugins, &JsValue::from_str("tooltip"), &tooltip))
        .map_err(|e| ChartError::Render(format!("{:?}", e)))?;
    Ok(value)
}

/// Returns false when the page has no chart canvas.
pub fn init_score_chart(config: &PageConfig) -> Result<bool, ChartError> {
    let Some(canvas) = dom::element_by_id(config.chart_canvas_id) else {
        return Ok(false);
    };

    let payload = dom::element_by_id(config.chart_data_id)
        .ok_or_else(|| ChartError::MissingPayload(config.chart_data_id.to_string()))?;
    let snapshot = ScoreSnapshot::from_json(&payload.text_content().unwrap_or_default())?;

    let canvas: HtmlCanvasElement = canvas
        .dyn_into()
        .map_err(|_| ChartError::Canvas(format!("#{} is not a canvas", config.chart_canvas_id)))?;
    let context = canvas
        .get_context("2d")
        .map_err(|e| ChartError::Canvas(format!("{:?}", e)))?
        .ok_or_else(|| ChartError::Canvas("2d context unavailable".to_string()))?;

    let chart_config = to_js_config(&radar_config(&snapshot))?;
    Chart::new(&JsValue::from(context), &chart_config).map_err(|e| ChartError::Render(format!("{:?}", e)))?;

    log::info!("score chart rendered: {:?}", snapshot.axis_values());
    Ok(true)
}

//! Chart.js binding. The host page loads Chart.js as a global script.

use js_sys::{Reflect, JSON};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use super::chart::{ChartBackend, ChartError, LineChartConfig};
use crate::core::format::tick_label;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(context: &JsValue, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

#[derive(Debug, Default)]
pub struct ChartJsBackend;

/// 2d context of a resolved canvas.
pub struct ChartJsSurface {
    canvas_id: String,
    context: js_sys::Object,
}

pub struct ChartJsHandle {
    chart: JsChart,
    // Referenced by the chart's y-axis options; must outlive it.
    _tick_callback: Closure<dyn Fn(JsValue) -> JsValue>,
}

impl ChartBackend for ChartJsBackend {
    type Surface = ChartJsSurface;
    type Handle = ChartJsHandle;

    fn surface(&mut self, canvas_id: &str) -> Result<Self::Surface, ChartError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ChartError::NoDocument)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| ChartError::MissingCanvas(canvas_id.to_string()))?;
        let context = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| ChartError::MissingCanvas(canvas_id.to_string()))?;
        Ok(ChartJsSurface {
            canvas_id: canvas_id.to_string(),
            context,
        })
    }

    fn render(
        &mut self,
        surface: Self::Surface,
        config: &LineChartConfig,
    ) -> Result<Self::Handle, ChartError> {
        let options = JSON::parse(&serde_json::to_string(config)?).map_err(js_error)?;

        let tick_callback = Closure::<dyn Fn(JsValue) -> JsValue>::new(|value: JsValue| {
            value
                .as_f64()
                .and_then(tick_label)
                .map(|label| JsValue::from_str(&label))
                .unwrap_or(JsValue::NULL)
        });
        let ticks = ["options", "scales", "y", "ticks"]
            .iter()
            .try_fold(options.clone(), |node, key| Reflect::get(&node, &JsValue::from_str(key)))
            .map_err(js_error)?;
        Reflect::set(&ticks, &JsValue::from_str("callback"), tick_callback.as_ref())
            .map_err(js_error)?;

        let chart = JsChart::new(surface.context.as_ref(), &options).map_err(js_error)?;
        debug!(canvas_id = %surface.canvas_id, "chart drawn");

        Ok(ChartJsHandle {
            chart,
            _tick_callback: tick_callback,
        })
    }

    fn destroy(&mut self, handle: Self::Handle) {
        handle.chart.destroy();
    }
}

fn js_error(value: JsValue) -> ChartError {
    ChartError::Js(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

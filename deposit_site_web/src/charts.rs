//! Chart rendering through the page's global `Chart` collaborator.

use deposit_site::charts::{ChartSpec, page_charts};
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

/// Construct a chart in every present canvas; returns how many were built.
///
/// When the collaborator script did not load, or a canvas is absent from the
/// page, the slot is skipped.
pub(crate) fn init(document: &Document) -> usize {
    let Some(constructor) = chart_constructor() else {
        return 0;
    };
    let mut built = 0;
    for spec in page_charts() {
        let Some(canvas) = document.get_element_by_id(spec.element_id) else {
            continue;
        };
        if construct(&constructor, canvas.as_ref(), &spec).is_ok() {
            built += 1;
        }
    }
    built
}

fn chart_constructor() -> Option<Function> {
    let chart = Reflect::get(&js_sys::global(), &JsValue::from_str("Chart")).ok()?;
    chart.dyn_into::<Function>().ok()
}

fn construct(
    constructor: &Function,
    canvas: &JsValue,
    spec: &ChartSpec,
) -> Result<JsValue, JsValue> {
    // json_compatible keeps the config a plain object rather than ES maps.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let config = spec.config().serialize(&serializer).map_err(JsValue::from)?;
    Reflect::construct(constructor, &Array::of2(canvas, &config))
}

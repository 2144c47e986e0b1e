//! Prediction form submission over fetch.

use std::cell::Cell;
use std::rc::Rc;

use deposit_site::predict::{self, PredictPayload, Prediction};
use deposit_site::{PageConfig, SiteError};
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, FormData, HtmlFormElement};

use crate::events::EventBinding;

/// Wire the prediction form to the endpoint, rendering into the result
/// container. Returns `None` when the form or the container is missing.
///
/// Submissions are serialised: while a request is in flight further submit
/// events are dropped, so only one request can be rendering into the
/// container at a time.
pub(crate) fn init(document: &Document, config: &PageConfig) -> Option<EventBinding> {
    let form = document
        .get_element_by_id(&config.predict_form_id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())?;
    let result = document.get_element_by_id(&config.predict_result_id)?;

    let endpoint = config.predict_endpoint.clone();
    let in_flight = Rc::new(Cell::new(false));

    let handler = {
        let form = form.clone();
        Box::new(move |event: Event| {
            event.prevent_default();
            if in_flight.get() {
                return;
            }
            let payload = collect_fields(&form);
            result.set_inner_html(predict::PENDING_MARKUP);
            in_flight.set(true);

            let endpoint = endpoint.clone();
            let result = result.clone();
            let in_flight = Rc::clone(&in_flight);
            spawn_local(async move {
                let markup = match request_prediction(&endpoint, &payload).await {
                    Ok(prediction) => predict::result_markup(&prediction),
                    Err(_) => predict::ERROR_MARKUP.to_string(),
                };
                result.set_inner_html(&markup);
                in_flight.set(false);
            });
        }) as Box<dyn FnMut(Event)>
    };
    EventBinding::attach(&form, "submit", handler).ok()
}

/// Snapshot the form's current fields; only string-valued entries are kept.
fn collect_fields(form: &HtmlFormElement) -> PredictPayload {
    let mut payload = PredictPayload::new();
    let Ok(data) = FormData::new_with_form(form) else {
        return payload;
    };
    let Ok(Some(entries)) = js_sys::try_iter(data.as_ref()) else {
        return payload;
    };
    for entry in entries.flatten() {
        let pair = js_sys::Array::from(&entry);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            payload.insert(name, value);
        }
    }
    payload
}

async fn request_prediction(
    endpoint: &str,
    payload: &PredictPayload,
) -> Result<Prediction, SiteError> {
    let response = Request::post(endpoint)
        .json(payload)
        .map_err(|err| SiteError::Request(err.to_string()))?
        .send()
        .await
        .map_err(|err| SiteError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(SiteError::Request(format!("status {}", response.status())));
    }
    response
        .json::<Prediction>()
        .await
        .map_err(|err| SiteError::Decode(err.to_string()))
}

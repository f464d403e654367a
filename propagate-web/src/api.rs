//! JavaScript-facing API
//!
//! Exported names mirror the helper's original JS surface, so pages load
//! the wasm module and call these directly. Failures surface as thrown
//! JS errors carrying the [`PropagateError`] display text.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use lib_params::{append_query_params, propagate, PropagateError, QueryParamMap};

use crate::context::NavigationContext;
use crate::sinks::{AnchorSink, IframeSink};

fn js_error(err: PropagateError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

/// Read every query parameter of the current page as a plain object.
///
/// Returns an empty object when the page has no query string.
#[wasm_bindgen(js_name = getAllQueryParams)]
pub fn get_all_query_params() -> Result<JsValue, JsValue> {
    let context = NavigationContext::from_window().map_err(js_error)?;
    let params = context.query_params();
    params
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| JsValue::from(JsError::new(&err.to_string())))
}

/// Merge `params` (a plain object of string values) into `base_url`.
#[wasm_bindgen(js_name = appendQueryParams)]
pub fn append_query_params_js(base_url: &str, params: JsValue) -> Result<String, JsValue> {
    let params: QueryParamMap = serde_wasm_bindgen::from_value(params)
        .map_err(|err| JsValue::from(JsError::new(&err.to_string())))?;
    append_query_params(base_url, &params).map_err(js_error)
}

/// Point `frame` at `base_iframe_url`, carrying the current page's query.
#[wasm_bindgen(js_name = setIframeSrcWithQuery)]
pub fn set_iframe_src_with_query(frame: &Element, base_iframe_url: &str) -> Result<(), JsValue> {
    let sink = IframeSink::from_element(frame).map_err(js_error)?;
    let context = NavigationContext::from_window().map_err(js_error)?;
    propagate(&sink, base_iframe_url, &context.query_params())
        .map(|_| ())
        .map_err(js_error)
}

/// Navigate the current page to `base_url`, carrying its query.
///
/// Irreversible: a successful call abandons the caller's page.
#[wasm_bindgen(js_name = redirectToUrlWithQuery)]
pub fn redirect_to_url_with_query(base_url: &str) -> Result<(), JsValue> {
    let context = NavigationContext::from_window().map_err(js_error)?;
    let sink = context.page_sink();
    propagate(&sink, base_url, &context.query_params())
        .map(|_| ())
        .map_err(js_error)
}

/// Point `anchor` at `base_url`, carrying the current page's query.
#[wasm_bindgen(js_name = generateLinkWithQuery)]
pub fn generate_link_with_query(base_url: &str, anchor: &Element) -> Result<(), JsValue> {
    let sink = AnchorSink::from_element(anchor).map_err(js_error)?;
    let context = NavigationContext::from_window().map_err(js_error)?;
    propagate(&sink, base_url, &context.query_params())
        .map(|_| ())
        .map_err(js_error)
}

//! Browser bindings for query parameter propagation
//!
//! Thin `web-sys` layer over `lib-params`: reads the current page's query
//! string and writes merged URLs onto iframe, anchor, and page sinks.

use wasm_bindgen::prelude::*;

pub mod api;
pub mod context;
pub mod sinks;

pub use context::NavigationContext;
pub use sinks::{AnchorSink, IframeSink, PageSink};

/// Module entry point: install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("query propagation helper loaded");
}

//! WASM bindings for the page-map engine
//!
//! Requests and page maps cross the boundary as JSON strings; field names
//! are camelCase on both sides.

use wasm_bindgen::prelude::*;

use crate::{parse_request, PageMapCache, PaginationError};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: PaginationError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// WASM-exposed, memoizing page mapper
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmPageMapper {
    cache: PageMapCache,
    total_pages: usize,
}

#[wasm_bindgen]
impl WasmPageMapper {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute (or reuse) the page map for a request; returns page map JSON
    pub fn compute(&mut self, request_json: &str) -> Result<String, JsValue> {
        let request = parse_request(request_json).map_err(to_js_error)?;
        let map = self.cache.paginate(&request);
        self.total_pages = map.total_pages;
        serde_json::to_string(map).map_err(|e| to_js_error(e.into()))
    }

    /// Page count of the last computed map
    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.total_pages
    }

    /// Fingerprint of the cached map as a hex string, empty when nothing is cached
    pub fn fingerprint(&self) -> String {
        self.cache
            .last_fingerprint()
            .map(|key| format!("{:016x}", key))
            .unwrap_or_default()
    }

    /// Forget the cached map
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
        self.total_pages = 0;
    }
}

/// One-shot page map computation without caching
#[wasm_bindgen(js_name = calculatePageMap)]
pub fn calculate_page_map_json(request_json: &str) -> Result<String, JsValue> {
    let request = parse_request(request_json).map_err(to_js_error)?;
    let map = crate::paginate(&request);
    serde_json::to_string(&map).map_err(|e| to_js_error(e.into()))
}

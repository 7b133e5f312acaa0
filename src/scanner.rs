//! Barcode Scanner Binding
//!
//! Bindings to the `html5-qrcode` library loaded by index.html.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    type Html5QrcodeScanner;

    #[wasm_bindgen(constructor, catch)]
    fn new(element_id: &str, config: JsValue, verbose: bool) -> Result<Html5QrcodeScanner, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn render(this: &Html5QrcodeScanner, on_success: &Closure<dyn FnMut(String)>) -> Result<(), JsValue>;
}

/// Camera scan settings
#[derive(Serialize)]
pub struct ScannerConfig {
    pub fps: u32,
    pub qrbox: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self { fps: 10, qrbox: 250 }
    }
}

/// Render the scanner into `element_id`; `on_scan` receives each decoded text.
///
/// The scanner runs for the rest of the page's life.
pub fn start(element_id: &str, config: &ScannerConfig, on_scan: impl FnMut(String) + 'static) -> Result<(), String> {
    let js_config = serde_wasm_bindgen::to_value(config).map_err(|e| e.to_string())?;
    let scanner = Html5QrcodeScanner::new(element_id, js_config, false).map_err(describe)?;
    let callback = Closure::<dyn FnMut(String)>::new(on_scan);
    scanner.render(&callback).map_err(describe)?;
    callback.forget();
    Ok(())
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

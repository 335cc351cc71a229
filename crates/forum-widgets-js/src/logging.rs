//! Console logging setup.

use wasm_bindgen::prelude::*;

use forum_widgets_browser::LogConfig;

/// Route `tracing` output to the browser console.
///
/// Logging stays off until this is called, and when `enabled` is false.
/// Only the first successful call installs a subscriber.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(config: JsValue) -> Result<(), JsError> {
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let config: LogConfig = if config.is_undefined() || config.is_null() {
        LogConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid log config: {}", e)))?
    };
    if !config.enabled {
        return Ok(());
    }

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.level.into())
            .build(),
    );
    let reg = Registry::default().with(wasm_layer);

    if set_global_default(reg).is_err() {
        tracing::debug!("logging already initialised");
    }
    Ok(())
}

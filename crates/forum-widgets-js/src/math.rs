//! `MathLiveBlock` - the math block class handed to the block editor.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use forum_widgets_browser::{BlockTool, MathBlock};

use crate::types::{BlockOptions, JsMathData, JsToolbox};

fn host_handle(options: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(options, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

/// Block-editor tool embedding a `math-field`.
///
/// Registered with the editor as `tools: { math: MathLiveBlock }`.
#[wasm_bindgen(js_name = MathLiveBlock)]
pub struct JsMathBlock {
    inner: MathBlock,
    // Host handles, kept for the lifetime of the block.
    api: JsValue,
    config: JsValue,
}

#[wasm_bindgen(js_class = MathLiveBlock)]
impl JsMathBlock {
    /// Construct from the host's `{ data, config, api, readOnly }` options.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<JsMathBlock, JsError> {
        let parsed: BlockOptions = if options.is_undefined() || options.is_null() {
            BlockOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options.clone())
                .map_err(|e| JsError::new(&format!("Invalid block options: {}", e)))?
        };
        let api = host_handle(&options, "api");
        let config = host_handle(&options, "config");

        Ok(Self {
            inner: MathBlock::new(parsed.data.map(Into::into), parsed.read_only),
            api,
            config,
        })
    }

    /// Insertion menu entry.
    #[wasm_bindgen(getter)]
    pub fn toolbox() -> JsToolbox {
        <MathBlock as BlockTool>::TOOLBOX.into()
    }

    #[wasm_bindgen(getter = isReadOnlySupported)]
    pub fn is_read_only_supported() -> bool {
        <MathBlock as BlockTool>::READ_ONLY_SUPPORTED
    }

    /// Build the block element for the host to mount.
    pub fn render(&mut self) -> Result<HtmlElement, JsValue> {
        self.inner.render()
    }

    /// Current data for the host's save cycle.
    pub fn save(&self) -> JsMathData {
        self.inner.save().into()
    }

    /// Whether saved data carries a math expression.
    pub fn validate(&self, saved: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<JsMathData>(saved) {
            Ok(data) => self.inner.validate(&data.into()),
            Err(e) => {
                tracing::debug!("math block data failed to parse: {}", e);
                false
            }
        }
    }

    /// Host editor API handle passed at construction.
    #[wasm_bindgen(getter)]
    pub fn api(&self) -> JsValue {
        self.api.clone()
    }

    /// Tool configuration passed at construction.
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> JsValue {
        self.config.clone()
    }
}

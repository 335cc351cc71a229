//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use forum_widgets_browser::{MathData, Toolbox};

/// Saved data of a math block, as the host editor stores it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsMathData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub content: Option<String>,
}

impl From<JsMathData> for MathData {
    fn from(data: JsMathData) -> Self {
        MathData {
            content: data.content,
        }
    }
}

impl From<MathData> for JsMathData {
    fn from(data: MathData) -> Self {
        JsMathData {
            content: data.content,
        }
    }
}

/// Toolbox entry for the host's insertion menu.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsToolbox {
    pub title: String,
    pub icon: String,
}

impl From<Toolbox> for JsToolbox {
    fn from(toolbox: Toolbox) -> Self {
        JsToolbox {
            title: toolbox.title.to_string(),
            icon: toolbox.icon.to_string(),
        }
    }
}

/// Options object the host editor passes to a block constructor.
///
/// `api` and `config` are opaque host objects and are read separately.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockOptions {
    pub data: Option<JsMathData>,
    pub read_only: bool,
}

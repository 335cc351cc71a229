//! WASM bindings for the forum widgets.
//!
//! Loaded by the forum pages as one module:
//!
//! ```js
//! import init, { MathLiveBlock, installScheduleWidget, initLogging } from "./forum_widgets_js.js";
//! await init();
//! initLogging({ level: "info" });
//! installScheduleWidget();
//! new EditorJS({ tools: { math: MathLiveBlock } });
//! ```

mod logging;
mod math;
mod schedule;
mod types;

pub use logging::*;
pub use math::*;
pub use schedule::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

//! Schedule widget entry points.

use wasm_bindgen::prelude::*;

use forum_widgets_browser::{ScheduleConfig, ScheduleWidget, install_schedule_widget};

fn parse_config(config: JsValue) -> Result<ScheduleConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(ScheduleConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid schedule config: {}", e)))
}

/// Mount the schedule widget on the current page right away.
///
/// Returns whether the page had a schedule card to mount on.
#[wasm_bindgen(js_name = initScheduleWidget)]
pub fn init_schedule_widget(config: JsValue) -> Result<bool, JsError> {
    let config = parse_config(config)?;
    let widget = ScheduleWidget::mount(&config)
        .map_err(|e| JsError::new(&format!("Failed to mount schedule widget: {:?}", e)))?;
    Ok(match widget {
        Some(widget) => {
            widget.forget();
            true
        }
        None => false,
    })
}

/// Mount the schedule widget once the document has finished loading.
#[wasm_bindgen(js_name = installScheduleWidget)]
pub fn install(config: JsValue) -> Result<(), JsError> {
    let config = parse_config(config)?;
    install_schedule_widget(config)
        .map_err(|e| JsError::new(&format!("Failed to install schedule widget: {:?}", e)))
}

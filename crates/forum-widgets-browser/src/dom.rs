//! DOM lookup and element construction helpers.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use forum_widgets_core::ScheduleElementIds;

/// The page's document.
pub fn document() -> Result<Document, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Origin of the current page, used to resolve relative endpoints.
pub fn page_origin() -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.location().origin()
}

/// Create `<tag class="...">`.
pub fn create_with_class(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    Ok(element)
}

/// The elements the schedule widget reads and writes.
#[derive(Debug, Clone)]
pub struct ScheduleElements {
    pub picker: HtmlInputElement,
    pub prev: HtmlElement,
    pub next: HtmlElement,
    pub list: Element,
    pub title: Element,
    pub badges: Element,
}

impl ScheduleElements {
    /// Look up all widget elements, or `None` if any is missing.
    ///
    /// Pages without the schedule card simply don't have these ids.
    pub fn find(document: &Document, ids: &ScheduleElementIds) -> Option<Self> {
        let by_id = |id: &str| document.get_element_by_id(id);
        Some(Self {
            picker: by_id(&ids.date_picker)?.dyn_into().ok()?,
            prev: by_id(&ids.prev_day)?.dyn_into().ok()?,
            next: by_id(&ids.next_day)?.dyn_into().ok()?,
            list: by_id(&ids.list)?,
            title: by_id(&ids.title)?,
            badges: by_id(&ids.badges)?,
        })
    }

    /// Raw `data-tomorrow` value of the date picker.
    pub fn tomorrow_attr(&self) -> Option<String> {
        self.picker.dataset().get("tomorrow")
    }
}

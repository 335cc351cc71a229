//! DOM side of the math block.
//!
//! Renders a `math-field` custom element inside a non-editable wrapper and
//! keeps `MathBlockState` in sync with the field's value.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, KeyboardEvent};

use forum_widgets_core::{BlockTool, MATH_TOOLBOX, MathBlockState, MathData, Toolbox, captures_key};

use crate::dom::document;

/// Tag of the math-input custom element.
pub const MATH_FIELD_TAG: &str = "math-field";

const MATH_FIELD_STYLE: &str = "min-width: 100px; min-height: 30px;";

/// Read the field's `.value` property.
pub fn field_value(field: &HtmlElement) -> Result<String, JsValue> {
    let value = Reflect::get(field, &JsValue::from_str("value"))?;
    Ok(value.as_string().unwrap_or_default())
}

/// Set the field's `.value` property.
pub fn set_field_value(field: &HtmlElement, value: &str) -> Result<(), JsValue> {
    Reflect::set(field, &JsValue::from_str("value"), &JsValue::from_str(value))?;
    Ok(())
}

/// A math block instance owned by the host editor.
pub struct MathBlock {
    state: Rc<RefCell<MathBlockState>>,
    listeners: Vec<EventListener>,
}

impl MathBlock {
    pub fn new(data: Option<MathData>, read_only: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(MathBlockState::new(data, read_only))),
            listeners: Vec::new(),
        }
    }

    /// Current expression.
    pub fn content(&self) -> String {
        self.state.borrow().content().to_string()
    }
}

impl BlockTool for MathBlock {
    type Data = MathData;
    type Element = HtmlElement;
    type Error = JsValue;

    const TOOLBOX: Toolbox = MATH_TOOLBOX;
    const READ_ONLY_SUPPORTED: bool = true;

    fn render(&mut self) -> Result<HtmlElement, JsValue> {
        let document = document()?;
        let wrapper: HtmlElement = document.create_element("div")?.dyn_into()?;
        wrapper.set_content_editable("false");

        let field: HtmlElement = document.create_element(MATH_FIELD_TAG)?.dyn_into()?;
        field.set_attribute("style", MATH_FIELD_STYLE)?;

        let (content, read_only) = {
            let state = self.state.borrow();
            (state.content().to_string(), state.read_only())
        };
        set_field_value(&field, &content)?;

        // Re-rendering replaces the previous element's handlers.
        self.listeners.clear();

        if read_only {
            field.set_attribute("read-only", "")?;
        } else {
            let state = Rc::clone(&self.state);
            let source = field.clone();
            self.listeners.push(EventListener::new(&field, "input", move |_event| {
                match field_value(&source) {
                    Ok(value) => {
                        let mut state = state.borrow_mut();
                        state.set_content(value);
                        state.save();
                    }
                    Err(err) => tracing::warn!("cannot read math field value: {:?}", err),
                }
            }));
        }

        let target = field.clone();
        self.listeners.push(EventListener::new_with_options(
            &field,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if captures_key(&event.key(), &event.code()) {
                    event.prevent_default();
                    event.stop_propagation();
                    if let Err(err) = target.focus() {
                        tracing::debug!("math field refocus failed: {:?}", err);
                    }
                }
            },
        ));

        wrapper.append_child(&field)?;
        Ok(wrapper)
    }

    fn save(&self) -> MathData {
        self.state.borrow().save()
    }

    fn validate(&self, saved: &MathData) -> bool {
        MathBlockState::validate(saved)
    }
}

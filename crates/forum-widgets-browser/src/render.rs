//! Writes a `ScheduleView` into the widget's title, badge row and list.
//!
//! Server-supplied strings are inserted as text nodes only.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use forum_widgets_core::{Badge, ListContent, ScheduleItem, ScheduleView};

use crate::dom::{ScheduleElements, create_with_class};

const ITEM_CLASS: &str = "list-group-item";
const PARAGRAPH_STYLE: &str = "margin-bottom: 0px;";

/// Replace the widget's title, badges and list with `view`.
pub fn render_schedule_view(
    document: &Document,
    elements: &ScheduleElements,
    view: &ScheduleView,
) -> Result<(), JsValue> {
    elements.title.set_text_content(Some(&view.title));
    render_badges(document, &elements.badges, &view.badges)?;
    render_list(document, &elements.list, &view.list)
}

/// Rebuild the badge row.
pub fn render_badges(
    document: &Document,
    container: &Element,
    badges: &[Badge],
) -> Result<(), JsValue> {
    container.set_text_content(None);
    for badge in badges {
        let pill_class = format!("badge rounded-pill {}", badge.class());
        let pill = create_with_class(document, "span", &pill_class)?;
        let icon = create_with_class(document, "i", &format!("fas {} me-1", badge.icon()))?;
        pill.append_child(&icon)?;
        pill.append_with_str_1(badge.label())?;
        container.append_child(&pill)?;
    }
    Ok(())
}

/// Rebuild the schedule list.
pub fn render_list(
    document: &Document,
    container: &Element,
    content: &ListContent,
) -> Result<(), JsValue> {
    container.set_text_content(None);
    match content {
        ListContent::Loading => {
            let item = create_with_class(document, "li", ITEM_CLASS)?;
            let spinner =
                create_with_class(document, "div", "spinner-border spinner-border-sm me-2")?;
            spinner.set_attribute("role", "status")?;
            item.append_child(&spinner)?;
            item.append_with_str_1(forum_widgets_core::schedule::LOADING_TEXT)?;
            container.append_child(&item)?;
        }
        ListContent::Entries(items) => {
            for entry in items {
                container.append_child(entry_item(document, entry)?.as_ref())?;
            }
        }
        other => {
            let Some(message) = other.message() else {
                return Ok(());
            };
            if other.is_error() {
                let item =
                    create_with_class(document, "li", &format!("{ITEM_CLASS} text-danger"))?;
                item.set_text_content(Some(message));
                container.append_child(&item)?;
            } else {
                let item = create_with_class(document, "li", ITEM_CLASS)?;
                item.append_child(paragraph(document, message)?.as_ref())?;
                container.append_child(&item)?;
            }
        }
    }
    Ok(())
}

fn entry_item(document: &Document, entry: &ScheduleItem) -> Result<Element, JsValue> {
    let item = create_with_class(document, "li", ITEM_CLASS)?;
    let row = create_with_class(
        document,
        "div",
        "d-flex justify-content-between align-items-center mb-1",
    )?;
    row.append_child(paragraph(document, entry.block_label())?.as_ref())?;
    if let Some(time) = entry.time_label() {
        row.append_child(paragraph(document, time)?.as_ref())?;
    }
    item.append_child(&row)?;
    Ok(item)
}

fn paragraph(document: &Document, text: &str) -> Result<Element, JsValue> {
    let p = document.create_element("p")?;
    p.set_attribute("style", PARAGRAPH_STYLE)?;
    p.set_text_content(Some(text));
    Ok(p)
}

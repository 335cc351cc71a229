//! Schedule widget: wires the date picker and day buttons to the controller.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use forum_widgets_core::{
    DayStep, RequestTicket, ScheduleClient, ScheduleConfig, ScheduleController, format_iso_date,
    local_today, parse_iso_date,
};

use crate::dom::{ScheduleElements, document, page_origin};
use crate::render::render_schedule_view;

struct WidgetInner {
    document: Document,
    elements: ScheduleElements,
    controller: RefCell<ScheduleController>,
    client: ScheduleClient,
}

/// A mounted schedule widget.
///
/// Dropping it removes the event listeners; call [`forget`](Self::forget)
/// to keep it alive for the rest of the page.
pub struct ScheduleWidget {
    inner: Rc<WidgetInner>,
    listeners: Vec<EventListener>,
}

impl ScheduleWidget {
    /// Mount the widget on the current page.
    ///
    /// Returns `Ok(None)` when the page has no schedule card or the picker
    /// has no usable `data-tomorrow` date.
    pub fn mount(config: &ScheduleConfig) -> Result<Option<Self>, JsValue> {
        let document = document()?;
        let Some(elements) = ScheduleElements::find(&document, &config.elements) else {
            tracing::debug!("schedule elements not found on this page, skipping");
            return Ok(None);
        };
        let Some(raw_tomorrow) = elements.tomorrow_attr() else {
            tracing::debug!("schedule date picker has no data-tomorrow, skipping");
            return Ok(None);
        };
        let tomorrow = match parse_iso_date(&raw_tomorrow) {
            Ok(date) => date,
            Err(err) => {
                tracing::warn!(error = %err, "unusable data-tomorrow, skipping schedule widget");
                return Ok(None);
            }
        };

        let client = ScheduleClient::new(&page_origin()?, config.endpoint.clone())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let initial_title = elements.title.text_content().unwrap_or_default();

        // Discard any value the browser restored into the form field.
        elements.picker.set_value(&format_iso_date(tomorrow));

        let inner = Rc::new(WidgetInner {
            document,
            elements,
            controller: RefCell::new(ScheduleController::new(tomorrow, initial_title)),
            client,
        });
        let listeners = vec![
            Self::on_change(&inner),
            Self::on_step(&inner, DayStep::Previous),
            Self::on_step(&inner, DayStep::Next),
        ];
        tracing::debug!(%tomorrow, "schedule widget mounted");

        Ok(Some(Self { inner, listeners }))
    }

    /// Keep the listeners registered for the lifetime of the page.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }

    /// Date currently selected in the controller.
    pub fn selected_date(&self) -> String {
        format_iso_date(self.inner.controller.borrow().selected_date())
    }

    /// Select `date` (a `YYYY-MM-DD` string) and refresh, as if the picker changed.
    pub fn select(&self, date: &str) -> Result<(), JsValue> {
        let date = parse_iso_date(date).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let ticket = self.inner.controller.borrow_mut().select(date, local_today());
        refresh(&self.inner, ticket);
        Ok(())
    }

    fn on_change(inner: &Rc<WidgetInner>) -> EventListener {
        let inner_cb = Rc::clone(inner);
        EventListener::new(&inner.elements.picker, "change", move |_event| {
            let value = inner_cb.elements.picker.value();
            let date = match parse_iso_date(&value) {
                Ok(date) => date,
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring date picker value");
                    return;
                }
            };
            let ticket = inner_cb.controller.borrow_mut().select(date, local_today());
            refresh(&inner_cb, ticket);
        })
    }

    fn on_step(inner: &Rc<WidgetInner>, step: DayStep) -> EventListener {
        let button = match step {
            DayStep::Previous => &inner.elements.prev,
            DayStep::Next => &inner.elements.next,
        };
        let inner_cb = Rc::clone(inner);
        EventListener::new(button, "click", move |_event| {
            let stepped = inner_cb.controller.borrow_mut().step(step, local_today());
            match stepped {
                Ok(ticket) => {
                    inner_cb
                        .elements
                        .picker
                        .set_value(&format_iso_date(ticket.date()));
                    refresh(&inner_cb, ticket);
                }
                Err(err) => tracing::warn!(error = %err, "cannot step schedule date"),
            }
        })
    }
}

/// Mount the widget once the document has loaded and keep it for the page's lifetime.
pub fn install_schedule_widget(config: ScheduleConfig) -> Result<(), JsValue> {
    let document = document()?;
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_event| {
            mount_for_page(&config);
        })
        .forget();
    } else {
        mount_for_page(&config);
    }
    Ok(())
}

fn mount_for_page(config: &ScheduleConfig) {
    match ScheduleWidget::mount(config) {
        Ok(Some(widget)) => widget.forget(),
        Ok(None) => {}
        Err(err) => tracing::error!("failed to mount schedule widget: {:?}", err),
    }
}

/// Show the loading view, then fetch and render the outcome for `ticket`.
fn refresh(inner: &Rc<WidgetInner>, ticket: RequestTicket) {
    render_current(inner);

    let inner = Rc::clone(inner);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = inner.client.fetch_daily(ticket.date()).await;
        let accepted = inner
            .controller
            .borrow_mut()
            .complete(&ticket, outcome)
            .is_some();
        if accepted {
            render_current(&inner);
        }
    });
}

fn render_current(inner: &WidgetInner) {
    let controller = inner.controller.borrow();
    let Some(view) = controller.view() else {
        return;
    };
    if let Err(err) = render_schedule_view(&inner.document, &inner.elements, view) {
        tracing::error!("failed to render schedule: {:?}", err);
    }
}

//! Daily schedule widget: wire model, view model, and controller.

mod controller;
mod response;
mod view;

pub use controller::{RequestTicket, ScheduleController, TitleKind};
pub use response::{NO_SCHOOL_MARKER, ScheduleEntry, ScheduleItem, ScheduleResponse};
pub use view::{
    Badge, FETCH_ERROR_TEXT, ListContent, LOADING_TEXT, NO_SCHOOL_TEXT, PENDING_TITLE,
    ScheduleView, UNAVAILABLE_TEXT,
};

//! forum-widgets-core: pure Rust logic for the forum's browser widgets.
//!
//! This crate provides:
//! - `BlockTool` - typed contract for block-editor plugins
//! - `MathBlockState` - data and key handling behind the math block
//! - `calendar` - week membership, weekday names, day stepping
//! - `schedule` - response model, view model and the refresh state machine
//! - `ScheduleClient` - HTTP access to the daily schedule endpoint
//!
//! Nothing here touches the DOM; `forum-widgets-browser` renders the
//! views produced by this crate.

pub mod block;
pub mod calendar;
pub mod client;
pub mod config;
pub mod error;
pub mod math;
pub mod schedule;

pub use block::{BlockTool, Toolbox};
pub use calendar::{
    DayStep, day_name, format_iso_date, is_in_current_week, local_today, parse_iso_date,
};
pub use client::ScheduleClient;
pub use config::{LogConfig, LogLevel, ScheduleConfig, ScheduleElementIds};
pub use error::WidgetError;
pub use math::{MATH_TOOLBOX, MathBlockState, MathData, captures_key};
pub use schedule::{
    Badge, ListContent, RequestTicket, ScheduleController, ScheduleEntry, ScheduleItem,
    ScheduleResponse, ScheduleView, TitleKind,
};

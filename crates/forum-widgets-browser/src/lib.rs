//! Browser DOM layer for the forum widgets.
//!
//! This crate renders the state computed by `forum-widgets-core` into the
//! page and routes browser events back into it. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `dom`: element lookup and construction helpers
//! - `render`: `ScheduleView` -> title, badge row, list
//! - `schedule`: date picker / day button wiring and fetch completion
//! - `math_block`: `math-field` rendering, input mirroring, key capture
//!
//! # Re-exports
//!
//! This crate re-exports `forum-widgets-core` for convenience, so consumers
//! only need to depend on `forum-widgets-browser`.

// Re-export core crate
pub use forum_widgets_core;
pub use forum_widgets_core::*;

pub mod dom;
pub mod math_block;
pub mod render;
pub mod schedule;

pub use dom::ScheduleElements;
pub use math_block::{MATH_FIELD_TAG, MathBlock};
pub use render::render_schedule_view;
pub use schedule::{ScheduleWidget, install_schedule_widget};

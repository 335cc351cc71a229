//! What the schedule widget shows, independent of the DOM.

use super::response::ScheduleItem;

/// Title shown while the server's formatted date is still on its way.
pub const PENDING_TITLE: &str = "Schedule";
pub const LOADING_TEXT: &str = "Loading...";
pub const NO_SCHOOL_TEXT: &str = "No School";
pub const UNAVAILABLE_TEXT: &str = "Schedule unavailable";
pub const FETCH_ERROR_TEXT: &str = "Error loading schedule";

/// A flag badge above the schedule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    CeremonialUniform,
    EarlyDismissal,
    LateStart,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::CeremonialUniform => "Ceremonial Uniform",
            Badge::EarlyDismissal => "Early Dismissal",
            Badge::LateStart => "Late Start",
        }
    }

    /// Font Awesome icon class.
    pub fn icon(self) -> &'static str {
        match self {
            Badge::CeremonialUniform => "fa-user-tie",
            Badge::EarlyDismissal => "fa-clock",
            Badge::LateStart => "fa-coffee",
        }
    }

    /// Style class on the badge pill.
    pub fn class(self) -> &'static str {
        match self {
            Badge::CeremonialUniform => "schedule-badge-ceremonial",
            Badge::EarlyDismissal => "schedule-badge-early",
            Badge::LateStart => "schedule-badge-late",
        }
    }
}

/// Contents of the schedule list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    /// Request in flight.
    Loading,
    NoSchool,
    Entries(Vec<ScheduleItem>),
    Unavailable,
    /// Error text reported by the server, shown verbatim.
    ServerError(String),
    /// The request itself failed.
    Failed,
}

impl ListContent {
    /// Single-line text for every state except `Entries`.
    pub fn message(&self) -> Option<&str> {
        match self {
            ListContent::Loading => Some(LOADING_TEXT),
            ListContent::NoSchool => Some(NO_SCHOOL_TEXT),
            ListContent::Entries(_) => None,
            ListContent::Unavailable => Some(UNAVAILABLE_TEXT),
            ListContent::ServerError(msg) => Some(msg.as_str()),
            ListContent::Failed => Some(FETCH_ERROR_TEXT),
        }
    }

    /// Whether the line is rendered in the danger style.
    pub fn is_error(&self) -> bool {
        matches!(self, ListContent::ServerError(_) | ListContent::Failed)
    }
}

/// Everything the widget renders: title, badge row, and list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleView {
    pub title: String,
    pub badges: Vec<Badge>,
    pub list: ListContent,
}

impl ScheduleView {
    /// View shown between issuing a request and its completion.
    pub fn loading(title: String) -> Self {
        Self {
            title,
            badges: Vec::new(),
            list: ListContent::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ListContent::Loading.message(), Some("Loading..."));
        assert_eq!(ListContent::Failed.message(), Some("Error loading schedule"));
        assert_eq!(ListContent::ServerError("No data".into()).message(), Some("No data"));
        assert_eq!(ListContent::Entries(vec![]).message(), None);
        assert!(ListContent::Failed.is_error());
        assert!(!ListContent::NoSchool.is_error());
    }

    #[test]
    fn badge_styles() {
        let b = Badge::EarlyDismissal;
        assert_eq!(
            (b.label(), b.icon(), b.class()),
            ("Early Dismissal", "fa-clock", "schedule-badge-early")
        );
    }
}

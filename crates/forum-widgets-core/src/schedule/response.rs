//! JSON returned by the daily schedule endpoint.

use serde::{Deserialize, Serialize};

use super::view::{Badge, ListContent};

/// Marker the server sends as the whole schedule on days without school.
pub const NO_SCHOOL_MARKER: &str = "no school";

/// Body of `GET /schedules/daily/{date}/`.
///
/// Every field is optional on the wire. A body missing fields still renders,
/// just without badges and with an unavailable schedule; only `error`
/// changes the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Server-side diagnostic that accompanies `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Formatted date label, e.g. "Sat, Jun 15".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Flags are nullable on the wire; `null` reads as unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceremonial_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_dismissal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_start: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ScheduleEntry>>,
}

/// One element of the `schedule` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleEntry {
    Item(ScheduleItem),
    Marker(String),
}

/// A period of the day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

impl ScheduleItem {
    pub fn new(block: impl Into<String>, time: Option<&str>) -> Self {
        Self {
            block: Some(block.into()),
            time: time.map(str::to_string),
        }
    }

    pub fn block_label(&self) -> &str {
        self.block.as_deref().unwrap_or_default()
    }

    /// Time range, if the server sent a non-empty one.
    pub fn time_label(&self) -> Option<&str> {
        self.time.as_deref().filter(|t| !t.is_empty())
    }
}

impl ScheduleResponse {
    /// Server-reported error message. An empty message counts as no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Badges to show, in display order.
    pub fn badges(&self) -> Vec<Badge> {
        [
            (self.ceremonial_required, Badge::CeremonialUniform),
            (self.early_dismissal, Badge::EarlyDismissal),
            (self.late_start, Badge::LateStart),
        ]
        .into_iter()
        .filter_map(|(set, badge)| set.unwrap_or(false).then_some(badge))
        .collect()
    }

    /// What the schedule list should show for this response.
    pub fn list_content(&self) -> ListContent {
        let entries = self.schedule.as_deref().unwrap_or_default();
        match entries.first() {
            Some(ScheduleEntry::Marker(m)) if m == NO_SCHOOL_MARKER => ListContent::NoSchool,
            _ => {
                let items: Vec<ScheduleItem> = entries
                    .iter()
                    .filter_map(|entry| match entry {
                        ScheduleEntry::Item(item) => Some(item.clone()),
                        ScheduleEntry::Marker(other) => {
                            tracing::debug!(
                                marker = %other,
                                "skipping unrecognised schedule marker"
                            );
                            None
                        }
                    })
                    .collect();
                if items.is_empty() {
                    ListContent::Unavailable
                } else {
                    ListContent::Entries(items)
                }
            }
        }
    }
}

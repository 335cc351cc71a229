//! Widget configuration, deserialised from the options object a page passes in.

use serde::{Deserialize, Serialize};

/// Configuration for the schedule widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// Path (or absolute URL) of the daily schedule endpoint. The date and a
    /// trailing slash are appended.
    pub endpoint: String,
    pub elements: ScheduleElementIds,
}

impl Default for ScheduleConfig {
    /// Creates the configuration used by the forum templates.
    ///
    /// The default endpoint is `/schedules/daily/`.
    fn default() -> Self {
        Self {
            endpoint: "/schedules/daily/".to_owned(),
            elements: ScheduleElementIds::default(),
        }
    }
}

/// Element ids the schedule widget looks up on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleElementIds {
    /// Date input; must carry a `data-tomorrow` attribute.
    pub date_picker: String,
    pub prev_day: String,
    pub next_day: String,
    pub list: String,
    pub title: String,
    pub badges: String,
}

impl Default for ScheduleElementIds {
    fn default() -> Self {
        Self {
            date_picker: "schedule-date-picker".to_owned(),
            prev_day: "prev-day".to_owned(),
            next_day: "next-day".to_owned(),
            list: "tomorrow-schedule".to_owned(),
            title: "schedule-title".to_owned(),
            badges: "schedule-badges".to_owned(),
        }
    }
}

/// Console logging settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: if cfg!(debug_assertions) {
                LogLevel::Debug
            } else {
                LogLevel::Info
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

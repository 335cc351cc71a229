//! Error types shared by the widget crates.

use miette::Diagnostic;

/// Main error type for widget operations.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum WidgetError {
    /// A date string was not a `YYYY-MM-DD` calendar date.
    #[error("invalid date {input:?}")]
    #[diagnostic(
        code(forum_widgets::invalid_date),
        help("dates are exchanged as ISO 8601 date-only strings, e.g. 2024-06-15")
    )]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Stepping a date went past the representable calendar range.
    #[error("no calendar day {step} {from}")]
    #[diagnostic(code(forum_widgets::date_out_of_range))]
    DateOutOfRange {
        from: chrono::NaiveDate,
        step: &'static str,
    },

    /// The configured schedule endpoint could not be joined onto the page origin.
    #[error("invalid schedule endpoint {0:?}")]
    #[diagnostic(code(forum_widgets::invalid_endpoint))]
    InvalidEndpoint(String),

    /// Network failure or a body that was not schedule JSON.
    #[error("schedule request failed: {0}")]
    #[diagnostic(code(forum_widgets::request))]
    Request(#[from] reqwest::Error),
}

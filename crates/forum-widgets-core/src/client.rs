//! HTTP client for the daily schedule endpoint.

use chrono::NaiveDate;
use reqwest::Url;

use crate::calendar::format_iso_date;
use crate::error::WidgetError;
use crate::schedule::ScheduleResponse;

/// Fetches `ScheduleResponse`s relative to a base URL (the page origin).
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    base: Url,
    endpoint: String,
}

impl ScheduleClient {
    /// Create a client resolving `endpoint` against `base`.
    pub fn new(base: &str, endpoint: impl Into<String>) -> Result<Self, WidgetError> {
        let base = Url::parse(base).map_err(|_| WidgetError::InvalidEndpoint(base.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
            endpoint: endpoint.into(),
        })
    }

    /// URL of the schedule for `date`.
    pub fn daily_url(&self, date: NaiveDate) -> Result<Url, WidgetError> {
        let path = format!(
            "{}/{}/",
            self.endpoint.trim_end_matches('/'),
            format_iso_date(date)
        );
        self.base
            .join(&path)
            .map_err(|_| WidgetError::InvalidEndpoint(path))
    }

    /// Fetch and decode the schedule for `date`.
    ///
    /// Error statuses are not treated as failures: the endpoint reports
    /// problems in the body's `error` field, which the caller renders.
    pub async fn fetch_daily(&self, date: NaiveDate) -> Result<ScheduleResponse, WidgetError> {
        let url = self.daily_url(date)?;
        tracing::debug!(%url, "fetching schedule");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "schedule endpoint returned an error status");
        }
        Ok(response.json::<ScheduleResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_iso_date;

    #[test]
    fn daily_url_appends_date_and_slash() {
        let client = ScheduleClient::new("https://forum.example.org", "/schedules/daily/").unwrap();
        let url = client.daily_url(parse_iso_date("2024-06-15").unwrap()).unwrap();
        assert_eq!(url.as_str(), "https://forum.example.org/schedules/daily/2024-06-15/");
    }

    #[test]
    fn endpoint_without_trailing_slash() {
        let client = ScheduleClient::new("http://localhost:8000/", "/schedules/daily").unwrap();
        let url = client.daily_url(parse_iso_date("2024-01-07").unwrap()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/schedules/daily/2024-01-07/");
    }

    #[test]
    fn absolute_endpoint_overrides_base() {
        let client =
            ScheduleClient::new("https://forum.example.org", "https://api.example.org/daily/")
                .unwrap();
        let url = client.daily_url(parse_iso_date("2024-06-15").unwrap()).unwrap();
        assert_eq!(url.as_str(), "https://api.example.org/daily/2024-06-15/");
    }

    #[test]
    fn relative_base_is_rejected() {
        assert!(matches!(
            ScheduleClient::new("/schedules", "/daily/"),
            Err(WidgetError::InvalidEndpoint(_))
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod fetch {
        use axum::{Json, Router};
        use axum::http::StatusCode;
        use axum::routing::get;
        use serde_json::json;

        use super::*;

        /// Serve `app` on an ephemeral local port and return its origin.
        async fn serve(app: Router) -> String {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
            format!("http://{addr}")
        }

        fn day() -> NaiveDate {
            parse_iso_date("2024-06-14").unwrap()
        }

        #[tokio::test]
        async fn decodes_successful_body() {
            let app = Router::new().route(
                "/schedules/daily/2024-06-14/",
                get(|| async {
                    Json(json!({
                        "date": "Fri, Jun 14",
                        "early_dismissal": null,
                        "late_start": true,
                        "schedule": [{"block": "Period 1", "time": "8:00"}],
                    }))
                }),
            );
            let client = ScheduleClient::new(&serve(app).await, "/schedules/daily/").unwrap();
            let resp = client.fetch_daily(day()).await.unwrap();
            assert_eq!(resp.date.as_deref(), Some("Fri, Jun 14"));
            assert_eq!(resp.badges(), vec![crate::schedule::Badge::LateStart]);
        }

        #[tokio::test]
        async fn error_status_body_is_still_decoded() {
            let app = Router::new().route(
                "/schedules/daily/2024-06-14/",
                get(|| async {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"error": "No data", "details": "sheet missing"})),
                    )
                }),
            );
            let client = ScheduleClient::new(&serve(app).await, "/schedules/daily/").unwrap();
            let resp = client.fetch_daily(day()).await.unwrap();
            assert_eq!(resp.error_message(), Some("No data"));
            assert_eq!(resp.details.as_deref(), Some("sheet missing"));
        }

        #[tokio::test]
        async fn non_json_body_is_a_request_error() {
            let app = Router::new().route(
                "/schedules/daily/2024-06-14/",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<h1>Server Error</h1>") }),
            );
            let client = ScheduleClient::new(&serve(app).await, "/schedules/daily/").unwrap();
            let err = client.fetch_daily(day()).await.unwrap_err();
            assert!(matches!(err, WidgetError::Request(_)), "got {err:?}");
        }

        #[tokio::test]
        async fn missing_route_is_a_request_error() {
            let client = ScheduleClient::new(&serve(Router::new()).await, "/elsewhere/").unwrap();
            assert!(matches!(
                client.fetch_daily(day()).await,
                Err(WidgetError::Request(_))
            ));
        }
    }
}

//! Refresh state machine of the schedule widget.
//!
//! idle -> `select` (loading view) -> `complete` (resolved or errored view).
//!
//! Every `select` issues a [`RequestTicket`] carrying a sequence number.
//! Only the ticket of the most recent request is accepted by `complete`, so
//! a slow response to an earlier selection can never overwrite a newer one.

use chrono::NaiveDate;

use super::response::ScheduleResponse;
use super::view::{ListContent, PENDING_TITLE, ScheduleView};
use crate::calendar::{DayStep, day_name, is_in_current_week};
use crate::error::WidgetError;

/// Which branch of the title rule applies to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKind {
    /// The default date: keep the server-rendered title.
    Initial,
    /// In the current week: "<Day>'s Schedule".
    Weekday(&'static str),
    /// Elsewhere: placeholder until the response supplies a date label.
    Pending,
}

/// Handle for one issued schedule request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    date: NaiveDate,
    title: TitleKind,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Date the request is for.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn title(&self) -> TitleKind {
        self.title
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleController {
    tomorrow: NaiveDate,
    initial_title: String,
    selected: NaiveDate,
    latest_seq: u64,
    loading: bool,
    last_response: Option<ScheduleResponse>,
    view: Option<ScheduleView>,
}

impl ScheduleController {
    /// Create a controller for a page whose default date is `tomorrow` and
    /// whose server-rendered title is `initial_title`.
    pub fn new(tomorrow: NaiveDate, initial_title: impl Into<String>) -> Self {
        Self {
            tomorrow,
            initial_title: initial_title.into(),
            selected: tomorrow,
            latest_seq: 0,
            loading: false,
            last_response: None,
            view: None,
        }
    }

    pub fn tomorrow(&self) -> NaiveDate {
        self.tomorrow
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last response accepted by `complete` without a server error.
    pub fn last_response(&self) -> Option<&ScheduleResponse> {
        self.last_response.as_ref()
    }

    /// Current view, `None` until the first selection.
    pub fn view(&self) -> Option<&ScheduleView> {
        self.view.as_ref()
    }

    /// Title rule for `date`.
    pub fn title_kind(&self, date: NaiveDate, today: NaiveDate) -> TitleKind {
        if date == self.tomorrow {
            TitleKind::Initial
        } else if is_in_current_week(date, today) {
            TitleKind::Weekday(day_name(date))
        } else {
            TitleKind::Pending
        }
    }

    /// Title text shown as soon as `date` is selected.
    pub fn title_text(&self, date: NaiveDate, today: NaiveDate) -> String {
        match self.title_kind(date, today) {
            TitleKind::Initial => self.initial_title.clone(),
            TitleKind::Weekday(day) => format!("{day}'s Schedule"),
            TitleKind::Pending => PENDING_TITLE.to_string(),
        }
    }

    /// Select `date` and switch to the loading view.
    ///
    /// The returned ticket must be passed back to [`complete`](Self::complete)
    /// together with the fetch outcome.
    pub fn select(&mut self, date: NaiveDate, today: NaiveDate) -> RequestTicket {
        self.latest_seq += 1;
        self.selected = date;
        self.loading = true;

        let ticket = RequestTicket {
            seq: self.latest_seq,
            date,
            title: self.title_kind(date, today),
        };
        self.view = Some(ScheduleView::loading(self.title_text(date, today)));
        tracing::debug!(seq = ticket.seq, %date, "schedule request issued");
        ticket
    }

    /// Move the selection one day back or forward and start loading it.
    pub fn step(&mut self, step: DayStep, today: NaiveDate) -> Result<RequestTicket, WidgetError> {
        let date = step.apply(self.selected)?;
        Ok(self.select(date, today))
    }

    /// Whether `ticket` belongs to the most recently issued request.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// Apply the outcome of the request behind `ticket`.
    ///
    /// Returns the updated view, or `None` when the ticket is stale and the
    /// outcome was discarded.
    pub fn complete(
        &mut self,
        ticket: &RequestTicket,
        outcome: Result<ScheduleResponse, WidgetError>,
    ) -> Option<&ScheduleView> {
        if !self.is_current(ticket) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                date = %ticket.date,
                "discarding stale schedule response"
            );
            return None;
        }
        self.loading = false;

        let view = self
            .view
            .get_or_insert_with(|| ScheduleView::loading(PENDING_TITLE.to_string()));

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(date = %ticket.date, error = %err, "error fetching schedule");
                view.badges.clear();
                view.list = ListContent::Failed;
                return Some(view);
            }
        };

        if let Some(message) = response.error_message() {
            tracing::warn!(
                date = %ticket.date,
                error = message,
                details = response.details.as_deref(),
                "schedule endpoint reported an error"
            );
            view.badges.clear();
            view.list = ListContent::ServerError(message.to_string());
            return Some(view);
        }

        if ticket.title == TitleKind::Pending {
            if let Some(label) = &response.date {
                view.title = label.clone();
            }
        }
        view.badges = response.badges();
        view.list = response.list_content();
        self.last_response = Some(response);
        Some(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_iso_date;
    use crate::schedule::{Badge, ScheduleEntry, ScheduleItem};

    const INITIAL: &str = "Tomorrow's Schedule";

    fn date(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    /// Page rendered on Wednesday 2024-06-12, tomorrow being Thursday.
    fn controller() -> (ScheduleController, NaiveDate) {
        (ScheduleController::new(date("2024-06-13"), INITIAL), date("2024-06-12"))
    }

    fn response(json: &str) -> ScheduleResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn title_rule_three_way() {
        let (ctl, today) = controller();
        assert_eq!(ctl.title_text(date("2024-06-13"), today), INITIAL);
        assert_eq!(ctl.title_text(date("2024-06-14"), today), "Friday's Schedule");
        assert_eq!(ctl.title_text(date("2024-06-09"), today), "Sunday's Schedule");
        assert_eq!(ctl.title_text(date("2024-06-16"), today), "Schedule");
        assert_eq!(ctl.title_kind(date("2024-06-01"), today), TitleKind::Pending);
    }

    #[test]
    fn tomorrow_outside_current_week_keeps_initial_title() {
        // Saturday page: tomorrow is Sunday of the next week.
        let ctl = ScheduleController::new(date("2024-06-16"), INITIAL);
        let today = date("2024-06-15");
        assert_eq!(ctl.title_text(date("2024-06-16"), today), INITIAL);
        assert_eq!(ctl.title_text(date("2024-06-15"), today), "Saturday's Schedule");
    }

    #[test]
    fn select_shows_loading() {
        let (mut ctl, today) = controller();
        assert!(ctl.view().is_none());
        let ticket = ctl.select(date("2024-06-14"), today);
        assert!(ctl.is_loading());
        assert_eq!(ctl.selected_date(), date("2024-06-14"));
        assert_eq!(ticket.date(), date("2024-06-14"));
        let view = ctl.view().unwrap();
        assert_eq!(view.list, ListContent::Loading);
        assert!(view.badges.is_empty());
        assert_eq!(view.title, "Friday's Schedule");
    }

    #[test]
    fn no_school_has_single_entry_and_no_badges() {
        let (mut ctl, today) = controller();
        let ticket = ctl.select(date("2024-06-13"), today);
        let view = ctl
            .complete(&ticket, Ok(response(r#"{"schedule":["no school"]}"#)))
            .unwrap();
        assert_eq!(view.list, ListContent::NoSchool);
        assert!(view.badges.is_empty());
        assert_eq!(view.title, INITIAL);
        assert!(!ctl.is_loading());
    }

    #[test]
    fn item_with_ceremonial_badge() {
        let (mut ctl, today) = controller();
        let ticket = ctl.select(date("2024-06-13"), today);
        let view = ctl
            .complete(
                &ticket,
                Ok(response(concat!(
                    r#"{"schedule":[{"block":"Period 1","time":"8:00"}],"#,
                    r#""ceremonial_required":true}"#,
                ))),
            )
            .unwrap();
        assert_eq!(view.badges, vec![Badge::CeremonialUniform]);
        assert_eq!(
            view.list,
            ListContent::Entries(vec![ScheduleItem::new("Period 1", Some("8:00"))])
        );
        assert_eq!(
            ctl.last_response().and_then(|r| r.schedule.as_ref()).map(Vec::len),
            Some(1)
        );
    }

    #[test]
    fn server_error_is_shown_and_badges_stay_empty() {
        let (mut ctl, today) = controller();
        let ticket = ctl.select(date("2024-06-14"), today);
        let view = ctl
            .complete(
                &ticket,
                Ok(response(r#"{"error":"No data","late_start":true,"date":"Fri, Jun 14"}"#)),
            )
            .unwrap();
        assert_eq!(view.list, ListContent::ServerError("No data".into()));
        assert!(view.badges.is_empty());
        assert_eq!(view.title, "Friday's Schedule");
        assert!(ctl.last_response().is_none());
    }

    #[test]
    fn pending_title_takes_server_date() {
        let (mut ctl, today) = controller();
        let ticket = ctl.select(date("2024-07-01"), today);
        assert_eq!(ctl.view().unwrap().title, "Schedule");
        let view = ctl
            .complete(&ticket, Ok(response(r#"{"date":"Mon, Jul 1","schedule":[]}"#)))
            .unwrap();
        assert_eq!(view.title, "Mon, Jul 1");
        assert_eq!(view.list, ListContent::Unavailable);
    }

    #[test]
    fn server_date_does_not_override_weekday_title() {
        let (mut ctl, today) = controller();
        let ticket = ctl.select(date("2024-06-14"), today);
        let view = ctl
            .complete(&ticket, Ok(response(r#"{"date":"Fri, Jun 14"}"#)))
            .unwrap();
        assert_eq!(view.title, "Friday's Schedule");
    }

    #[test]
    fn pending_title_without_server_date_keeps_placeholder() {
        let (mut ctl, today) = controller();
        let ticket = ctl.select(date("2024-07-01"), today);
        let view = ctl.complete(&ticket, Ok(ScheduleResponse::default())).unwrap();
        assert_eq!(view.title, "Schedule");
    }

    #[test]
    fn fetch_failure_renders_fixed_message() {
        let (mut ctl, today) = controller();
        let ticket = ctl.select(date("2024-07-01"), today);
        let err = WidgetError::InvalidEndpoint("nowhere".into());
        let view = ctl.complete(&ticket, Err(err)).unwrap();
        assert_eq!(view.list, ListContent::Failed);
        assert!(view.badges.is_empty());
        assert_eq!(view.title, "Schedule");
        assert!(!ctl.is_loading());
    }

    #[test]
    fn stale_response_is_discarded() {
        let (mut ctl, today) = controller();
        let first = ctl.select(date("2024-06-14"), today);
        let second = ctl.select(date("2024-06-15"), today);
        assert!(!ctl.is_current(&first));
        assert!(second.seq() > first.seq());

        let newer = response(r#"{"schedule":[{"block":"Saturday Study"}]}"#);
        assert!(ctl.complete(&second, Ok(newer)).is_some());

        // The earlier request resolves last and must not win.
        let older = response(r#"{"schedule":["no school"]}"#);
        assert!(ctl.complete(&first, Ok(older)).is_none());
        assert_eq!(
            ctl.view().unwrap().list,
            ListContent::Entries(vec![ScheduleItem {
                block: Some("Saturday Study".into()),
                time: None,
            }])
        );
        assert_eq!(ctl.selected_date(), date("2024-06-15"));
    }

    #[test]
    fn stale_response_does_not_end_loading() {
        let (mut ctl, today) = controller();
        let first = ctl.select(date("2024-06-14"), today);
        let _second = ctl.select(date("2024-06-15"), today);
        assert!(ctl.complete(&first, Ok(ScheduleResponse::default())).is_none());
        assert!(ctl.is_loading());
        assert_eq!(ctl.view().unwrap().list, ListContent::Loading);
    }

    #[test]
    fn step_moves_from_selected_date() {
        let ctl_today = date("2024-06-12");
        let mut ctl = ScheduleController::new(date("2024-06-15"), INITIAL);
        let ticket = ctl.step(DayStep::Next, ctl_today).unwrap();
        assert_eq!(ticket.date(), date("2024-06-16"));
        assert_eq!(ticket.title(), TitleKind::Pending);

        let ticket = ctl.step(DayStep::Previous, ctl_today).unwrap();
        assert_eq!(ticket.date(), date("2024-06-15"));
        assert_eq!(ticket.title(), TitleKind::Initial);
    }

    #[test]
    fn marker_entries_after_items_are_skipped() {
        let (mut ctl, today) = controller();
        let ticket = ctl.select(date("2024-06-13"), today);
        let resp = ScheduleResponse {
            schedule: Some(vec![
                ScheduleEntry::Item(ScheduleItem::new("A", None)),
                ScheduleEntry::Marker("no school".into()),
            ]),
            ..Default::default()
        };
        let view = ctl.complete(&ticket, Ok(resp)).unwrap();
        assert_eq!(view.list, ListContent::Entries(vec![ScheduleItem::new("A", None)]));
    }
}

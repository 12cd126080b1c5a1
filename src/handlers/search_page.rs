use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::clients::page_client::PageHttpClient;
use crate::error::BookingError;
use crate::models::selection::{BookingState, SelectionContext};
use crate::page::document::{
    INTERVIEW_TIMES_CONTAINER, INTERVIEWER_MODAL, MODAL_BODY, MODAL_TITLE, PAGE_NOTICE, POSITION,
    PageDocument, SEARCH_RESULTS,
};
use crate::page::navigation::{Navigator, SCHEDULED_INTERVIEWS_PAGE};
use crate::page::prompt::UserPrompt;
use crate::service::availability::{SearchSequencer, fetch_interview_times};
use crate::service::booking::submit_booking;
use crate::service::interviewers::{
    LOADING_INTERVIEWERS, fetch_interviewers, modal_title, normalize_time_label,
    show_interviewers_path,
};
use crate::service::scheduled::fetch_scheduled_interviews;
use crate::service::session_gate::{
    LogoutOutcome, ProfileOutcome, fetch_session, get_user_or_redirect_registration,
    supply_logout_link_or_redirect_home,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub logout: LogoutOutcome,
    pub profile: ProfileOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Rendered,
    /// A newer search started before this one's response arrived.
    Superseded,
}

/// Controller behind the interview search page. Every collaborator is injected
/// so the page can be driven from a terminal or from tests.
pub struct InterviewBookingClient {
    http: Arc<dyn PageHttpClient>,
    document: Arc<dyn PageDocument>,
    navigator: Arc<dyn Navigator>,
    prompt: Arc<dyn UserPrompt>,
    timezone_offset: i32,
    searches: SearchSequencer,
}

impl InterviewBookingClient {
    pub fn new(
        http: Arc<dyn PageHttpClient>,
        document: Arc<dyn PageDocument>,
        navigator: Arc<dyn Navigator>,
        prompt: Arc<dyn UserPrompt>,
        timezone_offset: i32,
    ) -> Self {
        Self {
            http,
            document,
            navigator,
            prompt,
            timezone_offset,
            searches: SearchSequencer::new(),
        }
    }

    pub fn timezone_offset(&self) -> i32 {
        self.timezone_offset
    }

    /// Resolves the session once, then runs the logout-link and profile checks
    /// side by side on the same result.
    pub async fn on_page_load(&self) -> Result<SessionOutcome, BookingError> {
        let session = match fetch_session(self.http.as_ref()).await {
            Ok(session) => session,
            Err(err) => {
                self.show_notice(&format!("Could not check your login status. {err}"));
                return Err(err);
            }
        };

        let (logout, profile) = tokio::join!(
            async {
                supply_logout_link_or_redirect_home(
                    &session,
                    self.document.as_ref(),
                    self.navigator.as_ref(),
                )
            },
            get_user_or_redirect_registration(
                &session,
                self.http.as_ref(),
                self.document.as_ref(),
                self.navigator.as_ref(),
            ),
        );

        let logout = logout.inspect_err(|err| {
            self.show_notice(&format!("Could not show the logout link. {err}"));
        })?;
        let profile = profile.inspect_err(|err| {
            self.show_notice(&format!("Could not load your profile. {err}"));
        })?;
        Ok(SessionOutcome { logout, profile })
    }

    /// Reveals the results area and fills it with the slots for this browser's
    /// offset. A response that arrives after a newer search is dropped.
    pub async fn load_interviews(&self) -> Result<SearchOutcome, BookingError> {
        self.document.remove_attribute(SEARCH_RESULTS, "hidden")?;
        // TODO: send `position` once the server's search accepts a position filter.
        let position = self.document.value(POSITION).unwrap_or_default();
        debug!("Searching interviews, position filter {position:?} not applied");

        let ticket = self.searches.begin();
        let times = match fetch_interview_times(self.http.as_ref(), self.timezone_offset).await {
            Ok(times) => times,
            Err(err) if !self.searches.is_current(ticket) => {
                info!("Dropping failed stale interview search #{ticket}: {err}");
                return Ok(SearchOutcome::Superseded);
            }
            Err(err) => {
                warn!("Loading interviews failed: {err}");
                self.show_notice(&format!("Could not load interview times. {err}"));
                return Err(err);
            }
        };

        if !self.searches.is_current(ticket) {
            info!("Dropping stale interview search #{ticket}");
            return Ok(SearchOutcome::Superseded);
        }
        self.document.set_inner_html(INTERVIEW_TIMES_CONTAINER, &times)?;
        Ok(SearchOutcome::Rendered)
    }

    /// Opens the interviewer modal for the slot picked under `date`. The modal
    /// is shown before the lookup finishes, with a placeholder body.
    pub async fn show_interviewers(&self, date: &str) -> Result<(), BookingError> {
        let option = self
            .document
            .selected_option(date)
            .ok_or_else(|| BookingError::MissingElement(format!("selected option of {date}")))?;
        let time = normalize_time_label(&option.text);
        let utc = self.document.value(date).unwrap_or(option.value);
        let path = show_interviewers_path(&utc, date, &time);

        self.document.set_text(MODAL_TITLE, &modal_title(date, &time))?;
        self.document.set_inner_html(MODAL_BODY, LOADING_INTERVIEWERS)?;
        self.document.show_modal(INTERVIEWER_MODAL)?;

        match fetch_interviewers(self.http.as_ref(), &path).await {
            Ok(interviewers) => {
                self.document.set_inner_html(MODAL_BODY, &interviewers)?;
                Ok(())
            }
            Err(err) => {
                warn!("Interviewer lookup for {date} failed: {err}");
                self.document.set_text(MODAL_BODY, "Could not load interviewers.")?;
                self.show_notice(&format!("Could not load interviewers. {err}"));
                Err(err)
            }
        }
    }

    /// Reads the selection from a slot element and books it.
    pub async fn select_interview_element(&self, id: &str) -> Result<BookingState, BookingError> {
        let selection = SelectionContext::from_element(self.document.as_ref(), id)?;
        self.select_interview(&selection).await
    }

    /// Confirms the slot with the user and books it. Returns the terminal state
    /// of the attempt.
    pub async fn select_interview(
        &self,
        selection: &SelectionContext,
    ) -> Result<BookingState, BookingError> {
        let attempt = Uuid::new_v4();
        let mut state = BookingState::Idle;
        self.advance(attempt, &mut state, BookingState::Confirming);
        if !self.prompt.confirm(&selection.confirmation_message()) {
            self.advance(attempt, &mut state, BookingState::Cancelled);
            return Ok(state);
        }

        self.advance(attempt, &mut state, BookingState::Submitting);
        self.prompt.notify(&selection.acknowledgement_message());

        let request = selection.booking_request();
        match submit_booking(self.http.as_ref(), &request).await {
            Ok(()) => {
                self.advance(attempt, &mut state, BookingState::Acknowledged);
                self.navigator.replace(SCHEDULED_INTERVIEWS_PAGE);
                self.advance(attempt, &mut state, BookingState::Redirecting);
            }
            Err(err) => {
                warn!("Booking {attempt} failed: {err}");
                let message = format!(
                    "Your interview on {} from {} could not be booked. {err}",
                    selection.date, selection.time
                );
                self.show_notice(&message);
                self.prompt.notify(&message);
                self.advance(attempt, &mut state, BookingState::Failed);
            }
        }
        Ok(state)
    }

    pub async fn list_scheduled_interviews(
        &self,
        time_zone: Tz,
        user_time: DateTime<Utc>,
    ) -> Result<String, BookingError> {
        fetch_scheduled_interviews(self.http.as_ref(), time_zone, user_time).await
    }

    fn advance(&self, attempt: Uuid, state: &mut BookingState, next: BookingState) {
        debug!("Booking {attempt}: {state:?} -> {next:?}");
        *state = next;
    }

    fn show_notice(&self, message: &str) {
        if let Err(err) = self.document.set_text(PAGE_NOTICE, message) {
            warn!("Notice not shown ({err}): {message}");
        }
    }
}

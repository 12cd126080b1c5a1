use tracing::{debug, info};

use crate::clients::page_client::PageHttpClient;
use crate::error::BookingError;
use crate::models::session::{SessionInfo, parse_profile};
use crate::page::document::{LOGOUT_HYPERLINK, PageDocument, USER_INFO};
use crate::page::navigation::{HOME_PAGE, Navigator, REGISTRATION_PAGE};

pub const LOGIN_PATH: &str = "/login";
pub const PERSON_PATH: &str = "/person";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    LogoutLinkShown,
    RedirectedHome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileOutcome {
    UserInfoShown,
    RedirectedRegistration,
}

pub async fn fetch_session(http: &dyn PageHttpClient) -> Result<SessionInfo, BookingError> {
    let body = http
        .get(LOGIN_PATH)
        .await
        .and_then(|reply| reply.into_success(LOGIN_PATH))
        .map_err(|err| BookingError::SessionExpired(err.to_string()))?;
    let session: SessionInfo = serde_json::from_str(&body)?;
    debug!("Session resolved, logged_in={}", session.logged_in);
    Ok(session)
}

pub fn supply_logout_link_or_redirect_home(
    session: &SessionInfo,
    document: &dyn PageDocument,
    navigator: &dyn Navigator,
) -> Result<LogoutOutcome, BookingError> {
    if session.logged_in {
        document.set_attribute(LOGOUT_HYPERLINK, "href", &session.change_log_in_status_url)?;
        Ok(LogoutOutcome::LogoutLinkShown)
    } else {
        info!("No active session, redirecting home");
        navigator.replace(HOME_PAGE);
        Ok(LogoutOutcome::RedirectedHome)
    }
}

/// Runs for every session. Signed-out visitors have no profile, so they are
/// sent to registration as well as home; the two navigations are unordered.
pub async fn get_user_or_redirect_registration(
    session: &SessionInfo,
    http: &dyn PageHttpClient,
    document: &dyn PageDocument,
    navigator: &dyn Navigator,
) -> Result<ProfileOutcome, BookingError> {
    debug!("Looking up profile, logged_in={}", session.logged_in);
    let reply = http.get(PERSON_PATH).await?;
    let profile = if reply.status == 404 {
        None
    } else {
        parse_profile(&reply.into_success(PERSON_PATH)?)?
    };

    match profile {
        Some(profile) => {
            document.set_text(USER_INFO, &profile.greeting())?;
            Ok(ProfileOutcome::UserInfoShown)
        }
        None => {
            info!("Profile incomplete, redirecting to registration");
            navigator.replace(REGISTRATION_PAGE);
            Ok(ProfileOutcome::RedirectedRegistration)
        }
    }
}

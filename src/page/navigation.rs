use std::sync::Mutex;

use tracing::info;

pub const HOME_PAGE: &str = "/";
pub const REGISTRATION_PAGE: &str = "/register.html";
pub const SCHEDULED_INTERVIEWS_PAGE: &str = "/scheduled-interviews.html";

/// Replaces the current page, like `window.location.replace`.
pub trait Navigator: Send + Sync {
    fn replace(&self, url: &str);
}

/// Logs navigations and remembers the last target so the terminal front end
/// can report where the page would have gone.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    last: Mutex<Option<String>>,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_target(&self) -> Option<String> {
        self.last
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Navigator for ConsoleNavigator {
    fn replace(&self, url: &str) {
        info!("Navigating to {url}");
        *self
            .last
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(url.to_string());
    }
}

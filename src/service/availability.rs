use std::sync::atomic::{AtomicU64, Ordering};

use crate::clients::page_client::PageHttpClient;
use crate::error::BookingError;

pub fn load_interviews_path(timezone_offset: i32) -> String {
    format!("/load-interviews?timeZoneOffset={timezone_offset}")
}

/// Fetches the pre-rendered slot markup for the given browser offset.
pub async fn fetch_interview_times(
    http: &dyn PageHttpClient,
    timezone_offset: i32,
) -> Result<String, BookingError> {
    let path = load_interviews_path(timezone_offset);
    http.get(&path).await?.into_success(&path)
}

/// Hands out tickets so only the most recent search may write the results.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: AtomicU64,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

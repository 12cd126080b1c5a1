use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::page::document::PageDocument;

/// A slot the user clicked, rebuilt from the element's `data-*` attributes on
/// every interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionContext {
    pub date: String,
    pub time: String,
    pub company: String,
    pub job: String,
    pub utc_start_time: String,
}

impl SelectionContext {
    pub fn from_element(document: &dyn PageDocument, id: &str) -> Result<Self, BookingError> {
        let read = |name: &str| {
            document
                .attribute(id, name)
                .ok_or_else(|| BookingError::MissingElement(format!("{id}[{name}]")))
        };
        Ok(Self {
            date: read("data-date")?,
            time: read("data-time")?,
            company: read("data-company")?,
            job: read("data-job")?,
            utc_start_time: read("data-utc")?,
        })
    }

    pub fn confirmation_message(&self) -> String {
        format!(
            "You selected: {} from {} with a {} {}. Click OK if you wish to proceed.",
            self.date, self.time, self.company, self.job
        )
    }

    pub fn acknowledgement_message(&self) -> String {
        format!(
            "You have scheduled an interview on {} from {} with a {} {}. Check your email for more information.",
            self.date, self.time, self.company, self.job
        )
    }

    pub fn booking_request(&self) -> BookingRequest {
        BookingRequest {
            company: self.company.clone(),
            job: self.job.clone(),
            utc_start_time: self.utc_start_time.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub company: String,
    pub job: String,
    pub utc_start_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    Idle,
    Confirming,
    Cancelled,
    Submitting,
    Acknowledged,
    Redirecting,
    Failed,
}

impl BookingState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BookingState::Cancelled | BookingState::Redirecting | BookingState::Failed
        )
    }
}

/// The `<option>` currently picked in a date-keyed select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedOption {
    pub text: String,
    pub value: String,
}

use url::form_urlencoded;

use crate::clients::page_client::PageHttpClient;
use crate::error::BookingError;

pub const LOADING_INTERVIEWERS: &str = "Loading interviewers...";

/// Turns an option label like `9:00am-10:00am` into `9:00amto10:00am`.
/// Only the first `-` is replaced; labels with more hyphens keep the rest.
pub fn normalize_time_label(label: &str) -> String {
    label.replacen('-', "to", 1)
}

pub fn show_interviewers_path(utc_start_time: &str, date: &str, time: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("utcStartTime", utc_start_time)
        .append_pair("date", date)
        .append_pair("time", time)
        .finish();
    format!("/show-interviewers?{query}")
}

pub fn modal_title(date: &str, time: &str) -> String {
    format!("Interviewers Information for {date} from {time}")
}

pub async fn fetch_interviewers(
    http: &dyn PageHttpClient,
    path: &str,
) -> Result<String, BookingError> {
    http.get(path).await?.into_success(path)
}

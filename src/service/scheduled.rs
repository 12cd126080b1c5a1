use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use url::form_urlencoded;

use crate::clients::page_client::PageHttpClient;
use crate::error::BookingError;
use crate::service::booking::BOOKING_PATH;

pub fn scheduled_interviews_path(time_zone: Tz, user_time: DateTime<Utc>) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("timeZone", time_zone.name())
        .append_pair("userTime", &user_time.to_rfc3339_opts(SecondsFormat::Secs, true))
        .finish();
    format!("{BOOKING_PATH}?{query}")
}

/// Rendered list of the user's booked interviews, as shown on the page the
/// booking flow redirects to.
pub async fn fetch_scheduled_interviews(
    http: &dyn PageHttpClient,
    time_zone: Tz,
    user_time: DateTime<Utc>,
) -> Result<String, BookingError> {
    let path = scheduled_interviews_path(time_zone, user_time);
    http.get(&path).await?.into_success(&path)
}

use tracing::debug;

use crate::clients::page_client::PageHttpClient;
use crate::error::BookingError;
use crate::models::selection::BookingRequest;

pub const BOOKING_PATH: &str = "/scheduled-interviews";

/// Posts the booking. The reply body is not inspected; only a non-2xx status
/// counts as a failure.
pub async fn submit_booking(
    http: &dyn PageHttpClient,
    request: &BookingRequest,
) -> Result<(), BookingError> {
    let body = serde_json::to_string(request)?;
    let reply = http.post_json(BOOKING_PATH, body).await?;
    debug!("Booking reply status {}", reply.status);
    reply.into_success(BOOKING_PATH).map(|_| ())
}

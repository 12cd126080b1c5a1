mod common;

use chrono::{TimeZone, Utc};
use common::harness;
use interviewBooking::clients::page_client::HttpReply;
use interviewBooking::error::BookingError;

#[tokio::test]
async fn scheduled_list_is_requested_for_zone_and_instant() {
    let page = harness(0, true);
    page.http.respond(
        "/scheduled-interviews",
        Ok(HttpReply::ok("<ul><li>Acme SWE, Monday 1/1</li></ul>")),
    );
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();

    let html = page
        .client
        .list_scheduled_interviews(chrono_tz::America::New_York, now)
        .await
        .unwrap();

    assert_eq!(html, "<ul><li>Acme SWE, Monday 1/1</li></ul>");
    let requests = page.http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(
        requests[0].path,
        "/scheduled-interviews?timeZone=America%2FNew_York&userTime=2024-01-01T10%3A00%3A00Z"
    );
}

#[tokio::test]
async fn failed_scheduled_list_reports_status() {
    let page = harness(0, true);
    page.http.respond(
        "/scheduled-interviews",
        Ok(HttpReply {
            status: 500,
            body: "boom".to_string(),
        }),
    );
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();

    let err = page
        .client
        .list_scheduled_interviews(chrono_tz::Europe::London, now)
        .await
        .unwrap_err();

    assert!(matches!(err, BookingError::HttpStatus { status: 500, .. }));
    assert!(page.navigator.targets().is_empty());
}

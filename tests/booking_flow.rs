mod common;

use common::harness;
use interviewBooking::clients::page_client::HttpReply;
use interviewBooking::error::BookingError;
use interviewBooking::models::selection::{BookingState, SelectionContext};
use interviewBooking::page::document::PAGE_NOTICE;

fn acme_selection() -> SelectionContext {
    SelectionContext {
        date: "Monday 1/1".to_string(),
        time: "10:00 AM - 11:00 AM".to_string(),
        company: "Acme".to_string(),
        job: "SWE".to_string(),
        utc_start_time: "2024-01-01T10:00:00Z".to_string(),
    }
}

#[tokio::test]
async fn cancelled_confirmation_sends_nothing() {
    let page = harness(0, false);

    let state = page.client.select_interview(&acme_selection()).await.unwrap();

    assert_eq!(state, BookingState::Cancelled);
    assert!(page.http.requests().is_empty());
    assert!(page.navigator.targets().is_empty());
    assert!(page.prompt.notices().is_empty());
    assert_eq!(page.prompt.confirmations().len(), 1);
}

#[tokio::test]
async fn confirmed_booking_posts_once_and_redirects() {
    let page = harness(0, true);
    page.http.respond("/scheduled-interviews", Ok(HttpReply::ok("ignored")));

    let state = page.client.select_interview(&acme_selection()).await.unwrap();

    assert_eq!(state, BookingState::Redirecting);
    let requests = page.http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/scheduled-interviews");
    assert_eq!(
        requests[0].body.as_deref(),
        Some(r#"{"company":"Acme","job":"SWE","utcStartTime":"2024-01-01T10:00:00Z"}"#)
    );
    assert_eq!(
        page.navigator.targets(),
        vec!["/scheduled-interviews.html".to_string()]
    );
    assert_eq!(
        page.prompt.confirmations(),
        vec![
            "You selected: Monday 1/1 from 10:00 AM - 11:00 AM with a Acme SWE. Click OK if you wish to proceed."
                .to_string()
        ]
    );
    assert_eq!(
        page.prompt.notices(),
        vec![
            "You have scheduled an interview on Monday 1/1 from 10:00 AM - 11:00 AM with a Acme SWE. Check your email for more information."
                .to_string()
        ]
    );
}

#[tokio::test]
async fn rejected_booking_is_surfaced_and_stays_on_page() {
    let page = harness(0, true);
    page.http.respond(
        "/scheduled-interviews",
        Ok(HttpReply {
            status: 400,
            body: String::new(),
        }),
    );

    let state = page.client.select_interview(&acme_selection()).await.unwrap();

    assert_eq!(state, BookingState::Failed);
    assert!(page.navigator.targets().is_empty());
    let notices = page.prompt.notices();
    assert_eq!(notices.len(), 2);
    assert!(notices[1].contains("could not be booked"));
    assert!(notices[1].contains("400"));
    assert_eq!(page.document.inner_html(PAGE_NOTICE).as_ref(), notices.get(1));
}

#[tokio::test]
async fn network_failure_during_submit_is_surfaced() {
    let page = harness(0, true);
    page.http.respond(
        "/scheduled-interviews",
        Err(BookingError::Network("connection reset".to_string())),
    );

    let state = page.client.select_interview(&acme_selection()).await.unwrap();

    assert_eq!(state, BookingState::Failed);
    assert!(page.navigator.targets().is_empty());
    assert!(page.prompt.notices()[1].contains("connection reset"));
}

#[tokio::test]
async fn selection_is_read_from_slot_attributes() {
    let page = harness(0, true);
    page.document.insert_slot(
        "slot-1",
        &[
            ("data-date", "Monday 1/1"),
            ("data-time", "10:00 AM - 11:00 AM"),
            ("data-company", "Acme"),
            ("data-job", "SWE"),
            ("data-utc", "2024-01-01T10:00:00Z"),
        ],
    );
    page.http.respond("/scheduled-interviews", Ok(HttpReply::ok("")));

    let state = page.client.select_interview_element("slot-1").await.unwrap();

    assert_eq!(state, BookingState::Redirecting);
    assert_eq!(
        page.http.requests()[0].body.as_deref(),
        Some(r#"{"company":"Acme","job":"SWE","utcStartTime":"2024-01-01T10:00:00Z"}"#)
    );
}

#[tokio::test]
async fn slot_missing_attributes_is_rejected_before_prompting() {
    let page = harness(0, true);
    page.document.insert_slot("slot-2", &[("data-date", "Monday 1/1")]);

    let err = page
        .client
        .select_interview_element("slot-2")
        .await
        .unwrap_err();

    assert!(matches!(err, BookingError::MissingElement(_)));
    assert!(page.prompt.confirmations().is_empty());
    assert!(page.http.requests().is_empty());
}

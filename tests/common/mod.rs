#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use interviewBooking::clients::page_client::{HttpReply, PageHttpClient};
use interviewBooking::error::BookingError;
use interviewBooking::handlers::search_page::InterviewBookingClient;
use interviewBooking::page::document::MemoryDocument;
use interviewBooking::page::navigation::Navigator;
use interviewBooking::page::prompt::UserPrompt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<String>,
}

/// Replies are queued per route (path without its query string).
#[derive(Default)]
pub struct ScriptedHttp {
    replies: Mutex<HashMap<String, VecDeque<Result<HttpReply, BookingError>>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, route: &str, reply: Result<HttpReply, BookingError>) {
        self.replies
            .lock()
            .unwrap()
            .entry(route.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_reply(&self, path: &str) -> Result<HttpReply, BookingError> {
        let route = path.split('?').next().unwrap_or(path);
        self.replies
            .lock()
            .unwrap()
            .get_mut(route)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(BookingError::Network(format!("no scripted reply for {route}"))))
    }
}

#[async_trait::async_trait]
impl PageHttpClient for ScriptedHttp {
    async fn get(&self, path: &str) -> Result<HttpReply, BookingError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: "GET",
            path: path.to_string(),
            body: None,
        });
        self.next_reply(path)
    }

    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, BookingError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: "POST",
            path: path.to_string(),
            body: Some(body),
        });
        self.next_reply(path)
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub targets: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, url: &str) {
        self.targets.lock().unwrap().push(url.to_string());
    }
}

pub struct ScriptedPrompt {
    pub answer: bool,
    pub confirmations: Mutex<Vec<String>>,
    pub notices: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirmations: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.lock().unwrap().clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().unwrap().push(message.to_string());
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

pub struct Harness {
    pub client: InterviewBookingClient,
    pub http: Arc<ScriptedHttp>,
    pub document: Arc<MemoryDocument>,
    pub navigator: Arc<RecordingNavigator>,
    pub prompt: Arc<ScriptedPrompt>,
}

pub fn harness(offset: i32, answer: bool) -> Harness {
    harness_with_document(MemoryDocument::search_page(), offset, answer)
}

pub fn harness_with_document(document: MemoryDocument, offset: i32, answer: bool) -> Harness {
    let http = Arc::new(ScriptedHttp::new());
    let document = Arc::new(document);
    let navigator = Arc::new(RecordingNavigator::default());
    let prompt = Arc::new(ScriptedPrompt::answering(answer));
    let client = InterviewBookingClient::new(
        http.clone(),
        document.clone(),
        navigator.clone(),
        prompt.clone(),
        offset,
    );
    Harness {
        client,
        http,
        document,
        navigator,
        prompt,
    }
}

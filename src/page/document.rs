use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::error::BookingError;
use crate::models::selection::SelectedOption;

pub const SEARCH_RESULTS: &str = "search-results";
pub const POSITION: &str = "position";
pub const INTERVIEW_TIMES_CONTAINER: &str = "interview-times-container";
pub const MODAL_BODY: &str = "modal-body";
pub const MODAL_TITLE: &str = "modal-title";
pub const INTERVIEWER_MODAL: &str = "interviewer-modal";
pub const LOGOUT_HYPERLINK: &str = "logout-hyperlink";
pub const USER_INFO: &str = "user-info";
pub const PAGE_NOTICE: &str = "page-notice";

/// Element access by id. Writes fail with `MissingElement` when the page does
/// not carry the id.
pub trait PageDocument: Send + Sync {
    fn attribute(&self, id: &str, name: &str) -> Option<String>;
    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), BookingError>;
    fn remove_attribute(&self, id: &str, name: &str) -> Result<(), BookingError>;
    fn value(&self, id: &str) -> Option<String>;
    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), BookingError>;
    fn set_text(&self, id: &str, text: &str) -> Result<(), BookingError>;
    fn selected_option(&self, id: &str) -> Option<SelectedOption>;
    fn show_modal(&self, id: &str) -> Result<(), BookingError>;
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub attributes: BTreeMap<String, String>,
    pub value: Option<String>,
    pub inner_html: String,
    pub options: Vec<SelectedOption>,
    pub selected_index: Option<usize>,
    pub modal_shown: bool,
}

/// In-process stand-in for the browser page.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: Mutex<HashMap<String, Element>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The elements the interview search page is served with.
    pub fn search_page() -> Self {
        let document = Self::new();
        let mut results = Element::default();
        results.attributes.insert("hidden".to_string(), String::new());
        document.insert(SEARCH_RESULTS, results);
        document.insert(
            POSITION,
            Element {
                value: Some(String::new()),
                ..Element::default()
            },
        );
        for id in [
            INTERVIEW_TIMES_CONTAINER,
            MODAL_BODY,
            MODAL_TITLE,
            INTERVIEWER_MODAL,
            LOGOUT_HYPERLINK,
            USER_INFO,
            PAGE_NOTICE,
        ] {
            document.insert(id, Element::default());
        }
        document
    }

    pub fn insert(&self, id: &str, element: Element) {
        self.lock().insert(id.to_string(), element);
    }

    pub fn insert_select(&self, id: &str, options: Vec<SelectedOption>, selected: usize) {
        let selected_index = (selected < options.len()).then_some(selected);
        let value = selected_index.map(|idx| options[idx].value.clone());
        self.insert(
            id,
            Element {
                value,
                options,
                selected_index,
                ..Element::default()
            },
        );
    }

    /// Adds a clickable slot element carrying the `data-*` selection attributes.
    pub fn insert_slot(&self, id: &str, attributes: &[(&str, &str)]) {
        let mut element = Element::default();
        for (name, value) in attributes {
            element
                .attributes
                .insert((*name).to_string(), (*value).to_string());
        }
        self.insert(id, element);
    }

    pub fn set_value(&self, id: &str, value: &str) -> Result<(), BookingError> {
        self.update(id, |element| element.value = Some(value.to_string()))
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.lock().get(id).map(|element| element.inner_html.clone())
    }

    pub fn has_attribute(&self, id: &str, name: &str) -> bool {
        self.lock()
            .get(id)
            .is_some_and(|element| element.attributes.contains_key(name))
    }

    pub fn is_modal_shown(&self, id: &str) -> bool {
        self.lock().get(id).is_some_and(|element| element.modal_shown)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Element>> {
        // A poisoned map is still a consistent set of elements.
        self.elements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update(&self, id: &str, apply: impl FnOnce(&mut Element)) -> Result<(), BookingError> {
        let mut elements = self.lock();
        let element = elements
            .get_mut(id)
            .ok_or_else(|| BookingError::MissingElement(id.to_string()))?;
        apply(element);
        Ok(())
    }
}

impl PageDocument for MemoryDocument {
    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.lock()
            .get(id)
            .and_then(|element| element.attributes.get(name).cloned())
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), BookingError> {
        self.update(id, |element| {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        })
    }

    fn remove_attribute(&self, id: &str, name: &str) -> Result<(), BookingError> {
        self.update(id, |element| {
            element.attributes.remove(name);
        })
    }

    fn value(&self, id: &str) -> Option<String> {
        self.lock().get(id).and_then(|element| element.value.clone())
    }

    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), BookingError> {
        self.update(id, |element| element.inner_html = html.to_string())
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), BookingError> {
        self.update(id, |element| element.inner_html = text.to_string())
    }

    fn selected_option(&self, id: &str) -> Option<SelectedOption> {
        let elements = self.lock();
        let element = elements.get(id)?;
        element
            .selected_index
            .and_then(|idx| element.options.get(idx).cloned())
    }

    fn show_modal(&self, id: &str) -> Result<(), BookingError> {
        self.update(id, |element| element.modal_shown = true)
    }
}

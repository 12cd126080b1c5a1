pub mod document;
pub mod navigation;
pub mod prompt;

pub mod selection;
pub mod session;

pub mod availability;
pub mod booking;
pub mod interviewers;
pub mod scheduled;
pub mod session_gate;
pub mod timezone;

use chrono::Local;

/// Host UTC offset in minutes using the browser sign convention
/// (`UTC - local`): UTC-5 is `300`, UTC+2 is `-120`.
pub fn browser_timezone_offset() -> i32 {
    offset_minutes(Local::now().offset().local_minus_utc())
}

pub fn offset_minutes(local_minus_utc_secs: i32) -> i32 {
    -(local_minus_utc_secs / 60)
}

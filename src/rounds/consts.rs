use std::time::Duration;

pub const ROUND_EVENTS_CHANNEL_CAPACITY: usize = 32;
/// How long a locked round stays readable before it is dropped from storage.
pub const LOCKED_ROUND_RETENTION: Duration = Duration::from_secs(300);

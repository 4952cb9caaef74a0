//! Clock access for event timestamps.

use chrono::{DateTime, Utc};

/// UTC instant stamped on every event.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_wall_clock_in_utc() {
        let before = Utc::now();
        let stamp = now();
        assert!(stamp >= before);
        assert!(stamp <= Utc::now());
    }
}

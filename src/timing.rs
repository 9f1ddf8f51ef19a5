use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

pub fn deadline_after(at: DateTime<Utc>, delay: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(delay)
        .ok()
        .and_then(|d| at.checked_add_signed(d))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deadline_after() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            deadline_after(at, Duration::from_millis(1500)),
            at + TimeDelta::milliseconds(1500)
        );
        assert_eq!(deadline_after(at, Duration::MAX), DateTime::<Utc>::MAX_UTC);
    }
}

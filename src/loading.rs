use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::timing::deadline_after;

pub const LOADING_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    ready_at: DateTime<Utc>,
    ready: bool,
}

impl LoadingGate {
    pub fn new(mounted_at: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            ready_at: deadline_after(mounted_at, duration),
            ready: false,
        }
    }

    pub fn ready_at(&self) -> DateTime<Utc> {
        self.ready_at
    }

    pub fn is_loading(&self) -> bool {
        !self.ready
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.ready {
            return Duration::ZERO;
        }
        (self.ready_at - now).to_std().unwrap_or_default()
    }

    // true only on the call that opens the gate
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        if self.ready || now < self.ready_at {
            return false;
        }
        self.ready = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn mounted() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 2, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_loader_until_deadline() {
        let start = mounted();
        let mut gate = LoadingGate::new(start, LOADING_DURATION);
        assert!(gate.is_loading());
        assert!(!gate.poll(start));
        assert!(!gate.poll(start + TimeDelta::milliseconds(2999)));
        assert!(gate.is_loading());
    }

    #[test]
    fn test_opens_exactly_once() {
        let start = mounted();
        let mut gate = LoadingGate::new(start, LOADING_DURATION);
        assert!(gate.poll(start + TimeDelta::milliseconds(3000)));
        assert!(!gate.is_loading());
        assert!(!gate.poll(start + TimeDelta::milliseconds(3001)));
        assert!(!gate.poll(start + TimeDelta::seconds(60)));
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_early_wakeup_keeps_loader() {
        let start = mounted();
        let mut gate = LoadingGate::new(start, LOADING_DURATION);
        let woke = start + TimeDelta::milliseconds(2998);
        assert!(!gate.poll(woke));
        assert!(gate.is_loading());
        assert_eq!(gate.remaining(woke), Duration::from_millis(2));

        let woke = woke + TimeDelta::milliseconds(2);
        assert!(gate.poll(woke));
        assert_eq!(gate.remaining(woke), Duration::ZERO);
        assert_eq!(gate.remaining(start), Duration::ZERO);
    }

    #[test]
    fn test_late_poll_still_opens() {
        let start = mounted();
        let mut gate = LoadingGate::new(start, LOADING_DURATION);
        assert_eq!(gate.ready_at(), start + TimeDelta::milliseconds(3000));
        assert!(gate.poll(start + TimeDelta::seconds(10)));
    }
}

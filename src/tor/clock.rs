//! Time source for registry staleness checks.

use std::time::SystemTime;

/// Supplies the current time to [`TorRegistry`](super::TorRegistry).
pub trait Clock: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> SystemTime;
}

/// Real system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::Clock;
    use std::sync::Mutex;
    use std::time::{Duration, SystemTime};

    /// Test clock advanced by hand.
    pub struct ManualClock(Mutex<SystemTime>);

    impl ManualClock {
        pub fn new() -> Self {
            Self(Mutex::new(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)))
        }

        pub fn advance(&self, by: Duration) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> SystemTime {
            *self.0.lock().unwrap()
        }
    }
}

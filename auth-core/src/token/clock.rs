use chrono::DateTime;
use chrono::Utc;

/// Source of the current instant for token issuance and expiry checks.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use std::sync::atomic::AtomicI64;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use chrono::DateTime;
    use chrono::Duration;
    use chrono::Utc;

    use super::Clock;

    /// Manually advanced clock; clones share the same instant.
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        millis: Arc<AtomicI64>,
    }

    impl FixedClock {
        pub fn at(seconds: i64) -> Self {
            Self {
                millis: Arc::new(AtomicI64::new(seconds * 1000)),
            }
        }

        pub fn advance(&self, by: Duration) {
            self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst))
                .expect("timestamp in range")
        }
    }
}

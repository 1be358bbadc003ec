//!
//! Unix-timestamp clock with an adjustable delta
//!
//! Everything time-related in this crate reads an explicitly passed [`Clock`]
//! instead of the system clock, so validity windows can be pinned down in
//! tests without sleeping or faking the environment.
//!

use std::{
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};

/// Unix-seconds clock, optionally carrying an adjustable delta
#[derive(Clone, Default)]
pub struct Clock {
    delta: Option<Arc<AtomicI64>>,
}

impl Clock {
    /// Construct a clock that reads straight from the system time
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a mockable clock plus the handle that shifts it around
    #[must_use]
    pub fn mockable() -> (Self, MockHandle) {
        let delta = Arc::new(AtomicI64::default());

        let mock_handle = MockHandle {
            delta: Arc::clone(&delta),
        };
        let clock = Self { delta: Some(delta) };

        (clock, mock_handle)
    }

    /// Read the current Unix timestamp in seconds, delta applied
    #[must_use]
    pub fn unix_timestamp(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let delta = self
            .delta
            .as_ref()
            .map_or(0, |delta| delta.load(Ordering::Acquire));

        now.saturating_add_signed(delta)
    }
}

/// Handle to adjust the delta of a mockable clock
#[derive(Clone)]
pub struct MockHandle {
    delta: Arc<AtomicI64>,
}

impl MockHandle {
    /// Move the clock forward by an amount of seconds
    pub fn advance(&self, secs: u64) {
        self.delta.fetch_add(secs as i64, Ordering::AcqRel);
    }

    /// Move the clock backwards by an amount of seconds
    pub fn rewind(&self, secs: u64) {
        self.delta.fetch_sub(secs as i64, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod test {
    use super::Clock;

    #[test]
    fn can_advance() {
        let (clock, mock) = Clock::mockable();

        let now = clock.unix_timestamp();
        mock.advance(3600);
        let after = clock.unix_timestamp();

        assert!(after - now >= 3600);
    }

    #[test]
    fn can_rewind() {
        let (clock, mock) = Clock::mockable();

        let now = clock.unix_timestamp();
        mock.rewind(3600);
        let after = clock.unix_timestamp();

        assert!(now - after >= 3599);
    }
}

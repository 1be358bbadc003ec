//!
//! Validity windows bounding how long a signature stays fresh
//!

use crate::clock::Clock;
use std::time::Duration;

/// How long a signature stays valid when the subscriber doesn't pick a lifetime
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// 5 minutes
pub const ALLOWED_CLOCK_SKEW: Duration = Duration::from_secs(5 * 60);

/// Pair of Unix timestamps bounding when a signature is considered fresh
///
/// Invariant: `created <= expires`. Both constructors uphold it; a window
/// parsed out of an inbound header is a *claim* and goes through
/// [`ValidityWindow::is_current`] before anything trusts it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidityWindow {
    /// Timestamp the signature was created
    pub created: u64,

    /// Timestamp the signature expires
    pub expires: u64,
}

impl ValidityWindow {
    /// Window opening at the clock's current time with the default lifetime
    #[must_use]
    pub fn from_clock(clock: &Clock) -> Self {
        Self::with_lifetime(clock, DEFAULT_LIFETIME)
    }

    /// Window opening at the clock's current time with a caller-picked lifetime
    #[must_use]
    pub fn with_lifetime(clock: &Clock, lifetime: Duration) -> Self {
        let created = clock.unix_timestamp();

        Self {
            created,
            expires: created.saturating_add(lifetime.as_secs()),
        }
    }

    /// Whether the window covers the clock's current time
    ///
    /// The bounds are widened by `allowed_skew` in both directions to absorb
    /// clock drift between peers.
    #[must_use]
    pub fn is_current(&self, clock: &Clock, allowed_skew: Duration) -> bool {
        let now = clock.unix_timestamp();
        let skew = allowed_skew.as_secs();

        self.created.saturating_sub(skew) <= now && now <= self.expires.saturating_add(skew)
    }
}

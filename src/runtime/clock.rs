// self
use crate::_prelude::*;

/// Source of `oauth_timestamp` values.
pub trait Clock
where
	Self: 'static + Send + Sync,
{
	/// Returns the current time in Unix seconds.
	fn unix_timestamp(&self) -> i64;
}

/// Wall clock backed by [`OffsetDateTime::now_utc`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;
impl Clock for SystemClock {
	fn unix_timestamp(&self) -> i64 {
		OffsetDateTime::now_utc().unix_timestamp()
	}
}

/// Clock pinned to a single instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(i64);
impl FixedClock {
	/// Pins the clock to `timestamp` (Unix seconds).
	pub const fn new(timestamp: i64) -> Self {
		Self(timestamp)
	}
}
impl Clock for FixedClock {
	fn unix_timestamp(&self) -> i64 {
		self.0
	}
}

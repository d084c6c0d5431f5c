//! Optional observability helpers for signing.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth1_header.sign` with the `stage` (call
//!   site) and `method` fields.
//! - Enable `metrics` to increment the `oauth1_header_sign_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each signing attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignOutcome {
	/// Entry to a signing helper.
	Attempt,
	/// Header produced.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl SignOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignOutcome::Attempt => "attempt",
			SignOutcome::Success => "success",
			SignOutcome::Failure => "failure",
		}
	}
}
impl Display for SignOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

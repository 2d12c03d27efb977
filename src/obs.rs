//! Optional observability helpers for Query API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `aws_query.call` with the `action` and `host`
//!   fields, plus `trace`-level response previews.
//! - Enable `metrics` to increment the `aws_query_call_total` counter for every
//!   attempt/success/failure, labeled by `action` + `outcome`.
//!
//! Neither feature ever records credentials or request bodies, which carry the signature.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

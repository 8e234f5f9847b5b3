//! Optional observability helpers for configuration bootstrap.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run `configure` inside an `oauth2_provider.configure` span (with the
//!   `orm` and `stage` fields) and to log unconfigured hooks and install outcomes.
//! - Enable `metrics` to increment the `oauth2_provider_configure_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each `configure` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigureOutcome {
	/// Entry to `configure`.
	Attempt,
	/// Configuration installed.
	Success,
	/// Configuration rejected; the previous one stays installed.
	Failure,
}
impl ConfigureOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ConfigureOutcome::Attempt => "attempt",
			ConfigureOutcome::Success => "success",
			ConfigureOutcome::Failure => "failure",
		}
	}
}
impl Display for ConfigureOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

// self
use crate::{_prelude::*, obs::ConfigureOutcome};

/// Span wrapping one `configure` call.
#[derive(Clone, Debug)]
pub struct ConfigureSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ConfigureSpan {
	/// Creates a span tagged with the adapter name and call-site stage.
	pub fn new(orm: &str, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth2_provider.configure", orm, stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (orm, stage);

			Self {}
		}
	}

	/// Enters the span.
	pub fn entered(self) -> ConfigureSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ConfigureSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ConfigureSpanGuard {}
		}
	}
}

/// RAII guard returned by [`ConfigureSpan::entered`].
pub struct ConfigureSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ConfigureSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ConfigureSpanGuard(..)")
	}
}

/// Logs that a hook was invoked without being configured.
pub fn warn_hook_not_configured(option: &'static str) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(option, "Hook `{option}` is not configured; falling back to its default.");
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = option;
	}
}

/// Logs the end of a `configure` call.
pub fn log_configure_outcome(outcome: ConfigureOutcome, error: Option<&dyn StdError>) {
	#[cfg(feature = "tracing")]
	{
		match error {
			Some(error) =>
				tracing::warn!(outcome = outcome.as_str(), %error, "Configuration rejected."),
			None => tracing::info!(outcome = outcome.as_str(), "Configuration installed."),
		}
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (outcome, error);
	}
}

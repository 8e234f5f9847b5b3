//! Provider-level error types shared by the bootstrap, adapters, and declaration documents.

// self
use crate::_prelude::*;

/// Provider-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Configuration was read before a successful `configure` call.
	#[error("Provider configuration is missing; call `configure` during startup before reading it.")]
	MissingConfiguration,
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Persistence adapter failed while initializing.
	#[error("{0}")]
	Adapter(
		#[from]
		#[source]
		crate::adapter::AdapterError,
	),
}

/// Configuration failures raised while installing a configuration.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// The `orm` option names an adapter nobody registered.
	#[error(
		"ORM adapter `{orm}` could not be resolved; make sure the `{orm}` integration for the provider is installed and registered."
	)]
	AdapterNotFound {
		/// Unresolved adapter identifier.
		orm: String,
	},
	/// Declaration document could not be deserialized.
	#[error("Declaration document is invalid at `{}`.", .source.path())]
	InvalidDocument {
		/// Path-aware parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl ConfigError {
	/// Builds the adapter-resolution error for the provided identifier.
	pub fn adapter_not_found(orm: impl Into<String>) -> Self {
		Self::AdapterNotFound { orm: orm.into() }
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::InvalidDocument { source }
	}
}

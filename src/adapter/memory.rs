//! In-process [`OrmAdapter`] for local development and tests.

// self
use crate::{
	_prelude::*,
	adapter::{AdapterError, AdapterOptions, OrmAdapter},
	config::Configuration,
};

/// Setup steps observed by a [`MemoryAdapter`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryAdapterState {
	/// Number of `initialize_models` calls.
	pub models_initialized: usize,
	/// Number of `initialize_application_owner` calls.
	pub owner_initialized: usize,
	/// Adapter options seen by the latest `initialize_models` call.
	pub options: AdapterOptions,
}

/// Adapter that records its setup instead of touching a database.
#[derive(Clone, Debug, Default)]
pub struct MemoryAdapter(Arc<RwLock<MemoryAdapterState>>);
impl MemoryAdapter {
	/// Snapshot of the recorded setup steps.
	pub fn state(&self) -> MemoryAdapterState {
		self.0.read().clone()
	}
}
impl OrmAdapter for MemoryAdapter {
	fn initialize_models(&self, config: &Configuration) -> Result<(), AdapterError> {
		let mut state = self.0.write();

		state.models_initialized += 1;
		state.options = config.active_record_options();

		Ok(())
	}

	fn initialize_application_owner(&self, _: &Configuration) -> Result<(), AdapterError> {
		let mut state = self.0.write();

		if state.models_initialized == 0 {
			return Err(AdapterError::Initialization {
				message: "owner support requires initialized models".into(),
			});
		}

		state.owner_initialized += 1;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn owner_support_requires_models() {
		let adapter = MemoryAdapter::default();
		let config = Configuration::default();
		let err = adapter
			.initialize_application_owner(&config)
			.expect_err("Owner support must fail before models are initialized.");

		assert!(matches!(err, AdapterError::Initialization { .. }));

		adapter.initialize_models(&config).expect("Models should initialize.");
		adapter.initialize_application_owner(&config).expect("Owner support should initialize.");

		let state = adapter.state();

		assert_eq!(state.models_initialized, 1);
		assert_eq!(state.owner_initialized, 1);
		assert!(state.options.is_empty());
	}

	#[test]
	fn clones_share_state() {
		let adapter = MemoryAdapter::default();
		let clone = adapter.clone();

		clone.initialize_models(&Configuration::default()).expect("Models should initialize.");

		assert_eq!(adapter.state().models_initialized, 1);
	}
}

//! Startup owner of the installed configuration.
//!
//! The embedding application creates one [`Provider`] during startup, calls
//! [`configure`](Provider::configure) before serving traffic, and hands the resulting
//! `Arc<Configuration>` (or the provider itself) to every component that reads settings.
//! A later `configure` replaces the installed configuration wholesale; callers must finish it
//! before concurrent requests start reading.

// self
use crate::{
	_prelude::*,
	adapter::{AdapterRegistry, OrmAdapter},
	config::{Builder, ConfigDocument, Configuration},
	error::ConfigError,
	obs::{self, ConfigureOutcome, ConfigureSpan},
};

#[derive(Clone)]
struct Installed {
	config: Arc<Configuration>,
	adapter: Arc<dyn OrmAdapter>,
}

/// Holds the adapter registry and the configuration installed by the latest `configure`.
pub struct Provider {
	adapters: AdapterRegistry,
	installed: RwLock<Option<Installed>>,
}
impl Provider {
	/// Creates an unconfigured provider resolving adapters through `adapters`.
	pub fn new(adapters: AdapterRegistry) -> Self {
		Self { adapters, installed: RwLock::new(None) }
	}

	/// Builds a configuration from `block` and installs it.
	///
	/// The `orm` adapter is resolved and initialized before anything is installed, so a failure
	/// leaves the previous configuration (or none) in place.
	pub fn configure<F>(&self, block: F) -> Result<Arc<Configuration>>
	where
		F: FnOnce(&mut Builder),
	{
		self.install(Builder::new(block).build())
	}

	/// Replays `document` onto a fresh builder, runs `block` after it, and installs the result.
	pub fn configure_from_document<F>(
		&self,
		document: &ConfigDocument,
		block: F,
	) -> Result<Arc<Configuration>>
	where
		F: FnOnce(&mut Builder),
	{
		self.configure(|builder| {
			document.apply(builder);
			block(builder);
		})
	}

	/// Returns the installed configuration.
	pub fn configuration(&self) -> Result<Arc<Configuration>> {
		self.installed
			.read()
			.as_ref()
			.map(|installed| installed.config.clone())
			.ok_or(Error::MissingConfiguration)
	}

	/// Returns the adapter resolved for the installed configuration.
	pub fn adapter(&self) -> Result<Arc<dyn OrmAdapter>> {
		self.installed
			.read()
			.as_ref()
			.map(|installed| installed.adapter.clone())
			.ok_or(Error::MissingConfiguration)
	}

	/// Returns true once a configuration was installed.
	pub fn is_configured(&self) -> bool {
		self.installed.read().is_some()
	}

	fn install(&self, config: Configuration) -> Result<Arc<Configuration>> {
		let orm = config.orm();
		let _guard = ConfigureSpan::new(&orm, "install").entered();

		obs::record_configure_outcome(ConfigureOutcome::Attempt);

		let result = self.setup(config, &orm);

		match &result {
			Ok(_) => {
				obs::record_configure_outcome(ConfigureOutcome::Success);
				obs::log_configure_outcome(ConfigureOutcome::Success, None);
			},
			Err(e) => {
				obs::record_configure_outcome(ConfigureOutcome::Failure);
				obs::log_configure_outcome(ConfigureOutcome::Failure, Some(e));
			},
		}

		result
	}

	fn setup(&self, config: Configuration, orm: &str) -> Result<Arc<Configuration>> {
		let adapter =
			self.adapters.resolve(orm).ok_or_else(|| ConfigError::adapter_not_found(orm))?;

		adapter.initialize_models(&config)?;

		if config.enable_application_owner() {
			adapter.initialize_application_owner(&config)?;
		}

		let config = Arc::new(config);

		*self.installed.write() = Some(Installed { config: config.clone(), adapter });

		Ok(config)
	}
}
/// Registers only the `memory` adapter; select it with `orm("memory")` or build the provider
/// with [`Provider::new`] and a registry holding an `active_record` adapter.
impl Default for Provider {
	fn default() -> Self {
		Self::new(AdapterRegistry::with_memory())
	}
}
impl Debug for Provider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Provider")
			.field("adapters", &self.adapters)
			.field("configured", &self.is_configured())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::adapter::MemoryAdapter;

	fn provider_with(adapter: &MemoryAdapter) -> Provider {
		Provider::new(
			AdapterRegistry::new().register_instance("active_record", Arc::new(adapter.clone())),
		)
	}

	#[test]
	fn reading_before_configure_fails() {
		let provider = Provider::default();

		assert!(matches!(provider.configuration(), Err(Error::MissingConfiguration)));
		assert!(matches!(provider.adapter(), Err(Error::MissingConfiguration)));
		assert!(!provider.is_configured());
	}

	#[test]
	fn configure_installs_and_initializes_models() {
		let adapter = MemoryAdapter::default();
		let provider = provider_with(&adapter);
		let installed = provider
			.configure(|config| {
				config.realm("Example");
			})
			.expect("Configuration should install.");
		let first = provider.configuration().expect("Configuration should be readable.");
		let second = provider.configuration().expect("Configuration should be readable.");

		assert!(Arc::ptr_eq(&installed, &first));
		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(first.realm(), "Example");
		assert_eq!(adapter.state().models_initialized, 1);
		assert_eq!(adapter.state().owner_initialized, 0);
	}

	#[test]
	fn owner_support_is_initialized_only_when_enabled() {
		let adapter = MemoryAdapter::default();
		let provider = provider_with(&adapter);

		provider.configure(|_| {}).expect("Configuration without owners should install.");

		assert_eq!(adapter.state().owner_initialized, 0);

		provider
			.configure(|config| {
				config.enable_application_owner(false);
			})
			.expect("Configuration with owners should install.");

		assert_eq!(adapter.state().models_initialized, 2);
		assert_eq!(adapter.state().owner_initialized, 1);
	}

	#[test]
	fn unresolvable_orm_keeps_the_previous_configuration() {
		let provider = Provider::default();
		let err = provider.configure(|_| {}).expect_err("The default orm is not registered.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::AdapterNotFound { ref orm }) if orm == "active_record"
		));
		assert!(!provider.is_configured());

		let installed = provider
			.configure(|config| {
				config.orm("memory");
			})
			.expect("The memory adapter should resolve.");

		provider
			.configure(|config| {
				config.orm("sequel").realm("Replaced");
			})
			.expect_err("Unknown adapters must be rejected.");

		let current = provider.configuration().expect("Configuration should still be installed.");

		assert!(Arc::ptr_eq(&installed, &current));
		assert_eq!(current.realm(), "Doorkeeper");
	}

	#[test]
	fn second_configure_replaces_the_first() {
		let provider = Provider::default();

		provider
			.configure(|config| {
				config.orm("memory").use_refresh_token().realm("First");
			})
			.expect("First configuration should install.");
		provider
			.configure(|config| {
				config.orm("memory");
			})
			.expect("Second configuration should install.");

		let current = provider.configuration().expect("Configuration should be installed.");

		assert_eq!(current.realm(), "Doorkeeper");
		assert!(!current.refresh_token_enabled());
	}
}

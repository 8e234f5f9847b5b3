//! Persistence adapter contract, adapter resolution, and adapter pass-through options.
//!
//! The configuration core never persists anything itself. The `orm` option names an adapter,
//! [`AdapterRegistry`] resolves that name at configure time, and the bootstrap asks the
//! resolved adapter to set up its models (and owner support, when enabled).

pub mod memory;

pub use memory::MemoryAdapter;

// self
use crate::{_prelude::*, config::Configuration, config::option::OptionBuilder};

/// Factory producing an adapter instance for a configuration.
pub type AdapterFactory = Arc<dyn Fn() -> Arc<dyn OrmAdapter> + Send + Sync>;

/// Persistence layer selected by the `orm` option.
pub trait OrmAdapter
where
	Self: Send + Sync,
{
	/// Sets up the application, grant, and token models.
	fn initialize_models(&self, config: &Configuration) -> Result<(), AdapterError>;

	/// Adds owner support to the application model.
	fn initialize_application_owner(&self, config: &Configuration) -> Result<(), AdapterError>;
}

/// Error type produced by [`OrmAdapter`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum AdapterError {
	/// The adapter could not finish its setup.
	#[error("Adapter initialization failed: {message}.")]
	Initialization {
		/// Human-readable error payload.
		message: String,
	},
}

/// Name-to-factory table consulted when a configuration is installed.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
	factories: HashMap<String, AdapterFactory>,
}
impl AdapterRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry with [`MemoryAdapter`] registered as `memory`.
	///
	/// The default `orm` is `active_record`, so configurations resolved through this registry
	/// must select `memory` unless an `active_record` adapter is registered as well.
	pub fn with_memory() -> Self {
		Self::new().register("memory", || Arc::new(MemoryAdapter::default()))
	}

	/// Registers a factory; a later registration under the same name replaces the earlier one.
	pub fn register<F>(mut self, orm: impl Into<String>, factory: F) -> Self
	where
		F: 'static + Send + Sync + Fn() -> Arc<dyn OrmAdapter>,
	{
		self.factories.insert(orm.into(), Arc::new(factory));

		self
	}

	/// Registers an existing adapter instance, shared by every resolution.
	pub fn register_instance(self, orm: impl Into<String>, adapter: Arc<dyn OrmAdapter>) -> Self {
		self.register(orm, move || adapter.clone())
	}

	/// Returns true when `orm` resolves.
	pub fn contains(&self, orm: &str) -> bool {
		self.factories.contains_key(orm)
	}

	/// Resolves `orm` to a fresh adapter.
	pub fn resolve(&self, orm: &str) -> Option<Arc<dyn OrmAdapter>> {
		self.factories.get(orm).map(|factory| factory())
	}
}
impl Debug for AdapterRegistry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut names = self.factories.keys().collect::<Vec<_>>();

		names.sort_unstable();

		f.debug_struct("AdapterRegistry").field("orms", &names).finish()
	}
}

/// Options passed through to the adapter untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdapterOptions(BTreeMap<String, serde_json::Value>);
impl AdapterOptions {
	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
		self.0.get(key)
	}

	/// Returns true when no options were given.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over the options, ordered by key.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}
}

/// Sub-builder behind the `active_record_options` option.
#[derive(Debug, Default)]
pub struct AdapterOptionsBuilder(BTreeMap<String, serde_json::Value>);
impl AdapterOptionsBuilder {
	/// Sets one option.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> &mut Self {
		self.0.insert(key.into(), value.into());

		self
	}
}
impl OptionBuilder for AdapterOptionsBuilder {
	type Output = AdapterOptions;

	fn build(self) -> Self::Output {
		AdapterOptions(self.0)
	}
}

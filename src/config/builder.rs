//! One-shot builder that fills a [`Configuration`] from a declaration block.
//!
//! Setters for declared options are generated next to the option table in `config.rs`; the
//! methods below cover settings that toggle several flags or take structured input.

// self
use crate::{
	auth::Scopes,
	config::Configuration,
	request::{AccessTokenMethod, ClientCredentialsMethod},
};

/// Write-only façade used while declaring a configuration.
#[derive(Debug, Default)]
pub struct Builder {
	pub(super) config: Configuration,
}
impl Builder {
	/// Creates a builder and runs `block` against it.
	pub fn new<F>(block: F) -> Self
	where
		F: FnOnce(&mut Builder),
	{
		let mut builder = Self::default();

		block(&mut builder);

		builder
	}

	/// Consumes the builder and returns the populated configuration.
	pub fn build(self) -> Configuration {
		self.config
	}

	/// Gives applications an owner; `confirmation` additionally makes the owner mandatory.
	pub fn enable_application_owner(&mut self, confirmation: bool) -> &mut Self {
		self.config.enable_application_owner = true;

		if confirmation {
			self.config.confirm_application_owner = true;
		}

		self
	}

	/// Makes the application owner mandatory.
	pub fn confirm_application_owner(&mut self) -> &mut Self {
		self.config.confirm_application_owner = true;

		self
	}

	/// Sets the scopes granted when a client asks for none.
	pub fn default_scopes<I, S>(&mut self, names: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.config.default_scopes = Some(Scopes::new(names));

		self
	}

	/// Sets the scopes a client may request in addition to the defaults.
	pub fn optional_scopes<I, S>(&mut self, names: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.config.optional_scopes = Some(Scopes::new(names));

		self
	}

	/// Replaces the ordered list of client-credential strategies.
	pub fn client_credentials<I>(&mut self, methods: I) -> &mut Self
	where
		I: IntoIterator<Item = ClientCredentialsMethod>,
	{
		self.config.client_credentials_methods = Some(methods.into_iter().collect());

		self
	}

	/// Replaces the ordered list of access-token strategies.
	pub fn access_token_methods<I>(&mut self, methods: I) -> &mut Self
	where
		I: IntoIterator<Item = AccessTokenMethod>,
	{
		self.config.access_token_methods = Some(methods.into_iter().collect());

		self
	}

	/// Issues refresh tokens.
	pub fn use_refresh_token(&mut self) -> &mut Self {
		self.config.refresh_token_enabled = true;

		self
	}

	/// Returns a still-valid access token instead of issuing a new one.
	pub fn reuse_access_token(&mut self) -> &mut Self {
		self.config.reuse_access_token = true;

		self
	}

	/// Runs the provider without its HTML views.
	pub fn api_only(&mut self) -> &mut Self {
		self.config.api_only = true;

		self
	}

	/// Rejects requested scopes outside the configured ones.
	pub fn enforce_configured_scopes(&mut self) -> &mut Self {
		self.config.enforce_configured_scopes = true;

		self
	}

	/// Lets public clients use PKCE without a client secret.
	pub fn enable_pkce_without_secret(&mut self) -> &mut Self {
		self.config.pkce_without_secret_enabled = true;

		self
	}
}

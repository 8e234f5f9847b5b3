//! Declaration documents: the serializable subset of the options, loaded from JSON.
//!
//! Hooks and generator strategies only exist in code, so a document is replayed onto a
//! [`Builder`] and the in-code block fills in the rest.

// self
use crate::{
	_prelude::*,
	config::{Builder, Environment, GrantFlow, HandleAuthErrors},
	error::ConfigError,
	request::{AccessTokenMethod, ClientCredentialsMethod},
	token::GeneratorMethod,
};

/// Application-owner settings of a [`ConfigDocument`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplicationOwnerDocument {
	/// Makes the owner mandatory.
	pub confirmation: bool,
}

/// Serializable provider declaration.
///
/// Absent fields leave the corresponding option untouched. Durations are whole seconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigDocument {
	/// Access-token lifetime in seconds.
	pub access_token_expires_in: Option<u32>,
	/// Authorization-code lifetime in seconds.
	pub authorization_code_expires_in: Option<u32>,
	/// Persistence adapter name.
	pub orm: Option<String>,
	/// Options passed through to the adapter.
	pub active_record_options: Option<BTreeMap<String, serde_json::Value>>,
	/// Out-of-band redirect URI for native applications.
	pub native_redirect_uri: Option<String>,
	/// Enabled grant flows, in order.
	pub grant_flows: Option<Vec<GrantFlow>>,
	/// Realm announced in `WWW-Authenticate` headers.
	pub realm: Option<String>,
	/// HTTPS requirement for redirect URIs.
	pub force_ssl_in_redirect_uri: Option<bool>,
	/// Base controller of the HTTP layer.
	pub base_controller: Option<String>,
	/// Error surfacing strategy.
	pub handle_auth_errors: Option<HandleAuthErrors>,
	/// Encoding used by the default token generator.
	pub default_generator_method: Option<GeneratorMethod>,
	/// Deployment environment.
	pub environment: Option<Environment>,
	/// Scopes granted when a client asks for none.
	pub default_scopes: Option<Vec<String>>,
	/// Additional scopes a client may request.
	pub optional_scopes: Option<Vec<String>>,
	/// Client-credential strategies, in order.
	pub client_credentials: Option<Vec<ClientCredentialsMethod>>,
	/// Access-token strategies, in order.
	pub access_token_methods: Option<Vec<AccessTokenMethod>>,
	/// Application-owner support; present means enabled.
	pub enable_application_owner: Option<ApplicationOwnerDocument>,
	/// Issues refresh tokens.
	pub use_refresh_token: bool,
	/// Reuses still-valid access tokens.
	pub reuse_access_token: bool,
	/// Runs without HTML views.
	pub api_only: bool,
	/// Rejects scopes outside the configured ones.
	pub enforce_configured_scopes: bool,
	/// Lets public clients use PKCE without a secret.
	pub enable_pkce_without_secret: bool,
}
impl ConfigDocument {
	/// Parses a JSON document, reporting the path of the offending field on failure.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let deserializer = &mut serde_json::Deserializer::from_str(json);

		Ok(serde_path_to_error::deserialize(deserializer)?)
	}

	/// Replays the document onto `builder`.
	pub fn apply(&self, builder: &mut Builder) {
		if let Some(seconds) = self.access_token_expires_in {
			builder.access_token_expires_in(Duration::seconds(seconds.into()));
		}
		if let Some(seconds) = self.authorization_code_expires_in {
			builder.authorization_code_expires_in(Duration::seconds(seconds.into()));
		}
		if let Some(orm) = &self.orm {
			builder.orm(orm.as_str());
		}
		if let Some(options) = &self.active_record_options {
			builder.active_record_options(|builder| {
				for (key, value) in options {
					builder.set(key.as_str(), value.clone());
				}
			});
		}
		if let Some(uri) = &self.native_redirect_uri {
			builder.native_redirect_uri(uri.as_str());
		}
		if let Some(flows) = &self.grant_flows {
			builder.grant_flows(flows.clone());
		}
		if let Some(realm) = &self.realm {
			builder.realm(realm.as_str());
		}
		if let Some(force) = self.force_ssl_in_redirect_uri {
			builder.force_ssl_in_redirect_uri(force);
		}
		if let Some(controller) = &self.base_controller {
			builder.base_controller(controller.as_str());
		}
		if let Some(mode) = self.handle_auth_errors {
			builder.handle_auth_errors(mode);
		}
		if let Some(method) = self.default_generator_method {
			builder.default_generator_method(method);
		}
		if let Some(environment) = self.environment {
			builder.environment(environment);
		}
		if let Some(scopes) = &self.default_scopes {
			builder.default_scopes(scopes);
		}
		if let Some(scopes) = &self.optional_scopes {
			builder.optional_scopes(scopes);
		}
		if let Some(methods) = &self.client_credentials {
			builder.client_credentials(methods.iter().copied());
		}
		if let Some(methods) = &self.access_token_methods {
			builder.access_token_methods(methods.iter().copied());
		}
		if let Some(owner) = &self.enable_application_owner {
			builder.enable_application_owner(owner.confirmation);
		}
		if self.use_refresh_token {
			builder.use_refresh_token();
		}
		if self.reuse_access_token {
			builder.reuse_access_token();
		}
		if self.api_only {
			builder.api_only();
		}
		if self.enforce_configured_scopes {
			builder.enforce_configured_scopes();
		}
		if self.enable_pkce_without_secret {
			builder.enable_pkce_without_secret();
		}
	}
}

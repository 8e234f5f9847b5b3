//! Provider configuration: declared options, derived settings, and the builder that fills them.
//!
//! A [`Configuration`] is produced once by a [`Builder`] and is read-only afterwards. Declared
//! options (see the table at the bottom of this file) fall back to their default provider on
//! every read; derived settings that combine several options are computed on first read and
//! cached for the lifetime of the configuration.

pub mod builder;
pub mod document;
pub mod grant;
pub mod hook;
pub mod option;

mod defaults;

pub use builder::*;
pub use document::*;
pub use grant::*;
pub use hook::*;
pub use option::{OptionBuilder, OptionDescriptor, find_descriptor};

// self
use crate::{
	_prelude::*,
	adapter::{AdapterOptions, AdapterOptionsBuilder},
	auth::{Scopes, Secret},
	config::option::declare_options,
	request::{AccessTokenMethod, ClientCredentials, ClientCredentialsMethod, RequestContext},
	token::{GeneratorMethod, TokenContext, TokenGenerator},
};

/// Runtime environment the provider is deployed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
	/// Local development; relaxes the HTTPS requirement for redirect URIs.
	Development,
	/// Automated test runs.
	Test,
	#[default]
	/// Production deployments.
	Production,
}
impl Environment {
	/// Returns true for [`Environment::Development`].
	pub fn is_development(self) -> bool {
		matches!(self, Self::Development)
	}
}

/// How the endpoints surface authorization errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleAuthErrors {
	#[default]
	/// Render an OAuth error response.
	Render,
	/// Propagate the error to the embedding application.
	Raise,
}

/// Immutable provider settings shared by every endpoint.
#[derive(Debug, Default)]
pub struct Configuration {
	options: OptionValues,
	default_scopes: Option<Scopes>,
	optional_scopes: Option<Scopes>,
	client_credentials_methods: Option<Vec<ClientCredentialsMethod>>,
	access_token_methods: Option<Vec<AccessTokenMethod>>,
	refresh_token_enabled: bool,
	reuse_access_token: bool,
	api_only: bool,
	enforce_configured_scopes: bool,
	pkce_without_secret_enabled: bool,
	enable_application_owner: bool,
	confirm_application_owner: bool,
	authorization_response_types: OnceLock<Vec<&'static str>>,
	token_grant_types: OnceLock<Vec<&'static str>>,
}
impl Configuration {
	/// Scopes granted when a client asks for none; empty unless configured.
	pub fn default_scopes(&self) -> Scopes {
		self.default_scopes.clone().unwrap_or_default()
	}

	/// Scopes a client may request in addition to the defaults; empty unless configured.
	pub fn optional_scopes(&self) -> Scopes {
		self.optional_scopes.clone().unwrap_or_default()
	}

	/// Every scope the provider knows: the defaults followed by the optional scopes.
	pub fn scopes(&self) -> Scopes {
		&self.default_scopes() + &self.optional_scopes()
	}

	/// Strategies tried, in order, to find client credentials.
	pub fn client_credentials_methods(&self) -> &[ClientCredentialsMethod] {
		self.client_credentials_methods.as_deref().unwrap_or(ClientCredentialsMethod::DEFAULT)
	}

	/// Strategies tried, in order, to find a bearer access token.
	pub fn access_token_methods(&self) -> &[AccessTokenMethod] {
		self.access_token_methods.as_deref().unwrap_or(AccessTokenMethod::DEFAULT)
	}

	/// Whether refresh tokens are issued.
	pub fn refresh_token_enabled(&self) -> bool {
		self.refresh_token_enabled
	}

	/// Whether a still-valid access token is returned instead of issuing a new one.
	pub fn reuse_access_token(&self) -> bool {
		self.reuse_access_token
	}

	/// Whether the provider runs without its HTML views.
	pub fn api_only(&self) -> bool {
		self.api_only
	}

	/// Whether requested scopes must be a subset of the configured scopes.
	pub fn enforce_configured_scopes(&self) -> bool {
		self.enforce_configured_scopes
	}

	/// Whether public clients may use PKCE without a client secret.
	pub fn pkce_without_secret_enabled(&self) -> bool {
		self.pkce_without_secret_enabled
	}

	/// Whether applications carry an owner.
	pub fn enable_application_owner(&self) -> bool {
		self.enable_application_owner
	}

	/// Whether an application owner is mandatory.
	pub fn confirm_application_owner(&self) -> bool {
		self.confirm_application_owner
	}

	/// `response_type` values the authorization endpoint accepts.
	pub fn authorization_response_types(&self) -> &[&'static str] {
		self.authorization_response_types
			.get_or_init(|| grant::authorization_response_types(&self.grant_flows()))
	}

	/// `grant_type` values the token endpoint accepts.
	pub fn token_grant_types(&self) -> &[&'static str] {
		self.token_grant_types.get_or_init(|| {
			grant::token_grant_types(&self.grant_flows(), self.refresh_token_enabled())
		})
	}

	/// Returns true when `flow` is among the enabled grant flows.
	pub fn grant_flow_enabled(&self, flow: GrantFlow) -> bool {
		self.grant_flows().contains(&flow)
	}

	/// Finds client credentials with the configured strategies, first hit wins.
	pub fn client_credentials_from(&self, request: &RequestContext) -> Option<ClientCredentials> {
		self.client_credentials_methods().iter().find_map(|method| method.extract(request))
	}

	/// Finds a bearer access token with the configured strategies, first hit wins.
	pub fn access_token_from(&self, request: &RequestContext) -> Option<Secret> {
		self.access_token_methods().iter().find_map(|method| method.extract(request))
	}

	/// Lifetime for a token: the custom hook's answer, else `access_token_expires_in`.
	pub fn access_token_expires_in_for(&self, context: &TokenContext) -> Duration {
		self.custom_access_token_expires_in()
			.call(context)
			.unwrap_or_else(|| self.access_token_expires_in())
	}

	/// Generates an access-token value with the configured generator and encoding.
	pub fn generate_access_token(&self, context: &TokenContext) -> String {
		self.access_token_generator().generate(context, self.default_generator_method())
	}

	/// Returns true when `uri` is rejected by `forbid_redirect_uri`.
	pub fn redirect_uri_forbidden(&self, uri: &Url) -> bool {
		self.forbid_redirect_uri().call(uri)
	}

	/// Returns true when `uri` must use HTTPS.
	pub fn force_ssl_for(&self, uri: &Url) -> bool {
		self.force_ssl_in_redirect_uri().applies_to(uri)
	}

	/// Returns true when `uri` is the out-of-band redirect URI for native applications.
	pub fn is_native_redirect_uri(&self, uri: &str) -> bool {
		self.native_redirect_uri() == uri
	}
}

declare_options! {
	/// Hook resolving the signed-in resource owner (default: warns and returns `None`).
	resource_owner_authenticator as authenticate_resource_owner: ResourceOwnerAuthenticator = defaults::resource_owner_authenticator,
	/// Hook guarding the application-management endpoints (default: lets everyone through).
	admin_authenticator as authenticate_admin: AdminAuthenticator = defaults::admin_authenticator,
	/// Hook resolving the resource owner of a password grant (default: warns and returns `None`).
	resource_owner_from_credentials: ResourceOwnerFromCredentials = defaults::resource_owner_from_credentials,
	/// Hook run before a successful grant strategy responds (default: no-op).
	before_successful_strategy_response: BeforeStrategyResponse = defaults::before_successful_strategy_response,
	/// Hook run after a successful grant strategy responded (default: no-op).
	after_successful_strategy_response: AfterStrategyResponse = defaults::after_successful_strategy_response,
	/// Hook deciding whether consent can be skipped (default: never).
	skip_authorization: SkipAuthorization = defaults::skip_authorization,
	/// Access-token lifetime (default: two hours).
	access_token_expires_in: Duration = defaults::access_token_expires_in,
	/// Hook overriding the access-token lifetime per token (default: `None`).
	custom_access_token_expires_in: CustomAccessTokenExpiresIn = defaults::custom_access_token_expires_in,
	/// Authorization-code lifetime (default: ten minutes).
	authorization_code_expires_in: Duration = defaults::authorization_code_expires_in,
	/// Name of the persistence adapter (default: `active_record`).
	orm: String = defaults::orm,
	/// Out-of-band redirect URI for native applications.
	native_redirect_uri: String = defaults::native_redirect_uri,
	/// Options passed through to the persistence adapter (default: empty).
	active_record_options: AdapterOptions = defaults::active_record_options => AdapterOptionsBuilder,
	/// Enabled grant flows, in order (default: authorization code, client credentials).
	grant_flows: Vec<GrantFlow> = defaults::grant_flows,
	/// Predicate rejecting client redirect URIs (default: rejects nothing).
	forbid_redirect_uri: RedirectUriPredicate = defaults::forbid_redirect_uri,
	/// Realm announced in `WWW-Authenticate` headers (default: `Doorkeeper`).
	realm: String = defaults::realm,
	/// HTTPS requirement for redirect URIs (default: required outside development).
	force_ssl_in_redirect_uri: ForceSsl = defaults::force_ssl_in_redirect_uri,
	/// Access-token generation strategy (default: [`UniqueToken`](crate::token::UniqueToken)).
	access_token_generator: TokenGenerator = defaults::access_token_generator,
	/// Encoding used by the default token generator (default: URL-safe base64).
	default_generator_method: GeneratorMethod = defaults::default_generator_method,
	/// Base controller the HTTP layer derives its endpoints from.
	base_controller: String = defaults::base_controller,
	/// Error surfacing strategy of the endpoints (default: render).
	handle_auth_errors: HandleAuthErrors = defaults::handle_auth_errors,
	/// Deployment environment (default: production).
	environment: Environment = defaults::environment,
}

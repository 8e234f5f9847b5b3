//! Default providers for declared options.
//!
//! Each provider runs on every read of an unset option.

// self
use crate::{
	_prelude::*,
	adapter::AdapterOptions,
	config::{
		AdminAuthenticator, AfterStrategyResponse, BeforeStrategyResponse, Configuration,
		CustomAccessTokenExpiresIn, Environment, ForceSsl, GrantFlow, HandleAuthErrors,
		RedirectUriPredicate, ResourceOwnerAuthenticator, ResourceOwnerFromCredentials,
		SkipAuthorization,
	},
	obs,
	token::{GeneratorMethod, TokenGenerator, UniqueToken},
};

pub(super) fn resource_owner_authenticator(_: &Configuration) -> ResourceOwnerAuthenticator {
	ResourceOwnerAuthenticator::new(|_| {
		obs::warn_hook_not_configured("resource_owner_authenticator");

		None
	})
}

pub(super) fn admin_authenticator(_: &Configuration) -> AdminAuthenticator {
	AdminAuthenticator::new(|_| true)
}

pub(super) fn resource_owner_from_credentials(_: &Configuration) -> ResourceOwnerFromCredentials {
	ResourceOwnerFromCredentials::new(|_| {
		obs::warn_hook_not_configured("resource_owner_from_credentials");

		None
	})
}

pub(super) fn before_successful_strategy_response(_: &Configuration) -> BeforeStrategyResponse {
	BeforeStrategyResponse::new(|_| {})
}

pub(super) fn after_successful_strategy_response(_: &Configuration) -> AfterStrategyResponse {
	AfterStrategyResponse::new(|_, _| {})
}

pub(super) fn skip_authorization(_: &Configuration) -> SkipAuthorization {
	SkipAuthorization::new(|_, _| false)
}

pub(super) fn access_token_expires_in(_: &Configuration) -> Duration {
	Duration::hours(2)
}

pub(super) fn custom_access_token_expires_in(_: &Configuration) -> CustomAccessTokenExpiresIn {
	CustomAccessTokenExpiresIn::new(|_| None)
}

pub(super) fn authorization_code_expires_in(_: &Configuration) -> Duration {
	Duration::minutes(10)
}

pub(super) fn orm(_: &Configuration) -> String {
	"active_record".into()
}

pub(super) fn native_redirect_uri(_: &Configuration) -> String {
	"urn:ietf:wg:oauth:2.0:oob".into()
}

pub(super) fn active_record_options(_: &Configuration) -> AdapterOptions {
	AdapterOptions::default()
}

pub(super) fn grant_flows(_: &Configuration) -> Vec<GrantFlow> {
	vec![GrantFlow::AuthorizationCode, GrantFlow::ClientCredentials]
}

pub(super) fn forbid_redirect_uri(_: &Configuration) -> RedirectUriPredicate {
	RedirectUriPredicate::new(|_| false)
}

pub(super) fn realm(_: &Configuration) -> String {
	"Doorkeeper".into()
}

pub(super) fn force_ssl_in_redirect_uri(config: &Configuration) -> ForceSsl {
	ForceSsl::from(!config.environment().is_development())
}

pub(super) fn access_token_generator(_: &Configuration) -> TokenGenerator {
	TokenGenerator::new(UniqueToken)
}

pub(super) fn default_generator_method(_: &Configuration) -> GeneratorMethod {
	GeneratorMethod::default()
}

pub(super) fn base_controller(_: &Configuration) -> String {
	"ActionController::Base".into()
}

pub(super) fn handle_auth_errors(_: &Configuration) -> HandleAuthErrors {
	HandleAuthErrors::default()
}

pub(super) fn environment(_: &Configuration) -> Environment {
	Environment::default()
}

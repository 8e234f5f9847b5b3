// std
use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};
// crates.io
use time::Duration;
// self
use oauth2_provider_config::{
	adapter::{AdapterError, AdapterRegistry, MemoryAdapter, OrmAdapter},
	auth::{ApplicationId, ResourceOwnerId, Scopes},
	bootstrap::Provider,
	config::{Configuration, ForceSsl, GrantFlow},
	error::{ConfigError, Error},
	request::{AccessTokenMethod, ClientCredentialsMethod, RequestContext},
	token::{AccessTokenGenerator, GeneratorMethod, TokenContext},
	url::Url,
};

#[derive(Default)]
struct FailingAdapter {
	attempts: AtomicUsize,
}
impl OrmAdapter for FailingAdapter {
	fn initialize_models(&self, _: &Configuration) -> Result<(), AdapterError> {
		self.attempts.fetch_add(1, Ordering::SeqCst);

		Err(AdapterError::Initialization { message: "database is unreachable".into() })
	}

	fn initialize_application_owner(&self, _: &Configuration) -> Result<(), AdapterError> {
		Ok(())
	}
}

struct FixedToken;
impl AccessTokenGenerator for FixedToken {
	fn name(&self) -> &str {
		"fixed"
	}

	fn generate(&self, context: &TokenContext, _: GeneratorMethod) -> String {
		format!("fixed-{}", context.grant_type)
	}
}

fn memory_provider() -> (Provider, MemoryAdapter) {
	let adapter = MemoryAdapter::default();
	let registry = AdapterRegistry::new().register_instance("active_record", Arc::new(adapter.clone()));

	(Provider::new(registry), adapter)
}

#[test]
fn configuration_is_missing_until_configured() {
	let (provider, adapter) = memory_provider();
	let err = provider.configuration().expect_err("Reading before configure must fail.");

	assert!(matches!(err, Error::MissingConfiguration));
	assert!(err.to_string().contains("configure"));

	provider.configure(|_| {}).expect("Default configuration should install.");

	let config = provider.configuration().expect("Configuration should be readable after configure.");

	assert_eq!(config.orm(), "active_record");
	assert_eq!(config.access_token_expires_in(), Duration::hours(2));
	assert_eq!(adapter.state().models_initialized, 1);
}

#[test]
fn adapter_failures_leave_nothing_installed() {
	let failing = Arc::new(FailingAdapter::default());
	let provider = Provider::new(
		AdapterRegistry::with_memory().register_instance("sequel", failing.clone()),
	);
	let err = provider
		.configure(|config| {
			config.orm("sequel");
		})
		.expect_err("Adapter failures must surface from configure.");

	assert!(matches!(err, Error::Adapter(AdapterError::Initialization { .. })));
	assert_eq!(failing.attempts.load(Ordering::SeqCst), 1);
	assert!(!provider.is_configured());
}

#[test]
fn unknown_orm_names_the_adapter() {
	let provider = Provider::default();
	let err = provider
		.configure(|config| {
			config.orm("mongoid");
		})
		.expect_err("Unregistered adapters must be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::AdapterNotFound { .. })));
	assert!(err.to_string().contains("mongoid"), "Unexpected message: {err}");
}

#[test]
fn owner_support_follows_the_declaration() {
	let (provider, adapter) = memory_provider();

	provider.configure(|_| {}).expect("Configuration without owners should install.");

	assert_eq!(adapter.state().owner_initialized, 0);

	provider
		.configure(|config| {
			config.enable_application_owner(true);
		})
		.expect("Configuration with owners should install.");

	let config = provider.configuration().expect("Configuration should be readable.");

	assert!(config.confirm_application_owner());
	assert_eq!(adapter.state().models_initialized, 2);
	assert_eq!(adapter.state().owner_initialized, 1);
}

#[test]
fn derived_settings_are_stable_across_reads() {
	let (provider, _) = memory_provider();

	provider
		.configure(|config| {
			config
				.grant_flows([GrantFlow::AuthorizationCode, GrantFlow::Implicit, GrantFlow::Password])
				.use_refresh_token();
		})
		.expect("Configuration should install.");

	let config = provider.configuration().expect("Configuration should be readable.");
	let first = config.token_grant_types();
	let second = config.token_grant_types();

	assert_eq!(config.authorization_response_types(), ["code", "token"]);
	assert_eq!(first, ["authorization_code", "password", "refresh_token"]);
	assert!(std::ptr::eq(first, second));
	assert!(config.grant_flow_enabled(GrantFlow::Password));
	assert!(!config.grant_flow_enabled(GrantFlow::ClientCredentials));
}

#[test]
fn request_strategies_use_the_configured_order() {
	let (provider, _) = memory_provider();

	provider
		.configure(|config| {
			config
				.client_credentials([ClientCredentialsMethod::FromParams])
				.access_token_methods([
					AccessTokenMethod::FromBearerParam,
					AccessTokenMethod::FromBearerAuthorization,
				]);
		})
		.expect("Configuration should install.");

	let config = provider.configuration().expect("Configuration should be readable.");
	let request = RequestContext::new()
		.with_header("Authorization", "Basic YXBwOnNlY3JldA==")
		.with_param("client_id", "from-params")
		.with_param("bearer_token", "param-token");
	let credentials =
		config.client_credentials_from(&request).expect("Params strategy should find the client.");
	let token = config.access_token_from(&request).expect("Bearer param should be found.");

	assert_eq!(credentials.uid, "from-params");
	assert!(credentials.secret.is_none());
	assert_eq!(token.expose(), "param-token");
	assert!(config.client_credentials_from(&RequestContext::new()).is_none());
}

#[test]
fn hooks_and_generators_reach_request_handling() {
	let (provider, _) = memory_provider();
	let trusted = ApplicationId::new("trusted-app").expect("Application identifier should be valid.");

	provider
		.configure(|config| {
			config
				.skip_authorization({
					let trusted = trusted.clone();

					move |_: &ResourceOwnerId, application: &ApplicationId| *application == trusted
				})
				.forbid_redirect_uri(|uri: &Url| uri.host_str() == Some("evil.example"))
				.force_ssl_in_redirect_uri(ForceSsl::when(|uri| uri.host_str() != Some("localhost")))
				.access_token_generator(FixedToken)
				.default_scopes(["public"])
				.optional_scopes(["write"]);
		})
		.expect("Configuration should install.");

	let config = provider.configuration().expect("Configuration should be readable.");
	let owner = ResourceOwnerId::new("owner-1").expect("Owner identifier should be valid.");
	let other = ApplicationId::new("other-app").expect("Application identifier should be valid.");
	let evil = Url::parse("https://evil.example/cb").expect("Redirect URI should parse.");
	let local = Url::parse("http://localhost:3000/cb").expect("Redirect URI should parse.");
	let context = TokenContext::new("client_credentials")
		.with_application(trusted.clone())
		.with_scopes(Scopes::new(["public"]));

	assert!(config.skip_authorization().call(&owner, &trusted));
	assert!(!config.skip_authorization().call(&owner, &other));
	assert!(config.redirect_uri_forbidden(&evil));
	assert!(!config.redirect_uri_forbidden(&local));
	assert!(config.force_ssl_for(&evil));
	assert!(!config.force_ssl_for(&local));
	assert_eq!(config.access_token_generator().name(), "fixed");
	assert_eq!(config.generate_access_token(&context), "fixed-client_credentials");
	assert_eq!(config.scopes().to_string(), "public write");
	assert!(config.scopes().has_scopes(&context.scopes));
}

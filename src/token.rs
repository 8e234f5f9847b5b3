//! Access-token generation strategies and the context handed to token-lifetime hooks.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
// self
use crate::{
	_prelude::*,
	auth::{ApplicationId, ResourceOwnerId, Scopes},
};

const UNIQUE_TOKEN_BYTES: usize = 32;

/// Token about to be issued, as seen by generators and lifetime hooks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenContext {
	/// Client application the token is issued to.
	pub application: Option<ApplicationId>,
	/// Resource owner the token acts for; absent for client-credentials tokens.
	pub resource_owner: Option<ResourceOwnerId>,
	/// Grant type used to obtain the token.
	pub grant_type: String,
	/// Scopes granted to the token.
	pub scopes: Scopes,
}
impl TokenContext {
	/// Creates a context for the provided grant type.
	pub fn new(grant_type: impl Into<String>) -> Self {
		Self { grant_type: grant_type.into(), ..Default::default() }
	}

	/// Sets the client application.
	pub fn with_application(mut self, application: ApplicationId) -> Self {
		self.application = Some(application);

		self
	}

	/// Sets the resource owner.
	pub fn with_resource_owner(mut self, owner: ResourceOwnerId) -> Self {
		self.resource_owner = Some(owner);

		self
	}

	/// Sets the granted scopes.
	pub fn with_scopes(mut self, scopes: Scopes) -> Self {
		self.scopes = scopes;

		self
	}
}

/// Encoding used by [`UniqueToken`] for its random bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorMethod {
	#[default]
	/// URL-safe base64 without padding.
	UrlsafeBase64,
	/// Lowercase hexadecimal.
	Hex,
}

/// Strategy producing access-token values.
pub trait AccessTokenGenerator
where
	Self: Send + Sync,
{
	/// Identifier of the strategy, used in logs and diagnostics.
	fn name(&self) -> &str;

	/// Produces a new token value.
	fn generate(&self, context: &TokenContext, method: GeneratorMethod) -> String;
}

/// Default generator: 32 random bytes encoded with the configured [`GeneratorMethod`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueToken;
impl AccessTokenGenerator for UniqueToken {
	fn name(&self) -> &str {
		"unique_token"
	}

	fn generate(&self, _: &TokenContext, method: GeneratorMethod) -> String {
		let mut bytes = [0_u8; UNIQUE_TOKEN_BYTES];

		rand::rng().fill_bytes(&mut bytes);

		match method {
			GeneratorMethod::UrlsafeBase64 => URL_SAFE_NO_PAD.encode(bytes),
			GeneratorMethod::Hex => bytes.iter().map(|byte| format!("{byte:02x}")).collect(),
		}
	}
}

/// Shared handle to the configured [`AccessTokenGenerator`].
#[derive(Clone)]
pub struct TokenGenerator(Arc<dyn AccessTokenGenerator>);
impl TokenGenerator {
	/// Wraps a generator.
	pub fn new(generator: impl 'static + AccessTokenGenerator) -> Self {
		Self(Arc::new(generator))
	}

	/// Identifier of the wrapped strategy.
	pub fn name(&self) -> &str {
		self.0.name()
	}

	/// Produces a new token value.
	pub fn generate(&self, context: &TokenContext, method: GeneratorMethod) -> String {
		self.0.generate(context, method)
	}
}
impl<G> From<G> for TokenGenerator
where
	G: 'static + AccessTokenGenerator,
{
	fn from(generator: G) -> Self {
		Self::new(generator)
	}
}
impl Debug for TokenGenerator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenGenerator").field(&self.name()).finish()
	}
}

//! Grant flows and the wire values derived from them.

// self
use crate::_prelude::*;

/// `response_type` value served by the Authorization Code flow.
pub const RESPONSE_TYPE_CODE: &str = "code";
/// `response_type` value served by the Implicit flow.
pub const RESPONSE_TYPE_TOKEN: &str = "token";
/// `grant_type` value accepted when refresh tokens are enabled.
pub const GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";

/// Error returned when a grant flow name is unknown.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown grant flow `{0}`.")]
pub struct UnknownGrantFlow(pub String);

/// OAuth 2.0 grant flows a provider can enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantFlow {
	/// Authorization Code grant, served at the authorization and token endpoints.
	AuthorizationCode,
	/// Implicit grant, served at the authorization endpoint only.
	Implicit,
	/// Resource Owner Password Credentials grant.
	Password,
	/// Client Credentials grant for app-only tokens.
	ClientCredentials,
}
impl GrantFlow {
	/// Returns the RFC 6749 identifier for the flow.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantFlow::AuthorizationCode => "authorization_code",
			GrantFlow::Implicit => "implicit",
			GrantFlow::Password => "password",
			GrantFlow::ClientCredentials => "client_credentials",
		}
	}
}
impl Display for GrantFlow {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for GrantFlow {
	type Err = UnknownGrantFlow;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"authorization_code" => Ok(Self::AuthorizationCode),
			"implicit" => Ok(Self::Implicit),
			"password" => Ok(Self::Password),
			"client_credentials" => Ok(Self::ClientCredentials),
			other => Err(UnknownGrantFlow(other.to_owned())),
		}
	}
}

/// Response types the authorization endpoint accepts for the enabled flows.
///
/// `code` always precedes `token`.
pub fn authorization_response_types(flows: &[GrantFlow]) -> Vec<&'static str> {
	let mut types = Vec::with_capacity(2);

	if flows.contains(&GrantFlow::AuthorizationCode) {
		types.push(RESPONSE_TYPE_CODE);
	}
	if flows.contains(&GrantFlow::Implicit) {
		types.push(RESPONSE_TYPE_TOKEN);
	}

	types
}

/// Grant types the token endpoint accepts for the enabled flows.
///
/// Keeps the order of `flows`, drops `implicit`, and appends `refresh_token` last when enabled.
pub fn token_grant_types(flows: &[GrantFlow], refresh_token_enabled: bool) -> Vec<&'static str> {
	let mut types = flows
		.iter()
		.filter(|flow| **flow != GrantFlow::Implicit)
		.map(|flow| flow.as_str())
		.collect::<Vec<_>>();

	if refresh_token_enabled {
		types.push(GRANT_TYPE_REFRESH_TOKEN);
	}

	types
}

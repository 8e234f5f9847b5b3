//! Request-side inputs read by hooks and credential strategies.
//!
//! The HTTP layer owns request parsing; it hands this crate a [`RequestContext`] holding the
//! headers and parameters the configured strategies look at.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, auth::Secret};

/// Header and parameter view of an incoming request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
	headers: BTreeMap<String, String>,
	params: BTreeMap<String, String>,
}
impl RequestContext {
	/// Creates an empty request view.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a header; names are case-insensitive.
	pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
		self.headers.insert(name.as_ref().to_ascii_lowercase(), value.into());

		self
	}

	/// Adds a query or form parameter.
	pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(name.into(), value.into());

		self
	}

	/// Returns a header value.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
	}

	/// Returns a parameter value.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	fn authorization(&self, scheme: &str) -> Option<&str> {
		let value = self.header("authorization")?;
		let (found, rest) = value.split_once(' ')?;

		found.eq_ignore_ascii_case(scheme).then_some(rest.trim()).filter(|rest| !rest.is_empty())
	}

	fn non_blank_param(&self, name: &str) -> Option<&str> {
		self.param(name).filter(|value| !value.trim().is_empty())
	}
}

/// Outcome of a grant strategy handed to `after_successful_strategy_response`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyResponse {
	/// Grant type that produced the response.
	pub grant_type: String,
	/// HTTP status rendered to the client.
	pub status: u16,
}

/// Client identifier and optional secret presented by a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientCredentials {
	/// Client application `uid`.
	pub uid: String,
	/// Client secret; public clients may omit it.
	pub secret: Option<Secret>,
}

/// Strategies for locating client credentials in a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientCredentialsMethod {
	/// `Authorization: Basic base64(uid:secret)`.
	FromBasic,
	/// `client_id` / `client_secret` request parameters.
	FromParams,
}
impl ClientCredentialsMethod {
	/// Ordering used when none was configured.
	pub const DEFAULT: &'static [Self] = &[Self::FromBasic, Self::FromParams];

	/// Extracts credentials with this strategy.
	pub fn extract(self, request: &RequestContext) -> Option<ClientCredentials> {
		match self {
			Self::FromBasic => {
				let decoded = STANDARD.decode(request.authorization("Basic")?).ok()?;
				let decoded = String::from_utf8(decoded).ok()?;
				let (uid, secret) = decoded.split_once(':').unwrap_or((decoded.as_str(), ""));

				credentials(uid, Some(secret))
			},
			Self::FromParams => credentials(
				request.non_blank_param("client_id")?,
				request.param("client_secret"),
			),
		}
	}
}

/// Strategies for locating a bearer access token in a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTokenMethod {
	/// `Authorization: Bearer <token>`.
	FromBearerAuthorization,
	/// `access_token` request parameter.
	FromAccessTokenParam,
	/// `bearer_token` request parameter.
	FromBearerParam,
}
impl AccessTokenMethod {
	/// Ordering used when none was configured.
	pub const DEFAULT: &'static [Self] =
		&[Self::FromBearerAuthorization, Self::FromAccessTokenParam, Self::FromBearerParam];

	/// Extracts the access token with this strategy.
	pub fn extract(self, request: &RequestContext) -> Option<Secret> {
		let raw = match self {
			Self::FromBearerAuthorization => request.authorization("Bearer"),
			Self::FromAccessTokenParam => request.non_blank_param("access_token"),
			Self::FromBearerParam => request.non_blank_param("bearer_token"),
		}?;

		Some(Secret::new(raw))
	}
}

fn credentials(uid: &str, secret: Option<&str>) -> Option<ClientCredentials> {
	if uid.trim().is_empty() {
		return None;
	}

	Some(ClientCredentials {
		uid: uid.to_owned(),
		secret: secret.filter(|secret| !secret.is_empty()).map(Secret::new),
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn basic_credentials_decode() {
		let request = RequestContext::new()
			.with_header("Authorization", format!("Basic {}", STANDARD.encode("app-1:s3cr3t")));
		let credentials = ClientCredentialsMethod::FromBasic
			.extract(&request)
			.expect("Basic credentials should be extracted.");

		assert_eq!(credentials.uid, "app-1");
		assert_eq!(credentials.secret.as_ref().map(Secret::expose), Some("s3cr3t"));
		assert_eq!(ClientCredentialsMethod::FromParams.extract(&request), None);
	}

	#[test]
	fn basic_credentials_reject_garbage() {
		let request = RequestContext::new().with_header("authorization", "Basic !!!");

		assert_eq!(ClientCredentialsMethod::FromBasic.extract(&request), None);

		let request = RequestContext::new()
			.with_header("authorization", format!("Basic {}", STANDARD.encode(":secret")));

		assert_eq!(ClientCredentialsMethod::FromBasic.extract(&request), None);
	}

	#[test]
	fn param_credentials_allow_public_clients() {
		let request = RequestContext::new().with_param("client_id", "public-app");
		let credentials = ClientCredentialsMethod::FromParams
			.extract(&request)
			.expect("Parameter credentials should be extracted.");

		assert_eq!(credentials.uid, "public-app");
		assert_eq!(credentials.secret, None);
	}

	#[test]
	fn bearer_tokens_are_found_per_strategy() {
		let request = RequestContext::new()
			.with_header("AUTHORIZATION", "bearer header-token")
			.with_param("access_token", "param-token")
			.with_param("bearer_token", " ");
		let header = AccessTokenMethod::FromBearerAuthorization.extract(&request);
		let param = AccessTokenMethod::FromAccessTokenParam.extract(&request);

		assert_eq!(header.as_ref().map(Secret::expose), Some("header-token"));
		assert_eq!(param.as_ref().map(Secret::expose), Some("param-token"));
		assert_eq!(AccessTokenMethod::FromBearerParam.extract(&request), None);
	}
}

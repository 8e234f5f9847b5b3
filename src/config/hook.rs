//! Callable option values.
//!
//! Hooks are stored and returned as-is: reading `authenticate_resource_owner` yields the hook,
//! and request handling decides when to invoke it.

// self
use crate::{
	_prelude::*,
	auth::{ApplicationId, ResourceOwnerId},
	request::{RequestContext, StrategyResponse},
	token::TokenContext,
};

macro_rules! def_hook {
	($name:ident, $doc:literal, |$($arg:ident: $arg_ty:ty),*| $(-> $ret:ty)?) => {
		#[doc = $doc]
		#[derive(Clone)]
		pub struct $name(Arc<dyn Fn($($arg_ty),*) $(-> $ret)? + Send + Sync>);
		impl $name {
			/// Wraps a closure as the hook.
			pub fn new<F>(hook: F) -> Self
			where
				F: 'static + Send + Sync + Fn($($arg_ty),*) $(-> $ret)?,
			{
				Self(Arc::new(hook))
			}

			/// Invokes the hook.
			pub fn call(&self, $($arg: $arg_ty),*) $(-> $ret)? {
				(self.0)($($arg),*)
			}
		}
		impl<F> From<F> for $name
		where
			F: 'static + Send + Sync + Fn($($arg_ty),*) $(-> $ret)?,
		{
			fn from(hook: F) -> Self {
				Self::new(hook)
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(concat!(stringify!($name), "(..)"))
			}
		}
	};
}

def_hook! {
	ResourceOwnerAuthenticator,
	"Resolves the resource owner behind the current request, if any.",
	|request: &RequestContext| -> Option<ResourceOwnerId>
}
def_hook! {
	AdminAuthenticator,
	"Guards the application-management endpoints; `true` lets the request through.",
	|request: &RequestContext| -> bool
}
def_hook! {
	ResourceOwnerFromCredentials,
	"Resolves the resource owner from the credentials of a password grant request.",
	|request: &RequestContext| -> Option<ResourceOwnerId>
}
def_hook! {
	BeforeStrategyResponse,
	"Runs before a successful grant strategy renders its response.",
	|request: &RequestContext|
}
def_hook! {
	AfterStrategyResponse,
	"Runs after a successful grant strategy produced its response.",
	|request: &RequestContext, response: &StrategyResponse|
}
def_hook! {
	SkipAuthorization,
	"Decides whether the consent screen can be skipped for an owner and application.",
	|owner: &ResourceOwnerId, application: &ApplicationId| -> bool
}
def_hook! {
	CustomAccessTokenExpiresIn,
	"Per-application or per-grant access-token lifetime; `None` keeps the configured default.",
	|context: &TokenContext| -> Option<Duration>
}
def_hook! {
	RedirectUriPredicate,
	"Predicate evaluated against a client redirect URI.",
	|uri: &Url| -> bool
}

/// Whether redirect URIs must use HTTPS.
#[derive(Clone, Debug)]
pub enum ForceSsl {
	/// Every redirect URI must use HTTPS.
	Always,
	/// Any scheme is accepted.
	Never,
	/// HTTPS is required for the URIs the predicate accepts.
	When(RedirectUriPredicate),
}
impl ForceSsl {
	/// Builds the predicate form.
	pub fn when<F>(predicate: F) -> Self
	where
		F: 'static + Send + Sync + Fn(&Url) -> bool,
	{
		Self::When(RedirectUriPredicate::new(predicate))
	}

	/// Returns true when `uri` is required to use HTTPS.
	pub fn applies_to(&self, uri: &Url) -> bool {
		match self {
			Self::Always => true,
			Self::Never => false,
			Self::When(predicate) => predicate.call(uri),
		}
	}
}
impl From<bool> for ForceSsl {
	fn from(value: bool) -> Self {
		if value { Self::Always } else { Self::Never }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn hooks_are_cloneable_values() {
		let hook = SkipAuthorization::new(|_, application| &**application == "trusted");
		let clone = hook.clone();
		let owner = ResourceOwnerId::new("owner").expect("Owner fixture should be valid.");
		let trusted = ApplicationId::new("trusted").expect("Application fixture should be valid.");
		let other = ApplicationId::new("other").expect("Application fixture should be valid.");

		assert!(clone.call(&owner, &trusted));
		assert!(!hook.call(&owner, &other));
		assert_eq!(format!("{hook:?}"), "SkipAuthorization(..)");
	}

	#[test]
	fn force_ssl_predicate_sees_the_uri() {
		let localhost = Url::parse("http://localhost:3000/callback").expect("URL should parse.");
		let remote = Url::parse("http://example.com/callback").expect("URL should parse.");
		let force = ForceSsl::when(|uri| uri.host_str() != Some("localhost"));

		assert!(!force.applies_to(&localhost));
		assert!(force.applies_to(&remote));
		assert!(ForceSsl::from(true).applies_to(&localhost));
		assert!(!ForceSsl::from(false).applies_to(&remote));
	}
}

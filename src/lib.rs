//! Declarative configuration core for OAuth 2.0 providers.
//!
//! Token lifetimes, grant flows, scopes, credential strategies, and hooks are declared once at
//! startup through [`bootstrap::Provider::configure`]; every endpoint then reads the same
//! immutable [`config::Configuration`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod adapter;
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod obs;
pub mod request;
pub mod token;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::{Arc, OnceLock},
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::Duration;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use time;
pub use url;
#[cfg(test)] use color_eyre as _;

//! Auth-domain identifiers, redacted credentials, and scope sets.

pub mod id;
pub mod scope;
pub mod secret;

pub use id::*;
pub use scope::*;
pub use secret::*;

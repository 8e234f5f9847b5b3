//! Scope sets advertised by the provider.

// std
use std::{ops::Add, slice::Iter};
// crates.io
use serde::{Deserializer, Serializer, ser::SerializeSeq};
// self
use crate::_prelude::*;

/// Ordered, duplicate-free set of OAuth scope names.
///
/// Entries keep the order they were first added in, so the union of the default and optional
/// scopes always lists the defaults first. Inputs are split on whitespace, which lets callers
/// pass either `["read", "write"]` or `["read write"]`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Scopes(Vec<String>);
impl Scopes {
	/// Builds a scope set from any iterator of scope strings.
	pub fn new<I, S>(scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut set = Self::default();

		for scope in scopes {
			set.extend_str(scope.as_ref());
		}

		set
	}

	/// Number of distinct scopes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no scopes are defined.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if the set contains the provided scope.
	pub fn contains(&self, scope: &str) -> bool {
		self.0.iter().any(|candidate| candidate == scope)
	}

	/// Returns true if every scope of `other` is part of this set.
	pub fn has_scopes(&self, other: &Scopes) -> bool {
		other.iter().all(|scope| self.contains(scope))
	}

	/// Iterator over scope names in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Returns the underlying slice of scope names.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// Adds a scope unless it is already present.
	pub fn insert(&mut self, scope: impl Into<String>) {
		let scope = scope.into();

		if !self.contains(&scope) {
			self.0.push(scope);
		}
	}

	fn extend_str(&mut self, raw: &str) {
		for scope in raw.split_whitespace() {
			self.insert(scope);
		}
	}
}
impl Add<&Scopes> for &Scopes {
	type Output = Scopes;

	fn add(self, rhs: &Scopes) -> Self::Output {
		let mut union = self.clone();

		for scope in rhs.iter() {
			union.insert(scope);
		}

		union
	}
}
impl Add for Scopes {
	type Output = Scopes;

	fn add(self, rhs: Scopes) -> Self::Output {
		&self + &rhs
	}
}
impl<S> FromIterator<S> for Scopes
where
	S: AsRef<str>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = S>,
	{
		Self::new(iter)
	}
}

/// Iterator over scope names.
pub struct ScopeIter<'a> {
	inner: Iter<'a, String>,
}
impl<'a> Iterator for ScopeIter<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(String::as_str)
	}
}
impl<'a> IntoIterator for &'a Scopes {
	type IntoIter = ScopeIter<'a>;
	type Item = &'a str;

	fn into_iter(self) -> Self::IntoIter {
		ScopeIter { inner: self.0.iter() }
	}
}
impl FromStr for Scopes {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::new([s]))
	}
}
impl Debug for Scopes {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Scopes").field(&self.0).finish()
	}
}
impl Display for Scopes {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0.join(" "))
	}
}
impl Serialize for Scopes {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.0.len()))?;

		for scope in self.0.iter() {
			seq.serialize_element(scope)?;
		}

		seq.end()
	}
}
impl<'de> Deserialize<'de> for Scopes {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let values = <Vec<String>>::deserialize(deserializer)?;

		Ok(Scopes::new(values))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn scopes_keep_first_insertion_order() {
		let scopes = Scopes::new(["write", "read", "write"]);

		assert_eq!(scopes.iter().collect::<Vec<_>>(), vec!["write", "read"]);
		assert_eq!(scopes.to_string(), "write read");
	}

	#[test]
	fn whitespace_separated_entries_are_split() {
		let scopes = Scopes::new(["public  profile", "", "email"]);

		assert_eq!(scopes.len(), 3);
		assert!(scopes.contains("profile"));
		assert!(!scopes.contains(""));
	}

	#[test]
	fn union_lists_left_hand_side_first() {
		let defaults = Scopes::new(["public"]);
		let optionals = Scopes::new(["write", "public", "admin"]);
		let union = &defaults + &optionals;

		assert_eq!(union.as_slice(), ["public", "write", "admin"]);
		assert!(union.has_scopes(&defaults));
		assert!(union.has_scopes(&optionals));
		assert!(!defaults.has_scopes(&optionals));
	}

	#[test]
	fn insert_skips_existing_scopes() {
		let mut scopes = Scopes::new(["read"]);

		scopes.insert("write");
		scopes.insert(String::from("read"));

		assert_eq!(scopes.as_slice(), ["read", "write"]);
		assert_eq!(Scopes::new(["read"]) + Scopes::new(["write", "read"]), scopes);
	}

	#[test]
	fn serde_uses_a_plain_list() {
		let scopes = Scopes::from_str("read write").expect("Parsing scopes is infallible.");
		let payload = serde_json::to_string(&scopes).expect("Scopes should serialize to JSON.");

		assert_eq!(payload, r#"["read","write"]"#);

		let back: Scopes = serde_json::from_str(&payload).expect("Scopes should deserialize.");

		assert_eq!(back, scopes);
	}
}

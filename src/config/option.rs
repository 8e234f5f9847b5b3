//! Option registry.
//!
//! [`declare_options!`] turns one table of declarations into everything an option needs:
//! an `Option<T>` storage slot on [`Configuration`](crate::config::Configuration), a typed
//! reader that falls back to the declared default provider, a typed setter on
//! [`Builder`](crate::config::Builder), and an [`OptionDescriptor`] entry.
//!
//! Each declaration reads
//!
//! ```text
//! /// docs
//! setter [as attribute]: Type = default_provider [=> SubBuilder],
//! ```
//!
//! - `as attribute` stores and reads the value under a different name than the builder method.
//! - `default_provider` is a `fn(&Configuration) -> Type`, evaluated on every read of an unset
//!   option and never cached.
//! - `=> SubBuilder` makes the setter take a block that configures a fresh [`OptionBuilder`];
//!   the value stored is whatever that builder's `build` returns.

/// Static description of a declared option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionDescriptor {
	/// Builder-side method name.
	pub name: &'static str,
	/// Storage and reader name.
	pub attribute: &'static str,
	/// Type name of the sub-builder producing the value, if any.
	pub sub_builder: Option<&'static str>,
}
impl OptionDescriptor {
	/// Returns true when the builder method and the reader use different names.
	pub fn is_aliased(&self) -> bool {
		self.name != self.attribute
	}
}

/// Nested builder whose result becomes an option value.
pub trait OptionBuilder
where
	Self: Default,
{
	/// Value stored on the configuration.
	type Output;

	/// Consumes the builder and produces the option value.
	fn build(self) -> Self::Output;

	/// Runs `block` against a fresh builder.
	fn from_block<F>(block: F) -> Self
	where
		F: FnOnce(&mut Self),
	{
		let mut builder = Self::default();

		block(&mut builder);

		builder
	}
}

/// Looks up a declared option by builder name or attribute name.
///
/// When a name was declared twice the later declaration wins.
pub fn find_descriptor(name: &str) -> Option<&'static OptionDescriptor> {
	crate::config::OPTION_DESCRIPTORS
		.iter()
		.rev()
		.find(|descriptor| descriptor.name == name || descriptor.attribute == name)
}

macro_rules! declare_options {
	(@parse [$($out:tt)*]) => {
		$crate::config::option::declare_options!(@emit $($out)*);
	};
	(@parse [$($out:tt)*]
		$(#[$meta:meta])*
		$setter:ident as $attr:ident : $ty:ty = $default:path => $sub:ty,
		$($rest:tt)*
	) => {
		$crate::config::option::declare_options!(
			@parse [$($out)* { [$(#[$meta])*] $setter $attr [$ty] [$default] [$sub] }] $($rest)*
		);
	};
	(@parse [$($out:tt)*]
		$(#[$meta:meta])*
		$setter:ident as $attr:ident : $ty:ty = $default:path,
		$($rest:tt)*
	) => {
		$crate::config::option::declare_options!(
			@parse [$($out)* { [$(#[$meta])*] $setter $attr [$ty] [$default] [] }] $($rest)*
		);
	};
	(@parse [$($out:tt)*]
		$(#[$meta:meta])*
		$setter:ident : $ty:ty = $default:path => $sub:ty,
		$($rest:tt)*
	) => {
		$crate::config::option::declare_options!(
			@parse [$($out)* { [$(#[$meta])*] $setter $setter [$ty] [$default] [$sub] }] $($rest)*
		);
	};
	(@parse [$($out:tt)*]
		$(#[$meta:meta])*
		$setter:ident : $ty:ty = $default:path,
		$($rest:tt)*
	) => {
		$crate::config::option::declare_options!(
			@parse [$($out)* { [$(#[$meta])*] $setter $setter [$ty] [$default] [] }] $($rest)*
		);
	};
	(@emit $({ [$($meta:tt)*] $setter:ident $attr:ident [$ty:ty] [$default:path] [$($sub:ty)?] })*) => {
		#[derive(Clone, Debug, Default)]
		struct OptionValues {
			$($attr: Option<$ty>,)*
		}

		impl Configuration {
			$(
				$($meta)*
				pub fn $attr(&self) -> $ty {
					match &self.options.$attr {
						Some(value) => value.clone(),
						None => $default(self),
					}
				}
			)*

			/// Returns true when `attribute` names a declared option that was set explicitly.
			pub fn is_set(&self, attribute: &str) -> bool {
				match attribute {
					$(stringify!($attr) => self.options.$attr.is_some(),)*
					_ => false,
				}
			}
		}

		impl Builder {
			$(
				$crate::config::option::declare_options!(
					@setter [$($meta)*] $setter $attr [$ty] [$($sub)?]
				);
			)*
		}

		/// Every option declared on [`Configuration`], in declaration order.
		pub static OPTION_DESCRIPTORS: &[$crate::config::option::OptionDescriptor] = &[
			$(
				$crate::config::option::OptionDescriptor {
					name: stringify!($setter),
					attribute: stringify!($attr),
					sub_builder: $crate::config::option::declare_options!(@sub_name $($sub)?),
				},
			)*
		];
	};
	(@setter [$($meta:tt)*] $setter:ident $attr:ident [$ty:ty] []) => {
		$($meta)*
		pub fn $setter(&mut self, value: impl Into<$ty>) -> &mut Self {
			self.config.options.$attr = Some(value.into());

			self
		}
	};
	(@setter [$($meta:tt)*] $setter:ident $attr:ident [$ty:ty] [$sub:ty]) => {
		$($meta)*
		pub fn $setter<F>(&mut self, block: F) -> &mut Self
		where
			F: FnOnce(&mut $sub),
		{
			let value: $ty =
				<$sub as $crate::config::option::OptionBuilder>::from_block(block).build();

			self.config.options.$attr = Some(value);

			self
		}
	};
	(@sub_name) => {
		None
	};
	(@sub_name $sub:ty) => {
		Some(stringify!($sub))
	};
	($($body:tt)*) => {
		$crate::config::option::declare_options!(@parse [] $($body)*);
	};
}
pub(crate) use declare_options;

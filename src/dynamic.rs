//! Contains the [`Value`] type and its [`Kind`], a small set of runtime
//! typed values that can be stored in a [`TypedArray`].
//!
//! [`TypedArray`]: crate::typed::TypedArray

use core::fmt::{self, Display, Formatter};

/// The runtime type of a [`Value`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum Kind {
	Bool,
	Int,
	Float,
	Str,
}

impl Display for Kind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float => "float",
			Self::Str => "string",
		};

		f.write_str(name)
	}
}

/// A dynamically typed value. Two values are only equal when they have
/// the same [`Kind`] and equal contents, so `Int(1)` never equals `Float(1.0)`.
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(String),
}

impl Value {
	/// Returns the runtime type of the value.
	#[inline]
	#[must_use]
	pub const fn kind(&self) -> Kind {
		match self {
			Self::Bool(_) => Kind::Bool,
			Self::Int(_) => Kind::Int,
			Self::Float(_) => Kind::Float,
			Self::Str(_) => Kind::Str,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(value) => value.fmt(f),
			Self::Int(value) => value.fmt(f),
			Self::Float(value) => value.fmt(f),
			Self::Str(value) => f.write_str(value),
		}
	}
}

macro_rules! impl_from {
	($t:ty, $variant:ident) => {
		impl From<$t> for Value {
			#[inline]
			fn from(value: $t) -> Self {
				Self::$variant(value.into())
			}
		}
	};
}

impl_from!(bool, Bool);
impl_from!(i32, Int);
impl_from!(i64, Int);
impl_from!(f64, Float);
impl_from!(&str, Str);
impl_from!(String, Str);

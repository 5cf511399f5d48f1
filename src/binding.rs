//! Contains the [`Binding`] trait and its two implementations.
//! It decides what a [`TypedArray`] remembers about its types once emptied.
//!
//! [`TypedArray`]: crate::typed::TypedArray

use crate::dynamic::Kind;

/// The key and value kinds a [`TypedArray`] is locked to.
///
/// [`TypedArray`]: crate::typed::TypedArray
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Signature {
	pub key: Kind,
	pub value: Kind,
}

/// A strategy for the type binding of a container that just became empty.
/// It allows us to either forget the kinds and let the next pair rebind
/// them, or keep them for the lifetime of the container.
pub trait Binding {
	/// Returns the signature to keep after the last pair is removed.
	fn release(signature: Signature) -> Option<Signature>;
}

/// Forgets the signature when emptied, so the next insertion binds anew.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct Reset;

impl Binding for Reset {
	#[inline]
	fn release(_: Signature) -> Option<Signature> {
		None
	}
}

/// Keeps the first signature for the lifetime of the container.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct Sticky;

impl Binding for Sticky {
	#[inline]
	fn release(signature: Signature) -> Option<Signature> {
		Some(signature)
	}
}

#[cfg(test)]
mod test {
	use crate::dynamic::Kind;

	use super::{Binding, Reset, Signature, Sticky};

	#[test]
	fn release() {
		let signature = Signature {
			key: Kind::Str,
			value: Kind::Int,
		};

		assert_eq!(Reset::release(signature), None);
		assert_eq!(Sticky::release(signature), Some(signature));
	}
}

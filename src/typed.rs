//! Contains the [`TypedArray`] type, an associative array of dynamically
//! typed [`Value`]s that is locked to the kinds of its first pair.

use core::{
	fmt::{self, Display, Formatter},
	marker::PhantomData,
};

use log::{debug, trace};
use thiserror::Error;

use crate::{
	binding::{Binding, Reset, Signature},
	collection::AssociativeArray,
	dynamic::{Kind, Value},
	error,
	iter::Iter,
};

/// The ways an operation on a [`TypedArray`] can fail.
#[derive(Error, PartialEq, Clone, Debug)]
pub enum TypedError {
	#[error("the key needs to be of type {expected} but provided {found}")]
	WrongKeyType { expected: Kind, found: Kind },

	#[error("the value needs to be of type {expected} but provided {found}")]
	WrongValueType { expected: Kind, found: Kind },

	#[error(transparent)]
	Array(#[from] error::Error<Value>),
}

/// A [`TypedArray`] stores [`Value`] pairs and only accepts pairs whose kinds
/// match its [`Signature`]. The signature is taken from the first pair inserted.
///
/// What happens to the signature once the last pair is removed is decided
/// by the [`Binding`] strategy `B`, which defaults to [`Reset`].
#[derive(Clone, Debug)]
pub struct TypedArray<B: Binding = Reset> {
	pairs: AssociativeArray<Value, Value>,
	signature: Option<Signature>,
	binding: PhantomData<B>,
}

impl<B: Binding> TypedArray<B> {
	/// Creates a new, empty [`TypedArray`] with no bound kinds.
	#[inline]
	#[must_use]
	pub const fn new() -> Self {
		Self {
			pairs: AssociativeArray::new(),
			signature: None,
			binding: PhantomData,
		}
	}

	/// Returns the kinds the [`TypedArray`] is locked to, if any.
	#[inline]
	#[must_use]
	pub const fn signature(&self) -> Option<Signature> {
		self.signature
	}

	/// Returns the number of pairs in the [`TypedArray`].
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Returns `true` if the [`TypedArray`] contains no pairs.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Clears the [`TypedArray`], releasing the signature through `B`.
	pub fn clear(&mut self) {
		self.pairs.clear();
		self.release();
	}

	/// Returns an iterator over the keys and values, in insertion order.
	#[must_use]
	pub fn iter(&self) -> Iter<'_, Value, Value> {
		self.pairs.iter()
	}

	fn release(&mut self) {
		self.signature = self.signature.and_then(B::release);
	}

	fn check_key(&self, key: &Value) -> Result<(), TypedError> {
		match self.signature {
			Some(Signature { key: expected, .. }) if key.kind() != expected => {
				debug!("rejected key of type {}", key.kind());

				Err(TypedError::WrongKeyType {
					expected,
					found: key.kind(),
				})
			}
			_ => Ok(()),
		}
	}

	fn check_value(&self, value: &Value) -> Result<(), TypedError> {
		match self.signature {
			Some(Signature {
				value: expected, ..
			}) if value.kind() != expected => {
				debug!("rejected value of type {}", value.kind());

				Err(TypedError::WrongValueType {
					expected,
					found: value.kind(),
				})
			}
			_ => Ok(()),
		}
	}

	/// Appends a pair, binding the signature if none is bound yet.
	///
	/// # Errors
	///
	/// Returns [`TypedError::WrongKeyType`] or [`TypedError::WrongValueType`],
	/// checked in that order, if the pair does not match the signature. Returns
	/// [`error::Error::KeyAlreadyExists`] if an equal key is already stored.
	/// Nothing is inserted on error.
	pub fn insert(
		&mut self,
		key: impl Into<Value>,
		value: impl Into<Value>,
	) -> Result<(), TypedError> {
		let key = key.into();
		let value = value.into();

		self.check_key(&key)?;
		self.check_value(&value)?;

		let signature = Signature {
			key: key.kind(),
			value: value.kind(),
		};

		self.pairs.insert(key, value)?;

		if self.signature.is_none() {
			trace!("bound to {} -> {}", signature.key, signature.value);

			self.signature = Some(signature);
		}

		Ok(())
	}

	/// Finds the pair stored under `key`.
	///
	/// # Errors
	///
	/// Returns [`error::Error::KeyNotFound`] if no stored key is equal to `key`.
	pub fn lookup(&self, key: impl Into<Value>) -> Result<(&Value, &Value), TypedError> {
		let pair = self.pairs.lookup(&key.into())?;

		Ok(pair)
	}

	/// Removes the pair stored under `key`. Removing the last pair releases
	/// the signature through `B`.
	///
	/// # Errors
	///
	/// Returns [`error::Error::KeyNotFound`] if no stored key is equal to `key`.
	pub fn remove(&mut self, key: impl Into<Value>) -> Result<(Value, Value), TypedError> {
		let pair = self.pairs.remove(&key.into())?;

		if self.pairs.is_empty() {
			self.release();
		}

		Ok(pair)
	}

	/// Replaces the value stored under `key`, returning the old one.
	///
	/// # Errors
	///
	/// Returns [`TypedError::WrongValueType`] if `value` does not match the
	/// signature, or [`error::Error::KeyNotFound`] if no stored key is equal
	/// to `key`.
	pub fn modify(
		&mut self,
		key: impl Into<Value>,
		value: impl Into<Value>,
	) -> Result<Value, TypedError> {
		let value = value.into();

		self.check_value(&value)?;

		let old = self.pairs.modify(&key.into(), value)?;

		Ok(old)
	}

	/// Renders every pair as `[key:value]` in insertion order, separated by spaces.
	#[must_use]
	pub fn dump(&self) -> String {
		self.pairs.dump()
	}
}

impl<B: Binding> Default for TypedArray<B> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<B: Binding> Display for TypedArray<B> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.pairs.fmt(f)
	}
}

#[cfg(test)]
mod test {
	use crate::{
		binding::{Binding, Reset, Signature, Sticky},
		dynamic::{Kind, Value},
		error::Error,
	};

	use super::{TypedArray, TypedError};

	fn shopping_list<B: Binding>() -> TypedArray<B> {
		let mut list = TypedArray::new();

		list.insert("bread", 50).unwrap();
		list.insert("soap", 20).unwrap();

		list
	}

	#[test]
	fn shopping_scenario() {
		let mut list = shopping_list::<Reset>();

		assert_eq!(list.dump(), "[bread:50] [soap:20]");
		assert_eq!(
			list.lookup("bread"),
			Ok((&Value::from("bread"), &Value::from(50)))
		);

		assert_eq!(
			list.insert(37373.3737, "someRandomNum"),
			Err(TypedError::WrongKeyType {
				expected: Kind::Str,
				found: Kind::Float,
			})
		);
		assert_eq!(list.dump(), "[bread:50] [soap:20]");

		assert_eq!(list.modify("bread", 100), Ok(Value::from(50)));
		assert_eq!(list.dump(), "[bread:100] [soap:20]");

		list.remove("bread").unwrap();

		assert_eq!(list.dump(), "[soap:20]");
	}

	#[test]
	fn first_pair_binds() {
		let mut list: TypedArray = TypedArray::new();

		assert_eq!(list.signature(), None);

		list.insert(1, true).unwrap();

		assert_eq!(
			list.signature(),
			Some(Signature {
				key: Kind::Int,
				value: Kind::Bool,
			})
		);
	}

	#[test]
	fn wrong_value_type() {
		let mut list = shopping_list::<Reset>();

		assert_eq!(
			list.insert("milk", "lots"),
			Err(TypedError::WrongValueType {
				expected: Kind::Int,
				found: Kind::Str,
			})
		);
		assert_eq!(list.len(), 2);
	}

	#[test]
	fn key_type_reported_first() {
		let mut list = shopping_list::<Reset>();

		assert_eq!(
			list.insert(false, 1.5),
			Err(TypedError::WrongKeyType {
				expected: Kind::Str,
				found: Kind::Bool,
			})
		);
		assert_eq!(list.len(), 2);
	}

	#[test]
	fn duplicate_is_rejected() {
		let mut list = shopping_list::<Reset>();

		assert_eq!(
			list.insert("soap", 99),
			Err(TypedError::Array(Error::KeyAlreadyExists(Value::from(
				"soap"
			))))
		);
		assert_eq!(list.dump(), "[bread:50] [soap:20]");
	}

	#[test]
	fn modify_checks_value_type() {
		let mut list = shopping_list::<Reset>();

		assert_eq!(
			list.modify("bread", "free"),
			Err(TypedError::WrongValueType {
				expected: Kind::Int,
				found: Kind::Str,
			})
		);
		assert_eq!(list.dump(), "[bread:50] [soap:20]");
	}

	#[test]
	fn missing_key() {
		let mut list = shopping_list::<Reset>();
		let missing = TypedError::Array(Error::KeyNotFound);

		assert_eq!(list.lookup("milk"), Err(missing.clone()));
		assert_eq!(list.remove("milk"), Err(missing.clone()));
		assert_eq!(list.modify("milk", 1), Err(missing));
		assert_eq!(list.len(), 2);
	}

	#[test]
	fn reset_rebinds_when_emptied() {
		let mut list = TypedArray::<Reset>::new();

		list.insert("bread", 50).unwrap();
		list.remove("bread").unwrap();

		assert!(list.is_empty());
		assert_eq!(list.signature(), None);

		list.insert(7, "seven").unwrap();

		assert_eq!(list.dump(), "[7:seven]");
		assert_eq!(
			list.signature(),
			Some(Signature {
				key: Kind::Int,
				value: Kind::Str,
			})
		);
	}

	#[test]
	fn sticky_keeps_binding_when_emptied() {
		let mut list = TypedArray::<Sticky>::new();

		list.insert("bread", 50).unwrap();
		list.remove("bread").unwrap();

		assert!(list.is_empty());
		assert_eq!(
			list.signature(),
			Some(Signature {
				key: Kind::Str,
				value: Kind::Int,
			})
		);

		assert_eq!(
			list.insert(7, "seven"),
			Err(TypedError::WrongKeyType {
				expected: Kind::Str,
				found: Kind::Int,
			})
		);
		assert!(list.is_empty());

		list.insert("soap", 20).unwrap();

		assert_eq!(list.dump(), "[soap:20]");
	}

	#[test]
	fn clear_releases() {
		let mut reset = shopping_list::<Reset>();
		let mut sticky = shopping_list::<Sticky>();

		reset.clear();
		sticky.clear();

		assert_eq!(reset.signature(), None);
		assert!(sticky.signature().is_some());
	}

	#[test]
	fn messages() {
		let wrong = TypedError::WrongKeyType {
			expected: Kind::Str,
			found: Kind::Float,
		};
		let missing = TypedError::from(Error::KeyNotFound);

		assert_eq!(
			wrong.to_string(),
			"the key needs to be of type string but provided float"
		);
		assert_eq!(
			missing.to_string(),
			"the key has not been found in the associative array"
		);
	}
}

//! Contains the [`AssociativeArray`] type, which is the main type of this crate.

use core::{
	fmt::{self, Debug, Display, Formatter},
	ops::{Index, IndexMut},
};

use log::{debug, trace};

use crate::error::Error;

/// An [`AssociativeArray`] maps keys to values using two index aligned [`Vec`]s,
/// where `keys[i]` is paired with `values[i]`. Pairs are kept in insertion order
/// and every lookup is a linear scan.
///
/// Mutation goes through `&mut self`, so sharing one across threads needs
/// external synchronization such as a `Mutex`.
pub struct AssociativeArray<K, V> {
	pub(crate) keys: Vec<K>,
	pub(crate) values: Vec<V>,
}

impl<K, V> AssociativeArray<K, V> {
	/// Creates a new, empty [`AssociativeArray`].
	#[inline]
	#[must_use]
	pub const fn new() -> Self {
		Self {
			keys: Vec::new(),
			values: Vec::new(),
		}
	}

	/// Creates a new, empty [`AssociativeArray`] with space for `capacity` pairs.
	#[inline]
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			keys: Vec::with_capacity(capacity),
			values: Vec::with_capacity(capacity),
		}
	}

	/// Clears the [`AssociativeArray`], removing all pairs.
	#[inline]
	pub fn clear(&mut self) {
		self.keys.clear();
		self.values.clear();
	}

	/// Returns the number of pairs the [`AssociativeArray`] can hold without reallocating.
	#[inline]
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.keys.capacity().min(self.values.capacity())
	}

	/// Reserves capacity for at least `additional` more pairs.
	pub fn reserve(&mut self, additional: usize) {
		self.keys.reserve(additional);
		self.values.reserve(additional);
	}

	/// Shrinks the capacity of both sequences as much as possible.
	pub fn shrink_to_fit(&mut self) {
		self.keys.shrink_to_fit();
		self.values.shrink_to_fit();
	}

	/// Returns the number of pairs in the [`AssociativeArray`].
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Returns `true` if the [`AssociativeArray`] contains no pairs.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Retains only the pairs specified by the predicate, keeping their order.
	pub fn retain(&mut self, mut f: impl FnMut(&K, &mut V) -> bool) {
		let mut index = 0;

		while index < self.len() {
			if f(&self.keys[index], &mut self.values[index]) {
				index += 1;
			} else {
				self.keys.remove(index);
				self.values.remove(index);
			}
		}
	}
}

impl<K: PartialEq, V> AssociativeArray<K, V> {
	/// Returns the index of the first key equal to `key`.
	#[inline]
	#[must_use]
	pub fn position(&self, key: &K) -> Option<usize> {
		self.keys.iter().position(|other| other == key)
	}

	/// Returns `true` if the [`AssociativeArray`] contains the key.
	#[inline]
	#[must_use]
	pub fn contains_key(&self, key: &K) -> bool {
		self.position(key).is_some()
	}

	/// Returns a reference to the value corresponding to the key.
	#[inline]
	#[must_use]
	pub fn get(&self, key: &K) -> Option<&V> {
		self.position(key).map(|index| &self.values[index])
	}

	/// Returns a mutable reference to the value corresponding to the key.
	#[inline]
	#[must_use]
	pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
		self.position(key).map(|index| &mut self.values[index])
	}

	/// Appends a pair to the end of the [`AssociativeArray`].
	///
	/// # Errors
	///
	/// Returns [`Error::KeyAlreadyExists`] with the rejected key if an equal
	/// key is already stored. Nothing is inserted in that case.
	pub fn insert(&mut self, key: K, value: V) -> Result<(), Error<K>> {
		if self.contains_key(&key) {
			debug!("rejected duplicate key");

			return Err(Error::KeyAlreadyExists(key));
		}

		self.keys.push(key);
		self.values.push(value);

		trace!("inserted pair at {}", self.len() - 1);

		Ok(())
	}

	/// Finds the pair stored under `key`.
	///
	/// # Errors
	///
	/// Returns [`Error::KeyNotFound`] if no stored key is equal to `key`.
	pub fn lookup(&self, key: &K) -> Result<(&K, &V), Error<K>> {
		let index = self.position(key).ok_or(Error::KeyNotFound)?;

		Ok((&self.keys[index], &self.values[index]))
	}

	/// Removes the pair stored under `key`, shifting later pairs left by one.
	///
	/// # Errors
	///
	/// Returns [`Error::KeyNotFound`] if no stored key is equal to `key`.
	/// The [`AssociativeArray`] is left untouched in that case.
	pub fn remove(&mut self, key: &K) -> Result<(K, V), Error<K>> {
		let Some(index) = self.position(key) else {
			debug!("nothing to remove");

			return Err(Error::KeyNotFound);
		};

		let key = self.keys.remove(index);
		let value = self.values.remove(index);

		trace!("removed pair at {index}, {} left", self.len());

		Ok((key, value))
	}

	/// Replaces the value stored under `key`, returning the old one.
	///
	/// # Errors
	///
	/// Returns [`Error::KeyNotFound`] if no stored key is equal to `key`.
	pub fn modify(&mut self, key: &K, value: V) -> Result<V, Error<K>> {
		let old = self.get_mut(key).ok_or(Error::KeyNotFound)?;

		Ok(core::mem::replace(old, value))
	}
}

impl<K: Display, V: Display> AssociativeArray<K, V> {
	/// Renders every pair as `[key:value]` in insertion order, separated by spaces.
	/// It is meant for display and can't be parsed back.
	#[must_use]
	pub fn dump(&self) -> String {
		self.to_string()
	}
}

impl<K, V> Default for AssociativeArray<K, V> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<K: Clone, V: Clone> Clone for AssociativeArray<K, V> {
	fn clone(&self) -> Self {
		Self {
			keys: self.keys.clone(),
			values: self.values.clone(),
		}
	}
}

impl<K: PartialEq, V: PartialEq> PartialEq for AssociativeArray<K, V> {
	fn eq(&self, other: &Self) -> bool {
		self.keys == other.keys && self.values == other.values
	}
}

impl<K: Eq, V: Eq> Eq for AssociativeArray<K, V> {}

impl<K: Debug, V: Debug> Debug for AssociativeArray<K, V> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<K: Display, V: Display> Display for AssociativeArray<K, V> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for (index, (key, value)) in self.iter().enumerate() {
			if index != 0 {
				f.write_str(" ")?;
			}

			write!(f, "[{key}:{value}]")?;
		}

		Ok(())
	}
}

impl<K: PartialEq, V> Index<&K> for AssociativeArray<K, V> {
	type Output = V;

	#[inline]
	fn index(&self, key: &K) -> &Self::Output {
		self.get(key).expect("invalid key")
	}
}

impl<K: PartialEq, V> IndexMut<&K> for AssociativeArray<K, V> {
	#[inline]
	fn index_mut(&mut self, key: &K) -> &mut Self::Output {
		self.get_mut(key).expect("invalid key")
	}
}

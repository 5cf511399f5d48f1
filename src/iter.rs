//! Contains the associative array iterator types.

use std::iter::{FusedIterator, Zip};

use crate::collection::AssociativeArray;

macro_rules! impl_iterator {
	($name:ident, $item:ty) => {
		impl<'a, K, V> Iterator for $name<'a, K, V> {
			type Item = $item;

			#[inline]
			fn next(&mut self) -> Option<Self::Item> {
				self.iter.next()
			}

			#[inline]
			fn size_hint(&self) -> (usize, Option<usize>) {
				self.iter.size_hint()
			}

			#[inline]
			fn count(self) -> usize {
				self.iter.count()
			}
		}

		impl<'a, K, V> DoubleEndedIterator for $name<'a, K, V> {
			#[inline]
			fn next_back(&mut self) -> Option<Self::Item> {
				self.iter.next_back()
			}
		}

		impl<K, V> ExactSizeIterator for $name<'_, K, V> {}

		impl<K, V> FusedIterator for $name<'_, K, V> {}
	};
}

/// An iterator over the keys and values of the associative array, in insertion order.
pub struct Iter<'a, K, V> {
	iter: Zip<std::slice::Iter<'a, K>, std::slice::Iter<'a, V>>,
}

/// A mutable iterator over the keys and values of the associative array, in insertion order.
pub struct IterMut<'a, K, V> {
	iter: Zip<std::slice::Iter<'a, K>, std::slice::IterMut<'a, V>>,
}

/// An iterator over the keys of the associative array.
pub struct Keys<'a, K, V> {
	iter: std::slice::Iter<'a, K>,
	_values: std::marker::PhantomData<&'a V>,
}

/// An iterator over the values of the associative array.
pub struct Values<'a, K, V> {
	iter: std::slice::Iter<'a, V>,
	_keys: std::marker::PhantomData<&'a K>,
}

/// A mutable iterator over the values of the associative array.
pub struct ValuesMut<'a, K, V> {
	iter: std::slice::IterMut<'a, V>,
	_keys: std::marker::PhantomData<&'a K>,
}

impl_iterator!(Iter, (&'a K, &'a V));
impl_iterator!(IterMut, (&'a K, &'a mut V));
impl_iterator!(Keys, &'a K);
impl_iterator!(Values, &'a V);
impl_iterator!(ValuesMut, &'a mut V);

/// An owning iterator over the pairs of the associative array.
pub struct IntoIter<K, V> {
	iter: Zip<std::vec::IntoIter<K>, std::vec::IntoIter<V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
	type Item = (K, V);

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.iter.next()
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		self.iter.next_back()
	}
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> AssociativeArray<K, V> {
	/// Returns an iterator over the keys and values.
	#[must_use]
	pub fn iter(&self) -> Iter<'_, K, V> {
		let iter = self.keys.iter().zip(self.values.iter());

		Iter { iter }
	}

	/// Returns an iterator over the keys and mutable values.
	#[must_use]
	pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
		let iter = self.keys.iter().zip(self.values.iter_mut());

		IterMut { iter }
	}

	/// Returns an iterator over the keys.
	#[must_use]
	pub fn keys(&self) -> Keys<'_, K, V> {
		Keys {
			iter: self.keys.iter(),
			_values: std::marker::PhantomData,
		}
	}

	/// Returns an iterator over the values.
	#[must_use]
	pub fn values(&self) -> Values<'_, K, V> {
		Values {
			iter: self.values.iter(),
			_keys: std::marker::PhantomData,
		}
	}

	/// Returns an iterator over mutable values.
	#[must_use]
	pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
		ValuesMut {
			iter: self.values.iter_mut(),
			_keys: std::marker::PhantomData,
		}
	}
}

impl<'a, K, V> IntoIterator for &'a AssociativeArray<K, V> {
	type Item = (&'a K, &'a V);
	type IntoIter = Iter<'a, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, K, V> IntoIterator for &'a mut AssociativeArray<K, V> {
	type Item = (&'a K, &'a mut V);
	type IntoIter = IterMut<'a, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

impl<K, V> IntoIterator for AssociativeArray<K, V> {
	type Item = (K, V);
	type IntoIter = IntoIter<K, V>;

	fn into_iter(self) -> Self::IntoIter {
		let iter = self.keys.into_iter().zip(self.values);

		IntoIter { iter }
	}
}

#[cfg(test)]
mod tests {
	use crate::collection::AssociativeArray;

	#[test]
	fn iterate_all() {
		const COUNT: usize = 100;

		let mut list = AssociativeArray::<usize, usize>::with_capacity(COUNT);

		for i in 0..COUNT {
			list.insert(i, COUNT - i).unwrap();
		}

		let mut count = 0;

		for (key, value) in &list {
			assert_eq!(*value, COUNT - key);

			count += 1;
		}

		assert_eq!(count, COUNT);
		assert_eq!(list.iter().len(), COUNT);
	}

	#[test]
	fn iterate_backwards() {
		let mut list = AssociativeArray::<&str, u32>::new();

		list.insert("a", 1).unwrap();
		list.insert("b", 2).unwrap();
		list.insert("c", 3).unwrap();

		let keys: Vec<_> = list.keys().rev().copied().collect();

		assert_eq!(keys, ["c", "b", "a"]);
	}

	#[test]
	fn mutate_values() {
		let mut list = AssociativeArray::<&str, u32>::new();

		list.insert("bread", 50).unwrap();
		list.insert("soap", 20).unwrap();

		for (_, value) in &mut list {
			*value *= 2;
		}

		list.values_mut().for_each(|value| *value += 1);

		let values: Vec<_> = list.values().copied().collect();

		assert_eq!(values, [101, 41]);
	}

	#[test]
	fn into_pairs() {
		let mut list = AssociativeArray::<&str, u32>::new();

		list.insert("bread", 50).unwrap();
		list.insert("soap", 20).unwrap();

		let pairs: Vec<_> = list.into_iter().collect();

		assert_eq!(pairs, [("bread", 50), ("soap", 20)]);
	}
}

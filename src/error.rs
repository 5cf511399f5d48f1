//! Contains the [`Error`] type returned by [`AssociativeArray`] operations.
//!
//! [`AssociativeArray`]: crate::collection::AssociativeArray

use thiserror::Error;

/// The ways an operation on an associative array can fail.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum Error<K> {
	/// No stored key is equal to the one given.
	#[error("the key has not been found in the associative array")]
	KeyNotFound,

	/// The key being inserted is already present; the pair was not inserted.
	#[error("the key {0} already exists")]
	KeyAlreadyExists(K),
}

#![forbid(unsafe_code)]

//! An `AssociativeArray` is a key to value container backed by two parallel [`Vec`]s instead of a hash table. Every operation is a linear scan, which keeps it simple and fast enough for the handful of pairs it is meant for. Pairs are kept in insertion order.
//!
//! ## Example
//!
//! ```rust
//! # use assoc::collection::AssociativeArray;
//! let mut list = AssociativeArray::<&str, u32>::new();
//!
//! list.insert("bread", 50).unwrap();
//! list.insert("soap", 20).unwrap();
//!
//! assert_eq!(list.lookup(&"bread"), Ok((&"bread", &50)));
//! assert_eq!(list.dump(), "[bread:50] [soap:20]");
//!
//! list.modify(&"bread", 100).unwrap();
//! list.remove(&"soap").unwrap();
//!
//! assert_eq!(list.dump(), "[bread:100]");
//! ```
//!
//! ## Features
//!
//! - Insertion order is preserved across every operation
//! - Duplicate keys are rejected
//! - Keys only need [`PartialEq`]
//! - A runtime type locked variant, [`typed::TypedArray`], for dynamically typed pairs
//! - No `unsafe` code

pub mod binding;
pub mod collection;
pub mod dynamic;
pub mod error;
pub mod iter;
pub mod typed;

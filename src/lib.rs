//! A generic Red-Black tree for Rust.
//!
//! This crate provides [`RBTree`], an ordered set of caller-owned values that keeps itself
//! balanced, so insertion, deletion and lookup stay O(log n) whatever order values arrive in.
//!
//! The tree never assumes anything about its values beyond two capabilities supplied at
//! construction:
//!
//! - a [`Comparator`] giving a total order (any `Fn(&T, &T) -> Ordering`, or [`Natural`] for
//!   types that implement [`Ord`]),
//! - a [`Disposer`] that receives each value the tree lets go of (any `FnMut(T)`, or
//!   [`DropDisposer`]).
//!
//! # Example
//!
//! ```
//! use aka_tree::RBTree;
//!
//! // Order words case-insensitively and keep a log of everything deleted.
//! let mut deleted = Vec::new();
//! let mut words = RBTree::with_parts(
//!     |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()),
//!     |word: String| deleted.push(word),
//! );
//!
//! words.insert("Pear".to_owned());
//! words.insert("apple".to_owned());
//! assert!(!words.insert("PEAR".to_owned())); // Same key as "Pear".
//!
//! assert!(words.contains(&"APPLE".to_owned()));
//! assert!(words.delete(&"pear".to_owned()));
//!
//! // Visit in order; returning `false` stops the walk early.
//! let mut seen = Vec::new();
//! assert!(words.for_each(|word| {
//!     seen.push(word.clone());
//!     true
//! }));
//! assert_eq!(seen, ["apple"]);
//!
//! assert_eq!(words.destroy(), 1);
//! assert_eq!(deleted, ["Pear", "apple"]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **No `unsafe`** - Nodes live in an arena and link to each other by index
//! - **Reports instead of panicking** - Duplicates, missing values and allocation failure come
//!   back as an [`Error`], and a rejected insertion hands its value back
//!
//! # Implementation
//!
//! Nodes are stored in a slot arena and addressed by 32-bit handles; child links decide the
//! shape and parent links are back-references used to walk upward during rebalancing.
//! Traversal and teardown use an explicit stack. Rebalancing events are reported through the
//! [`log`](https://docs.rs/log) facade at `trace` level, rejected operations at `debug` level.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod error;
mod raw;

pub mod rb_tree;

pub use compare::{Comparator, Disposer, DropDisposer, Natural};
pub use error::{Error, InsertError};
pub use rb_tree::RBTree;

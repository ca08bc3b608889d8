#![doc = crate::doc_macro::diagram_doc!(
//! # `rawseq`
//! A growable sequence container built from an explicit raw-storage /
//! element-lifetime split.
//!
//! 1. [Summary](#summary)
//! 1. [Motivation](#motivation)
//! 1. [Examples](#examples)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! `rawseq` provides [`Seq<T>`][crate::seq::Seq], a contiguous growable
//! sequence in the role of the standard library's `Vec<T>`, layered on
//! [`RawBuf<T>`][crate::raw::RawBuf], an owner of uninitialized storage
//! that knows its capacity but nothing about element lifetimes.
//!
//! The split is the point of the crate. `RawBuf` only allocates, releases,
//! and swaps regions; `Seq` decides which slots hold live values and runs
//! every constructor and destructor itself. Keeping the two concerns apart
//! is what makes the interesting operations tractable: capacity-preserving
//! assignment, growth that relocates elements without running element
//! code, and multi-element construction that unwinds cleanly when an
//! element constructor panics.
//!
//! # Motivation
//!
//! A sequence of length 3 with capacity 5 looks like this:
//!
//! ```svgbob
//! "Seq<T>"
//! +----------------+-----------+
//! | "buf: RawBuf"  | "len: 3"  |
//! +----------------+-----------+
//!   |
//!   v
//! +-------+-------+-------+- - - - -+- - - - -+
//! | "x0"  | "x1"  | "x2"  |         |         |
//! +-------+-------+-------+- - - - -+- - - - -+
//! "live elements [0, len)"  "raw slots [len, cap)"
//! ```
//!
//! Slots `[0, len)` hold constructed values. Slots `[len, cap)` are raw
//! memory: no destructor will ever run on them, and nothing may read them.
//! Every `Seq` operation maintains `len <= cap` and moves the boundary
//! only by constructing or destroying exactly the elements it crosses,
//! which pins down behavior under panics: whatever was constructed before
//! the panic is still owned, gets destroyed, and the region is released.
//!
//! # Examples
//!
//! ```
//! use rawseq::{seq, Seq};
//!
//! let mut xs: Seq<i32> = seq![1, 2, 3];
//! xs.push(4);
//! assert_eq!(xs, [1, 2, 3, 4]);
//! assert_eq!(xs.pop(), Some(4));
//!
//! // Capacity is managed explicitly and never shrinks:
//! xs.reserve(10);
//! assert_eq!(xs.capacity(), 10);
//! xs.clear();
//! assert_eq!(xs.capacity(), 10);
//!
//! // The whole slice API applies to the live elements:
//! let mut ys = seq![3, 1, 2];
//! ys.sort();
//! assert_eq!(ys, [1, 2, 3]);
//! ```
//!
)]
//! # Feature flags
//!
//! This crate has no *required* dependencies. The following feature flags
//! exist, which can turn on some dependencies.
//!
//! * `serde`. Implements `Serialize` and `Deserialize` for
//!   [`Seq<T>`][crate::seq::Seq]. Adds a dependency on `serde`.
//! * `doc`. Render pretty SVG in documentation. Adds a dependency on
//!   `svgbobdoc`.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod raw;
pub mod seq;

mod doc_macro;
#[cfg(feature = "serde")]
mod serde;

pub use raw::RawBuf;
pub use seq::{IntoIter, Seq};

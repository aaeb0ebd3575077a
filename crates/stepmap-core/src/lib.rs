// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! # stepmap core
//!
//! A canonical, compressed representation of a total function from an ordered
//! key space to a value space. The function is stored as a sparse set of
//! *boundaries*: every boundary `(k, v)` says that `v` holds from `k` up to,
//! but not including, the next boundary key.
//!
//! ```
//! use stepmap_core::map::IntervalStore;
//!
//! let mut store = IntervalStore::new('a');
//! store.assign(0, 100, 'b');
//! assert_eq!(store.lookup(&-10), &'a');
//! assert_eq!(store.lookup(&50), &'b');
//! assert_eq!(store.lookup(&100), &'a');
//! assert_eq!(store.len(), 3);
//! ```
//!
//! The store never holds two neighbouring boundaries with equal values, so two
//! stores representing the same function hold exactly the same boundaries.

use num_traits::bounds::LowerBounded;

pub mod err;
pub mod iter;
pub mod map;
pub mod store;

/// Keys are totally ordered and bounded below.
///
/// `Ord` is required because the backing `BTreeMap` needs it, which also
/// brings key equality into scope. The store itself never tests keys for
/// equality: it only ever compares them with `<`.
pub trait BoundaryKey: Ord + Clone + LowerBounded {}
impl<T> BoundaryKey for T where T: Ord + Clone + LowerBounded {}

/// Values only need equality; it is what keeps the representation canonical.
pub trait BoundaryValue: PartialEq + Clone {}
impl<T> BoundaryValue for T where T: PartialEq + Clone {}

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


//! The ordered boundary store consumed by [`IntervalStore`](crate::map::IntervalStore).
//!
//! A [`BoundaryStore`] is an ordered key → value container with unique keys.
//! Every operation that locates a key is a *search*: one descent from the
//! root, `O(log n)` comparisons. The operations are shaped around the two
//! edges of an assignment so that the caller needs a constant number of
//! searches however large the store is:
//!
//! - [`scan`](BoundaryStore::scan) reads both edges in one descent at `end`
//!   followed by a backward walk over `[begin, end]`;
//! - [`retain_range`](BoundaryStore::retain_range) rewrites or drops the
//!   boundaries of `[begin, end]` in one sweep, linear in the boundaries it
//!   visits;
//! - [`upsert`](BoundaryStore::upsert) places a single boundary.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::Bound::{Included, Unbounded};

/// What a [`scan`](BoundaryStore::scan) of `[begin, end]` found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeScan<'a, V> {
    /// Value of the nearest boundary strictly below `begin`, if any.
    pub before: Option<&'a V>,
    /// Value holding at `end`.
    pub at_end: &'a V,
    /// A boundary sits exactly at `begin`.
    pub begin_present: bool,
    /// A boundary sits exactly at `end`.
    pub end_present: bool,
    /// Boundaries strictly between `begin` and `end`.
    pub interior: usize,
}

pub trait BoundaryStore<K, V> {
    type Iter<'a>: DoubleEndedIterator<Item = (&'a K, &'a V)> + ExactSizeIterator + 'a
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Creates a store holding exactly one boundary.
    fn with_origin(key: K, value: V) -> Self
    where
        Self: Sized;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates all boundaries in ascending key order.
    fn iter(&self) -> Self::Iter<'_>;

    /// The boundary with the greatest key less than or equal to `key`.
    ///
    /// One search.
    fn floor(&self, key: &K) -> Option<(&K, &V)>;

    /// Inspects the edges of `[begin, end]`. Requires `begin < end`.
    ///
    /// One search at `end`, then a walk down to the first boundary below
    /// `begin`. Returns `None` if no boundary lies at or below `end`.
    fn scan(&self, begin: &K, end: &K) -> Option<EdgeScan<'_, V>>;

    /// Inserts `(key, value)`, or overwrites the value of the boundary already
    /// at `key`. Returns `true` if a boundary was created.
    ///
    /// One search.
    fn upsert(&mut self, key: K, value: V) -> bool;

    /// Visits every boundary in `[begin, end]` in ascending order and drops
    /// those for which `keep` returns `false`; `keep` may rewrite the values it
    /// keeps. Returns the number of dropped boundaries.
    ///
    /// One search for the range, then linear in the visited boundaries.
    /// Requires `!(end < begin)`.
    fn retain_range<F>(&mut self, begin: &K, end: &K, keep: F) -> usize
    where
        F: FnMut(&K, &mut V) -> bool;
}

/// A [`BoundaryStore`] backed by [`BTreeMap`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BTreeMapStore<K, V> {
    map: BTreeMap<K, V>,
}

impl<K, V> BoundaryStore<K, V> for BTreeMapStore<K, V>
where
    K: Ord,
{
    type Iter<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    #[inline]
    fn with_origin(key: K, value: V) -> Self {
        let mut map = BTreeMap::new();
        map.insert(key, value);
        Self { map }
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.map.iter()
    }

    #[inline]
    fn floor(&self, key: &K) -> Option<(&K, &V)> {
        self.map.range((Unbounded, Included(key))).next_back()
    }

    fn scan(&self, begin: &K, end: &K) -> Option<EdgeScan<'_, V>> {
        let mut walk = self.map.range((Unbounded, Included(end)));
        let (last, at_end) = walk.next_back()?;

        let mut scan = EdgeScan {
            before: None,
            at_end,
            begin_present: false,
            end_present: !(last < end),
            interior: 0,
        };

        let mut current = Some((last, at_end));
        while let Some((key, value)) = current {
            if key < begin {
                scan.before = Some(value);
                break;
            }
            if !(begin < key) {
                scan.begin_present = true;
            } else if key < end {
                scan.interior += 1;
            }
            current = walk.next_back();
        }
        Some(scan)
    }

    #[inline]
    fn upsert(&mut self, key: K, value: V) -> bool {
        self.map.insert(key, value).is_none()
    }

    #[inline]
    fn retain_range<F>(&mut self, begin: &K, end: &K, mut keep: F) -> usize
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.map
            .extract_if((Included(begin), Included(end)), |k, v| !keep(k, v))
            .count()
    }
}

/// Wraps a backend and counts the searches issued against it.
///
/// Iteration and `len` are not searches and pass through uncounted.
#[derive(Debug, Clone)]
pub struct CountingStore<S> {
    inner: S,
    searches: Cell<usize>,
}

impl<S> CountingStore<S> {
    #[inline]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            searches: Cell::new(0),
        }
    }

    /// Searches issued since construction or the last reset.
    #[inline]
    pub fn searches(&self) -> usize {
        self.searches.get()
    }

    /// Resets the counter and returns its previous value.
    #[inline]
    pub fn reset_searches(&self) -> usize {
        self.searches.replace(0)
    }

    #[inline]
    fn tick(&self) {
        self.searches.set(self.searches.get() + 1);
    }
}

impl<S: PartialEq> PartialEq for CountingStore<S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<S: Eq> Eq for CountingStore<S> {}

impl<K, V, S> BoundaryStore<K, V> for CountingStore<S>
where
    S: BoundaryStore<K, V>,
{
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    #[inline]
    fn with_origin(key: K, value: V) -> Self {
        Self::new(S::with_origin(key, value))
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.inner.iter()
    }

    #[inline]
    fn floor(&self, key: &K) -> Option<(&K, &V)> {
        self.tick();
        self.inner.floor(key)
    }

    #[inline]
    fn scan(&self, begin: &K, end: &K) -> Option<EdgeScan<'_, V>> {
        self.tick();
        self.inner.scan(begin, end)
    }

    #[inline]
    fn upsert(&mut self, key: K, value: V) -> bool {
        self.tick();
        self.inner.upsert(key, value)
    }

    #[inline]
    fn retain_range<F>(&mut self, begin: &K, end: &K, keep: F) -> usize
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.tick();
        self.inner.retain_range(begin, end, keep)
    }
}

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


use std::marker::PhantomData;
use std::ops::Index;

use tracing::trace;

use crate::err::{
    MissingOriginError, RedundantBoundaryError, StoreValidationError, UnorderedBoundaryError,
};
use crate::iter::Segments;
use crate::store::{BTreeMapStore, BoundaryStore};
use crate::{BoundaryKey, BoundaryValue};

/// Upper bound on the store searches a single [`IntervalStore::assign`] issues:
/// one scan, one sweep and one point update per edge.
pub const MAX_ASSIGN_SEARCHES: usize = 4;

/// A total function from `K` to `V`, stored as a canonical set of boundaries.
///
/// For any key `k`, the value is the one of the boundary with the greatest key
/// that is less than or equal to `k`. The store always holds a boundary at
/// `K::min_value()` and never holds two neighbouring boundaries with equal
/// values.
///
/// The backend `S` is the ordered container the boundaries live in; see
/// [`BoundaryStore`].
///
/// # Examples
///
/// ```
/// use stepmap_core::map::IntervalStore;
///
/// let mut store = IntervalStore::new('a');
/// store.assign(0, 100, 'b');
/// store.assign(50, 100, 'c');
/// assert_eq!(store[&49], 'b');
/// assert_eq!(store[&50], 'c');
/// assert_eq!(store[&100], 'a');
///
/// // Inverted ranges are empty and leave the store untouched.
/// store.assign(100, 0, 'f');
/// assert_eq!(store[&0], 'b');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalStore<K, V, S = BTreeMapStore<K, V>> {
    store: S,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> IntervalStore<K, V>
where
    K: BoundaryKey,
    V: BoundaryValue,
{
    /// Creates a store mapping every key to `initial`.
    #[inline]
    pub fn new(initial: V) -> Self {
        Self::with_backend(initial)
    }
}

impl<K, V, S> IntervalStore<K, V, S>
where
    K: BoundaryKey,
    V: BoundaryValue,
    S: BoundaryStore<K, V>,
{
    /// Creates a store mapping every key to `initial`, on an explicit backend.
    #[inline]
    pub fn with_backend(initial: V) -> Self {
        Self {
            store: S::with_origin(K::min_value(), initial),
            _marker: PhantomData,
        }
    }

    /// Assigns `value` to every key in `[begin, end)`.
    ///
    /// Keys outside the range keep their value. If `!(begin < end)` the range
    /// is empty and the store is not touched.
    ///
    /// A single scan at `end` reads both edges. Boundaries made redundant by
    /// the assignment are dropped in one sweep over `[begin, end]`, which keeps
    /// the store canonical without a separate compaction pass. At most
    /// [`MAX_ASSIGN_SEARCHES`] searches are issued, whatever the size of the
    /// store or the number of boundaries covered.
    pub fn assign(&mut self, begin: K, end: K, value: V) {
        // Only `<` is used on keys.
        if !(begin < end) {
            return;
        }

        let scan = self
            .store
            .scan(&begin, &end)
            .expect("a boundary precedes every key above the minimum");
        let merges_left = scan.before == Some(&value);
        let merges_right = *scan.at_end == value;
        let begin_present = scan.begin_present;
        let end_present = scan.end_present;
        // Value to pin at `end` so the suffix keeps what held there.
        let carried = (!end_present && !merges_right).then(|| scan.at_end.clone());

        let sweep = scan.interior > 0
            || (begin_present && merges_left)
            || (end_present && merges_right);
        let erased = if sweep {
            self.store.retain_range(&begin, &end, |key, slot| {
                if !(begin < *key) {
                    if merges_left {
                        return false;
                    }
                    *slot = value.clone();
                    true
                } else if *key < end {
                    false
                } else {
                    !merges_right
                }
            })
        } else {
            0
        };

        let mut created = 0;
        if !merges_left && !(sweep && begin_present) && self.store.upsert(begin, value) {
            created += 1;
        }
        if let Some(carried) = carried {
            self.store.upsert(end, carried);
            created += 1;
        }

        trace!(created, erased, "assign");
    }

    /// Returns the value associated with `key`.
    #[inline]
    pub fn lookup(&self, key: &K) -> &V {
        self.store
            .floor(key)
            .map(|(_, v)| v)
            .expect("store always holds a boundary at the minimum key")
    }

    /// Returns the number of stored boundaries.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Always `false` for a store built through its constructors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterates the boundaries in ascending key order.
    #[inline]
    pub fn boundaries(&self) -> S::Iter<'_> {
        self.store.iter()
    }

    #[inline]
    pub fn segments(&self) -> Segments<S::Iter<'_>> {
        Segments::new(self.store.iter())
    }

    #[inline]
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Checks totality, ordering and canonicality of the stored boundaries.
    pub fn validate(&self) -> Result<(), StoreValidationError<K>> {
        let mut boundaries = self.store.iter();
        let Some((first, mut previous_value)) = boundaries.next() else {
            return Err(StoreValidationError::Empty);
        };
        if K::min_value() < *first {
            return Err(MissingOriginError::new(first.clone()).into());
        }

        let mut previous_key = first;
        for (key, value) in boundaries {
            if !(previous_key < key) {
                return Err(UnorderedBoundaryError::new(previous_key.clone(), key.clone()).into());
            }
            if previous_value == value {
                return Err(RedundantBoundaryError::new(key.clone()).into());
            }
            previous_key = key;
            previous_value = value;
        }
        Ok(())
    }
}

impl<K, V, S> Index<&K> for IntervalStore<K, V, S>
where
    K: BoundaryKey,
    V: BoundaryValue,
    S: BoundaryStore<K, V>,
{
    type Output = V;

    #[inline]
    fn index(&self, key: &K) -> &V {
        self.lookup(key)
    }
}

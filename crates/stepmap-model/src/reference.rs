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


use stepmap_core::{
    BoundaryKey, BoundaryValue, map::IntervalStore, store::BoundaryStore,
};

use crate::err::SampleMismatchError;

/// Brute-force model of the function on a fixed set of sample keys.
///
/// Every `assign` touches each sample key, which is slow but obviously correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledReference<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> SampledReference<K, V>
where
    K: BoundaryKey,
    V: BoundaryValue,
{
    pub fn new(keys: Vec<K>, initial: V) -> Self {
        let values = vec![initial; keys.len()];
        Self { keys, values }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Sample keys paired with their current reference values.
    pub fn samples(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.keys.iter().zip(self.values.iter())
    }

    pub fn assign(&mut self, begin: &K, end: &K, value: &V) {
        for (key, slot) in self.keys.iter().zip(self.values.iter_mut()) {
            if !(key < begin) && key < end {
                *slot = value.clone();
            }
        }
    }

    /// Compares every sample key against `store.lookup`; stops at the first
    /// difference.
    pub fn check<S>(&self, store: &IntervalStore<K, V, S>) -> Result<(), SampleMismatchError<K, V>>
    where
        S: BoundaryStore<K, V>,
    {
        for (key, expected) in self.samples() {
            let actual = store.lookup(key);
            if actual != expected {
                return Err(SampleMismatchError::new(
                    key.clone(),
                    expected.clone(),
                    actual.clone(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_follows_half_open_ranges() {
        let mut reference = SampledReference::new(vec![-5, 0, 49, 50, 99, 100], 'a');
        reference.assign(&0, &100, &'b');
        reference.assign(&50, &100, &'c');

        let values: Vec<char> = reference.samples().map(|(_, v)| *v).collect();
        assert_eq!(values, vec!['a', 'b', 'b', 'c', 'c', 'a']);
    }

    #[test]
    fn test_inverted_range_leaves_reference_untouched() {
        let mut reference = SampledReference::new(vec![0, 10, 20], 'x');
        reference.assign(&20, &0, &'y');
        assert!(reference.samples().all(|(_, v)| *v == 'x'));
    }

    #[test]
    fn test_check_agrees_with_store() {
        let keys: Vec<i32> = (-10..=110).step_by(5).collect();
        let mut reference = SampledReference::new(keys, 'a');
        let mut store = IntervalStore::new('a');

        for &(begin, end, value) in &[(0, 100, 'b'), (50, 100, 'c'), (50, 60, 'd'), (30, 80, 'e')] {
            reference.assign(&begin, &end, &value);
            store.assign(begin, end, value);
        }
        assert_eq!(reference.check(&store), Ok(()));
    }

    #[test]
    fn test_check_reports_first_mismatch() {
        let mut reference = SampledReference::new(vec![0, 10, 20], 'a');
        reference.assign(&10, &30, &'b');

        let mut store = IntervalStore::new('a');
        store.assign(15, 30, 'b');

        let err = reference.check(&store).unwrap_err();
        assert_eq!(err, SampleMismatchError::new(10, 'b', 'a'));
    }

    #[test]
    fn test_empty_reference_always_checks() {
        let reference: SampledReference<u8, bool> = SampledReference::new(Vec::new(), false);
        assert!(reference.is_empty());
        let mut store = IntervalStore::new(true);
        store.assign(1, 2, false);
        assert_eq!(reference.check(&store), Ok(()));
    }
}

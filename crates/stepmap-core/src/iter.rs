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


use std::iter::{FusedIterator, Peekable};

/// One constant piece of the stored function: `value` holds on `[start, end)`,
/// or on everything from `start` upwards when `end` is `None`.
#[derive(Debug, PartialEq, Eq)]
pub struct Segment<'a, K, V> {
    start: &'a K,
    end: Option<&'a K>,
    value: &'a V,
}

impl<K, V> Clone for Segment<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Segment<'_, K, V> {}

impl<'a, K, V> Segment<'a, K, V> {
    #[inline]
    pub fn start(&self) -> &'a K {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<&'a K> {
        self.end
    }

    #[inline]
    pub fn value(&self) -> &'a V {
        self.value
    }
}

/// Iterator over the [`Segment`]s of a store, in ascending key order.
pub struct Segments<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> Segments<I> {
    #[inline]
    pub(crate) fn new(boundaries: I) -> Self {
        Self {
            inner: boundaries.peekable(),
        }
    }
}

impl<'a, K: 'a, V: 'a, I> Iterator for Segments<I>
where
    I: Iterator<Item = (&'a K, &'a V)>,
{
    type Item = Segment<'a, K, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (start, value) = self.inner.next()?;
        let end = self.inner.peek().map(|(k, _)| *k);
        Some(Segment { start, end, value })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: 'a, V: 'a, I> ExactSizeIterator for Segments<I> where
    I: ExactSizeIterator<Item = (&'a K, &'a V)>
{
}

impl<'a, K: 'a, V: 'a, I> FusedIterator for Segments<I> where
    I: FusedIterator<Item = (&'a K, &'a V)>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_segments_span_between_boundaries() {
        let map = BTreeMap::from([(0, 'a'), (10, 'b'), (20, 'c')]);
        let segs: Vec<(i32, Option<i32>, char)> = Segments::new(map.iter())
            .map(|s| (*s.start(), s.end().copied(), *s.value()))
            .collect();
        assert_eq!(
            segs,
            vec![(0, Some(10), 'a'), (10, Some(20), 'b'), (20, None, 'c')]
        );
    }

    #[test]
    fn test_segments_len() {
        let map = BTreeMap::from([(0, 'a'), (10, 'b')]);
        let mut segs = Segments::new(map.iter());
        assert_eq!(segs.len(), 2);
        segs.next();
        assert_eq!(segs.len(), 1);
        assert!(segs.next().is_some_and(|s| s.end().is_none()));
        assert!(segs.next().is_none());
        assert!(segs.next().is_none());
    }
}

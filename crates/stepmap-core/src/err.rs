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


use std::fmt::{Debug, Display};

/// The first boundary sits above the minimum key, so some keys have no value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MissingOriginError<K> {
    first: K,
}

impl<K> MissingOriginError<K> {
    #[inline]
    pub fn new(first: K) -> Self {
        Self { first }
    }

    #[inline]
    pub fn first(&self) -> &K {
        &self.first
    }
}

impl<K: Debug> Display for MissingOriginError<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "First boundary {:?} lies above the minimum key",
            self.first
        )
    }
}

impl<K: Debug> std::error::Error for MissingOriginError<K> {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnorderedBoundaryError<K> {
    previous: K,
    key: K,
}

impl<K> UnorderedBoundaryError<K> {
    #[inline]
    pub fn new(previous: K, key: K) -> Self {
        Self { previous, key }
    }

    #[inline]
    pub fn previous(&self) -> &K {
        &self.previous
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Debug> Display for UnorderedBoundaryError<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Boundary {:?} does not sort strictly after its predecessor {:?}",
            self.key, self.previous
        )
    }
}

impl<K: Debug> std::error::Error for UnorderedBoundaryError<K> {}

/// A boundary repeats the value of its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RedundantBoundaryError<K> {
    key: K,
}

impl<K> RedundantBoundaryError<K> {
    #[inline]
    pub fn new(key: K) -> Self {
        Self { key }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Debug> Display for RedundantBoundaryError<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Boundary {:?} holds the same value as its predecessor",
            self.key
        )
    }
}

impl<K: Debug> std::error::Error for RedundantBoundaryError<K> {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreValidationError<K> {
    Empty,
    MissingOrigin(MissingOriginError<K>),
    Unordered(UnorderedBoundaryError<K>),
    RedundantBoundary(RedundantBoundaryError<K>),
}

impl<K: Debug> Display for StoreValidationError<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use StoreValidationError::*;
        match self {
            Empty => write!(f, "Store holds no boundaries"),
            MissingOrigin(e) => write!(f, "{}", e),
            Unordered(e) => write!(f, "{}", e),
            RedundantBoundary(e) => write!(f, "{}", e),
        }
    }
}

impl<K> From<MissingOriginError<K>> for StoreValidationError<K> {
    fn from(err: MissingOriginError<K>) -> Self {
        Self::MissingOrigin(err)
    }
}

impl<K> From<UnorderedBoundaryError<K>> for StoreValidationError<K> {
    fn from(err: UnorderedBoundaryError<K>) -> Self {
        Self::Unordered(err)
    }
}

impl<K> From<RedundantBoundaryError<K>> for StoreValidationError<K> {
    fn from(err: RedundantBoundaryError<K>) -> Self {
        Self::RedundantBoundary(err)
    }
}

impl<K: Debug> std::error::Error for StoreValidationError<K> {}

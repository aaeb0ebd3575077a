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

use stepmap_core::err::StoreValidationError;

/// A sample key whose value in the store differs from the reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleMismatchError<K, V> {
    key: K,
    expected: V,
    actual: V,
}

impl<K, V> SampleMismatchError<K, V> {
    #[inline]
    pub fn new(key: K, expected: V, actual: V) -> Self {
        Self {
            key,
            expected,
            actual,
        }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn expected(&self) -> &V {
        &self.expected
    }

    #[inline]
    pub fn actual(&self) -> &V {
        &self.actual
    }
}

impl<K: Debug, V: Debug> Display for SampleMismatchError<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lookup of key {:?} returned {:?}, reference expects {:?}",
            self.key, self.actual, self.expected
        )
    }
}

impl<K: Debug, V: Debug> std::error::Error for SampleMismatchError<K, V> {}

/// An assign needed more store searches than allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchBudgetError {
    step: usize,
    searches: usize,
    budget: usize,
}

impl SearchBudgetError {
    #[inline]
    pub fn new(step: usize, searches: usize, budget: usize) -> Self {
        Self {
            step,
            searches,
            budget,
        }
    }

    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    #[inline]
    pub fn searches(&self) -> usize {
        self.searches
    }

    #[inline]
    pub fn budget(&self) -> usize {
        self.budget
    }
}

impl Display for SearchBudgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Step {} issued {} store searches, budget is {}",
            self.step, self.searches, self.budget
        )
    }
}

impl std::error::Error for SearchBudgetError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoakError<K> {
    Mismatch(SampleMismatchError<K, char>),
    Invariant(StoreValidationError<K>),
    SearchBudgetExceeded(SearchBudgetError),
}

impl<K: Debug> Display for SoakError<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoakError::Mismatch(e) => write!(f, "Reference mismatch: {e}"),
            SoakError::Invariant(e) => write!(f, "Invariant violated: {e}"),
            SoakError::SearchBudgetExceeded(e) => write!(f, "Search budget exceeded: {e}"),
        }
    }
}

impl<K> From<SampleMismatchError<K, char>> for SoakError<K> {
    fn from(e: SampleMismatchError<K, char>) -> Self {
        SoakError::Mismatch(e)
    }
}

impl<K> From<StoreValidationError<K>> for SoakError<K> {
    fn from(e: StoreValidationError<K>) -> Self {
        SoakError::Invariant(e)
    }
}

impl<K> From<SearchBudgetError> for SoakError<K> {
    fn from(e: SearchBudgetError) -> Self {
        SoakError::SearchBudgetExceeded(e)
    }
}

impl<K: Debug> std::error::Error for SoakError<K> {}

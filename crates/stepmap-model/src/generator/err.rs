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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyKeyRangeError<K> {
    key_min: K,
    key_max: K,
}

impl<K> EmptyKeyRangeError<K> {
    pub fn new(key_min: K, key_max: K) -> Self {
        Self { key_min, key_max }
    }
    pub fn key_min(&self) -> &K {
        &self.key_min
    }
    pub fn key_max(&self) -> &K {
        &self.key_max
    }
}

impl<K: Debug> Display for EmptyKeyRangeError<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EmptyKeyRangeError: key_max {:?} is below key_min {:?}",
            self.key_max, self.key_min
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyValueRangeError {
    value_min: char,
    value_max: char,
}

impl EmptyValueRangeError {
    pub fn new(value_min: char, value_max: char) -> Self {
        Self {
            value_min,
            value_max,
        }
    }
    pub fn value_min(&self) -> char {
        self.value_min
    }
    pub fn value_max(&self) -> char {
        self.value_max
    }
}

impl Display for EmptyValueRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EmptyValueRangeError: value_max {:?} is below value_min {:?}",
            self.value_max, self.value_min
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkloadGenConfigBuildError<K> {
    EmptyKeyRange(EmptyKeyRangeError<K>),
    EmptyValueRange(EmptyValueRangeError),
    NoSamples,
    MissingKeyRange,
    MissingSteps,
}

impl<K: Debug> Display for WorkloadGenConfigBuildError<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use WorkloadGenConfigBuildError::*;
        match self {
            EmptyKeyRange(e) => write!(f, "{}", e),
            EmptyValueRange(e) => write!(f, "{}", e),
            NoSamples => write!(f, "At least one sample key is required"),
            MissingKeyRange => write!(f, "Missing key_range"),
            MissingSteps => write!(f, "Missing steps"),
        }
    }
}

impl<K> From<EmptyKeyRangeError<K>> for WorkloadGenConfigBuildError<K> {
    fn from(err: EmptyKeyRangeError<K>) -> Self {
        Self::EmptyKeyRange(err)
    }
}

impl<K> From<EmptyValueRangeError> for WorkloadGenConfigBuildError<K> {
    fn from(err: EmptyValueRangeError) -> Self {
        Self::EmptyValueRange(err)
    }
}

impl<K: Debug> std::error::Error for WorkloadGenConfigBuildError<K> {}

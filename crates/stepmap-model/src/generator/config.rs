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


use std::fmt::Debug;

use num_traits::PrimInt;
use rand::Rng;

use super::err::{EmptyKeyRangeError, EmptyValueRangeError, WorkloadGenConfigBuildError};

/// Configuration for a randomized assign workload.
///
/// Keys are drawn uniformly from `[key_min, key_max]`, values from
/// `[value_min, value_max]`. A narrow value range makes neighbouring
/// intervals share values often, which exercises merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenConfig<K>
where
    K: PrimInt,
{
    pub(crate) key_min: K,
    pub(crate) key_max: K,
    pub(crate) value_min: char,
    pub(crate) value_max: char,
    pub(crate) initial_value: char,
    pub(crate) samples: usize,
    pub(crate) steps: usize,
    pub(crate) seed: u64,
}

impl<K> Default for WorkloadGenConfig<K>
where
    K: PrimInt,
{
    fn default() -> Self {
        Self {
            key_min: K::min_value(),
            key_max: K::max_value(),
            value_min: 'A',
            value_max: 'Z',
            initial_value: 'A',
            samples: 100,
            steps: 1000,
            seed: 42,
        }
    }
}

impl<K> WorkloadGenConfig<K>
where
    K: PrimInt + Debug,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        key_min: K,
        key_max: K,
        value_min: char,
        value_max: char,
        initial_value: char,
        samples: usize,
        steps: usize,
        seed: u64,
    ) -> Result<Self, WorkloadGenConfigBuildError<K>> {
        if key_max < key_min {
            return Err(EmptyKeyRangeError::new(key_min, key_max).into());
        }
        if value_max < value_min {
            return Err(EmptyValueRangeError::new(value_min, value_max).into());
        }
        if samples == 0 {
            return Err(WorkloadGenConfigBuildError::NoSamples);
        }

        Ok(Self {
            key_min,
            key_max,
            value_min,
            value_max,
            initial_value,
            samples,
            steps,
            seed,
        })
    }

    #[inline]
    pub fn key_min(&self) -> K {
        self.key_min
    }

    #[inline]
    pub fn key_max(&self) -> K {
        self.key_max
    }

    #[inline]
    pub fn value_min(&self) -> char {
        self.value_min
    }

    #[inline]
    pub fn value_max(&self) -> char {
        self.value_max
    }

    #[inline]
    pub fn initial_value(&self) -> char {
        self.initial_value
    }

    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Builder for `WorkloadGenConfig`.
#[derive(Debug, Clone)]
pub struct WorkloadGenConfigBuilder<K>
where
    K: PrimInt,
{
    // Required
    key_range: Option<(K, K)>,
    steps: Option<usize>,

    // Optional with defaults
    value_min: char,
    value_max: char,
    initial_value: char,
    samples: usize,
    seed: u64,
}

impl<K> Default for WorkloadGenConfigBuilder<K>
where
    K: PrimInt,
{
    fn default() -> Self {
        let seed = rand::rng().random();

        Self {
            key_range: None,
            steps: None,
            value_min: 'A',
            value_max: 'Z',
            initial_value: 'A',
            samples: 100,
            seed,
        }
    }
}

impl<K> WorkloadGenConfigBuilder<K>
where
    K: PrimInt + Debug,
{
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive range the generator draws keys from.
    #[inline]
    pub fn key_range(mut self, key_min: K, key_max: K) -> Self {
        self.key_range = Some((key_min, key_max));
        self
    }
    #[inline]
    pub fn steps(mut self, v: usize) -> Self {
        self.steps = Some(v);
        self
    }
    #[inline]
    pub fn value_range(mut self, value_min: char, value_max: char) -> Self {
        self.value_min = value_min;
        self.value_max = value_max;
        self
    }
    #[inline]
    pub fn initial_value(mut self, v: char) -> Self {
        self.initial_value = v;
        self
    }
    #[inline]
    pub fn samples(mut self, v: usize) -> Self {
        self.samples = v;
        self
    }
    #[inline]
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    pub fn build(self) -> Result<WorkloadGenConfig<K>, WorkloadGenConfigBuildError<K>> {
        let (key_min, key_max) = self
            .key_range
            .ok_or(WorkloadGenConfigBuildError::MissingKeyRange)?;
        let steps = self.steps.ok_or(WorkloadGenConfigBuildError::MissingSteps)?;

        WorkloadGenConfig::new(
            key_min,
            key_max,
            self.value_min,
            self.value_max,
            self.initial_value,
            self.samples,
            steps,
            self.seed,
        )
    }
}

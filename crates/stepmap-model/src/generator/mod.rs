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


mod config;
mod err;

pub use config::{WorkloadGenConfig, WorkloadGenConfigBuilder};
pub use err::{EmptyKeyRangeError, EmptyValueRangeError, WorkloadGenConfigBuildError};

use num_traits::PrimInt;
use rand::{SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Uniform, uniform::SampleUniform};
use std::fmt::Debug;

/// One `assign(begin, end, value)` call.
///
/// `begin` and `end` are drawn independently, so empty and inverted ranges
/// are part of every workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssignOp<K> {
    pub begin: K,
    pub end: K,
    pub value: char,
}

impl<K: PartialOrd> AssignOp<K> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.begin < self.end)
    }
}

/// A complete workload: sample keys plus the sequence of assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload<K> {
    samples: Vec<K>,
    ops: Vec<AssignOp<K>>,
}

impl<K> Workload<K> {
    #[inline]
    pub fn samples(&self) -> &[K] {
        &self.samples
    }

    #[inline]
    pub fn ops(&self) -> &[AssignOp<K>] {
        &self.ops
    }
}

pub struct WorkloadGenerator<K>
where
    K: PrimInt + SampleUniform,
{
    config: WorkloadGenConfig<K>,
    rng: SmallRng,
    key_distribution: Uniform<K>,
    value_distribution: Uniform<char>,
}

impl<K> From<WorkloadGenConfig<K>> for WorkloadGenerator<K>
where
    K: PrimInt + SampleUniform + Debug,
{
    fn from(config: WorkloadGenConfig<K>) -> Self {
        Self::new(config)
    }
}

impl<K> WorkloadGenerator<K>
where
    K: PrimInt + SampleUniform + Debug,
{
    pub fn new(config: WorkloadGenConfig<K>) -> Self {
        let seed = config.seed();
        Self {
            key_distribution: Uniform::new_inclusive(config.key_min, config.key_max)
                .expect("valid [key_min, key_max]"),
            value_distribution: Uniform::new_inclusive(config.value_min, config.value_max)
                .expect("valid [value_min, value_max]"),
            rng: SmallRng::seed_from_u64(seed),
            config,
        }
    }

    #[inline]
    fn sample_key(&mut self) -> K {
        self.key_distribution.sample(&mut self.rng)
    }

    /// Draws the configured number of sample keys, sorted and without
    /// duplicates, so the result may be shorter than requested.
    fn sample_keys(&mut self) -> Vec<K> {
        let mut keys: Vec<K> = (0..self.config.samples)
            .map(|_| self.sample_key())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    fn next_op(&mut self) -> AssignOp<K> {
        let begin = self.sample_key();
        let end = self.sample_key();
        let value = self.value_distribution.sample(&mut self.rng);
        AssignOp { begin, end, value }
    }

    pub fn generate(&mut self) -> Workload<K> {
        let samples = self.sample_keys();
        let ops = (0..self.config.steps).map(|_| self.next_op()).collect();
        Workload { samples, ops }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> WorkloadGenConfig<i64> {
        WorkloadGenConfigBuilder::new()
            .key_range(0, 500)
            .steps(300)
            .value_range('A', 'D')
            .samples(50)
            .seed(seed)
            .build()
            .expect("valid config")
    }

    #[test]
    fn test_same_seed_same_workload() {
        let a = WorkloadGenerator::new(config(11)).generate();
        let b = WorkloadGenerator::new(config(11)).generate();
        assert_eq!(a, b);

        let c = WorkloadGenerator::new(config(12)).generate();
        assert_ne!(a, c);
    }

    #[test]
    fn test_ops_stay_within_configured_ranges() {
        let workload: Workload<i64> = WorkloadGenerator::from(config(3)).generate();
        assert_eq!(workload.ops().len(), 300);
        for op in workload.ops() {
            assert!((0..=500).contains(&op.begin));
            assert!((0..=500).contains(&op.end));
            assert!(('A'..='D').contains(&op.value));
        }
        assert!(
            workload.ops().iter().any(|op| op.is_empty()),
            "independent endpoints should produce some empty ranges"
        );
    }

    #[test]
    fn test_sample_keys_sorted_and_unique() {
        let mut generator = WorkloadGenerator::new(config(5));
        let keys = generator.sample_keys();
        assert!(!keys.is_empty());
        assert!(keys.len() <= 50);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_single_key_range_yields_only_empty_ops() {
        let cfg = WorkloadGenConfigBuilder::<u8>::new()
            .key_range(9, 9)
            .steps(20)
            .seed(1)
            .build()
            .expect("valid config");
        let workload = WorkloadGenerator::new(cfg).generate();
        assert_eq!(workload.samples(), &[9]);
        assert!(workload.ops().iter().all(|op| op.is_empty()));
    }
}

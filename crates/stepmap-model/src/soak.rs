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


use num_traits::PrimInt;
use rand_distr::uniform::SampleUniform;
use std::fmt::Debug;
use stepmap_core::{
    BoundaryKey,
    map::{IntervalStore, MAX_ASSIGN_SEARCHES},
    store::{BTreeMapStore, CountingStore},
};
use tracing::{debug, info, instrument, warn};

use crate::{
    err::{SearchBudgetError, SoakError},
    generator::{WorkloadGenConfig, WorkloadGenerator},
    reference::SampledReference,
};

/// Most store searches a single assign may issue.
pub const SEARCH_BUDGET: usize = MAX_ASSIGN_SEARCHES;

/// Store type the soak drives: the default backend with a search counter.
pub type CountedStore<K> = IntervalStore<K, char, CountingStore<BTreeMapStore<K, char>>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoakReport {
    pub steps: usize,
    pub empty_ranges: usize,
    pub samples: usize,
    pub final_boundaries: usize,
    pub peak_boundaries: usize,
    pub max_searches: usize,
}

/// Runs a seeded random workload against an [`IntervalStore`] and a
/// [`SampledReference`] side by side.
///
/// Every step is checked against the search budget and the sample keys.
/// The store invariants are validated once at the end.
#[instrument(
    level = "debug",
    skip_all,
    fields(seed = config.seed(), steps = config.steps()),
    err(Display)
)]
pub fn run_soak<K>(config: &WorkloadGenConfig<K>) -> Result<SoakReport, SoakError<K>>
where
    K: BoundaryKey + PrimInt + SampleUniform + Debug,
{
    let workload = WorkloadGenerator::new(config.clone()).generate();

    let initial = config.initial_value();
    let mut reference = SampledReference::new(workload.samples().to_vec(), initial);
    let mut store: CountedStore<K> = IntervalStore::with_backend(initial);

    let mut report = SoakReport {
        samples: reference.len(),
        final_boundaries: store.len(),
        peak_boundaries: store.len(),
        ..SoakReport::default()
    };

    for (step, op) in workload.ops().iter().enumerate() {
        if op.is_empty() {
            report.empty_ranges += 1;
        }

        store.backend().reset_searches();
        store.assign(op.begin, op.end, op.value);
        let searches = store.backend().reset_searches();

        if searches > SEARCH_BUDGET || (op.is_empty() && searches != 0) {
            warn!(step, searches, ?op, "search budget exceeded");
            return Err(SearchBudgetError::new(step, searches, SEARCH_BUDGET).into());
        }
        report.max_searches = report.max_searches.max(searches);

        reference.assign(&op.begin, &op.end, &op.value);
        if let Err(e) = reference.check(&store) {
            warn!(step, ?op, "reference mismatch");
            return Err(e.into());
        }

        report.peak_boundaries = report.peak_boundaries.max(store.len());
        report.steps += 1;
    }

    store.validate()?;
    report.final_boundaries = store.len();

    debug!(
        empty_ranges = report.empty_ranges,
        peak = report.peak_boundaries,
        "workload drained"
    );
    info!(
        steps = report.steps,
        boundaries = report.final_boundaries,
        max_searches = report.max_searches,
        "soak passed"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::WorkloadGenConfigBuilder;

    #[test]
    fn test_soak_passes_on_narrow_alphabet() {
        let config = WorkloadGenConfigBuilder::<i64>::new()
            .key_range(-1_000, 1_000)
            .value_range('A', 'C')
            .samples(200)
            .steps(2_000)
            .seed(7)
            .build()
            .expect("valid config");

        let report = run_soak(&config).expect("soak should pass");
        assert_eq!(report.steps, 2_000);
        assert!(report.empty_ranges > 0);
        assert!(report.max_searches <= SEARCH_BUDGET);
        assert!(report.final_boundaries >= 1);
        assert!(report.peak_boundaries >= report.final_boundaries);
    }

    #[test]
    fn test_soak_is_deterministic_per_seed() {
        let config = WorkloadGenConfigBuilder::<u16>::new()
            .key_range(0, 300)
            .steps(500)
            .seed(99)
            .build()
            .expect("valid config");

        assert_eq!(run_soak(&config), run_soak(&config));
    }

    #[test]
    fn test_soak_over_full_key_space() {
        let config = WorkloadGenConfig::<i8> {
            steps: 400,
            ..WorkloadGenConfig::default()
        };
        let report = run_soak(&config).expect("soak should pass");
        assert_eq!(report.steps, 400);
        assert!(report.samples <= 100);
    }

    #[test]
    fn test_zero_steps_reports_single_origin() {
        let config = WorkloadGenConfigBuilder::<i32>::new()
            .key_range(0, 10)
            .steps(0)
            .seed(1)
            .build()
            .expect("valid config");

        let report = run_soak(&config).expect("soak should pass");
        assert_eq!(
            report,
            SoakReport {
                steps: 0,
                empty_ranges: 0,
                samples: report.samples,
                final_boundaries: 1,
                peak_boundaries: 1,
                max_searches: 0,
            }
        );
    }
}

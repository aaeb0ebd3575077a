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


use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stepmap_core::map::IntervalStore;
use stepmap_core::store::{BTreeMapStore, BoundaryStore, CountingStore};
use std::{env, hint::black_box};

type K = i64;
type V = u8;

#[derive(Clone, Copy)]
struct Op {
    begin: K,
    end: K,
    value: V,
}

fn gen_ops(key_span: K, n: usize, alphabet: V, rng: &mut ChaCha8Rng) -> Vec<Op> {
    (0..n)
        .map(|_| {
            let begin = rng.random_range(0..key_span);
            let width = rng.random_range(1..=(key_span / 16).max(1));
            Op {
                begin,
                end: begin + width,
                value: rng.random_range(0..alphabet),
            }
        })
        .collect()
}

fn gen_keys(key_span: K, n: usize, rng: &mut ChaCha8Rng) -> Vec<K> {
    (0..n).map(|_| rng.random_range(0..key_span)).collect()
}

fn prepare_store<S: BoundaryStore<K, V>>(ops: &[Op]) -> IntervalStore<K, V, S> {
    let mut store = IntervalStore::with_backend(0);
    for &Op { begin, end, value } in ops {
        store.assign(begin, end, value);
    }
    store
}

fn register_assign<S: BoundaryStore<K, V>>(
    c: &mut Criterion,
    name: &str,
    key_span: K,
    ops_n: usize,
) {
    let mut group = c.benchmark_group(format!("assign/{name}"));
    group.throughput(Throughput::Elements(ops_n as u64));

    let mut rng = ChaCha8Rng::seed_from_u64(0xA551_6E00_D00D);
    // A narrow alphabet produces many merges, a wide one many boundaries.
    for &alphabet in &[2u8, 64u8] {
        let ops = gen_ops(key_span, ops_n, alphabet, &mut rng);
        group.bench_function(BenchmarkId::new("alphabet", alphabet), |b| {
            b.iter_batched(
                || IntervalStore::<K, V, S>::with_backend(0),
                |mut store| {
                    for &Op { begin, end, value } in &ops {
                        store.assign(begin, end, value);
                    }
                    black_box(store);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn register_lookup<S: BoundaryStore<K, V>>(
    c: &mut Criterion,
    name: &str,
    key_span: K,
    ops_n: usize,
    lookups_n: usize,
) {
    let mut group = c.benchmark_group(format!("lookup/{name}"));
    group.throughput(Throughput::Elements(lookups_n as u64));

    let mut rng = ChaCha8Rng::seed_from_u64(0xFEED_5EED);
    let ops = gen_ops(key_span, ops_n, 64, &mut rng);
    let keys = gen_keys(key_span, lookups_n, &mut rng);
    let store = prepare_store::<S>(&ops);

    group.bench_function(BenchmarkId::new("boundaries", store.len()), |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for k in &keys {
                acc += u64::from(*store.lookup(k));
            }
            black_box(acc)
        })
    });
    group.finish();
}

fn store_benches(c: &mut Criterion) {
    let key_span = env::var("STEPMAP_KEY_SPAN")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1_000_000 as K);
    let ops_n = env::var("STEPMAP_OPS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10_000usize);
    let lookups_n = env::var("STEPMAP_LOOKUPS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20_000usize);

    register_assign::<BTreeMapStore<K, V>>(c, "btreemap", key_span, ops_n);
    register_assign::<CountingStore<BTreeMapStore<K, V>>>(c, "counting", key_span, ops_n);
    register_lookup::<BTreeMapStore<K, V>>(c, "btreemap", key_span, ops_n, lookups_n);
}

criterion_group!(benches, store_benches);
criterion_main!(benches);

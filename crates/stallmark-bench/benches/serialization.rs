// Stallmark - Serialization Stall Benchmark
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Serialization benchmarks for stallmark.
//!
//! Measures single-model rendering and whole-dataset passes at the standard
//! sizes, reporting output throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stallmark_bench::{generate_dataset, sizes, SeedPolicy, SerializationBenchmark};
use stallmark_xml::{serialize_document, ToXmlConfig};

const SEED: SeedPolicy = SeedPolicy::Fixed(42);

// ============================================================================
// Single Model Benchmarks
// ============================================================================

fn bench_single_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_model");

    let dataset = generate_dataset(1, SEED).expect("dataset");
    let model = &dataset.models()[0];

    for (name, config) in [
        ("compact", ToXmlConfig::default()),
        ("pretty", ToXmlConfig::pretty()),
    ] {
        let len = serialize_document(model, &config).expect("render").len();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(name, |b| {
            b.iter(|| serialize_document(black_box(model), &config))
        });
    }

    group.finish();
}

// ============================================================================
// Dataset Pass Benchmarks
// ============================================================================

fn bench_dataset_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_pass");
    group.sample_size(10);

    let benchmark = SerializationBenchmark::default();
    for size in [sizes::SMALL, sizes::MEDIUM] {
        let dataset = generate_dataset(size, SEED).expect("dataset");
        let total = benchmark.run(&dataset).expect("warmup").total_length;

        group.throughput(Throughput::Bytes(total as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &dataset, |b, dataset| {
            b.iter(|| benchmark.run(black_box(dataset)))
        });
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.sample_size(10);

    for size in [sizes::SMALL, sizes::MEDIUM] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| generate_dataset(black_box(size), SEED))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_model, bench_dataset_pass, bench_generation);
criterion_main!(benches);

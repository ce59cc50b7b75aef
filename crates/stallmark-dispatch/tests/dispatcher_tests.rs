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

//! Integration tests for the dispatcher gate.
//!
//! Workloads here are gated on a channel so the tests control exactly when
//! a worker run finishes.

use crossbeam::channel::{self, Receiver, Sender};
use proptest::prelude::*;
use stallmark_bench::{
    generate_dataset, BenchError, BenchmarkResult, Dataset, SeedPolicy, SerializationBenchmark,
};
use stallmark_dispatch::{Dispatcher, RunState, RunStatus, TriggerOutcome, Workload};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(30);

/// Counts executions and blocks each one until released.
struct GatedWorkload {
    executions: Arc<AtomicUsize>,
    threads: Arc<Mutex<Vec<ThreadId>>>,
    release: Receiver<()>,
}

impl Workload for GatedWorkload {
    fn execute(&self, dataset: &Dataset) -> Result<BenchmarkResult, BenchError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        self.threads.lock().unwrap().push(thread::current().id());
        self.release.recv_timeout(WAIT).ok();
        Ok(BenchmarkResult {
            elapsed: Duration::from_millis(1),
            total_length: dataset.len() * 10,
            object_count: dataset.len(),
        })
    }
}

struct Harness {
    dispatcher: Dispatcher<GatedWorkload>,
    executions: Arc<AtomicUsize>,
    threads: Arc<Mutex<Vec<ThreadId>>>,
    release: Sender<()>,
}

fn harness(size: usize) -> Harness {
    let executions = Arc::new(AtomicUsize::new(0));
    let threads = Arc::new(Mutex::new(Vec::new()));
    let (release, gate) = channel::unbounded();
    let workload = GatedWorkload {
        executions: Arc::clone(&executions),
        threads: Arc::clone(&threads),
        release: gate,
    };
    let dataset = Arc::new(generate_dataset(size, SeedPolicy::Fixed(1)).unwrap());
    Harness {
        dispatcher: Dispatcher::new(workload, dataset),
        executions,
        threads,
        release,
    }
}

#[test]
fn test_double_trigger_runs_once() {
    let mut h = harness(3);

    let first = h.dispatcher.trigger();
    let second = h.dispatcher.trigger();
    assert!(matches!(first, TriggerOutcome::Started(_)));
    assert_eq!(second, TriggerOutcome::AlreadyRunning);
    assert!(!h.dispatcher.trigger_enabled());
    assert_eq!(h.dispatcher.status(), RunStatus::Running);

    h.release.send(()).unwrap();
    let completion = h.dispatcher.wait_timeout(WAIT).unwrap();
    assert_eq!(completion.outcome.unwrap().object_count, 3);

    // Nothing else was queued.
    assert!(h.dispatcher.poll().is_none());
    assert!(h.dispatcher.wait_timeout(Duration::from_millis(50)).is_none());
    assert_eq!(h.executions.load(Ordering::SeqCst), 1);
    assert_eq!(h.dispatcher.runs_started(), 1);
}

#[test]
fn test_completion_is_observed_on_main_context() {
    let mut h = harness(2);
    let main = thread::current().id();

    h.dispatcher.trigger();
    h.release.send(()).unwrap();
    let completion = h.dispatcher.wait_timeout(WAIT).unwrap();

    let workers = h.threads.lock().unwrap().clone();
    assert_eq!(workers.len(), 1);
    assert_ne!(workers[0], main, "workload ran on the main context");
    assert_eq!(h.dispatcher.last_completion(), Some(&completion));
    assert_eq!(h.dispatcher.state(), RunState::Idle);
}

#[test]
fn test_gate_stays_running_until_drained() {
    let mut h = harness(1);
    h.dispatcher.trigger();
    h.release.send(()).unwrap();

    // The worker may finish at any time, but the gate only moves on drain.
    thread::sleep(Duration::from_millis(20));
    assert!(h.dispatcher.is_running());

    assert!(h.dispatcher.wait_timeout(WAIT).is_some());
    assert!(h.dispatcher.trigger_enabled());
}

#[test]
fn test_trigger_after_completion_starts_new_run() {
    let mut h = harness(1);
    for _ in 0..3 {
        assert!(matches!(h.dispatcher.trigger(), TriggerOutcome::Started(_)));
        h.release.send(()).unwrap();
        assert!(h.dispatcher.wait_timeout(WAIT).is_some());
    }
    assert_eq!(h.executions.load(Ordering::SeqCst), 3);
}

#[test]
fn test_panicking_workload_reports_failure() {
    let dataset = Arc::new(Dataset::default());
    let mut dispatcher = Dispatcher::new(
        |_: &Dataset| -> Result<BenchmarkResult, BenchError> { panic!("renderer exploded") },
        dataset,
    );

    dispatcher.trigger();
    let completion = dispatcher.wait_timeout(WAIT).unwrap();
    match completion.outcome {
        Err(BenchError::SerializationFailed { message, .. }) => {
            assert!(message.contains("renderer exploded"), "{}", message)
        }
        other => panic!("expected SerializationFailed, got {:?}", other),
    }
    assert!(dispatcher.trigger_enabled());
    assert!(matches!(dispatcher.status(), RunStatus::Failed(_)));
}

#[test]
fn test_failing_workload_surfaces_single_error() {
    let dataset = Arc::new(Dataset::default());
    let mut dispatcher = Dispatcher::new(
        |_: &Dataset| -> Result<BenchmarkResult, BenchError> {
            Err(BenchError::SerializationFailed {
                model_id: 12,
                message: "unsupported value".to_string(),
            })
        },
        dataset,
    );

    dispatcher.trigger();
    let completion = dispatcher.wait_timeout(WAIT).unwrap();
    assert_eq!(
        completion.outcome,
        Err(BenchError::SerializationFailed {
            model_id: 12,
            message: "unsupported value".to_string(),
        })
    );
    assert!(dispatcher.poll().is_none());
}

#[test]
fn test_real_benchmark_through_dispatcher() {
    let dataset = Arc::new(generate_dataset(25, SeedPolicy::Fixed(5)).unwrap());
    let expected = SerializationBenchmark::default().run(&dataset).unwrap();

    let mut dispatcher = Dispatcher::new(SerializationBenchmark::default(), Arc::clone(&dataset));
    dispatcher.trigger();
    let result = dispatcher.wait_timeout(WAIT).unwrap().outcome.unwrap();

    assert_eq!(result.object_count, 25);
    assert_eq!(result.total_length, expected.total_length);
    assert_eq!(dispatcher.dataset(), &*dataset);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: any burst of triggers while running starts exactly one run
    #[test]
    fn prop_trigger_burst_runs_once(burst in 1_usize..20) {
        let mut h = harness(0);
        let started = (0..burst)
            .filter(|_| matches!(h.dispatcher.trigger(), TriggerOutcome::Started(_)))
            .count();
        prop_assert_eq!(started, 1);

        h.release.send(()).unwrap();
        prop_assert!(h.dispatcher.wait_timeout(WAIT).is_some());
        prop_assert!(h.dispatcher.poll().is_none());
        prop_assert_eq!(h.executions.load(Ordering::SeqCst), 1);
    }
}

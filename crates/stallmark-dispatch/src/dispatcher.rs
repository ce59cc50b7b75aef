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

//! The Idle/Running gate between the main context and the worker pool.
//!
//! A [`Dispatcher`] is created on the main context and stays there: it is
//! `!Send`, so the run flag and the trigger affordance can only change on
//! that thread. Runs execute on a rayon pool and report back through a
//! crossbeam queue that only the owner drains.
//!
//! ```
//! use stallmark_bench::{generate_dataset, SeedPolicy, SerializationBenchmark};
//! use stallmark_dispatch::{Dispatcher, TriggerOutcome};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let dataset = Arc::new(generate_dataset(10, SeedPolicy::Fixed(7)).unwrap());
//! let mut dispatcher = Dispatcher::new(SerializationBenchmark::default(), dataset);
//!
//! assert!(matches!(dispatcher.trigger(), TriggerOutcome::Started(_)));
//! assert_eq!(dispatcher.trigger(), TriggerOutcome::AlreadyRunning);
//!
//! let completion = dispatcher.wait_timeout(Duration::from_secs(30)).unwrap();
//! assert_eq!(completion.outcome.unwrap().object_count, 10);
//! assert!(dispatcher.trigger_enabled());
//! ```

use crate::error::{DispatchError, Result};
use crate::status::RunStatus;
use crate::workload::Workload;
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use rayon::{ThreadPool, ThreadPoolBuilder};
use stallmark_bench::{BenchError, BenchmarkResult, Dataset};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Sequence number of a run, starting at 1 per dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u64);

impl RunId {
    /// Numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Answer to a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A run was scheduled on a worker.
    Started(RunId),
    /// A run is in flight; the trigger was dropped.
    AlreadyRunning,
}

/// Gate state, observed on the main context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No run in flight.
    #[default]
    Idle,
    /// The given run is executing on a worker.
    Running(RunId),
}

/// A finished run, delivered to the main context.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Which run finished.
    pub run: RunId,
    /// Result of the run, or the single failure that aborted it.
    pub outcome: std::result::Result<BenchmarkResult, BenchError>,
}

enum Executor {
    Global,
    Pool(Arc<ThreadPool>),
}

impl Executor {
    fn spawn<F: FnOnce() + Send + 'static>(&self, job: F) {
        match self {
            Executor::Global => rayon::spawn(job),
            Executor::Pool(pool) => pool.spawn(job),
        }
    }
}

/// Runs a [`Workload`] off the main context, at most one run at a time.
pub struct Dispatcher<W: Workload> {
    workload: Arc<W>,
    dataset: Arc<Dataset>,
    executor: Executor,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
    state: RunState,
    runs_started: u64,
    last: Option<Completion>,
    // Pins the dispatcher to the thread that created it.
    _main_context: PhantomData<Rc<()>>,
}

impl<W: Workload> Dispatcher<W> {
    /// Dispatcher running on rayon's global pool.
    pub fn new(workload: W, dataset: Arc<Dataset>) -> Self {
        let (sender, receiver) = channel::unbounded();
        Self {
            workload: Arc::new(workload),
            dataset,
            executor: Executor::Global,
            sender,
            receiver,
            state: RunState::Idle,
            runs_started: 0,
            last: None,
            _main_context: PhantomData,
        }
    }

    /// Run on a caller-provided pool instead of the global one.
    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.executor = Executor::Pool(pool);
        self
    }

    /// Run on a dedicated pool of `threads` named workers.
    pub fn with_worker_threads(self, threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(DispatchError::NoWorkers);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("stallmark-worker-{}", i))
            .build()?;
        Ok(self.with_pool(Arc::new(pool)))
    }

    /// Current gate state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether a run is in flight.
    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running(_))
    }

    /// Whether the "start run" affordance should be enabled.
    pub fn trigger_enabled(&self) -> bool {
        !self.is_running()
    }

    /// Number of runs started so far.
    pub fn runs_started(&self) -> u64 {
        self.runs_started
    }

    /// The most recent completion, if any.
    pub fn last_completion(&self) -> Option<&Completion> {
        self.last.as_ref()
    }

    /// The frozen dataset every run reads.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Status line for the presentation layer.
    pub fn status(&self) -> RunStatus {
        match (&self.state, &self.last) {
            (RunState::Running(_), _) => RunStatus::Running,
            (RunState::Idle, Some(completion)) => RunStatus::from(completion),
            (RunState::Idle, None) => RunStatus::Ready,
        }
    }

    /// Start a run on a worker unless one is already in flight.
    ///
    /// Re-entrant triggers are dropped, never queued.
    pub fn trigger(&mut self) -> TriggerOutcome {
        if let RunState::Running(current) = self.state {
            debug!(run = %current, "trigger ignored, run already in progress");
            return TriggerOutcome::AlreadyRunning;
        }

        let run = self.begin();
        let workload = Arc::clone(&self.workload);
        let dataset = Arc::clone(&self.dataset);
        let sender = self.sender.clone();

        self.executor.spawn(move || {
            let outcome = execute_guarded(&*workload, &dataset);
            if sender.send(Completion { run, outcome }).is_err() {
                warn!(run = %run, "dispatcher dropped before run completed");
            }
        });

        TriggerOutcome::Started(run)
    }

    /// Execute a run on the calling thread, blocking it until done.
    ///
    /// This is the stalling variant: the main context does no other work
    /// while the run executes. Returns `None` while a worker run is in flight.
    pub fn run_inline(&mut self) -> Option<Completion> {
        if self.is_running() {
            debug!("inline run ignored, run already in progress");
            return None;
        }
        let run = self.begin();
        let outcome = execute_guarded(&*self.workload, &self.dataset);
        Some(self.finish(Completion { run, outcome }))
    }

    /// Drain one completion without blocking.
    pub fn poll(&mut self) -> Option<Completion> {
        let completion = self.receiver.try_recv().ok()?;
        Some(self.finish(completion))
    }

    /// Block until the in-flight run completes or `timeout` elapses.
    ///
    /// Returns `None` immediately when idle with nothing queued.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Option<Completion> {
        if let Some(completion) = self.poll() {
            return Some(completion);
        }
        if !self.is_running() {
            return None;
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(completion) => Some(self.finish(completion)),
            Err(RecvTimeoutError::Timeout) => {
                debug!(timeout_ms = timeout.as_millis() as u64, "run still in flight");
                None
            }
            // We hold a sender, so the queue never disconnects.
            Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    fn begin(&mut self) -> RunId {
        self.runs_started += 1;
        let run = RunId(self.runs_started);
        self.state = RunState::Running(run);
        info!(run = %run, objects = self.dataset.len(), "benchmark run started");
        run
    }

    fn finish(&mut self, completion: Completion) -> Completion {
        match &completion.outcome {
            Ok(result) => info!(
                run = %completion.run,
                objects = result.object_count,
                total_length = result.total_length,
                elapsed_ms = result.elapsed.as_millis() as u64,
                "benchmark run completed"
            ),
            Err(err) => warn!(run = %completion.run, error = %err, "benchmark run failed"),
        }
        self.state = RunState::Idle;
        self.last = Some(completion.clone());
        completion
    }
}

fn execute_guarded<W: Workload + ?Sized>(
    workload: &W,
    dataset: &Dataset,
) -> std::result::Result<BenchmarkResult, BenchError> {
    let started = Instant::now();
    panic::catch_unwind(AssertUnwindSafe(|| workload.execute(dataset))).unwrap_or_else(|payload| {
        Err(BenchError::SerializationFailed {
            model_id: 0,
            message: format!(
                "worker panicked after {} ms: {}",
                started.elapsed().as_millis(),
                panic_message(payload.as_ref())
            ),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}

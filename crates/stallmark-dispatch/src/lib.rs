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

//! Main-context dispatch for stallmark benchmark runs.
//!
//! Two execution contexts matter here. The main context owns the
//! [`Dispatcher`], ticks the [`Orbit`] heartbeat and must never block on a
//! benchmark. Worker contexts come from a rayon pool and run one
//! [`Workload`] each. Completions travel back over a single-consumer queue
//! that only the main context drains, so the Idle/Running gate is only ever
//! mutated there.
//!
//! # Modules
//!
//! - [`dispatcher`]: the gate, the worker hand-off and the completion queue
//! - [`workload`]: the job seam, implemented by `SerializationBenchmark`
//! - [`status`]: status text for the presentation layer
//! - [`heartbeat`]: orbit angle and frame-gap statistics

#![warn(missing_docs)]

pub mod dispatcher;
pub mod error;
pub mod heartbeat;
pub mod status;
pub mod workload;

pub use dispatcher::{Completion, Dispatcher, RunId, RunState, TriggerOutcome};
pub use error::{DispatchError, Result};
pub use heartbeat::{FrameStats, Orbit, ORBIT_PERIOD};
pub use status::{RunStatus, StatusTone, RUNNING_TEXT};
pub use workload::Workload;

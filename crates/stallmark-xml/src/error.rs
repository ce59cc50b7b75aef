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

//! Error types for markup rendering

use thiserror::Error;

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, XmlError>;

/// Errors that can occur while rendering a node tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XmlError {
    /// The underlying writer rejected an event.
    ///
    /// # Example
    ///
    /// ```text
    /// Failed to write start element <SampleData>: I/O error
    /// ```
    #[error("Failed to write {context}: {message}")]
    Write {
        /// Description of what failed to write
        context: String,
        /// Underlying error message
        message: String,
    },

    /// The rendered bytes were not valid UTF-8.
    #[error("Invalid UTF-8 in XML output: {0}")]
    InvalidUtf8(String),
}

impl XmlError {
    pub(crate) fn write(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Write {
            context: context.into(),
            message: err.to_string(),
        }
    }
}

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

//! Error types for the data model.

use thiserror::Error;

/// Result type for model construction.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while building model values.
///
/// Serialization itself cannot fail at this layer; these only guard the
/// invariants of individual fields.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A price was negative, NaN, infinite or too large for fixed point.
    #[error("Invalid price {value}: {reason}")]
    InvalidPrice {
        /// The rejected input
        value: f64,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A priority outside 1..=10.
    #[error("Priority {0} is outside 1..=10")]
    PriorityOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::InvalidPrice {
            value: -1.0,
            reason: "must not be negative",
        };
        let msg = err.to_string();
        assert!(msg.contains("-1"));
        assert!(msg.contains("must not be negative"));

        assert_eq!(
            ModelError::PriorityOutOfRange(11).to_string(),
            "Priority 11 is outside 1..=10"
        );
    }
}

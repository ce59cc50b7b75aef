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

//! Error types for dataset generation and benchmark runs.

use thiserror::Error;

/// Maximum dataset size (10 million models).
///
/// Each model renders to roughly 1.5 KB, so this already approaches the
/// memory a single benchmark pass can hold.
pub const MAX_DATASET_SIZE: usize = 10_000_000;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during generation or benchmarking
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchError {
    /// A requested parameter is out of its domain (e.g. a negative size).
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Dataset size exceeds maximum allowed limit
    #[error("Dataset size {requested} exceeds maximum allowed limit of {max}")]
    DatasetTooLarge {
        /// Requested size
        requested: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// A generated record violated a model invariant.
    #[error("Failed to generate model {model_id}: {message}")]
    GenerationFailed {
        /// Id of the record being generated
        model_id: u32,
        /// Error message
        message: String,
    },

    /// Serializing a record failed; the whole run is abandoned.
    #[error("Serialization failed at model {model_id}: {message}")]
    SerializationFailed {
        /// Id of the record that failed, 0 when unknown
        model_id: u32,
        /// Error message
        message: String,
    },
}

/// Validate that a dataset size is within acceptable limits
///
/// # Examples
///
/// ```
/// use stallmark_bench::error::{validate_dataset_size, MAX_DATASET_SIZE};
///
/// assert!(validate_dataset_size(1000).is_ok());
/// assert!(validate_dataset_size(MAX_DATASET_SIZE + 1).is_err());
/// ```
#[inline]
pub fn validate_dataset_size(size: usize) -> Result<()> {
    if size > MAX_DATASET_SIZE {
        Err(BenchError::DatasetTooLarge {
            requested: size,
            max: MAX_DATASET_SIZE,
        })
    } else {
        Ok(())
    }
}

/// Turn a user-supplied (possibly negative) size into a model count.
///
/// Negative sizes are an [`BenchError::InvalidArgument`]; callers running
/// the demo treat that as an empty dataset instead of failing.
pub fn resolve_dataset_size(requested: i64) -> Result<usize> {
    if requested < 0 {
        return Err(BenchError::InvalidArgument {
            parameter: "dataset_size".to_string(),
            reason: format!("must not be negative (got {})", requested),
        });
    }
    let size = usize::try_from(requested).map_err(|_| BenchError::DatasetTooLarge {
        requested: usize::MAX,
        max: MAX_DATASET_SIZE,
    })?;
    validate_dataset_size(size)?;
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dataset_size() {
        assert!(validate_dataset_size(0).is_ok());
        assert!(validate_dataset_size(MAX_DATASET_SIZE).is_ok());
        assert_eq!(
            validate_dataset_size(MAX_DATASET_SIZE + 1),
            Err(BenchError::DatasetTooLarge {
                requested: MAX_DATASET_SIZE + 1,
                max: MAX_DATASET_SIZE,
            })
        );
    }

    #[test]
    fn test_resolve_dataset_size() {
        assert_eq!(resolve_dataset_size(0), Ok(0));
        assert_eq!(resolve_dataset_size(40_000), Ok(40_000));
        assert!(matches!(
            resolve_dataset_size(-1),
            Err(BenchError::InvalidArgument { ref parameter, .. }) if parameter == "dataset_size"
        ));
        assert!(matches!(
            resolve_dataset_size(MAX_DATASET_SIZE as i64 + 1),
            Err(BenchError::DatasetTooLarge { .. })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = BenchError::SerializationFailed {
            model_id: 12,
            message: "writer closed".to_string(),
        };
        assert_eq!(err.to_string(), "Serialization failed at model 12: writer closed");

        let err = BenchError::InvalidArgument {
            parameter: "iterations".to_string(),
            reason: "must be positive".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("iterations"));
        assert!(msg.contains("must be positive"));
    }
}

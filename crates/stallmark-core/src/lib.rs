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

//! Stallmark core data model
//!
//! Provides the in-memory records of the serialization workload and the
//! generic node tree they serialize into.
//!
//! # Model
//!
//! - [`SubItem`]: leaf record (code, value, category)
//! - [`NestedObject`]: description, priority and an ordered run of sub-items
//! - [`SampleModel`]: the heavy record; scalars, tags, a heterogeneous
//!   property list and exactly one nested object
//!
//! Every record implements [`ToNode`]. Serialization is a pure read: it
//! builds a fresh [`Node`] tree and never touches the record.
//!
//! # Examples
//!
//! ```rust
//! use stallmark_core::{NestedObject, SubItem, ToNode};
//!
//! let details = NestedObject::new(
//!     "Essential everyday item",
//!     3,
//!     vec![SubItem::new("CODE_1234", 12.5, "Books")],
//! )?;
//!
//! let node = details.to_node();
//! assert_eq!(node.name(), "NestedObject");
//! assert_eq!(node.children().len(), 3);
//! # Ok::<(), stallmark_core::ModelError>(())
//! ```

mod error;
mod model;
mod node;
mod value;

pub use error::{ModelError, Result};
pub use model::{NestedObject, Property, SampleModel, SubItem};
pub use node::{Attribute, Node, ToNode};
pub use value::{format_timestamp, truncate_to_ticks, Price, PropertyValue, Timestamp};

/// Format a boolean the way every stallmark document does.
#[inline]
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

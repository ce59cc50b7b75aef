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

//! Stallmark markup rendering
//!
//! Renders [`Node`](stallmark_core::Node) trees as XML text.
//!
//! # Output contract
//!
//! - One root element per document, no XML declaration, no namespace
//! - Compact by default: no whitespace between elements
//! - Element and attribute order exactly as in the node tree
//! - Text escapes `<`, `>` and `&`; attribute values additionally escape quotes
//! - No character validation: control characters are written verbatim
//! - Childless, textless nodes are self-closed (`<Items/>`)
//!
//! # Examples
//!
//! ```rust
//! use stallmark_core::{NestedObject, SubItem};
//! use stallmark_xml::{serialize_document, ToXmlConfig};
//!
//! let nested = NestedObject::new("Budget-friendly option", 1, vec![])?;
//! let xml = serialize_document(&nested, &ToXmlConfig::default())?;
//! assert_eq!(
//!     xml,
//!     "<NestedObject><Description>Budget-friendly option</Description>\
//!      <Priority>1</Priority><Items/></NestedObject>"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod to_xml;

pub use error::{Result, XmlError};
pub use to_xml::{render, serialize_document, to_markup, ToXmlConfig};

use stallmark_core::ToNode;

/// Render a record with the default (compact) configuration.
pub fn to_xml_string<T: ToNode + ?Sized>(value: &T) -> Result<String> {
    serialize_document(value, &ToXmlConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stallmark_core::SubItem;

    #[test]
    fn test_to_xml_string_uses_compact_output() {
        let xml = to_xml_string(&SubItem::new("CODE_1000", 2.0, "Toys")).unwrap();
        assert_eq!(
            xml,
            "<SubItem><Code>CODE_1000</Code><Value>2</Value><Category>Toys</Category></SubItem>"
        );
    }
}

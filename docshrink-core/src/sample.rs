// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Sample records for retrieval/context datasets
//!
//! A sample is an open record: besides the three recognized fields, any
//! other keys in the input are carried through the transform verbatim via
//! the flattened `extra` map. Documents themselves are opaque JSON values;
//! the shrink transform never looks inside them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One sample of a retrieval/context dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sample {
    /// Ordered document list. Absent in the input stays absent in the
    /// output; an empty list stays empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<Value>>,

    /// Count of documents attached to the sample. Always rewritten by the
    /// transform to match the retained document count.
    #[serde(default)]
    pub context_length: u64,

    /// Index of the ground-truth relevant document. The transform assumes
    /// the relevant document sits at index 0 and resets this to 0 whenever
    /// the field is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_document_index: Option<u64>,

    /// All unrecognized fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Sample {
    /// Create a sample holding the given documents, with `context_length`
    /// set to match
    pub fn new(documents: Vec<Value>) -> Self {
        Self {
            context_length: documents.len() as u64,
            documents: Some(documents),
            relevant_document_index: None,
            extra: Map::new(),
        }
    }

    /// Number of documents currently attached (0 when the field is absent)
    pub fn document_count(&self) -> usize {
        self.documents.as_ref().map_or(0, Vec::len)
    }
}

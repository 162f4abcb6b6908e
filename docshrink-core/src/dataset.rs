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

//! Dataset file loading and writing
//!
//! Datasets are JSON files holding either one sample object or an array of
//! sample objects. A single object is normalized to a one-element list on
//! load. Output is always an array, pretty-printed with two-space indent
//! and non-ASCII characters preserved verbatim.

use crate::error::{DatasetError, Result};
use crate::sample::Sample;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load samples from a JSON file
///
/// Fails fatally on unreadable files, invalid JSON, or a top-level value
/// that is neither an object nor an array of objects.
pub fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = match value {
        Value::Array(entries) => entries,
        object @ Value::Object(_) => vec![object],
        other => {
            return Err(DatasetError::Schema {
                path: path.to_path_buf(),
                found: json_type_name(&other),
            })
        }
    };

    debug!(count = entries.len(), path = %path.display(), "loaded dataset entries");

    entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value(entry).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

/// Write samples to a JSON file as a pretty-printed array
pub fn write_samples(path: &Path, samples: &[Sample]) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(samples).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, rendered).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(count = samples.len(), path = %path.display(), "wrote dataset");
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

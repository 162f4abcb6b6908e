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

//! Configuration for the shrink transform

use serde::{Deserialize, Serialize};

/// Default number of documents to keep per sample
pub const DEFAULT_TARGET_LENGTH: usize = 10;

/// Default seed for the deterministic random generator
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for a shrink run
///
/// `target_length` is the desired maximum document count per sample. The
/// first document is always retained, so values of 0 or 1 both collapse a
/// sample down to its first document. There is no validation; the clamping
/// in the transform handles any value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShrinkConfig {
    /// Desired maximum document count per sample
    pub target_length: usize,

    /// Seed for the random generator shared across the whole run
    pub seed: u64,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_TARGET_LENGTH,
            seed: DEFAULT_SEED,
        }
    }
}

impl ShrinkConfig {
    /// Create a config with an explicit target length and seed
    pub fn new(target_length: usize, seed: u64) -> Self {
        Self {
            target_length,
            seed,
        }
    }
}

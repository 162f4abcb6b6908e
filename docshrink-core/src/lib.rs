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

//! Docshrink Core
//!
//! Data model and transform for shrinking per-sample document lists in
//! retrieval/context evaluation datasets. Each sample keeps its first
//! (relevant) document and a seeded uniform subsample of the rest, so a
//! dataset can be cut down to a target context length reproducibly.

pub mod config;
pub mod dataset;
pub mod error;
pub mod sample;
pub mod shrink;

pub use config::{ShrinkConfig, DEFAULT_SEED, DEFAULT_TARGET_LENGTH};
pub use dataset::{load_samples, write_samples};
pub use error::{DatasetError, Result};
pub use sample::Sample;
pub use shrink::ContextShrinker;

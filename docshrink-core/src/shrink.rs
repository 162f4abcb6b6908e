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

//! Document subsampling transform
//!
//! Shrinks each sample's document list down to a target length. The first
//! document is always retained (it is assumed to be the relevant one) and
//! the remainder are drawn uniformly without replacement, in original
//! order, from a seeded generator shared across the whole run. Runs with
//! the same seed over the same samples in the same order reproduce their
//! output exactly.

use crate::config::ShrinkConfig;
use crate::sample::Sample;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use tracing::debug;

/// Applies the shrink transform across a run
///
/// Holds the single seeded generator for the run. The generator advances
/// once per sampling draw, so the output for any sample depends on the
/// seed and on how many draws preceded it in the run.
pub struct ContextShrinker {
    rng: StdRng,
    target_length: usize,
}

impl ContextShrinker {
    /// Create a shrinker with a fresh generator seeded from the config
    pub fn new(config: &ShrinkConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            target_length: config.target_length,
        }
    }

    /// Shrink one sample's document list to at most `target_length` entries
    ///
    /// Index 0 is always retained. When the sample has no documents (absent
    /// or empty), only `context_length` is normalized to 0. The relative
    /// order of retained documents matches the input; duplicates are not
    /// deduplicated since sampling operates purely on indices.
    pub fn shrink_sample(&mut self, mut sample: Sample) -> Sample {
        let mut docs = match sample.documents.take() {
            Some(docs) if !docs.is_empty() => docs,
            other => {
                sample.context_length = 0;
                sample.documents = other;
                return sample;
            }
        };

        let remaining = docs.len() - 1;
        let keep_extra = self.target_length.saturating_sub(1).min(remaining);

        let mut kept_indices = Vec::with_capacity(keep_extra + 1);
        kept_indices.push(0usize);

        if keep_extra > 0 {
            // Draw from [1, len) by sampling offsets into the tail
            let mut drawn: Vec<usize> = rand::seq::index::sample(&mut self.rng, remaining, keep_extra)
                .into_iter()
                .map(|offset| offset + 1)
                .collect();
            drawn.sort_unstable();
            kept_indices.extend(drawn);
        }

        debug!(
            original = docs.len(),
            kept = kept_indices.len(),
            "shrunk sample documents"
        );

        let shrunk: Vec<Value> = kept_indices.iter().map(|&i| docs[i].take()).collect();

        sample.context_length = shrunk.len() as u64;
        sample.documents = Some(shrunk);
        if sample.relevant_document_index.is_some() {
            sample.relevant_document_index = Some(0);
        }
        sample
    }

    /// Shrink a whole run of samples in order with the shared generator
    pub fn shrink_all(&mut self, samples: Vec<Sample>) -> Vec<Sample> {
        samples
            .into_iter()
            .map(|sample| self.shrink_sample(sample))
            .collect()
    }
}

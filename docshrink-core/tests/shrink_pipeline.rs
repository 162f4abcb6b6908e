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

//! End-to-end load -> shrink -> write pipeline tests

use docshrink_core::{load_samples, write_samples, ContextShrinker, ShrinkConfig};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn dataset_json(sample_count: usize, docs_per_sample: usize) -> String {
    let samples: Vec<_> = (0..sample_count)
        .map(|s| {
            json!({
                "documents": (0..docs_per_sample)
                    .map(|d| json!({"sample": s, "doc": d}))
                    .collect::<Vec<_>>(),
                "context_length": docs_per_sample,
                "relevant_document_index": 0,
                "question": format!("question {s}")
            })
        })
        .collect();
    serde_json::to_string(&samples).unwrap()
}

#[test]
fn test_full_pipeline_shrinks_every_sample() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.json");
    let output = temp_dir.path().join("output.json");
    fs::write(&input, dataset_json(4, 25)).unwrap();

    let samples = load_samples(&input).unwrap();
    let mut shrinker = ContextShrinker::new(&ShrinkConfig::new(10, 42));
    let shrunk = shrinker.shrink_all(samples);
    write_samples(&output, &shrunk).unwrap();

    let reloaded = load_samples(&output).unwrap();
    assert_eq!(reloaded.len(), 4);
    for (s, sample) in reloaded.iter().enumerate() {
        let docs = sample.documents.as_ref().unwrap();
        assert_eq!(docs.len(), 10);
        assert_eq!(docs[0], json!({"sample": s, "doc": 0}));
        assert_eq!(sample.context_length, 10);
        assert_eq!(sample.relevant_document_index, Some(0));
        assert_eq!(
            sample.extra.get("question"),
            Some(&json!(format!("question {s}")))
        );
    }
}

#[test]
fn test_reruns_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.json");
    fs::write(&input, dataset_json(6, 40)).unwrap();

    let mut outputs = Vec::new();
    for run in 0..2 {
        let output = temp_dir.path().join(format!("output-{run}.json"));
        let samples = load_samples(&input).unwrap();
        let mut shrinker = ContextShrinker::new(&ShrinkConfig::new(8, 1234));
        write_samples(&output, &shrinker.shrink_all(samples)).unwrap();
        outputs.push(fs::read(&output).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_single_object_input_yields_one_element_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("single.json");
    let output = temp_dir.path().join("output.json");
    fs::write(
        &input,
        r#"{"documents": [{"d": 0}, {"d": 1}, {"d": 2}], "context_length": 3}"#,
    )
    .unwrap();

    let samples = load_samples(&input).unwrap();
    let mut shrinker = ContextShrinker::new(&ShrinkConfig::default());
    write_samples(&output, &shrinker.shrink_all(samples)).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let array = written.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["documents"].as_array().unwrap().len(), 3);
    assert_eq!(array[0]["context_length"], json!(3));
}

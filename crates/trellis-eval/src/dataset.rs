//! QA dataset loading and sampling.
//!
//! A dataset directory holds `*.json` files, each a JSON array of QA
//! records. Records missing `question` or `answer` are skipped, as are
//! files that cannot be read or parsed; only a missing or empty
//! directory is an error.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::Value;
use tracing::{debug, info, warn};
use trellis_core::config::EvalConfig;
use trellis_core::errors::EvalError;
use trellis_core::models::QaRecord;

/// Load the configured dataset directory and apply sampling.
pub fn load(config: &EvalConfig) -> Result<Vec<QaRecord>, EvalError> {
    let records = load_dir(Path::new(&config.dataset_dir))?;
    if config.scan_all {
        return Ok(records);
    }
    Ok(sample(records, config.sample_size, config.seed))
}

/// Load every `*.json` file under `dir`, in file-name order.
///
/// The fixed order makes seeded sampling reproducible across platforms.
pub fn load_dir(dir: &Path) -> Result<Vec<QaRecord>, EvalError> {
    let entries = fs::read_dir(dir).map_err(|_| EvalError::DatasetNotFound {
        path: dir.display().to_string(),
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(EvalError::DatasetNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut records = Vec::new();
    for path in &paths {
        match read_file(path) {
            Ok(mut file_records) => records.append(&mut file_records),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping dataset file");
            }
        }
    }

    info!(
        files = paths.len(),
        records = records.len(),
        "loaded QA datasets"
    );
    Ok(records)
}

/// Randomly sample down to `limit` records. Seeded runs are
/// reproducible; short inputs pass through untouched.
pub fn sample(records: Vec<QaRecord>, limit: usize, seed: Option<u64>) -> Vec<QaRecord> {
    if records.len() <= limit {
        return records;
    }
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    records.choose_multiple(&mut rng, limit).cloned().collect()
}

fn read_file(path: &Path) -> Result<Vec<QaRecord>, EvalError> {
    let text = fs::read_to_string(path).map_err(|e| EvalError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|e| EvalError::MalformedDataset {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let items = match value.as_array() {
        Some(items) => items,
        None => {
            return Err(EvalError::MalformedDataset {
                path: path.display().to_string(),
                reason: "top-level JSON is not an array".to_string(),
            });
        }
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<QaRecord>(item.clone()) {
            Ok(mut record) => {
                record.source_file = file_name.clone();
                records.push(record);
            }
            Err(error) => {
                debug!(file = %file_name, %error, "skipping malformed QA record");
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_dataset(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn record(i: usize) -> QaRecord {
        QaRecord {
            question: format!("q{i}"),
            answer: format!("a{i}"),
            question_type: None,
            triple: None,
            schema: None,
            source_text: String::new(),
            source_file: String::new(),
        }
    }

    #[test]
    fn loads_records_and_attaches_source_file() {
        let dir = TempDir::new().unwrap();
        write_dataset(
            &dir,
            "leaders.json",
            r#"[
                {"question": "Who is the leader of Belgium?",
                 "answer": "Philippe of Belgium",
                 "question_type": "sub",
                 "triple": ["Belgium", "leader", "Philippe_of_Belgium"]},
                {"question": "Incomplete record"},
                {"question": "What is Schiphol?", "answer": "An airport"}
            ]"#,
        );

        let records = load_dir(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.source_file == "leaders.json"));
        assert_eq!(records[0].answer, "Philippe of Belgium");
    }

    #[test]
    fn merges_files_in_name_order() {
        let dir = TempDir::new().unwrap();
        write_dataset(&dir, "b.json", r#"[{"question": "qb", "answer": "ab"}]"#);
        write_dataset(&dir, "a.json", r#"[{"question": "qa", "answer": "aa"}]"#);

        let records = load_dir(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source_file, "a.json");
        assert_eq!(records[1].source_file, "b.json");
    }

    #[test]
    fn unparseable_file_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        write_dataset(&dir, "bad.json", "{not json");
        write_dataset(&dir, "good.json", r#"[{"question": "q", "answer": "a"}]"#);

        let records = load_dir(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source_file, "good.json");
    }

    #[test]
    fn non_array_top_level_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_dataset(&dir, "map.json", r#"{"question": "q", "answer": "a"}"#);
        write_dataset(&dir, "rows.json", r#"[{"question": "q", "answer": "a"}]"#);

        let records = load_dir(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_dir_is_dataset_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            load_dir(&missing),
            Err(EvalError::DatasetNotFound { .. })
        ));
    }

    #[test]
    fn dir_without_json_files_is_dataset_not_found() {
        let dir = TempDir::new().unwrap();
        write_dataset(&dir, "notes.txt", "not a dataset");
        assert!(matches!(
            load_dir(dir.path()),
            Err(EvalError::DatasetNotFound { .. })
        ));
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let records: Vec<QaRecord> = (0..30).map(record).collect();

        let first = sample(records.clone(), 5, Some(7));
        let second = sample(records.clone(), 5, Some(7));
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);

        // Short inputs pass through untouched.
        let few = sample(records[..3].to_vec(), 5, Some(7));
        assert_eq!(few.len(), 3);
    }

    #[test]
    fn load_honors_scan_all_and_sample_size() {
        let dir = TempDir::new().unwrap();
        write_dataset(
            &dir,
            "many.json",
            r#"[
                {"question": "q1", "answer": "a1"},
                {"question": "q2", "answer": "a2"},
                {"question": "q3", "answer": "a3"}
            ]"#,
        );

        let base = EvalConfig {
            dataset_dir: dir.path().display().to_string(),
            sample_size: 1,
            seed: Some(1),
            ..EvalConfig::default()
        };

        let sampled = load(&base).unwrap();
        assert_eq!(sampled.len(), 1);

        let all = load(&EvalConfig {
            scan_all: true,
            ..base
        })
        .unwrap();
        assert_eq!(all.len(), 3);
    }
}

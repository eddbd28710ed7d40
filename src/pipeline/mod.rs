//! Metrics aggregation pipeline
//!
//! Runs the extractor over every discovered file, in order, and folds the
//! per-file facts into one [`MetricsSummary`]:
//! 1. Parse each file into structural facts
//! 2. Add its counts to the running totals
//! 3. Append its function lengths, in definition order
//! 4. Record its import count in the dependency map
//!
//! Files that fail to read or parse contribute nothing and the run keeps
//! going; they never appear in the dependency map.

use crate::models::MetricsSummary;
use crate::parsers::python;
use std::path::PathBuf;
use tracing::debug;

/// Aggregate structural facts across `files`, preserving their order.
pub fn aggregate(files: &[PathBuf]) -> MetricsSummary {
    let mut summary = MetricsSummary::default();

    for file in files {
        let facts = match python::parse(file) {
            Ok(facts) => facts,
            Err(e) => {
                debug!("skipping {}: {}", file.display(), e);
                continue;
            }
        };

        summary.functions += facts.functions.len();
        summary.classes += facts.classes;
        summary.imports += facts.imports;
        summary
            .function_lengths
            .extend(facts.functions.iter().map(|span| span.length()));
        summary.dependencies.insert(file.clone(), facts.imports);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_aggregates_counts_across_files() {
        let dir = tempdir().expect("should create tempdir");
        let first = dir.path().join("first.py");
        let second = dir.path().join("second.py");
        fs::write(
            &first,
            "import os\n\ndef a():\n    return 1\n\ndef b():\n    return 2\n",
        )
        .expect("write");
        fs::write(&second, "import sys\nimport json\n\nclass C:\n    pass\n").expect("write");

        let summary = aggregate(&[first.clone(), second.clone()]);

        assert_eq!(summary.functions, 2);
        assert_eq!(summary.classes, 1);
        assert_eq!(summary.imports, 3);
        assert_eq!(summary.function_lengths, vec![2, 2]);
        assert_eq!(summary.dependencies.get(&first), Some(&1));
        assert_eq!(summary.dependencies.get(&second), Some(&2));
        assert_eq!(summary.dependencies.values().sum::<usize>(), summary.imports);
    }

    #[test]
    fn test_function_count_matches_length_list() {
        let dir = tempdir().expect("should create tempdir");
        let file = dir.path().join("mod.py");
        fs::write(
            &file,
            "def outer():\n    def inner():\n        pass\n    return inner\n",
        )
        .expect("write");

        let summary = aggregate(&[file]);
        assert_eq!(summary.functions, summary.function_lengths.len());
        assert_eq!(summary.functions, 2);
    }

    #[test]
    fn test_unparseable_file_contributes_nothing() {
        let dir = tempdir().expect("should create tempdir");
        let good = dir.path().join("good.py");
        let bad = dir.path().join("bad.py");
        fs::write(&good, "import os\n\ndef ok():\n    return 1\n").expect("write");
        fs::write(&bad, "def broken(:\n    return 1\n").expect("write");

        let summary = aggregate(&[good.clone(), bad.clone()]);

        assert_eq!(summary.functions, 1);
        assert_eq!(summary.imports, 1);
        assert!(summary.dependencies.contains_key(&good));
        assert!(!summary.dependencies.contains_key(&bad));
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let dir = tempdir().expect("should create tempdir");
        let ghost = dir.path().join("ghost.py");

        let summary = aggregate(&[ghost]);
        assert_eq!(summary.functions, 0);
        assert!(summary.dependencies.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        let summary = aggregate(&[]);

        assert_eq!(summary.functions, 0);
        assert_eq!(summary.classes, 0);
        assert_eq!(summary.imports, 0);
        assert!(summary.function_lengths.is_empty());
        assert!(summary.dependencies.is_empty());
    }

    #[test]
    fn test_dependency_map_keeps_discovery_order() {
        let dir = tempdir().expect("should create tempdir");
        let z = dir.path().join("z.py");
        let a = dir.path().join("a.py");
        fs::write(&z, "import os\n").expect("write");
        fs::write(&a, "import sys\n").expect("write");

        let summary = aggregate(&[z.clone(), a.clone()]);
        let keys: Vec<&PathBuf> = summary.dependencies.keys().collect();
        assert_eq!(keys, vec![&z, &a]);
    }
}

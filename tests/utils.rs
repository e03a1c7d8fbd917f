use drogon_scaffold::cli::{run, Args};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The ten entries every generated service must contain, relative to the service root.
pub const EXPECTED_ENTRIES: [&str; 10] = [
    "Dockerfile",
    "CMakeLists.txt",
    "main.cpp",
    "source/{service}.cpp",
    "controller/{service}.hpp",
    "config/local/.env",
    "config/local/drogon_config.json",
    "config/local/params.json",
    "config/docker",
    "include/f_http",
];

/// Runs the CLI entry point against `base_path`.
pub fn run_scaffold(
    base_path: &Path,
    service_name: &str,
    cmake_target: &str,
    cpp_name: &str,
    dry_run: bool,
) -> drogon_scaffold::error::Result<()> {
    let args = Args {
        cpp_name: cpp_name.to_string(),
        cmake_target: cmake_target.to_string(),
        path: base_path.to_path_buf(),
        service_name: service_name.to_string(),
        verbose: 2,
        dry_run,
    };
    run(args)
}

/// Relative paths of every file below `root`.
pub fn collect_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Reads every generated file into memory, keyed by its path relative to `root`.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, String)> {
    collect_files(root)
        .into_iter()
        .map(|rel| {
            let content = fs::read_to_string(root.join(&rel)).unwrap();
            (rel, content)
        })
        .collect()
}

/// Asserts that `actual` holds exactly the files under `expected`, with identical content.
/// Prints the first differing file before failing.
pub fn assert_matches_expected(actual: &Path, expected: &Path) {
    let actual_files = collect_files(actual);
    let expected_files = collect_files(expected);
    assert_eq!(
        actual_files, expected_files,
        "file sets differ between {actual:?} and {expected:?}"
    );

    for rel in &expected_files {
        let actual_content = fs::read_to_string(actual.join(rel)).unwrap();
        let expected_content = fs::read_to_string(expected.join(rel)).unwrap();
        if actual_content != expected_content {
            println!("\n=== {rel:?} ===");
            println!("--- Actual content:\n{actual_content}");
            println!("--- Expected content:\n{expected_content}");
            panic!("Content of {rel:?} differs. See above for details.");
        }
    }
}

//! Follow writes must stay behind the follow repository so the
//! conflict-tolerant insert is the only path that creates edges.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        if let Ok(read_dir) = fs::read_dir(&dir) {
            for entry in read_dir.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    stack.push(path);
                } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
                    files.push(path);
                }
            }
        }
    }
    files
}

fn file_contains(path: &Path, needle: &str) -> bool {
    fs::read_to_string(path)
        .map(|c| c.contains(needle))
        .unwrap_or(false)
}

#[test]
fn follow_writes_only_from_follow_repo() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");

    let allowed = ["src/db/follow_repo.rs"];

    let mut offenders = Vec::new();
    for file in collect_rs_files(&src_root) {
        let path_str = file.to_string_lossy().replace('\\', "/");
        if allowed.iter().any(|a| path_str.ends_with(a)) {
            continue;
        }
        if file_contains(&file, "INSERT INTO follows") || file_contains(&file, "DELETE FROM follows")
        {
            offenders.push(path_str.to_string());
        }
    }

    if !offenders.is_empty() {
        panic!(
            "Follow edge writes must go through db::follow_repo only. Offenders: {:?}",
            offenders
        );
    }
}

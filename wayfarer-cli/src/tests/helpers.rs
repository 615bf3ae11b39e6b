//! Graph files and workspace helpers for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// The four-node square used across the workspace, as a graph document.
pub(super) const SQUARE_JSON: &str = r#"{
    "nodes": [
        {"id": 1, "lat": 0.0, "lon": 0.0},
        {"id": 2, "lat": 0.0, "lon": 0.001},
        {"id": 3, "lat": 0.001, "lon": 0.001},
        {"id": 4, "lat": 0.001, "lon": 0.0}
    ],
    "edges": [
        {"from": 1, "to": 2, "cost": 1.0},
        {"from": 2, "to": 3, "cost": 2.0},
        {"from": 3, "to": 4, "cost": 1.0},
        {"from": 4, "to": 1, "cost": 3.0},
        {"from": 1, "to": 3, "cost": 4.0},
        {"from": 2, "to": 4, "cost": 4.0, "drivable": false}
    ]
}"#;

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn square(&self) -> Utf8PathBuf {
        let path = self.path("square.json");
        write_utf8(&path, SQUARE_JSON.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

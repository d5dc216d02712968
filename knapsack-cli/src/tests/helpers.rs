//! Test helpers for writing instance files into temporary workspaces.

use camino::Utf8PathBuf;
use knapsack_core::{Instance, Item};
use tempfile::TempDir;

/// Temporary directory with UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Save the textbook three-item instance under `project`.
    pub(super) fn write_classic(&self, name: &str, project: &str) -> Utf8PathBuf {
        let instance = Instance::new(
            project,
            50,
            vec![
                Item::new("A", 60, 10),
                Item::new("B", 100, 20),
                Item::new("C", 120, 30),
            ],
        )
        .expect("valid instance");
        let path = self.path(name);
        knapsack_data::save_instance(&path, &instance).expect("save instance");
        path
    }
}

/// Captured stdout split into lines.
pub(super) fn output_lines(buffer: &[u8]) -> Vec<String> {
    String::from_utf8(buffer.to_vec())
        .expect("stdout utf-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

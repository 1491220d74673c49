use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary resolution root with an `etc` subdirectory, handed to the
/// library's `from_base_dir` or the binary's `--root` flag. Everything is
/// removed when the guard is dropped.
#[allow(dead_code)]
pub struct RootFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl RootFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create test root directory");
        fs::create_dir(dir.path().join("etc")).expect("Failed to create etc directory");
        Self { dir }
    }

    /// Root with an os-release file built from ID and VERSION_ID.
    pub fn with_os_release(id: &str, version_id: Option<&str>) -> Self {
        let fixture = Self::new();
        let mut contents = format!("ID={id}\n");
        if let Some(version_id) = version_id {
            contents.push_str(&format!("VERSION_ID=\"{version_id}\"\n"));
        }
        fixture.write_etc_file("os-release", &contents);
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn etc_path(&self) -> PathBuf {
        self.dir.path().join("etc")
    }

    pub fn write_etc_file(&self, name: &str, contents: &str) -> &Self {
        fs::write(self.etc_path().join(name), contents).expect("Failed to write etc file");
        self
    }
}

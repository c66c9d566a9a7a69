use std::path::PathBuf;

use tempfile::TempDir;

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {}", data_path.display());

        Self {
            temp_dir,
            data_path,
        }
    }

    /// Create a test file with content.
    ///
    /// # Panics
    ///
    /// Panics if the file or its parents cannot be written.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {} ({} bytes)",
            full_path.display(),
            content.len()
        );
        full_path
    }

    /// Lay out a recorder tree and an empty project below the fixture root.
    ///
    /// Returns `(recorder_root, project_root)` matching the default
    /// `[paths]` layout.
    pub fn create_recorder_layout(&self, script: &str, bodies: &[(&str, &str)]) -> (PathBuf, PathBuf) {
        self.create_file(
            "recorder/user-files/simulations/simulations/RecordedSimulation.scala",
            script,
        );
        for (name, content) in bodies {
            self.create_file(&format!("recorder/user-files/bodies/{name}"), content);
        }
        let project = self.data_path.join("project");
        std::fs::create_dir_all(&project).expect("Failed to create project dir");
        (self.data_path.join("recorder"), project)
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {}", self.data_path.display());
    }
}

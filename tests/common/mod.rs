// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use suite_runner::config::RunConfig;
use tempfile::{TempDir, tempdir};

/// A throwaway project directory: `test/<suite>/<case>` plus a fake subject at
/// `build/sif`.
///
/// The fake subject appends every case path it receives to `invocations.log`
/// and exits with the number written in the case file, so a case's content
/// decides whether it passes.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = tempdir().expect("Failed to create temporary directory");
        fs::create_dir_all(dir.path().join("test")).expect("Failed to create test root");
        Self { dir }
    }

    /// Same as [`TestProject::new`], plus the fake subject.
    #[cfg(unix)]
    pub fn with_subject() -> Self {
        let project = Self::new();
        project.write_subject();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn root(&self) -> PathBuf {
        self.path().join("test")
    }

    pub fn executable(&self) -> PathBuf {
        self.path().join("build").join("sif")
    }

    pub fn log_path(&self) -> PathBuf {
        self.path().join("invocations.log")
    }

    pub fn add_suite(&self, suite: &str) -> PathBuf {
        let path = self.root().join(suite);
        fs::create_dir_all(&path).expect("Failed to create suite directory");
        path
    }

    /// Adds a case whose subject invocation exits with `exit_code`.
    pub fn add_case(&self, suite: &str, file: &str, exit_code: i32) -> PathBuf {
        let path = self.add_suite(suite).join(file);
        fs::write(&path, format!("{exit_code}\n")).expect("Failed to write case file");
        path
    }

    #[cfg(unix)]
    pub fn write_subject(&self) {
        use std::os::unix::fs::PermissionsExt;

        let build = self.path().join("build");
        fs::create_dir_all(&build).expect("Failed to create build directory");
        let script = format!(
            "#!/bin/sh\necho \"$1\" >> \"{}\"\nexit \"$(cat \"$1\")\"\n",
            self.log_path().display()
        );
        let executable = self.executable();
        fs::write(&executable, script).expect("Failed to write subject script");
        fs::set_permissions(&executable, fs::Permissions::from_mode(0o755))
            .expect("Failed to make subject executable");
    }

    /// File names of the cases the subject was invoked with, in order.
    pub fn invocations(&self) -> Vec<String> {
        match fs::read_to_string(self.log_path()) {
            Ok(content) => content
                .lines()
                .map(|line| {
                    Path::new(line)
                        .file_name()
                        .unwrap()
                        .to_string_lossy()
                        .into_owned()
                })
                .collect(),
            Err(_) => vec![],
        }
    }

    pub fn write_settings(&self, content: &str) -> PathBuf {
        let path = self.path().join("SuiteRunner.toml");
        fs::write(&path, content).expect("Failed to write settings file");
        path
    }

    /// A resolved configuration pointing at this project.
    pub fn config(&self, filter: Option<&str>) -> RunConfig {
        RunConfig {
            project_dir: self.path().to_path_buf(),
            root: self.root(),
            executable: self.executable(),
            suite_filter: filter.map(str::to_string),
            known_suites: vec![],
            extensions: vec![],
        }
    }
}

/// The layout used by the end-to-end scenario: `parser/a.src` passes,
/// `parser/b.src` fails.
#[cfg(unix)]
pub fn parser_project() -> TestProject {
    let project = TestProject::with_subject();
    project.add_case("parser", "a.src", 0);
    project.add_case("parser", "b.src", 1);
    project
}

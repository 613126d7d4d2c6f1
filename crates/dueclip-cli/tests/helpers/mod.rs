use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary data file.
pub struct CliTestHarness {
    _temp_dir: TempDir,
    data_path: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let data_path = temp_dir.path().join("tracker.json");

        Self {
            _temp_dir: temp_dir,
            data_path,
        }
    }

    /// Get a Command instance configured for testing.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dueclip").expect("Failed to find dueclip binary");

        // Point the data file at the temp directory via the config env layer.
        cmd.env("DUECLIP_DATA_PATH", &self.data_path);

        cmd
    }

    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Runs a command and returns captured stdout as a string.
    pub fn run_and_capture(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");
        assert!(output.status.success(), "command failed: {:?}", args);
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

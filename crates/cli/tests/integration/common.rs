//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a small source tree, a
/// place for the build tree, and fake cmake/ninja executables whose
/// invocations are logged to files the test can inspect.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let env = Self { temp };
    std::fs::create_dir_all(env.source_dir()).unwrap();
    std::fs::write(env.source_dir().join("CMakeLists.txt"), "project(demo C)\n").unwrap();
    env
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn source_dir(&self) -> PathBuf {
    self.path().join("src")
  }

  pub fn build_dir(&self) -> PathBuf {
    self.source_dir().join("build")
  }

  /// File the fake cmake writes its arguments to.
  pub fn configure_log(&self) -> PathBuf {
    self.path().join("cmake_args.log")
  }

  /// File the fake ninja writes its arguments to.
  pub fn build_log(&self) -> PathBuf {
    self.path().join("ninja_args.log")
  }

  /// Write an executable shell script into the temp dir.
  pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = self.path().join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  /// Fake cmake that records its arguments.
  pub fn fake_cmake(&self) -> PathBuf {
    self.write_script(
      "cmake",
      &format!(r#"printf '%s\n' "$@" > "{}""#, self.configure_log().display()),
    )
  }

  /// Fake cmake that records its arguments, then exits with `code`.
  pub fn failing_cmake(&self, code: i32) -> PathBuf {
    self.write_script(
      "cmake-fail",
      &format!(
        "printf '%s\\n' \"$@\" > \"{}\"\nexit {}",
        self.configure_log().display(),
        code
      ),
    )
  }

  /// Fake ninja that records its arguments and drops an artifact into the
  /// build tree (the directory following `-C`).
  pub fn fake_ninja(&self) -> PathBuf {
    self.write_script(
      "ninja",
      &format!(
        "printf '%s\\n' \"$@\" > \"{}\"\nshift\necho artifact > \"$1/task.bin\"",
        self.build_log().display()
      ),
    )
  }

  /// Fake ninja that exits with `code` without producing anything.
  pub fn failing_ninja(&self, code: i32) -> PathBuf {
    self.write_script("ninja-fail", &format!("exit {code}"))
  }

  /// Get a pre-configured Command for the pimbuild binary.
  ///
  /// The fake tools are wired in through the `PIMBUILD_CMAKE` and
  /// `PIMBUILD_NINJA` overrides; individual tests swap in failing variants by
  /// overriding the variable again.
  pub fn pimbuild_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("pimbuild");
    cmd.env("PIMBUILD_CMAKE", self.fake_cmake());
    cmd.env("PIMBUILD_NINJA", self.fake_ninja());
    cmd
  }

  /// Argument lines the fake cmake received.
  pub fn configure_args(&self) -> Vec<String> {
    std::fs::read_to_string(self.configure_log())
      .unwrap()
      .lines()
      .map(str::to_string)
      .collect()
  }
}

/// Whether the configure invocation carried `-D <var>`.
pub fn has_build_var(args: &[String], var: &str) -> bool {
  args.windows(2).any(|w| w[0] == "-D" && w[1] == var)
}

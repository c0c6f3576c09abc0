//! SDK command integration tests.

use predicates::prelude::*;

use super::common::{TestEnv, has_build_var};

#[test]
fn passes_tasklet_count_and_omits_dpu_count() {
  let env = TestEnv::new();

  env
    .pimbuild_cmd()
    .args(["sdk", "--num_tasklets", "8"])
    .args(["--source-dir", env.source_dir().to_str().unwrap()])
    .assert()
    .success();

  let args = env.configure_args();
  assert!(has_build_var(&args, "NR_TASKLETS=8"));
  assert!(!args.iter().any(|a| a.starts_with("NR_DPUS")));
}

#[test]
fn carries_stripped_flag_set() {
  let env = TestEnv::new();

  env
    .pimbuild_cmd()
    .arg("sdk")
    .args(["--source-dir", env.source_dir().to_str().unwrap()])
    .assert()
    .success();

  let args = env.configure_args();
  assert!(has_build_var(
    &args,
    "CMAKE_C_FLAGS=-O0 -g0 -fno-asynchronous-unwind-tables -fno-unwind-tables -fno-dwarf2-cfi-asm"
  ));
  assert!(has_build_var(&args, "CMAKE_BUILD_TYPE=None"));
  assert!(has_build_var(&args, "CMAKE_EXE_LINKER_FLAGS=-Wl,--strip-debug"));
}

#[test]
fn reports_success_and_populates_tree() {
  let env = TestEnv::new();

  env
    .pimbuild_cmd()
    .args(["sdk", "--num_tasklets", "4"])
    .args(["--source-dir", env.source_dir().to_str().unwrap()])
    .assert()
    .success()
    .stdout(predicate::str::contains("SDK build complete"));

  assert!(env.build_dir().join("task.bin").exists());
}

#[test]
fn rebuild_drops_previous_invocation_artifacts() {
  let env = TestEnv::new();

  env
    .pimbuild_cmd()
    .args(["sdk", "--num_tasklets", "4"])
    .args(["--source-dir", env.source_dir().to_str().unwrap()])
    .assert()
    .success();

  // Plant an artifact the second invocation must not inherit.
  let stale = env.build_dir().join("stale-tasklets-4.o");
  std::fs::write(&stale, "first topology").unwrap();

  env
    .pimbuild_cmd()
    .args(["sdk", "--num_tasklets", "8"])
    .args(["--source-dir", env.source_dir().to_str().unwrap()])
    .assert()
    .success();

  let args = env.configure_args();
  assert!(has_build_var(&args, "NR_TASKLETS=8"));
  assert!(!has_build_var(&args, "NR_TASKLETS=4"));
  assert!(!stale.exists());
  assert!(env.build_dir().join("task.bin").exists());
}

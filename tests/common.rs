#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn flog() -> Command {
    cargo_bin_cmd!("fieldlog")
}

/// Create a fresh per-test directory inside the system temp dir and return
/// the visit log path inside it. Siblings (audit log, lock file, Photos
/// directory) land in the same directory and are wiped with it.
pub fn setup_test_log(name: &str) -> String {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{name}_fieldlog"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test dir");

    dir.join("visit_log.csv").to_string_lossy().to_string()
}

/// Create a temporary output file path next to the given visit log.
pub fn temp_out(log_path: &str, name: &str, ext: &str) -> String {
    let path = PathBuf::from(log_path)
        .with_file_name(format!("{name}_out.{ext}"));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

/// Write a small master directory file next to the visit log.
pub fn write_master(log_path: &str) -> String {
    let path = PathBuf::from(log_path).with_file_name("master_data.csv");
    fs::write(
        &path,
        "Site ID,RTO,Region\n\
         SITE01,RTO-North,Highlands\n\
         SITE02,RTO-South,Islands\n",
    )
    .expect("write master file");
    path.to_string_lossy().to_string()
}

/// Initialize an empty visit log at the given path.
pub fn init_log(log_path: &str) {
    flog()
        .args(["--data", log_path, "--test", "init"])
        .assert()
        .success();
}

/// Open a visit via the CLI.
pub fn checkin(log_path: &str, master: &str, site: &str, name: &str) {
    flog()
        .args([
            "--data", log_path, "--master-file", master, "--test", "checkin", site, "--name",
            name, "--phone", "5551234", "--remarks", "PM visit",
        ])
        .assert()
        .success();
}

/// Close a visit via the CLI.
pub fn checkout(log_path: &str, site: &str, name: &str) {
    flog()
        .args([
            "--data", log_path, "--test", "checkout", site, "--name", name,
        ])
        .assert()
        .success();
}

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{checkin, checkout, flog, init_log, setup_test_log, temp_out, write_master};

#[test]
fn test_init_creates_header_only_log() {
    let log = setup_test_log("init_header");

    init_log(&log);

    let content = fs::read_to_string(&log).expect("read log");
    assert!(content.starts_with("Timestamp,FE/Contractor Name,Phone Number,Site ID"));
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_checkin_checkout_flow() {
    let log = setup_test_log("checkin_checkout_flow");
    let master = write_master(&log);
    init_log(&log);

    // Check in: master attributes resolved, ticket generated.
    flog()
        .args([
            "--data", &log, "--master-file", &master, "--test", "checkin", "SITE01", "--name",
            "Alice", "--phone", "5551234", "--remarks", "PM visit",
        ])
        .assert()
        .success()
        .stdout(contains("Checked in"))
        .stdout(contains("TT_SITE01_"));

    // Open visit shows up with its region and no close time.
    flog()
        .args(["--data", &log, "--test", "list", "--open"])
        .assert()
        .success()
        .stdout(contains("SITE01"))
        .stdout(contains("Highlands"))
        .stdout(contains("OPEN"));

    // Check out: dwell reported, record closed.
    flog()
        .args([
            "--data", &log, "--test", "checkout", "SITE01", "--name", "Alice",
        ])
        .assert()
        .success()
        .stdout(contains("Checked out"))
        .stdout(contains("Dwell time"));

    flog()
        .args(["--data", &log, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("CLOSED"))
        .stdout(contains("OPEN").not());
}

#[test]
fn test_duplicate_checkin_is_rejected() {
    let log = setup_test_log("duplicate_checkin_cli");
    let master = write_master(&log);
    init_log(&log);

    checkin(&log, &master, "SITE01", "Alice");

    flog()
        .args([
            "--data", &log, "--master-file", &master, "--test", "checkin", "SITE01", "--name",
            "Alice",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // Still exactly one row in the log (header + 1).
    let content = fs::read_to_string(&log).expect("read log");
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_checkout_without_open_visit_fails() {
    let log = setup_test_log("checkout_no_open_cli");
    init_log(&log);

    flog()
        .args([
            "--data", &log, "--test", "checkout", "SITE01", "--name", "Bob",
        ])
        .assert()
        .failure()
        .stderr(contains("No open visit"));

    let content = fs::read_to_string(&log).expect("read log");
    assert_eq!(content.lines().count(), 1, "store unchanged");
}

#[test]
fn test_single_step_completed_visit() {
    let log = setup_test_log("single_step");
    let master = write_master(&log);
    init_log(&log);

    flog()
        .args([
            "--data", &log, "--master-file", &master, "--test", "checkin", "SITE02", "--name",
            "Bob", "--complete",
        ])
        .assert()
        .success()
        .stdout(contains("Visit recorded as completed"))
        .stdout(contains("00:00"));

    flog()
        .args(["--data", &log, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("SITE02"))
        .stdout(contains("CLOSED"));
}

#[test]
fn test_list_filters_by_name_and_region() {
    let log = setup_test_log("list_filters");
    let master = write_master(&log);
    init_log(&log);

    checkin(&log, &master, "SITE01", "Alice");
    checkin(&log, &master, "SITE02", "Bob");

    flog()
        .args(["--data", &log, "--test", "list", "--name", "alice"])
        .assert()
        .success()
        .stdout(contains("SITE01"))
        .stdout(contains("SITE02").not());

    flog()
        .args(["--data", &log, "--test", "list", "--region", "Islands"])
        .assert()
        .success()
        .stdout(contains("SITE02"))
        .stdout(contains("SITE01").not());
}

#[test]
fn test_list_today_shows_fresh_checkin() {
    let log = setup_test_log("list_today");
    let master = write_master(&log);
    init_log(&log);

    checkin(&log, &master, "SITE01", "Alice");

    flog()
        .args(["--data", &log, "--test", "list", "--today"])
        .assert()
        .success()
        .stdout(contains("SITE01"));
}

#[test]
fn test_list_summary_counts() {
    let log = setup_test_log("list_summary");
    let master = write_master(&log);
    init_log(&log);

    checkin(&log, &master, "SITE01", "Alice");
    checkin(&log, &master, "SITE02", "Bob");
    checkout(&log, "SITE02", "Bob");

    flog()
        .args(["--data", &log, "--test", "list", "--summary"])
        .assert()
        .success()
        .stdout(contains("Total 2 | Open 1 | Closed 1"))
        .stdout(contains("Highlands: 1"))
        .stdout(contains("Islands: 1"));
}

#[test]
fn test_master_lookup_command() {
    let log = setup_test_log("master_lookup");
    let master = write_master(&log);

    flog()
        .args([
            "--data", &log, "--master-file", &master, "--test", "master", "SITE01",
        ])
        .assert()
        .success()
        .stdout(contains("RTO-North"))
        .stdout(contains("Highlands"));

    flog()
        .args([
            "--data", &log, "--master-file", &master, "--test", "master", "SITE99",
        ])
        .assert()
        .success()
        .stdout(contains("no master directory entry"));
}

#[test]
fn test_operation_log_records_checkin_and_checkout() {
    let log = setup_test_log("operation_log");
    let master = write_master(&log);
    init_log(&log);

    checkin(&log, &master, "SITE01", "Alice");
    checkout(&log, "SITE01", "Alice");

    flog()
        .args(["--data", &log, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("checkin"))
        .stdout(contains("checkout"));
}

#[test]
fn test_photo_stored_on_checkin() {
    let log = setup_test_log("photo_checkin");
    let master = write_master(&log);
    init_log(&log);

    let photo_src = PathBuf::from(&log).with_file_name("tower.jpg");
    fs::write(&photo_src, b"not really a jpeg").expect("write photo");

    flog()
        .args([
            "--data",
            &log,
            "--master-file",
            &master,
            "--test",
            "checkin",
            "SITE01",
            "--name",
            "Alice",
            "--photo",
            &photo_src.to_string_lossy(),
        ])
        .assert()
        .success();

    flog()
        .args(["--data", &log, "--test", "photos"])
        .assert()
        .success()
        .stdout(contains("SITE01_"));

    // The stored copy lives in the Photos directory next to the log.
    let photos_dir = PathBuf::from(&log).with_file_name("Photos");
    let stored = fs::read_dir(&photos_dir).expect("photos dir").count();
    assert_eq!(stored, 1);
}

#[test]
fn test_backup_plain_copy() {
    let log = setup_test_log("backup_plain");
    let master = write_master(&log);
    init_log(&log);
    checkin(&log, &master, "SITE01", "Alice");

    let dest = temp_out(&log, "backup_plain", "csv");

    flog()
        .args(["--data", &log, "--test", "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let original = fs::read_to_string(&log).expect("read log");
    let copy = fs::read_to_string(&dest).expect("read backup");
    assert_eq!(original, copy);
}

#[test]
fn test_backup_compressed_zip() {
    let log = setup_test_log("backup_zip");
    init_log(&log);

    let dest = temp_out(&log, "backup_zip", "csv");

    flog()
        .args([
            "--data", &log, "--test", "backup", "--file", &dest, "--compress",
        ])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip_path = PathBuf::from(&dest).with_extension("zip");
    assert!(zip_path.exists());
    assert!(!PathBuf::from(&dest).exists(), "uncompressed copy removed");
}

#[test]
fn test_backup_compressed_tarball() {
    let log = setup_test_log("backup_tarball");
    init_log(&log);

    let dest = temp_out(&log, "backup_tarball", "csv");

    flog()
        .args([
            "--data", &log, "--test", "backup", "--file", &dest, "--tarball",
        ])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let tar_path = PathBuf::from(&dest).with_extension("tar.gz");
    assert!(tar_path.exists());
}

#[test]
fn test_corrupt_log_is_surfaced_not_swallowed() {
    let log = setup_test_log("corrupt_log");
    fs::write(&log, "Date,Who\n2025-01-01,Alice\n").expect("write corrupt log");

    flog()
        .args([
            "--data", &log, "--test", "checkin", "SITE01", "--name", "Alice",
        ])
        .assert()
        .failure()
        .stderr(contains("Visit log unavailable"));

    // The corrupt file is left as-is for inspection.
    let content = fs::read_to_string(&log).expect("read log");
    assert!(content.starts_with("Date,Who"));
}

#[test]
fn test_invalid_period_is_rejected() {
    let log = setup_test_log("invalid_period");
    init_log(&log);

    flog()
        .args(["--data", &log, "--test", "list", "--period", "2025-9"])
        .assert()
        .failure()
        .stderr(contains("Invalid date or period"));
}

#[test]
fn test_coordinates_out_of_range_rejected() {
    let log = setup_test_log("bad_coords");
    init_log(&log);

    flog()
        .args([
            "--data", &log, "--test", "checkin", "SITE01", "--name", "Alice", "--lat", "95.0",
            "--lon", "147.0",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinate"));
}

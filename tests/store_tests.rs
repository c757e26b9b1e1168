//! Visit log store tests: round-trip fidelity, corrupt-file handling and
//! the exclusive-access lock.

use chrono::{NaiveDate, NaiveDateTime};
use fieldlog::errors::AppError;
use fieldlog::models::status::VisitStatus;
use fieldlog::models::visit::{PHOTO_NONE, VisitRecord};
use fieldlog::store::visit_log::VisitLog;
use std::env;
use std::fs;
use std::path::PathBuf;

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn temp_log(name: &str) -> VisitLog {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{name}_fieldlog"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test dir");
    VisitLog::new(dir.join("visit_log.csv"))
}

fn sample_records() -> Vec<VisitRecord> {
    let opened = ts(2025, 1, 1, 9, 0, 0);
    vec![
        VisitRecord {
            timestamp: opened,
            name: "Alice".to_string(),
            phone: "5551234".to_string(),
            site_id: "SITE01".to_string(),
            rto: "RTO-North".to_string(),
            region: "Highlands".to_string(),
            ticket: "TT_SITE01_20250101_090000".to_string(),
            remarks: "PM visit, rectifier check".to_string(),
            latitude: Some(-9.4438),
            longitude: Some(147.1803),
            photo: "SITE01_20250101_090000.jpg".to_string(),
            opened_at: opened,
            closed_at: Some(ts(2025, 1, 1, 11, 30, 0)),
            status: VisitStatus::Closed,
        },
        VisitRecord {
            timestamp: ts(2025, 1, 2, 8, 15, 0),
            name: "Bob".to_string(),
            phone: String::new(),
            site_id: "SITE02".to_string(),
            rto: String::new(),
            region: String::new(),
            ticket: "TT_SITE02_20250102_081500".to_string(),
            remarks: String::new(),
            latitude: None,
            longitude: None,
            photo: PHOTO_NONE.to_string(),
            opened_at: ts(2025, 1, 2, 8, 15, 0),
            closed_at: None,
            status: VisitStatus::Open,
        },
    ]
}

#[test]
fn missing_file_loads_as_empty_dataset() {
    let log = temp_log("missing_file");
    assert_eq!(log.load().expect("load"), Vec::new());
}

#[test]
fn create_empty_writes_header_only() {
    let log = temp_log("create_empty");
    log.create_empty().expect("create");

    let content = fs::read_to_string(log.path()).expect("read");
    assert!(content.starts_with("Timestamp,FE/Contractor Name,Phone Number,Site ID"));
    assert_eq!(content.lines().count(), 1);

    assert_eq!(log.load().expect("load"), Vec::new());
}

#[test]
fn save_load_round_trip_preserves_records() {
    let log = temp_log("round_trip");
    let records = sample_records();

    log.save(&records).expect("save");
    let loaded = log.load().expect("load");

    assert_eq!(loaded, records);
}

#[test]
fn save_of_loaded_dataset_is_byte_identical() {
    let log = temp_log("byte_identical");
    log.save(&sample_records()).expect("save");

    let first = fs::read_to_string(log.path()).expect("read");
    let loaded = log.load().expect("load");
    log.save(&loaded).expect("save again");
    let second = fs::read_to_string(log.path()).expect("read again");

    assert_eq!(first, second);
}

#[test]
fn unexpected_header_is_storage_error() {
    let log = temp_log("bad_header");
    fs::write(log.path(), "Date,Who,Where\n2025-01-01,Alice,SITE01\n").expect("write");

    let err = log.load().expect_err("load must fail");
    assert!(matches!(err, AppError::StorageUnavailable(_)));
}

#[test]
fn corrupt_timestamp_cell_is_storage_error() {
    let log = temp_log("bad_cell");

    // Valid header, garbage in the Timestamp column.
    let mut content = String::new();
    content.push_str(
        "Timestamp,FE/Contractor Name,Phone Number,Site ID,RTO,Region,TT Number,Remarks,\
         Latitude,Longitude,Photo,Site Visit Time,Activity Complete Time,Status\n",
    );
    content.push_str(
        "yesterday,Alice,,SITE01,,,TT_SITE01_X,,,,N/A,2025-01-01 09:00:00,,OPEN\n",
    );
    fs::write(log.path(), content).expect("write");

    let err = log.load().expect_err("load must fail");
    assert!(matches!(err, AppError::StorageUnavailable(_)));
}

#[test]
fn quoted_fields_survive_round_trip() {
    let log = temp_log("quoting");
    let mut records = sample_records();
    records[0].remarks = "swap, then \"retest\"\nsecond line".to_string();

    log.save(&records).expect("save");
    assert_eq!(log.load().expect("load"), records);
}

#[test]
fn lock_contention_is_storage_error() {
    let log = temp_log("lock_contention");
    log.create_empty().expect("create");

    let second = VisitLog::new(log.path().to_path_buf());

    log.with_exclusive_access(|_| {
        let err = second
            .with_exclusive_access(|_| Ok(()))
            .expect_err("second holder must be rejected");
        assert!(matches!(err, AppError::StorageUnavailable(_)));
        Ok(())
    })
    .expect("outer access");

    // Lock released on drop: a new cycle succeeds.
    second.with_exclusive_access(|_| Ok(())).expect("relock");
}

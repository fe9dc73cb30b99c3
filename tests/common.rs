#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ats() -> Command {
    cargo_bin_cmd!("attendsum")
}

/// Create a unique temp file path and remove any leftover from a previous run
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendsum.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a small valid event log usable by most tests:
/// two actors, two days, out-of-order rows included.
pub fn write_sample_csv(name: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(
        &path,
        "event.published,actor.display_name,extra\n\
         2024-01-02 18:30:00,Alice,x\n\
         2024-01-02 09:45:00,Alice,y\n\
         2024-01-02 10:15:00,Bob,z\n\
         2024-01-02 17:00:00,Bob,w\n\
         2024-01-03 08:00:00,Alice,q\n",
    )
    .expect("write sample csv");
    path
}

/// Event log with one unparseable timestamp value.
pub fn write_bad_csv(name: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(
        &path,
        "event.published,actor.display_name\n\
         2024-01-02 09:45:00,Alice\n\
         not-a-date,Alice\n",
    )
    .expect("write bad csv");
    path
}

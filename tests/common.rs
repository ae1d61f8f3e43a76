#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hyd() -> Command {
    cargo_bin_cmd!("hydrotrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hydrotrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    hyd()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run a command and return its stdout as a String
pub fn stdout_of(args: &[&str]) -> String {
    let out = hyd().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf8 stdout")
}

/// Clock for driving the frame loop by hand; sleeping just moves time on.
pub struct StepClock {
    now: std::cell::Cell<chrono::NaiveDateTime>,
}

impl StepClock {
    pub fn starting_at(start: chrono::NaiveDateTime) -> Self {
        Self {
            now: std::cell::Cell::new(start),
        }
    }
}

impl hydrotrack::core::clock::Clock for StepClock {
    fn now(&self) -> chrono::NaiveDateTime {
        self.now.get()
    }

    fn sleep(&self, d: std::time::Duration) {
        let delta = chrono::TimeDelta::from_std(d).expect("duration fits");
        self.now.set(self.now.get() + delta);
    }
}

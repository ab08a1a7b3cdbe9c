#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use regex::Regex;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtb() -> Command {
    cargo_bin_cmd!("rtable")
}

/// Unique config path inside the system temp dir; any previous file is removed
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtable", name));
    path.push("rtable.conf");
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temporary input file and return its path
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_in.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write temp input");
    p
}

/// Remove ANSI SGR sequences, leaving only the visible text
pub fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

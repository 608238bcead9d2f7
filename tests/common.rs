#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The three rides used throughout the tests: 111 km in 5.85 h.
pub const SAMPLE_RIDES: &str = "\
23-06-2012 15:32:12,12,0.60,Around the house,
23-08-2012 13:21:48,75,4.00,\"Commute to work, with visit at grocery\",http://www.mymap.com/1234
12-07-2012 20:10:35,24,1.25,,http://www.yourmap.com/4321
";

/// `bike` binary with HOME pointing at `home`, so no real config is read,
/// and an English locale.
pub fn bike(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("bike");
    cmd.env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("LC_ALL")
        .env_remove("LC_MESSAGES")
        .env_remove("LANG");
    cmd
}

/// Create an empty, unique directory inside the system temp dir.
pub fn test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bike_test_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Write `content` as a rides file inside `dir` and return its path.
pub fn write_rides(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("bikerides");
    fs::write(&path, content).expect("write rides file");
    path
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

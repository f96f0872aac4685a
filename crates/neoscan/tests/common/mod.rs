//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Small NEO export: two named objects, one unnamed, one with no diameter.
pub const NEOS_CSV: &str = "\
id,spkid,full_name,pdes,name,prefix,neo,pha,diameter,albedo
a0000433,2000433,\"   433 Eros (A898 PA)\",433,Eros,,Y,N,16.84,0.25
a0099942,2099942,\"99942 Apophis (2004 MN4)\",99942,Apophis,,Y,Y,0.37,0.23
bK20A01B,3842361,\"(2020 AB)\",2020 AB,,,Y,N,,
bK19O01A,3843279,\"(2019 OK)\",2019 OK,,,Y,Y,0.1,
";

/// Matching close-approach document. The last row names an object that is
/// not in the NEO file.
pub const CAD_JSON: &str = r#"{
  "signature": {"version": "1.1", "source": "NASA/JPL SBDB Close Approach Data API"},
  "count": "6",
  "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
  "data": [
    ["433", "659", "2415765.5", "1902-Jan-12 00:00", "0.3165", "0.3164", "0.3166", "5.4", "5.39", "< 00:01", "10.4"],
    ["99942", "204", "2462240.5", "2029-Apr-13 21:46", "0.000254", "0.000254", "0.000254", "7.42", "5.84", "< 00:01", "19.7"],
    ["2020 AB", "3", "2458849.5", "2020-Jan-01 12:30", "0.0345", "0.0341", "0.0349", "12.1", "12.09", "00:02", "25.1"],
    ["2019 OK", "6", "2458693.5", "2019-Jul-25 01:22", "0.000477", "0.000477", "0.000477", "24.5", "24.48", "< 00:01", "23.3"],
    ["99942", "204", "2463001.5", "2036-Mar-27 06:16", "0.3", "0.29", "0.31", "6.0", "5.9", "00:10", "19.7"],
    ["2099 ZZ", "1", "2458849.5", "2020-Jan-01 03:00", "0.02", "0.02", "0.02", "8.0", "8.0", "00:01", "28.0"]
  ]
}"#;

/// Write both fixture files into `dir` and return their paths.
pub fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let neos = dir.join("neos.csv");
    let cad = dir.join("cad.json");
    std::fs::write(&neos, NEOS_CSV).expect("Failed to write NEO fixture");
    std::fs::write(&cad, CAD_JSON).expect("Failed to write CAD fixture");
    (neos, cad)
}

/// Path of the compiled neoscan binary
pub fn neoscan_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_neoscan"))
}

/// Run the neoscan binary in the specified directory, with colors off
pub fn run_neoscan_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(neoscan_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute neoscan binary")
}

/// Stdout of a run as a string
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a run as a string
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

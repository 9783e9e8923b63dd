// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::process::Command;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let build_time =
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default();

    println!("cargo:rustc-env=BUILD_GIT_BRANCH={}", git(&["rev-parse", "--abbrev-ref", "HEAD"]));
    println!("cargo:rustc-env=BUILD_GIT_COMMIT={}", git(&["rev-parse", "HEAD"]));
    println!("cargo:rustc-env=BUILD_GIT_DATE={}", git(&["log", "-1", "--format=%cd"]));
    println!("cargo:rustc-env=BUILD_TIME={build_time}");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}

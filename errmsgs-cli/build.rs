use std::process::{Command, Output};
fn git_info() -> Option<()> {
    let Output { stdout, status, .. } = Command::new("git")
        .args(["rev-parse", "HEAD", "--abbrev-ref", "HEAD"])
        .output()
        .ok()?;
    if status.success() {
        let info = std::str::from_utf8(&stdout).ok()?;
        let (commit, branch) = info.split_once('\n')?;
        println!("cargo:rustc-env=GIT_BRANCH={}", branch.trim());
        println!("cargo:rustc-env=GIT_COMMIT={commit}");
        println!("cargo:rustc-cfg=has_git");
    }
    Some(())
}

/// The shipped `vendor/msgs.h` is a sample; a copy of the upstream header doesn't carry the
/// marker line.
fn sample_header() {
    let is_sample = std::fs::read_to_string("vendor/msgs.h")
        .is_ok_and(|header| header.contains("ERRMSGS_SAMPLE_HEADER"));
    if is_sample {
        println!("cargo:rustc-cfg=sample_header");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=vendor/msgs.h");
    println!("cargo:rustc-check-cfg=cfg(has_git)");
    println!("cargo:rustc-check-cfg=cfg(sample_header)");
    git_info();
    sample_header();
}

use std::process::Command;

/// Trimmed stdout of a git command, or `fallback` when git fails or prints nothing.
fn git_output(args: &[&str], fallback: &str) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|out| !out.is_empty())
        .unwrap_or_else(|| fallback.into())
}

fn main() {
    let git_hash = git_output(&["rev-parse", "--short", "HEAD"], "unknown");
    let git_tag = git_output(&["describe", "--tags", "--abbrev=0"], "no-tag");

    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=GIT_TAG={}", git_tag);
    println!("cargo:rerun-if-changed=build.rs");
}

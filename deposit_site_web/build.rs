use std::process::Command;

fn main() {
    // Stamped into the boot log so deployed bundles are identifiable.
    let commit = git_short_hash().unwrap_or_else(|| "unreleased".to_string());
    println!("cargo:rustc-env=SITE_COMMIT={commit}");
    println!("cargo:rerun-if-changed=build.rs");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    if hash.is_empty() {
        None
    } else {
        Some(hash.to_string())
    }
}

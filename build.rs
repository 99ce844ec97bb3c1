#[path = "build/tailwind.rs"]
mod tailwind;

fn main() {
    if is_rust_analyzer() {
        return;
    }

    // expose git hash for ETag
    let git_hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|out| {
            if out.status.success() {
                String::from_utf8(out.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=GIT_HASH={}", git_hash);

    println!("cargo:rerun-if-changed=styles/input.css");
    println!("cargo:rerun-if-changed=styles/fallback.css");
    println!("cargo:rerun-if-changed=tailwind.config.js");
    println!("cargo:rerun-if-changed=src/components");
    println!("cargo:rerun-if-changed=src/components.rs");

    tailwind::build_tailwind();
}

fn is_rust_analyzer() -> bool {
    std::env::var("RUST_ANALYZER").is_ok()
        || std::env::var("RUST_ANALYZER_INTERNALS_DO_NOT_USE").is_ok()
        || std::env::var("RA_RUNNING").is_ok()
}

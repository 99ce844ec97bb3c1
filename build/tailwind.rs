use std::{fs, path::Path, process::Command};

const INPUT: &str = "styles/input.css";
const OUTPUT: &str = "public/assets/app.css";

/// Compile the utility classes used by the components into the public
/// stylesheet, or fall back to the checked-in subset when the tailwind CLI
/// is not installed.
pub fn build_tailwind() {
    let output = Command::new("node_modules/.bin/tailwindcss")
        .args(["-i", INPUT, "-o", OUTPUT, "--minify"])
        .output();

    match output {
        Ok(out) if out.status.success() => {}
        Ok(out) => {
            println!(
                "cargo:warning=tailwindcss failed (status {}), using fallback: {}",
                out.status,
                String::from_utf8_lossy(&out.stderr)
            );
            write_fallback();
        }
        Err(err) => {
            println!("cargo:warning=tailwindcss not run ({err}), using fallback");
            write_fallback();
        }
    }
}

fn write_fallback() {
    let dst = Path::new(OUTPUT);
    if dst.exists() {
        return;
    }
    if let Some(parent) = dst.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let css = include_str!("../styles/fallback.css");
    if let Err(err) = fs::write(dst, css) {
        println!("cargo:warning=writing {OUTPUT} failed: {err}");
    }
}

use std::env;

// Expose the target triple so `botlog --version` can report what it was built for.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=BOTLOG_BUILD_TARGET_TRIPLE={}", target);
}

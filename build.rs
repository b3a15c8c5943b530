use chrono::Datelike;

fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();

    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    // The footer copyright uses the build year so server render and hydration agree
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}

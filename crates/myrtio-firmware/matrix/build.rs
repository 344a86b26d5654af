fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let version = format!(
        "{}+{}",
        env!("CARGO_PKG_VERSION"),
        chrono::Utc::now().format("%Y%m%d%H%M")
    );
    println!("cargo:rustc-env=BUILD_VERSION={version}");
}

//! Build script for block-docs
//!
//! The preview page is embedded with `include_str!`, so rebuild when it
//! changes.

fn main() {
    println!("cargo:rerun-if-changed=src/html/index.html");
    println!("cargo:rerun-if-changed=build.rs");
}

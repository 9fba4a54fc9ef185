// Build script for vpi-bridge
// Renders the C header for the target platform so host bindings get the
// prerequisite system includes the kernel's vpi_user.h expects.

use std::env;
use std::fs;
use std::path::PathBuf;

#[path = "src/header.rs"]
#[allow(dead_code)]
mod header;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/header.rs");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let platform = header::Platform::from_target_os(&target_os);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("vpi_bridge.h"), header::render(platform))
        .expect("failed to write vpi_bridge.h");
}

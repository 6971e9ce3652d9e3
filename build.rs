// Mirrors `static/` (including the wasm-pack output in `static/pkg`) into `dist/`.
// The bundle itself is built by `cargo run` or a direct `wasm-pack build`;
// spawning wasm-pack from here would wait on the lock its own cargo holds.
use std::{fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut options = CopyOptions::new();
        options.overwrite = true;
        options.content_only = true;
        if let Err(e) = copy(static_dir, out_dir, &options) {
            println!("cargo:warning=copying static/ to dist/ failed: {e}");
        }
    }
}

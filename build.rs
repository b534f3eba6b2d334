// Build script that copies the static host page (and any wasm-pack output
// under static/pkg) to `dist/`.
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        if let Err(err) = fs_extra::remove_items(&[out_dir]) {
            println!("cargo:warning=could not clear dist/: {err}");
        }
    }

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }
    if let Err(err) = std::fs::create_dir_all(out_dir) {
        println!("cargo:warning=could not create dist/: {err}");
        return;
    }
    let options = CopyOptions::new().overwrite(true).content_only(true);
    if let Err(err) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ to dist/ failed: {err}");
    }
}

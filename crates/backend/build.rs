use std::env;
use std::fs;
use std::path::Path;

// Places config.toml next to the built binary so the runtime lookup in
// shared::config finds it during `cargo run`.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR is typically target/<profile>/build/backend-xxx/out;
    // walk up to target/<profile>.
    let out_path = Path::new(&out_dir);
    let Some(target_dir) = out_path.ancestors().find(|p| p.ends_with(&profile)) else {
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent());
    let Some(workspace_root) = workspace_root else {
        return;
    };

    let source = workspace_root.join("config.toml");
    if source.exists() {
        if let Err(e) = fs::copy(&source, target_dir.join("config.toml")) {
            println!("cargo:warning=failed to copy config.toml: {}", e);
        }
    }
}

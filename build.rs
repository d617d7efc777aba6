use std::{fs::File, path::Path};

// The frontend embeds config.toml, an empty file means all defaults.
fn main() {
    let path = Path::new("config.toml");

    if !path.exists() {
        File::create(path).expect("failed to create config.toml");
    }

    println!("cargo:rerun-if-changed=config.toml");
}

use std::{env, error::Error, fs, path::Path};

#[allow(dead_code)]
#[path = "src/constants.rs"]
mod constants;

#[path = "src/cfg_file.rs"]
mod cfg_file;

use cfg_file::{select_source, RawConfig, CONFIG_FILE, TEMPLATE_FILE};

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if either toml changes
    println!("cargo:rerun-if-changed={CONFIG_FILE}");
    println!("cargo:rerun-if-changed={TEMPLATE_FILE}");

    let allow_template = env::var_os("CARGO_FEATURE_TEMPLATE_CONFIG").is_some();
    let (source, is_template) = select_source(Path::new(CONFIG_FILE).exists(), allow_template)?;

    if is_template {
        println!("cargo:warning={CONFIG_FILE} not found, using {TEMPLATE_FILE} placeholder values");
    }

    // Read and parse
    let toml_str = fs::read_to_string(source)?;
    let raw =
        RawConfig::parse(&toml_str).map_err(|e| format!("failed to parse {source}: {e}"))?;

    raw.check_shape().map_err(|e| format!("invalid {source}: {e}"))?;

    if !is_template {
        for key in raw.placeholders() {
            println!("cargo:warning={CONFIG_FILE}: `{key}` still has its placeholder value");
        }
    }

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, raw.to_rust(source, is_template))?;

    Ok(())
}

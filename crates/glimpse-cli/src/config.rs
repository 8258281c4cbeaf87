use std::path::Path;

use anyhow::{Context, Result};

use glimpse::PrintOptions;

/// Load print options from a JSON file. Missing keys take their defaults.
pub fn load_print_config<P: AsRef<Path>>(path: P) -> Result<PrintOptions> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: PrintOptions = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Config file options, with `precision` overriding the file when given.
pub fn resolve_print_options<P: AsRef<Path>>(
    config_path: Option<P>,
    precision: Option<usize>,
) -> Result<PrintOptions> {
    let mut options = match config_path {
        Some(path) => load_print_config(path)?,
        None => PrintOptions::default(),
    };
    if let Some(precision) = precision {
        options.precision = precision;
    }
    Ok(options)
}

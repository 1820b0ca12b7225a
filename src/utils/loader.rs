use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::models::Item;
use crate::utils::config::ReportConfig;

/// Package root; data/ lives next to Cargo.toml
pub fn data_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Fixed location of the items file
pub fn items_path(config: &ReportConfig) -> PathBuf {
    data_root().join(config.items_path)
}

/// Load item definitions from the fixed data/items.json
pub fn load_items(config: &ReportConfig) -> Result<Vec<Item>> {
    load_items_from(items_path(config))
}

/// Load item definitions from an explicit path.
/// The file handle is dropped before returning on every path.
pub fn load_items_from(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref();
    log::info!("Loading items from {}", path.display());

    let file = File::open(path).with_context(|| format!("read items: {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse items json: {}", path.display()))?;

    log::info!("Loaded {} items", items.len());
    Ok(items)
}

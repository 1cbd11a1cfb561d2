use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings};
use crate::store::{load_store, save_store, store_path};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;

    // Write an empty store so the data dir is self-describing.
    let path = store_path(&resolved);
    if !path.exists() {
        let store = load_store(&path)?;
        save_store(&path, &store)?;
    }

    println!("Initialized gather at {}", resolved.display());
    println!("Run `gather demo` to load sample events, or `gather events list`.");
    Ok(())
}

fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

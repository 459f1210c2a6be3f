use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use kalima::catalog::Catalog;
use kalima::progress::ProgressStore;

/// Shared application state for CLI commands
pub struct App {
    pub catalog: Catalog,
    pub progress: ProgressStore,
}

impl App {
    /// Load the catalog and open the progress store
    pub fn new(catalog_path: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_data_dir().context("Failed to resolve data directory")?,
        };

        let catalog_path = match catalog_path {
            Some(path) => path.to_path_buf(),
            None => data_dir.join("vocabulary.json"),
        };

        let catalog = Catalog::load(&catalog_path)
            .with_context(|| format!("Failed to load catalog from {:?}", catalog_path))?;

        let progress = ProgressStore::open(data_dir).context("Failed to open progress store")?;

        Ok(Self { catalog, progress })
    }
}

/// Default data directory, e.g. ~/.local/share/kalima
fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("kalima"))
}

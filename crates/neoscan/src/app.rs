//! Application context for CLI command execution.
//!
//! # Example
//!
//! ```no_run
//! use neoscan::app::App;
//! use neoscan::config::{ConfigOverrides, NeoscanConfig};
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config =
//!         NeoscanConfig::resolve(Path::new("."), None, ConfigOverrides::default()).await?;
//!     let app = App::load(config).await?;
//!     println!("{} NEOs loaded", app.database().neos().len());
//!     Ok(())
//! }
//! ```

use crate::config::NeoscanConfig;
use crate::database::NeoDatabase;
use crate::error::Result;
use crate::extract::{load_approaches, load_neos};
use neoscan_io::WarningCollector;

/// Loaded data plus the configuration it came from.
#[derive(Debug)]
pub struct App {
    config: NeoscanConfig,
    database: NeoDatabase,
    warnings: WarningCollector,
}

impl App {
    /// Load both data files named by `config` and link them.
    ///
    /// Skipped rows are kept in [`warnings`](Self::warnings); only an
    /// unreadable or structurally invalid file is an error.
    pub async fn load(config: NeoscanConfig) -> Result<Self> {
        let (neos, approaches) = tokio::try_join!(
            load_neos(&config.neos_path),
            load_approaches(&config.approaches_path)
        )?;

        let mut warnings = neos.warnings;
        warnings.extend(approaches.warnings);
        if !warnings.is_empty() {
            tracing::warn!(count = warnings.len(), "Some data rows were skipped");
        }

        let database = NeoDatabase::new(neos.records, approaches.records);
        Ok(Self {
            config,
            database,
            warnings,
        })
    }

    /// The effective configuration.
    pub fn config(&self) -> &NeoscanConfig {
        &self.config
    }

    /// The linked database.
    pub fn database(&self) -> &NeoDatabase {
        &self.database
    }

    /// Rows skipped while loading.
    pub fn warnings(&self) -> &WarningCollector {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ApproachSource;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_links_files() {
        let temp = TempDir::new().unwrap();
        let neos_path = temp.path().join("neos.csv");
        let cad_path = temp.path().join("cad.json");
        tokio::fs::write(&neos_path, "pdes,name,pha,diameter\n433,Eros,N,16.84\n433,Copy,N,\n")
            .await
            .unwrap();
        tokio::fs::write(
            &cad_path,
            r#"{"fields": ["des", "cd", "dist", "v_rel"], "data": [["433", "2020-Jan-01 12:30", "0.25", "5.1"]]}"#,
        )
        .await
        .unwrap();

        let config = NeoscanConfig {
            neos_path,
            approaches_path: cad_path,
            default_limit: None,
        };
        let app = App::load(config).await.unwrap();

        assert_eq!(app.database().neos().len(), 1);
        assert_eq!(app.warnings().len(), 1);
        let approach = &app.database().approaches()[0];
        assert_eq!(approach.neo_fullname(), "433 (Eros)");
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let config = NeoscanConfig {
            neos_path: temp.path().join("missing.csv"),
            approaches_path: temp.path().join("missing.json"),
            default_limit: None,
        };
        assert!(App::load(config).await.is_err());
    }
}

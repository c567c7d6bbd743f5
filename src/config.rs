use std::path::PathBuf;

use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Replaces the embedded content when set.
    pub catalog_path: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub site_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let catalog_path = dotenvy::var("ROUTE_CATALOG_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let export_dir = dotenvy::var("EXPORT_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map_or_else(|| PathBuf::from("docs"), PathBuf::from);

        let site_base_url = dotenvy::var("SITE_BASE_URL").unwrap_or_default();
        if !site_base_url.is_empty()
            && !site_base_url.starts_with("http://")
            && !site_base_url.starts_with("https://")
        {
            return Err(CatalogError::Config(format!(
                "SITE_BASE_URL must start with http:// or https://, got {site_base_url}"
            )));
        }

        Ok(Config {
            catalog_path,
            export_dir,
            site_base_url,
        })
    }
}

use std::error::Error;
use std::fs;

use chrono::Local;
use route_catalog::config::Config;
use route_catalog::export::{sitemap_entries, write_filtered, write_sitemap};
use route_catalog::Catalog;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct Prices<'a> {
    sedan: &'a str,
    van: &'a str,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_catalog=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading route catalog from {}", path.display());
            Catalog::from_path(path)?
        }
        None => Catalog::embedded()?,
    };

    info!(routes = catalog.len(), "Route catalog loaded");
    for route in &catalog {
        info!("{} -> {} ({})", route.from, route.to, route.slug);
    }

    fs::create_dir_all(&config.export_dir)?;

    write_filtered(&catalog, config.export_dir.join("prices.json"), |route| {
        Some(Prices {
            sedan: &route.sedan_price,
            van: &route.van_price,
        })
    })?;

    write_filtered(&catalog, config.export_dir.join("booking.json"), |route| {
        if route.book_href.is_empty() {
            None
        } else {
            Some(route.book_href.clone())
        }
    })?;

    let sitemap = sitemap_entries(&catalog, &config.site_base_url, Local::now().date_naive());
    write_sitemap(&sitemap, config.export_dir.join("sitemap.json"))?;

    info!(
        export_dir = %config.export_dir.display(),
        "Wrote prices.json, booking.json and sitemap.json"
    );

    Ok(())
}

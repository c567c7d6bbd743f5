use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::route::RouteDetail;
use crate::slug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
}

/// Writes `{slug: f(route)}` for every route `f` keeps.
pub fn write_filtered<'a, T, F>(
    catalog: &'a Catalog,
    path: impl AsRef<Path>,
    mut f: F,
) -> Result<()>
where
    T: Serialize,
    F: FnMut(&'a RouteDetail) -> Option<T>,
{
    let path = path.as_ref();
    let file = File::create(path)?;

    let writer = BufWriter::new(file);

    let out: BTreeMap<&'a str, T> = catalog
        .iter()
        .filter_map(|route| f(route).map(|value| (route.slug.as_str(), value)))
        .collect();

    debug!(entries = out.len(), path = %path.display(), "Writing filtered export");

    serde_json::to_writer_pretty(writer, &out)?;

    Ok(())
}

pub fn sitemap_entries(catalog: &Catalog, base_url: &str, lastmod: NaiveDate) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');

    catalog
        .iter()
        .map(|route| SitemapEntry {
            loc: format!("{base}{}", slug::route_page_path(&route.slug)),
            lastmod,
        })
        .collect()
}

pub fn write_sitemap(entries: &[SitemapEntry], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;

    let writer = BufWriter::new(file);

    Ok(serde_json::to_writer_pretty(writer, entries)?)
}

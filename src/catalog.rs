use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::Result;
use crate::route::RouteDetail;

const EMBEDDED_ROUTES: &str = include_str!("../docs/routes.json");

static ROUTE_CATALOG: Lazy<Catalog> = Lazy::new(|| match Catalog::embedded() {
    Ok(catalog) => {
        debug!(routes = catalog.len(), "Loaded embedded route catalog");
        catalog
    }
    Err(e) => {
        error!("Embedded route catalog is unreadable, serving no routes: {}", e);
        Catalog::default()
    }
});

/// Ordered, read-only collection of route details.
///
/// Slugs are expected to be unique. Lookup does not check this; the first
/// entry with a matching slug wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    routes: Vec<RouteDetail>,
}

impl Catalog {
    pub fn new(routes: Vec<RouteDetail>) -> Self {
        Self { routes }
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_ROUTES)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;

        let reader = BufReader::new(file);

        Ok(serde_json::from_reader(reader)?)
    }

    /// Exact, case-sensitive slug match. A miss is `None`.
    pub fn get_by_slug(&self, slug: &str) -> Option<&RouteDetail> {
        self.routes.iter().find(|route| route.slug == slug)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteDetail> {
        self.routes.iter()
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.slug.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RouteDetail;
    type IntoIter = std::slice::Iter<'a, RouteDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The process-wide catalog, parsed from the embedded content on first use.
pub fn route_catalog() -> &'static Catalog {
    &ROUTE_CATALOG
}

pub fn get_route_detail_by_slug(slug: &str) -> Option<&'static RouteDetail> {
    let route = route_catalog().get_by_slug(slug);
    if route.is_none() {
        debug!(slug, "No route detail for slug");
    }
    route
}

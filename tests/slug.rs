use route_catalog::route_catalog;
use route_catalog::slug::{booking_href, booking_route_param, route_page_path, slugify};

#[test]
fn test_slugify_simple_endpoints() {
    assert_eq!(slugify("Nicosia", "Limassol"), "nicosia-limassol");
}

#[test]
fn test_slugify_strips_punctuation() {
    assert_eq!(
        slugify("Larnaca Airport (LCA)", "Nicosia"),
        "larnaca-airport-lca-nicosia"
    );
}

#[test]
fn test_slugify_trims_edges() {
    assert_eq!(slugify("-Paphos", "Troodos_"), "paphos-troodos");
    assert_eq!(slugify("", ""), "");
}

#[test]
fn test_route_page_path() {
    assert_eq!(route_page_path("limassol-paphos"), "/routes/limassol-paphos");
}

#[test]
fn test_booking_href_roundtrip() {
    let href = booking_href("larnaca-airport-kyrenia");
    assert_eq!(href, "/booking?route=larnaca-airport-kyrenia");
    assert_eq!(booking_route_param(&href), Some("larnaca-airport-kyrenia"));
}

#[test]
fn test_booking_route_param_missing() {
    assert_eq!(booking_route_param("/booking"), None);
    assert_eq!(booking_route_param("/contact?from=nicosia"), None);
}

#[test]
fn test_every_booking_link_carries_its_slug() {
    for route in route_catalog() {
        assert_eq!(route.book_href, booking_href(&route.slug));
        assert_eq!(route.booking_slug(), Some(route.slug.as_str()));
        assert_eq!(route.page_path(), format!("/routes/{}", route.slug));
    }
}

#[test]
fn test_slugify_folds_accented_place_names() {
    assert_eq!(slugify("Café", "Nicosia"), "cafe-nicosia");
    assert_eq!(slugify("Ayía Nápa", "Lárnaka"), "ayia-napa-larnaka");
}

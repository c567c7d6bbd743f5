use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// Constant patterns; a compile failure here is a bug in the pattern itself.
#[allow(clippy::expect_used)]
static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("Invalid slug character regex"));

#[allow(clippy::expect_used)]
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]+").expect("Invalid separator regex"));

#[allow(clippy::expect_used)]
static ROUTE_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^#]*?[?&]route=([^&#]+)").expect("Invalid route param regex"));

/// Derives a slug from a route's endpoint names, e.g.
/// `("Larnaca Airport (LCA)", "Nicosia")` becomes `larnaca-airport-lca-nicosia`.
///
/// Accented letters are decomposed (NFKD) and reduced to their ASCII base,
/// so `Ayía Nápa` slugs as `ayia-napa`. Other non-ASCII characters are dropped.
pub fn slugify(from: &str, to: &str) -> String {
    let ascii: String = format!("{from}-{to}").nfkd().filter(char::is_ascii).collect();
    let lowered = ascii.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    let joined = SEPARATORS.replace_all(cleaned.trim(), "-");
    joined.trim_matches(|c| c == '-' || c == '_').to_string()
}

pub fn route_page_path(slug: &str) -> String {
    format!("/routes/{slug}")
}

pub fn booking_href(slug: &str) -> String {
    format!("/booking?route={slug}")
}

/// Value of the `route` query parameter in a booking link. Anything after
/// `#` is the fragment and is not searched.
pub fn booking_route_param(href: &str) -> Option<&str> {
    ROUTE_PARAM
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Ayia   Napa ", "Paphos -- Airport"), "ayia-napa-paphos-airport");
    }

    #[test]
    fn test_slugify_folds_accents_to_ascii() {
        assert_eq!(slugify("Café", "Nicosia"), "cafe-nicosia");
        assert_eq!(slugify("Ayía Nápa", "Ercan Airport (ECN)"), "ayia-napa-ercan-airport-ecn");
    }

    #[test]
    fn test_slugify_drops_characters_without_ascii_base() {
        assert_eq!(slugify("Λευκωσία", "Limassol → Port"), "limassol-port");
    }

    #[test]
    fn test_booking_route_param_ignores_other_params() {
        assert_eq!(
            booking_route_param("/booking?lang=en&route=limassol-paphos#top"),
            Some("limassol-paphos")
        );
        assert_eq!(booking_route_param("/booking?router=x"), None);
        assert_eq!(booking_route_param("/booking?route="), None);
    }

    #[test]
    fn test_booking_route_param_ignores_fragment() {
        assert_eq!(booking_route_param("/booking#x?route=y"), None);
        assert_eq!(booking_route_param("/booking?route=a#route=b"), Some("a"));
    }
}

use serde::{Deserialize, Serialize};

use crate::slug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFaq {
    pub question: String,
    pub answer: String,
}

/// One bookable vehicle tier on a route. All fields are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleOption {
    #[serde(rename = "type")]
    pub kind: String,
    pub max_passengers: String,
    pub ideal_for: String,
    pub fixed_price: String,
}

/// A directional transfer route as shown on `/routes/{slug}`.
///
/// Prices, distance and time are kept exactly as written in the content;
/// nothing here parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_route_id: Option<String>,

    pub slug: String,
    pub from: String,
    pub to: String,

    pub meta_title: String,
    pub meta_description: String,

    pub hero_title: String,
    pub subheadline: String,

    pub body: String,

    pub distance: String,
    pub time: String,
    pub sedan_price: String,
    pub van_price: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_makes_better: Option<Vec<String>>,
    pub whats_included: Vec<String>,
    pub vehicle_options: Vec<VehicleOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_highlights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_for: Option<Vec<String>>,

    pub faq: Vec<RouteFaq>,

    pub image: String,
    pub book_href: String,
    pub book_cta_label: String,
    pub book_cta_support: String,
}

impl RouteDetail {
    pub fn page_path(&self) -> String {
        slug::route_page_path(&self.slug)
    }

    /// The `route` parameter carried by `book_href`, if any.
    pub fn booking_slug(&self) -> Option<&str> {
        slug::booking_route_param(&self.book_href)
    }
}

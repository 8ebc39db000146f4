//! Catalog Models
//!
//! Data structures matching the remote beer API payload.

use serde::{Deserialize, Serialize};

/// Fallback image shown when a beer has no usable image URL.
pub const PLACEHOLDER_IMAGE: &str =
    "https://img.freepik.com/premium-vector/default-image-icon-vector-missing-picture-page-website-design-mobile-app-no-photo-available_87543-11093.jpg";

/// One beverage record from the catalog endpoint.
///
/// The remote payload is loosely shaped: everything beyond `id` and `name`
/// may be absent, and records may carry extra fields we ignore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Currency string, e.g. "$4.50"
    #[serde(default)]
    pub price: Option<String>,
    /// Percentage string, e.g. "5.2%"
    #[serde(default)]
    pub alcohol: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Image URL a card starts with: the beer's own image, or the
/// placeholder when it is absent or empty. A URL that later fails to
/// load is swapped reactively by the card itself.
pub fn initial_image_src(beer: &Beer) -> String {
    match beer.image {
        Some(ref url) if !url.is_empty() => url.clone(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Aggregate rating attached to a beer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 1,
            "name": "Pale Ale",
            "price": "$5.00",
            "alcohol": "5%",
            "image": "https://example.com/ale.png",
            "rating": { "average": 4.2, "reviews": 120 }
        }"#;
        let beer: Beer = serde_json::from_str(json).unwrap();
        assert_eq!(beer.name, "Pale Ale");
        assert_eq!(beer.price.as_deref(), Some("$5.00"));
        assert_eq!(beer.rating.as_ref().unwrap().average, Some(4.2));
        assert_eq!(beer.rating.as_ref().unwrap().reviews, Some(120));
    }

    #[test]
    fn test_deserialize_partial_record() {
        // Missing price/alcohol/image/rating must not fail
        let json = r#"{ "id": 7, "name": "Mystery Brew" }"#;
        let beer: Beer = serde_json::from_str(json).unwrap();
        assert_eq!(beer.id, 7);
        assert!(beer.price.is_none());
        assert!(beer.alcohol.is_none());
        assert!(beer.image.is_none());
        assert!(beer.rating.is_none());
    }

    #[test]
    fn test_deserialize_tolerates_extra_fields() {
        let json = r#"{ "id": 2, "name": "Stout", "brewery": "Acme", "tags": ["dark"] }"#;
        let beer: Beer = serde_json::from_str(json).unwrap();
        assert_eq!(beer.name, "Stout");
    }

    #[test]
    fn test_initial_image_src_falls_back_to_placeholder() {
        let mut beer: Beer = serde_json::from_str(r#"{ "id": 1, "name": "Pale Ale" }"#).unwrap();
        assert_eq!(initial_image_src(&beer), PLACEHOLDER_IMAGE);

        beer.image = Some(String::new());
        assert_eq!(initial_image_src(&beer), PLACEHOLDER_IMAGE);

        beer.image = Some("https://example.com/ale.png".to_string());
        assert_eq!(initial_image_src(&beer), "https://example.com/ale.png");
    }

    #[test]
    fn test_deserialize_rating_with_missing_subfields() {
        let json = r#"{ "id": 3, "name": "Lager", "rating": { "reviews": 5 } }"#;
        let beer: Beer = serde_json::from_str(json).unwrap();
        let rating = beer.rating.unwrap();
        assert_eq!(rating.average, None);
        assert_eq!(rating.reviews, Some(5));
    }
}

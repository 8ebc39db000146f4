//! Catalog Derivation
//!
//! Pure filter/sort/paginate pipeline over the fetched beer list.
//! Framework-free so it can be unit tested without rendering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Beer;

/// Cards revealed initially and per "Show More" activation.
pub const PAGE_STEP: usize = 9;

/// Sort modes offered by the sort selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortBy {
    /// Value attribute used by the sort `<select>` options.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Default => "default",
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
            SortBy::RatingDesc => "rating_desc",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to `Default`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "price_asc" => SortBy::PriceAsc,
            "price_desc" => SortBy::PriceDesc,
            "rating_desc" => SortBy::RatingDesc,
            _ => SortBy::Default,
        }
    }
}

/// User-adjustable inputs to the derivation pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive name substring; empty matches everything
    pub search: String,
    pub sort_by: SortBy,
    /// Beers with parsed alcohol above this are filtered out
    pub max_alcohol: f64,
    /// Pagination cutoff; grows by PAGE_STEP, never shrinks
    pub visible_count: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_by: SortBy::Default,
            max_alcohol: 0.0,
            visible_count: PAGE_STEP,
        }
    }
}

/// One derived render slice
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    /// Filtered, sorted, paginated beers in display order
    pub beers: Vec<Beer>,
    /// Filtered count before pagination
    pub filtered_count: usize,
    /// Whether more filtered beers remain beyond the visible slice
    pub has_more: bool,
}

/// Parse an alcohol percentage string like "5.2%".
/// Absent or unparsable values are treated as 0.
pub fn parse_alcohol(alcohol: Option<&str>) -> f64 {
    alcohol
        .map(|s| s.trim().trim_end_matches('%').trim())
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse a price string like "$4.50".
/// Absent or unparsable values are treated as 0.
pub fn parse_price(price: Option<&str>) -> f64 {
    price
        .map(|s| s.trim().trim_start_matches('$').trim())
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Rating sort key; a missing rating or missing average orders lowest.
fn rating_key(beer: &Beer) -> f64 {
    beer.rating
        .as_ref()
        .and_then(|r| r.average)
        .unwrap_or(f64::NEG_INFINITY)
}

fn price_cmp(a: &Beer, b: &Beer) -> Ordering {
    parse_price(a.price.as_deref()).total_cmp(&parse_price(b.price.as_deref()))
}

/// Run the full filter -> sort -> paginate pipeline.
///
/// Pure function of its inputs: the source list is never mutated and
/// recomputing with unchanged inputs yields an identical page.
pub fn derive_page(beers: &[Beer], query: &CatalogQuery) -> CatalogPage {
    let needle = query.search.to_lowercase();

    let mut filtered: Vec<&Beer> = beers
        .iter()
        .filter(|beer| {
            let matches_search =
                needle.is_empty() || beer.name.to_lowercase().contains(&needle);
            matches_search && parse_alcohol(beer.alcohol.as_deref()) <= query.max_alcohol
        })
        .collect();
    let filtered_count = filtered.len();

    // Stable sorts, so ties keep filter order
    match query.sort_by {
        SortBy::Default => {}
        SortBy::PriceAsc => filtered.sort_by(|a, b| price_cmp(a, b)),
        SortBy::PriceDesc => filtered.sort_by(|a, b| price_cmp(b, a)),
        SortBy::RatingDesc => {
            filtered.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a)))
        }
    }

    let beers = filtered
        .into_iter()
        .take(query.visible_count)
        .cloned()
        .collect();

    CatalogPage {
        beers,
        filtered_count,
        has_more: query.visible_count < filtered_count,
    }
}

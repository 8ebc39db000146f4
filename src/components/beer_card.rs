//! Beer Card Component
//!
//! Single catalog card with image fallback.

use leptos::prelude::*;

use crate::models::{initial_image_src, Beer, PLACEHOLDER_IMAGE};

/// One beer card: image, name, price and rating.
///
/// The image source is a per-card signal so a load error can swap in the
/// placeholder without touching any other card.
#[component]
pub fn BeerCard(beer: Beer) -> impl IntoView {
    let (img_src, set_img_src) = signal(initial_image_src(&beer));

    let price_text = beer.price.clone().unwrap_or_default();
    let rating_text = match beer.rating {
        Some(ref rating) => {
            let average = rating
                .average
                .map(|a| format!("{:.2}", a))
                .unwrap_or_else(|| "-".to_string());
            format!("{} ({} reviews)", average, rating.reviews.unwrap_or(0))
        }
        None => "-".to_string(),
    };

    view! {
        <div class="beer-card">
            <div class="image-wrapper">
                <img
                    src=move || img_src.get()
                    class="beer-image"
                    alt=beer.name.clone()
                    loading="lazy"
                    on:error=move |_| set_img_src.set(PLACEHOLDER_IMAGE.to_string())
                />
            </div>
            <div class="card-body">
                <h5 class="card-title">{beer.name.clone()}</h5>
                <p class="card-text">
                    <strong>"Price: "</strong>
                    {price_text}
                    <br/>
                    <strong>"Rating: "</strong>
                    {rating_text}
                </p>
            </div>
        </div>
    }
}

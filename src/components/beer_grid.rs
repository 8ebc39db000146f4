//! Beer Grid Component
//!
//! Responsive card grid over the derived page slice.

use leptos::prelude::*;

use crate::components::BeerCard;
use crate::models::Beer;

#[component]
pub fn BeerGrid(beers: Signal<Vec<Beer>>) -> impl IntoView {
    view! {
        <div class="beer-grid">
            <For
                each=move || beers.get()
                key=|beer| beer.id
                children=move |beer| view! { <BeerCard beer=beer /> }
            />
        </div>
    }
}

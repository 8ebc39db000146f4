//! Beer Catalog App
//!
//! Root component: age gate overlay, sticky top bar, card grid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::catalog::{derive_page, CatalogPage, CatalogQuery, SortBy, PAGE_STEP};
use crate::components::{AgeGate, BeerGrid, NavBar};
use crate::models::Beer;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (beers, set_beers) = signal(Vec::<Beer>::new());
    let (search, set_search) = signal(String::new());
    let (sort_by, set_sort_by) = signal(SortBy::Default);
    let (max_alcohol, set_max_alcohol) = signal(0.0f64);
    let (visible_count, set_visible_count) = signal(PAGE_STEP);
    let (age_confirmed, set_age_confirmed) = signal(false);

    // One-shot load on mount; runs whether or not the age gate is up.
    // Fetch failure leaves the list empty and is only logged.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_beers().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[CATALOG] Loaded {} beers", loaded.len()).into(),
                    );
                    set_beers.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[CATALOG] Error fetching data: {}", e).into(),
                    );
                }
            }
        });
    });

    // Derived page, recomputed on any input change
    let page: Memo<CatalogPage> = Memo::new(move |_| {
        let query = CatalogQuery {
            search: search.get(),
            sort_by: sort_by.get(),
            max_alcohol: max_alcohol.get(),
            visible_count: visible_count.get(),
        };
        derive_page(&beers.get(), &query)
    });

    view! {
        // Visual overlay only; the catalog below stays in the layout
        <Show when=move || !age_confirmed.get()>
            <AgeGate on_confirm=Callback::new(move |_| set_age_confirmed.set(true)) />
        </Show>

        <NavBar
            search=search
            set_search=set_search
            sort_by=sort_by
            set_sort_by=set_sort_by
            max_alcohol=max_alcohol
            set_max_alcohol=set_max_alcohol
        />

        <main class="catalog-content">
            <BeerGrid beers=Signal::derive(move || page.get().beers) />

            <Show when=move || page.get().has_more>
                <div class="show-more-row">
                    <button
                        class="show-more-btn"
                        on:click=move |_| set_visible_count.update(|v| *v += PAGE_STEP)
                    >
                        "Show More"
                    </button>
                </div>
            </Show>
        </main>
    }
}

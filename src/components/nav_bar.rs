//! Nav Bar Component
//!
//! Sticky top bar with search, max-alcohol filter and sort selector.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::SortBy;

/// Sort options shown in the selector, as (value, label) pairs
const SORT_OPTIONS: &[(&str, &str)] = &[
    ("default", "Sort by"),
    ("price_asc", "Price: Low to High"),
    ("price_desc", "Price: High to Low"),
    ("rating_desc", "Rating: High to Low"),
];

#[component]
pub fn NavBar(
    search: ReadSignal<String>,
    set_search: WriteSignal<String>,
    sort_by: ReadSignal<SortBy>,
    set_sort_by: WriteSignal<SortBy>,
    max_alcohol: ReadSignal<f64>,
    set_max_alcohol: WriteSignal<f64>,
) -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar-brand" href="#">"🍺 Beer Catalog"</a>
            <div class="navbar-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search beers..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_search.set(input.value());
                    }
                />
                <label class="alcohol-label">
                    "Max alcohol %"
                    <input
                        type="number"
                        class="alcohol-input"
                        min="0"
                        step="0.5"
                        prop:value=move || max_alcohol.get().to_string()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            // Unparsable input falls back to the 0 default
                            set_max_alcohol.set(input.value().parse().unwrap_or(0.0));
                        }
                    />
                </label>
                <select
                    class="sort-select"
                    prop:value=move || sort_by.get().as_str()
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        set_sort_by.set(SortBy::from_value(&select.value()));
                    }
                >
                    {SORT_OPTIONS.iter().map(|(value, label)| {
                        view! { <option value={*value}>{*label}</option> }
                    }).collect_view()}
                </select>
            </div>
        </nav>
    }
}

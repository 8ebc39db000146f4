//! UI Components
//!
//! Reusable Leptos components.

mod age_gate;
mod beer_card;
mod beer_grid;
mod nav_bar;

pub use age_gate::AgeGate;
pub use beer_card::BeerCard;
pub use beer_grid::BeerGrid;
pub use nav_bar::NavBar;

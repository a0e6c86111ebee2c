//! # Catalog Commands
//!
//! Browsing commands for the landing screen: category chips, restaurant
//! cards, dish tiles, search and favourites.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ Search restaurants or dishes...          ]   ◄── search_catalog     │
//! │                                                                         │
//! │  (All) (Indian) (Fast Food) (Healthy) ...       ◄── list_categories    │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐                                      │
//! │  │ Curry Kingdom│ │Pizza Paradise│              ◄── list_restaurants   │
//! │  └──────────────┘ └──────────────┘                   (by category)     │
//! │                                                                         │
//! │  Grilled Veggie Bowl  ₹249   ♡                  ◄── list_dishes        │
//! │  Chicken Tikka Masala ₹329   ♥                  ◄── toggle_favorite    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tiffin_core::{Category, Dish, Restaurant, SearchResults};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Lists restaurants, optionally filtered by a category chip.
///
/// ## Arguments
/// * `category_id` - Category to filter by (`None` or the "All" chip: every restaurant)
pub fn list_restaurants(
    catalog: &CatalogState,
    category_id: Option<&str>,
) -> Result<Vec<Restaurant>, ApiError> {
    debug!(?category_id, "list_restaurants command");

    catalog.with_catalog(|c| -> Result<Vec<Restaurant>, ApiError> {
        match category_id {
            Some(id) => Ok(c.restaurants_in_category(id)?.into_iter().cloned().collect()),
            None => Ok(c.restaurants().to_vec()),
        }
    })
}

/// Restaurants flagged for the carousel at the top of the landing screen.
pub fn list_featured_restaurants(catalog: &CatalogState) -> Vec<Restaurant> {
    catalog.with_catalog(|c| c.featured_restaurants().into_iter().cloned().collect())
}

pub fn list_dishes(catalog: &CatalogState) -> Vec<Dish> {
    debug!("list_dishes command");
    catalog.with_catalog(|c| c.dishes().to_vec())
}

pub fn list_categories(catalog: &CatalogState) -> Vec<Category> {
    catalog.with_catalog(|c| c.categories().to_vec())
}

/// Searches restaurants and dishes (case-insensitive substring).
pub fn search_catalog(catalog: &CatalogState, query: &str) -> Result<SearchResults, ApiError> {
    debug!(query = %query, "search_catalog command");
    Ok(catalog.with_catalog(|c| c.search(query))?)
}

/// Flips a dish's favourite flag and returns the new value.
pub fn toggle_favorite(catalog: &CatalogState, dish_id: &str) -> Result<bool, ApiError> {
    debug!(dish_id = %dish_id, "toggle_favorite command");
    Ok(catalog.with_catalog_mut(|c| c.toggle_favorite(dish_id))?)
}

pub fn list_favorites(catalog: &CatalogState) -> Vec<Dish> {
    catalog.with_catalog(|c| c.favorites().into_iter().cloned().collect())
}

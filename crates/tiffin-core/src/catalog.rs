//! # Catalog
//!
//! The static restaurant, dish and category data behind the landing screen.
//!
//! There is no menu service: the catalog ships with the app and the only
//! state it carries is the user's favourite flags.
//!
//! ## Landing Screen Data
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ All ] [ Indian ] [ Fast Food ] [ Healthy ] [ Italian ] [ Chinese ]   │
//! │                                                                         │
//! │  Top Restaurants                                                        │
//! │  Flavor Haven ⭐4.6 • 20-30 min • ₹30 • 20% OFF                         │
//! │  Curry Kingdom ⭐4.8 • 15-25 min • ₹40 • 15% OFF                        │
//! │  ...                                                                    │
//! │                                                                         │
//! │  Popular Dishes                                                         │
//! │  Grilled Veggie Bowl  ₹249  ♡                                           │
//! │  Chicken Tikka Masala ₹329  ♥                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::LineItem;
use crate::validation::{validate_search_query, ValidationResult};

/// Category id that matches every restaurant.
pub const ALL_CATEGORY_ID: &str = "1";

// =============================================================================
// Records
// =============================================================================

/// A restaurant card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Average rating out of 5.
    pub rating: f32,
    /// Human readable window, e.g. "20-30 min".
    pub delivery_time: String,
    /// Advertised delivery fee; `None` means free delivery.
    pub delivery_fee: Option<Money>,
    pub image: String,
    /// Comma separated cuisines, e.g. "Indian, Spicy".
    pub cuisine: String,
    pub featured: bool,
    /// Promo badge, e.g. "20% OFF".
    pub promo: Option<String>,
}

impl Restaurant {
    /// Whether the restaurant serves the named cuisine.
    pub fn serves(&self, cuisine: &str) -> bool {
        self.cuisine
            .split(',')
            .any(|c| c.trim().eq_ignore_ascii_case(cuisine.trim()))
    }
}

/// A dish card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub image: String,
    /// Name of the restaurant serving the dish.
    pub restaurant: String,
    pub rating: f32,
    pub time_estimate: String,
    pub is_favorite: bool,
}

impl Dish {
    /// Builds the line item the cart stores for this dish.
    ///
    /// Price, image and restaurant are frozen at the moment of adding.
    pub fn to_line_item(&self) -> LineItem {
        LineItem::new(&self.id, &self.name, self.price)
            .with_image(&self.image)
            .with_restaurant(&self.restaurant)
    }
}

/// A filter chip on the landing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Results of a free-text search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchResults {
    pub restaurants: Vec<Restaurant>,
    pub dishes: Vec<Dish>,
}

// =============================================================================
// Catalog
// =============================================================================

/// Restaurants, dishes and categories shown while browsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    dishes: Vec<Dish>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Builds a catalog from explicit data.
    pub fn new(restaurants: Vec<Restaurant>, dishes: Vec<Dish>, categories: Vec<Category>) -> Self {
        Catalog {
            restaurants,
            dishes,
            categories,
        }
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Featured restaurants, in catalog order.
    pub fn featured_restaurants(&self) -> Vec<&Restaurant> {
        self.restaurants.iter().filter(|r| r.featured).collect()
    }

    /// Looks up a dish by id.
    pub fn dish(&self, id: &str) -> CoreResult<&Dish> {
        self.dishes
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| CoreError::DishNotFound(id.to_string()))
    }

    /// Restaurants for a category chip.
    ///
    /// ## Behavior
    /// - The "All" chip matches every restaurant
    /// - Any other chip matches restaurants whose cuisine list names it
    /// - A known category may match nothing (e.g. "Chinese")
    pub fn restaurants_in_category(&self, category_id: &str) -> CoreResult<Vec<&Restaurant>> {
        let category = self
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| CoreError::CategoryNotFound(category_id.to_string()))?;

        if category.id == ALL_CATEGORY_ID {
            return Ok(self.restaurants.iter().collect());
        }

        Ok(self
            .restaurants
            .iter()
            .filter(|r| r.serves(&category.name))
            .collect())
    }

    /// Case-insensitive substring search.
    ///
    /// Restaurants match on name or cuisine, dishes on name or restaurant.
    /// An empty query returns everything.
    pub fn search(&self, query: &str) -> ValidationResult<SearchResults> {
        let query = validate_search_query(query)?.to_lowercase();
        let matches = |field: &str| field.to_lowercase().contains(&query);

        Ok(SearchResults {
            restaurants: self
                .restaurants
                .iter()
                .filter(|r| matches(r.name.as_str()) || matches(r.cuisine.as_str()))
                .cloned()
                .collect(),
            dishes: self
                .dishes
                .iter()
                .filter(|d| matches(d.name.as_str()) || matches(d.restaurant.as_str()))
                .cloned()
                .collect(),
        })
    }

    /// Flips a dish's favourite flag.
    ///
    /// ## Returns
    /// The new flag value.
    pub fn toggle_favorite(&mut self, dish_id: &str) -> CoreResult<bool> {
        let dish = self
            .dishes
            .iter_mut()
            .find(|d| d.id == dish_id)
            .ok_or_else(|| CoreError::DishNotFound(dish_id.to_string()))?;

        dish.is_favorite = !dish.is_favorite;
        Ok(dish.is_favorite)
    }

    pub fn favorites(&self) -> Vec<&Dish> {
        self.dishes.iter().filter(|d| d.is_favorite).collect()
    }
}

/// The catalog that ships with the app.
impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(default_restaurants(), default_dishes(), default_categories())
    }
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: &str,
    name: &str,
    rating: f32,
    delivery_time: &str,
    delivery_fee: Option<i64>,
    image: &str,
    cuisine: &str,
    featured: bool,
    promo: Option<&str>,
) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        delivery_time: delivery_time.to_string(),
        delivery_fee: delivery_fee.map(Money::from_units),
        image: image.to_string(),
        cuisine: cuisine.to_string(),
        featured,
        promo: promo.map(str::to_string),
    }
}

fn default_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            "1",
            "Flavor Haven",
            4.6,
            "20-30 min",
            Some(30),
            "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg",
            "Continental, Healthy",
            true,
            Some("20% OFF"),
        ),
        restaurant(
            "2",
            "Curry Kingdom",
            4.8,
            "15-25 min",
            Some(40),
            "https://images.pexels.com/photos/674574/pexels-photo-674574.jpeg",
            "Indian, Spicy",
            true,
            Some("15% OFF"),
        ),
        restaurant(
            "3",
            "Burger Bonanza",
            4.5,
            "25-35 min",
            Some(25),
            "https://images.pexels.com/photos/1639557/pexels-photo-1639557.jpeg",
            "American, Fast Food",
            false,
            None,
        ),
        restaurant(
            "4",
            "Pizza Paradise",
            4.7,
            "30-40 min",
            None,
            "https://images.pexels.com/photos/2619970/pexels-photo-2619970.jpeg",
            "Italian, Pizza",
            true,
            Some("FREE DELIVERY"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn dish(
    id: &str,
    name: &str,
    price: i64,
    image: &str,
    restaurant: &str,
    rating: f32,
    time_estimate: &str,
    is_favorite: bool,
) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_units(price),
        image: image.to_string(),
        restaurant: restaurant.to_string(),
        rating,
        time_estimate: time_estimate.to_string(),
        is_favorite,
    }
}

fn default_dishes() -> Vec<Dish> {
    vec![
        dish(
            "1",
            "Grilled Veggie Bowl",
            249,
            "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg",
            "Flavor Haven",
            4.6,
            "20 min",
            false,
        ),
        dish(
            "2",
            "Chicken Tikka Masala",
            329,
            "https://images.pexels.com/photos/674574/pexels-photo-674574.jpeg",
            "Curry Kingdom",
            4.8,
            "15 min",
            true,
        ),
        dish(
            "3",
            "Double Cheese Burger",
            199,
            "https://images.pexels.com/photos/1639557/pexels-photo-1639557.jpeg",
            "Burger Bonanza",
            4.5,
            "25 min",
            false,
        ),
        dish(
            "4",
            "Pasta Primavera",
            279,
            "https://images.pexels.com/photos/1437267/pexels-photo-1437267.jpeg",
            "Flavor Haven",
            4.6,
            "20 min",
            true,
        ),
    ]
}

fn default_categories() -> Vec<Category> {
    [
        (ALL_CATEGORY_ID, "All"),
        ("2", "Indian"),
        ("3", "Fast Food"),
        ("4", "Healthy"),
        ("5", "Italian"),
        ("6", "Chinese"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(restaurants: impl IntoIterator<Item = &'a Restaurant>) -> Vec<&'a str> {
        restaurants.into_iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_default_catalog_shape() {
        let catalog = Catalog::default();
        assert_eq!(catalog.restaurants().len(), 4);
        assert_eq!(catalog.dishes().len(), 4);
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.featured_restaurants().len(), 3);
    }

    #[test]
    fn test_dish_lookup() {
        let catalog = Catalog::default();
        assert_eq!(catalog.dish("2").unwrap().name, "Chicken Tikka Masala");
        assert_eq!(
            catalog.dish("99"),
            Err(CoreError::DishNotFound("99".to_string()))
        );
    }

    #[test]
    fn test_dish_to_line_item() {
        let catalog = Catalog::default();
        let item = catalog.dish("1").unwrap().to_line_item();

        assert_eq!(item.id, "1");
        assert_eq!(item.unit_price.units(), 249);
        assert_eq!(item.restaurant.as_deref(), Some("Flavor Haven"));
        assert!(item.image.is_some());
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::default();

        let all = catalog.restaurants_in_category(ALL_CATEGORY_ID).unwrap();
        assert_eq!(all.len(), 4);

        let indian = catalog.restaurants_in_category("2").unwrap();
        assert_eq!(names(indian), vec!["Curry Kingdom"]);

        let fast_food = catalog.restaurants_in_category("3").unwrap();
        assert_eq!(names(fast_food), vec!["Burger Bonanza"]);

        assert!(catalog.restaurants_in_category("6").unwrap().is_empty());
        assert!(matches!(
            catalog.restaurants_in_category("42"),
            Err(CoreError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::default();

        let results = catalog.search("flavor").unwrap();
        assert_eq!(names(&results.restaurants), vec!["Flavor Haven"]);
        // Dishes match on their restaurant too
        assert_eq!(results.dishes.len(), 2);

        let results = catalog.search("  PIZZA ").unwrap();
        assert_eq!(names(&results.restaurants), vec!["Pizza Paradise"]);
        assert!(results.dishes.is_empty());

        let everything = catalog.search("").unwrap();
        assert_eq!(everything.restaurants.len(), 4);
        assert_eq!(everything.dishes.len(), 4);

        assert!(catalog.search(&"x".repeat(200)).is_err());
    }

    #[test]
    fn test_toggle_favorite() {
        let mut catalog = Catalog::default();
        assert_eq!(catalog.favorites().len(), 2);

        assert!(catalog.toggle_favorite("1").unwrap());
        assert_eq!(catalog.favorites().len(), 3);

        assert!(!catalog.toggle_favorite("1").unwrap());
        assert!(catalog.toggle_favorite("nope").is_err());
    }
}

//! Lookup entities and restaurant records as served by the review API.
//!
//! Regions and categories share the same `{id, name}` shape but are kept as
//! distinct types so a region id can never be used to select a category.
//! Restaurants arrive in two forms: the summary form listed per region and
//! category, and the detail form with menu and reviews. Both decode into
//! [`Restaurant`]; detail fields default when the server omits them.

use serde::{Deserialize, Serialize};

/// A geographic region used to filter restaurants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
}

impl Region {
    /// Creates a region from an id and display name.
    ///
    /// ```
    /// use eatgo::domain::Region;
    ///
    /// let region = Region::new(1, "서울");
    /// assert_eq!(region.name, "서울");
    /// ```
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A food category used to filter restaurants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// Creates a category from an id and display name.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single menu entry on a restaurant detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
}

/// A review left by a user on a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    /// Display name of the reviewer.
    pub name: String,
    pub score: u32,
    pub description: String,
}

/// A restaurant in summary or detail form.
///
/// # Fields
///
/// - `id`, `name`: always present
/// - `category_id`: category the restaurant is listed under, if known
/// - `address`: street address, only on the detail form
/// - `menu_items`: menu entries, empty on the summary form
/// - `reviews`: user reviews, empty on the summary form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu_items: Vec<MenuItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
}

impl Restaurant {
    /// Creates a restaurant in summary form.
    ///
    /// ```
    /// use eatgo::domain::Restaurant;
    ///
    /// let restaurant = Restaurant::new(1, "마법사주방");
    /// assert!(restaurant.menu_items.is_empty());
    /// assert!(restaurant.address.is_none());
    /// ```
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category_id: None,
            address: None,
            menu_items: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Reviews sorted newest first (highest id first).
    #[must_use]
    pub fn recent_reviews(&self) -> Vec<&Review> {
        let mut reviews: Vec<&Review> = self.reviews.iter().collect();
        reviews.sort_by(|a, b| b.id.cmp(&a.id));
        reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_restaurant_decodes_without_detail_fields() {
        let restaurant: Restaurant =
            serde_json::from_str(r#"{"id": 1, "name": "마법사주방"}"#).unwrap();

        assert_eq!(restaurant, Restaurant::new(1, "마법사주방"));
        assert!(restaurant.address.is_none());
        assert!(restaurant.menu_items.is_empty());
    }

    #[test]
    fn test_detail_restaurant_decodes_camel_case_fields() {
        let json = r#"{
            "id": 1,
            "categoryId": 1,
            "name": "마법사주방",
            "address": "서울 강남구",
            "menuItems": [{"id": 1, "name": "비빔밥"}],
            "reviews": [
                {"id": 1, "name": "테스터", "score": 5, "description": "맛있어요"},
                {"id": 2, "name": "테스터", "score": 3, "description": "보통"}
            ]
        }"#;

        let restaurant: Restaurant = serde_json::from_str(json).unwrap();

        assert_eq!(restaurant.address.as_deref(), Some("서울 강남구"));
        assert_eq!(restaurant.category_id, Some(1));
        assert_eq!(restaurant.menu_items[0].name, "비빔밥");
        let recent: Vec<i64> = restaurant.recent_reviews().iter().map(|r| r.id).collect();
        assert_eq!(recent, vec![2, 1]);
    }

    #[test]
    fn test_summary_restaurant_serializes_without_empty_detail_fields() {
        let value = serde_json::to_value(Restaurant::new(7, "김밥천국")).unwrap();

        assert_eq!(value, serde_json::json!({"id": 7, "name": "김밥천국"}));
    }
}

//! Application state and view model computation.
//!
//! This module defines [`AppState`], the single value holding everything the
//! review site renders: lookup lists from the server, the current selections,
//! the login and review forms, and the access token.
//!
//! # Invariants
//!
//! - Every field is always populated. Absent relations are `None` or empty,
//!   never missing; partial JSON snapshots decode with defaults filled in.
//! - `selected_region` / `selected_category` hold a copy of the list entry
//!   that matched at selection time and are not re-validated afterwards.
//!
//! # Example
//!
//! ```rust
//! use eatgo::app::AppState;
//!
//! let state = AppState::default();
//! assert!(!state.is_logged_in());
//! assert_eq!(state.review_field.score, Some(0));
//! ```

use crate::domain::error::Result;
use crate::domain::{Category, Region, Restaurant};
use crate::ui::viewmodel::{
    EmptyState, LoginFormViewModel, OptionItem, PageViewModel, RestaurantDetailViewModel,
    ReviewFormViewModel, SelectorViewModel, TextFieldViewModel,
};
use serde::{Deserialize, Serialize};

/// Login form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginField {
    pub email: String,
    pub password: String,
}

/// Review form contents.
///
/// `score` is `None` when the score input has been cleared; the form starts at
/// `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewField {
    pub score: Option<u32>,
    pub description: String,
}

impl Default for ReviewField {
    fn default() -> Self {
        Self {
            score: Some(0),
            description: String::new(),
        }
    }
}

/// The single application state value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    /// Regions in server order.
    pub regions: Vec<Region>,

    /// Categories in server order.
    pub categories: Vec<Category>,

    /// Restaurants matching the current selection, in summary form.
    pub restaurants: Vec<Restaurant>,

    /// Restaurant shown on the detail page.
    pub restaurant: Option<Restaurant>,

    pub selected_region: Option<Region>,

    pub selected_category: Option<Category>,

    pub login_field: LoginField,

    /// Bearer token from the login endpoint; empty when logged out.
    pub access_token: String,

    pub review_field: ReviewField,
}

impl AppState {
    /// Decodes a state snapshot, filling any missing field with its default.
    ///
    /// # Errors
    ///
    /// Returns [`EatgoError::Json`](crate::EatgoError::Json) when the input is
    /// not valid JSON or a present field has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eatgo::app::AppState;
    ///
    /// let state = AppState::from_json(r#"{"accessToken": "TOKEN"}"#)?;
    /// assert!(state.is_logged_in());
    /// assert!(state.regions.is_empty());
    /// # Ok::<(), eatgo::EatgoError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the state with the wire (camelCase) field names.
    ///
    /// # Errors
    ///
    /// Returns [`EatgoError::Json`](crate::EatgoError::Json) if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Looks up a region by id in the current region list.
    #[must_use]
    pub fn find_region(&self, id: i64) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    /// Looks up a category by id in the current category list.
    #[must_use]
    pub fn find_category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Region and category ids when both are selected.
    #[must_use]
    pub fn selection(&self) -> Option<(i64, i64)> {
        match (&self.selected_region, &self.selected_category) {
            (Some(region), Some(category)) => Some((region.id, category.id)),
            _ => None,
        }
    }

    /// Computes the full page view model.
    ///
    /// The detail section and review form appear only when a restaurant
    /// detail is loaded; the review form additionally requires a login.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PageViewModel {
        let empty_state = if !self.restaurants.is_empty() {
            None
        } else if self.selection().is_none() {
            Some(EmptyState {
                message: "지역과 분류를 선택해 주세요".to_string(),
                subtitle: "Select a region and a category to list restaurants".to_string(),
            })
        } else {
            Some(EmptyState {
                message: "레스토랑이 없습니다".to_string(),
                subtitle: "No restaurants match this region and category".to_string(),
            })
        };

        let detail = self.restaurant_detail();
        let review_form = detail.as_ref().and_then(|_| self.review_form());

        PageViewModel {
            login: self.login_form(),
            regions: self.region_options(),
            categories: self.category_options(),
            restaurants: self.restaurant_items(),
            empty_state,
            detail,
            review_form,
        }
    }

    /// Computes the login form: input fields while logged out, a logout
    /// prompt once a token is present.
    #[must_use]
    pub fn login_form(&self) -> LoginFormViewModel {
        if self.is_logged_in() {
            return LoginFormViewModel::LoggedIn;
        }

        LoginFormViewModel::LoggedOut {
            email: TextFieldViewModel::email(&self.login_field.email),
            password: TextFieldViewModel::password(&self.login_field.password),
        }
    }

    /// Computes the review form, or `None` when the user cannot review.
    #[must_use]
    pub fn review_form(&self) -> Option<ReviewFormViewModel> {
        if !self.is_logged_in() {
            return None;
        }

        let score = self
            .review_field
            .score
            .map_or_else(String::new, |score| score.to_string());

        Some(ReviewFormViewModel {
            score: TextFieldViewModel::number("평점", "score", &score),
            description: TextFieldViewModel::text(
                "리뷰 내용",
                "description",
                &self.review_field.description,
            ),
        })
    }

    /// Restaurant entries, with the one whose detail is open marked.
    #[must_use]
    pub fn restaurant_items(&self) -> Vec<OptionItem> {
        let open = self.restaurant.as_ref().map(|restaurant| restaurant.id);
        self.restaurants
            .iter()
            .map(|restaurant| {
                OptionItem::new(restaurant.id, &restaurant.name, open == Some(restaurant.id))
            })
            .collect()
    }

    /// Computes the detail page of the loaded restaurant, if any.
    #[must_use]
    pub fn restaurant_detail(&self) -> Option<RestaurantDetailViewModel> {
        self.restaurant.as_ref().map(|restaurant| RestaurantDetailViewModel {
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            menu: restaurant.menu_items.iter().map(|item| item.name.clone()).collect(),
            reviews: restaurant
                .recent_reviews()
                .into_iter()
                .map(|review| {
                    format!("{}: {}점 / {}", review.name, review.score, review.description)
                })
                .collect(),
        })
    }

    /// Computes the region selector with the selected entry marked.
    #[must_use]
    pub fn region_options(&self) -> SelectorViewModel {
        let selected = self.selected_region.as_ref().map(|region| region.id);
        SelectorViewModel {
            title: "Regions".to_string(),
            items: self
                .regions
                .iter()
                .map(|region| OptionItem::new(region.id, &region.name, selected == Some(region.id)))
                .collect(),
        }
    }

    /// Computes the category selector with the selected entry marked.
    #[must_use]
    pub fn category_options(&self) -> SelectorViewModel {
        let selected = self.selected_category.as_ref().map(|category| category.id);
        SelectorViewModel {
            title: "Categories".to_string(),
            items: self
                .categories
                .iter()
                .map(|category| {
                    OptionItem::new(category.id, &category.name, selected == Some(category.id))
                })
                .collect(),
        }
    }
}

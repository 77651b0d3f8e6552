//! Pure state transitions.
//!
//! [`transition`] maps `(previous state, action)` to the next state. It never
//! fails, performs no I/O and never touches the previous value: the result is
//! always a fresh [`AppState`]. A missing previous state means "start from
//! [`AppState::default`]".
//!
//! # Example
//!
//! ```rust
//! use eatgo::app::{transition, Action};
//! use eatgo::domain::Region;
//!
//! let state = transition(None, &Action::SetRegions(vec![Region::new(1, "서울")]));
//! let state = transition(Some(&state), &Action::SelectRegion(1));
//! assert_eq!(state.selected_region, Some(Region::new(1, "서울")));
//! ```

use super::actions::{Action, LoginFieldChange, RawAction, ReviewFieldChange};
use super::state::{AppState, ReviewField};
use crate::domain::error::Result;

/// Computes the next state for a typed action.
#[must_use]
pub fn transition(state: Option<&AppState>, action: &Action) -> AppState {
    let previous = state.cloned().unwrap_or_default();
    reduce(previous, action)
}

/// Computes the next state for a raw action.
///
/// Unrecognized kinds yield a copy of the input state (or the default state
/// when the input is absent).
///
/// # Errors
///
/// Returns the decoding error when a known kind carries a malformed payload.
pub fn transition_raw(state: Option<&AppState>, raw: &RawAction) -> Result<AppState> {
    Ok(match raw.decode()? {
        Some(action) => transition(state, &action),
        None => state.cloned().unwrap_or_default(),
    })
}

/// Applies an action to an owned state value.
#[must_use]
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::SetRegions(regions) => state.regions.clone_from(regions),
        Action::SetCategories(categories) => state.categories.clone_from(categories),
        Action::SetRestaurants(restaurants) => state.restaurants.clone_from(restaurants),
        Action::SetRestaurant(restaurant) => state.restaurant = Some(restaurant.clone()),
        Action::SelectRegion(id) => {
            state.selected_region = state.find_region(*id).cloned();
            if state.selected_region.is_none() {
                tracing::debug!(region_id = *id, "no region with this id, selection cleared");
            }
        }
        Action::SelectCategory(id) => {
            state.selected_category = state.find_category(*id).cloned();
            if state.selected_category.is_none() {
                tracing::debug!(category_id = *id, "no category with this id, selection cleared");
            }
        }
        Action::ChangeLoginField(change) => match change {
            LoginFieldChange::Email(email) => state.login_field.email.clone_from(email),
            LoginFieldChange::Password(password) => {
                state.login_field.password.clone_from(password);
            }
        },
        Action::SetAccessToken(token) => state.access_token.clone_from(token),
        Action::ChangeReviewField(change) => match change {
            ReviewFieldChange::Score(score) => state.review_field.score = Some(*score),
            ReviewFieldChange::Description(description) => {
                state.review_field.description.clone_from(description);
            }
        },
        Action::Logout => state.access_token = String::new(),
        Action::ClearReviewFields => state.review_field = ReviewField::default(),
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::LoginField;
    use crate::domain::{Category, Region, Restaurant};
    use serde_json::json;

    fn seoul() -> Region {
        Region::new(1, "서울")
    }

    fn korean() -> Category {
        Category::new(1, "한식")
    }

    fn populated_state() -> AppState {
        AppState {
            regions: vec![seoul(), Region::new(2, "부산")],
            categories: vec![korean(), Category::new(2, "중식")],
            restaurants: vec![Restaurant::new(1, "마법사주방")],
            restaurant: Some(Restaurant::new(1, "마법사주방")),
            selected_region: Some(seoul()),
            selected_category: Some(korean()),
            login_field: LoginField {
                email: "tester@example.com".to_string(),
                password: "test".to_string(),
            },
            access_token: "TOKEN".to_string(),
            review_field: ReviewField {
                score: Some(3),
                description: "맛있어요".to_string(),
            },
        }
    }

    #[test]
    fn test_absent_state_returns_initial_state() {
        let state = transition_raw(None, &RawAction::new("action", serde_json::Value::Null)).unwrap();

        assert_eq!(state, AppState::default());
        assert_eq!(
            serde_json::to_value(&state).unwrap()["reviewField"],
            json!({"score": 0, "description": ""})
        );
    }

    #[test]
    fn test_unrecognized_kind_keeps_state() {
        let state = populated_state();

        let next = transition_raw(Some(&state), &RawAction::new("anything", json!({"x": 1}))).unwrap();

        assert_eq!(next, state);
    }

    #[test]
    fn test_set_regions_changes_regions() {
        let state = transition(Some(&AppState::default()), &Action::SetRegions(vec![seoul()]));

        assert_eq!(state.regions, vec![seoul()]);
    }

    #[test]
    fn test_set_regions_is_idempotent() {
        let action = Action::SetRegions(vec![seoul(), Region::new(2, "부산")]);

        let once = transition(None, &action);
        let twice = transition(Some(&once), &action);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_categories_changes_categories() {
        let state = transition(None, &Action::SetCategories(vec![korean()]));

        assert_eq!(state.categories.len(), 1);
    }

    #[test]
    fn test_set_restaurants_changes_restaurants() {
        let state = transition(None, &Action::SetRestaurants(vec![Restaurant::new(1, "마법사주방")]));

        assert_eq!(state.restaurants.len(), 1);
    }

    #[test]
    fn test_set_restaurant_changes_restaurant() {
        let state = transition(None, &Action::SetRestaurant(Restaurant::new(1, "마법사주방")));

        let restaurant = state.restaurant.unwrap();
        assert_eq!(restaurant.id, 1);
        assert_eq!(restaurant.name, "마법사주방");
    }

    #[test]
    fn test_select_region_looks_up_by_id() {
        let state = AppState {
            regions: vec![Region::new(5, "대전"), seoul()],
            ..AppState::default()
        };

        let next = transition(Some(&state), &Action::SelectRegion(1));

        assert_eq!(next.selected_region, Some(seoul()));
    }

    #[test]
    fn test_select_category_looks_up_by_id() {
        let state = AppState {
            categories: vec![korean()],
            ..AppState::default()
        };

        let next = transition(Some(&state), &Action::SelectCategory(1));

        assert_eq!(next.selected_category, Some(korean()));
    }

    #[test]
    fn test_select_unknown_id_clears_selection() {
        let state = populated_state();

        let next = transition(Some(&state), &Action::SelectRegion(99));
        let next = transition(Some(&next), &Action::SelectCategory(99));

        assert_eq!(next.selected_region, None);
        assert_eq!(next.selected_category, None);
    }

    #[test]
    fn test_selection_is_not_revalidated_when_list_changes() {
        let state = populated_state();

        let next = transition(Some(&state), &Action::SetRegions(vec![Region::new(2, "부산")]));

        assert_eq!(next.selected_region, Some(seoul()));
    }

    #[test]
    fn test_change_login_email_leaves_password() {
        let state = AppState::default();

        let next = transition(
            Some(&state),
            &Action::change_login_field("email", "a@b.com").unwrap(),
        );

        assert_eq!(
            next.login_field,
            LoginField {
                email: "a@b.com".to_string(),
                password: String::new(),
            }
        );
    }

    #[test]
    fn test_change_login_password_leaves_email() {
        let state = populated_state();

        let next = transition(Some(&state), &Action::change_login_field("password", "secret").unwrap());

        assert_eq!(next.login_field.email, "tester@example.com");
        assert_eq!(next.login_field.password, "secret");
    }

    #[test]
    fn test_set_access_token_changes_only_token() {
        let state = AppState {
            access_token: String::new(),
            ..populated_state()
        };

        let next = transition(Some(&state), &Action::SetAccessToken("ACCESSTOKEN".to_string()));

        assert_eq!(next.access_token, "ACCESSTOKEN");
        assert_eq!(
            AppState {
                access_token: String::new(),
                ..next
            },
            state
        );
    }

    #[test]
    fn test_change_review_score_from_null() {
        let state = AppState {
            review_field: ReviewField {
                score: None,
                description: String::new(),
            },
            ..AppState::default()
        };

        let next = transition(Some(&state), &Action::ChangeReviewField(ReviewFieldChange::Score(10)));

        assert_eq!(
            next.review_field,
            ReviewField {
                score: Some(10),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_change_review_description_leaves_score() {
        let state = populated_state();

        let next = transition(Some(&state), &Action::change_review_field("description", "test").unwrap());

        assert_eq!(next.review_field.score, Some(3));
        assert_eq!(next.review_field.description, "test");
    }

    #[test]
    fn test_logout_clears_token_only() {
        let state = populated_state();

        let next = transition(Some(&state), &Action::Logout);

        assert!(!next.is_logged_in());
        assert_eq!(next.login_field, state.login_field);
    }

    #[test]
    fn test_clear_review_fields_resets_form() {
        let next = transition(Some(&populated_state()), &Action::ClearReviewFields);

        assert_eq!(next.review_field, ReviewField::default());
    }

    #[test]
    fn test_untargeted_fields_are_untouched() {
        let state = populated_state();
        let actions = [
            Action::SetRegions(vec![Region::new(9, "제주")]),
            Action::SetCategories(vec![Category::new(9, "양식")]),
            Action::SetRestaurants(vec![]),
            Action::SetRestaurant(Restaurant::new(2, "김밥천국")),
            Action::SelectRegion(2),
            Action::SelectCategory(2),
            Action::change_login_field("email", "other@example.com").unwrap(),
            Action::SetAccessToken("OTHER".to_string()),
            Action::change_review_field("score", "1").unwrap(),
            Action::Logout,
            Action::ClearReviewFields,
        ];

        for action in &actions {
            let next = transition(Some(&state), action);
            let differs = [
                next.regions != state.regions,
                next.categories != state.categories,
                next.restaurants != state.restaurants,
                next.restaurant != state.restaurant,
                next.selected_region != state.selected_region,
                next.selected_category != state.selected_category,
                next.login_field != state.login_field,
                next.access_token != state.access_token,
                next.review_field != state.review_field,
            ];
            assert_eq!(
                differs.iter().filter(|changed| **changed).count(),
                1,
                "{} changed more than its own field",
                action.kind()
            );
        }
    }

    #[test]
    fn test_previous_state_is_not_mutated() {
        let state = populated_state();
        let snapshot = state.clone();

        let _ = transition(Some(&state), &Action::Logout);
        let _ = transition(Some(&state), &Action::ClearReviewFields);

        assert_eq!(state, snapshot);
    }
}

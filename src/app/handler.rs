//! UI event handling for the form containers.
//!
//! This module connects presentational components to the store. Components
//! report raw UI events; [`handle_event`] translates them into actions,
//! dispatches those, and returns the side effects the host must run.
//!
//! # Architecture
//!
//! ```text
//! TextField change → UiEvent → handle_event → Store::dispatch → new AppState
//!                                   │
//!                                   └──→ Vec<Effect> → host (API calls, session file)
//! ```
//!
//! # Example
//!
//! ```rust
//! use eatgo::app::{handle_event, Effect, FieldChange, Store, UiEvent};
//!
//! let mut store = Store::new();
//! handle_event(&mut store, &UiEvent::LoginFieldChanged(FieldChange::new("email", "a@b.com")))?;
//! handle_event(&mut store, &UiEvent::LoginFieldChanged(FieldChange::new("password", "pw")))?;
//!
//! let (_, effects) = handle_event(&mut store, &UiEvent::LoginSubmitted)?;
//! assert_eq!(effects, vec![Effect::RequestLogin {
//!     email: "a@b.com".to_string(),
//!     password: "pw".to_string(),
//! }]);
//! # Ok::<(), eatgo::EatgoError>(())
//! ```

use super::actions::{Action, LoginFieldChange, ReviewFieldChange};
use super::effects::Effect;
use super::store::Store;
use crate::domain::error::{EatgoError, Result};

/// A `{name, value}` change reported by a text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub name: String,
    pub value: String,
}

impl FieldChange {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Events reported by the view layer or by the host after running an effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// An input of the login form changed.
    LoginFieldChanged(FieldChange),
    /// The login form was submitted.
    LoginSubmitted,
    /// The host obtained an access token from the login endpoint.
    AccessTokenReceived(String),
    /// The logout button was clicked.
    LogoutClicked,
    /// An input of the review form changed.
    ReviewFieldChanged(FieldChange),
    /// The review form was submitted on a restaurant page.
    ReviewSubmitted {
        restaurant_id: i64,
    },
    /// A region entry was clicked.
    RegionClicked(i64),
    /// A category entry was clicked.
    CategoryClicked(i64),
    /// A restaurant entry was clicked.
    RestaurantClicked(i64),
}

/// Processes a UI event against the store.
///
/// # Returns
///
/// `(should_render, effects)`: whether the state changed and the view should
/// re-render, and the effects to run in order.
///
/// # Errors
///
/// Returns [`EatgoError::UnknownField`] for field changes naming a field the
/// form does not have, and [`EatgoError::InvalidScore`] for score input that is
/// not a non-negative integer or a review submitted without a score. The store
/// is unchanged when an error is returned.
pub fn handle_event(store: &mut Store, event: &UiEvent) -> Result<(bool, Vec<Effect>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_kind(event)).entered();

    match event {
        UiEvent::LoginFieldChanged(FieldChange { name, value }) => {
            let change = LoginFieldChange::new(name, value.as_str())?;
            Ok((store.dispatch(Action::ChangeLoginField(change)), vec![]))
        }
        UiEvent::LoginSubmitted => {
            let login = &store.state().login_field;
            tracing::debug!(email = %login.email, "login requested");
            Ok((
                false,
                vec![Effect::RequestLogin {
                    email: login.email.clone(),
                    password: login.password.clone(),
                }],
            ))
        }
        UiEvent::AccessTokenReceived(token) => {
            let rendered = store.dispatch(Action::SetAccessToken(token.clone()));
            Ok((
                rendered,
                vec![Effect::PersistSession {
                    access_token: token.clone(),
                }],
            ))
        }
        UiEvent::LogoutClicked => {
            let rendered = store.dispatch(Action::Logout);
            Ok((rendered, vec![Effect::ClearSession]))
        }
        UiEvent::ReviewFieldChanged(FieldChange { name, value }) => {
            let change = ReviewFieldChange::from_text(name, value)?;
            Ok((store.dispatch(Action::ChangeReviewField(change)), vec![]))
        }
        UiEvent::ReviewSubmitted { restaurant_id } => {
            let state = store.state();
            if !state.is_logged_in() {
                tracing::debug!(restaurant_id = *restaurant_id, "review submitted while logged out");
                return Ok((false, vec![]));
            }

            let score = state
                .review_field
                .score
                .ok_or_else(|| EatgoError::InvalidScore("score is required".to_string()))?;

            let effect = Effect::SendReview {
                access_token: state.access_token.clone(),
                restaurant_id: *restaurant_id,
                score,
                description: state.review_field.description.clone(),
            };

            let rendered = store.dispatch(Action::ClearReviewFields);
            Ok((rendered, vec![effect]))
        }
        UiEvent::RegionClicked(id) => {
            let rendered = store.dispatch(Action::SelectRegion(*id));
            Ok((rendered, restaurants_for_selection(store)))
        }
        UiEvent::CategoryClicked(id) => {
            let rendered = store.dispatch(Action::SelectCategory(*id));
            Ok((rendered, restaurants_for_selection(store)))
        }
        UiEvent::RestaurantClicked(id) => Ok((
            false,
            vec![Effect::LoadRestaurant { restaurant_id: *id }],
        )),
    }
}

fn restaurants_for_selection(store: &Store) -> Vec<Effect> {
    store.state().selection().map_or_else(Vec::new, |(region_id, category_id)| {
        tracing::debug!(region_id, category_id, "loading restaurants for selection");
        vec![Effect::LoadRestaurants {
            region_id,
            category_id,
        }]
    })
}

const fn event_kind(event: &UiEvent) -> &'static str {
    match event {
        UiEvent::LoginFieldChanged(_) => "login_field_changed",
        UiEvent::LoginSubmitted => "login_submitted",
        UiEvent::AccessTokenReceived(_) => "access_token_received",
        UiEvent::LogoutClicked => "logout_clicked",
        UiEvent::ReviewFieldChanged(_) => "review_field_changed",
        UiEvent::ReviewSubmitted { .. } => "review_submitted",
        UiEvent::RegionClicked(_) => "region_clicked",
        UiEvent::CategoryClicked(_) => "category_clicked",
        UiEvent::RestaurantClicked(_) => "restaurant_clicked",
    }
}

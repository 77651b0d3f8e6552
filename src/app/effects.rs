//! Side effects requested by the UI event handler.
//!
//! Effects describe work the host performs outside the pure state core:
//! calling the review API and persisting the session. The handler returns
//! them after updating the store; the host executes them in order and feeds
//! results back as actions or [`UiEvent`](super::UiEvent)s.
//!
//! # Example
//!
//! ```rust
//! use eatgo::app::Effect;
//!
//! let effects = vec![Effect::LoadRestaurants { region_id: 1, category_id: 1 }];
//! assert_eq!(effects[0].name(), "load_restaurants");
//! ```

/// A side effect for the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Exchanges login credentials for an access token.
    ///
    /// The host reports the token back with
    /// [`UiEvent::AccessTokenReceived`](super::UiEvent::AccessTokenReceived).
    RequestLogin {
        email: String,
        password: String,
    },

    /// Posts a review for a restaurant on behalf of the logged-in user.
    SendReview {
        access_token: String,
        restaurant_id: i64,
        score: u32,
        description: String,
    },

    /// Fetches restaurants for a region and category.
    LoadRestaurants {
        region_id: i64,
        category_id: i64,
    },

    /// Fetches the detail form of one restaurant.
    LoadRestaurant {
        restaurant_id: i64,
    },

    /// Saves the access token so the next start is already logged in.
    PersistSession {
        access_token: String,
    },

    /// Removes any saved access token.
    ClearSession,
}

impl Effect {
    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RequestLogin { .. } => "request_login",
            Self::SendReview { .. } => "send_review",
            Self::LoadRestaurants { .. } => "load_restaurants",
            Self::LoadRestaurant { .. } => "load_restaurant",
            Self::PersistSession { .. } => "persist_session",
            Self::ClearSession => "clear_session",
        }
    }
}

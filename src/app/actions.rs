//! Typed state-change actions and their wire decoding.
//!
//! An [`Action`] names exactly one requested change to the application state.
//! Each variant carries its own payload type, so form changes address a closed
//! set of fields instead of free-form names.
//!
//! Hosts that speak JSON send [`RawAction`] values shaped
//! `{"type": "<kind>", "payload": <any>}`. Decoding a raw action has three
//! outcomes:
//!
//! - `Ok(Some(action))`: a known kind with a well-formed payload
//! - `Ok(None)`: an unrecognized kind, which the store treats as a no-op
//! - `Err(_)`: a known kind whose payload is malformed
//!
//! # Example
//!
//! ```rust
//! use eatgo::app::{Action, RawAction};
//!
//! let raw: RawAction = serde_json::from_str(
//!     r#"{"type": "selectRegion", "payload": {"regionId": 1}}"#,
//! )?;
//! assert_eq!(raw.decode()?, Some(Action::SelectRegion(1)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::domain::error::{EatgoError, Result};
use crate::domain::{Category, Region, Restaurant};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A requested change to the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the region list.
    SetRegions(Vec<Region>),
    /// Replaces the category list.
    SetCategories(Vec<Category>),
    /// Replaces the restaurant list (summary form).
    SetRestaurants(Vec<Restaurant>),
    /// Replaces the restaurant shown on the detail page.
    SetRestaurant(Restaurant),
    /// Selects the region with this id from the current region list.
    SelectRegion(i64),
    /// Selects the category with this id from the current category list.
    SelectCategory(i64),
    /// Replaces one field of the login form.
    ChangeLoginField(LoginFieldChange),
    /// Replaces the access token. An empty token means logged out.
    SetAccessToken(String),
    /// Replaces one field of the review form.
    ChangeReviewField(ReviewFieldChange),
    /// Clears the access token.
    Logout,
    /// Resets the review form to its defaults after a review was sent.
    ClearReviewFields,
}

impl Action {
    /// Wire name of the action kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetRegions(_) => "setRegions",
            Self::SetCategories(_) => "setCategories",
            Self::SetRestaurants(_) => "setRestaurants",
            Self::SetRestaurant(_) => "setRestaurant",
            Self::SelectRegion(_) => "selectRegion",
            Self::SelectCategory(_) => "selectCategory",
            Self::ChangeLoginField(_) => "changeLoginField",
            Self::SetAccessToken(_) => "setAccessToken",
            Self::ChangeReviewField(_) => "changeReviewField",
            Self::Logout => "logout",
            Self::ClearReviewFields => "clearReviewFields",
        }
    }

    /// Builds a `ChangeLoginField` action from a field name and text value.
    ///
    /// # Errors
    ///
    /// Returns [`EatgoError::UnknownField`] for names other than `email` and
    /// `password`.
    pub fn change_login_field(name: &str, value: impl Into<String>) -> Result<Self> {
        LoginFieldChange::new(name, value).map(Self::ChangeLoginField)
    }

    /// Builds a `ChangeReviewField` action from a field name and text value.
    ///
    /// The score field accepts the text an input element reports, e.g. `"5"`.
    ///
    /// # Errors
    ///
    /// Returns [`EatgoError::UnknownField`] for names other than `score` and
    /// `description`, or [`EatgoError::InvalidScore`] when the score text is
    /// not a non-negative integer.
    pub fn change_review_field(name: &str, value: &str) -> Result<Self> {
        ReviewFieldChange::from_text(name, value).map(Self::ChangeReviewField)
    }
}

/// A change to one field of the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFieldChange {
    Email(String),
    Password(String),
}

impl LoginFieldChange {
    /// Field names accepted by the login form.
    pub const FIELDS: [&'static str; 2] = ["email", "password"];

    /// # Errors
    ///
    /// Returns [`EatgoError::UnknownField`] for names outside [`Self::FIELDS`].
    pub fn new(name: &str, value: impl Into<String>) -> Result<Self> {
        match name {
            "email" => Ok(Self::Email(value.into())),
            "password" => Ok(Self::Password(value.into())),
            other => Err(EatgoError::UnknownField {
                form: "loginField",
                name: other.to_string(),
            }),
        }
    }
}

/// A change to one field of the review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewFieldChange {
    Score(u32),
    Description(String),
}

impl ReviewFieldChange {
    /// Field names accepted by the review form.
    pub const FIELDS: [&'static str; 2] = ["score", "description"];

    /// Parses a change from the text reported by an input element.
    ///
    /// # Errors
    ///
    /// Returns [`EatgoError::UnknownField`] for unknown names and
    /// [`EatgoError::InvalidScore`] for score text that is not a
    /// non-negative integer.
    pub fn from_text(name: &str, value: &str) -> Result<Self> {
        match name {
            "score" => parse_score(value).map(Self::Score),
            "description" => Ok(Self::Description(value.to_string())),
            other => Err(unknown_review_field(other)),
        }
    }

    /// Parses a change from a JSON value: a number or numeric string for
    /// `score`, a string for `description`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_text`], plus [`EatgoError::InvalidScore`] when the
    /// score is neither a number nor a string.
    pub fn from_json(name: &str, value: &Value) -> Result<Self> {
        match (name, value) {
            ("score", Value::Number(n)) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(Self::Score)
                .ok_or_else(|| EatgoError::InvalidScore(n.to_string())),
            ("score", Value::String(text)) => parse_score(text).map(Self::Score),
            ("score", other) => Err(EatgoError::InvalidScore(other.to_string())),
            ("description", Value::String(text)) => Ok(Self::Description(text.clone())),
            ("description", other) => Err(EatgoError::InvalidPayload {
                kind: "changeReviewField".to_string(),
                reason: format!("description must be a string, got {other}"),
            }),
            (other, _) => Err(unknown_review_field(other)),
        }
    }
}

fn unknown_review_field(name: &str) -> EatgoError {
    EatgoError::UnknownField {
        form: "reviewField",
        name: name.to_string(),
    }
}

fn parse_score(text: &str) -> Result<u32> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| EatgoError::InvalidScore(text.to_string()))
}

/// An action as received from a JSON dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    /// Wire name of the action kind.
    #[serde(rename = "type")]
    pub kind: String,

    /// Kind-specific payload; `null` when omitted.
    #[serde(default)]
    pub payload: Value,
}

#[derive(Deserialize)]
struct RegionsPayload {
    regions: Vec<Region>,
}

#[derive(Deserialize)]
struct CategoriesPayload {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct RestaurantsPayload {
    restaurants: Vec<Restaurant>,
}

#[derive(Deserialize)]
struct RestaurantPayload {
    restaurant: Restaurant,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegionIdPayload {
    region_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryIdPayload {
    category_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccessTokenPayload {
    access_token: String,
}

#[derive(Deserialize)]
struct FieldPayload {
    name: String,
    value: Value,
}

impl RawAction {
    /// Creates a raw action from a kind and payload.
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Decodes the raw action into a typed [`Action`].
    ///
    /// Returns `Ok(None)` for kinds this crate does not know.
    ///
    /// # Errors
    ///
    /// Returns [`EatgoError::InvalidPayload`] when a known kind carries a
    /// payload of the wrong shape, and the field errors of
    /// [`LoginFieldChange::new`] / [`ReviewFieldChange::from_json`] for form
    /// changes.
    pub fn decode(&self) -> Result<Option<Action>> {
        let action = match self.kind.as_str() {
            "setRegions" => Action::SetRegions(self.payload::<RegionsPayload>()?.regions),
            "setCategories" => {
                Action::SetCategories(self.payload::<CategoriesPayload>()?.categories)
            }
            "setRestaurants" => {
                Action::SetRestaurants(self.payload::<RestaurantsPayload>()?.restaurants)
            }
            "setRestaurant" => {
                Action::SetRestaurant(self.payload::<RestaurantPayload>()?.restaurant)
            }
            "selectRegion" => Action::SelectRegion(self.payload::<RegionIdPayload>()?.region_id),
            "selectCategory" => {
                Action::SelectCategory(self.payload::<CategoryIdPayload>()?.category_id)
            }
            "changeLoginField" => {
                let FieldPayload { name, value } = self.payload()?;
                match value {
                    Value::String(text) => Action::ChangeLoginField(LoginFieldChange::new(&name, text)?),
                    other => {
                        return Err(self.invalid(format!(
                            "login field value must be a string, got {other}"
                        )))
                    }
                }
            }
            "setAccessToken" => {
                Action::SetAccessToken(self.payload::<AccessTokenPayload>()?.access_token)
            }
            "changeReviewField" => {
                let FieldPayload { name, value } = self.payload()?;
                Action::ChangeReviewField(ReviewFieldChange::from_json(&name, &value)?)
            }
            "logout" => Action::Logout,
            "clearReviewFields" => Action::ClearReviewFields,
            other => {
                tracing::debug!(kind = %other, "unrecognized action kind");
                return Ok(None);
            }
        };

        Ok(Some(action))
    }

    fn payload<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.payload).map_err(|e| self.invalid(e.to_string()))
    }

    fn invalid(&self, reason: String) -> EatgoError {
        EatgoError::InvalidPayload {
            kind: self.kind.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Result<Option<Action>> {
        let raw: RawAction = serde_json::from_value(value).unwrap();
        raw.decode()
    }

    #[test]
    fn test_decodes_set_regions() {
        let action = decode(json!({
            "type": "setRegions",
            "payload": {"regions": [{"id": 1, "name": "서울"}]}
        }))
        .unwrap();

        assert_eq!(action, Some(Action::SetRegions(vec![Region::new(1, "서울")])));
    }

    #[test]
    fn test_decodes_select_category_by_id() {
        let action = decode(json!({"type": "selectCategory", "payload": {"categoryId": 3}})).unwrap();

        assert_eq!(action, Some(Action::SelectCategory(3)));
    }

    #[test]
    fn test_decodes_payloadless_actions() {
        assert_eq!(decode(json!({"type": "logout"})).unwrap(), Some(Action::Logout));
        assert_eq!(
            decode(json!({"type": "clearReviewFields"})).unwrap(),
            Some(Action::ClearReviewFields)
        );
    }

    #[test]
    fn test_unrecognized_kind_decodes_to_none() {
        assert_eq!(decode(json!({"type": "action"})).unwrap(), None);
        assert_eq!(decode(json!({"type": "anything", "payload": [1, 2]})).unwrap(), None);
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        let err = decode(json!({"type": "setRegions", "payload": {"regions": "서울"}})).unwrap_err();

        assert!(matches!(err, EatgoError::InvalidPayload { ref kind, .. } if kind == "setRegions"));
    }

    #[test]
    fn test_missing_payload_for_known_kind_is_rejected() {
        let err = decode(json!({"type": "setAccessToken"})).unwrap_err();

        assert!(matches!(err, EatgoError::InvalidPayload { .. }));
    }

    #[test]
    fn test_login_field_names_form_a_closed_set() {
        let ok = decode(json!({
            "type": "changeLoginField",
            "payload": {"name": "email", "value": "tester@example.com"}
        }))
        .unwrap();
        assert_eq!(
            ok,
            Some(Action::ChangeLoginField(LoginFieldChange::Email(
                "tester@example.com".to_string()
            )))
        );

        let err = decode(json!({
            "type": "changeLoginField",
            "payload": {"name": "nickname", "value": "tester"}
        }))
        .unwrap_err();
        assert!(matches!(err, EatgoError::UnknownField { form: "loginField", .. }));
    }

    #[test]
    fn test_login_field_value_must_be_text() {
        let err = decode(json!({
            "type": "changeLoginField",
            "payload": {"name": "password", "value": 1234}
        }))
        .unwrap_err();

        assert!(matches!(err, EatgoError::InvalidPayload { .. }));
    }

    #[test]
    fn test_review_score_accepts_number_or_numeric_text() {
        let number = decode(json!({
            "type": "changeReviewField",
            "payload": {"name": "score", "value": 10}
        }))
        .unwrap();
        let text = decode(json!({
            "type": "changeReviewField",
            "payload": {"name": "score", "value": "10"}
        }))
        .unwrap();

        let expected = Some(Action::ChangeReviewField(ReviewFieldChange::Score(10)));
        assert_eq!(number, expected);
        assert_eq!(text, expected);
    }

    #[test]
    fn test_review_score_rejects_negative_and_non_numeric() {
        assert!(matches!(
            ReviewFieldChange::from_json("score", &json!(-1)),
            Err(EatgoError::InvalidScore(_))
        ));
        assert!(matches!(
            ReviewFieldChange::from_text("score", "five"),
            Err(EatgoError::InvalidScore(_))
        ));
        assert!(matches!(
            ReviewFieldChange::from_json("score", &Value::Null),
            Err(EatgoError::InvalidScore(_))
        ));
    }

    #[test]
    fn test_review_field_rejects_unknown_name() {
        let err = Action::change_review_field("rating", "5").unwrap_err();

        assert!(matches!(err, EatgoError::UnknownField { form: "reviewField", .. }));
    }

    #[test]
    fn test_kind_names_match_wire_names() {
        assert_eq!(Action::SelectRegion(1).kind(), "selectRegion");
        assert_eq!(Action::SetAccessToken(String::new()).kind(), "setAccessToken");
        assert_eq!(Action::ClearReviewFields.kind(), "clearReviewFields");
    }
}

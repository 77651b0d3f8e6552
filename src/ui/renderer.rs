//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `PageViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use eatgo::app::AppState;
//! use eatgo::ui::render;
//!
//! let page = render(&AppState::default());
//! assert!(page.contains("E-mail"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::PageViewModel;

/// Renders the whole page for the given state.
#[must_use]
pub fn render(state: &AppState) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel)
}

/// Renders a pre-computed page view model.
///
/// Section order: selectors, restaurant list (or empty state), detail with
/// review form, login area.
#[must_use]
pub fn render_viewmodel(vm: &PageViewModel) -> String {
    let mut out = String::new();

    components::render_selector(&mut out, &vm.regions);
    out.push('\n');
    components::render_selector(&mut out, &vm.categories);
    out.push('\n');

    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(&mut out, empty);
    } else {
        components::render_restaurant_list(&mut out, &vm.restaurants);
    }

    if let Some(detail) = &vm.detail {
        out.push('\n');
        components::render_restaurant_detail(&mut out, detail);
        if let Some(form) = &vm.review_form {
            components::render_review_form(&mut out, form);
        }
    }

    out.push('\n');
    components::render_login_form(&mut out, &vm.login);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Region, Restaurant};

    #[test]
    fn test_renders_selected_filters_and_restaurants() {
        let state = AppState {
            regions: vec![Region::new(1, "서울"), Region::new(2, "부산")],
            categories: vec![Category::new(1, "한식")],
            selected_region: Some(Region::new(1, "서울")),
            selected_category: Some(Category::new(1, "한식")),
            restaurants: vec![Restaurant::new(1, "마법사주방")],
            ..AppState::default()
        };

        let page = render(&state);

        assert!(page.contains("[서울(V)] [부산]"));
        assert!(page.contains("[한식(V)]"));
        assert!(page.contains("- 마법사주방"));
        assert!(page.contains("[Log In]"));
    }

    #[test]
    fn test_renders_review_form_on_detail_when_logged_in() {
        let state = AppState {
            restaurant: Some(Restaurant::new(1, "마법사주방")),
            access_token: "TOKEN".to_string(),
            ..AppState::default()
        };

        let page = render(&state);

        assert!(page.contains("평점: 0"));
        assert!(page.contains("[리뷰 남기기]"));
        assert!(page.contains("[Log out]"));
        assert!(!page.contains("E-mail"));
    }
}

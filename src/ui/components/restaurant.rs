//! Restaurant list and detail components.

use crate::ui::helpers::{push_heading, push_line};
use crate::ui::viewmodel::{OptionItem, RestaurantDetailViewModel};

/// Renders the restaurant list, one entry per line.
pub fn render_restaurant_list(out: &mut String, restaurants: &[OptionItem]) {
    for restaurant in restaurants {
        push_line(out, format_args!("- {}", restaurant.name));
    }
}

/// Renders the detail page of a single restaurant.
pub fn render_restaurant_detail(out: &mut String, detail: &RestaurantDetailViewModel) {
    push_heading(out, &detail.name);

    if let Some(address) = &detail.address {
        push_line(out, format_args!("주소: {address}"));
    }

    if !detail.menu.is_empty() {
        push_line(out, "메뉴");
        for item in &detail.menu {
            push_line(out, format_args!("  - {item}"));
        }
    }

    if !detail.reviews.is_empty() {
        push_line(out, "리뷰");
        for review in &detail.reviews {
            push_line(out, format_args!("  - {review}"));
        }
    }
}

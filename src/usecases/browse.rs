//! Read-side queries over the catalog for whatever screen is showing.

use reqwest::Url;

use crate::domain::{
    catalog::{Business, Category},
    navigation::Screen,
    shell_state::ShellState,
};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";
const ALL_BUSINESSES_TITLE: &str = "Tümü";

/// Businesses listed on the current screen, in display order.
pub fn visible_businesses(state: &ShellState) -> Vec<&Business> {
    let navigation = state.navigation();
    match navigation.screen() {
        Screen::Home => state.catalog().promoted(),
        Screen::Category => state.catalog().by_category(navigation.selected_category()),
        Screen::Details => Vec::new(),
    }
}

/// The list entry under the cursor on Home or Category.
pub fn highlighted_business(state: &ShellState) -> Option<&Business> {
    visible_businesses(state)
        .get(state.navigation().list_selection())
        .copied()
}

/// The business shown on the Details screen.
pub fn opened_business(state: &ShellState) -> Option<&Business> {
    state
        .navigation()
        .selected_business()
        .and_then(|id| state.catalog().business(id))
}

pub fn category_title(category: Option<Category>) -> &'static str {
    category.map(Category::label).unwrap_or(ALL_BUSINESSES_TITLE)
}

/// Maps search link for a street address.
pub fn directions_url(address: &str) -> String {
    match Url::parse_with_params(MAPS_SEARCH_URL, &[("api", "1"), ("query", address)]) {
        Ok(url) => url.into(),
        Err(_) => MAPS_SEARCH_URL.to_owned(),
    }
}

/// `tel:` URI keeping only dialable characters.
pub fn dial_uri(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect();
    format!("tel:{digits}")
}

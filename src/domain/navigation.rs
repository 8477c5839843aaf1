use super::catalog::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Category,
    Details,
}

/// Which screen is visible and what it was opened for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    screen: Screen,
    selected_category: Option<Category>,
    selected_business: Option<String>,
    list_selection: usize,
}

impl NavigationState {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn selected_business(&self) -> Option<&str> {
        self.selected_business.as_deref()
    }

    pub fn list_selection(&self) -> usize {
        self.list_selection
    }

    pub fn open_category(&mut self, category: Category) {
        self.selected_category = Some(category);
        self.screen = Screen::Category;
        self.list_selection = 0;
    }

    pub fn open_business(&mut self, business_id: impl Into<String>) {
        self.selected_business = Some(business_id.into());
        self.screen = Screen::Details;
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
        self.list_selection = 0;
    }

    /// Details always returns to the category list, even when the business was
    /// opened from home; with no category selected that list shows everything.
    pub fn back(&mut self) {
        match self.screen {
            Screen::Details => {
                self.screen = Screen::Category;
                self.list_selection = 0;
            }
            Screen::Category => self.go_home(),
            Screen::Home => {}
        }
    }

    pub fn select_next(&mut self, item_count: usize) {
        let last = item_count.saturating_sub(1);
        self.list_selection = (self.list_selection + 1).min(last);
    }

    pub fn select_previous(&mut self) {
        self.list_selection = self.list_selection.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home_without_selection() {
        let nav = NavigationState::default();

        assert_eq!(nav.screen(), Screen::Home);
        assert_eq!(nav.selected_category(), None);
        assert_eq!(nav.selected_business(), None);
    }

    #[test]
    fn back_walks_details_to_category_to_home() {
        let mut nav = NavigationState::default();
        nav.open_category(Category::Cafe);
        nav.open_business("4");

        nav.back();
        assert_eq!(nav.screen(), Screen::Category);
        assert_eq!(nav.selected_category(), Some(Category::Cafe));

        nav.back();
        assert_eq!(nav.screen(), Screen::Home);

        nav.back();
        assert_eq!(nav.screen(), Screen::Home);
    }

    #[test]
    fn details_opened_from_home_returns_to_unfiltered_category_list() {
        let mut nav = NavigationState::default();
        nav.open_business("1");

        nav.back();

        assert_eq!(nav.screen(), Screen::Category);
        assert_eq!(nav.selected_category(), None);
    }

    #[test]
    fn opening_category_resets_selection() {
        let mut nav = NavigationState::default();
        nav.select_next(5);
        nav.select_next(5);

        nav.open_category(Category::Restaurant);

        assert_eq!(nav.list_selection(), 0);
    }

    #[test]
    fn selection_is_clamped_to_list_bounds() {
        let mut nav = NavigationState::default();

        nav.select_next(2);
        nav.select_next(2);
        assert_eq!(nav.list_selection(), 1);

        nav.select_previous();
        nav.select_previous();
        assert_eq!(nav.list_selection(), 0);

        nav.select_next(0);
        assert_eq!(nav.list_selection(), 0);
    }
}

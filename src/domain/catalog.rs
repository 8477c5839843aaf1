//! Read-only city catalog: businesses and events shown by the guide.

/// Business categories shown in the home grid, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cafe,
    Restaurant,
    Service,
    Event,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Cafe,
        Category::Restaurant,
        Category::Service,
        Category::Event,
    ];

    /// Turkish label used as the screen title and grid caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cafe => "Kafeler",
            Self::Restaurant => "Restoranlar",
            Self::Service => "Hizmetler",
            Self::Event => "Etkinlikler",
        }
    }

    /// Maps a grid shortcut (`1`..=`4`) to its category.
    pub fn from_shortcut(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Self::Cafe),
            "2" => Some(Self::Restaurant),
            "3" => Some(Self::Service),
            "4" => Some(Self::Event),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub rating: f32,
    pub review_count: u32,
    pub address: String,
    pub image_url: String,
    pub description: String,
    pub working_hours: String,
    pub phone: String,
    pub is_promoted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityEvent {
    pub id: String,
    pub title: String,
    /// Display date, kept verbatim (e.g. "15 Mart 2024").
    pub date: String,
    pub location: String,
    pub image_url: String,
    pub category: String,
    pub description: String,
}

/// Immutable reference set built once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    businesses: Vec<Business>,
    events: Vec<CityEvent>,
}

impl Catalog {
    pub fn new(businesses: Vec<Business>, events: Vec<CityEvent>) -> Self {
        Self { businesses, events }
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn events(&self) -> &[CityEvent] {
        &self.events
    }

    pub fn business(&self, id: &str) -> Option<&Business> {
        self.businesses.iter().find(|business| business.id == id)
    }

    pub fn promoted(&self) -> Vec<&Business> {
        self.businesses
            .iter()
            .filter(|business| business.is_promoted)
            .collect()
    }

    /// Businesses in `category`, or every business when no category is selected.
    pub fn by_category(&self, category: Option<Category>) -> Vec<&Business> {
        self.businesses
            .iter()
            .filter(|business| category.map_or(true, |wanted| business.category == wanted))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(id: &str, category: Category, is_promoted: bool) -> Business {
        Business {
            id: id.to_owned(),
            name: format!("Business {id}"),
            category,
            rating: 4.5,
            review_count: 10,
            address: "Gebze".to_owned(),
            image_url: String::new(),
            description: String::new(),
            working_hours: "09:00 - 18:00".to_owned(),
            phone: "0262 000 00 00".to_owned(),
            is_promoted,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                business("1", Category::Cafe, true),
                business("2", Category::Restaurant, false),
                business("3", Category::Cafe, false),
            ],
            vec![],
        )
    }

    #[test]
    fn promoted_keeps_catalog_order() {
        let catalog = catalog();

        let ids: Vec<_> = catalog.promoted().iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn by_category_filters_matching_businesses() {
        let catalog = catalog();

        let ids: Vec<_> = catalog
            .by_category(Some(Category::Cafe))
            .iter()
            .map(|b| b.id.as_str())
            .collect();

        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn by_category_without_selection_returns_everything() {
        let catalog = catalog();

        assert_eq!(catalog.by_category(None).len(), 3);
    }

    #[test]
    fn event_category_has_no_businesses() {
        let catalog = catalog();

        assert!(catalog.by_category(Some(Category::Event)).is_empty());
    }

    #[test]
    fn business_lookup_by_id() {
        let catalog = catalog();

        assert_eq!(catalog.business("2").map(|b| b.category), Some(Category::Restaurant));
        assert!(catalog.business("missing").is_none());
    }

    #[test]
    fn shortcuts_follow_grid_order() {
        let mapped: Vec<_> = ["1", "2", "3", "4"]
            .into_iter()
            .filter_map(Category::from_shortcut)
            .collect();

        assert_eq!(mapped, Category::ALL.to_vec());
        assert_eq!(Category::from_shortcut("5"), None);
    }
}

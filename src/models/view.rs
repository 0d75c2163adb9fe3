//! Top-level view state for the two-page storefront.

/// Which top-level page is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Landing page: hero, features, trending (default).
    #[default]
    Home,
    /// Full catalog with category filters.
    Products,
}

impl View {
    /// Whether `section` is visible while this view is active.
    pub fn shows(self, section: Section) -> bool {
        section.owner() == self
    }
}

/// Page sections toggled by navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Features,
    Trending,
    Products,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Features,
        Section::Trending,
        Section::Products,
    ];

    /// The view a section belongs to.
    pub fn owner(self) -> View {
        match self {
            Section::Hero | Section::Features | Section::Trending => View::Home,
            Section::Products => View::Products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_sections() {
        assert!(View::Home.shows(Section::Hero));
        assert!(View::Home.shows(Section::Features));
        assert!(View::Home.shows(Section::Trending));
        assert!(!View::Home.shows(Section::Products));
    }

    #[test]
    fn test_products_sections() {
        assert!(View::Products.shows(Section::Products));
        assert!(!View::Products.shows(Section::Hero));
        assert!(!View::Products.shows(Section::Trending));
    }

    #[test]
    fn test_every_section_shown_by_exactly_one_view() {
        for section in Section::ALL {
            let shown = [View::Home, View::Products]
                .into_iter()
                .filter(|view| view.shows(section))
                .count();
            assert_eq!(shown, 1, "{:?}", section);
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(View::default(), View::Home);
    }
}

/// Literal used by the catalog UI for "every category".
pub const ALL_SENTINEL: &str = "all";

/// Active category filter for the product listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every product (default).
    #[default]
    All,
    /// Only products whose category equals this label.
    Category(String),
}

impl CategoryFilter {
    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(label) => label == category,
        }
    }

    /// Text shown on the filter control.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Category(label) => label,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sentinel() {
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("men's clothing"),
            CategoryFilter::Category("men's clothing".to_string())
        );
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_matches() {
        assert!(CategoryFilter::All.matches("electronics"));
        let filter = CategoryFilter::from("men's clothing");
        assert!(filter.matches("men's clothing"));
        assert!(!filter.matches("women's clothing"));
        assert!(!filter.matches("men"));
    }

    #[test]
    fn test_label() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(CategoryFilter::from("jewelery").label(), "jewelery");
    }
}

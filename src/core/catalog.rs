//! Catalog store: the product and category lists loaded at startup.
//!
//! Both lists are fetched concurrently and awaited jointly. Once loaded the
//! catalog is never mutated; the listing and trending strip are derived
//! from it on every render.

use std::future::Future;

use crate::config::{CATEGORIES_URL, PRODUCTS_URL};
use crate::core::error::FetchError;
use crate::models::{CategoryFilter, Product, ProductId};
use crate::utils::fetch_json;

/// Immutable product and category lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products,
            categories,
        }
    }

    #[cfg(test)]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products passing `filter`, in catalog order.
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(&p.category))
            .collect()
    }

    /// Top `n` products by descending rating.
    ///
    /// `sort_by` is stable, so equal ratings keep their catalog order.
    pub fn trending(&self, n: usize) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self.products.iter().collect();
        ranked.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate));
        ranked.truncate(n);
        ranked
    }
}

/// Catalog load lifecycle as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    /// Requests in flight (also the state forever if they never settle).
    #[default]
    Loading,
    Ready(Catalog),
    /// Either request failed; holds the error description.
    Failed(String),
}

impl CatalogState {
    pub fn as_ready(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }
}

/// Fetch products and categories from the catalog API.
pub async fn load() -> Result<Catalog, FetchError> {
    load_with(
        fetch_json::<Vec<Product>>(PRODUCTS_URL),
        fetch_json::<Vec<String>>(CATEGORIES_URL),
    )
    .await
}

/// Await both fetches jointly.
///
/// The first failure aborts the join and is returned; no partial catalog
/// is ever produced.
pub async fn load_with<P, C>(products: P, categories: C) -> Result<Catalog, FetchError>
where
    P: Future<Output = Result<Vec<Product>, FetchError>>,
    C: Future<Output = Result<Vec<String>, FetchError>>,
{
    let (products, categories) = futures::try_join!(products, categories)?;
    Ok(Catalog::new(products, categories))
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    /// A(x, 4.5), B(y, 4.9), C(x, 3.0)
    fn abc() -> Catalog {
        Catalog::new(
            vec![
                product(1, "x", 4.5, 10.0),
                product(2, "y", 4.9, 20.0),
                product(3, "x", 3.0, 30.0),
            ],
            vec!["x".to_string(), "y".to_string()],
        )
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_filtered_all_keeps_catalog_order() {
        let catalog = abc();
        assert_eq!(ids(&catalog.filtered(&CategoryFilter::All)), vec![1, 2, 3]);
        assert_eq!(ids(&catalog.filtered(&"all".into())), vec![1, 2, 3]);
    }

    #[test]
    fn test_filtered_by_category() {
        let catalog = abc();
        assert_eq!(ids(&catalog.filtered(&"x".into())), vec![1, 3]);
        assert_eq!(ids(&catalog.filtered(&"y".into())), vec![2]);
        assert!(catalog.filtered(&"z".into()).is_empty());
    }

    #[test]
    fn test_filtered_category_with_apostrophe() {
        let catalog = Catalog::new(
            vec![
                product(1, "men's clothing", 4.0, 1.0),
                product(2, "women's clothing", 4.0, 1.0),
            ],
            vec!["men's clothing".to_string(), "women's clothing".to_string()],
        );
        assert_eq!(ids(&catalog.filtered(&"men's clothing".into())), vec![1]);
    }

    #[test]
    fn test_trending_orders_by_rating() {
        let catalog = abc();
        assert_eq!(ids(&catalog.trending(2)), vec![2, 1]);
        assert_eq!(ids(&catalog.trending(3)), vec![2, 1, 3]);
    }

    #[test]
    fn test_trending_is_stable_on_ties() {
        let catalog = Catalog::new(
            vec![
                product(1, "a", 4.0, 1.0),
                product(2, "a", 4.8, 1.0),
                product(3, "a", 4.0, 1.0),
                product(4, "a", 4.0, 1.0),
            ],
            vec![],
        );
        assert_eq!(ids(&catalog.trending(3)), vec![2, 1, 3]);
    }

    #[test]
    fn test_trending_with_short_catalog() {
        let catalog = Catalog::new(vec![product(9, "a", 2.0, 1.0)], vec![]);
        assert_eq!(ids(&catalog.trending(3)), vec![9]);
        assert!(Catalog::default().trending(3).is_empty());
    }

    #[test]
    fn test_find() {
        let catalog = abc();
        assert_eq!(catalog.find(2).map(|p| p.category.as_str()), Some("y"));
        assert!(catalog.find(99).is_none());
    }

    #[test]
    fn test_catalog_state() {
        assert!(CatalogState::default().as_ready().is_none());
        assert!(CatalogState::Failed("boom".into()).as_ready().is_none());
        assert_eq!(CatalogState::Ready(abc()).as_ready(), Some(&abc()));
    }

    #[tokio::test]
    async fn test_load_with_joins_both_lists() {
        let catalog = load_with(
            async { Ok::<_, FetchError>(vec![product(1, "x", 4.5, 10.0)]) },
            async { Ok::<_, FetchError>(vec!["x".to_string()]) },
        )
        .await
        .unwrap();

        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.categories(), ["x".to_string()]);
    }

    #[tokio::test]
    async fn test_load_with_fails_if_either_request_fails() {
        let err = load_with(
            async { Ok::<_, FetchError>(vec![product(1, "x", 4.5, 10.0)]) },
            async { Err::<Vec<String>, _>(FetchError::HttpError(500)) },
        )
        .await
        .unwrap_err();
        assert_eq!(err, FetchError::HttpError(500));

        let err = load_with(
            async { Err::<Vec<Product>, _>(FetchError::NetworkError("offline".into())) },
            async { Ok::<_, FetchError>(vec!["x".to_string()]) },
        )
        .await
        .unwrap_err();
        assert_eq!(err, FetchError::NetworkError("offline".into()));
    }
}

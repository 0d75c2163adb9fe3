//! Catalog product types, shaped after the remote API records.

use serde::{Deserialize, Serialize};

use super::Money;

/// Stable product identifier assigned by the catalog API.
pub type ProductId = u64;

/// Aggregate customer rating.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating, 0 to 5.
    pub rate: f64,
    /// Number of reviews.
    pub count: u32,
}

/// A catalog product. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URI.
    pub image: String,
    pub rating: Rating,
}

impl Product {
    /// Unit price rounded to whole cents.
    pub fn unit_price(&self) -> Money {
        Money::from_price(self.price)
    }

    /// Rating value formatted for display ("4.5", "3").
    pub fn rating_label(&self) -> String {
        self.rating.rate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const API_RECORD: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_deserialize_api_record() {
        let product: Product = serde_json::from_str(API_RECORD).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
        assert_eq!(product.unit_price(), Money::from_cents(10995));
    }

    #[test]
    fn test_rating_label() {
        let mut product: Product = serde_json::from_str(API_RECORD).unwrap();
        assert_eq!(product.rating_label(), "3.9");
        product.rating.rate = 3.0;
        assert_eq!(product.rating_label(), "3");
    }
}

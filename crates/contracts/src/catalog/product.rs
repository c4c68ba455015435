use serde::{Deserialize, Serialize};

/// Catalog entry as served by the store API (`GET /products`).
///
/// Items are immutable once fetched; the API response is the source of
/// truth and is deserialized as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,

    pub title: String,

    /// Unit price, non-negative decimal
    pub price: f64,

    #[serde(default)]
    pub description: String,

    /// Category label, one of the values returned by `GET /products/categories`
    pub category: String,

    /// Product image URI
    pub image: String,

    #[serde(default)]
    pub rating: Rating,
}

/// Aggregated customer rating attached to every product payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

impl Product {
    /// Create a product with the minimal fields; description and rating
    /// are left at their defaults.
    pub fn new(id: u32, title: String, price: f64, category: String, image: String) -> Self {
        Self {
            id,
            title,
            price,
            description: String::new(),
            category,
            image,
            rating: Rating::default(),
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".into());
        }
        if self.category.trim().is_empty() {
            return Err("Category cannot be empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price cannot be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_store_payload() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.price, 109.95);
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        // description and rating default when the payload omits them
        let json = r#"{
            "id": 7,
            "title": "Blue Shirt",
            "price": 12.5,
            "category": "men's clothing",
            "image": "https://example.com/shirt.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.rating, Rating::default());
    }

    #[test]
    fn test_validate() {
        let mut product = Product::new(
            1,
            "Blue Shirt".to_string(),
            12.5,
            "men's clothing".to_string(),
            "https://example.com/shirt.jpg".to_string(),
        );
        assert!(product.validate().is_ok());

        product.title = "   ".to_string();
        assert!(product.validate().is_err());

        product.title = "Blue Shirt".to_string();
        product.price = -1.0;
        assert!(product.validate().is_err());

        product.price = 12.5;
        product.category = String::new();
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let product = Product::new(
            3,
            "Mens Cotton Jacket".to_string(),
            55.99,
            "men's clothing".to_string(),
            "https://example.com/jacket.jpg".to_string(),
        );

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}

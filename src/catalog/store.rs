//! Catalog Lookup Contract and In-Memory Store
//!
//! The cart only ever consumes the catalog through the narrow `Catalog`
//! trait: exact-match lookup by id and listing with an optional category
//! filter. The in-memory implementation ships the WT Store sample data and
//! backs both the server and the tests.

use super::models::{Product, ProductId};

// =============================================================================
// Lookup Contract
// =============================================================================

/// Read-only lookup contract over the product catalog.
///
/// No mutation operations are exposed; the cart manager never writes to the
/// catalog.
pub trait Catalog: Send + Sync {
    /// Exact-match lookup by identifier. No partial matching.
    fn product(&self, id: ProductId) -> Option<Product>;

    /// Lists all products, or only those whose category equals `category`
    /// exactly (case-sensitive). An empty result is not an error.
    fn list(&self, category: Option<&str>) -> Vec<Product>;
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// In-memory catalog backed by a plain product list.
///
/// Listing order is the seed order, so the storefront shows products in a
/// stable sequence.
pub struct MemoryCatalog {
    products: Vec<Product>,
}

impl MemoryCatalog {
    /// Creates a catalog holding exactly the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Creates a catalog seeded with the WT Store sample products.
    pub fn sample() -> Self {
        let mk = |id: i64,
                  name: &str,
                  description: &str,
                  unit_cost: f64,
                  inventory: u32,
                  category: &str| Product {
            id: ProductId(id),
            name: name.into(),
            description: description.into(),
            unit_cost,
            inventory,
            category: category.into(),
        };

        Self::new(vec![
            mk(1, "Yellow Wool Jumper", "Knitted jumper in soft yellow wool.", 20.0, 5, "women"),
            mk(2, "Classic Varsity Top", "Varsity-style top with contrast sleeves.", 35.0, 8, "women"),
            mk(3, "Silk Summer Top", "Light sleeveless top in pure silk.", 53.0, 2, "women"),
            mk(4, "Winter Knitted Dress", "Warm knitted dress for the cold season.", 74.0, 6, "women"),
            mk(5, "Zipped Jacket", "Water-resistant jacket with a full zip.", 65.0, 4, "men"),
            mk(6, "Denim Jacket", "Classic denim jacket with button front.", 81.0, 3, "men"),
            mk(7, "Soft Winter Jumper", "Heavy crew-neck jumper in grey marl.", 49.0, 9, "men"),
        ])
    }
}

impl Catalog for MemoryCatalog {
    fn product(&self, id: ProductId) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn list(&self, category: Option<&str>) -> Vec<Product> {
        match category {
            None => self.products.clone(),
            Some(cat) => self
                .products
                .iter()
                .filter(|p| p.category == cat)
                .cloned()
                .collect(),
        }
    }
}

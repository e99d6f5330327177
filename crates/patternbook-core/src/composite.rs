//! Products and bundles priced through one interface.
//!
//! A [`Product`] is either a single item or a [`Bundle`] of other products,
//! which may themselves be bundles. Callers price both the same way.

/// Kind of single item on sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Book,
    MusicCd,
    VideoDvd,
}

/// A priced entry in the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    Item {
        kind: ItemKind,
        title: String,
        price: f64,
    },
    Bundle(Bundle),
}

impl Product {
    pub fn book(title: impl Into<String>, price: f64) -> Self {
        Self::item(ItemKind::Book, title, price)
    }

    pub fn music_cd(title: impl Into<String>, price: f64) -> Self {
        Self::item(ItemKind::MusicCd, title, price)
    }

    pub fn video_dvd(title: impl Into<String>, price: f64) -> Self {
        Self::item(ItemKind::VideoDvd, title, price)
    }

    fn item(kind: ItemKind, title: impl Into<String>, price: f64) -> Self {
        Self::Item {
            kind,
            title: title.into(),
            price,
        }
    }

    /// Item title or bundle name.
    pub fn name(&self) -> &str {
        match self {
            Product::Item { title, .. } => title,
            Product::Bundle(bundle) => bundle.name(),
        }
    }

    /// Own price for items, sum of contents for bundles.
    pub fn price(&self) -> f64 {
        match self {
            Product::Item { price, .. } => *price,
            Product::Bundle(bundle) => bundle.price(),
        }
    }
}

impl From<Bundle> for Product {
    fn from(bundle: Bundle) -> Self {
        Product::Bundle(bundle)
    }
}

/// A named group of products.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bundle {
    name: String,
    products: Vec<Product>,
}

impl Bundle {
    pub fn new(name: impl Into<String>, products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            name: name.into(),
            products: products.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct children, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn add_product(&mut self, product: impl Into<Product>) {
        self.products.push(product.into());
    }

    /// Removes the first direct child named `name`.
    pub fn remove_product(&mut self, name: &str) -> Option<Product> {
        let idx = self.products.iter().position(|p| p.name() == name)?;
        Some(self.products.remove(idx))
    }

    /// Sum of all contained prices, recursively. Empty bundles cost 0.
    pub fn price(&self) -> f64 {
        self.products.iter().map(Product::price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entertainment() -> Bundle {
        Bundle::new(
            "Entertainment Bundle",
            [
                Product::book("The Lord of the Rings", 20.0),
                Product::music_cd("Abbey Road", 15.0),
                Product::video_dvd("The Godfather", 25.0),
            ],
        )
    }

    #[test]
    fn test_item_price_and_name() {
        let book = Product::book("Dune", 12.5);
        assert_eq!(book.name(), "Dune");
        assert!((book.price() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bundle_price_is_sum_of_items() {
        assert!((entertainment().price() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_bundle_costs_nothing() {
        let bundle = Bundle::new("Empty", []);
        assert_eq!(bundle.price(), 0.0);
        assert!(bundle.products().is_empty());
    }

    #[test]
    fn test_nested_bundles() {
        let mut outer = Bundle::new("Gift Box", [Product::book("Dune", 10.0)]);
        outer.add_product(entertainment());
        let product = Product::from(outer);
        assert!((product.price() - 70.0).abs() < f64::EPSILON);
        assert_eq!(product.name(), "Gift Box");
    }

    #[test]
    fn test_add_and_remove_product() {
        let mut bundle = entertainment();
        bundle.add_product(Product::book("Dune", 10.0));
        assert_eq!(bundle.products().len(), 4);

        let removed = bundle.remove_product("Abbey Road").expect("present");
        assert!(matches!(removed, Product::Item { kind: ItemKind::MusicCd, .. }));
        assert!((bundle.price() - 55.0).abs() < f64::EPSILON);
        assert!(bundle.remove_product("Abbey Road").is_none());
    }

    #[test]
    fn test_remove_nested_bundle_by_name() {
        let mut outer = Bundle::new("Outer", []);
        outer.add_product(entertainment());
        let removed = outer.remove_product("Entertainment Bundle").expect("present");
        assert!(matches!(removed, Product::Bundle(_)));
        assert_eq!(outer.price(), 0.0);
    }
}

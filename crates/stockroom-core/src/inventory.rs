//! # Inventory
//!
//! The catalog: an ordered sequence of [`Product`]s plus the id counter.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Inventory Operations                              │
//! │                                                                         │
//! │  Identity        next_id() ──► 1, 2, ... u32::MAX, then IdsExhausted    │
//! │                  create()  ──► next_id + Product::new + add             │
//! │                                                                         │
//! │  Mutation        add()     ──► push to the end                          │
//! │                  remove()  ──► erase first match, true/false            │
//! │                  find()    ──► Option<&mut Product>, edit in place      │
//! │                                                                         │
//! │  Views           all()       ──► &[Product] in current order            │
//! │                  low_stock() ──► quantity <= 5, current order           │
//! │                                                                         │
//! │  Ordering        sort_by_quantity(order), sort_by_price(order)          │
//! │                  stable: equal keys keep their prior relative order     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! There is no global catalog. The caller owns an `Inventory` value and
//! passes it (by `&mut`) to whatever needs it, so tests and independent
//! catalogs each get their own instance.
//!
//! ## In-place Edits
//! [`Inventory::find`] hands out a `&mut Product` borrowed from the catalog.
//! Edits through it are the stored product; there is no separate commit step.
//! ```rust
//! use stockroom_core::Inventory;
//!
//! let mut inventory = Inventory::new();
//! let id = inventory.create("flour", 20, 1.5, None).unwrap().id();
//!
//! inventory.find(id).unwrap().set_quantity(4);
//! assert_eq!(inventory.get(id).unwrap().quantity(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{validate_price, Product, ProductId};

// =============================================================================
// Sort Parameters
// =============================================================================

/// Field to order the catalog by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Quantity,
    Price,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Quantity => write!(f, "quantity"),
            SortKey::Price => write!(f, "price"),
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Orients an ascending comparison result.
    #[inline]
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// The product catalog.
///
/// ## Invariants
/// - The counter starts at 1 and only ever increases
/// - Ids handed out by [`Inventory::next_id`] are unique for the lifetime of
///   the value, including across removals
/// - Once `u32::MAX` has been issued the counter is spent (`None`) and no
///   further id is handed out
/// - Sequence order is insertion order until a sort is applied
#[derive(Debug, Clone)]
pub struct Inventory {
    products: Vec<Product>,
    next_id: Option<u32>,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new()
    }
}

impl Inventory {
    /// Creates an empty catalog whose first issued id is 1.
    pub fn new() -> Self {
        Inventory {
            products: Vec::new(),
            next_id: Some(1),
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Returns the next id and advances the counter.
    ///
    /// Call exactly once per product being created and use the result as that
    /// product's id.
    ///
    /// ## Errors
    /// [`CoreError::IdsExhausted`] after `u32::MAX` has been issued. The
    /// counter never wraps or repeats.
    pub fn next_id(&mut self) -> CoreResult<ProductId> {
        let raw = self.next_id.ok_or(CoreError::IdsExhausted)?;
        self.next_id = raw.checked_add(1);
        Ok(ProductId::new(raw))
    }

    /// Issues an id, builds the product and appends it.
    ///
    /// The price is checked before an id is issued, so a rejected creation
    /// leaves the counter untouched. `category` of `None` means "General".
    ///
    /// ## Errors
    /// - [`CoreError::InvalidPrice`] for a negative or non-finite price
    /// - [`CoreError::IdsExhausted`] when no id is left to issue
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::Inventory;
    ///
    /// let mut inventory = Inventory::new();
    /// assert!(inventory.create("bad", 1, -2.0, None).is_err());
    ///
    /// let rice = inventory.create("rice", 0, 9.99, Some("grain")).unwrap();
    /// assert_eq!(rice.id().get(), 1);
    /// ```
    pub fn create(
        &mut self,
        name: &str,
        quantity: u32,
        price: f64,
        category: Option<&str>,
    ) -> CoreResult<&mut Product> {
        validate_price(price)?;

        let id = self.next_id()?;
        let mut product = Product::new(id, name, quantity, price)?;
        if let Some(category) = category {
            product = product.in_category(category);
        }

        let index = self.products.len();
        self.add(product);
        Ok(&mut self.products[index])
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Appends a product. No uniqueness check; ids from [`Inventory::next_id`]
    /// are unique already.
    pub fn add(&mut self, product: Product) {
        debug!(
            product_id = %product.id(),
            name = %product.name(),
            quantity = product.quantity(),
            price = product.price(),
            "product added"
        );
        self.products.push(product);
    }

    /// Removes the product with this id. Returns whether anything was removed.
    ///
    /// The id counter is not touched; a removed id is never issued again.
    pub fn remove(&mut self, id: ProductId) -> bool {
        match self.products.iter().position(|p| p.id() == id) {
            Some(index) => {
                self.products.remove(index);
                debug!(product_id = %id, "product removed");
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Mutable handle to the product with this id, or `None`.
    pub fn find(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// Read-only lookup.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    // =========================================================================
    // Views
    // =========================================================================

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// All products in current order.
    #[inline]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products with quantity at or below the low-stock threshold, in current
    /// order. Recomputed on every call.
    pub fn low_stock(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Stable sort by quantity.
    pub fn sort_by_quantity(&mut self, order: SortOrder) {
        self.products
            .sort_by(|a, b| order.apply(a.quantity().cmp(&b.quantity())));
        debug!(key = %SortKey::Quantity, %order, "inventory sorted");
    }

    /// Stable sort by price. Prices are always finite, so `total_cmp` agrees
    /// with numeric order.
    pub fn sort_by_price(&mut self, order: SortOrder) {
        self.products
            .sort_by(|a, b| order.apply(a.price().total_cmp(&b.price())));
        debug!(key = %SortKey::Price, %order, "inventory sorted");
    }

    /// Dispatches to the sort for `key`.
    pub fn sort(&mut self, key: SortKey, order: SortOrder) {
        match key {
            SortKey::Quantity => self.sort_by_quantity(order),
            SortKey::Price => self.sort_by_price(order),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LOW_STOCK_THRESHOLD;

    /// Builds a catalog with one product per quantity, priced at `qty * 1.5`.
    fn stocked(quantities: &[u32]) -> Inventory {
        let mut inventory = Inventory::new();
        for (i, qty) in quantities.iter().enumerate() {
            let name = format!("item{}", i);
            inventory
                .create(&name, *qty, *qty as f64 * 1.5, None)
                .unwrap();
        }
        inventory
    }

    fn quantities(inventory: &Inventory) -> Vec<u32> {
        inventory.all().iter().map(Product::quantity).collect()
    }

    fn ids(inventory: &Inventory) -> Vec<u32> {
        inventory.all().iter().map(|p| p.id().get()).collect()
    }

    #[test]
    fn test_next_id_strictly_increasing_across_removals() {
        let mut inventory = Inventory::new();
        let first = inventory.next_id().unwrap();
        let second = inventory.next_id().unwrap();
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);

        let id = inventory.create("milk", 3, 1.0, None).unwrap().id();
        assert_eq!(id.get(), 3);
        assert!(inventory.remove(id));

        let again = inventory.create("milk", 3, 1.0, None).unwrap().id();
        assert_eq!(again.get(), 4);
    }

    #[test]
    fn test_ids_never_repeat_at_counter_limit() {
        let mut inventory = Inventory::new();
        inventory.next_id = Some(u32::MAX - 1);

        let a = inventory.create("a", 1, 1.0, None).unwrap().id();
        let b = inventory.create("b", 1, 1.0, None).unwrap().id();
        assert_eq!(a.get(), u32::MAX - 1);
        assert_eq!(b.get(), u32::MAX);

        assert_eq!(
            inventory.create("c", 1, 1.0, None).unwrap_err(),
            CoreError::IdsExhausted
        );
        assert_eq!(inventory.next_id(), Err(CoreError::IdsExhausted));
        assert_eq!(ids(&inventory), vec![u32::MAX - 1, u32::MAX]);

        // removals do not free ids up again
        assert!(inventory.remove(b));
        assert!(inventory.create("d", 1, 1.0, None).is_err());
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_rejected_create_does_not_consume_id() {
        let mut inventory = Inventory::new();
        assert!(matches!(
            inventory.create("ghost", 1, -1.0, None),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(inventory.is_empty());

        let id = inventory.create("real", 1, 1.0, None).unwrap().id();
        assert_eq!(id.get(), 1);
    }

    #[test]
    fn test_add_then_find_returns_same_product() {
        let mut inventory = Inventory::new();
        let id = inventory.next_id().unwrap();
        let product = Product::new(id, "bread", 8, 2.25).unwrap();
        inventory.add(product.clone());

        assert_eq!(inventory.find(id).as_deref(), Some(&product));
    }

    #[test]
    fn test_edits_through_find_are_visible_later() {
        let mut inventory = stocked(&[10, 20]);
        let id = ProductId::new(2);

        {
            let product = inventory.find(id).unwrap();
            product.set_quantity(1);
            product.set_price(0.5).unwrap();
            product.rename("sUGAR");
        }

        let product = inventory.get(id).unwrap();
        assert_eq!(product.quantity(), 1);
        assert_eq!(product.price(), 0.5);
        assert_eq!(product.name(), "Sugar");
    }

    #[test]
    fn test_find_missing_is_none() {
        let mut inventory = stocked(&[1]);
        assert!(inventory.find(ProductId::new(99)).is_none());
        assert!(inventory.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_remove_existing_and_missing() {
        let mut inventory = stocked(&[1, 2, 3]);

        assert!(inventory.remove(ProductId::new(2)));
        assert_eq!(inventory.len(), 2);
        assert!(inventory.find(ProductId::new(2)).is_none());
        assert_eq!(ids(&inventory), vec![1, 3]);

        assert!(!inventory.remove(ProductId::new(2)));
        assert!(!inventory.remove(ProductId::new(42)));
        assert_eq!(ids(&inventory), vec![1, 3]);
    }

    #[test]
    fn test_low_stock_preserves_order() {
        let inventory = stocked(&[10, 5, 3, 6]);
        let low: Vec<u32> = inventory.low_stock().iter().map(|p| p.quantity()).collect();
        assert_eq!(low, vec![5, 3]);
        assert!(inventory
            .low_stock()
            .iter()
            .all(|p| p.quantity() <= LOW_STOCK_THRESHOLD));
    }

    #[test]
    fn test_low_stock_empty_when_all_stocked() {
        let inventory = stocked(&[6, 100]);
        assert!(inventory.low_stock().is_empty());
    }

    #[test]
    fn test_sort_by_quantity() {
        let mut inventory = stocked(&[30, 10, 20]);

        inventory.sort_by_quantity(SortOrder::Ascending);
        assert_eq!(quantities(&inventory), vec![10, 20, 30]);

        inventory.sort_by_quantity(SortOrder::Descending);
        assert_eq!(quantities(&inventory), vec![30, 20, 10]);
    }

    #[test]
    fn test_sort_by_price() {
        let mut inventory = Inventory::new();
        inventory.create("a", 1, 4.5, None).unwrap();
        inventory.create("b", 1, 0.99, None).unwrap();
        inventory.create("c", 1, 12.0, None).unwrap();

        inventory.sort(SortKey::Price, SortOrder::Ascending);
        assert_eq!(ids(&inventory), vec![2, 1, 3]);

        inventory.sort(SortKey::Price, SortOrder::Descending);
        assert_eq!(ids(&inventory), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut inventory = stocked(&[7, 2, 9, 2, 4]);
        inventory.sort_by_quantity(SortOrder::Ascending);
        let once = ids(&inventory);
        inventory.sort_by_quantity(SortOrder::Ascending);
        assert_eq!(ids(&inventory), once);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        // ids 1..=4, quantities with ties between ids 1/3 and 2/4
        let mut inventory = stocked(&[5, 8, 5, 8]);

        inventory.sort_by_quantity(SortOrder::Ascending);
        assert_eq!(ids(&inventory), vec![1, 3, 2, 4]);

        inventory.sort_by_quantity(SortOrder::Descending);
        assert_eq!(ids(&inventory), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_price_sort_is_stable_on_ties() {
        let mut inventory = Inventory::new();
        inventory.create("a", 1, 2.0, None).unwrap();
        inventory.create("b", 1, 3.5, None).unwrap();
        inventory.create("c", 1, 2.0, None).unwrap();
        inventory.create("d", 1, 3.5, None).unwrap();

        inventory.sort_by_price(SortOrder::Ascending);
        assert_eq!(ids(&inventory), vec![1, 3, 2, 4]);

        inventory.sort_by_price(SortOrder::Descending);
        assert_eq!(ids(&inventory), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sorting_empty_catalog() {
        let mut inventory = Inventory::new();
        inventory.sort(SortKey::Quantity, SortOrder::Ascending);
        inventory.sort(SortKey::Price, SortOrder::Descending);
        assert!(inventory.is_empty());

        let id = inventory.create("salt", 1, 0.5, None).unwrap().id();
        assert_eq!(id.get(), 1);
    }

    #[test]
    fn test_rice_scenario() {
        let mut inventory = Inventory::new();
        assert!(inventory.is_empty());

        inventory.create("rice", 0, 9.99, Some("grain")).unwrap();

        assert!(!inventory.is_empty());
        assert_eq!(inventory.all().len(), 1);

        let rice = &inventory.all()[0];
        assert_eq!(rice.id().get(), 1);
        assert_eq!(rice.name(), "Rice");
        assert_eq!(rice.category(), "Grain");
        assert_eq!(inventory.low_stock(), vec![rice]);
    }

    #[test]
    fn test_independent_catalogs() {
        let mut a = Inventory::new();
        let mut b = Inventory::default();
        a.create("x", 1, 1.0, None).unwrap();
        a.create("y", 1, 1.0, None).unwrap();
        let id = b.create("z", 1, 1.0, None).unwrap().id();
        assert_eq!(id.get(), 1);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_sort_display() {
        assert_eq!(SortOrder::Ascending.to_string(), "ascending");
        assert_eq!(SortOrder::Descending.to_string(), "descending");
        assert_eq!(SortKey::Price.to_string(), "price");
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }
}

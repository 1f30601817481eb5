//! # Domain Types
//!
//! The catalog record and its identifier.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────────────────┐       │
//! │  │   ProductId     │        │            Product               │       │
//! │  │  ─────────────  │        │  ──────────────────────────────  │       │
//! │  │  u32, from 1    │ ◄───── │  id        (fixed at creation)   │       │
//! │  │  never reused   │        │  name      (capitalized)         │       │
//! │  └─────────────────┘        │  quantity  (u32)                 │       │
//! │                             │  price     (f64, >= 0, finite)   │       │
//! │                             │  category  (capitalized)         │       │
//! │                             └──────────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Normalization On Write
//! `name` and `category` pass through [`capitalize`] on every write, at
//! construction and in the setters, so a stored product is always in
//! normalized form.

use serde::Serialize;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::{DEFAULT_CATEGORY, LOW_STOCK_THRESHOLD};

// =============================================================================
// Capitalization
// =============================================================================

/// Upper-cases the first character and lower-cases the rest.
///
/// Empty strings pass through unchanged. Works on Unicode scalar values, so a
/// character whose case mapping expands (e.g. `ß` → `SS`) expands here too.
///
/// ## Example
/// ```rust
/// use stockroom_core::capitalize;
///
/// assert_eq!(capitalize("jOHN doe"), "John doe");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// =============================================================================
// Product Id
// =============================================================================

/// Identifier issued by [`Inventory::next_id`](crate::Inventory::next_id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Wraps a raw id, e.g. one typed in by the user for a lookup.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ProductId(raw)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog item.
///
/// The id is fixed at construction and has no setter. Every other field can
/// be changed in place through the setters below.
///
/// `Serialize` is for library callers exporting a catalog, for example
/// `serde_json::to_string(inventory.all())`. The console does not use it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: u32,
    price: f64,
    category: String,
}

impl Product {
    /// Creates a product in the default category ("General").
    ///
    /// ## Errors
    /// [`CoreError::InvalidPrice`] if `price` is negative or not finite.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Product, ProductId};
    ///
    /// let p = Product::new(ProductId::new(1), "sOAP", 12, 1.25).unwrap();
    /// assert_eq!(p.name(), "Soap");
    /// assert_eq!(p.category(), "General");
    /// ```
    pub fn new(id: ProductId, name: &str, quantity: u32, price: f64) -> CoreResult<Self> {
        Ok(Product {
            id,
            name: capitalize(name),
            quantity,
            price: validate_price(price)?,
            category: DEFAULT_CATEGORY.to_string(),
        })
    }

    /// Replaces the category at construction time.
    pub fn in_category(mut self, category: &str) -> Self {
        self.set_category(category);
        self
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Renames the product (normalized).
    pub fn rename(&mut self, name: &str) {
        self.name = capitalize(name);
    }

    /// Sets the quantity and returns the previous one.
    pub fn set_quantity(&mut self, quantity: u32) -> u32 {
        std::mem::replace(&mut self.quantity, quantity)
    }

    /// Sets the price and returns the previous one.
    ///
    /// On error the stored price is left untouched.
    pub fn set_price(&mut self, price: f64) -> CoreResult<f64> {
        let price = validate_price(price)?;
        Ok(std::mem::replace(&mut self.price, price))
    }

    /// Changes the category (normalized).
    pub fn set_category(&mut self, category: &str) {
        self.category = capitalize(category);
    }

    /// True when quantity is at or below [`LOW_STOCK_THRESHOLD`].
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= LOW_STOCK_THRESHOLD
    }
}

pub(crate) fn validate_price(price: f64) -> CoreResult<f64> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(CoreError::InvalidPrice { price })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

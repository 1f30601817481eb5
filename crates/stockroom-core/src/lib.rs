//! # stockroom-core: Pure Catalog Logic for Stockroom
//!
//! This crate owns the product catalog: the [`Product`] record and the
//! [`Inventory`] that issues ids, looks products up, removes them, filters
//! low stock and sorts. It performs no I/O and never parses raw text.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Console (apps/console)                          │   │
//! │  │    Main Menu ──► Prompts ──► Validation ──► Tables / Blocks     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed values (u32, f64, &str)          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌─────────────┐      ┌───────────┐        │   │
//! │  │   │   types   │      │  inventory  │      │   error   │        │   │
//! │  │   │  Product  │      │  Inventory  │      │ CoreError │        │   │
//! │  │   │ ProductId │      │ SortKey/Ord │      │           │        │   │
//! │  │   └───────────┘      └─────────────┘      └───────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PARSING • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, SortOrder};
//!
//! let mut inventory = Inventory::new();
//! let id = inventory.create("rice", 0, 9.99, Some("grain")).unwrap().id();
//!
//! let rice = inventory.find(id).unwrap();
//! assert_eq!(rice.name(), "Rice");
//! assert_eq!(rice.category(), "Grain");
//!
//! inventory.sort_by_price(SortOrder::Descending);
//! assert_eq!(inventory.low_stock().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use inventory::{Inventory, SortKey, SortOrder};
pub use types::{capitalize, Product, ProductId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity at or below which a product counts as low stock (inclusive).
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Category assigned when the caller does not name one.
pub const DEFAULT_CATEGORY: &str = "General";

//! # Catalog Commands
//!
//! Menu actions over the whole catalog: listing, sorting, low stock.

use std::io::{BufRead, Write};

use stockroom_core::{SortKey, SortOrder, LOW_STOCK_THRESHOLD};
use tracing::info;

use super::SECTION_RULE;
use crate::error::AppResult;
use crate::input::Console;
use crate::render::product_table;
use crate::state::AppState;

/// Prints every product in current order.
pub fn display_all<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> AppResult<()> {
    if state.inventory.is_empty() {
        console.println("No products in inventory.")?;
        return Ok(());
    }

    console.println(&product_table(
        "Inventory List",
        state.inventory.all(),
        &state.config,
    ))
}

/// Asks for a key and direction, sorts in place, then lists the result.
pub fn sort<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> AppResult<()> {
    if state.inventory.is_empty() {
        console.println(&format!("{}\nInventory is empty.", SECTION_RULE))?;
        return Ok(());
    }

    console.println(&format!("{}\n1. Sort by Quantity\n2. Sort by Price", SECTION_RULE))?;
    let key = match console.prompt_int("Enter your choice: ", 1, 2)? {
        1 => SortKey::Quantity,
        _ => SortKey::Price,
    };

    console.println("\n1. Ascending\n2. Descending")?;
    let order = match console.prompt_int("Enter sort order: ", 1, 2)? {
        1 => SortOrder::Ascending,
        _ => SortOrder::Descending,
    };

    state.inventory.sort(key, order);
    info!(%key, %order, "Products sorted");

    console.println(&format!("Products sorted ({} order)", order))?;
    display_all(state, console)
}

/// Prints the products at or below the low-stock threshold.
pub fn low_stock<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> AppResult<()> {
    let low = state.inventory.low_stock();
    if low.is_empty() {
        console.println(&format!(
            "No low stock products (No quantity <= {}).",
            LOW_STOCK_THRESHOLD
        ))?;
        return Ok(());
    }

    console.println(&format!(
        "\n{}",
        product_table("Low Stock Products", low, &state.config)
    ))
}

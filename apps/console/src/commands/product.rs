//! # Product Commands
//!
//! Menu actions that work on a single product picked by id.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Enter product ID to update: 3                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  inventory.find(3) ── None ──► "Item not found!"                        │
//! │       │ Some(&mut Product)                                              │
//! │       ▼                                                                 │
//! │  show block, then 1. Quantity / 2. Price / 3. Cancel                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  product.set_quantity(n) ──► "Quantity of Item X updated from A to B"   │
//! │                                                                         │
//! │  The edit lands directly in the catalog; nothing to save afterwards.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::ProductId;
use tracing::{debug, info};

use super::{NOT_FOUND, SECTION_RULE};
use crate::error::AppResult;
use crate::input::{is_valid_name, Console};
use crate::render::product_block;
use crate::state::AppState;

/// Prompts for a product id (1 or more).
fn prompt_id<R: BufRead, W: Write>(console: &mut Console<R, W>, prompt: &str) -> AppResult<ProductId> {
    Ok(ProductId::new(console.prompt_int(prompt, 1, u32::MAX)?))
}

/// Adds a product from four prompts: name, quantity, price, category.
pub fn add<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> AppResult<()> {
    console.println(SECTION_RULE)?;
    let name = console.prompt_text("Enter product name: ", Some(is_valid_name))?;
    let quantity = console.prompt_int("Enter quantity: ", 0, u32::MAX)?;
    let price = console.prompt_price("Enter price: ")?;
    let category = console.prompt_text("Enter product category: ", Some(is_valid_name))?;

    let product = state
        .inventory
        .create(&name, quantity, price, Some(&category))?;
    info!(product_id = %product.id(), name = %product.name(), "Item added");

    console.println("\nItem added successfully!")?;
    Ok(())
}

/// Changes the quantity or price of an existing product.
pub fn update<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> AppResult<()> {
    if state.inventory.is_empty() {
        console.println("Inventory is empty. No products to update.")?;
        return Ok(());
    }

    console.println(SECTION_RULE)?;
    let id = prompt_id(console, "Enter product ID to update: ")?;
    let Some(product) = state.inventory.find(id) else {
        console.println(NOT_FOUND)?;
        return Ok(());
    };

    console.println("\nCurrent product details:")?;
    console.println(&product_block(product, &state.config))?;
    console.println("\n1. Quantity\n2. Price\n3. Cancel")?;

    match console.prompt_int("Enter your choice: ", 1, 3)? {
        1 => {
            let new_quantity = console.prompt_int("Enter new quantity: ", 0, u32::MAX)?;
            let old_quantity = product.set_quantity(new_quantity);
            info!(product_id = %id, old_quantity, new_quantity, "Quantity updated");
            console.println(&format!(
                "\nQuantity of Item {} updated from {} to {}",
                product.name(),
                old_quantity,
                product.quantity()
            ))?;
        }
        2 => {
            let prompt = format!("Enter new price: {}", state.config.currency_symbol);
            let new_price = console.prompt_price(&prompt)?;
            let old_price = product.set_price(new_price)?;
            info!(product_id = %id, old_price, new_price, "Price updated");
            console.println(&format!(
                "\nPrice of Item {} updated from {} to {}",
                product.name(),
                state.config.format_price(old_price),
                state.config.format_price(product.price())
            ))?;
        }
        _ => debug!(product_id = %id, "Update cancelled"),
    }

    Ok(())
}

/// Removes a product, asking for confirmation unless disabled in config.
pub fn remove<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> AppResult<()> {
    if state.inventory.is_empty() {
        console.println(&format!("{}\nInventory is empty.", SECTION_RULE))?;
        return Ok(());
    }

    console.println(SECTION_RULE)?;
    let id = prompt_id(console, "Enter product ID to remove: ")?;
    let Some(product) = state.inventory.get(id) else {
        console.println(NOT_FOUND)?;
        return Ok(());
    };

    console.println("\nProduct to be removed:")?;
    console.println(&product_block(product, &state.config))?;

    let confirmed =
        !state.config.confirm_removals || console.prompt_confirm("Confirm removal? (y/n): ")?;

    if confirmed && state.inventory.remove(id) {
        info!(product_id = %id, "Item removed");
        console.println("Item removed successfully!")?;
    } else {
        console.println("Removal cancelled.")?;
    }

    Ok(())
}

/// Looks a product up by id and shows it.
pub fn search<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> AppResult<()> {
    if state.inventory.is_empty() {
        console.println("Inventory is empty.")?;
        return Ok(());
    }

    let id = prompt_id(console, "Enter product ID to search: ")?;
    match state.inventory.get(id) {
        Some(product) => {
            console.println("\nProduct found:")?;
            console.println(&product_block(product, &state.config))?;
        }
        None => console.println(NOT_FOUND)?,
    }

    Ok(())
}

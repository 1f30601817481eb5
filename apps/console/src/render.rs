//! # Render Module
//!
//! Turns products into text. Nothing here writes to the terminal; callers
//! pass the returned strings to [`Console`](crate::input::Console).
//!
//! ## Table Layout
//! ```text
//! ---------------------------------------------------------------------------
//! | ID     | Name                 | Quantity | Price      | Category        |
//! ---------------------------------------------------------------------------
//! | 1      | Rice                 | 0        | ₱9.99      | Grain           |
//! ---------------------------------------------------------------------------
//!   6        20                     8          10           15   (columns)
//! ```
//! Cells longer than their column are cut to `width - 3` characters and
//! end in `...`.

use stockroom_core::Product;

use crate::state::ConfigState;

pub const RULE: &str =
    "---------------------------------------------------------------------------";

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 20;
const QUANTITY_WIDTH: usize = 8;
const PRICE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 15;

/// Pads or truncates `text` to exactly `width` characters.
///
/// ## Example
/// ```rust
/// use stockroom_console::render::fixed_width;
///
/// assert_eq!(fixed_width("Tea", 6), "Tea   ");
/// assert_eq!(fixed_width("Chocolate", 6), "Cho...");
/// ```
pub fn fixed_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Labeled multi-line view of a single product.
pub fn product_block(product: &Product, config: &ConfigState) -> String {
    const BLOCK_RULE: &str = "---------------------------------";
    format!(
        "{rule}\nID:       {}\nName:     {}\nQuantity: {}\nPrice:    {}\nCategory: {}\n{rule}",
        product.id(),
        product.name(),
        product.quantity(),
        config.format_price(product.price()),
        product.category(),
        rule = BLOCK_RULE,
    )
}

/// One `| ... |` table row.
pub fn table_row(product: &Product, config: &ConfigState) -> String {
    format!(
        "| {} | {} | {} | {} | {} |",
        fixed_width(&product.id().to_string(), ID_WIDTH),
        fixed_width(product.name(), NAME_WIDTH),
        fixed_width(&product.quantity().to_string(), QUANTITY_WIDTH),
        fixed_width(&config.format_price(product.price()), PRICE_WIDTH),
        fixed_width(product.category(), CATEGORY_WIDTH),
    )
}

/// Full table: `"{title} (N items):"`, header, rows and closing rule.
pub fn product_table<'a, I>(title: &str, products: I, config: &ConfigState) -> String
where
    I: IntoIterator<Item = &'a Product>,
    I::IntoIter: ExactSizeIterator,
{
    let products = products.into_iter();
    let header = format!(
        "| {} | {} | {} | {} | {} |",
        fixed_width("ID", ID_WIDTH),
        fixed_width("Name", NAME_WIDTH),
        fixed_width("Quantity", QUANTITY_WIDTH),
        fixed_width("Price", PRICE_WIDTH),
        fixed_width("Category", CATEGORY_WIDTH),
    );

    let mut lines = vec![
        format!("{} ({} items):", title, products.len()),
        RULE.to_string(),
        header,
        RULE.to_string(),
    ];
    lines.extend(products.map(|p| table_row(p, config)));
    lines.push(RULE.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Inventory;

    fn rice() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.create("rice", 0, 9.99, Some("grain")).unwrap();
        inventory
    }

    #[test]
    fn test_fixed_width() {
        assert_eq!(fixed_width("", 3), "   ");
        assert_eq!(fixed_width("abc", 3), "abc");
        assert_eq!(fixed_width("abcd", 3), "...");
        assert_eq!(fixed_width("Extra Long Product Name", 20), "Extra Long Produc...");
        assert_eq!(fixed_width("₱9.99", 10), "₱9.99     ");
    }

    #[test]
    fn test_table_row_widths() {
        let inventory = rice();
        let row = table_row(&inventory.all()[0], &ConfigState::default());
        assert_eq!(
            row,
            "| 1      | Rice                 | 0        | ₱9.99      | Grain           |"
        );
    }

    #[test]
    fn test_product_block() {
        let inventory = rice();
        let block = product_block(&inventory.all()[0], &ConfigState::default());
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "ID:       1");
        assert_eq!(lines[2], "Name:     Rice");
        assert_eq!(lines[4], "Price:    ₱9.99");
        assert_eq!(lines[5], "Category: Grain");
    }

    #[test]
    fn test_product_table() {
        let inventory = rice();
        let table = product_table("Inventory List", inventory.all(), &ConfigState::default());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Inventory List (1 items):");
        assert!(lines[2].starts_with("| ID     | Name"));
        assert!(lines[4].contains("Rice"));
        assert_eq!(lines.last(), Some(&RULE));
    }
}

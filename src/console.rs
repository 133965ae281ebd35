//! Console presenter: menu text, input mapping, and rendering.
//!
//! Logic-free by design. Everything here turns ledger state into strings or
//! user input into typed values; no business state lives in this module.

use std::fmt::Write as _;

use crate::Money;
use crate::model::Product;

/// The interactive menu.
pub const MENU: &str = "\nMenu:\n\
                        \x20 1. Show Stock\n\
                        \x20 2. Show Cash\n\
                        \x20 3. Add Product\n\
                        \x20 4. Sell Product\n\
                        \x20 5. Exit\n";

/// One of the five menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowStock,
    ShowCash,
    AddProduct,
    SellProduct,
    Exit,
}

impl MenuChoice {
    /// Map free-text input to an option. `None` is an invalid selection,
    /// reported to the user but never fatal.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ShowStock),
            "2" => Some(Self::ShowCash),
            "3" => Some(Self::AddProduct),
            "4" => Some(Self::SellProduct),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// A positive whole number of units.
pub fn parse_quantity(input: &str) -> Option<u32> {
    match input.trim().parse() {
        Ok(0) | Err(_) => None,
        Ok(quantity) => Some(quantity),
    }
}

/// A non-negative price, with or without a leading `$`.
pub fn parse_price(input: &str) -> Option<Money> {
    let input = input.trim();
    let input = input.strip_prefix('$').unwrap_or(input);
    let price: Money = input.parse().ok()?;
    if price.is_negative() { None } else { Some(price) }
}

/// Two-decimal cash line with a currency symbol.
pub fn render_cash(cash: Money) -> String {
    format!("Cash available: ${cash}")
}

/// Render the stock snapshot as a table, one row per product. An empty
/// catalog renders a distinct message instead of a bare header.
pub fn render_stock<'a>(products: impl Iterator<Item = &'a Product>) -> String {
    const HEADERS: [&str; 4] = ["Product", "Quantity", "Purchase", "Sale"];

    let rows: Vec<[String; 4]> = products
        .map(|p| {
            [
                p.name.clone(),
                p.quantity.to_string(),
                format!("${}", p.purchase_price),
                format!("${}", p.sale_price),
            ]
        })
        .collect();

    if rows.is_empty() {
        return "Stock is empty.".to_string();
    }

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths);
    let dashes = widths.map(|w| "-".repeat(w));
    write_row(&mut out, &dashes, &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out.pop(); // trailing newline
    out
}

fn write_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    // Name column left-aligned, numeric columns right-aligned.
    let _ = writeln!(
        out,
        "| {:<w0$} | {:>w1$} | {:>w2$} | {:>w3$} |",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
}

use std::env;
use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shop_ledger::console::{self, MenuChoice};
use shop_ledger::{InventoryLedger, Money, store};

/// Starting balance for a shop with no persisted state yet.
const DEFAULT_CASH: Money = Money::from_cents(100_000);

const DEFAULT_STORE: &str = "store.csv";

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(io::stderr)
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_STORE.to_string());
    if !path.ends_with(".csv") {
        warn!(path, "store file seems to not be a csv file");
    }

    let mut ledger = match store::load(&path) {
        Ok(Some((catalog, cash))) => {
            info!(path, products = catalog.len(), cash = %cash, "store loaded");
            InventoryLedger::with_state(catalog, cash)
        }
        Ok(None) => {
            info!(path, "no store found, starting fresh");
            InventoryLedger::new(DEFAULT_CASH)
        }
        Err(e) => {
            warn!(path, "{e}");
            println!("Could not read saved data ({e}). Starting with an empty catalog.");
            InventoryLedger::new(DEFAULT_CASH)
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        // EOF on stdin behaves like Exit: state is still saved.
        let Some(input) = prompt(&mut lines, &format!("{}Choose an option: ", console::MENU))
        else {
            break;
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::ShowStock) => {
                println!("Stock:");
                println!("{}", console::render_stock(ledger.stock()));
            }
            Some(MenuChoice::ShowCash) => println!("{}", console::render_cash(ledger.cash())),
            Some(MenuChoice::AddProduct) => add_product(&mut ledger, &mut lines),
            Some(MenuChoice::SellProduct) => sell_product(&mut ledger, &mut lines),
            Some(MenuChoice::Exit) => break,
            None => println!("Invalid option. Try again."),
        }
    }

    let (catalog, cash) = ledger.into_state();
    match store::save(&catalog, cash, &path) {
        Ok(()) => println!("Data saved. Goodbye!"),
        Err(e) => {
            warn!(path, "{e}");
            println!("Failed to save data: {e}");
        }
    }
}

/// Print a prompt and read one line. `None` means stdin is closed.
fn prompt(lines: &mut Lines<'_>, message: &str) -> Option<String> {
    print!("{message}");
    io::stdout().flush().expect("failed to flush stdout");
    match lines.next()? {
        Ok(line) => Some(line),
        Err(e) => {
            warn!("failed to read stdin: {e}");
            None
        }
    }
}

fn add_product(ledger: &mut InventoryLedger, lines: &mut Lines<'_>) {
    let Some(name) = prompt(lines, "Product name: ") else {
        return;
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        println!("Product name must not be empty.");
        return;
    }

    let Some(quantity) = prompt(lines, "Quantity: ").and_then(|s| console::parse_quantity(&s))
    else {
        println!("Quantity must be a positive whole number.");
        return;
    };
    let Some(purchase_price) =
        prompt(lines, "Purchase price: $").and_then(|s| console::parse_price(&s))
    else {
        println!("Purchase price must be a non-negative amount.");
        return;
    };
    let Some(sale_price) = prompt(lines, "Sale price: $").and_then(|s| console::parse_price(&s))
    else {
        println!("Sale price must be a non-negative amount.");
        return;
    };

    match ledger.add_stock(&name, quantity, purchase_price, sale_price) {
        Ok(cost) => {
            println!("Product '{name}' added to stock. Cost: ${cost}");
            println!("{}", console::render_cash(ledger.cash()));
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn sell_product(ledger: &mut InventoryLedger, lines: &mut Lines<'_>) {
    let Some(name) = prompt(lines, "Product name: ") else {
        return;
    };
    let name = name.trim().to_string();

    let Some(quantity) = prompt(lines, "Quantity: ").and_then(|s| console::parse_quantity(&s))
    else {
        println!("Quantity must be a positive whole number.");
        return;
    };

    match ledger.sell_stock(&name, quantity) {
        Ok(revenue) => {
            println!("{quantity} units of '{name}' sold. Revenue: ${revenue}");
            println!("{}", console::render_cash(ledger.cash()));
        }
        Err(e) => println!("Error: {e}"),
    }
}

// UI layer: numbered menu loop and interactive flows using `dialoguer`.
// Every store failure is printed here and the loop carries on; only
// terminal I/O errors bubble up to `main`.

use crate::error::{StoreError, ValidationError};
use crate::record::ShoeRecord;
use crate::store::InventoryStore;
use crate::validate;
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::str::FromStr;
use std::time::Duration;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewAll,
    Capture,
    Restock,
    Search,
    ValuePerItem,
    HighestQuantity,
    Exit,
}

impl MenuChoice {
    pub const LABELS: [&'static str; 7] = [
        "View all shoes",
        "Capture new shoe",
        "Re-stock lowest quantity shoe",
        "Search for a shoe by code",
        "Display value per item",
        "Display product with highest quantity (on sale)",
        "Exit",
    ];
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ViewAll),
            "2" => Ok(MenuChoice::Capture),
            "3" => Ok(MenuChoice::Restock),
            "4" => Ok(MenuChoice::Search),
            "5" => Ok(MenuChoice::ValuePerItem),
            "6" => Ok(MenuChoice::HighestQuantity),
            "7" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// Load the backing file into `store`, then run the menu until "Exit".
pub fn main_menu(mut store: InventoryStore) -> Result<()> {
    match store.load() {
        Ok(report) if report.skipped > 0 => println!(
            "{}",
            format!(
                "Loaded {} shoes, skipped {} malformed lines.",
                report.loaded, report.skipped
            )
            .yellow()
        ),
        Ok(_) => {}
        Err(e) => println!("{}", e.to_string().yellow()),
    }

    loop {
        println!("\n========= SHOE INVENTORY MENU =========");
        for (i, label) in MenuChoice::LABELS.iter().enumerate() {
            println!("{} - {}", i + 1, label);
        }

        let raw: String = Input::new()
            .with_prompt("Enter your choice (1-7)")
            .allow_empty(true)
            .interact_text()?;
        let Ok(choice) = raw.parse::<MenuChoice>() else {
            println!("{}", "Invalid choice. Please enter a number from 1 to 7.".red());
            continue;
        };

        match choice {
            MenuChoice::ViewAll => println!("{}", store.list_all()),
            MenuChoice::Capture => handle_capture(&mut store)?,
            MenuChoice::Restock => handle_restock(&mut store)?,
            MenuChoice::Search => handle_search(&store)?,
            MenuChoice::ValuePerItem => show_values(&store),
            MenuChoice::HighestQuantity => show_on_sale(&store),
            MenuChoice::Exit => {
                println!("Exiting program. Goodbye!");
                break;
            }
        }
    }
    Ok(())
}

/// Prompt until `parse` accepts the input, printing each rejection.
fn prompt_until_valid<T>(
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<T> {
    loop {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

/// Collect and validate each field of a new shoe, then append it to the
/// store and the backing file.
fn handle_capture(store: &mut InventoryStore) -> Result<()> {
    let country = prompt_until_valid("Provide the product country", validate::name)?;
    let code = prompt_until_valid("Provide the product code (e.g. SKU12345)", validate::code)?;
    let product = prompt_until_valid("Provide the product name", validate::name)?;
    let cost = prompt_until_valid("Provide the product cost", validate::cost)?;
    let quantity = prompt_until_valid("Provide the product quantity", validate::quantity)?;

    // File first; the record only joins memory if the append succeeded.

    let record = ShoeRecord::new(country, code, product, cost, quantity);
    match store.append(record) {
        Ok(()) => println!("{}", "The shoe has been captured.".green()),
        Err(e) => println!("{}", format!("Capture failed: {}", e).red()),
    }
    Ok(())
}

/// Show the lowest-stock shoe and, if confirmed, add stock to it and
/// rewrite the backing file.
fn handle_restock(store: &mut InventoryStore) -> Result<()> {
    let Some(lowest) = store.lowest_stock() else {
        println!("{}", StoreError::Empty);
        return Ok(());
    };
    println!("\nLowest stock item:\n{}", lowest);

    // `Confirm` defaults to "no" so a stray Enter leaves stock untouched.
    let restock = Confirm::new()
        .with_prompt("Do you want to restock this item?")
        .default(false)
        .interact()?;
    if !restock {
        println!("No changes made to stock.");
        return Ok(());
    }

    // A bad amount aborts this restock instead of re-prompting.
    let raw: String = Input::new()
        .with_prompt("Enter the quantity to add")
        .allow_empty(true)
        .interact_text()?;
    let Ok(amount) = validate::quantity(&raw) else {
        println!("{}", "Invalid quantity entered.".red());
        return Ok(());
    };

    // The rewrite is quick; the spinner just shows that the file is busy.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Updating inventory file...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let outcome = store.restock_lowest(amount).map(|shoe| shoe.quantity);
    spinner.finish_and_clear();

    match outcome {
        Ok(quantity) => {
            println!("Updated quantity: {}", quantity);
            println!("{}", "Inventory file updated successfully.".green());
        }
        Err(e) => println!("{}", format!("Restock failed: {}", e).red()),
    }
    Ok(())
}

/// Look up a shoe by code (case-insensitive) and print its details.
fn handle_search(store: &InventoryStore) -> Result<()> {
    let code: String = Input::new()
        .with_prompt("Enter the shoe code you're searching for")
        .allow_empty(true)
        .interact_text()?;
    match store.find_by_code(&code) {
        Some(shoe) => println!("{}", shoe),
        None => println!("Shoe not found."),
    }
    Ok(())
}

/// Print cost times quantity for every shoe.
fn show_values(store: &InventoryStore) {
    if store.is_empty() {
        println!("No shoes in inventory.");
        return;
    }
    for line in store.value_report() {
        println!("{}", line);
    }
}

/// Announce the highest-quantity shoe as on sale. Display only.
fn show_on_sale(store: &InventoryStore) {
    match store.highest_stock() {
        Some(shoe) => {
            let banner = format!("*** {} is now on SALE! ***", shoe.product);
            println!("{}", banner.bold().yellow());
            println!("{}", shoe);
        }
        None => println!("No inventory loaded."),
    }
}

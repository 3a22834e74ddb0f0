use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::customers::CustomerDirectory;
use crate::error::Result;
use crate::export::export_csv;
use crate::form::{Draft, OrderForm};
use crate::order::{ItemField, Order};

/// Run the interactive order-entry session. State lives in memory for the
/// lifetime of the loop; only 'export' writes anything to disk.
pub fn handle_session(customers: Option<PathBuf>, output: PathBuf) -> Result<()> {
    let directory = match customers {
        Some(path) => CustomerDirectory::load(&path)?,
        None => CustomerDirectory::default(),
    };

    let interactive = atty::is(atty::Stream::Stdin);
    if interactive {
        println!("Order entry session. Type 'help' for commands, 'quit' to leave.");
    }

    let mut form = OrderForm::new();
    let stdin = io::stdin();

    loop {
        if interactive {
            print!("pedidos> ");
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (keyword, rest) = match trimmed.split_once(|c: char| c.is_whitespace()) {
            Some((keyword, rest)) => (keyword, rest.trim_start()),
            None => (trimmed, ""),
        };

        match keyword.to_lowercase().as_str() {
            "help" => print_help(),
            "order" => {
                form.set_order_number(rest);
                println!("Order number set to \"{}\"", rest);
            }
            "customer" => {
                form.set_customer(rest);
                match directory.label_for(rest) {
                    Some(label) => println!("Customer set to {} ({})", rest, label),
                    None => println!("Customer set to {}", rest),
                }
            }
            "customers" => print_customers(&directory),
            "add" => {
                let index = form.add_item();
                println!("Added row {}", index + 1);
            }
            "set" => handle_set(&mut form, rest),
            "show" => print_draft(form.draft()),
            "save" => {
                let total = form.saved().len() + 1;
                let order = form.save_order();
                println!(
                    "Saved order \"{}\" with {} item(s) ({} saved this session)",
                    order.order_number,
                    order.items.len(),
                    total
                );
            }
            "list" => print_saved(form.saved()),
            "export" => {
                let path = if rest.is_empty() {
                    output.clone()
                } else {
                    PathBuf::from(rest)
                };
                match export_csv(form.saved(), &path) {
                    Ok(stats) => println!(
                        "Exported {} order(s) ({} row(s)) to {}",
                        stats.orders,
                        stats.rows,
                        path.display()
                    ),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            "quit" | "exit" => break,
            _ => eprintln!("Unknown command: {} (type 'help')", keyword),
        }
    }

    Ok(())
}

/// Print the customer directory, plain or as JSON.
pub fn handle_customers(file: PathBuf, json: bool) -> Result<()> {
    let directory = CustomerDirectory::load(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(directory.customers())?);
    } else if directory.is_empty() {
        println!("No customers in {}", file.display());
    } else {
        for customer in directory.customers() {
            println!("{}  {}", customer.id, customer.label);
        }
    }

    Ok(())
}

/// `set <row> <field> <value>` - rows are 1-based, as printed by 'show',
/// and the value is the rest of the line (it may contain spaces or be
/// empty). Bad input is reported and the session continues.
fn handle_set(form: &mut OrderForm, rest: &str) {
    let mut parts = rest.splitn(3, ' ');
    let row = parts.next().unwrap_or("");
    let field = parts.next().unwrap_or("");
    let value = parts.next().unwrap_or("");

    let row = match row.parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: invalid row number: {}", row);
            return;
        }
    };
    let field = match field.parse::<ItemField>() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    match row.checked_sub(1) {
        Some(index) => {
            if let Err(e) = form.update_item(index, field, value) {
                eprintln!("Error: {}", e);
            }
        }
        None => eprintln!("Error: row numbers start at 1"),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  order <text>              set the order number");
    println!("  customer <id>             set the customer id");
    println!("  customers                 list the selectable customers");
    println!("  add                       append an empty item row");
    println!("  set <row> <field> <value> update a row field");
    println!("                            (reference, description, quantity, discount)");
    println!("  show                      print the draft order");
    println!("  save                      save the draft and start a new one");
    println!("  list                      list saved orders");
    println!("  export [path]             write saved orders as CSV");
    println!("  quit                      leave the session");
}

fn print_customers(directory: &CustomerDirectory) {
    if directory.is_empty() {
        println!("No customers configured.");
        return;
    }
    for customer in directory.customers() {
        println!("  {}  {}", customer.id, customer.label);
    }
}

fn print_draft(draft: &Draft) {
    println!("Order number: {}", draft.order_number);
    println!("Customer:     {}", draft.customer);
    for (i, item) in draft.items.iter().enumerate() {
        println!(
            "  {:>2}. {} | {} | qty {} | discount {}",
            i + 1,
            item.reference,
            item.description,
            item.quantity,
            item.discount
        );
    }
}

fn print_saved(saved: &[Order]) {
    if saved.is_empty() {
        println!("No saved orders.");
        return;
    }
    for (i, order) in saved.iter().enumerate() {
        println!(
            "  {:>2}. \"{}\" ({}) - {} item(s), saved {}",
            i + 1,
            order.order_number,
            order.customer,
            order.items.len(),
            order.saved_at.format("%Y-%m-%d %H:%M")
        );
    }
}

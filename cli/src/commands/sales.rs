use std::io::{self, BufRead};
use std::path::Path;

use anyhow::Context;
use colored::*;

use crate::terminal::{colors, format, print, prompt};
use crate::tprint;
use till_common::{config::Config, success, warn};
use till_core::cart::{LineItem, TAX_RATE};
use till_core::catalog::{InMemoryCatalog, ProductCatalog};
use till_core::session::{PaymentMethod, SalesSession, SessionAction};

const HELP: &[(&str, &str)] = &[
    ("add <product>", "add one unit from the catalog"),
    ("qty <n> <product>", "set the quantity"),
    ("inc <product>", "one more unit"),
    ("dec <product>", "one less unit"),
    ("rm <product>", "remove the line"),
    ("clear", "empty the cart"),
    ("pay <method>", "cash, card or ewallet"),
    ("show", "print the cart"),
    ("products", "list the catalog"),
    ("quit", "finish the sale"),
];

pub fn sales(catalog_path: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    success!("{} products ready for sale", catalog.products().len());

    let mut session = SalesSession::new(Box::new(catalog));
    print_help(cfg);

    run(io::stdin().lock(), &mut session, cfg)?;

    finish(&session, cfg);
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads lines from `input` until `quit` or end of input.
fn run(input: impl BufRead, session: &mut SalesSession, cfg: &Config) -> anyhow::Result<()> {
    prompt::inline("> ");
    for line in input.lines() {
        let line = line.context("failed to read from stdin")?;
        if handle_line(&line, session, cfg) == Flow::Quit {
            break;
        }
        prompt::inline("> ");
    }
    Ok(())
}

/// Handles one typed line. Rejected input is reported and the sale goes on.
fn handle_line(line: &str, session: &mut SalesSession, cfg: &Config) -> Flow {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => {}
        "quit" | "exit" | "q" => return Flow::Quit,
        "help" | "?" => print_help(cfg),
        "show" | "cart" => print_cart(session, cfg),
        "products" | "ls" => print_catalog(session, cfg),
        _ => match line.parse::<SessionAction>() {
            Ok(action) => match session.apply(action) {
                Ok(_) => print_cart(session, cfg),
                Err(e) => warn!("{e}"),
            },
            Err(e) => warn!("{e}; type 'help' for the command list"),
        },
    }
    Flow::Continue
}

pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<InMemoryCatalog> {
    match path {
        Some(path) => InMemoryCatalog::from_path(path)
            .with_context(|| format!("could not load catalog from {}", path.display())),
        None => Ok(InMemoryCatalog::demo()),
    }
}

fn print_help(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print::header("commands", cfg.quiet);
    let width = HELP.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);
    for (cmd, text) in HELP {
        print::print_status(format!(
            "{}{}  {}",
            cmd.color(colors::SECONDARY),
            " ".repeat(width - cmd.len()),
            text
        ));
    }
}

fn print_catalog(session: &SalesSession, cfg: &Config) {
    print::header("catalog", cfg.quiet);
    let products = session.catalog().products();
    let previous = print::GLOBAL_KEY_WIDTH.get();
    let longest_name = products.iter().map(|p| p.name.chars().count()).max().unwrap_or(0);

    print::GLOBAL_KEY_WIDTH.set(longest_name.max(previous));
    for product in products {
        print::aligned_line(&product.name, format::amount(product.unit_price, cfg));
    }
    print::GLOBAL_KEY_WIDTH.set(previous);
}

fn print_cart(session: &SalesSession, cfg: &Config) {
    let cart = session.cart();
    print::header("cart", cfg.quiet);

    if cart.is_empty() {
        print::print_status("Cart is empty");
    } else if cfg.quiet < 2 {
        print_items(cart.items(), cfg);
    }

    print_summary(session, cfg);
}

fn print_items(items: &[LineItem], cfg: &Config) {
    for (idx, item) in items.iter().enumerate() {
        print::tree_head(idx, item.product_name());
        print::as_tree_one_level(format::line_item_to_details(item, cfg));
    }
}

fn print_summary(session: &SalesSession, cfg: &Config) {
    let totals = session.totals();
    let tax_label = format!("Tax ({}%)", (TAX_RATE * rust_decimal::Decimal::ONE_HUNDRED).normalize());

    if cfg.quiet > 0 {
        tprint!();
    }
    print::aligned_line("Subtotal", format::amount(totals.subtotal, cfg));
    print::aligned_line(&tax_label, format::amount(totals.tax, cfg));
    print::aligned_line(
        "Total",
        format::amount(totals.total, cfg).color(colors::GRAND_TOTAL).bold(),
    );
    print::aligned_line("Payment", payment_choices(session.payment()));
}

fn payment_choices(active: PaymentMethod) -> ColoredString {
    PaymentMethod::ALL
        .iter()
        .map(|method| {
            if *method == active {
                format!("({method})").color(colors::PRIMARY).bold().to_string()
            } else {
                method.to_string().color(colors::SEPARATOR).to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
        .normal()
}

fn finish(session: &SalesSession, cfg: &Config) {
    let cart = session.cart();
    if cart.is_empty() {
        print::header("no sale", cfg.quiet);
        print::no_results("Nothing was sold");
        print::end_of_program();
        return;
    }

    let units: u64 = cart.items().iter().map(|item| u64::from(item.quantity())).sum();
    let total = format::amount(session.totals().total, cfg).bold().yellow();
    let output = format!(
        "Sale complete: {} across {} lines, {} via {}",
        format!("{units} units").bold().green(),
        cart.len(),
        total,
        session.payment()
    )
    .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            tprint!();
            success!("{}", output)
        }
    }
}

use std::path::Path;

use colored::*;

use crate::commands::sales::load_catalog;
use crate::terminal::{colors, format, print};
use crate::tprint;
use till_common::{config::Config, success};
use till_core::catalog::{CATEGORY_COLUMN, ProductCatalog};

pub fn products(
    catalog_path: Option<&Path>,
    search: Option<&str>,
    category: Option<&str>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let table = catalog.to_table(&cfg.currency_symbol);
    let visible = table.query(search, category.map(|c| (CATEGORY_COLUMN, c)))?;

    if visible.is_empty() {
        print::header("no matching products", cfg.quiet);
        print::no_results("No products match");
        print::end_of_program();
        return Ok(());
    }

    print::header("products", cfg.quiet);
    if cfg.quiet < 2 {
        let widths = format::column_widths(table.columns(), &visible);
        let header = format::table_line(table.columns(), &widths);
        print::print(&format!("{}", header.color(colors::PRIMARY).bold()));
        for row in &visible {
            print::print(&format::table_line(row, &widths));
        }
    }

    let summary = format!(
        "{} of {} products shown",
        visible.len().to_string().green().bold(),
        table.rows().len()
    );
    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&summary);
        }
        _ => {
            tprint!();
            success!("{}", summary)
        }
    }
    Ok(())
}

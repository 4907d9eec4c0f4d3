use chrono::{DateTime, Local};
use colored::*;
use rust_decimal::Decimal;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use till_common::config::Config;
use till_common::money;
use till_core::cart::LineItem;

pub type Detail = (String, ColoredString);

/// `Monday, October 19, 2026`
pub fn long_date(now: DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

pub fn amount(value: Decimal, cfg: &Config) -> ColoredString {
    money::format_amount(value, &cfg.currency_symbol).color(colors::AMOUNT)
}

pub fn line_item_to_details(item: &LineItem, cfg: &Config) -> Vec<Detail> {
    vec![
        ("Qty".to_string(), item.quantity().to_string().color(colors::ACCENT)),
        ("Price".to_string(), amount(item.unit_price(), cfg)),
        ("Total".to_string(), amount(item.line_total(), cfg).bold()),
    ]
}

/// Display width of every column, header included.
pub fn column_widths(columns: &[String], rows: &[&[String]]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.width())
                .chain(std::iter::once(column.width()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

pub fn table_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{}{}", cell, " ".repeat(width.saturating_sub(cell.width()))))
        .collect::<Vec<String>>()
        .join(&format!(" {} ", "│".color(colors::SEPARATOR)))
}

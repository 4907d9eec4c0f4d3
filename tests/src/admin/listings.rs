#![cfg(test)]
use till_core::catalog::{CATEGORY_COLUMN, InMemoryCatalog, ProductCatalog};
use till_core::table::TableError;
use till_core::users::{AssumeYes, Confirm, DeleteOutcome, UserDirectory};

struct Decline;

impl Confirm for Decline {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

#[test]
fn product_search_spans_all_columns() {
    let table = InMemoryCatalog::demo().to_table("₱");

    let found = table.search("mouse");
    let by_name: Vec<&str> = found.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(by_name, ["Wireless Mouse"]);

    // matches the formatted price column
    assert_eq!(table.search("₱1,250.00").len(), 1);
    assert_eq!(table.search("").len(), table.rows().len());
}

#[test]
fn product_category_filter() {
    let table = InMemoryCatalog::demo().to_table("₱");

    let printers = table.filter(CATEGORY_COLUMN, "Printers").unwrap();
    assert_eq!(printers.len(), 2);
    assert!(printers.iter().all(|row| row[CATEGORY_COLUMN] == "Printers"));

    assert!(table.filter(CATEGORY_COLUMN, "printers").unwrap().is_empty());
    assert!(matches!(
        table.filter(9, "Printers"),
        Err(TableError::ColumnOutOfRange { .. })
    ));
}

#[test]
fn user_role_filter_and_search() {
    let table = UserDirectory::demo().to_table();
    let role = table.column_index("Role").unwrap();

    let cashiers = table.query(None, Some((role, "Cashier"))).unwrap();
    assert_eq!(cashiers.len(), 2);

    let inactive_cashiers = table.query(Some("inactive"), Some((role, "Cashier"))).unwrap();
    assert_eq!(inactive_cashiers.len(), 1);
    assert_eq!(inactive_cashiers[0][0], "Ana Reyes");
}

#[test]
fn user_delete_requires_confirmation() {
    let mut directory = UserDirectory::demo();
    let total = directory.total_users();

    let outcome = directory.delete("paolo.garcia@example.com", &Decline).unwrap();
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(directory.total_users(), total);

    let outcome = directory.delete("paolo.garcia@example.com", &AssumeYes).unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(directory.total_users(), total - 1);
    assert!(directory.to_table().search("paolo").is_empty());
}

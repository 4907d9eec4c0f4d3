#![cfg(test)]
use rust_decimal::Decimal;
use till_common::money::format_amount;
use till_core::cart::CartError;
use till_core::catalog::{InMemoryCatalog, ProductCatalog};
use till_core::session::{PaymentMethod, SalesSession, SessionAction, SessionError};

/// Feeds REPL lines into a session, stopping at the first failure.
fn run(session: &mut SalesSession, script: &[&str]) -> Result<(), SessionError> {
    for line in script {
        let action: SessionAction = line.parse().expect("script line should parse");
        session.apply(action)?;
    }
    Ok(())
}

#[test]
fn demo_counter_sale() {
    let mut session = SalesSession::new(Box::new(InMemoryCatalog::demo()));

    run(
        &mut session,
        &[
            "add Wireless Mouse",
            "add USB-C Cable",
            "add Wireless Mouse",
            "qty 4 USB-C Cable",
            "dec Wireless Mouse",
            "pay card",
        ],
    )
    .unwrap();

    let cart = session.cart();
    assert_eq!(cart.item("Wireless Mouse").unwrap().quantity(), 1);
    assert_eq!(cart.item("USB-C Cable").unwrap().quantity(), 4);
    assert_eq!(session.payment(), PaymentMethod::Card);

    // 1250.00 + 4 * 349.75 = 2649.00
    let totals = session.totals();
    assert_eq!(totals.subtotal, Decimal::new(264900, 2));
    assert_eq!(format_amount(totals.tax, "₱"), "₱317.88");
    assert_eq!(format_amount(totals.total, "₱"), "₱2,966.88");
}

#[test]
fn catalog_file_prices_flow_into_cart() {
    let json = r#"[
        { "name": "Widget", "category": "Parts", "stock": 5, "price": "₱100.00" },
        { "name": "Gadget", "category": "Parts", "stock": 5, "price": 50 }
    ]"#;
    let catalog = InMemoryCatalog::from_json_str(json).unwrap();
    assert_eq!(catalog.products().len(), 2);

    let mut session = SalesSession::new(Box::new(catalog));
    run(&mut session, &["add Widget", "add Gadget", "rm Gadget"]).unwrap();

    assert_eq!(format_amount(session.totals().total, "₱"), "₱112.00");
}

#[test]
fn failed_action_leaves_session_untouched() {
    let mut session = SalesSession::new(Box::new(InMemoryCatalog::demo()));
    run(&mut session, &["add Laser Printer"]).unwrap();
    let before = session.totals();

    let err = run(&mut session, &["inc Toner Cartridge"]).unwrap_err();
    assert_eq!(
        err,
        SessionError::Cart(CartError::NotFound {
            product_name: "Toner Cartridge".to_string()
        })
    );

    let err = run(&mut session, &["add Fax Machine"]).unwrap_err();
    assert_eq!(err, SessionError::UnknownProduct("Fax Machine".to_string()));

    assert_eq!(session.totals(), before);
    assert_eq!(session.cart().len(), 1);
}

#[test]
fn clear_then_reuse() {
    let mut session = SalesSession::new(Box::new(InMemoryCatalog::demo()));
    run(&mut session, &["add Wi-Fi Router", "clear", "add Toner Cartridge"]).unwrap();

    let names: Vec<&str> = session
        .cart()
        .items()
        .iter()
        .map(|item| item.product_name())
        .collect();
    assert_eq!(names, ["Toner Cartridge"]);
}

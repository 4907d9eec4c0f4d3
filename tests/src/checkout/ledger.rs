#![cfg(test)]
use proptest::prelude::*;
use rust_decimal::Decimal;
use till_common::money::format_amount;
use till_core::cart::{Cart, LineItem, TAX_RATE, Totals};
use till_core::command::CartCommand;

fn pesos(units: i64) -> Decimal {
    Decimal::new(units * 100, 2)
}

fn add(name: &str, price: Decimal) -> CartCommand {
    CartCommand::AddItem {
        product_name: name.to_string(),
        unit_price: price,
    }
}

fn displayed(totals: &Totals) -> [String; 3] {
    [
        format_amount(totals.subtotal, "₱"),
        format_amount(totals.tax, "₱"),
        format_amount(totals.total, "₱"),
    ]
}

/*************************************************************
                     Checkout scenarios
**************************************************************/

#[test]
fn same_widget_twice_becomes_one_line() {
    let mut cart = Cart::new();
    cart.dispatch(add("Widget", pesos(100))).unwrap();
    let totals = cart.dispatch(add("Widget", pesos(100))).unwrap();

    assert_eq!(cart.len(), 1);
    let widget = &cart.items()[0];
    assert_eq!(widget.quantity(), 2);
    assert_eq!(widget.line_total(), pesos(200));
    assert_eq!(displayed(&totals), ["₱200.00", "₱24.00", "₱224.00"]);
}

#[test]
fn gadget_decrement_at_one_stays_at_one() {
    let mut cart = Cart::new();
    cart.dispatch(add("Gadget", pesos(50))).unwrap();
    cart.dispatch(CartCommand::Decrement {
        product_name: "Gadget".to_string(),
    })
    .unwrap();

    let gadget = cart.item("Gadget").unwrap();
    assert_eq!(gadget.quantity(), 1);
    assert_eq!(gadget.line_total(), pesos(50));
}

#[test]
fn removing_gadget_leaves_widget() {
    let mut cart = Cart::new();
    cart.dispatch(add("Widget", pesos(100))).unwrap();
    cart.dispatch(add("Gadget", pesos(50))).unwrap();
    let totals = cart
        .dispatch(CartCommand::Remove {
            product_name: "Gadget".to_string(),
        })
        .unwrap();

    let names: Vec<&str> = cart.items().iter().map(LineItem::product_name).collect();
    assert_eq!(names, ["Widget"]);
    assert_eq!(displayed(&totals), ["₱100.00", "₱12.00", "₱112.00"]);
}

#[test]
fn many_small_lines_round_once_at_display() {
    let mut cart = Cart::new();
    // 0.125 * 0.12 = 0.015 tax per line; rounding per line would show 0.02 each
    for idx in 0..8 {
        cart.add_item(&format!("item-{idx}"), Decimal::new(125, 3));
    }
    let totals = cart.totals();

    assert_eq!(totals.subtotal, Decimal::new(1, 0));
    assert_eq!(totals.tax, Decimal::new(12, 2));
    assert_eq!(displayed(&totals), ["₱1.00", "₱0.12", "₱1.12"]);
}

#[test]
fn large_order_shows_thousands_separators() {
    let mut cart = Cart::new();
    cart.add_item("Laptop Pro 14", Decimal::new(5499900, 2));
    cart.set_quantity("Laptop Pro 14", 3).unwrap();

    assert_eq!(
        displayed(&cart.totals()),
        ["₱164,997.00", "₱19,799.64", "₱184,796.64"]
    );
}

/*************************************************************
                     Ledger properties
**************************************************************/

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Widget", "Gadget", "Gizmo", "Sprocket", "Flange"])
        .prop_map(str::to_string)
}

fn command() -> impl Strategy<Value = CartCommand> {
    prop_oneof![
        4 => (name(), 0i64..1_000_000).prop_map(|(product_name, cents)| CartCommand::AddItem {
            product_name,
            unit_price: Decimal::new(cents, 2),
        }),
        2 => (name(), -10i64..100).prop_map(|(product_name, quantity)| CartCommand::SetQuantity {
            product_name,
            quantity,
        }),
        2 => name().prop_map(|product_name| CartCommand::Increment { product_name }),
        3 => name().prop_map(|product_name| CartCommand::Decrement { product_name }),
        1 => name().prop_map(|product_name| CartCommand::Remove { product_name }),
        1 => Just(CartCommand::Clear),
    ]
}

proptest! {
    #[test]
    fn adds_never_duplicate_a_product(names in prop::collection::vec(name(), 0..40)) {
        let mut cart = Cart::new();
        for product in &names {
            cart.add_item(product, pesos(1));
        }

        let mut distinct = names.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(cart.len(), distinct.len());

        let units: u32 = cart.items().iter().map(LineItem::quantity).sum();
        prop_assert_eq!(units as usize, names.len());
    }

    #[test]
    fn totals_stay_consistent(commands in prop::collection::vec(command(), 0..80)) {
        let mut cart = Cart::new();
        for command in commands {
            let before = cart.items().to_vec();
            match cart.dispatch(command) {
                Ok(totals) => {
                    let subtotal: Decimal = cart.items().iter().map(LineItem::line_total).sum();
                    prop_assert_eq!(totals.subtotal, subtotal);
                    prop_assert_eq!(totals.tax, subtotal * TAX_RATE);
                    prop_assert_eq!(totals.total, totals.subtotal + totals.tax);
                    prop_assert_eq!(cart.totals(), cart.totals());
                }
                Err(_) => prop_assert_eq!(cart.items(), before.as_slice()),
            }
            prop_assert!(cart.items().iter().all(|item| item.quantity() >= 1));
        }
    }

    #[test]
    fn decrements_never_go_below_one(start in 1i64..20, decrements in 0usize..40) {
        let mut cart = Cart::new();
        cart.add_item("Widget", pesos(10));
        cart.set_quantity("Widget", start).unwrap();

        for _ in 0..decrements {
            cart.decrement_quantity("Widget").unwrap();
        }

        let expected = (start - decrements as i64).max(1) as u32;
        prop_assert_eq!(cart.item("Widget").unwrap().quantity(), expected);
    }

    #[test]
    fn clear_always_resets(commands in prop::collection::vec(command(), 0..40)) {
        let mut cart = Cart::new();
        for command in commands {
            let _ = cart.dispatch(command);
        }
        let totals = cart.dispatch(CartCommand::Clear).unwrap();

        prop_assert!(cart.is_empty());
        prop_assert_eq!(totals, Totals::default());
    }
}

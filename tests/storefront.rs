//! End-to-end storefront flow tests over a shared in-memory store.

use std::{collections::BTreeMap, sync::Arc};

use rust_decimal::Decimal;
use testresult::TestResult;

use customcrafts::{admin, prelude::*};

fn tshirt() -> Product {
    Product {
        id: "tshirt".to_owned(),
        name: "Custom T-Shirt".to_owned(),
        price: Decimal::from(499),
        image: "tshirt.jpg".to_owned(),
        colors: vec!["Black".to_owned(), "White".to_owned()],
        sizes: vec!["M".to_owned(), "L".to_owned()],
    }
}

fn visitor(name: &str) -> NewUser {
    NewUser {
        name: name.to_owned(),
        mobile: "+911234567890".to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        country: "India".to_owned(),
        city: "Narasaraopet".to_owned(),
        pincode: "522601".to_owned(),
    }
}

fn customization(color: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("color".to_owned(), color.to_owned())])
}

#[test]
fn same_product_different_customization_never_merges() -> TestResult {
    let store = MemoryStore::new();
    let mut cart = CartStore::open(store, Arc::new(NoopSink))?;

    cart.add_item(&tshirt(), customization("Black"))?;
    cart.add_item(&tshirt(), customization("White"))?;

    assert_eq!(cart.len(), 2, "no merge: two distinct lines");
    assert_eq!(cart.total(), Decimal::from(998));
    assert_eq!(cart.item_count(), 2);
    Ok(())
}

#[test]
fn quantity_zero_matches_explicit_removal() -> TestResult {
    let backing = MemoryStore::new();
    let sink: SharedSink = Arc::new(NoopSink);

    // Same mutations through update_quantity(.., 0) and remove_item must
    // observe the same post-state.
    let mut removed = CartStore::open(MemoryStore::new(), Arc::clone(&sink))?;
    let id = removed.add_item(&tshirt(), customization("Black"))?;
    removed.remove_item(&id)?;

    let mut zeroed = CartStore::open(backing, sink)?;
    let id = zeroed.add_item(&tshirt(), customization("Black"))?;
    zeroed.update_quantity(&id, 0)?;

    assert_eq!(removed.items(), zeroed.items());
    assert!(zeroed.is_empty(), "quantity zero must remove the line");
    Ok(())
}

#[test]
fn unrelated_removal_leaves_edited_quantity_alone() -> TestResult {
    let mut cart = CartStore::open(MemoryStore::new(), Arc::new(NoopSink))?;
    let first = cart.add_item(&tshirt(), customization("Black"))?;
    let second = cart.add_item(&tshirt(), customization("White"))?;

    cart.update_quantity(&first, 3)?;
    cart.remove_item(&second)?;

    assert_eq!(
        cart.items().first().map(|item| item.quantity),
        Some(3),
        "editing and removing different lines must not interact"
    );
    Ok(())
}

#[test]
fn item_count_tracks_adds_and_reductions() -> TestResult {
    let mut cart = CartStore::open(MemoryStore::new(), Arc::new(NoopSink))?;

    let a = cart.add_item(&tshirt(), BTreeMap::new())?;
    let b = cart.add_item(&tshirt(), BTreeMap::new())?;
    cart.add_item(&tshirt(), BTreeMap::new())?;
    assert_eq!(cart.item_count(), 3, "three adds, quantity one each");

    cart.update_quantity(&a, 5)?;
    assert_eq!(cart.item_count(), 7);

    cart.remove_item(&b)?;
    assert_eq!(cart.item_count(), 6);
    Ok(())
}

#[test]
fn second_registration_replaces_session_keeps_both_log_entries() -> TestResult {
    let mut auth = AuthStore::open(MemoryStore::new(), Arc::new(NoopSink))?;
    auth.register(visitor("Asha"))?;
    auth.register(visitor("Bala"))?;

    assert_eq!(auth.current_user().map(|u| u.name.as_str()), Some("Bala"));

    let names: Vec<_> = auth.user_log()?.into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["Asha", "Bala"]);
    Ok(())
}

#[test]
fn full_checkout_flow_logs_order_and_clears_cart() -> TestResult {
    let store = MemoryStore::new();
    let sink: SharedSink = Arc::new(NoopSink);

    let mut cart = CartStore::open(store.clone(), Arc::clone(&sink))?;
    let mut auth = AuthStore::open(store.clone(), Arc::clone(&sink))?;
    let mut orders = OrderLog::new(store, Arc::clone(&sink));

    auth.register(visitor("Asha"))?;
    cart.add_item(&tshirt(), customization("Black"))?;
    cart.add_item(&tshirt(), customization("White"))?;

    let record = place_order(&mut cart, &auth, &mut orders, &NoopSink)?;

    assert_eq!(record.price, OrderPrice::Amount(Decimal::from(998)));
    assert_eq!(record.payment_status, PaymentStatus::Pending);
    assert!(cart.is_empty(), "cart clears after checkout");
    assert_eq!(orders.len()?, 1);

    // The logged snapshot keeps the lines the cart no longer has.
    let logged = orders.list_all()?;
    assert_eq!(
        logged.first().and_then(|o| o.items.as_ref()).map(Vec::len),
        Some(2)
    );
    Ok(())
}

#[test]
fn clear_order_log_empties_it_regardless_of_contents() -> TestResult {
    let store = MemoryStore::new();
    let sink: SharedSink = Arc::new(NoopSink);
    let mut orders = OrderLog::new(store.clone(), Arc::clone(&sink));

    let request = BookingRequest {
        service: "Custom Painting".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "+911234567890".to_owned(),
        date: available_dates(jiff::Zoned::now().date()).first().copied(),
        time: AVAILABLE_TIMES.first().map(|t| (*t).to_owned()),
        ..BookingRequest::default()
    };
    book_service(&request, &mut orders, &NoopSink)?;
    book_service(&request, &mut orders, &NoopSink)?;

    orders.clear()?;

    assert!(orders.list_all()?.is_empty(), "log empty after clear");

    // And the whole state is reusable afterwards.
    book_service(&request, &mut orders, &NoopSink)?;
    assert_eq!(orders.len()?, 1);
    Ok(())
}

#[test]
fn store_notifications_follow_the_operation_contract() -> TestResult {
    let sink = Arc::new(RecordingSink::new());
    let mut cart = CartStore::open(MemoryStore::new(), Arc::clone(&sink) as SharedSink)?;

    let id = cart.add_item(&tshirt(), BTreeMap::new())?;
    cart.update_quantity(&id, 4)?;
    cart.clear()?;

    // Quantity edits are silent; add and clear are not.
    assert_eq!(sink.titles(), vec!["Added to cart!", "Cart cleared"]);
    Ok(())
}

#[test]
fn csv_export_covers_order_records() -> TestResult {
    let store = MemoryStore::new();
    let sink: SharedSink = Arc::new(NoopSink);

    let mut cart = CartStore::open(store.clone(), Arc::clone(&sink))?;
    let mut auth = AuthStore::open(store.clone(), Arc::clone(&sink))?;
    let mut orders = OrderLog::new(store, Arc::clone(&sink));

    auth.register(visitor("Asha"))?;
    cart.add_item(&tshirt(), customization("Black"))?;
    place_order(&mut cart, &auth, &mut orders, &NoopSink)?;

    let csv = to_csv(&orders.list_all()?)?;
    let mut lines = csv.lines();
    let header = lines.next().unwrap_or_default();

    assert!(header.contains("customerName"), "missing customer column");
    assert!(header.contains("paymentStatus"), "missing status column");
    assert_eq!(lines.count(), 1, "one data row per order");
    Ok(())
}

#[test]
fn admin_tables_render_current_logs() -> TestResult {
    let store = MemoryStore::new();
    let sink: SharedSink = Arc::new(NoopSink);

    let mut auth = AuthStore::open(store.clone(), Arc::clone(&sink))?;
    auth.register(visitor("Asha"))?;

    let users = admin::render_user_log(&auth.user_log()?);
    assert!(users.contains("asha@example.com"), "user row missing");

    let orders = OrderLog::new(store, sink);
    assert_eq!(admin::render_order_log(&orders.list_all()?), "No orders yet.");
    Ok(())
}

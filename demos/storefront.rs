//! Storefront Demo
//!
//! Walks the full storefront flow against a file-backed store: register a
//! visitor, add customized products to the cart, place the order, book a
//! service, then render the admin tables and a CSV export.
//!
//! Use `-d` to choose the state directory
//! Use `-c` to choose the catalog fixture
//! Use `--reset` to wipe persisted state first

use std::{collections::BTreeMap, fs, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use jiff::Zoned;

use customcrafts::{
    admin,
    auth::{AuthStore, NewUser},
    booking::{AVAILABLE_TIMES, BookingRequest, available_dates, book_service, booking_summary},
    cart::CartStore,
    checkout::{cart_summary, place_order},
    export::to_csv,
    fixtures::load_catalog,
    notify::{SharedSink, TracingSink},
    orders::OrderLog,
    storage::FileStore,
    utils::DemoArgs,
};

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = DemoArgs::parse();

    if args.reset && args.data_dir.exists() {
        fs::remove_dir_all(&args.data_dir).context("failed to reset state directory")?;
    }

    let store = FileStore::open(&args.data_dir)?;
    let sink: SharedSink = Arc::new(TracingSink);

    let mut cart = CartStore::open(store.clone(), Arc::clone(&sink))?;
    let mut auth = AuthStore::open(store.clone(), Arc::clone(&sink))?;
    let mut orders = OrderLog::new(store.clone(), Arc::clone(&sink));

    let catalog = load_catalog(&args.catalog).context("failed to load catalog fixture")?;

    auth.register(NewUser {
        name: "Asha".to_owned(),
        mobile: "+911234567890".to_owned(),
        email: "asha@example.com".to_owned(),
        country: "India".to_owned(),
        city: "Narasaraopet".to_owned(),
        pincode: "522601".to_owned(),
    })?;

    for product in &catalog.products {
        let customization = BTreeMap::from([
            (
                "color".to_owned(),
                product.colors.first().cloned().unwrap_or_default(),
            ),
            (
                "size".to_owned(),
                product.sizes.first().cloned().unwrap_or_default(),
            ),
        ]);
        cart.add_item(product, customization)?;
    }

    println!("--- WhatsApp order message ---");
    println!("{}\n", cart_summary(cart.items(), cart.total()));

    place_order(&mut cart, &auth, &mut orders, sink.as_ref())?;

    let today = Zoned::now().date();
    let open = available_dates(today);
    let request = BookingRequest {
        service: catalog
            .services
            .first()
            .map(|s| s.title.clone())
            .unwrap_or_default(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "+911234567890".to_owned(),
        vehicle_info: "2019 Maruti Swift".to_owned(),
        notes: "Matte black, keep the chrome.".to_owned(),
        uploaded_image: Some("swift-front.jpg".to_owned()),
        date: open.first().copied(),
        time: AVAILABLE_TIMES.first().map(|t| (*t).to_owned()),
    };
    let booking = book_service(&request, &mut orders, sink.as_ref())?;

    println!("--- WhatsApp booking message ---");
    println!("{}\n", booking_summary(&request, &booking));

    println!("--- Users ---");
    println!("{}\n", admin::render_user_log(&auth.user_log()?));

    println!("--- Orders ---");
    println!("{}\n", admin::render_order_log(&orders.list_all()?));

    println!("--- orders_log.csv ---");
    println!("{}", to_csv(&orders.list_all()?)?);

    Ok(())
}

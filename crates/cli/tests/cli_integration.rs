//! Runs every command against the bundled sample dataset.

use std::path::{Path, PathBuf};

use catalog::ProductSearch;
use cli::commands::{orders, products, quote, users};
use cli::{CliError, Dataset};
use domain::{Adjustments, Currency, Money, ProductId, UserId};
use rust_decimal::Decimal;
use serde_json::Value;

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/shop.json")
}

fn sample() -> Dataset {
    Dataset::load(&sample_path()).unwrap()
}

#[test]
fn sample_dataset_loads() {
    let dataset = sample();
    assert_eq!(dataset.users.len(), 4);
    assert_eq!(dataset.products.len(), 6);
    assert_eq!(dataset.orders.len(), 4);
    assert_eq!(dataset.users[0].role, "admin");
}

#[test]
fn active_users_skip_inactive() {
    assert_eq!(users::active_users(&sample()), "alice\ncarol\ndave");
}

#[test]
fn categories_in_first_seen_order() {
    assert_eq!(
        products::categories(&sample()),
        "kitchen: Espresso Machine, Ceramic Mug\n\
         office: Standing Desk, Desk Lamp\n\
         stationery: Notebook, Fountain Pen"
    );
}

#[test]
fn top_three_by_price() {
    let out = products::top(&sample(), 3, &Currency::Usd);
    let names: Vec<&str> = out
        .lines()
        .map(|line| line.split('\t').nth(1).unwrap())
        .collect();
    assert_eq!(names, vec!["Standing Desk", "Espresso Machine", "Fountain Pen"]);
    assert!(out.starts_with("103\tStanding Desk\t$1,249.99\toffice"));
}

#[test]
fn search_matches_tags_and_price_range() {
    let criteria = ProductSearch::new("COFFEE").max_price(Money::from_cents(10000));
    assert_eq!(
        products::search(&sample(), &criteria, &Currency::Usd),
        "102\tCeramic Mug\t$12.50\tkitchen"
    );
}

#[test]
fn stats_for_repeat_customer() {
    let out = orders::stats(&sample(), UserId::new(1)).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["total_orders"], 2);
    assert_eq!(value["total_spent"], "374.00");
    assert_eq!(value["first_order"], "2024-02-01T10:00:00");
    assert_eq!(value["last_order"], "2024-03-11T08:05:00");
}

#[test]
fn quote_in_pounds() {
    let items = [quote::parse_item("102:4").unwrap(), (ProductId::new(105), 2)];
    let adjustments = Adjustments::none().tax(Decimal::from(20));
    let out = quote::quote(&sample(), &items, adjustments, &Currency::Gbp).unwrap();

    // (50.00 + 8.50) * 1.2 = 70.20
    assert!(out.ends_with("subtotal: £58.50\ntotal: £70.20"));
}

#[test]
fn encode_then_decode_user() {
    let dataset = sample();
    let encoded = users::encode(&dataset, UserId::new(4)).unwrap();
    assert_eq!(users::decode(&encoded).unwrap(), encoded);

    let value: Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["created_at"], "2024-03-05T18:42:10.500+00:00");
}

#[test]
fn missing_dataset_is_an_io_error() {
    let err = Dataset::load(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().starts_with("Failed to read does/not/exist.json"));
}

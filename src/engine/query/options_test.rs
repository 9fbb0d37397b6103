use crate::engine::query::options::resolve;
use crate::test_helpers::Factory;
use serde_json::json;

#[test]
fn deduplicates_and_sorts_each_dimension() {
    let records = vec![
        Factory::sale()
            .with("customer_region", "South")
            .with("payment_method", "UPI")
            .create(),
        Factory::sale()
            .with("customer_region", "East")
            .with("payment_method", "Card")
            .create(),
        Factory::sale()
            .with("customer_region", "South")
            .with("payment_method", "UPI")
            .create(),
    ];

    let options = resolve(&records);
    assert_eq!(options.regions, ["East", "South"]);
    assert_eq!(options.payment_methods, ["Card", "UPI"]);
}

#[test]
fn tags_are_flattened_to_atomic_values() {
    let records = vec![
        Factory::sale().with("tags", json!(["festival", "clearance"])).create(),
        Factory::sale().with("tags", json!(["clearance", "bulk"])).create(),
    ];

    let options = resolve(&records);
    assert_eq!(options.tags, ["bulk", "clearance", "festival"]);
}

#[test]
fn empty_values_are_skipped() {
    let records = vec![
        Factory::sale().with("gender", "").with("customer_region", "").create(),
        Factory::sale().with("gender", "Female").create(),
    ];

    let options = resolve(&records);
    assert_eq!(options.genders, ["Female"]);
    assert_eq!(options.regions, ["South"]);
}

#[test]
fn empty_dataset_yields_five_empty_lists() {
    let options = resolve(&[]);
    assert!(options.regions.is_empty());
    assert!(options.genders.is_empty());
    assert!(options.categories.is_empty());
    assert!(options.tags.is_empty());
    assert!(options.payment_methods.is_empty());
}

#[test]
fn options_serialize_with_contract_names() {
    let json = serde_json::to_value(resolve(&[])).unwrap();
    assert!(json.get("paymentMethods").is_some());
    assert!(json.get("regions").is_some());
}

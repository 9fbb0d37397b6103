use crate::engine::record::Field;
use crate::engine::record::fields::FIELDS;

#[test]
fn label_and_name_are_bidirectional_for_every_field() {
    for (field, name, label) in FIELDS {
        assert_eq!(field.name(), *name);
        assert_eq!(field.label(), *label);
        assert_eq!(Field::from_name(name), Some(*field));
        assert_eq!(Field::from_label(label), Some(*field));
    }
}

#[test]
fn maps_presentation_labels_to_semantic_fields() {
    assert_eq!(Field::from_label("Customer Name"), Some(Field::CustomerName));
    assert_eq!(Field::from_label("Price per Unit"), Some(Field::PricePerUnit));
    assert_eq!(Field::CustomerRegion.label(), "Customer Region");
    assert_eq!(Field::CustomerRegion.name(), "customer_region");
}

#[test]
fn unknown_labels_resolve_to_none() {
    assert_eq!(Field::from_label("customer_name"), None);
    assert_eq!(Field::from_name("Customer Name"), None);
}

#[test]
fn numeric_columns_match_the_dataset() {
    for field in [
        Field::Quantity,
        Field::PricePerUnit,
        Field::DiscountPercentage,
        Field::TotalAmount,
        Field::FinalAmount,
        Field::Age,
    ] {
        assert!(field.is_numeric(), "{field:?} should be numeric");
    }
    assert!(!Field::Tags.is_numeric());
    assert!(!Field::CustomerName.is_numeric());
}

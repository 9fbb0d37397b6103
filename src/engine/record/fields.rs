/// Semantic fields of a sale record.
///
/// The dataset and the presentation layer speak in human-readable labels
/// ("Customer Name"); filters and store adapters speak in internal names
/// ("customer_name"). The mapping is table-driven and bidirectional so the
/// two vocabularies cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TransactionId,
    Date,
    CustomerId,
    CustomerName,
    PhoneNumber,
    Gender,
    Age,
    CustomerRegion,
    CustomerType,
    ProductId,
    ProductName,
    Brand,
    ProductCategory,
    Tags,
    Quantity,
    PricePerUnit,
    DiscountPercentage,
    TotalAmount,
    FinalAmount,
    PaymentMethod,
    OrderStatus,
    DeliveryType,
    StoreId,
    StoreLocation,
    SalespersonId,
    EmployeeName,
}

/// (field, internal name, external label), one row per schema field.
pub const FIELDS: &[(Field, &str, &str)] = &[
    (Field::TransactionId, "transaction_id", "Transaction ID"),
    (Field::Date, "date", "Date"),
    (Field::CustomerId, "customer_id", "Customer ID"),
    (Field::CustomerName, "customer_name", "Customer Name"),
    (Field::PhoneNumber, "phone_number", "Phone Number"),
    (Field::Gender, "gender", "Gender"),
    (Field::Age, "age", "Age"),
    (Field::CustomerRegion, "customer_region", "Customer Region"),
    (Field::CustomerType, "customer_type", "Customer Type"),
    (Field::ProductId, "product_id", "Product ID"),
    (Field::ProductName, "product_name", "Product Name"),
    (Field::Brand, "brand", "Brand"),
    (Field::ProductCategory, "product_category", "Product Category"),
    (Field::Tags, "tags", "Tags"),
    (Field::Quantity, "quantity", "Quantity"),
    (Field::PricePerUnit, "price_per_unit", "Price per Unit"),
    (
        Field::DiscountPercentage,
        "discount_percentage",
        "Discount Percentage",
    ),
    (Field::TotalAmount, "total_amount", "Total Amount"),
    (Field::FinalAmount, "final_amount", "Final Amount"),
    (Field::PaymentMethod, "payment_method", "Payment Method"),
    (Field::OrderStatus, "order_status", "Order Status"),
    (Field::DeliveryType, "delivery_type", "Delivery Type"),
    (Field::StoreId, "store_id", "Store ID"),
    (Field::StoreLocation, "store_location", "Store Location"),
    (Field::SalespersonId, "salesperson_id", "Salesperson ID"),
    (Field::EmployeeName, "employee_name", "Employee Name"),
];

impl Field {
    /// Internal snake_case name.
    pub fn name(self) -> &'static str {
        FIELDS
            .iter()
            .find(|(f, _, _)| *f == self)
            .map(|(_, name, _)| *name)
            .unwrap_or("")
    }

    /// Human-readable dataset label.
    pub fn label(self) -> &'static str {
        FIELDS
            .iter()
            .find(|(f, _, _)| *f == self)
            .map(|(_, _, label)| *label)
            .unwrap_or("")
    }

    pub fn from_name(name: &str) -> Option<Field> {
        FIELDS
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(f, _, _)| *f)
    }

    pub fn from_label(label: &str) -> Option<Field> {
        FIELDS
            .iter()
            .find(|(_, _, l)| *l == label)
            .map(|(f, _, _)| *f)
    }

    /// Dataset columns carrying numeric values. Blank cells become null when
    /// the CSV export is converted.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Field::Quantity
                | Field::PricePerUnit
                | Field::DiscountPercentage
                | Field::TotalAmount
                | Field::FinalAmount
                | Field::Age
        )
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::time::TimeParser;

/// One row of the sales dataset, immutable once loaded.
///
/// Serde renames follow the external dataset labels so the flat JSON file and
/// API responses round-trip without a translation layer. Numeric fields are
/// nullable; the date is kept as raw text because an unparsable date has
/// defined filter and sort semantics and must not be rejected at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "Transaction ID", default)]
    pub transaction_id: String,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "Customer ID", default)]
    pub customer_id: String,
    #[serde(rename = "Customer Name", default)]
    pub customer_name: String,
    #[serde(rename = "Phone Number", default)]
    pub phone_number: String,
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Age", default)]
    pub age: Option<f64>,
    #[serde(rename = "Customer Region", default)]
    pub customer_region: String,
    #[serde(rename = "Customer Type", default)]
    pub customer_type: String,
    #[serde(rename = "Product ID", default)]
    pub product_id: String,
    #[serde(rename = "Product Name", default)]
    pub product_name: String,
    #[serde(rename = "Brand", default)]
    pub brand: String,
    #[serde(rename = "Product Category", default)]
    pub product_category: String,
    #[serde(rename = "Tags", default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<f64>,
    #[serde(rename = "Price per Unit", default)]
    pub price_per_unit: Option<f64>,
    #[serde(rename = "Discount Percentage", default)]
    pub discount_percentage: Option<f64>,
    #[serde(rename = "Total Amount", default)]
    pub total_amount: Option<f64>,
    #[serde(rename = "Final Amount", default)]
    pub final_amount: Option<f64>,
    #[serde(rename = "Payment Method", default)]
    pub payment_method: String,
    #[serde(rename = "Order Status", default)]
    pub order_status: String,
    #[serde(rename = "Delivery Type", default)]
    pub delivery_type: String,
    #[serde(rename = "Store ID", default)]
    pub store_id: String,
    #[serde(rename = "Store Location", default)]
    pub store_location: String,
    #[serde(rename = "Salesperson ID", default)]
    pub salesperson_id: String,
    #[serde(rename = "Employee Name", default)]
    pub employee_name: String,
}

impl SaleRecord {
    /// Chronological value of the record, if the raw date parses.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        TimeParser::parse_datetime(self.date.as_deref()?)
    }

    /// Discount implied by the stored totals. The stored `final_amount` is
    /// trusted, never recomputed from the discount percentage.
    pub fn discount(&self) -> f64 {
        self.total_amount.unwrap_or(0.0) - self.final_amount.unwrap_or(0.0)
    }
}

/// Tags arrive as a JSON list (indexed exports) or as one comma-joined string
/// (flat CSV-derived files). Both collapse to a list of trimmed atoms.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTags {
        Joined(String),
        List(Vec<String>),
    }

    let atoms = |s: &str| {
        s.split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
    };

    Ok(match Option::<RawTags>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(RawTags::Joined(s)) => atoms(&s),
        Some(RawTags::List(list)) => list.iter().flat_map(|s| atoms(s)).collect(),
    })
}

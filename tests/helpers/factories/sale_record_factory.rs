use crate::engine::record::SaleRecord;
use rand::Rng;
use serde_json::{Value, json};
use std::collections::HashMap;

pub struct SaleRecordFactory {
    params: HashMap<String, Value>,
}

impl SaleRecordFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("transaction_id".into(), json!("TXN-0001"));
        params.insert("date".into(), json!("2024-03-05"));
        params.insert("customer_name".into(), json!("Asha Rao"));
        params.insert("phone_number".into(), json!("9812345678"));
        params.insert("gender".into(), json!("Female"));
        params.insert("age".into(), json!(30.0));
        params.insert("customer_region".into(), json!("South"));
        params.insert("product_category".into(), json!("Electronics"));
        params.insert("tags".into(), json!(["standard"]));
        params.insert("quantity".into(), json!(2.0));
        params.insert("total_amount".into(), json!(200.0));
        params.insert("final_amount".into(), json!(180.0));
        params.insert("payment_method".into(), json!("UPI"));
        Self { params }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn create(self) -> SaleRecord {
        SaleRecord {
            transaction_id: self.text("transaction_id"),
            date: self.opt_text("date"),
            customer_name: self.text("customer_name"),
            phone_number: self.text("phone_number"),
            gender: self.text("gender"),
            age: self.number("age"),
            customer_region: self.text("customer_region"),
            product_category: self.text("product_category"),
            tags: self.tags(),
            quantity: self.number("quantity"),
            total_amount: self.number("total_amount"),
            final_amount: self.number("final_amount"),
            payment_method: self.text("payment_method"),
            ..Default::default()
        }
    }

    /// Records with distinct transaction ids and randomized quantities.
    pub fn create_list(self, count: usize) -> Vec<SaleRecord> {
        let mut rng = rand::thread_rng();
        (1..=count)
            .map(|i| {
                let mut record = Self {
                    params: self.params.clone(),
                }
                .create();
                record.transaction_id = format!("TXN-{i:04}");
                record.quantity = Some(rng.gen_range(1..=10) as f64);
                record
            })
            .collect()
    }

    fn text(&self, key: &str) -> String {
        self.params
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    fn opt_text(&self, key: &str) -> Option<String> {
        self.params
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.params.get(key).and_then(Value::as_f64)
    }

    fn tags(&self) -> Vec<String> {
        self.params
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub mod fields;
pub mod sale;

#[cfg(test)]
mod fields_test;

pub use fields::Field;
pub use sale::SaleRecord;

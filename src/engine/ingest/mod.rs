pub mod csv_convert;
pub mod json_loader;

#[cfg(test)]
mod json_loader_test;

pub use json_loader::load_records;

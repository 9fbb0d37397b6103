pub use super::factories::{RawQueryFactory, SaleRecordFactory};

pub struct Factory;

impl Factory {
    pub fn sale() -> SaleRecordFactory {
        SaleRecordFactory::new()
    }

    pub fn raw_query() -> RawQueryFactory {
        RawQueryFactory::new()
    }
}

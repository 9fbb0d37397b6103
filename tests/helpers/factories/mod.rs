pub mod raw_query_factory;
pub mod sale_record_factory;

pub use raw_query_factory::RawQueryFactory;
pub use sale_record_factory::SaleRecordFactory;

pub mod errors;
pub mod ingest;
pub mod query;
pub mod record;
pub mod source;

pub use errors::*;

pub mod page_result;

pub use page_result::{ExternalRecord, PageResult};

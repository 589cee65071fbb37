pub mod error;
pub mod flat_file_store;
pub mod read_report;


pub use error::{Result, StoreError};
pub use flat_file_store::FlatFileStore;
pub use read_report::ReadReport;

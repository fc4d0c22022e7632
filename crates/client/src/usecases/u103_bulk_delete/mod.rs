pub mod executor;

pub use executor::{BulkDeleteExecutor, BulkDeleteReport, DeleteMode};

pub mod envelope;
pub mod error;
pub mod query;
pub mod rest_client;

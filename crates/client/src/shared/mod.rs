pub mod api;
pub mod bulk;
pub mod config;
pub mod list_utils;

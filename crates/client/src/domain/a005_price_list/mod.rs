pub mod service;

pub use service::PriceListService;

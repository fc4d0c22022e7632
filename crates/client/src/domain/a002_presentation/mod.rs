pub mod service;

pub use service::PresentationService;

pub mod service;

pub use service::PresentationFileService;

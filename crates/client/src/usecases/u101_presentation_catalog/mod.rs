pub mod loader;
pub mod view;

pub use loader::PresentationCatalogLoader;
pub use view::{compose, PresentationPrice, PresentationView};

pub mod loader;
pub mod view;

pub use loader::ProductCatalogLoader;
pub use view::{compose, ProductView};
